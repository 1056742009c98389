use tabled::Tabled;

use crate::cli::CardListArgs;
use crate::client::GitHubClient;
use crate::config::Config;
use crate::error::Result;
use crate::normalize;
use crate::output::{self, status_colored, truncate};
use crate::project;
use crate::types::Card;

#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Updated")]
    updated: String,
    #[tabled(rename = "Assignees")]
    assignees: String,
    #[tabled(rename = "Iteration End")]
    iteration_end: String,
    #[tabled(rename = "Est (h)")]
    estimate: String,
}

impl From<&Card> for CardRow {
    fn from(card: &Card) -> Self {
        Self {
            title: truncate(&card.title, 50),
            status: status_colored(&card.status_name),
            updated: card.status_updated_at.format("%Y-%m-%d").to_string(),
            assignees: card.assignees.join(", "),
            iteration_end: card
                .iteration_end
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            estimate: card.estimate_hours.clone(),
        }
    }
}

pub async fn list(client: &GitHubClient, config: &Config, args: CardListArgs) -> Result<()> {
    let project_id = config.resolve_project(args.project.as_deref())?;

    let items = project::fetch_all_items(client, &project_id).await?;
    let cards = normalize::normalize_items(items)?;

    output::print_table(&cards, |card| CardRow::from(card));

    Ok(())
}
