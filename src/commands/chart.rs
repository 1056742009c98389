use std::path::Path;

use crate::burndown;
use crate::chart;
use crate::cli::ChartArgs;
use crate::client::GitHubClient;
use crate::config::Config;
use crate::error::Result;
use crate::normalize;
use crate::output;
use crate::project;

pub async fn generate(client: &GitHubClient, config: &Config, args: ChartArgs) -> Result<()> {
    let project_id = config.resolve_project(args.project.as_deref())?;

    let items = project::fetch_all_items(client, &project_id).await?;
    let cards = normalize::normalize_items(items)?;
    let data = burndown::aggregate(&cards)?;

    let path = chart::render(&data, Path::new(&args.out_dir))?;

    output::print_message(&format!(
        "Rendered burndown chart for {} cards to {}",
        cards.len(),
        path.display()
    ));

    Ok(())
}
