//! Flattens raw project items into Card records.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::error::{BurndownError, Result};
use crate::responses::{FieldValue, ProjectItem};
use crate::types::Card;

pub const STATUS_FIELD: &str = "Status";
pub const ESTIMATE_FIELD: &str = "Estimate (Hours)";
const PRIORITY_FIELD: &str = "Priority";
const IMPACT_FIELD: &str = "Impact";

const TITLE_FALLBACK: &str = "no title";
const NO_ESTIMATE: &str = "0";

pub fn normalize_items(items: Vec<ProjectItem>) -> Result<Vec<Card>> {
    items.into_iter().map(normalize_item).collect()
}

/// Collapse one raw item into a Card. Fails when the item carries no
/// Status entry, or when a status timestamp or iteration start date does
/// not parse.
pub fn normalize_item(item: ProjectItem) -> Result<Card> {
    let content = item.content.unwrap_or_default();
    let title = content
        .title
        .unwrap_or_else(|| TITLE_FALLBACK.to_string());

    // Content-level assignees only seed the list; the board's own user
    // field entry is canonical when present.
    let mut assignees: Vec<String> = content
        .assignees
        .map(|users| users.nodes.into_iter().map(|u| u.login).collect())
        .unwrap_or_default();

    let mut status: Option<(String, DateTime<Utc>)> = None;
    let mut iteration: Option<(String, NaiveDate)> = None;
    let mut estimate_hours = NO_ESTIMATE.to_string();
    let mut priority = None;
    let mut impact = None;

    for value in item.field_values.nodes {
        match value {
            FieldValue::SingleSelect {
                name,
                updated_at,
                field,
            } => match field.name.as_str() {
                STATUS_FIELD => {
                    let at = updated_at.parse::<DateTime<Utc>>().map_err(|_| {
                        BurndownError::InvalidTimestamp {
                            item_id: item.id.clone(),
                            value: updated_at,
                        }
                    })?;
                    status = Some((name, at));
                }
                PRIORITY_FIELD => priority = Some(name),
                IMPACT_FIELD => impact = Some(name),
                _ => {}
            },
            FieldValue::Iteration {
                iteration_id,
                start_date,
                duration,
                ..
            } => {
                let start = NaiveDate::parse_from_str(&start_date, "%Y-%m-%d").map_err(|_| {
                    BurndownError::InvalidStartDate {
                        item_id: item.id.clone(),
                        value: start_date,
                    }
                })?;
                iteration = Some((iteration_id, start + Duration::days(duration)));
            }
            FieldValue::Users { users, .. } => {
                assignees = users.nodes.into_iter().map(|u| u.login).collect();
            }
            FieldValue::Number { number, field } => {
                if field.name == ESTIMATE_FIELD {
                    // negative estimates fall back to zero
                    estimate_hours = if number >= 0.0 {
                        format!("{number:?}")
                    } else {
                        NO_ESTIMATE.to_string()
                    };
                }
            }
            FieldValue::Other(_) => {}
        }
    }

    let (status_name, status_updated_at) =
        status.ok_or_else(|| BurndownError::MissingStatus {
            item_id: item.id.clone(),
        })?;

    let (iteration_id, iteration_end) = match iteration {
        Some((id, end)) => (Some(id), Some(end)),
        None => (None, None),
    };

    Ok(Card {
        id: item.id,
        title,
        assignees,
        status_name,
        status_updated_at,
        iteration_id,
        iteration_end,
        estimate_hours,
        priority,
        impact,
    })
}
