use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::error::{BurndownError, Result};

/// One normalized project item. Built once by the normalizer, immutable
/// afterwards.
#[derive(Serialize, Debug, Clone)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub assignees: Vec<String>,
    pub status_name: String,
    pub status_updated_at: DateTime<Utc>,
    pub iteration_id: Option<String>,
    pub iteration_end: Option<NaiveDate>,
    /// Estimate in hours, kept in its textual field form ("0" when unset)
    pub estimate_hours: String,
    pub priority: Option<String>,
    pub impact: Option<String>,
}

impl Card {
    /// Parse the textual estimate back into hours
    pub fn estimate(&self) -> Result<f64> {
        self.estimate_hours
            .parse::<f64>()
            .map_err(|_| BurndownError::InvalidEstimate {
                card_id: self.id.clone(),
                value: self.estimate_hours.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(estimate: &str) -> Card {
        Card {
            id: "PVTI_1".to_string(),
            title: "A card".to_string(),
            assignees: vec![],
            status_name: "Backlog".to_string(),
            status_updated_at: "2024-07-20T10:00:00Z".parse().unwrap(),
            iteration_id: None,
            iteration_end: None,
            estimate_hours: estimate.to_string(),
            priority: None,
            impact: None,
        }
    }

    #[test]
    fn test_estimate_parses_textual_value() {
        assert_eq!(card("10.0").estimate().unwrap(), 10.0);
        assert_eq!(card("0").estimate().unwrap(), 0.0);
    }

    #[test]
    fn test_estimate_parse_failure_names_the_card() {
        let err = card("ten").estimate().unwrap_err();
        assert!(matches!(
            err,
            BurndownError::InvalidEstimate { ref card_id, ref value }
                if card_id == "PVTI_1" && value == "ten"
        ));
    }
}
