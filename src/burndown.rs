//! Cumulative planned/completed burndown series.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::Result;
use crate::types::Card;

/// Status label that marks a card's effort as completed
pub const DONE_STATUS: &str = "Done";

#[derive(Debug)]
pub struct BurndownData {
    /// Cumulative estimated hours keyed by iteration end date
    pub planned: Vec<(NaiveDate, f64)>,
    /// Cumulative completed hours keyed by status-change date
    pub completed: Vec<(NaiveDate, f64)>,
}

/// Build both series. Pure over the card list: same input, same output.
pub fn aggregate(cards: &[Card]) -> Result<BurndownData> {
    let mut planned = BTreeMap::new();
    for card in cards {
        if let Some(end) = card.iteration_end {
            *planned.entry(end).or_insert(0.0) += card.estimate()?;
        }
    }

    // Every card keys a bucket by its status-change date; only "Done"
    // cards add hours to it.
    let mut completed = BTreeMap::new();
    for card in cards {
        let day = card.status_updated_at.date_naive();
        let hours = if card.status_name == DONE_STATUS {
            card.estimate()?
        } else {
            0.0
        };
        *completed.entry(day).or_insert(0.0) += hours;
    }

    Ok(BurndownData {
        planned: cumulative(planned),
        completed: cumulative(completed),
    })
}

fn cumulative(buckets: BTreeMap<NaiveDate, f64>) -> Vec<(NaiveDate, f64)> {
    let mut total = 0.0;
    buckets
        .into_iter()
        .map(|(date, hours)| {
            total += hours;
            (date, total)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BurndownError;

    fn card(
        id: &str,
        status: &str,
        updated: &str,
        iteration_end: Option<&str>,
        estimate: &str,
    ) -> Card {
        Card {
            id: id.to_string(),
            title: format!("Card {id}"),
            assignees: vec![],
            status_name: status.to_string(),
            status_updated_at: updated.parse().expect("timestamp fixture"),
            iteration_id: iteration_end.map(|_| "381c7c80".to_string()),
            iteration_end: iteration_end.map(|d| d.parse().expect("date fixture")),
            estimate_hours: estimate.to_string(),
            priority: None,
            impact: None,
        }
    }

    fn scenario() -> Vec<Card> {
        vec![
            card("a", "Done", "2024-07-25T12:00:00Z", Some("2024-07-30"), "10"),
            card(
                "b",
                "In Progress",
                "2024-07-26T12:00:00Z",
                Some("2024-07-30"),
                "5",
            ),
            card("c", "Done", "2024-08-01T12:00:00Z", Some("2024-08-13"), "8"),
        ]
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_three_card_scenario() {
        let data = aggregate(&scenario()).unwrap();

        assert_eq!(
            data.planned,
            vec![(date("2024-07-30"), 15.0), (date("2024-08-13"), 23.0)]
        );
        assert_eq!(
            data.completed,
            vec![
                (date("2024-07-25"), 10.0),
                (date("2024-07-26"), 10.0),
                (date("2024-08-01"), 18.0),
            ]
        );
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let cards = scenario();

        let first = aggregate(&cards).unwrap();
        let second = aggregate(&cards).unwrap();

        assert_eq!(first.planned, second.planned);
        assert_eq!(first.completed, second.completed);
    }

    #[test]
    fn test_series_are_monotonic() {
        let data = aggregate(&scenario()).unwrap();

        for series in [&data.planned, &data.completed] {
            for pair in series.windows(2) {
                assert!(pair[0].0 < pair[1].0, "dates must ascend");
                assert!(pair[0].1 <= pair[1].1, "cumulative hours must not drop");
            }
        }
    }

    #[test]
    fn test_cards_without_iteration_excluded_from_planned() {
        let cards = vec![
            card("a", "Done", "2024-07-25T12:00:00Z", Some("2024-07-30"), "10"),
            card("b", "Done", "2024-07-26T12:00:00Z", None, "99"),
        ];

        let data = aggregate(&cards).unwrap();

        assert_eq!(data.planned, vec![(date("2024-07-30"), 10.0)]);
        // the card still shows up in the completed series
        assert_eq!(data.completed.last().unwrap().1, 109.0);
    }

    #[test]
    fn test_non_done_cards_key_zero_buckets() {
        let cards = vec![
            card("a", "In Progress", "2024-07-20T08:00:00Z", None, "7"),
            card("b", "Done", "2024-07-22T08:00:00Z", None, "3"),
        ];

        let data = aggregate(&cards).unwrap();

        // the In Progress card creates its date bucket without adding hours
        assert_eq!(
            data.completed,
            vec![(date("2024-07-20"), 0.0), (date("2024-07-22"), 3.0)]
        );
    }

    #[test]
    fn test_unparsable_estimate_is_fatal() {
        let cards = vec![card(
            "a",
            "Done",
            "2024-07-25T12:00:00Z",
            Some("2024-07-30"),
            "ten",
        )];

        let err = aggregate(&cards).unwrap_err();

        assert!(matches!(
            err,
            BurndownError::InvalidEstimate { ref card_id, .. } if card_id == "a"
        ));
    }

    #[test]
    fn test_empty_input_yields_empty_series() {
        let data = aggregate(&[]).unwrap();

        assert!(data.planned.is_empty());
        assert!(data.completed.is_empty());
    }
}
