//! Shared GraphQL response types used across commands.

use serde::Deserialize;

/// Pagination info for cursor-based pagination.
#[derive(Deserialize, Debug, Clone)]
pub struct PageInfo {
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
    #[serde(rename = "endCursor")]
    pub end_cursor: Option<String>,
}

/// Generic node list wrapper.
#[derive(Deserialize, Debug)]
pub struct Connection<T> {
    pub nodes: Vec<T>,
}

/// User reference inside assignee and user-field lists.
#[derive(Deserialize, Debug)]
pub struct UserNode {
    pub login: String,
}

/// Common field descriptor carried by every typed field value.
#[derive(Deserialize, Debug)]
pub struct FieldRef {
    pub name: String,
}

/// The polymorphic field-value union of a ProjectV2 item, closed over the
/// kinds the items query requests. Inline fragments the query does not
/// cover come back as empty objects and land in `Other`.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum FieldValue {
    Iteration {
        #[serde(rename = "iterationId")]
        iteration_id: String,
        #[serde(rename = "startDate")]
        start_date: String,
        duration: i64,
        field: FieldRef,
    },
    SingleSelect {
        name: String,
        #[serde(rename = "updatedAt")]
        updated_at: String,
        field: FieldRef,
    },
    Users {
        users: Connection<UserNode>,
        field: FieldRef,
    },
    Number {
        number: f64,
        field: FieldRef,
    },
    Other(serde_json::Value),
}

/// Item content: draft issues carry only a title, issues and pull
/// requests also carry content-level assignees.
#[derive(Deserialize, Debug, Default)]
pub struct Content {
    pub title: Option<String>,
    #[serde(default)]
    pub assignees: Option<Connection<UserNode>>,
}

/// One raw project item as returned by the items query.
#[derive(Deserialize, Debug)]
pub struct ProjectItem {
    pub id: String,
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(rename = "fieldValues")]
    pub field_values: Connection<FieldValue>,
}
