//! Cursor-paginated fetching of project items.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::client::GitHubClient;
use crate::error::Result;
use crate::responses::{PageInfo, ProjectItem};

const PROJECT_ITEMS_QUERY: &str = r#"
query ProjectItems($projectId: ID!, $cursor: String) {
    node(id: $projectId) {
        ... on ProjectV2 {
            items(first: 50, after: $cursor) {
                pageInfo {
                    hasNextPage
                    endCursor
                }
                nodes {
                    id
                    fieldValues(first: 20) {
                        nodes {
                            ... on ProjectV2ItemFieldSingleSelectValue {
                                name
                                updatedAt
                                field {
                                    ... on ProjectV2FieldCommon {
                                        name
                                    }
                                }
                            }
                            ... on ProjectV2ItemFieldNumberValue {
                                number
                                field {
                                    ... on ProjectV2FieldCommon {
                                        name
                                    }
                                }
                            }
                            ... on ProjectV2ItemFieldIterationValue {
                                iterationId
                                startDate
                                duration
                                field {
                                    ... on ProjectV2FieldCommon {
                                        name
                                    }
                                }
                            }
                            ... on ProjectV2ItemFieldUserValue {
                                users(first: 10) {
                                    nodes {
                                        login
                                    }
                                }
                                field {
                                    ... on ProjectV2FieldCommon {
                                        name
                                    }
                                }
                            }
                        }
                    }
                    content {
                        ... on DraftIssue {
                            title
                        }
                        ... on Issue {
                            title
                            assignees(first: 10) {
                                nodes {
                                    login
                                }
                            }
                        }
                        ... on PullRequest {
                            title
                            assignees(first: 10) {
                                nodes {
                                    login
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
"#;

#[derive(Deserialize)]
struct ProjectItemsResponse {
    node: Option<ProjectNode>,
}

#[derive(Deserialize)]
struct ProjectNode {
    items: ItemsPage,
}

/// One page of project items plus its continuation info.
#[derive(Deserialize)]
pub struct ItemsPage {
    pub nodes: Vec<ProjectItem>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
}

impl ItemsPage {
    fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            page_info: PageInfo {
                has_next_page: false,
                end_cursor: None,
            },
        }
    }
}

// A missing node means the id did not resolve to a ProjectV2; treated as
// an empty board rather than an error.
fn page_from_response(response: ProjectItemsResponse) -> ItemsPage {
    response
        .node
        .map(|n| n.items)
        .unwrap_or_else(ItemsPage::empty)
}

/// Source of item pages, split out so the cursor loop can be tested
/// against scripted pages.
#[async_trait]
pub trait ItemSource {
    async fn fetch_page(&self, project_id: &str, cursor: Option<String>) -> Result<ItemsPage>;
}

#[async_trait]
impl ItemSource for GitHubClient {
    async fn fetch_page(&self, project_id: &str, cursor: Option<String>) -> Result<ItemsPage> {
        let variables = json!({
            "projectId": project_id,
            "cursor": cursor
        });

        let response: ProjectItemsResponse =
            self.query(PROJECT_ITEMS_QUERY, Some(variables)).await?;

        Ok(page_from_response(response))
    }
}

/// Fetch every item of the project, strictly page by page, preserving
/// the API's order.
pub async fn fetch_all_items<S: ItemSource>(
    source: &S,
    project_id: &str,
) -> Result<Vec<ProjectItem>> {
    let mut items = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = source.fetch_page(project_id, cursor).await?;
        items.extend(page.nodes);

        if !page.page_info.has_next_page {
            break;
        }

        match page.page_info.end_cursor {
            Some(next) => cursor = Some(next),
            // a page claiming more data without a cursor cannot be followed
            None => break,
        }
    }

    Ok(items)
}
