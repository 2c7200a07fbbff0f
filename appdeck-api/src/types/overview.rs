//! Per-app overview types

use serde::{Deserialize, Serialize};

/// Overview of a single app.
///
/// Same shape as `AppSummary`, but fetched in its own round trip and
/// not guaranteed to agree with the inventory row already in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppOverview {
    /// Unique app identifier
    pub app_id: String,
    /// Display name
    pub app_name: String,
    /// Connector identifiers the app was discovered through
    pub app_sources: Vec<String>,
    /// Inventory category
    pub category: String,
}

/// Response of `GET /api/v1/app-service/get-app-overview/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAppOverviewResponse {
    /// The requested app's overview
    pub app_overview: AppOverview,
}

/// Response of `GET /api/v1/app-service/get-app-overview-users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAppUsersResponse {
    /// Display names of the app's users
    pub app_users: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_response_deserializes_camel_case() {
        let body = r#"{
            "appOverview": {
                "appId": "notion.so",
                "appName": "Notion",
                "appSources": ["Okta"],
                "category": "Productivity"
            }
        }"#;
        let response: GetAppOverviewResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.app_overview.app_name, "Notion");
        assert_eq!(response.app_overview.category, "Productivity");
    }

    #[test]
    fn users_response_deserializes_camel_case() {
        let body = r#"{ "appUsers": ["Ada Lovelace", "Grace Hopper"] }"#;
        let response: GetAppUsersResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.app_users.len(), 2);
    }

    #[test]
    fn empty_user_list_is_valid() {
        let body = r#"{ "appUsers": [] }"#;
        let response: GetAppUsersResponse = serde_json::from_str(body).unwrap();
        assert!(response.app_users.is_empty());
    }
}
