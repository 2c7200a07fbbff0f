//! Inventory list types

use serde::{Deserialize, Serialize};

/// One row of the app inventory.
///
/// `app_id` doubles as the row key and as the path parameter for the
/// per-app overview endpoints. It is a brand-domain token (for example
/// `slack.com`), not a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSummary {
    /// Unique app identifier
    pub app_id: String,
    /// Display name
    pub app_name: String,
    /// Connector identifiers the app was discovered through
    pub app_sources: Vec<String>,
    /// Inventory category
    pub category: String,
}

/// Body of `PUT /api/v1/app-service/get-apps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAppsRequest {
    /// Zero-based page index
    pub page_number: u32,
    /// Rows per page
    pub page_size: u32,
}

/// Response of `PUT /api/v1/app-service/get-apps`.
///
/// Each response replaces the prior page wholesale; rows are never
/// merged or appended client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAppsResponse {
    /// Rows for the requested page
    pub app_rows: Vec<AppSummary>,
    /// Total row count across all pages
    pub total_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_apps_request_wire_shape() {
        let req = GetAppsRequest {
            page_number: 2,
            page_size: 25,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["pageNumber"], 2);
        assert_eq!(json["pageSize"], 25);
    }

    #[test]
    fn get_apps_response_deserializes_camel_case() {
        let body = r#"{
            "appRows": [
                {
                    "appId": "slack.com",
                    "appName": "Slack",
                    "appSources": ["APP_SOURCE_MSFT", "Okta"],
                    "category": "Collaboration"
                }
            ],
            "totalCount": 163
        }"#;
        let response: GetAppsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.total_count, 163);
        assert_eq!(response.app_rows.len(), 1);
        assert_eq!(response.app_rows[0].app_id, "slack.com");
        assert_eq!(response.app_rows[0].app_sources.len(), 2);
    }
}
