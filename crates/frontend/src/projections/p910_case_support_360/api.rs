use crate::shared::api_utils::api_base;
use contracts::projections::p910_case_support_360::dto::Support360Snapshot;
use gloo_net::http::Request;
use serde_json::{json, Value};

/// Запросить агрегированный снимок Support 360 по обращению
///
/// On failure the raw error payload is returned for normalization: the
/// response body parsed as JSON when the service sent one, otherwise a
/// synthesized `{ "message": ... }` value for transport-level errors.
pub async fn fetch_support360(case_id: &str) -> Result<Support360Snapshot, Value> {
    let url = format!("{}/api/p910-case-support/{}", api_base(), case_id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| json!({ "message": format!("Request failed: {}", e) }))?;

    if !response.ok() {
        let status = response.status();
        let payload = response
            .json::<Value>()
            .await
            .unwrap_or_else(|_| json!({ "message": format!("HTTP error: {}", status) }));
        return Err(payload);
    }

    response
        .json::<Support360Snapshot>()
        .await
        .map_err(|e| json!({ "message": format!("Failed to parse response: {}", e) }))
}
