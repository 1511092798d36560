//! The `/mock` API: fixture files plus the in-memory device.

use std::path::Path;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use geomon_domain::settings::{SettingsConfig, SettingsPatch};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use crate::error::MockError;
use crate::state::MockState;

/// Body of every command response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBody {
    pub status: String,
    pub message: String,
}

impl StatusBody {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Routes served under `/mock`; anything not matched is looked up in
/// `fixtures_dir` (`data.json`, `aggregated_history.json`, `status.json`).
pub fn routes(fixtures_dir: &Path) -> Router<MockState> {
    Router::new()
        .route("/settings", get(get_settings).post(save_settings))
        .route("/logs", get(get_logs))
        .route("/logs/clear", post(clear_logs))
        .route("/reboot", post(reboot))
        .route("/factory_reset", post(factory_reset))
        .fallback_service(ServeDir::new(fixtures_dir))
}

/// `GET /mock/settings`
async fn get_settings(State(device): State<MockState>) -> Json<SettingsConfig> {
    Json(device.settings())
}

/// `POST /mock/settings`
async fn save_settings(
    State(device): State<MockState>,
    body: Result<Json<SettingsPatch>, JsonRejection>,
) -> Result<Json<StatusBody>, MockError> {
    let Json(patch) = body?;
    let updated = device.apply(&patch)?;
    tracing::info!(settings = ?updated, "settings saved");
    Ok(Json(StatusBody::ok("Settings saved.")))
}

/// `GET /mock/logs`
async fn get_logs(State(device): State<MockState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        device.logs(),
    )
}

/// `POST /mock/logs/clear`
async fn clear_logs(State(device): State<MockState>) -> Json<StatusBody> {
    device.clear_logs();
    Json(StatusBody::ok("Logs cleared."))
}

/// `POST /mock/reboot`
async fn reboot(State(device): State<MockState>) -> Json<StatusBody> {
    device.log("Reboot requested");
    tracing::info!("mock device reboot requested");
    Json(StatusBody::ok("Rebooting..."))
}

/// `POST /mock/factory_reset`
async fn factory_reset(State(device): State<MockState>) -> Json<StatusBody> {
    device.factory_reset();
    tracing::info!("mock device factory reset");
    Json(StatusBody::ok("Factory reset successful. Rebooting..."))
}
