//! HTTP client for the device API, wrapping `gloo-net`.

use geomon_app::error::ApiError;
use geomon_app::ports::{DeviceApi, SaveReceipt};
use geomon_domain::endpoint::Endpoints;
use geomon_domain::history::HistoryPoint;
use geomon_domain::settings::SettingsConfig;
use geomon_domain::snapshot::Snapshot;
use geomon_domain::status::StatusInfo;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

fn decode(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

/// Check the HTTP response status and extract the device's reason if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::rejected(status, &body))
}

/// [`DeviceApi`] over `fetch`, addressing the endpoints resolved at startup.
#[derive(Debug, Clone)]
pub struct HttpDeviceApi {
    endpoints: Endpoints,
}

impl HttpDeviceApi {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    async fn get(&self, url: &str) -> Result<Response, ApiError> {
        let resp = Request::get(url).send().await.map_err(transport)?;
        check_response(resp).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        self.get(url).await?.json().await.map_err(decode)
    }

    async fn post(&self, url: &str) -> Result<Response, ApiError> {
        let resp = Request::post(url).send().await.map_err(transport)?;
        check_response(resp).await
    }
}

impl DeviceApi for HttpDeviceApi {
    async fn snapshot(&self) -> Result<Snapshot, ApiError> {
        self.get_json(&self.endpoints.data()).await
    }

    async fn aggregated_history(&self) -> Result<Vec<HistoryPoint>, ApiError> {
        self.get_json(&self.endpoints.aggregated_history()).await
    }

    async fn status(&self) -> Result<StatusInfo, ApiError> {
        self.get_json(&self.endpoints.status()).await
    }

    async fn settings(&self) -> Result<SettingsConfig, ApiError> {
        self.get_json(&self.endpoints.settings()).await
    }

    async fn save_settings(&self, settings: SettingsConfig) -> Result<SaveReceipt, ApiError> {
        let request = Request::post(&self.endpoints.settings())
            .json(&settings)
            .map_err(decode)?;
        let resp = check_response(request.send().await.map_err(transport)?).await?;
        let body = resp.text().await.map_err(decode)?;
        SaveReceipt::from_body(&body)
    }

    async fn logs(&self) -> Result<String, ApiError> {
        self.get(&self.endpoints.logs())
            .await?
            .text()
            .await
            .map_err(decode)
    }

    async fn clear_logs(&self) -> Result<(), ApiError> {
        self.post(&self.endpoints.clear_logs()).await.map(drop)
    }

    async fn reboot(&self) -> Result<(), ApiError> {
        self.post(&self.endpoints.reboot()).await.map(drop)
    }

    async fn factory_reset(&self) -> Result<(), ApiError> {
        self.post(&self.endpoints.factory_reset()).await.map(drop)
    }
}
