//! Endpoint resolution: live device API versus local mock fixtures.
//!
//! When the dashboard is served from a loopback host it talks to the
//! development fixture server under `/mock`, whose static resources carry a
//! `.json` suffix. Anywhere else it talks to the device under `/api`.

use serde::Deserialize;

/// Prefixes and host names used to pick between the live and mock APIs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Path prefix of the device API.
    pub live_prefix: String,
    /// Path prefix of the fixture API.
    pub mock_prefix: String,
    /// Suffix appended to static fixture resources.
    pub mock_suffix: String,
    /// Host names that select the fixture API.
    pub loopback_hosts: Vec<String>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            live_prefix: "/api".to_string(),
            mock_prefix: "/mock".to_string(),
            mock_suffix: ".json".to_string(),
            loopback_hosts: ["localhost", "127.0.0.1", "::1", "[::1]"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl EndpointConfig {
    /// Whether `host` is served by the fixture API.
    #[must_use]
    pub fn is_loopback(&self, host: &str) -> bool {
        self.loopback_hosts
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(host))
    }

    /// Pick the endpoint set for a page served from `host`.
    #[must_use]
    pub fn resolve(&self, host: &str) -> Endpoints {
        if self.is_loopback(host) {
            Endpoints {
                target: ApiTarget::Mock,
                prefix: self.mock_prefix.trim_end_matches('/').to_string(),
                suffix: self.mock_suffix.clone(),
            }
        } else {
            Endpoints {
                target: ApiTarget::Live,
                prefix: self.live_prefix.trim_end_matches('/').to_string(),
                suffix: String::new(),
            }
        }
    }
}

/// Which API the dashboard talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiTarget {
    Live,
    Mock,
}

/// Fully resolved request paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub target: ApiTarget,
    prefix: String,
    suffix: String,
}

impl Endpoints {
    /// Path of a static resource (gets the fixture suffix on the mock API).
    fn resource(&self, name: &str) -> String {
        format!("{}/{name}{}", self.prefix, self.suffix)
    }

    /// Path of a dynamic route (never suffixed).
    fn route(&self, name: &str) -> String {
        format!("{}/{name}", self.prefix)
    }

    #[must_use]
    pub fn data(&self) -> String {
        self.resource("data")
    }

    #[must_use]
    pub fn aggregated_history(&self) -> String {
        self.resource("aggregated_history")
    }

    #[must_use]
    pub fn status(&self) -> String {
        self.resource("status")
    }

    #[must_use]
    pub fn settings(&self) -> String {
        self.route("settings")
    }

    #[must_use]
    pub fn logs(&self) -> String {
        self.route("logs")
    }

    #[must_use]
    pub fn clear_logs(&self) -> String {
        self.route("logs/clear")
    }

    #[must_use]
    pub fn reboot(&self) -> String {
        self.route("reboot")
    }

    #[must_use]
    pub fn factory_reset(&self) -> String {
        self.route("factory_reset")
    }
}
