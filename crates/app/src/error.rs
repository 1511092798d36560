//! Errors raised while talking to the device or drawing results.

use serde::Deserialize;

/// `{status, message}` body the device sends with settings and command responses.
#[derive(Debug, Deserialize)]
pub(crate) struct MessageBody {
    #[serde(default)]
    pub(crate) message: Option<String>,
}

impl MessageBody {
    /// The non-blank `message` of `body`, if `body` is such a JSON object.
    pub(crate) fn message_of(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .filter(|message| !message.trim().is_empty())
    }
}

/// Failure of a device API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, connection dropped, …).
    #[error("request failed: {0}")]
    Transport(String),
    /// The device answered with a non-success status.
    #[error("device rejected the request with HTTP {status}")]
    Rejected {
        status: u16,
        /// Human-readable reason from the JSON error body, when there was one.
        message: Option<String>,
    },
    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// A non-success response with status `status` and raw body `body`.
    ///
    /// The reason is taken from a JSON `message` field; any other body
    /// (not JSON, no `message`, blank `message`) leaves it unset so callers
    /// fall back to their generic text.
    #[must_use]
    pub fn rejected(status: u16, body: &str) -> Self {
        Self::Rejected {
            status,
            message: MessageBody::message_of(body),
        }
    }

    /// The device-supplied reason of a rejection, if any.
    #[must_use]
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }
}

/// The chart surface could not be drawn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to render chart: {0}")]
pub struct RenderError(pub String);

/// Anything that can make a polling refresh fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
