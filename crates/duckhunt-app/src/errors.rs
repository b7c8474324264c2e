//! Errors surfaced to the page by the session entry points.

use std::fmt;

use wasm_bindgen::JsValue;

/// Everything that can stop a session from starting or a call from landing.
/// None of these are fatal to the page; the caller shows a status message
/// and lets the player retry.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    NoWindow,
    NoDocument,
    /// A required DOM element is missing or has the wrong type.
    MissingElement(String),
    /// The canvas refused a 2D context or pixel access.
    Canvas(String),
    /// `navigator.mediaDevices` is unavailable (insecure context, old browser).
    NoMediaDevices,
    /// `getUserMedia` rejected, usually because permission was denied.
    CameraDenied(String),
    /// Start was requested before the hand detector reported ready.
    DetectorNotReady,
    /// The config or command JSON did not parse.
    BadJson(String),
    /// A call that needs a running session arrived before `start_session`.
    NotStarted,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoWindow => write!(f, "No window found"),
            SessionError::NoDocument => write!(f, "No document found"),
            SessionError::MissingElement(id) => write!(f, "No usable element with id '{id}'"),
            SessionError::Canvas(e) => write!(f, "Canvas error: {e}"),
            SessionError::NoMediaDevices => write!(f, "Camera access is not available in this browser"),
            SessionError::CameraDenied(e) => write!(f, "Camera unavailable: {e}"),
            SessionError::DetectorNotReady => write!(f, "Hand tracking is still loading"),
            SessionError::BadJson(e) => write!(f, "Malformed JSON: {e}"),
            SessionError::NotStarted => write!(f, "Session not started"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<SessionError> for JsValue {
    fn from(err: SessionError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        SessionError::BadJson(err.to_string())
    }
}

/// Readable text for a rejected JS promise or thrown value.
pub(crate) fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
