use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Fallback text when the backend gives us nothing readable.
const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Conflict,
    /// Authentication failed or was rejected (invalid credentials, bad token).
    Unauthorized,
    Forbidden,
    /// The request never produced an HTTP response.
    Network,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured error for every failed API interaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Conflict, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    /// Build an error from a non-success HTTP response.
    ///
    /// Understands the backend's `{"detail": "..."}` body, its 422 form
    /// `{"detail": [{"loc": [...], "msg": "..."}]}`, and a serialized
    /// `AppError`. Anything else keeps the status-derived kind with a
    /// generic message.
    pub fn from_response(status: u16, body: &str) -> Self {
        if let Ok(err) = serde_json::from_str::<Self>(body) {
            return err;
        }

        let kind = kind_for_status(status);
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("detail").cloned());

        match detail {
            Some(Value::String(message)) => Self::new(kind, message),
            Some(Value::Array(items)) => {
                let field_errors = parse_detail_items(&items);
                let message = field_errors
                    .values()
                    .next()
                    .cloned()
                    .unwrap_or_else(|| "Validation failed".to_string());
                Self {
                    kind: AppErrorKind::ValidationError,
                    message,
                    field_errors,
                }
            }
            _ => Self::new(kind, GENERIC_MESSAGE),
        }
    }

    /// Text suitable for a toast. Empty messages fall back to a generic one.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::Network => "Could not reach the server. Please try again.".to_string(),
            _ if self.message.trim().is_empty() => GENERIC_MESSAGE.to_string(),
            _ => self.message.clone(),
        }
    }

    /// Collapse any failure of a sign-in attempt into an authentication error,
    /// keeping the most useful message.
    pub fn into_auth_error(self) -> Self {
        match self.kind {
            AppErrorKind::Unauthorized => self,
            AppErrorKind::Network => Self::unauthorized(self.friendly_message()),
            _ if self.message.trim().is_empty() || self.message == GENERIC_MESSAGE => {
                Self::unauthorized("Login failed. Please check your credentials.")
            }
            _ => Self::unauthorized(self.message),
        }
    }

    /// Registration failures are either field rejections from the server
    /// (`ValidationError`) or authentication errors.
    pub fn into_registration_error(self) -> Self {
        match self.kind {
            AppErrorKind::ValidationError => self,
            AppErrorKind::BadRequest | AppErrorKind::Conflict => Self {
                kind: AppErrorKind::ValidationError,
                message: self.message,
                field_errors: self.field_errors,
            },
            AppErrorKind::Unauthorized => self,
            _ => Self::unauthorized(self.friendly_message()),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self.kind {
            AppErrorKind::NotFound => 404,
            AppErrorKind::BadRequest => 400,
            AppErrorKind::ValidationError => 422,
            AppErrorKind::Conflict => 409,
            AppErrorKind::Unauthorized => 401,
            AppErrorKind::Forbidden => 403,
            AppErrorKind::Network => 503,
            AppErrorKind::InternalError => 500,
        }
    }
}

fn kind_for_status(status: u16) -> AppErrorKind {
    match status {
        400 => AppErrorKind::BadRequest,
        401 => AppErrorKind::Unauthorized,
        403 => AppErrorKind::Forbidden,
        404 => AppErrorKind::NotFound,
        409 => AppErrorKind::Conflict,
        422 => AppErrorKind::ValidationError,
        s if s >= 500 => AppErrorKind::InternalError,
        _ => AppErrorKind::BadRequest,
    }
}

/// Map `[{"loc": ["body", "email"], "msg": "..."}]` to `{"email": "..."}`.
/// The first message per field wins.
fn parse_detail_items(items: &[Value]) -> HashMap<String, String> {
    let mut field_errors = HashMap::new();
    for item in items {
        let field = item
            .get("loc")
            .and_then(Value::as_array)
            .and_then(|loc| loc.last())
            .and_then(Value::as_str);
        let msg = item.get("msg").and_then(Value::as_str);
        if let (Some(field), Some(msg)) = (field, msg) {
            field_errors
                .entry(field.to_string())
                .or_insert_with(|| msg.to_string());
        }
    }
    field_errors
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}
