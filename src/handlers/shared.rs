use serde::{Deserialize, Serialize};

/// Envelope every endpoint answers with. `data` carries the payload (or the
/// echoed form on a rejected submit) and `message` carries whatever the user
/// should read: a validation error, a non-blocking warning, a deletion
/// receipt. A silent rejection has `success: false` and `message: null`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// A success the user should still be told about, e.g. a stored request
    /// whose start date fell on a weekend.
    pub fn success_with_message(data: Option<T>, message: &str) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.to_string()),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.to_string()),
        }
    }

    /// A rejection that echoes the annotated form back with its explanation.
    pub fn error_with_data(data: T, message: &str) -> Self {
        Self {
            success: false,
            data: Some(data),
            message: Some(message.to_string()),
        }
    }

    /// A rejection with no explanation. Blank required fields and a missing
    /// medical document fail this way.
    pub fn error_data_only(data: T) -> Self {
        Self {
            success: false,
            data: Some(data),
            message: None,
        }
    }
}
