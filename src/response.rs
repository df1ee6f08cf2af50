//! Uniform executor response and output decoding.
//!
//! The fault-injection binary prints one JSON object on success:
//!
//! ```json
//! {"code":200,"success":true,"result":"7f3a..."}
//! {"code":46000,"success":false,"error":"illegal `size` parameter value"}
//! ```
//!
//! [`Response::decode`] turns that text into a [`Response`]; anything that is
//! not such an object is an error, never an empty success.

use crate::codes;
use crate::error::{ExecError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of one executor call. Exactly one of success or failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireResponse", into = "WireResponse")]
pub enum Response {
    Success { code: i32, result: Value },
    Failure { code: i32, message: String },
}

/// JSON shape shared with the fault-injection binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireResponse {
    code: i32,
    success: bool,
    #[serde(rename = "error", default, skip_serializing_if = "Option::is_none")]
    err: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    result: Value,
}

impl From<WireResponse> for Response {
    fn from(wire: WireResponse) -> Self {
        if wire.success {
            Response::Success {
                code: wire.code,
                result: wire.result,
            }
        } else {
            Response::Failure {
                code: wire.code,
                message: wire.err.unwrap_or_default(),
            }
        }
    }
}

impl From<Response> for WireResponse {
    fn from(resp: Response) -> Self {
        match resp {
            Response::Success { code, result } => WireResponse {
                code,
                success: true,
                err: None,
                result,
            },
            Response::Failure { code, message } => WireResponse {
                code,
                success: false,
                err: Some(message),
                result: Value::Null,
            },
        }
    }
}

impl From<ExecError> for Response {
    fn from(err: ExecError) -> Self {
        Response::Failure {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

impl Response {
    /// Successful response carrying `result`.
    pub fn success(result: impl Into<Value>) -> Self {
        Response::Success {
            code: codes::OK,
            result: result.into(),
        }
    }

    pub fn fail(code: i32, message: impl Into<String>) -> Self {
        Response::Failure {
            code,
            message: message.into(),
        }
    }

    /// Decode the captured output of a successful run.
    ///
    /// Surrounding whitespace is ignored. A failure object printed by the
    /// binary decodes into [`Response::Failure`] as-is. `code` and `success`
    /// are required; an object missing either is a decode failure.
    pub fn decode(output: &str) -> Result<Self> {
        serde_json::from_str(output.trim()).map_err(|e| ExecError::ResultDecodeFailed {
            reason: e.to_string(),
            output: output.to_string(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success { .. })
    }

    pub fn code(&self) -> i32 {
        match self {
            Response::Success { code, .. } | Response::Failure { code, .. } => *code,
        }
    }

    pub fn result(&self) -> Option<&Value> {
        match self {
            Response::Success { result, .. } => Some(result),
            Response::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Response::Success { .. } => None,
            Response::Failure { message, .. } => Some(message),
        }
    }

    /// Serialize to the single-line wire format.
    pub fn to_json(&self) -> String {
        // Serializing a Value tree with string keys cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_json())
    }
}
