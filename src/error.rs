use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Failures inside the outbound dispatch pipeline. These carry upstream
/// detail for server-side logs; none of it reaches the client.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("invalid image payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("malformed data URL: missing base64 payload")]
    MalformedDataUrl,

    #[error("telegram request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("telegram API returned {status}: {body}")]
    Upstream {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Errors surfaced at the endpoint boundary.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("All fields are required: userId, planType, timestamp, and paymentScreenshot")]
    MissingFields,

    #[error("No file uploaded")]
    MissingFile,

    #[error("Invalid multipart body")]
    InvalidMultipart,

    #[error("{message}")]
    Dispatch {
        message: &'static str,
        #[source]
        source: DispatchError,
    },
}

impl RelayError {
    /// Wrap a pipeline failure with the fixed message the client will see.
    pub fn dispatch(message: &'static str, source: DispatchError) -> Self {
        Self::Dispatch { message, source }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let request_id = Uuid::new_v4().to_string();

        let status = match &self {
            RelayError::MissingFields | RelayError::MissingFile | RelayError::InvalidMultipart => {
                StatusCode::BAD_REQUEST
            }
            RelayError::Dispatch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Upstream detail stays in the logs; the client gets the fixed message.
        if let RelayError::Dispatch { source, .. } = &self {
            tracing::error!(
                error = %source,
                request_id = %request_id,
                "Dispatch failed"
            );
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
