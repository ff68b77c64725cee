use crate::{
    error::RelayError,
    models::{DispatchResponse, SendMessageRequest},
    services::{ImagePayload, TelegramService},
};
use axum::{
    extract::{Multipart, State},
    Json,
};
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub telegram: Arc<TelegramService>,
    pub started_at: Instant,
}

/// `POST /send-message`: validate the four required fields, then run the
/// full text-plus-photo dispatch.
pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<DispatchResponse>, RelayError> {
    let notification = request.validate().ok_or(RelayError::MissingFields)?;

    let telegram_response = state
        .telegram
        .dispatch(&notification)
        .await
        .map_err(|e| RelayError::dispatch("Failed to send payment information", e))?;

    Ok(Json(DispatchResponse {
        success: true,
        telegram_response,
    }))
}

/// `POST /upload-photo`: photo-only variant. No text message is sent; the
/// uploaded file's own name and content type are forwarded upstream.
pub async fn upload_photo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<DispatchResponse>, RelayError> {
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| RelayError::InvalidMultipart)?
    {
        if field.name() != Some("photo") {
            continue;
        }
        let filename = field
            .file_name()
            .unwrap_or("payment_screenshot.png")
            .to_string();
        let content_type = field.content_type().unwrap_or("image/png").to_string();
        let bytes = field.bytes().await.map_err(|_| RelayError::InvalidMultipart)?;
        file = Some((filename, content_type, bytes.to_vec()));
    }

    let (filename, content_type, bytes) = file.ok_or(RelayError::MissingFile)?;

    let telegram_response = state
        .telegram
        .send_photo(ImagePayload::Bytes(bytes), &filename, &content_type)
        .await
        .map_err(|e| RelayError::dispatch("Failed to upload photo", e))?;

    Ok(Json(DispatchResponse {
        success: true,
        telegram_response,
    }))
}
