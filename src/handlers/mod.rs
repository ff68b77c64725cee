pub mod health;
pub mod notify;

pub use health::*;
pub use notify::*;

use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/send-message", post(send_message))
        .route("/upload-photo", post(upload_photo))
        .route("/health", get(health_check))
        .with_state(state)
}
