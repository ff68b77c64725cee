pub mod format;
pub mod image;
pub mod telegram;

pub use format::payment_message;
pub use image::{normalize, ImagePayload};
pub use telegram::TelegramService;
