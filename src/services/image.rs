use crate::error::DispatchError;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// A screenshot ready for upload: either decoded bytes or a reference the
/// Telegram API can fetch on its own (URL or file id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePayload {
    Bytes(Vec<u8>),
    Reference(String),
}

/// Turn the inbound `paymentScreenshot` value into an upload payload.
///
/// Data URLs (`data:image/...;base64,<payload>`) are decoded to bytes; the
/// declared image subtype is not inspected. Anything else passes through
/// unchanged as a reference.
pub fn normalize(input: &str) -> Result<ImagePayload, DispatchError> {
    if !input.starts_with("data:image") {
        return Ok(ImagePayload::Reference(input.to_string()));
    }

    let (_, encoded) = input
        .split_once(',')
        .ok_or(DispatchError::MalformedDataUrl)?;
    let bytes = STANDARD.decode(encoded)?;

    Ok(ImagePayload::Bytes(bytes))
}
