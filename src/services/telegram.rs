use crate::{
    error::DispatchError,
    models::PaymentNotification,
    services::{
        format::payment_message,
        image::{self, ImagePayload},
    },
};
use reqwest::{multipart, Client};
use serde_json::Value;

/// Default Telegram Bot API base URL.
const DEFAULT_API_BASE: &str = "https://api.telegram.org";

const SCREENSHOT_CAPTION: &str = "Payment Screenshot";
const SCREENSHOT_FILENAME: &str = "payment_screenshot.png";
const SCREENSHOT_MIME: &str = "image/png";

/// Client for the two Bot API operations the relay consumes: `sendMessage`
/// and `sendPhoto`. One instance per process, shared across requests.
pub struct TelegramService {
    client: Client,
    token: String,
    chat_id: String,
    api_base: String,
}

impl TelegramService {
    pub fn new(token: &str, chat_id: &str) -> Self {
        Self::with_base_url(token, chat_id, DEFAULT_API_BASE)
    }

    /// Custom base URL, for pointing tests at a mock server.
    pub fn with_base_url(token: &str, chat_id: &str, api_base: &str) -> Self {
        Self {
            client: Client::new(),
            token: token.to_string(),
            chat_id: chat_id.to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.token, method)
    }

    /// Full dispatch for one notification: text first, then the screenshot.
    /// The photo call is only attempted after the text call succeeds; the
    /// upstream body of the photo call is returned verbatim.
    pub async fn dispatch(&self, notification: &PaymentNotification) -> Result<Value, DispatchError> {
        let photo = image::normalize(&notification.payment_screenshot)?;
        let text = payment_message(
            &notification.user_id,
            &notification.plan_type,
            &notification.timestamp,
        );

        self.send_message(&text).await?;
        let response = self
            .send_photo(photo, SCREENSHOT_FILENAME, SCREENSHOT_MIME)
            .await?;

        tracing::info!(
            user_id = %notification.user_id,
            plan_type = %notification.plan_type,
            "Payment notification delivered"
        );

        Ok(response)
    }

    /// `sendMessage` with HTML parse mode.
    pub async fn send_message(&self, text: &str) -> Result<Value, DispatchError> {
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&serde_json::json!({
                "chat_id": self.chat_id,
                "text": text,
                "parse_mode": "HTML",
            }))
            .send()
            .await?;

        Self::read_body(response).await
    }

    /// `sendPhoto` with a static caption. Decoded bytes go out as a file
    /// part; a reference goes out as a plain form field for the upstream to
    /// resolve itself.
    pub async fn send_photo(
        &self,
        photo: ImagePayload,
        filename: &str,
        content_type: &str,
    ) -> Result<Value, DispatchError> {
        let mut form = multipart::Form::new().text("chat_id", self.chat_id.clone());

        form = match photo {
            ImagePayload::Bytes(bytes) => {
                let part = multipart::Part::bytes(bytes)
                    .file_name(filename.to_string())
                    .mime_str(content_type)?;
                form.part("photo", part)
            }
            ImagePayload::Reference(reference) => form.text("photo", reference),
        };
        form = form.text("caption", SCREENSHOT_CAPTION);

        let response = self
            .client
            .post(self.method_url("sendPhoto"))
            .multipart(form)
            .send()
            .await?;

        Self::read_body(response).await
    }

    async fn read_body(response: reqwest::Response) -> Result<Value, DispatchError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DispatchError::Upstream { status, body });
        }

        Ok(response.json().await?)
    }
}
