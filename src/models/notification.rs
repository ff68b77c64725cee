use serde::{Deserialize, Serialize};

/// Inbound body of `POST /send-message`. Fields are optional at the wire
/// level so a missing key becomes a validation error instead of a serde
/// rejection, matching the descriptive 400 contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub user_id: Option<String>,
    pub plan_type: Option<String>,
    pub timestamp: Option<String>,
    pub payment_screenshot: Option<String>,
}

impl SendMessageRequest {
    /// All four fields present and non-empty, or nothing.
    pub fn validate(self) -> Option<PaymentNotification> {
        let require = |field: Option<String>| field.filter(|v| !v.is_empty());

        Some(PaymentNotification {
            user_id: require(self.user_id)?,
            plan_type: require(self.plan_type)?,
            timestamp: require(self.timestamp)?,
            payment_screenshot: require(self.payment_screenshot)?,
        })
    }
}

/// A validated payment notification, request-scoped.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentNotification {
    pub user_id: String,
    pub plan_type: String,
    pub timestamp: String,
    pub payment_screenshot: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> SendMessageRequest {
        SendMessageRequest {
            user_id: Some("user-42".to_string()),
            plan_type: Some("premium".to_string()),
            timestamp: Some("2024-05-01T10:00:00Z".to_string()),
            payment_screenshot: Some("data:image/png;base64,QUJD".to_string()),
        }
    }

    #[test]
    fn complete_request_validates() {
        let notification = full_request().validate().unwrap();
        assert_eq!(notification.user_id, "user-42");
        assert_eq!(notification.plan_type, "premium");
    }

    #[test]
    fn missing_field_fails_validation() {
        let mut request = full_request();
        request.plan_type = None;
        assert!(request.validate().is_none());
    }

    #[test]
    fn empty_field_fails_validation() {
        let mut request = full_request();
        request.user_id = Some(String::new());
        assert!(request.validate().is_none());
    }

    #[test]
    fn camel_case_keys_deserialize() {
        let request: SendMessageRequest = serde_json::from_str(
            r#"{"userId":"u1","planType":"basic","timestamp":"t","paymentScreenshot":"s"}"#,
        )
        .unwrap();
        assert!(request.validate().is_some());
    }
}
