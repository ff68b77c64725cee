/// Build the operator-facing notification text. Fixed template, values
/// substituted literally. The message is sent with HTML parse mode and no
/// escaping is applied to the fields (known gap, see DESIGN.md).
pub fn payment_message(user_id: &str, plan_type: &str, timestamp: &str) -> String {
    format!(
        "🔔 New Payment Received!\n\n\
         👤 User ID: {user_id}\n\
         📦 Plan Type: {plan_type}\n\
         ⏰ Timestamp: {timestamp}\n\n\
         📸 Payment Screenshot:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_literal_field_values() {
        let text = payment_message("user-42", "premium", "2024-05-01T10:00:00Z");
        assert!(text.contains("User ID: user-42"));
        assert!(text.contains("Plan Type: premium"));
        assert!(text.contains("Timestamp: 2024-05-01T10:00:00Z"));
    }

    #[test]
    fn keeps_header_and_trailing_label() {
        let text = payment_message("u", "p", "t");
        assert!(text.starts_with("🔔 New Payment Received!"));
        assert!(text.ends_with("📸 Payment Screenshot:"));
    }

    #[test]
    fn fields_are_not_escaped() {
        let text = payment_message("<b>u</b>", "p", "t");
        assert!(text.contains("<b>u</b>"));
    }
}
