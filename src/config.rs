use anyhow::{bail, Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    // Telegram Bot API
    pub bot_token: String,
    pub chat_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("Invalid PORT")?,

            bot_token: std::env::var("TELEGRAM_BOT_TOKEN")
                .context("TELEGRAM_BOT_TOKEN required")?,
            chat_id: std::env::var("TELEGRAM_CHAT_ID")
                .context("TELEGRAM_CHAT_ID required")?,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            bail!("TELEGRAM_BOT_TOKEN must not be blank");
        }
        if self.chat_id.trim().is_empty() {
            bail!("TELEGRAM_CHAT_ID must not be blank");
        }

        tracing::info!("Configuration validated, target chat: {}", self.chat_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_rejected() {
        let config = Config {
            host: "0.0.0.0".to_string(),
            port: 3000,
            bot_token: "  ".to_string(),
            chat_id: "-100123".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_chat_id_rejected() {
        let config = Config {
            host: "0.0.0.0".to_string(),
            port: 3000,
            bot_token: "123:abc".to_string(),
            chat_id: "".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn populated_config_accepted() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 3000,
            bot_token: "123:abc".to_string(),
            chat_id: "-100123".to_string(),
        };
        assert!(config.validate().is_ok());
    }
}
