use std::time::Duration;

const DEFAULT_WEBHOOK_URL: &str = "https://hook.us1.make.com/1hbai9stv94mi2aha9majaxmv8ri067n";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub webhook_url: String,
    pub copy_feedback: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            // Set CAPTION_WEBHOOK_URL at build time to point a build at another hook.
            webhook_url: option_env!("CAPTION_WEBHOOK_URL")
                .unwrap_or(DEFAULT_WEBHOOK_URL)
                .to_owned(),
            copy_feedback: captions::COPY_FEEDBACK,
        }
    }
}
