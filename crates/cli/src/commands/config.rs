use serde::Serialize;
use tavolo_core::config::{LogFormat, PricingConfig};

use crate::commands::CommandResult;

#[derive(Debug, Serialize)]
struct EffectiveConfig {
    command: &'static str,
    status: &'static str,
    max_discount_percent: String,
    default_city: String,
    logging_level: String,
    logging_format: &'static str,
}

pub fn run(config: &PricingConfig) -> CommandResult {
    let payload = EffectiveConfig {
        command: "config",
        status: "ok",
        max_discount_percent: config.max_discount_percent.to_string(),
        default_city: config.default_city.clone(),
        logging_level: config.logging.level.clone(),
        logging_format: match config.logging.format {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        },
    };

    match serde_json::to_string(&payload) {
        Ok(output) => CommandResult { exit_code: 0, output },
        Err(error) => CommandResult::failure("config", "serialization", error.to_string(), 1),
    }
}
