use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tavolo_core::{
    DeliveryZone, DeterministicOrderPricingEngine, Discount, InMemoryStore, OrderPricingEngine,
    OrderPricingResult, PricingConfig, PricingRequest,
};
use tracing::info;

use crate::commands::CommandResult;

/// Self-contained preview file: the pricing request plus the zone and
/// discount records a running deployment would fetch from its store.
#[derive(Debug, Deserialize)]
pub struct PreviewFile {
    pub order: PricingRequest,
    #[serde(default)]
    pub zones: Vec<DeliveryZone>,
    #[serde(default)]
    pub discounts: Vec<Discount>,
}

#[derive(Debug, Serialize)]
struct PreviewOutcome {
    command: &'static str,
    status: &'static str,
    result: OrderPricingResult,
}

pub fn run(config: &PricingConfig, request_path: &Path) -> CommandResult {
    let raw = match fs::read_to_string(request_path) {
        Ok(raw) => raw,
        Err(error) => {
            return CommandResult::failure(
                "preview",
                "request_io",
                format!("could not read `{}`: {error}", request_path.display()),
                2,
            );
        }
    };

    let file: PreviewFile = match serde_json::from_str(&raw) {
        Ok(file) => file,
        Err(error) => {
            return CommandResult::failure(
                "preview",
                "request_parse",
                format!("could not parse `{}`: {error}", request_path.display()),
                2,
            );
        }
    };

    let store = InMemoryStore { zones: file.zones, discounts: file.discounts, ..InMemoryStore::default() };
    let engine = DeterministicOrderPricingEngine::new(config.clone());

    info!(
        city = %file.order.city,
        lines = file.order.lines.len(),
        "pricing preview requested"
    );

    match engine.preview_total(&file.order, &store) {
        Ok(result) => {
            let payload = PreviewOutcome { command: "preview", status: "ok", result };
            match serde_json::to_string(&payload) {
                Ok(output) => CommandResult { exit_code: 0, output },
                Err(error) => {
                    CommandResult::failure("preview", "serialization", error.to_string(), 1)
                }
            }
        }
        Err(error) => CommandResult::failure("preview", "pricing", error.to_string(), 3),
    }
}
