use thiserror::Error;

/// Hard failures of the pricing engine.
///
/// The propagation policy is degrade-and-annotate: conditions that only
/// affect what the customer sees before commit (rejected promocode,
/// unmapped address) are reported inside the pricing result, never as
/// errors. Only states that would produce an incoherent persisted order
/// surface here.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("delivery zone `{zone}` requires a manually entered delivery cost")]
    MissingManualDeliveryCost { zone: String },
    #[error("pricing invariant violation: {0}")]
    InvariantViolation(String),
}
