//! Promocode gate.
//!
//! A rejected promocode never aborts pricing: the order proceeds with
//! the code ignored and a visible note, mirroring how checkout degrades
//! instead of failing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::promo::{PromoCode, PromoEffect};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromoRejection {
    NotFound,
    Inactive,
    OutsideValidityWindow,
    FirstOrderOnly,
}

impl PromoRejection {
    pub fn message(self) -> &'static str {
        match self {
            Self::NotFound => "Please check the promocode.",
            Self::Inactive => "Promocode is not active.",
            Self::OutsideValidityWindow => "Promocode is outside its validity period.",
            Self::FirstOrderOnly => "Promocode isn't allowed as you have orders history.",
        }
    }
}

/// Outcome of gating a promocode for one pricing run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PromoEvaluation {
    pub code: Option<String>,
    /// Effect to feed into the discount aggregator; `None` when no code
    /// was supplied or the code was rejected.
    pub effect: Option<PromoEffect>,
    pub rejection: Option<PromoRejection>,
    /// User-facing acceptance or rejection note.
    pub note: Option<String>,
}

impl PromoEvaluation {
    pub fn none() -> Self {
        Self { code: None, effect: None, rejection: None, note: None }
    }

    pub fn grants_free_delivery(&self) -> bool {
        matches!(self.effect, Some(PromoEffect::FreeDelivery))
    }
}

pub fn evaluate_promocode(
    promo: Option<&PromoCode>,
    now: DateTime<Utc>,
    first_order: bool,
) -> PromoEvaluation {
    let Some(promo) = promo else {
        return PromoEvaluation::none();
    };

    if let Some(rejection) = rejection_for(promo, now, first_order) {
        return PromoEvaluation {
            code: Some(promo.code.clone()),
            effect: None,
            rejection: Some(rejection),
            note: Some(rejection.message().to_owned()),
        };
    }

    PromoEvaluation {
        code: Some(promo.code.clone()),
        effect: Some(promo.effect.clone()),
        rejection: None,
        note: Some(acceptance_note(&promo.effect)),
    }
}

fn rejection_for(
    promo: &PromoCode,
    now: DateTime<Utc>,
    first_order: bool,
) -> Option<PromoRejection> {
    if !promo.is_active {
        return Some(PromoRejection::Inactive);
    }
    if now < promo.valid_from || now > promo.valid_to {
        return Some(PromoRejection::OutsideValidityWindow);
    }
    if promo.first_order_only && !first_order {
        return Some(PromoRejection::FirstOrderOnly);
    }
    None
}

fn acceptance_note(effect: &PromoEffect) -> String {
    match effect {
        PromoEffect::Percent { percent } => {
            format!("{percent}% discount accepted for the order.")
        }
        PromoEffect::Flat { amount } => {
            format!("{amount} discount accepted for the order.")
        }
        PromoEffect::FreeDelivery => "Free delivery accepted for the order.".to_owned(),
        PromoEffect::Gift => "Within the promotion, you will receive a gift.".to_owned(),
    }
}
