//! Mess fee configuration.

use serde::{Deserialize, Serialize};

const fn default_monthly_fee() -> u32 {
    2500
}

fn default_currency() -> String {
    String::from("INR")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentConfig {
    /// Amount billed when a payment record is created without one.
    #[serde(default = "default_monthly_fee")]
    pub monthly_fee: u32,

    /// ISO 4217 code shown next to totals.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            monthly_fee: default_monthly_fee(),
            currency: default_currency(),
        }
    }
}
