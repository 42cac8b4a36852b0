//! Required-field completeness check.

use crate::models::slip::WeighingSlip;

use super::Validator;

/// Flags missing mandatory fields: date, vehicle number, and all three
/// weights. Counterparty and product name stay optional.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredFieldValidator;

impl RequiredFieldValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for RequiredFieldValidator {
    fn validate(&self, slip: &WeighingSlip) -> Vec<String> {
        let mut errors = Vec::new();

        if slip.date.is_none() {
            errors.push("measurement date is missing".to_string());
        }

        if slip.vehicle_number.as_deref().is_none_or(str::is_empty) {
            errors.push("vehicle number is missing".to_string());
        }

        if slip.gross_weight.is_none() {
            errors.push("gross weight is missing".to_string());
        }

        if slip.tare_weight.is_none() {
            errors.push("tare weight is missing".to_string());
        }

        if slip.net_weight.is_none() {
            errors.push("net weight is missing".to_string());
        }

        errors
    }

    fn order(&self) -> u32 {
        1
    }
}
