//! Arithmetic consistency checks between the three weights.

use crate::models::config::ParserConfig;
use crate::models::slip::WeighingSlip;

use super::Validator;

/// Checks that net = gross - tare within tolerance, gross >= tare, and
/// net >= 0. The three checks run independently; a bad slip can collect
/// several of these at once.
#[derive(Debug, Clone, Copy)]
pub struct BusinessRuleValidator {
    weight_tolerance: f64,
}

impl BusinessRuleValidator {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            weight_tolerance: config.validation.weight_tolerance,
        }
    }
}

impl Validator for BusinessRuleValidator {
    fn validate(&self, slip: &WeighingSlip) -> Vec<String> {
        let mut errors = Vec::new();

        // Presence is RequiredFieldValidator's concern; incomplete slips
        // produce no arithmetic findings here.
        let (Some(gross_weight), Some(tare_weight), Some(net_weight)) =
            (&slip.gross_weight, &slip.tare_weight, &slip.net_weight)
        else {
            return errors;
        };
        let (Some(gross), Some(tare), Some(net)) =
            (gross_weight.value, tare_weight.value, net_weight.value)
        else {
            return errors;
        };

        let expected_net = gross - tare;
        let difference = (expected_net - net).abs();

        if difference > self.weight_tolerance {
            errors.push(format!(
                "weight arithmetic mismatch: net weight ({net:.2} kg) != gross weight \
                 ({gross:.2} kg) - tare weight ({tare:.2} kg); difference {difference:.2} kg \
                 exceeds tolerance {:.2} kg",
                self.weight_tolerance
            ));
        }

        if gross < tare {
            errors.push(format!(
                "gross weight ({gross:.2} kg) is less than tare weight ({tare:.2} kg)"
            ));
        }

        if net < 0.0 {
            errors.push(format!("net weight ({net:.2} kg) is negative"));
        }

        errors
    }

    fn order(&self) -> u32 {
        2
    }
}
