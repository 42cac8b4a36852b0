//! Weighing slip data models and the parsing result envelope.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single measured weight on the slip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    /// Weight value in `unit`, when one was parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Mass unit, "kg" after normalization.
    pub unit: String,

    /// Moment the weighing was taken, when the slip prints one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measured_at: Option<NaiveDateTime>,
}

impl Weight {
    /// Create a weight in kilograms.
    pub fn kg(value: f64) -> Self {
        Self {
            value: Some(value),
            unit: "kg".to_string(),
            measured_at: None,
        }
    }

    /// Attach a measurement timestamp.
    pub fn with_measured_at(mut self, measured_at: Option<NaiveDateTime>) -> Self {
        self.measured_at = measured_at;
        self
    }
}

/// Role of a weight on the slip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightKind {
    /// Vehicle plus load.
    Gross,
    /// Empty vehicle.
    Tare,
    /// Load only, expected to be close to gross - tare.
    Net,
}

impl WeightKind {
    /// Human-readable field name used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            WeightKind::Gross => "gross weight",
            WeightKind::Tare => "tare weight",
            WeightKind::Net => "net weight",
        }
    }
}

/// Structured record extracted from one weighing slip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeighingSlip {
    /// Measurement date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Vehicle identifier (plate number or slip-local number).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_number: Option<String>,

    /// Counterparty / company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    /// Gross weight (vehicle + load).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross_weight: Option<Weight>,

    /// Tare weight (empty vehicle).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tare_weight: Option<Weight>,

    /// Net weight (load).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_weight: Option<Weight>,

    /// Issuing scale house.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,

    /// Site coordinates printed on the slip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
}

impl WeighingSlip {
    /// Start building a slip.
    pub fn builder() -> WeighingSlipBuilder {
        WeighingSlipBuilder::default()
    }
}

/// Incremental builder used by the pipeline while fields are extracted.
#[derive(Debug, Clone, Default)]
pub struct WeighingSlipBuilder {
    slip: WeighingSlip,
}

impl WeighingSlipBuilder {
    pub fn date(&mut self, date: NaiveDate) -> &mut Self {
        self.slip.date = Some(date);
        self
    }

    pub fn vehicle_number(&mut self, vehicle_number: impl Into<String>) -> &mut Self {
        self.slip.vehicle_number = Some(vehicle_number.into());
        self
    }

    pub fn company(&mut self, company: impl Into<String>) -> &mut Self {
        self.slip.company = Some(company.into());
        self
    }

    pub fn product_name(&mut self, product_name: impl Into<String>) -> &mut Self {
        self.slip.product_name = Some(product_name.into());
        self
    }

    pub fn gross_weight(&mut self, weight: Weight) -> &mut Self {
        self.slip.gross_weight = Some(weight);
        self
    }

    pub fn tare_weight(&mut self, weight: Weight) -> &mut Self {
        self.slip.tare_weight = Some(weight);
        self
    }

    pub fn net_weight(&mut self, weight: Weight) -> &mut Self {
        self.slip.net_weight = Some(weight);
        self
    }

    pub fn issuer(&mut self, issuer: impl Into<String>) -> &mut Self {
        self.slip.issuer = Some(issuer.into());
        self
    }

    pub fn coordinates(&mut self, coordinates: impl Into<String>) -> &mut Self {
        self.slip.coordinates = Some(coordinates.into());
        self
    }

    /// Snapshot the slip as built so far.
    pub fn build(&self) -> WeighingSlip {
        self.slip.clone()
    }
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsingResult {
    /// True when the error list ended up empty.
    pub success: bool,

    /// The extracted slip, present only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<WeighingSlip>,

    /// Fatal problems, present only on failure.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,

    /// Informational problems; a run with warnings can still succeed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,

    /// Coarse confidence signal: 1.0 on success, 0.0 on failure.
    pub confidence: f64,
}

impl ParsingResult {
    /// Successful result, keeping any warnings collected along the way.
    pub fn success(data: WeighingSlip, warnings: Vec<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            errors: Vec::new(),
            warnings,
            confidence: 1.0,
        }
    }

    /// Failed result carrying every collected error.
    pub fn failure(errors: Vec<String>) -> Self {
        Self {
            success: false,
            data: None,
            errors,
            warnings: Vec::new(),
            confidence: 0.0,
        }
    }

    /// Failed result with a single error.
    pub fn failure_with(error: impl Into<String>) -> Self {
        Self::failure(vec![error.into()])
    }
}
