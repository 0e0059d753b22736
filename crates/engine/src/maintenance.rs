//! Maintenance and service records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, ResultEngine, util::validate_non_negative};

/// Classification of a maintenance line.
///
/// Fuel and oil have their own logs; everything else lands here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceKind {
    Service,
    Parts,
    Other,
}

impl MaintenanceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Parts => "parts",
            Self::Other => "other",
        }
    }
}

impl TryFrom<&str> for MaintenanceKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "service" => Ok(Self::Service),
            "parts" => Ok(Self::Parts),
            "other" => Ok(Self::Other),
            other => Err(EngineError::InvalidRecord(format!(
                "invalid maintenance kind: {other}"
            ))),
        }
    }
}

/// One service/parts event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub odometer: f64,
    /// What was serviced or replaced.
    pub description: String,
    pub kind: MaintenanceKind,
    pub parts_cost: f64,
    pub labor_cost: f64,
}

impl MaintenanceRecord {
    pub fn new(
        date: NaiveDate,
        odometer: f64,
        description: String,
        kind: MaintenanceKind,
        parts_cost: f64,
        labor_cost: f64,
    ) -> ResultEngine<Self> {
        validate_non_negative(odometer, "odometer")?;
        validate_non_negative(parts_cost, "parts cost")?;
        validate_non_negative(labor_cost, "labor cost")?;

        Ok(Self {
            id: Uuid::new_v4(),
            date,
            odometer,
            description,
            kind,
            parts_cost,
            labor_cost,
        })
    }

    pub fn total_cost(&self) -> f64 {
        self.parts_cost + self.labor_cost
    }
}
