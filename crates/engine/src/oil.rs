//! Oil change records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine,
    util::{validate_non_negative, validate_positive},
};

/// Oil grade, with a fixed service life per grade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OilGrade {
    Mineral,
    SemiSynthetic,
    FullSynthetic,
}

impl OilGrade {
    /// Distance the oil is expected to last before the next change.
    pub fn service_life(self) -> f64 {
        match self {
            Self::Mineral => 1000.0,
            Self::SemiSynthetic => 2000.0,
            Self::FullSynthetic => 3000.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mineral => "mineral",
            Self::SemiSynthetic => "semi_synthetic",
            Self::FullSynthetic => "full_synthetic",
        }
    }
}

impl TryFrom<&str> for OilGrade {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "mineral" => Ok(Self::Mineral),
            "semi_synthetic" => Ok(Self::SemiSynthetic),
            "full_synthetic" => Ok(Self::FullSynthetic),
            other => Err(EngineError::InvalidRecord(format!(
                "invalid oil grade: {other}"
            ))),
        }
    }
}

/// One oil change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OilRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub odometer: f64,
    pub brand: String,
    pub grade: OilGrade,
    pub volume: f64,
    pub cost: f64,
    /// `odometer + grade.service_life()`, fixed at creation.
    pub next_change_odometer: f64,
}

impl OilRecord {
    pub fn new(
        date: NaiveDate,
        odometer: f64,
        brand: String,
        grade: OilGrade,
        volume: f64,
        cost: f64,
    ) -> ResultEngine<Self> {
        validate_non_negative(odometer, "odometer")?;
        validate_positive(volume, "volume")?;
        validate_non_negative(cost, "cost")?;

        Ok(Self {
            id: Uuid::new_v4(),
            date,
            odometer,
            brand,
            grade,
            volume,
            cost,
            next_change_odometer: odometer + grade.service_life(),
        })
    }
}
