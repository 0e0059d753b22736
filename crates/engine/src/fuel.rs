//! Fuel fill-up records.
//!
//! A [`FuelRecord`] is one fill-up event. Whether the tank was filled to
//! capacity decides if the record can close an efficiency interval: only a
//! full tank makes the distance since the previous full tank attributable to
//! a known fuel volume.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine,
    util::{normalize_optional_text, validate_non_negative, validate_positive},
};

/// Tank state at the end of a fill-up.
///
/// `FullFromUnknown` marks a full tank whose *previous* state is unknown
/// (first entry after a gap); it still closes an interval, because the
/// volume added is the volume consumed since the last full tank on record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillState {
    Full,
    FullFromUnknown,
    Partial,
}

impl FillState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::FullFromUnknown => "full_from_unknown",
            Self::Partial => "partial",
        }
    }
}

impl TryFrom<&str> for FillState {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "full" => Ok(Self::Full),
            "full_from_unknown" => Ok(Self::FullFromUnknown),
            "partial" => Ok(Self::Partial),
            other => Err(EngineError::InvalidRecord(format!(
                "invalid fill state: {other}"
            ))),
        }
    }
}

/// One fill-up event.
///
/// `total_cost` and `efficiency_eligible` are derived once here, at the
/// construction site, and treated as stored facts afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FuelRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    /// Cumulative distance reading at the time of the fill.
    pub odometer: f64,
    /// Fuel volume added, always > 0.
    pub volume: f64,
    pub unit_price: f64,
    /// `volume * unit_price`, fixed at creation.
    pub total_cost: f64,
    /// Free-text fill-up location name.
    pub vendor: Option<String>,
    pub fuel_type: Option<String>,
    pub fill_state: FillState,
    /// `fill_state != Partial`: the record may close an efficiency interval.
    pub efficiency_eligible: bool,
}

impl FuelRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: NaiveDate,
        odometer: f64,
        volume: f64,
        unit_price: f64,
        vendor: Option<&str>,
        fuel_type: Option<&str>,
        fill_state: FillState,
    ) -> ResultEngine<Self> {
        validate_non_negative(odometer, "odometer")?;
        validate_positive(volume, "volume")?;
        validate_non_negative(unit_price, "unit price")?;

        Ok(Self {
            id: Uuid::new_v4(),
            date,
            odometer,
            volume,
            unit_price,
            total_cost: volume * unit_price,
            vendor: normalize_optional_text(vendor),
            fuel_type: normalize_optional_text(fuel_type),
            fill_state,
            efficiency_eligible: fill_state != FillState::Partial,
        })
    }
}
