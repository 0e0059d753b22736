//! Consolidated statistics for one vehicle.
//!
//! [`aggregate`] composes the efficiency calculator with lifetime sums,
//! mode-dependent cost-per-distance, per-vendor efficiency grouping and
//! calendar-month spend buckets into a [`StatisticsSnapshot`]. The snapshot
//! is ephemeral: recomputed on every query, never cached or persisted.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    EngineError,
    efficiency::compute_efficiency,
    fuel::FuelRecord,
    maintenance::MaintenanceRecord,
    util::vendor_key,
    vehicle::Vehicle,
};

/// Which expense groups the cost-per-distance figure covers.
///
/// Closed set, matched exhaustively: a new mode cannot silently fall through
/// to a default arm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostMode {
    Fuel,
    FuelAndOil,
    #[default]
    Total,
}

impl CostMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fuel => "fuel",
            Self::FuelAndOil => "fuel_and_oil",
            Self::Total => "total",
        }
    }
}

impl TryFrom<&str> for CostMode {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "fuel" => Ok(Self::Fuel),
            "fuel_and_oil" | "fuel-oil" => Ok(Self::FuelAndOil),
            "total" => Ok(Self::Total),
            other => Err(EngineError::InvalidRecord(format!(
                "invalid cost mode: {other}"
            ))),
        }
    }
}

/// Accumulated interval data for one fill-up vendor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VendorEfficiency {
    /// First-encountered spelling of the vendor name.
    pub vendor: String,
    pub total_distance: f64,
    pub total_volume: f64,
}

impl VendorEfficiency {
    /// Effective efficiency used for ranking. Volume is > 0 for every
    /// counted interval, so the ratio is always defined.
    pub fn efficiency(&self) -> f64 {
        self.total_distance / self.total_volume
    }
}

/// The full set of derived statistics for one vehicle at one point in time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    pub current_odometer: f64,
    /// Distance accrued since tracking began.
    pub distance_total: f64,
    pub average_efficiency: f64,
    pub best_efficiency: f64,
    pub worst_efficiency: f64,
    pub efficiency_history: Vec<f64>,
    pub valid_intervals: usize,
    pub cost_per_distance: f64,
    pub total_fuel_cost: f64,
    pub total_oil_cost: f64,
    pub total_maintenance_cost: f64,
    pub monthly_fuel_spend: f64,
    pub monthly_oil_spend: f64,
    pub monthly_maintenance_spend: f64,
    /// Per-vendor interval data, in first-encountered order (scanning
    /// fill-ups sorted by odometer). The order makes ranking ties
    /// deterministic.
    pub vendor_efficiency: Vec<VendorEfficiency>,
    pub most_expensive_maintenance: Option<MaintenanceRecord>,
    pub last_fill: Option<FuelRecord>,
    pub fuel_entry_count: usize,
}

impl StatisticsSnapshot {
    pub fn total_spent(&self) -> f64 {
        self.total_fuel_cost + self.total_oil_cost + self.total_maintenance_cost
    }

    pub fn monthly_spend(&self) -> f64 {
        self.monthly_fuel_spend + self.monthly_oil_spend + self.monthly_maintenance_spend
    }

    /// Vendor with the highest effective efficiency. Strict comparison, so
    /// the first-encountered vendor wins exact ties.
    pub fn best_vendor(&self) -> Option<&VendorEfficiency> {
        let mut best: Option<&VendorEfficiency> = None;
        for vendor in &self.vendor_efficiency {
            match best {
                Some(current) if vendor.efficiency() <= current.efficiency() => {}
                _ => best = Some(vendor),
            }
        }
        best
    }

    /// Vendor with the lowest effective efficiency, first encountered wins
    /// ties.
    pub fn worst_vendor(&self) -> Option<&VendorEfficiency> {
        let mut worst: Option<&VendorEfficiency> = None;
        for vendor in &self.vendor_efficiency {
            match worst {
                Some(current) if vendor.efficiency() >= current.efficiency() => {}
                _ => worst = Some(vendor),
            }
        }
        worst
    }
}

fn same_month(date: NaiveDate, today: NaiveDate) -> bool {
    date.year() == today.year() && date.month() == today.month()
}

/// Groups consecutive eligible fill-up pairs by the later record's vendor.
///
/// Pair guards match the efficiency calculator; records whose vendor is
/// missing or folds to nothing are excluded.
fn vendor_breakdown(fuel_log: &[FuelRecord]) -> Vec<VendorEfficiency> {
    let mut eligible: Vec<&FuelRecord> =
        fuel_log.iter().filter(|r| r.efficiency_eligible).collect();
    eligible.sort_by(|a, b| a.odometer.total_cmp(&b.odometer));

    let mut vendors: Vec<(String, VendorEfficiency)> = Vec::new();
    for pair in eligible.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        let distance = curr.odometer - prev.odometer;
        if distance <= 0.0 || curr.volume <= 0.0 {
            continue;
        }
        let Some(name) = curr.vendor.as_deref() else {
            continue;
        };
        let Some(key) = vendor_key(name) else {
            continue;
        };

        match vendors.iter_mut().find(|(k, _)| *k == key) {
            Some((_, entry)) => {
                entry.total_distance += distance;
                entry.total_volume += curr.volume;
            }
            None => vendors.push((
                key,
                VendorEfficiency {
                    vendor: name.to_string(),
                    total_distance: distance,
                    total_volume: curr.volume,
                },
            )),
        }
    }

    vendors.into_iter().map(|(_, entry)| entry).collect()
}

/// Computes the statistics snapshot for a vehicle under the given cost mode.
///
/// `today` anchors the calendar-month spend buckets; callers pass the
/// current date so the engine itself never reads the clock.
///
/// Cost-per-distance uses a two-tier policy. While efficiency data and a
/// current fuel price exist, the fuel share is `unit_price /
/// average_efficiency`, reflecting today's economics rather than a lifetime
/// blend. Otherwise it falls back to lifetime totals over the distance
/// accrued since tracking began, and to zero when no distance has accrued at
/// all.
pub fn aggregate(vehicle: &Vehicle, mode: CostMode, today: NaiveDate) -> StatisticsSnapshot {
    let eff = compute_efficiency(&vehicle.fuel_log);

    let total_oil_cost: f64 = vehicle.oil_log.iter().map(|r| r.cost).sum();
    let total_maintenance_cost: f64 = vehicle
        .maintenance_log
        .iter()
        .map(MaintenanceRecord::total_cost)
        .sum();

    let current_odometer = vehicle.current_odometer();
    let distance_total = current_odometer - vehicle.initial_odometer;

    let lifetime_share = |cost: f64| {
        if distance_total > 0.0 {
            cost / distance_total
        } else {
            0.0
        }
    };

    let last_fill_price = eff
        .last_fill
        .as_ref()
        .map(|record| record.unit_price)
        .unwrap_or(0.0);

    let cost_per_distance = if eff.average > 0.0 && last_fill_price > 0.0 {
        let current_fuel_share = last_fill_price / eff.average;
        match mode {
            CostMode::Fuel => current_fuel_share,
            CostMode::FuelAndOil => current_fuel_share + lifetime_share(total_oil_cost),
            CostMode::Total => {
                current_fuel_share + lifetime_share(total_oil_cost + total_maintenance_cost)
            }
        }
    } else if distance_total > 0.0 {
        match mode {
            CostMode::Fuel => eff.total_fuel_cost / distance_total,
            CostMode::FuelAndOil => (eff.total_fuel_cost + total_oil_cost) / distance_total,
            CostMode::Total => {
                (eff.total_fuel_cost + total_oil_cost + total_maintenance_cost) / distance_total
            }
        }
    } else {
        0.0
    };

    let monthly_fuel_spend = vehicle
        .fuel_log
        .iter()
        .filter(|r| same_month(r.date, today))
        .map(|r| r.total_cost)
        .sum();
    let monthly_oil_spend = vehicle
        .oil_log
        .iter()
        .filter(|r| same_month(r.date, today))
        .map(|r| r.cost)
        .sum();
    let monthly_maintenance_spend = vehicle
        .maintenance_log
        .iter()
        .filter(|r| same_month(r.date, today))
        .map(MaintenanceRecord::total_cost)
        .sum();

    let most_expensive_maintenance = vehicle
        .maintenance_log
        .iter()
        .max_by(|a, b| a.total_cost().total_cmp(&b.total_cost()))
        .cloned();

    StatisticsSnapshot {
        current_odometer,
        distance_total,
        average_efficiency: eff.average,
        best_efficiency: eff.best,
        worst_efficiency: eff.worst,
        efficiency_history: eff.history,
        valid_intervals: eff.valid_intervals,
        cost_per_distance,
        total_fuel_cost: eff.total_fuel_cost,
        total_oil_cost,
        total_maintenance_cost,
        monthly_fuel_spend,
        monthly_oil_spend,
        monthly_maintenance_spend,
        vendor_efficiency: vendor_breakdown(&vehicle.fuel_log),
        most_expensive_maintenance,
        last_fill: eff.last_fill,
        fuel_entry_count: vehicle.fuel_log.len(),
    }
}
