//! Heuristic insight rules derived from a statistics snapshot.
//!
//! Each rule is stateless and independent of the others; the engine returns
//! typed values and renders no text. Thresholds:
//!
//! - oil change flagged inside a 200-distance window, overdue at or past the
//!   predicted odometer;
//! - efficiency drop flagged when the latest interval falls below 90% of the
//!   weighted average;
//! - generic check-up suggested after 2000 distance units without a
//!   maintenance entry.

use serde::{Deserialize, Serialize};

use crate::{stats::StatisticsSnapshot, vehicle::Vehicle};

const OIL_CHANGE_WINDOW: f64 = 200.0;
const EFFICIENCY_DROP_FACTOR: f64 = 0.9;
const MAINTENANCE_GAP: f64 = 2000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// One derived insight, parameters included, for the presentation layer to
/// render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Insight {
    /// The next oil change is within the critical window.
    OilChangeDue {
        next_change_odometer: f64,
        remaining: f64,
    },
    /// The predicted oil-change odometer has been passed.
    OilChangeOverdue {
        next_change_odometer: f64,
        exceeded_by: f64,
    },
    /// The latest efficiency interval dropped well below the average.
    EfficiencyDrop {
        percent: u32,
        latest: f64,
        average: f64,
    },
    /// No maintenance on record for a long stretch of distance.
    MaintenanceCheckDue { distance_since_service: f64 },
    BestVendor { vendor: String, efficiency: f64 },
    WorstVendor { vendor: String, efficiency: f64 },
}

impl Insight {
    pub fn severity(&self) -> Severity {
        match self {
            Self::OilChangeDue { .. } | Self::OilChangeOverdue { .. } => Severity::Critical,
            Self::EfficiencyDrop { .. } | Self::MaintenanceCheckDue { .. } => Severity::Warning,
            Self::BestVendor { .. } | Self::WorstVendor { .. } => Severity::Info,
        }
    }
}

/// Runs every insight rule against a vehicle and its snapshot.
///
/// The rules are order-insensitive; the returned order (oil, efficiency,
/// maintenance, vendors) is fixed for stable presentation.
pub fn derive_insights(vehicle: &Vehicle, snapshot: &StatisticsSnapshot) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let Some(last_oil) = vehicle
        .oil_log
        .iter()
        .max_by(|a, b| a.odometer.total_cmp(&b.odometer))
    {
        let remaining = last_oil.next_change_odometer - snapshot.current_odometer;
        if remaining <= 0.0 {
            insights.push(Insight::OilChangeOverdue {
                next_change_odometer: last_oil.next_change_odometer,
                exceeded_by: -remaining,
            });
        } else if remaining <= OIL_CHANGE_WINDOW {
            insights.push(Insight::OilChangeDue {
                next_change_odometer: last_oil.next_change_odometer,
                remaining,
            });
        }
    }

    if snapshot.efficiency_history.len() >= 2 {
        let latest = snapshot.efficiency_history[snapshot.efficiency_history.len() - 1];
        let average = snapshot.average_efficiency;
        if average > 0.0 && latest < average * EFFICIENCY_DROP_FACTOR {
            insights.push(Insight::EfficiencyDrop {
                percent: ((1.0 - latest / average) * 100.0).round() as u32,
                latest,
                average,
            });
        }
    }

    let service_baseline = vehicle
        .maintenance_log
        .iter()
        .map(|r| r.odometer)
        .fold(f64::NEG_INFINITY, f64::max);
    let service_baseline = if service_baseline.is_finite() {
        service_baseline
    } else {
        vehicle.initial_odometer
    };
    let distance_since_service = snapshot.current_odometer - service_baseline;
    if distance_since_service > MAINTENANCE_GAP {
        insights.push(Insight::MaintenanceCheckDue {
            distance_since_service,
        });
    }

    if let Some(best) = snapshot.best_vendor() {
        insights.push(Insight::BestVendor {
            vendor: best.vendor.clone(),
            efficiency: best.efficiency(),
        });
        // A lone vendor is not also reported as the worst.
        if snapshot.vendor_efficiency.len() >= 2
            && let Some(worst) = snapshot.worst_vendor()
        {
            insights.push(Insight::WorstVendor {
                vendor: worst.vendor.clone(),
                efficiency: worst.efficiency(),
            });
        }
    }

    insights
}
