//! Fuel-efficiency statistics over a vehicle's fill-up log.
//!
//! Efficiency is distance per unit of fuel volume, derived only from
//! consecutive *eligible* fill-ups (tank filled to capacity). A partial fill
//! cannot close an interval: the volume added says nothing about the fuel
//! consumed since the previous full tank. Partial fills still contribute to
//! the lifetime fuel cost.

use serde::{Deserialize, Serialize};

use crate::fuel::FuelRecord;

/// Distance/volume efficiency statistics for one fuel log.
///
/// `average` is the weighted ratio `total_distance / total_volume`, not the
/// arithmetic mean of the interval ratios, so it always lies between `worst`
/// and `best`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyStats {
    pub average: f64,
    pub best: f64,
    pub worst: f64,
    /// One value per counted interval, in odometer order.
    pub history: Vec<f64>,
    pub total_distance: f64,
    pub total_volume: f64,
    pub valid_intervals: usize,
    /// Sum of `total_cost` over the whole input, partial fills included.
    pub total_fuel_cost: f64,
    /// The eligible record with the greatest odometer, when one exists.
    pub last_fill: Option<FuelRecord>,
}

/// Computes efficiency statistics from an unsorted fill-up log.
///
/// The input is never mutated; the function sorts a working copy by odometer
/// (stable, so ties keep insertion order) and is total over any input the
/// record constructors accept. With fewer than two records, or fewer than
/// two eligible records, every efficiency figure is zero and the history is
/// empty; `total_fuel_cost` and `last_fill` are still populated.
pub fn compute_efficiency(records: &[FuelRecord]) -> EfficiencyStats {
    let total_fuel_cost = records.iter().map(|r| r.total_cost).sum();

    let mut sorted: Vec<&FuelRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.odometer.total_cmp(&b.odometer));

    let eligible: Vec<&FuelRecord> = sorted
        .iter()
        .copied()
        .filter(|r| r.efficiency_eligible)
        .collect();

    let mut stats = EfficiencyStats {
        total_fuel_cost,
        last_fill: eligible.last().map(|r| (*r).clone()),
        ..EfficiencyStats::default()
    };

    if records.len() < 2 || eligible.len() < 2 {
        return stats;
    }

    let mut best = 0.0_f64;
    let mut worst = f64::INFINITY;

    for pair in eligible.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        let distance = curr.odometer - prev.odometer;
        if distance <= 0.0 || curr.volume <= 0.0 {
            continue;
        }

        let interval = distance / curr.volume;
        stats.history.push(interval);
        stats.total_distance += distance;
        stats.total_volume += curr.volume;
        stats.valid_intervals += 1;

        if interval > best {
            best = interval;
        }
        if interval < worst {
            worst = interval;
        }
    }

    stats.best = best;
    stats.worst = if worst.is_finite() { worst } else { 0.0 };
    stats.average = if stats.total_volume > 0.0 {
        stats.total_distance / stats.total_volume
    } else {
        0.0
    };

    stats
}
