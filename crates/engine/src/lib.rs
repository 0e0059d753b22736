//! Statistics engine for a personal vehicle-expense tracker.
//!
//! The caller records fuel fill-ups, oil changes and maintenance services
//! per vehicle; the engine derives efficiency statistics, cost-per-distance
//! figures, monthly spend buckets and heuristic insights. All computation is
//! synchronous, allocation-local and free of I/O: [`compute_efficiency`],
//! [`aggregate`] and [`derive_insights`] take shared references and may be
//! called concurrently without coordination.
//!
//! [`Garage`] is the explicit state container for the surrounding
//! application: a registry of vehicles with an active selection. It owns no
//! persistence; serializing and storing it is the caller's concern.
use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use efficiency::{EfficiencyStats, compute_efficiency};
pub use error::EngineError;
pub use fuel::{FillState, FuelRecord};
pub use insights::{Insight, Severity, derive_insights};
pub use maintenance::{MaintenanceKind, MaintenanceRecord};
pub use oil::{OilGrade, OilRecord};
pub use reminder::{Reminder, ReminderKind};
pub use stats::{CostMode, StatisticsSnapshot, VendorEfficiency, aggregate};
pub use vehicle::Vehicle;

mod efficiency;
mod error;
mod fuel;
mod insights;
mod maintenance;
mod oil;
mod reminder;
mod stats;
mod util;
mod vehicle;

type ResultEngine<T> = Result<T, EngineError>;

/// Registry of tracked vehicles, with an active selection.
///
/// The statistics functions stay pure and take a [`Vehicle`] explicitly;
/// the garage only resolves ids and forwards record operations.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Garage {
    vehicles: HashMap<Uuid, Vehicle>,
    active: Option<Uuid>,
}

impl Garage {
    pub fn new() -> Self {
        Self::default()
    }

    fn vehicle_mut(&mut self, vehicle_id: Uuid) -> ResultEngine<&mut Vehicle> {
        self.vehicles
            .get_mut(&vehicle_id)
            .ok_or_else(|| EngineError::KeyNotFound(vehicle_id.to_string()))
    }

    /// Registers a vehicle. The first registered vehicle becomes the active
    /// one.
    pub fn new_vehicle(&mut self, name: &str, initial_odometer: f64) -> ResultEngine<Uuid> {
        if self.vehicles.values().any(|vehicle| vehicle.name == name) {
            return Err(EngineError::ExistingKey(name.to_string()));
        }

        let vehicle = Vehicle::new(name.to_string(), initial_odometer)?;
        let vehicle_id = vehicle.id;
        self.vehicles.insert(vehicle_id, vehicle);
        if self.active.is_none() {
            self.active = Some(vehicle_id);
        }

        Ok(vehicle_id)
    }

    pub fn vehicle(&self, vehicle_id: Uuid) -> ResultEngine<&Vehicle> {
        self.vehicles
            .get(&vehicle_id)
            .ok_or_else(|| EngineError::KeyNotFound(vehicle_id.to_string()))
    }

    pub fn vehicle_by_name(&self, name: &str) -> ResultEngine<&Vehicle> {
        self.vehicles
            .values()
            .find(|vehicle| vehicle.name == name)
            .ok_or_else(|| EngineError::KeyNotFound(name.to_string()))
    }

    pub fn select_vehicle(&mut self, vehicle_id: Uuid) -> ResultEngine<()> {
        if !self.vehicles.contains_key(&vehicle_id) {
            return Err(EngineError::KeyNotFound(vehicle_id.to_string()));
        }
        self.active = Some(vehicle_id);
        Ok(())
    }

    pub fn active_vehicle(&self) -> Option<&Vehicle> {
        self.active.and_then(|id| self.vehicles.get(&id))
    }

    /// Removes a vehicle and returns it, clearing the active selection when
    /// it pointed at the removed vehicle.
    pub fn delete_vehicle(&mut self, vehicle_id: Uuid) -> ResultEngine<Vehicle> {
        match self.vehicles.remove(&vehicle_id) {
            Some(vehicle) => {
                if self.active == Some(vehicle_id) {
                    self.active = None;
                }
                Ok(vehicle)
            }
            None => Err(EngineError::KeyNotFound(vehicle_id.to_string())),
        }
    }

    pub fn iter_vehicles(&self) -> impl Iterator<Item = (&Uuid, &Vehicle)> {
        self.vehicles.iter()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_fuel_record(
        &mut self,
        vehicle_id: Uuid,
        date: NaiveDate,
        odometer: f64,
        volume: f64,
        unit_price: f64,
        vendor: Option<&str>,
        fuel_type: Option<&str>,
        fill_state: FillState,
    ) -> ResultEngine<&FuelRecord> {
        self.vehicle_mut(vehicle_id)?
            .add_fuel_record(date, odometer, volume, unit_price, vendor, fuel_type, fill_state)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_oil_record(
        &mut self,
        vehicle_id: Uuid,
        date: NaiveDate,
        odometer: f64,
        brand: String,
        grade: OilGrade,
        volume: f64,
        cost: f64,
    ) -> ResultEngine<&OilRecord> {
        self.vehicle_mut(vehicle_id)?
            .add_oil_record(date, odometer, brand, grade, volume, cost)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_maintenance_record(
        &mut self,
        vehicle_id: Uuid,
        date: NaiveDate,
        odometer: f64,
        description: String,
        kind: MaintenanceKind,
        parts_cost: f64,
        labor_cost: f64,
    ) -> ResultEngine<&MaintenanceRecord> {
        self.vehicle_mut(vehicle_id)?
            .add_maintenance_record(date, odometer, description, kind, parts_cost, labor_cost)
    }

    pub fn delete_fuel_record(
        &mut self,
        vehicle_id: Uuid,
        record_id: Uuid,
    ) -> ResultEngine<FuelRecord> {
        self.vehicle_mut(vehicle_id)?.delete_fuel_record(record_id)
    }

    pub fn delete_oil_record(
        &mut self,
        vehicle_id: Uuid,
        record_id: Uuid,
    ) -> ResultEngine<OilRecord> {
        self.vehicle_mut(vehicle_id)?.delete_oil_record(record_id)
    }

    pub fn delete_maintenance_record(
        &mut self,
        vehicle_id: Uuid,
        record_id: Uuid,
    ) -> ResultEngine<MaintenanceRecord> {
        self.vehicle_mut(vehicle_id)?
            .delete_maintenance_record(record_id)
    }

    pub fn add_reminder(
        &mut self,
        vehicle_id: Uuid,
        kind: ReminderKind,
        label: String,
        target_odometer: f64,
        target_date: Option<NaiveDate>,
    ) -> ResultEngine<&Reminder> {
        self.vehicle_mut(vehicle_id)?
            .add_reminder(kind, label, target_odometer, target_date)
    }

    pub fn complete_reminder(
        &mut self,
        vehicle_id: Uuid,
        reminder_id: Uuid,
    ) -> ResultEngine<&Reminder> {
        self.vehicle_mut(vehicle_id)?.complete_reminder(reminder_id)
    }

    /// Computes a fresh statistics snapshot for one vehicle.
    pub fn statistics(
        &self,
        vehicle_id: Uuid,
        mode: CostMode,
        today: NaiveDate,
    ) -> ResultEngine<StatisticsSnapshot> {
        Ok(self.vehicle(vehicle_id)?.statistics(mode, today))
    }

    /// Computes the insights for one vehicle.
    pub fn insights(
        &self,
        vehicle_id: Uuid,
        mode: CostMode,
        today: NaiveDate,
    ) -> ResultEngine<Vec<Insight>> {
        Ok(self.vehicle(vehicle_id)?.insights(mode, today))
    }
}
