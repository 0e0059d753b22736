//! The `Vehicle` holds one vehicle's expense logs and reminders. The user
//! can track multiple vehicles.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine,
    fuel::{FillState, FuelRecord},
    insights::{Insight, derive_insights},
    maintenance::{MaintenanceKind, MaintenanceRecord},
    oil::{OilGrade, OilRecord},
    reminder::{Reminder, ReminderKind},
    stats::{CostMode, StatisticsSnapshot, aggregate},
    util::validate_non_negative,
};

/// Aggregation root: expense logs plus descriptive metadata.
///
/// Log insertion order is not significant; the statistics functions re-sort
/// by odometer before computing. Every log odometer is kept `>=
/// initial_odometer` by the `add_*` operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Stable identifier, generated once so the vehicle can be renamed
    /// without breaking references.
    pub id: Uuid,
    pub name: String,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub engine_cc: Option<u32>,
    pub purchase_price: Option<f64>,
    pub purchase_date: Option<NaiveDate>,
    /// Odometer reading when tracking began.
    pub initial_odometer: f64,
    pub fuel_log: Vec<FuelRecord>,
    pub oil_log: Vec<OilRecord>,
    pub maintenance_log: Vec<MaintenanceRecord>,
    pub reminders: Vec<Reminder>,
}

impl Vehicle {
    pub fn new(name: String, initial_odometer: f64) -> ResultEngine<Self> {
        validate_non_negative(initial_odometer, "initial odometer")?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            model: None,
            year: None,
            engine_cc: None,
            purchase_price: None,
            purchase_date: None,
            initial_odometer,
            fuel_log: Vec::new(),
            oil_log: Vec::new(),
            maintenance_log: Vec::new(),
            reminders: Vec::new(),
        })
    }

    fn check_odometer(&self, odometer: f64) -> ResultEngine<()> {
        validate_non_negative(odometer, "odometer")?;
        if odometer < self.initial_odometer {
            return Err(EngineError::InvalidRecord(format!(
                "odometer {odometer} below initial reading {}",
                self.initial_odometer
            )));
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_fuel_record(
        &mut self,
        date: NaiveDate,
        odometer: f64,
        volume: f64,
        unit_price: f64,
        vendor: Option<&str>,
        fuel_type: Option<&str>,
        fill_state: FillState,
    ) -> ResultEngine<&FuelRecord> {
        self.check_odometer(odometer)?;
        let record =
            FuelRecord::new(date, odometer, volume, unit_price, vendor, fuel_type, fill_state)?;
        self.fuel_log.push(record);

        Ok(&self.fuel_log[self.fuel_log.len() - 1])
    }

    pub fn add_oil_record(
        &mut self,
        date: NaiveDate,
        odometer: f64,
        brand: String,
        grade: OilGrade,
        volume: f64,
        cost: f64,
    ) -> ResultEngine<&OilRecord> {
        self.check_odometer(odometer)?;
        let record = OilRecord::new(date, odometer, brand, grade, volume, cost)?;
        self.oil_log.push(record);

        Ok(&self.oil_log[self.oil_log.len() - 1])
    }

    pub fn add_maintenance_record(
        &mut self,
        date: NaiveDate,
        odometer: f64,
        description: String,
        kind: MaintenanceKind,
        parts_cost: f64,
        labor_cost: f64,
    ) -> ResultEngine<&MaintenanceRecord> {
        self.check_odometer(odometer)?;
        let record =
            MaintenanceRecord::new(date, odometer, description, kind, parts_cost, labor_cost)?;
        self.maintenance_log.push(record);

        Ok(&self.maintenance_log[self.maintenance_log.len() - 1])
    }

    pub fn delete_fuel_record(&mut self, id: Uuid) -> ResultEngine<FuelRecord> {
        match self.fuel_log.iter().position(|record| record.id == id) {
            Some(index) => Ok(self.fuel_log.remove(index)),
            None => Err(EngineError::KeyNotFound(id.to_string())),
        }
    }

    pub fn delete_oil_record(&mut self, id: Uuid) -> ResultEngine<OilRecord> {
        match self.oil_log.iter().position(|record| record.id == id) {
            Some(index) => Ok(self.oil_log.remove(index)),
            None => Err(EngineError::KeyNotFound(id.to_string())),
        }
    }

    pub fn delete_maintenance_record(&mut self, id: Uuid) -> ResultEngine<MaintenanceRecord> {
        match self.maintenance_log.iter().position(|record| record.id == id) {
            Some(index) => Ok(self.maintenance_log.remove(index)),
            None => Err(EngineError::KeyNotFound(id.to_string())),
        }
    }

    pub fn add_reminder(
        &mut self,
        kind: ReminderKind,
        label: String,
        target_odometer: f64,
        target_date: Option<NaiveDate>,
    ) -> ResultEngine<&Reminder> {
        let reminder = Reminder::new(kind, label, target_odometer, target_date)?;
        self.reminders.push(reminder);

        Ok(&self.reminders[self.reminders.len() - 1])
    }

    pub fn complete_reminder(&mut self, id: Uuid) -> ResultEngine<&Reminder> {
        match self.reminders.iter_mut().find(|reminder| reminder.id == id) {
            Some(reminder) => {
                reminder.completed = true;
                Ok(reminder)
            }
            None => Err(EngineError::KeyNotFound(id.to_string())),
        }
    }

    /// Open reminders whose odometer or date target has been reached.
    pub fn due_reminders(&self, today: NaiveDate) -> Vec<&Reminder> {
        let current = self.current_odometer();
        self.reminders
            .iter()
            .filter(|reminder| reminder.is_due(current, today))
            .collect()
    }

    /// Greatest odometer reading on record, falling back to the initial
    /// reading when every log is empty.
    pub fn current_odometer(&self) -> f64 {
        let fuel = self.fuel_log.iter().map(|r| r.odometer);
        let oil = self.oil_log.iter().map(|r| r.odometer);
        let maintenance = self.maintenance_log.iter().map(|r| r.odometer);

        fuel.chain(oil)
            .chain(maintenance)
            .fold(self.initial_odometer, f64::max)
    }

    /// Computes the full statistics snapshot for this vehicle.
    pub fn statistics(&self, mode: CostMode, today: NaiveDate) -> StatisticsSnapshot {
        aggregate(self, mode, today)
    }

    /// Computes the snapshot and derives the heuristic insights from it.
    pub fn insights(&self, mode: CostMode, today: NaiveDate) -> Vec<Insight> {
        let snapshot = self.statistics(mode, today);
        derive_insights(self, &snapshot)
    }
}
