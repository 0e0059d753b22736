//! User-defined follow-up reminders.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ResultEngine, util::validate_non_negative};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    Oil,
    Service,
    Part,
}

/// A follow-up the user asked to be reminded about, targeting an odometer
/// reading, a calendar date, or both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: Uuid,
    pub kind: ReminderKind,
    pub label: String,
    pub target_odometer: f64,
    pub target_date: Option<NaiveDate>,
    pub completed: bool,
}

impl Reminder {
    pub fn new(
        kind: ReminderKind,
        label: String,
        target_odometer: f64,
        target_date: Option<NaiveDate>,
    ) -> ResultEngine<Self> {
        validate_non_negative(target_odometer, "target odometer")?;

        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            label,
            target_odometer,
            target_date,
            completed: false,
        })
    }

    /// A reminder is due once either target is reached, unless completed.
    pub fn is_due(&self, current_odometer: f64, today: NaiveDate) -> bool {
        if self.completed {
            return false;
        }
        if current_odometer >= self.target_odometer {
            return true;
        }
        self.target_date.is_some_and(|date| today >= date)
    }
}
