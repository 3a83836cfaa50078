//! Reservation Times Model

use serde::{Deserialize, Serialize};

/// A single `[start, end]` time window, `"HH:MM"` strings
pub type TimeWindow = (String, String);

/// Day of week, Saturday first (matching the API's key order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl DayOfWeek {
    /// All seven days in API key order
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ];

    /// Lowercase API key for this day
    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
        }
    }
}

/// Per-day reservation time windows
///
/// Every day is independently optional; absent days are omitted from
/// the serialized form entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReservationTimes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday: Option<Vec<TimeWindow>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday: Option<Vec<TimeWindow>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monday: Option<Vec<TimeWindow>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<Vec<TimeWindow>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<Vec<TimeWindow>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thursday: Option<Vec<TimeWindow>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friday: Option<Vec<TimeWindow>>,
}

impl ReservationTimes {
    /// Get the configured windows for a day, if any
    pub fn windows(&self, day: DayOfWeek) -> Option<&[TimeWindow]> {
        self.field(day).as_deref()
    }

    /// Set the windows for a day
    pub fn set_windows(&mut self, day: DayOfWeek, windows: Vec<TimeWindow>) {
        *self.field_mut(day) = Some(windows);
    }

    /// Clear the windows for a day (the key is dropped, not emptied)
    pub fn clear_windows(&mut self, day: DayOfWeek) {
        *self.field_mut(day) = None;
    }

    fn field(&self, day: DayOfWeek) -> &Option<Vec<TimeWindow>> {
        match day {
            DayOfWeek::Saturday => &self.saturday,
            DayOfWeek::Sunday => &self.sunday,
            DayOfWeek::Monday => &self.monday,
            DayOfWeek::Tuesday => &self.tuesday,
            DayOfWeek::Wednesday => &self.wednesday,
            DayOfWeek::Thursday => &self.thursday,
            DayOfWeek::Friday => &self.friday,
        }
    }

    fn field_mut(&mut self, day: DayOfWeek) -> &mut Option<Vec<TimeWindow>> {
        match day {
            DayOfWeek::Saturday => &mut self.saturday,
            DayOfWeek::Sunday => &mut self.sunday,
            DayOfWeek::Monday => &mut self.monday,
            DayOfWeek::Tuesday => &mut self.tuesday,
            DayOfWeek::Wednesday => &mut self.wednesday,
            DayOfWeek::Thursday => &mut self.thursday,
            DayOfWeek::Friday => &mut self.friday,
        }
    }
}
