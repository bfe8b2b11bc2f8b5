//! Coarse time-of-day bucketing used to filter candidate responses.

use serde::{Deserialize, Serialize};

/// A four-bucket classification of the wall-clock hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// 05:00-11:59.
    Morning,
    /// 12:00-16:59.
    Afternoon,
    /// 17:00-22:59.
    Evening,
    /// 23:00-04:59.
    LateNight,
}

impl TimeOfDay {
    /// Classify an hour of day (0-23).
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=22 => Self::Evening,
            _ => Self::LateNight,
        }
    }
}

/// The time-of-day tag attached to a response option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDayTag {
    /// Usable in the morning bucket.
    Morning,
    /// Usable in the afternoon bucket.
    Afternoon,
    /// Usable in the evening bucket.
    Evening,
    /// Usable in the late-night bucket.
    LateNight,
    /// Usable at any time.
    Any,
}

impl TimeOfDayTag {
    /// Whether a response with this tag is usable at the given time of day.
    pub fn matches(&self, time_of_day: TimeOfDay) -> bool {
        match self {
            Self::Any => true,
            Self::Morning => time_of_day == TimeOfDay::Morning,
            Self::Afternoon => time_of_day == TimeOfDay::Afternoon,
            Self::Evening => time_of_day == TimeOfDay::Evening,
            Self::LateNight => time_of_day == TimeOfDay::LateNight,
        }
    }
}
