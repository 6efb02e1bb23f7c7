use std::{collections::BTreeSet, fmt, str::FromStr};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

const MINUTES_PER_DAY: u16 = 24 * 60;

/// Weekdays indexed the way the persisted record stores them: 0 = Sunday.
const WEEKDAYS_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// A wall-clock time of day with minute precision, written as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(pub(crate) u16);

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(u16::from(hour) * 60 + u16::from(minute)))
        } else {
            None
        }
    }

    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BookingError::Validation(format!("Invalid time '{}', expected HH:MM", s));

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !two_digits(hour) || !two_digits(minute) {
            return Err(invalid());
        }
        let hour = hour.parse::<u8>().map_err(|_| invalid())?;
        let minute = minute.parse::<u8>().map_err(|_| invalid())?;

        ClockTime::new(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = BookingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

/// Length of one bookable slot. Only half-hour and hour slots are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum SlotDuration {
    #[default]
    ThirtyMinutes,
    SixtyMinutes,
}

impl SlotDuration {
    pub fn minutes(self) -> u16 {
        match self {
            SlotDuration::ThirtyMinutes => 30,
            SlotDuration::SixtyMinutes => 60,
        }
    }
}

impl TryFrom<u16> for SlotDuration {
    type Error = BookingError;

    fn try_from(minutes: u16) -> Result<Self, Self::Error> {
        match minutes {
            30 => Ok(SlotDuration::ThirtyMinutes),
            60 => Ok(SlotDuration::SixtyMinutes),
            other => Err(BookingError::Validation(format!(
                "Slot duration must be 30 or 60 minutes, got {}",
                other
            ))),
        }
    }
}

impl From<SlotDuration> for u16 {
    fn from(duration: SlotDuration) -> Self {
        duration.minutes()
    }
}

impl fmt::Display for SlotDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.minutes())
    }
}

/// Returns the weekday for a persisted index (0 = Sunday .. 6 = Saturday).
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    WEEKDAYS_FROM_SUNDAY.get(usize::from(index)).copied()
}

/// Returns the persisted index of a weekday (0 = Sunday .. 6 = Saturday).
pub fn weekday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

/// The set of weekdays on which the barber accepts bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct WorkingDays(BTreeSet<u8>);

impl WorkingDays {
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        Self(days.into_iter().map(weekday_index).collect())
    }

    pub fn from_indices(indices: impl IntoIterator<Item = u8>) -> BookingResult<Self> {
        let mut days = BTreeSet::new();
        for index in indices {
            if weekday_from_index(index).is_none() {
                return Err(BookingError::Validation(format!(
                    "Weekday index must be between 0 (Sunday) and 6 (Saturday), got {}",
                    index
                )));
            }
            days.insert(index);
        }
        Ok(Self(days))
    }

    pub fn contains(&self, weekday: Weekday) -> bool {
        self.0.contains(&weekday_index(weekday))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Weekdays in index order, Sunday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0.iter().filter_map(|&index| weekday_from_index(index))
    }

    pub fn indices(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }
}

impl Default for WorkingDays {
    fn default() -> Self {
        Self::new([
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ])
    }
}

impl TryFrom<Vec<u8>> for WorkingDays {
    type Error = BookingError;

    fn try_from(indices: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_indices(indices)
    }
}

impl From<WorkingDays> for Vec<u8> {
    fn from(days: WorkingDays) -> Self {
        days.0.into_iter().collect()
    }
}

/// The barber's recurring schedule plus the blocked-date exceptions.
///
/// This is the only record that outlives the process. Missing fields in a
/// stored record fall back to their defaults when it is read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleConfig {
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub slot_duration: SlotDuration,
    pub working_days: WorkingDays,
    pub blocked_dates: BTreeSet<NaiveDate>,
    pub is_configured: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            start_time: ClockTime(9 * 60),
            end_time: ClockTime(18 * 60),
            slot_duration: SlotDuration::ThirtyMinutes,
            working_days: WorkingDays::default(),
            blocked_dates: BTreeSet::new(),
            is_configured: false,
        }
    }
}

impl ScheduleConfig {
    /// Merges `update` into a copy of this config and marks it configured.
    pub fn merged_with(&self, update: &ScheduleUpdate) -> ScheduleConfig {
        ScheduleConfig {
            start_time: update.start_time.unwrap_or(self.start_time),
            end_time: update.end_time.unwrap_or(self.end_time),
            slot_duration: update.slot_duration.unwrap_or(self.slot_duration),
            working_days: update
                .working_days
                .clone()
                .unwrap_or_else(|| self.working_days.clone()),
            blocked_dates: update
                .blocked_dates
                .clone()
                .unwrap_or_else(|| self.blocked_dates.clone()),
            is_configured: true,
        }
    }

    pub fn is_blocked(&self, date: NaiveDate) -> bool {
        self.blocked_dates.contains(&date)
    }

    pub fn works_on(&self, date: NaiveDate) -> bool {
        self.working_days.contains(date.weekday())
    }
}

/// A partial schedule change submitted by the barber.
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleUpdate {
    pub start_time: Option<ClockTime>,
    pub end_time: Option<ClockTime>,
    pub slot_duration: Option<SlotDuration>,
    pub working_days: Option<WorkingDays>,
    pub blocked_dates: Option<BTreeSet<NaiveDate>>,
}

impl ScheduleUpdate {
    pub fn is_empty(&self) -> bool {
        *self == ScheduleUpdate::default()
    }

    /// Checks the config that applying this update to `current` would produce.
    ///
    /// The booking store applies updates unconditionally, so callers run this
    /// first.
    pub fn validate(&self, current: &ScheduleConfig) -> BookingResult<()> {
        let merged = current.merged_with(self);

        if merged.working_days.is_empty() {
            return Err(BookingError::Validation(
                "Select at least one working day".to_string(),
            ));
        }

        if merged.start_time >= merged.end_time {
            return Err(BookingError::Validation(
                "End time must be later than start time".to_string(),
            ));
        }

        Ok(())
    }
}
