use chrono::{DateTime, FixedOffset, Local, TimeDelta};
use clap::ValueEnum;
use shared::{EventDuration, MeetupEvent, Timestamp};

use super::MeetupError;

/// How epoch milliseconds become calendar date-times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TimezonePolicy {
    /// Dates are reported in UTC
    #[default]
    Utc,
    /// Dates use the offset of the host's local clock
    Local,
}

impl TimezonePolicy {
    pub fn datetime_from_millis(self, millis: i64) -> Option<DateTime<FixedOffset>> {
        let utc = DateTime::<chrono::Utc>::from_timestamp_millis(millis)?;
        Some(match self {
            Self::Utc => utc.fixed_offset(),
            Self::Local => utc.with_timezone(&Local).fixed_offset(),
        })
    }
}

/// Normalize every event in place and hand the list back.
pub fn normalize_events(
    mut events: Vec<MeetupEvent>,
    tz: TimezonePolicy,
) -> Result<Vec<MeetupEvent>, MeetupError> {
    for event in &mut events {
        normalize_event(event, tz)?;
    }
    Ok(events)
}

/// Turn the raw millisecond fields of one event into date-times and spans.
///
/// Values that are already converted are left alone, so running this twice
/// is the same as running it once.
pub fn normalize_event(event: &mut MeetupEvent, tz: TimezonePolicy) -> Result<(), MeetupError> {
    normalize_timestamp(&mut event.time, "time", tz)?;
    normalize_timestamp(&mut event.created, "created", tz)?;
    normalize_timestamp(&mut event.updated, "updated", tz)?;

    if let Some(created) = event.group.as_mut().and_then(|g| g.created.as_mut()) {
        normalize_timestamp(created, "group.created", tz)?;
    }

    if let Some(duration) = event.duration.as_mut() {
        normalize_duration(duration)?;
    }

    Ok(())
}

fn normalize_timestamp(
    timestamp: &mut Timestamp,
    field: &'static str,
    tz: TimezonePolicy,
) -> Result<(), MeetupError> {
    if let Timestamp::EpochMillis(millis) = *timestamp {
        let datetime = tz
            .datetime_from_millis(millis)
            .ok_or(MeetupError::TimestampOutOfRange { field, millis })?;
        *timestamp = Timestamp::DateTime(datetime);
    }
    Ok(())
}

fn normalize_duration(duration: &mut EventDuration) -> Result<(), MeetupError> {
    if let EventDuration::Millis(millis) = *duration {
        let span = TimeDelta::try_milliseconds(millis)
            .ok_or(MeetupError::DurationOutOfRange { millis })?;
        *duration = EventDuration::Span(span);
    }
    Ok(())
}
