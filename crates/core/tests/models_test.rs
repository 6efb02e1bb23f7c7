use std::collections::BTreeSet;

use barberbook_core::{
    errors::BookingError,
    models::{
        Appointment, AppointmentId, BookingRequest, ClockTime, DayStatus, ScheduleConfig,
        ScheduleUpdate, SlotDuration, WorkingDays,
    },
};
use chrono::{NaiveDate, Weekday};
use fake::{
    Fake,
    faker::{internet::en::SafeEmail, name::en::Name, phone_number::en::PhoneNumber},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, json, to_string, to_value};
use serde_test::{Token, assert_de_tokens_error, assert_tokens};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn time(s: &str) -> ClockTime {
    s.parse().unwrap()
}

#[rstest]
#[case("00:00", 0)]
#[case("09:05", 9 * 60 + 5)]
#[case("17:30", 17 * 60 + 30)]
#[case("23:59", 23 * 60 + 59)]
fn test_clock_time_parse(#[case] input: &str, #[case] minutes: u16) {
    let parsed: ClockTime = input.parse().expect("valid time");
    assert_eq!(parsed.minutes(), minutes);
}

#[rstest]
#[case("24:00")]
#[case("12:60")]
#[case("1200")]
#[case("12:5")]
#[case("9:30")]
#[case("+9:00")]
#[case("+09:00")]
#[case("09:+5")]
#[case("-1:00")]
#[case("1 :00")]
#[case("ab:cd")]
#[case("")]
fn test_clock_time_rejects_malformed(#[case] input: &str) {
    let result = input.parse::<ClockTime>();
    assert!(matches!(result, Err(BookingError::Validation(_))));
}

#[test]
fn test_clock_time_tokens() {
    assert_tokens(&time("09:05"), &[Token::Str("09:05")]);
    assert_eq!(time(" 09:00 ").to_string(), "09:00");
    assert_de_tokens_error::<ClockTime>(
        &[Token::Str("25:00")],
        "Validation error: Invalid time '25:00', expected HH:MM",
    );
}

#[test]
fn test_slot_duration_tokens() {
    assert_tokens(&SlotDuration::ThirtyMinutes, &[Token::U16(30)]);
    assert_tokens(&SlotDuration::SixtyMinutes, &[Token::U16(60)]);
    assert_de_tokens_error::<SlotDuration>(
        &[Token::U16(45)],
        "Validation error: Slot duration must be 30 or 60 minutes, got 45",
    );
}

#[test]
fn test_working_days_tokens() {
    let days = WorkingDays::new([Weekday::Sun, Weekday::Wed]);
    assert_tokens(
        &days,
        &[
            Token::Seq { len: Some(2) },
            Token::U8(0),
            Token::U8(3),
            Token::SeqEnd,
        ],
    );
}

#[test]
fn test_working_days_rejects_out_of_range() {
    let result = WorkingDays::from_indices([1, 7]);
    assert!(matches!(result, Err(BookingError::Validation(_))));

    let parsed: Result<WorkingDays, _> = from_str("[1, 2, 9]");
    assert!(parsed.is_err());
}

#[test]
fn test_working_days_membership() {
    let days = WorkingDays::default();

    assert_eq!(days.len(), 6);
    assert!(!days.contains(Weekday::Sun));
    assert!(days.contains(Weekday::Mon));
    assert!(days.contains(Weekday::Sat));
    assert_eq!(days.indices().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(days.iter().next(), Some(Weekday::Mon));
}

#[test]
fn test_default_schedule_config() {
    let config = ScheduleConfig::default();

    assert_eq!(
        to_value(&config).unwrap(),
        json!({
            "startTime": "09:00",
            "endTime": "18:00",
            "slotDuration": 30,
            "workingDays": [1, 2, 3, 4, 5, 6],
            "blockedDates": [],
            "isConfigured": false,
        })
    );
}

#[test]
fn test_schedule_config_serialization() {
    let config = ScheduleConfig {
        start_time: time("10:00"),
        end_time: time("14:30"),
        slot_duration: SlotDuration::SixtyMinutes,
        working_days: WorkingDays::new([Weekday::Tue, Weekday::Thu]),
        blocked_dates: BTreeSet::from([date("2024-12-25"), date("2024-12-24")]),
        is_configured: true,
    };

    let json = to_string(&config).expect("Failed to serialize config");
    let deserialized: ScheduleConfig = from_str(&json).expect("Failed to deserialize config");

    assert_eq!(deserialized, config);
    assert!(json.contains(r#""blockedDates":["2024-12-24","2024-12-25"]"#));
}

#[test]
fn test_schedule_config_missing_fields_use_defaults() {
    let config: ScheduleConfig =
        from_str(r#"{"startTime":"08:00","isConfigured":true}"#).expect("partial record");

    assert_eq!(config.start_time, time("08:00"));
    assert_eq!(config.end_time, time("18:00"));
    assert_eq!(config.working_days, WorkingDays::default());
    assert!(config.is_configured);
}

#[test]
fn test_merged_with_forces_configured() {
    let current = ScheduleConfig::default();
    let update = ScheduleUpdate {
        end_time: Some(time("12:00")),
        ..Default::default()
    };

    let merged = current.merged_with(&update);

    assert!(merged.is_configured);
    assert_eq!(merged.start_time, current.start_time);
    assert_eq!(merged.end_time, time("12:00"));
    assert_eq!(merged.working_days, current.working_days);
    assert!(ScheduleUpdate::default().is_empty());
    assert!(!update.is_empty());
}

#[rstest]
#[case(Some("10:00"), Some("09:00"), None, "End time must be later than start time")]
#[case(Some("10:00"), Some("10:00"), None, "End time must be later than start time")]
#[case(None, None, Some(vec![]), "Select at least one working day")]
#[case(Some("12:00"), Some("11:00"), Some(vec![]), "Select at least one working day")]
fn test_schedule_update_validation_errors(
    #[case] start: Option<&str>,
    #[case] end: Option<&str>,
    #[case] days: Option<Vec<u8>>,
    #[case] message: &str,
) {
    let update = ScheduleUpdate {
        start_time: start.map(time),
        end_time: end.map(time),
        working_days: days.map(|d| WorkingDays::from_indices(d).unwrap()),
        ..Default::default()
    };

    match update.validate(&ScheduleConfig::default()) {
        Err(BookingError::Validation(reason)) => assert_eq!(reason, message),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_schedule_update_validation_uses_current_values() {
    let current = ScheduleConfig::default();

    let only_start = ScheduleUpdate {
        start_time: Some(time("17:30")),
        ..Default::default()
    };
    assert!(only_start.validate(&current).is_ok());

    let past_end = ScheduleUpdate {
        start_time: Some(time("18:00")),
        ..Default::default()
    };
    assert!(past_end.validate(&current).is_err());
}

#[test]
fn test_appointment_serialization() {
    let request = BookingRequest {
        date: date("2024-06-10"),
        time_slot: time("09:00"),
        client_name: Name().fake(),
        client_phone: PhoneNumber().fake(),
        client_email: SafeEmail().fake(),
    };
    let appointment = Appointment::from_request(AppointmentId::generate(), request.clone());

    let value = to_value(&appointment).unwrap();
    assert_eq!(value["date"], "2024-06-10");
    assert_eq!(value["timeSlot"], "09:00");
    assert_eq!(value["clientName"], request.client_name.as_str());
    assert_eq!(value["id"], appointment.id.to_string().as_str());

    let deserialized: Appointment = serde_json::from_value(value).unwrap();
    assert_eq!(deserialized, appointment);
    assert!(deserialized.occupies(date("2024-06-10"), time("09:00")));
    assert!(!deserialized.occupies(date("2024-06-10"), time("09:30")));
}

#[test]
fn test_appointment_ids_are_unique() {
    let ids: BTreeSet<String> = (0..100)
        .map(|_| AppointmentId::generate().to_string())
        .collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn test_day_status_free_count() {
    assert_eq!(DayStatus::Open { total: 18, booked: 3 }.free(), 15);
    assert_eq!(DayStatus::Blocked.free(), 0);
    assert!(!DayStatus::NonWorkingDay.is_open());
    assert_eq!(
        to_value(DayStatus::Open { total: 2, booked: 1 }).unwrap(),
        json!({"status": "open", "total": 2, "booked": 1})
    );
}
