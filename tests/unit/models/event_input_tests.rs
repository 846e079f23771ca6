// Unit tests for form input parsing: dates, times and colors
// Parameterized with test-case

use rust_calendar_widget::models::event::{EventColor, EventDraft};
use rust_calendar_widget::services::event::EventError;
use rust_calendar_widget::services::export::ExportFormat;
use rust_calendar_widget::utils::date::parse_time_of_day;


#[cfg(test)]
mod color_tests {
    use super::*;
    use test_case::test_case;

    #[test_case("blue", EventColor::Blue; "blue")]
    #[test_case("green", EventColor::Green; "green")]
    #[test_case("red", EventColor::Red; "red")]
    #[test_case("yellow", EventColor::Yellow; "yellow")]
    #[test_case("purple", EventColor::Purple; "purple")]
    #[test_case("PURPLE", EventColor::Purple; "upper case")]
    fn test_color_parses(input: &str, expected: EventColor) {
        assert_eq!(input.parse::<EventColor>().unwrap(), expected);
        assert_eq!(expected.to_string(), input.to_lowercase());
    }

    #[test_case("orange"; "outside the palette")]
    #[test_case("#0000ff"; "hex value")]
    fn test_color_rejected(input: &str) {
        assert!(matches!(
            input.parse::<EventColor>(),
            Err(EventError::InvalidColor(_))
        ));
    }
}

#[cfg(test)]
mod time_tests {
    use super::*;
    use test_case::test_case;

    #[test_case("00:00", true; "midnight")]
    #[test_case("09:05", true; "morning")]
    #[test_case("23:59", true; "last minute")]
    #[test_case("9:05", false; "missing zero padding")]
    #[test_case("09:5", false; "short minutes")]
    #[test_case("24:00", false; "hour out of range")]
    #[test_case("12:60", false; "minute out of range")]
    #[test_case("12:00:00", false; "seconds")]
    #[test_case("", false; "empty")]
    fn test_time_of_day(input: &str, valid: bool) {
        assert_eq!(parse_time_of_day(input).is_some(), valid);
    }
}

#[cfg(test)]
mod form_tests {
    use super::*;
    use test_case::test_case;

    #[test_case("2024/06/10", "09:00", "10:00"; "slashed date")]
    #[test_case("2024-06-31", "09:00", "10:00"; "day out of range")]
    fn test_from_form_rejects_date(date: &str, start: &str, end: &str) {
        let result = EventDraft::from_form("Meeting", date, start, end, "", "blue");
        assert!(matches!(result, Err(EventError::InvalidDate(_))));
    }

    #[test_case("9:00", "10:00"; "unpadded start")]
    #[test_case("09:00", "10"; "truncated end")]
    fn test_from_form_rejects_time(start: &str, end: &str) {
        let result = EventDraft::from_form("Meeting", "2024-06-10", start, end, "", "blue");
        assert!(matches!(result, Err(EventError::InvalidTime(_))));
    }

    #[test_case("10:00", "10:00"; "equal")]
    #[test_case("10:30", "10:00"; "backwards")]
    fn test_from_form_rejects_range(start: &str, end: &str) {
        let result = EventDraft::from_form("Meeting", "2024-06-10", start, end, "", "blue");
        assert!(matches!(result, Err(EventError::InvalidTimeRange { .. })));
    }

    #[test]
    fn test_from_form_keeps_description() {
        let draft =
            EventDraft::from_form("Meeting", "2024-06-10", "09:00", "10:00", "Room 4", "").unwrap();
        assert_eq!(draft.description.as_deref(), Some("Room 4"));
        assert_eq!(draft.color, EventColor::Blue);
    }
}

#[cfg(test)]
mod export_format_tests {
    use super::*;
    use test_case::test_case;

    #[test_case(ExportFormat::Json, "json", "application/json"; "json")]
    #[test_case(ExportFormat::Csv, "csv", "text/csv"; "csv")]
    fn test_export_format_metadata(format: ExportFormat, extension: &str, mime: &str) {
        assert_eq!(format.extension(), extension);
        assert_eq!(format.mime_type(), mime);
        assert_eq!(extension.parse::<ExportFormat>().unwrap(), format);
    }
}
