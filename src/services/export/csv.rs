use crate::models::event::Event;
use crate::models::settings::CsvQuoting;
use crate::utils::date::{DATE_FORMAT, TIME_FORMAT};

pub(super) const HEADERS: [&str; 7] = [
    "id",
    "name",
    "date",
    "startTime",
    "endTime",
    "description",
    "color",
];

/// Header row plus one row per event, joined by `\n` without a trailing
/// newline. The description column is always quoted.
pub(super) fn render(events: &[Event], quoting: CsvQuoting) -> String {
    let mut lines = Vec::with_capacity(events.len() + 1);
    lines.push(HEADERS.join(","));
    lines.extend(events.iter().map(|event| render_row(event, quoting)));
    lines.join("\n")
}

fn render_row(event: &Event, quoting: CsvQuoting) -> String {
    let description = event.description.as_deref().unwrap_or_default();
    let fields = [
        plain(&event.id.to_string(), quoting),
        plain(&event.name, quoting),
        plain(&event.date.format(DATE_FORMAT).to_string(), quoting),
        plain(&event.start_time.format(TIME_FORMAT).to_string(), quoting),
        plain(&event.end_time.format(TIME_FORMAT).to_string(), quoting),
        quoted(description, quoting),
        plain(event.color.as_str(), quoting),
    ];
    fields.join(",")
}

fn plain(value: &str, quoting: CsvQuoting) -> String {
    match quoting {
        CsvQuoting::Legacy => value.to_string(),
        CsvQuoting::Rfc4180 if needs_quotes(value) => quoted(value, quoting),
        CsvQuoting::Rfc4180 => value.to_string(),
    }
}

fn quoted(value: &str, quoting: CsvQuoting) -> String {
    match quoting {
        CsvQuoting::Legacy => format!("\"{}\"", value),
        CsvQuoting::Rfc4180 => format!("\"{}\"", value.replace('"', "\"\"")),
    }
}

fn needs_quotes(value: &str) -> bool {
    value.contains([',', '"', '\r', '\n'])
}
