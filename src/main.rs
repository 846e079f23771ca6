// Rust Calendar Widget
// Terminal front end: prints a month and optionally writes an export

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

use rust_calendar_widget::models::calendar_cell::CalendarCell;
use rust_calendar_widget::models::settings::Settings;
use rust_calendar_widget::services::event::EventStore;
use rust_calendar_widget::services::export::{export_month, write_export, ExportFormat};
use rust_calendar_widget::services::month_view::{build_cells, MonthViewOptions};
use rust_calendar_widget::services::settings::{resolve_database_path, SettingsService};
use rust_calendar_widget::services::storage::SqliteStorage;
use rust_calendar_widget::utils::date::{parse_month, DATE_FORMAT, TIME_FORMAT};

const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const USAGE: &str =
    "usage: rust-calendar-widget [YYYY-MM] [--filter KEYWORD] [--export json|csv] [--out DIR]";

#[derive(Debug, Default)]
struct Args {
    month: Option<NaiveDate>,
    filter: Option<String>,
    export: Option<ExportFormat>,
    export_requested: bool,
    out_dir: Option<PathBuf>,
}

fn parse_args(raw: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    let mut raw = raw.peekable();

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--filter" => {
                args.filter = Some(raw.next().ok_or_else(|| anyhow!("--filter needs a keyword"))?);
            }
            "--export" => {
                args.export_requested = true;
                if let Some(format) = raw.next_if(|next| !next.starts_with("--")) {
                    args.export = Some(format.parse().map_err(|e: String| anyhow!(e))?);
                }
            }
            "--out" => {
                args.out_dir = Some(PathBuf::from(
                    raw.next().ok_or_else(|| anyhow!("--out needs a directory"))?,
                ));
            }
            "-h" | "--help" => bail!(USAGE),
            other => {
                let month =
                    parse_month(other).ok_or_else(|| anyhow!("Invalid month '{}'\n{}", other, USAGE))?;
                args.month = Some(month);
            }
        }
    }

    Ok(args)
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Rust Calendar Widget");

    let args = parse_args(std::env::args().skip(1))?;
    let settings = load_settings_or_default();

    let db_path = resolve_database_path(&settings)?;
    let storage = SqliteStorage::open(&db_path)
        .with_context(|| format!("Failed to open event storage at {:?}", db_path))?;
    let store = EventStore::open(storage, &settings)
        .with_context(|| format!("Failed to load events from {:?}", db_path))?;

    let today = Local::now().date_naive();
    let reference = args.month.unwrap_or(today);

    let mut options = MonthViewOptions::new(reference, today);
    if let Some(keyword) = args.filter.as_deref() {
        options = options.keyword(keyword);
    }
    if settings.pad_grid {
        options = options.padded(settings.first_day_of_week);
    }

    let cells = build_cells(&options, store.list());
    print_month(reference, &cells, &settings);

    if args.export_requested {
        let format = args.export.unwrap_or(settings.export_format);
        let file = export_month(store.list(), format, reference, settings.csv_quoting)?;
        let dir = args.out_dir.unwrap_or_else(|| PathBuf::from("."));
        let path = write_export(&file, &dir)?;
        println!("\nExported {} to {}", file.filename, path.display());
    }

    Ok(())
}

fn load_settings_or_default() -> Settings {
    match SettingsService::from_default_location().and_then(|service| service.get()) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("Failed to load settings, using defaults: {:#}", err);
            Settings::default()
        }
    }
}

fn print_month(reference: NaiveDate, cells: &[CalendarCell], settings: &Settings) {
    println!("{}", reference.format("%B %Y"));

    if settings.pad_grid {
        let header: Vec<&str> = (0..7)
            .map(|idx| WEEKDAY_NAMES[(usize::from(settings.first_day_of_week) + idx) % 7])
            .collect();
        println!("{}", header.join("  "));

        for week in cells.chunks(7) {
            let row: Vec<String> = week.iter().map(format_day).collect();
            println!("{}", row.join(" "));
        }
    }

    println!();
    for cell in cells.iter().filter(|c| c.visible && c.in_current_month) {
        if !cell.has_events() {
            continue;
        }
        println!("{}", cell.date.format(DATE_FORMAT));
        for event in &cell.events {
            println!(
                "  {}-{}  {} [{}]",
                event.start_time.format(TIME_FORMAT),
                event.end_time.format(TIME_FORMAT),
                event.name,
                event.color
            );
        }
    }
}

fn format_day(cell: &CalendarCell) -> String {
    if !cell.visible {
        return "    ".to_string();
    }
    let marker = match (cell.is_today, cell.has_events()) {
        (true, _) => '*',
        (false, true) => '+',
        (false, false) => ' ',
    };
    let day = cell.date.format("%e").to_string();
    if cell.in_current_month {
        format!("{}{} ", day, marker)
    } else {
        format!("{:<4}", format!("({})", day.trim()))
    }
}
