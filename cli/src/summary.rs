use chrono::Month;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use workhours_core::service::formatter::format_hours;
use workhours_core::GenerationReport;

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "Recorded days")]
    recorded: String,
}

fn month_label(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| month.to_string())
}

pub fn show_summary(report: &GenerationReport) {
    for year in &report.years {
        println!(
            "\n\x1b[1;36m{}\x1b[0m ({}) Total: {}h",
            year.record.year,
            year.source.file_name,
            format_hours(year.totals.year_total)
        );

        let rows: Vec<MonthRow> = year
            .totals
            .months()
            .map(|m| {
                let last = m.last_recorded_day.unwrap_or(0);
                // Short months end early in the calendar
                let marker = if m.is_short() { " !" } else { "" };
                MonthRow {
                    month: month_label(m.month),
                    hours: format_hours(m.hours),
                    recorded: format!("{}/{}{}", last, m.days_in_month, marker),
                }
            })
            .collect();

        if rows.is_empty() {
            println!("No months recorded.");
            continue;
        }

        let mut table = Table::new(rows);
        table
            .with(Style::modern())
            .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
        println!("{}", table);
    }

    println!();
    for calendar in &report.calendars {
        println!(
            "Calendar [{}]: {} ({} events)",
            calendar.language,
            calendar.path.display(),
            calendar.events
        );
    }
}
