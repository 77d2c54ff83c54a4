//! Output formatting for CLI commands.
//!
//! This module handles formatting output as either JSON or human-readable text.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use shiftplan::{AgendaItem, DayRecord};

use super::types::{
    AgendaResult, BirthdayChange, BirthdayList, CalendarResult, ColorList, DayResult, HolidayList,
    ShiftResult, VacationChange, VacationList,
};

const MONTH_NAMES: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

const WEEKDAY_HEADER: &str = "Mo      Di      Mi      Do      Fr      Sa      So";

fn print_json<T: Serialize>(result: &T) {
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize output: {}", e),
    }
}

fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("?")
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Weekday column (Monday = 0) of `date`.
fn weekday_column(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

/// Marker characters of a day: note `*`, vacation `U`, AFZ `A`, holiday `H`,
/// birthday `B`.
fn markers(day: &DayRecord) -> String {
    let mut out = String::new();
    if day.has_note() {
        out.push('*');
    }
    if day.is_personal_vacation() {
        out.push('U');
    }
    if day.is_afz() {
        out.push('A');
    }
    if day.holiday.is_some() {
        out.push('H');
    }
    if day.birthday.is_some() {
        out.push('B');
    }
    out
}

/// One grid cell: day of month, shift code, markers.
fn cell(day: &DayRecord) -> String {
    format!("{:>2} {}{:<3}", day.date.day(), day.shift.code(), markers(day))
}

/// Render one month as a Monday-first grid.
fn month_grid(days: &[DayRecord]) -> Vec<String> {
    let Some(first) = days.first() else {
        return Vec::new();
    };

    let mut lines = vec![
        format!("{} {}", month_name(first.date.month()), first.date.year()),
        WEEKDAY_HEADER.to_string(),
    ];
    let mut row: Vec<String> = vec![" ".repeat(7); weekday_column(first.date)];
    for day in days {
        row.push(cell(day));
        if row.len() == 7 {
            lines.push(row.join(" ").trim_end().to_string());
            row.clear();
        }
    }
    if !row.is_empty() {
        lines.push(row.join(" ").trim_end().to_string());
    }
    lines
}

fn day_details(day: &DayRecord) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(holiday) = &day.holiday {
        parts.push(holiday.clone());
    }
    if let Some(name) = &day.birthday {
        parts.push(format!("Geburtstag {}", name));
    }
    if let Some(event) = &day.event {
        if !event.note.is_empty() {
            parts.push(event.note.clone());
        }
        if event.colleague_vacation && !event.colleagues.is_empty() {
            parts.push(format!("Urlaub: {}", event.colleagues.join(", ")));
        }
    }
    (!parts.is_empty()).then(|| format!("  {}  {}", format_date(day.date), parts.join("; ")))
}

/// Print calendar grid.
pub fn print_calendar(result: &CalendarResult, json: bool) {
    if json {
        print_json(result);
        return;
    }

    let mut month_start = 0;
    while month_start < result.days.len() {
        let month = result.days[month_start].date.month();
        let len = result.days[month_start..]
            .iter()
            .take_while(|d| d.date.month() == month)
            .count();
        let days = &result.days[month_start..month_start + len];

        for line in month_grid(days) {
            println!("{}", line);
        }
        let details: Vec<String> = days.iter().filter_map(day_details).collect();
        if !details.is_empty() {
            println!();
            for line in details {
                println!("{}", line);
            }
        }
        println!();
        month_start += len;
    }

    println!("Anchor: {}", format_date(result.anchor));
    let totals: Vec<String> = result
        .shift_totals
        .iter()
        .map(|(shift, count)| format!("{} {}", shift.label(), count))
        .collect();
    println!("Year {}: {}", result.year, totals.join(", "));
    println!("Vacation days: {}", result.vacation_days);
}

/// Print shift of one date.
pub fn print_shift(result: &ShiftResult, json: bool) {
    if json {
        print_json(result);
        return;
    }

    println!(
        "{} ({}): {} [{}]",
        format_date(result.date),
        result.date.format("%A"),
        result.label,
        result.shift.code()
    );
    println!(
        "Cycle day {} of 35 (anchor {})",
        result.cycle_index + 1,
        format_date(result.anchor)
    );
    if let Some(holiday) = &result.holiday {
        println!("Holiday: {}", holiday);
    }
    if let Some(name) = &result.birthday {
        println!("Birthday: {}", name);
    }
    if let Some(annotation) = &result.annotation {
        if annotation.personal_vacation {
            println!("Vacation");
        }
        if annotation.afz {
            println!("AFZ");
        }
        if annotation.colleague_vacation {
            println!("Colleagues on vacation: {}", annotation.colleagues.join(", "));
        }
        if !annotation.note.is_empty() {
            println!("Note: {}", annotation.note);
        }
    }
}

/// Print day change.
pub fn print_day(result: &DayResult, json: bool) {
    if json {
        print_json(result);
    } else {
        println!("{}", result.message);
    }
}

/// Print vacation change.
pub fn print_vacation_change(result: &VacationChange, json: bool) {
    if json {
        print_json(result);
    } else {
        println!(
            "{} ({} - {})",
            result.message,
            format_date(result.from),
            format_date(result.to)
        );
    }
}

/// Print vacation blocks.
pub fn print_vacation_list(result: &VacationList, json: bool) {
    if json {
        print_json(result);
        return;
    }

    if result.blocks.is_empty() {
        println!("No vacation in {}.", result.year);
        return;
    }
    for block in &result.blocks {
        if block.is_single_day() {
            println!("  {}", format_date(block.start));
        } else {
            println!(
                "  {} - {} ({} days)",
                format_date(block.start),
                format_date(block.end),
                block.days()
            );
        }
    }
    println!("\nTotal: {} days in {}", result.total_days, result.year);
}

/// Print birthday change.
pub fn print_birthday_change(result: &BirthdayChange, json: bool) {
    if json {
        print_json(result);
    } else {
        println!("{}", result.message);
    }
}

/// Print birthdays.
pub fn print_birthday_list(result: &BirthdayList, json: bool) {
    if json {
        print_json(result);
        return;
    }

    if result.birthdays.is_empty() {
        println!("No birthdays saved.");
    }
    for birthday in &result.birthdays {
        println!(
            "  {:02}.{:02}.  {}",
            birthday.day,
            birthday.month + 1,
            birthday.name
        );
    }
}

/// Print agenda.
pub fn print_agenda(result: &AgendaResult, json: bool) {
    if json {
        print_json(result);
        return;
    }

    if result.months.is_empty() {
        println!("Nothing planned in {}.", result.year);
        return;
    }
    for month in &result.months {
        println!("{} {}", month_name(month.month), month.year);
        for item in &month.items {
            match item {
                AgendaItem::Vacation(block) if block.is_single_day() => {
                    println!("  {}  Urlaub", format_date(block.start));
                }
                AgendaItem::Vacation(block) => {
                    println!(
                        "  {} - {}  Urlaub ({} Tage)",
                        format_date(block.start),
                        format_date(block.end),
                        block.days()
                    );
                }
                AgendaItem::Entry(entry) => {
                    let mut line = format!("  {}  {}", format_date(entry.date), entry.label());
                    if let Some(annotation) = &entry.annotation {
                        if annotation.colleague_vacation && !annotation.colleagues.is_empty() {
                            line.push_str(&format!(" | Urlaub: {}", annotation.colleagues.join(", ")));
                        }
                        if !annotation.note.is_empty() {
                            line.push_str(&format!(" | {}", annotation.note));
                        }
                    }
                    if let Some(name) = &entry.birthday {
                        line.push_str(&format!(" | Geburtstag {}", name));
                    }
                    println!("{}", line);
                }
            }
        }
        println!();
    }
}

/// Print holidays.
pub fn print_holidays(result: &HolidayList, json: bool) {
    if json {
        print_json(result);
        return;
    }

    if !result.enabled {
        println!("Holiday overlay is disabled (set holidays.enabled = true).");
        return;
    }
    if result.holidays.is_empty() {
        println!("No holidays available for {} {}.", result.region, result.year);
        return;
    }
    println!("Holidays {} ({})", result.year, result.region);
    for holiday in &result.holidays {
        println!(
            "  {}  {:<28} {}",
            format_date(holiday.date),
            holiday.name,
            holiday.shift.label()
        );
    }
}

/// Print shift colors.
pub fn print_colors(result: &ColorList, json: bool) {
    if json {
        print_json(result);
        return;
    }

    for entry in &result.colors {
        println!(
            "  {:<7} light {} ({:?} text)  dark {} ({:?} text)",
            entry.label, entry.light, entry.light_text, entry.dark, entry.dark_text
        );
    }
}
