//! CLI command dispatcher.
//!
//! Each command loads the state file named by the configuration, runs one
//! calendar operation and hands the result to the output module. Commands
//! that change data write the state back before printing.

use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::NaiveDate;
use shiftplan::calendar::{cycle_index, regenerate, CalendarSnapshot};
use shiftplan::config::text_tone;
use shiftplan::holidays::load_holidays;
use shiftplan::{
    apply_range, build_agenda, group_into_blocks, remove_range, shift_for, Birthday, Config,
    DateKey, DayEdit, HolidayMap, PlannerState, Shift,
};

use super::output;
use super::types::{
    AgendaResult, BirthdayChange, BirthdayList, CalendarResult, ColorEntry, ColorList, DayResult,
    HolidayEntry, HolidayList, ShiftResult, VacationChange, VacationList,
};

/// Configuration plus the loaded state file.
pub struct Session {
    pub config: Config,
    state_path: PathBuf,
    pub state: PlannerState,
}

impl Session {
    /// Load the state file named by `config`.
    pub fn open(config: Config) -> Result<Self> {
        let state_path = config.state_path();
        let state = PlannerState::load(&state_path)?;
        Ok(Self {
            config,
            state_path,
            state,
        })
    }

    fn year(&self) -> i32 {
        self.config.calendar.year
    }

    fn anchor(&self) -> Option<NaiveDate> {
        self.config.calendar.resolve_anchor()
    }

    fn save(&self) -> Result<()> {
        self.state.save(&self.state_path)?;
        Ok(())
    }

    async fn holidays(&self, year: i32) -> HolidayMap {
        load_holidays(&self.config.holidays, year).await
    }
}

/// Convert a 1-12 month from the command line into the stored 0-11 form.
fn month0(month: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        bail!("Month must be between 1 and 12, got {}", month);
    }
    Ok(month - 1)
}

/// Run the calendar command.
pub async fn run_calendar(session: Session, month: Option<u32>, json_output: bool) -> Result<()> {
    if let Some(m) = month {
        month0(m)?;
    }
    let year = session.year();
    let holidays = session.holidays(year).await;
    let calendar = regenerate(&CalendarSnapshot {
        year,
        anchor: session.anchor(),
        events: &session.state.events,
        holidays: &holidays,
        birthdays: session.state.birthdays.as_slice(),
    })?;

    let shift_totals = calendar.shift_totals();
    let vacation_days = calendar.vacation_days();
    let days = match month {
        Some(m) => calendar.month(m).to_vec(),
        None => calendar.days.clone(),
    };

    let result = CalendarResult {
        year,
        anchor: calendar.anchor,
        month,
        days,
        shift_totals,
        vacation_days,
    };
    output::print_calendar(&result, json_output);
    Ok(())
}

/// Run the shift command.
pub async fn run_shift(session: Session, date: DateKey, json_output: bool) -> Result<()> {
    let anchor = session.config.calendar.anchor()?;
    let day = date.date();
    let holidays = session.holidays(date.year()).await;
    let shift = shift_for(day, anchor);

    let result = ShiftResult {
        date: day,
        anchor,
        cycle_index: cycle_index(day, anchor),
        shift,
        label: shift.label().to_string(),
        annotation: session.state.events.get(date).cloned(),
        holiday: holidays.get(&date).cloned(),
        birthday: session
            .state
            .birthdays
            .for_date(day)
            .map(|b| b.name.clone()),
    };
    output::print_shift(&result, json_output);
    Ok(())
}

/// Run the day set command.
pub fn run_day_set(
    mut session: Session,
    date: DateKey,
    edit: DayEdit,
    json_output: bool,
) -> Result<()> {
    let anchor = session.config.calendar.anchor()?;
    let shift = shift_for(date.date(), anchor);
    let dropped_flags = !shift.is_working() && (edit.colleague_vacation || edit.afz);

    let annotation = session
        .state
        .events
        .save_day(date.date(), shift, edit)
        .cloned();
    session.save()?;

    let mut message = match annotation {
        Some(_) => format!("Saved {} ({})", date, shift.label()),
        None => format!("Nothing left to store for {}", date),
    };
    if dropped_flags {
        message.push_str("; colleague vacation and AFZ only apply to working days");
    }

    let result = DayResult {
        date: date.date(),
        shift,
        annotation,
        message,
    };
    output::print_day(&result, json_output);
    Ok(())
}

/// Run the day clear command.
pub fn run_day_clear(mut session: Session, date: DateKey, json_output: bool) -> Result<()> {
    let shift = session
        .state
        .events
        .lookup_shift(date.date(), session.anchor());
    let removed = session.state.events.remove(date);
    if removed.is_some() {
        session.save()?;
    }

    let result = DayResult {
        date: date.date(),
        shift,
        annotation: None,
        message: match removed {
            Some(_) => format!("Cleared {}", date),
            None => format!("No entry on {}", date),
        },
    };
    output::print_day(&result, json_output);
    Ok(())
}

/// Run the vacation add command.
pub fn run_vacation_add(
    mut session: Session,
    from: DateKey,
    to: DateKey,
    json_output: bool,
) -> Result<()> {
    let anchor = session.anchor();
    let flagged = apply_range(&mut session.state.events, from.date(), to.date(), anchor)?;
    session.save()?;

    let result = VacationChange {
        from: from.date(),
        to: to.date(),
        days_changed: flagged,
        message: format!("Marked {} working days as vacation", flagged),
    };
    output::print_vacation_change(&result, json_output);
    Ok(())
}

/// Run the vacation remove command.
pub fn run_vacation_remove(
    mut session: Session,
    from: DateKey,
    to: DateKey,
    json_output: bool,
) -> Result<()> {
    let cleared = remove_range(&mut session.state.events, from.date(), to.date())?;
    if cleared > 0 {
        session.save()?;
    }

    let result = VacationChange {
        from: from.date(),
        to: to.date(),
        days_changed: cleared,
        message: format!("Removed vacation from {} days", cleared),
    };
    output::print_vacation_change(&result, json_output);
    Ok(())
}

/// Run the vacation list command.
pub fn run_vacation_list(session: Session, json_output: bool) -> Result<()> {
    let year = session.year();
    let blocks = group_into_blocks(&session.state.events, year);
    let total_days = blocks.iter().map(|b| b.days() as usize).sum();

    let result = VacationList {
        year,
        blocks,
        total_days,
    };
    output::print_vacation_list(&result, json_output);
    Ok(())
}

/// Run the birthday add command. `month` is 1-12.
pub fn run_birthday_add(
    mut session: Session,
    month: u32,
    day: u32,
    name: String,
    json_output: bool,
) -> Result<()> {
    let birthday = Birthday::new(month0(month)?, day, name)?;
    session.state.birthdays.save(birthday.clone());
    session.save()?;

    let result = BirthdayChange {
        success: true,
        message: format!("Saved birthday of {} on {:02}.{:02}.", birthday.name, day, month),
        birthday: Some(birthday),
    };
    output::print_birthday_change(&result, json_output);
    Ok(())
}

/// Run the birthday remove command. `month` is 1-12.
pub fn run_birthday_remove(
    mut session: Session,
    month: u32,
    day: u32,
    json_output: bool,
) -> Result<()> {
    let removed = session.state.birthdays.delete(month0(month)?, day);
    if removed.is_some() {
        session.save()?;
    }

    let result = BirthdayChange {
        success: removed.is_some(),
        message: match &removed {
            Some(b) => format!("Removed birthday of {}", b.name),
            None => format!("No birthday on {:02}.{:02}.", day, month),
        },
        birthday: removed,
    };
    output::print_birthday_change(&result, json_output);
    Ok(())
}

/// Run the birthday list command.
pub fn run_birthday_list(session: Session, json_output: bool) -> Result<()> {
    let result = BirthdayList {
        birthdays: session.state.birthdays.sorted().into_iter().cloned().collect(),
    };
    output::print_birthday_list(&result, json_output);
    Ok(())
}

/// Run the agenda command.
pub fn run_agenda(session: Session, include_birthdays: bool, json_output: bool) -> Result<()> {
    let year = session.year();
    let months = build_agenda(
        &session.state.events,
        session.state.birthdays.as_slice(),
        year,
        session.anchor(),
        include_birthdays,
    );

    let result = AgendaResult { year, months };
    output::print_agenda(&result, json_output);
    Ok(())
}

/// Run the holidays command.
pub async fn run_holidays(session: Session, json_output: bool) -> Result<()> {
    let year = session.year();
    let anchor = session.anchor();
    let holidays = session.holidays(year).await;

    let result = HolidayList {
        year,
        enabled: session.config.holidays.enabled,
        region: session.config.holidays.region.clone(),
        holidays: holidays
            .into_iter()
            .map(|(key, name)| HolidayEntry {
                date: key.date(),
                name,
                shift: session.state.events.lookup_shift(key.date(), anchor),
            })
            .collect(),
    };
    output::print_holidays(&result, json_output);
    Ok(())
}

/// Run the colors command.
pub fn run_colors(config: &Config, json_output: bool) -> Result<()> {
    let colors = Shift::ALL
        .into_iter()
        .map(|shift| -> Result<ColorEntry> {
            let color = config.colors.for_shift(shift);
            Ok(ColorEntry {
                shift,
                label: shift.label().to_string(),
                light: color.light.clone(),
                light_text: text_tone(&color.light)?,
                dark: color.dark.clone(),
                dark_text: text_tone(&color.dark)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    output::print_colors(&ColorList { colors }, json_output);
    Ok(())
}
