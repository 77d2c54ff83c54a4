//! Calendar generation with all overlays.

use chrono::NaiveDate;

use shiftplan::calendar::group_ids;
use shiftplan::config::Config;
use shiftplan::holidays::{fetch_or_empty, StaticHolidays};
use shiftplan::{
    build_agenda, generate, group_anchor, regenerate, AgendaItem, Birthday, BirthdayBook,
    CalendarSnapshot, DayEdit, EventStore, HolidayMap, Shift,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_group_one_reference_days() {
    let calendar = generate(2025, group_anchor("1"), &EventStore::new(), &HolidayMap::new(), &[])
        .unwrap();

    assert_eq!(calendar.day(date(2025, 1, 30)).unwrap().shift, Shift::Early);
    assert_eq!(calendar.day(date(2025, 1, 29)).unwrap().shift, Shift::Off);
    assert_eq!(calendar.day(date(2025, 3, 3)).unwrap().shift, Shift::Off);
    assert_eq!(calendar.day(date(2025, 3, 6)).unwrap().shift, Shift::Early);
}

#[test]
fn test_groups_run_one_week_apart() {
    let groups: Vec<&str> = group_ids().collect();
    assert_eq!(groups, ["1", "2", "3", "4", "5"]);

    let day = date(2025, 6, 12);
    for pair in groups.windows(2) {
        let ahead = group_anchor(pair[0]).unwrap();
        let behind = group_anchor(pair[1]).unwrap();
        assert_eq!(ahead - behind, chrono::Duration::days(7));
        assert_eq!(
            shiftplan::shift_for(day, ahead),
            shiftplan::shift_for(day - chrono::Duration::days(7), behind)
        );
    }
}

#[test]
fn test_config_drives_generation() {
    let config = Config::from_str(
        r#"
        [calendar]
        year = 2024
        anchor_mode = "manual"
        manual_date = "2024-01-01"
        "#,
    )
    .unwrap();

    let calendar = generate(
        config.calendar.year,
        config.calendar.resolve_anchor(),
        &EventStore::new(),
        &HolidayMap::new(),
        &[],
    )
    .unwrap();
    assert_eq!(calendar.len(), 366);
    assert_eq!(calendar.days[0].shift, Shift::Early);
    assert_eq!(calendar.days[35].shift, Shift::Early);
}

#[test]
fn test_day_editor_clamps_on_off_days() {
    let anchor = group_anchor("1");
    let mut events = EventStore::new();

    let off_day = date(2025, 3, 3);
    let shift = events.lookup_shift(off_day, anchor);
    assert_eq!(shift, Shift::Off);
    let stored = events
        .save_day(
            off_day,
            shift,
            DayEdit::new()
                .with_note("Grillen")
                .with_colleague("Jonas")
                .with_afz(true),
        )
        .cloned()
        .unwrap();
    assert!(!stored.colleague_vacation);
    assert!(!stored.afz);
    assert_eq!(stored.note, "Grillen");

    // Nothing left after clamping: the entry disappears.
    let stored = events.save_day(off_day, shift, DayEdit::new().with_afz(true));
    assert!(stored.is_none());
    assert!(!events.contains(off_day));
}

#[tokio::test]
async fn test_holidays_and_birthdays_on_the_grid() {
    let provider = StaticHolidays::default()
        .with(date(2025, 10, 3), "Tag der Deutschen Einheit")
        .with(date(2024, 10, 3), "Tag der Deutschen Einheit");
    let holidays = fetch_or_empty(&provider, 2025).await;
    assert_eq!(holidays.len(), 1);

    let mut birthdays = BirthdayBook::new();
    birthdays.save(Birthday::on(date(1990, 10, 3), "Lena").unwrap());
    let events = EventStore::new();

    let calendar = regenerate(&CalendarSnapshot {
        year: 2025,
        anchor: group_anchor("3"),
        events: &events,
        holidays: &holidays,
        birthdays: birthdays.as_slice(),
    })
    .unwrap();

    let day = calendar.day(date(2025, 10, 3)).unwrap();
    assert_eq!(day.holiday.as_deref(), Some("Tag der Deutschen Einheit"));
    assert_eq!(day.birthday.as_deref(), Some("Lena"));
    assert_eq!(
        calendar.iter().filter(|d| d.holiday.is_some()).count(),
        1
    );
}

#[test]
fn test_agenda_across_the_year() {
    let anchor = group_anchor("1");
    let mut events = EventStore::new();
    shiftplan::apply_range(&mut events, date(2025, 3, 6), date(2025, 3, 9), anchor).unwrap();
    let shift = events.lookup_shift(date(2025, 5, 2), anchor);
    events.save_day(date(2025, 5, 2), shift, DayEdit::new().with_note("Arzt"));

    let mut birthdays = BirthdayBook::new();
    birthdays.save(Birthday::new(11, 24, "Chris").unwrap());

    let agenda = build_agenda(&events, birthdays.as_slice(), 2025, anchor, true);
    let months: Vec<u32> = agenda.iter().map(|m| m.month).collect();
    assert_eq!(months, [3, 5, 12]);

    assert!(matches!(agenda[0].items[0], AgendaItem::Vacation(_)));
    let AgendaItem::Entry(december) = &agenda[2].items[0] else {
        panic!("expected entry");
    };
    assert_eq!(december.birthday.as_deref(), Some("Chris"));
    assert!(!december.is_deletable());
}
