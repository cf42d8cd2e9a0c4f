use teac::lunisolar::{Calendar, FIRST_YEAR, LAST_YEAR, Month, TeacDate, sexagenary_for_year};
use teac::{Date, YearType};

fn calendar() -> &'static Calendar {
    Calendar::global()
}

#[test]
fn ladder_sizes() {
    for year in FIRST_YEAR - 1..=LAST_YEAR {
        let lunar = calendar().year(year).unwrap();
        let leap = calendar().leaps().get(year);
        assert_eq!(leap.map(|l| l.month), lunar.leap_month(), "{year}");
        assert_eq!(if leap.is_some() { 13 } else { 12 }, lunar.len(), "{year}");
        assert_eq!(lunar.len(), lunar.months().len(), "{year}");
        assert!((353..=385).contains(&lunar.days()), "{year}: {}", lunar.days());
        for pair in lunar.ladder().windows(2) {
            assert!((29..=30).contains(&(pair[1] - pair[0])), "{year}");
        }
    }
}

#[test]
fn ladder_spans_new_years() {
    for year in FIRST_YEAR..LAST_YEAR {
        let this = calendar().new_year(year).unwrap();
        let next = calendar().new_year(year + 1).unwrap();
        assert_eq!(
            (next - this) as u32,
            calendar().year(year).unwrap().days(),
            "{year}"
        );
    }
}

#[test]
fn new_year_round_trip() {
    for year in FIRST_YEAR..=LAST_YEAR {
        let new_year = calendar().new_year(year).unwrap();
        let teac = calendar().resolve_date(new_year).unwrap();
        assert_eq!(
            TeacDate {
                cycle_year: sexagenary_for_year(year),
                month: Month::Common(1),
                day: 1,
            },
            teac,
            "{new_year}"
        );
    }
}

#[test]
fn eve_is_last_day_of_previous_year() {
    for year in FIRST_YEAR..=LAST_YEAR {
        let eve = calendar().new_year(year).unwrap() + -1;
        if eve.gregorian().0 < FIRST_YEAR {
            continue;
        }
        let previous = calendar().year(year - 1).unwrap();
        let ladder = previous.ladder();
        let last_len = ladder[ladder.len() - 1] - ladder[ladder.len() - 2];
        let teac = calendar().resolve_date(eve).unwrap();
        assert_eq!(sexagenary_for_year(year - 1), teac.cycle_year, "{eve}");
        assert_eq!(*previous.months().last().unwrap(), teac.month, "{eve}");
        assert_eq!(last_len, teac.day, "{eve}");
    }
}

#[test]
fn leap_months_are_flagged() {
    for (year, leap) in calendar().leaps().iter() {
        let lunar = calendar().year(year).unwrap();
        let start = calendar().new_year(year).unwrap() + lunar.ladder()[leap.month as usize - 1] as i32;
        for offset in [0, 28] {
            let teac = calendar().resolve_date(start + offset).unwrap();
            assert_eq!(Month::Leap(leap.month), teac.month, "{}", start + offset);
            assert_eq!(offset as u32 + 1, teac.day);
        }
    }
}

#[test]
fn successive_days() {
    let mut date = Date::from_gregorian(FIRST_YEAR, 1, 1).unwrap();
    let end = Date::from_gregorian(LAST_YEAR, 12, 31).unwrap();
    let mut prev = calendar().resolve_date(date).unwrap();
    let mut count = 1;
    while date < end {
        date = date + 1;
        let next = calendar().resolve_date(date).unwrap();
        let same_month = next.cycle_year == prev.cycle_year && next.month == prev.month;
        let ok = if same_month {
            next.day == prev.day + 1
        } else if next.cycle_year == prev.cycle_year {
            let step = match (prev.month, next.month) {
                (Month::Common(a), Month::Leap(b)) => a == b,
                (_, Month::Common(b)) => b == prev.month.num() + 1,
                _ => false,
            };
            step && next.day == 1 && (29..=30).contains(&prev.day)
        } else {
            next.cycle_year == prev.cycle_year % 60 + 1
                && next.month == Month::Common(1)
                && next.day == 1
        };
        assert!(ok, "{date}: {prev:?} -> {next:?}");
        prev = next;
        count += 1;
    }
    let days: i32 = (FIRST_YEAR..=LAST_YEAR)
        .map(|y| YearType::from_gregorian(y).days())
        .sum();
    assert_eq!(days, count);
}
