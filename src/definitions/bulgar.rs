//! bulgar.rs
//!
//! The ancient-Bulgarian calendar as declarative period data.
//!
//! The hierarchy is day / month / quarter / year / four-year cycle /
//! twelve-year cycle / sixty-year cycle. A year is four 91-day quarters
//! (months of 31, 30 and 30 days) plus the one-day Ени period that
//! belongs to no month, 365 days in all. Every four-year cycle appends
//! the one-day Бехти period after its fourth year, 1461 days in all. The
//! twelve-year animal cycle spans three four-year cycles, and the
//! sixty-year "star" cycle (the root) spans five of those: 21 915 days.
//!
//! The intercalary days are ordinary siblings in the data: Ени is a fifth,
//! one-day entry in each year's quarter list, Бехти a fifth, one-day entry
//! in each four-year cycle's year list. Each continues downward as a chain
//! of one-day structures so that resolution still yields one instance per
//! type; the chain nodes share one name key, so a query landing on Бехти
//! displays "Ден Бехти" at every level below the year.
//!
//! The epoch is 22 December 5505 BC (proleptic Gregorian), the
//! reconstructed new year at the winter solstice; that instant lies
//! 2 729 466 days before 1970-01-01.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::CalendarError;
use crate::names::NameTable;
use crate::period::{CalendarDefinition, PeriodStructure, PeriodTypeRegistry};

/// Type ordinal of the day level.
pub const DAY: usize = 0;
/// Type ordinal of the month level.
pub const MONTH: usize = 1;
/// Type ordinal of the quarter level.
pub const QUARTER: usize = 2;
/// Type ordinal of the year level.
pub const YEAR: usize = 3;
/// Type ordinal of the four-year cycle level.
pub const CYCLE4: usize = 4;
/// Type ordinal of the twelve-year animal cycle level.
pub const CYCLE12: usize = 5;
/// Type ordinal of the sixty-year star cycle level.
pub const CYCLE60: usize = 6;

/// Days from 1970-01-01 back to 22 December 5505 BC (proleptic Gregorian).
pub const EPOCH_OFFSET_DAYS: i64 = -2_729_466;

/// The twelve animal year names, in cycle order.
const ANIMAL_KEYS: [&str; 12] = [
    "year.somor",
    "year.shegor",
    "year.bars",
    "year.dvansh",
    "year.ver",
    "year.dilom",
    "year.imen",
    "year.teku",
    "year.pichin",
    "year.toh",
    "year.eth",
    "year.doks",
];

const ANIMAL_NAMES_BG: [&str; 12] = [
    "Сомор",
    "Шегор",
    "Барс",
    "Дваншх",
    "Вер",
    "Дилом",
    "Имен",
    "Теку",
    "Пичин",
    "Тох",
    "Етх",
    "Докс",
];

const ANIMAL_NAMES_EN: [&str; 12] = [
    "Somor (rat)",
    "Shegor (ox)",
    "Bars (tiger)",
    "Dvansh (hare)",
    "Ver (dragon)",
    "Dilom (snake)",
    "Imen (horse)",
    "Teku (ram)",
    "Pichin (monkey)",
    "Toh (hen)",
    "Eth (dog)",
    "Doks (boar)",
];

const MONTH_NAMES_BG: [&str; 12] = [
    "Първи месец",
    "Втори месец",
    "Трети месец",
    "Четвърти месец",
    "Пети месец",
    "Шести месец",
    "Седми месец",
    "Осми месец",
    "Девети месец",
    "Десети месец",
    "Единадесети месец",
    "Дванадесети месец",
];

const MONTH_NAMES_EN: [&str; 12] = [
    "First month",
    "Second month",
    "Third month",
    "Fourth month",
    "Fifth month",
    "Sixth month",
    "Seventh month",
    "Eighth month",
    "Ninth month",
    "Tenth month",
    "Eleventh month",
    "Twelfth month",
];

/// The ancient-Bulgarian calendar definition, built and validated on
/// first use.
pub static BULGAR: Lazy<CalendarDefinition> =
    Lazy::new(|| build().expect("ancient-bulgarian calendar definition"));

fn build() -> Result<CalendarDefinition, CalendarError> {
    let day = PeriodStructure::unit(DAY, "day", 1);

    let month = |index: usize| -> Arc<PeriodStructure> {
        // The first month of each quarter has 31 days, the other two 30.
        let len = if index % 3 == 1 { 31 } else { 30 };
        PeriodStructure::composite(
            MONTH,
            &format!("month.{index}"),
            len,
            vec![day.clone(); len as usize],
        )
    };

    let quarter = |index: usize| -> Arc<PeriodStructure> {
        let first = (index - 1) * 3 + 1;
        PeriodStructure::composite(
            QUARTER,
            &format!("quarter.{index}"),
            91,
            vec![month(first), month(first + 1), month(first + 2)],
        )
    };
    let quarters: Vec<Arc<PeriodStructure>> = (1..=4).map(quarter).collect();

    // Ени: the year's single day outside any month, after the fourth
    // quarter, continued downward as a chain of one-day structures.
    let eni_month = PeriodStructure::composite(MONTH, "eni", 1, vec![day.clone()]);
    let eni_quarter = PeriodStructure::composite(QUARTER, "eni", 1, vec![eni_month]);

    let year = |key: &str| -> Arc<PeriodStructure> {
        let mut children = quarters.clone();
        children.push(eni_quarter.clone());
        PeriodStructure::composite(YEAR, key, 365, children)
    };

    // Бехти: the four-year cycle's extra day, after its fourth year.
    let behti_month = PeriodStructure::composite(MONTH, "behti", 1, vec![day.clone()]);
    let behti_quarter = PeriodStructure::composite(QUARTER, "behti", 1, vec![behti_month]);
    let behti_year = PeriodStructure::composite(YEAR, "behti", 1, vec![behti_quarter]);

    let cycle4 = |animals: &[&str]| -> Arc<PeriodStructure> {
        let mut children: Vec<Arc<PeriodStructure>> =
            animals.iter().map(|key| year(key)).collect();
        children.push(behti_year.clone());
        PeriodStructure::composite(CYCLE4, "cycle.four", 1461, children)
    };

    let cycle12 = PeriodStructure::composite(
        CYCLE12,
        "cycle.twelve",
        4383,
        vec![
            cycle4(&ANIMAL_KEYS[0..4]),
            cycle4(&ANIMAL_KEYS[4..8]),
            cycle4(&ANIMAL_KEYS[8..12]),
        ],
    );

    let cycle60 =
        PeriodStructure::composite(CYCLE60, "cycle.sixty", 21_915, vec![cycle12; 5]);

    CalendarDefinition::new(
        "bulgar",
        PeriodTypeRegistry::new(&[
            "day",
            "month",
            "quarter",
            "year",
            "four-year cycle",
            "twelve-year cycle",
            "sixty-year cycle",
        ]),
        vec![cycle60],
        EPOCH_OFFSET_DAYS,
        names(),
    )
}

fn names() -> NameTable {
    let mut table = NameTable::new("bg");
    table.insert("bg", "day", "ден");
    table.insert("en", "day", "Day");
    for i in 0..12 {
        let key = format!("month.{}", i + 1);
        table.insert("bg", &key, MONTH_NAMES_BG[i]);
        table.insert("en", &key, MONTH_NAMES_EN[i]);
        table.insert("bg", ANIMAL_KEYS[i], ANIMAL_NAMES_BG[i]);
        table.insert("en", ANIMAL_KEYS[i], ANIMAL_NAMES_EN[i]);
    }
    for i in 1..=4 {
        table.insert("bg", &format!("quarter.{i}"), &format!("Тримесечие {i}"));
        table.insert("en", &format!("quarter.{i}"), &format!("Quarter {i}"));
    }
    table.insert("bg", "eni", "Ден Ени");
    table.insert("en", "eni", "Eni day");
    table.insert("bg", "behti", "Ден Бехти");
    table.insert("en", "behti", "Behti day");
    table.insert("bg", "cycle.four", "Четиригодишен кръг");
    table.insert("en", "cycle.four", "Four-year cycle");
    table.insert("bg", "cycle.twelve", "Дванадесетгодишен кръг");
    table.insert("en", "cycle.twelve", "Twelve-year cycle");
    table.insert("bg", "cycle.sixty", "Звезден кръг");
    table.insert("en", "cycle.sixty", "Sixty-year star cycle");
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;

    #[test]
    fn test_cycle_shapes() {
        let root = BULGAR.root();
        assert_eq!(root.days(), 21_915);
        assert_eq!(root.children().len(), 5);
        let twelve = &root.children()[0];
        assert_eq!(twelve.days(), 4383);
        assert_eq!(twelve.children().len(), 3);
        let four = &twelve.children()[0];
        assert_eq!(four.days(), 1461);
        // Four animal years plus the Бехти day.
        assert_eq!(four.children().len(), 5);
        assert_eq!(four.children()[4].days(), 1);
    }

    #[test]
    fn test_year_shape() {
        let year = &BULGAR.root().children()[0].children()[0].children()[0];
        assert_eq!(year.days(), 365);
        assert_eq!(year.children().len(), 5);
        // 91-day quarters, then the one-day Ени.
        assert_eq!(year.children()[0].days(), 91);
        assert_eq!(year.children()[4].days(), 1);
        // A year holds 13 month-level periods: 12 months plus Ени.
        assert_eq!(year.unit_count(MONTH), 13);
        assert_eq!(year.unit_count(DAY), 365);
    }

    #[test]
    fn test_month_lengths_within_quarter() {
        let quarter = &BULGAR.root().children()[0].children()[0].children()[0].children()[0];
        let lens: Vec<i64> = quarter.children().iter().map(|m| m.days()).collect();
        assert_eq!(lens, vec![31, 30, 30]);
    }

    #[test]
    fn test_animal_names_follow_cycle_position() {
        // Day 0 opens the Сомор year; one year later it is Шегор.
        let periods = resolve(0, &BULGAR).unwrap();
        assert_eq!(periods[YEAR].name("bg"), "Сомор");
        let periods = resolve(365, &BULGAR).unwrap();
        assert_eq!(periods[YEAR].name("bg"), "Шегор");
        // The fifth animal year opens the second four-year cycle.
        let periods = resolve(1461, &BULGAR).unwrap();
        assert_eq!(periods[YEAR].name("bg"), "Вер");
        assert_eq!(periods[CYCLE4].relative(), 1);
    }

    #[test]
    fn test_eni_day_resolution() {
        // Day 364 is the Ени day of the first year.
        let periods = resolve(364, &BULGAR).unwrap();
        assert_eq!(periods[QUARTER].name("bg"), "Ден Ени");
        assert_eq!(periods[MONTH].name("bg"), "Ден Ени");
        assert_eq!(periods[QUARTER].relative(), 4);
        assert_eq!(periods[YEAR].relative(), 0);
        // Day 365 is day one of the Шегор year.
        let periods = resolve(365, &BULGAR).unwrap();
        assert_eq!(periods[YEAR].relative(), 1);
        assert_eq!(periods[DAY].relative(), 0);
        assert_eq!(periods[QUARTER].relative(), 0);
    }

    #[test]
    fn test_epoch_lies_millennia_back() {
        assert_eq!(BULGAR.epoch_offset_days(), -2_729_466);
    }
}
