//! gregorian.rs
//!
//! The Gregorian calendar as declarative period data.
//!
//! The hierarchy is day / month / year / century / 400-year cycle. The
//! root is the full 400-year cycle of 146 097 days, anchored at
//! 2000-01-01 (the start of a quadricentennial cycle), so the epoch
//! offset from the 1970-01-01 reference instant is 10 957 days.
//!
//! The quadrennial / centennial / quadricentennial leap rule is expressed
//! purely as shape placement: two year shapes (365 and 366 days, differing
//! only in their February child), a 36 525-day leading century whose year
//! 0 is leap, and a 36 524-day standard century whose year 0 is common.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::CalendarError;
use crate::names::NameTable;
use crate::period::{CalendarDefinition, PeriodStructure, PeriodTypeRegistry};
use crate::resolver::PeriodInstance;

/// Type ordinal of the day level.
pub const DAY: usize = 0;
/// Type ordinal of the month level.
pub const MONTH: usize = 1;
/// Type ordinal of the year level.
pub const YEAR: usize = 2;
/// Type ordinal of the century level.
pub const CENTURY: usize = 3;
/// Type ordinal of the 400-year cycle level.
pub const CYCLE: usize = 4;

/// Days from 1970-01-01 to 2000-01-01, the cycle anchor.
pub const EPOCH_OFFSET_DAYS: i64 = 10_957;

/// The year the cycle anchor falls in; used to turn resolved relative
/// numbers back into a calendar year.
pub const ANCHOR_YEAR: i64 = 2000;

/// Month lengths in a common year, January first.
const MONTH_LENGTHS: [i64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

const MONTH_NAMES_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTH_NAMES_BG: [&str; 12] = [
    "януари",
    "февруари",
    "март",
    "април",
    "май",
    "юни",
    "юли",
    "август",
    "септември",
    "октомври",
    "ноември",
    "декември",
];

/// The Gregorian calendar definition, built and validated on first use.
pub static GREGORIAN: Lazy<CalendarDefinition> =
    Lazy::new(|| build().expect("gregorian calendar definition"));

fn build() -> Result<CalendarDefinition, CalendarError> {
    let day = PeriodStructure::unit(DAY, "day", 1);

    let month = |key: &str, len: i64| -> Arc<PeriodStructure> {
        PeriodStructure::composite(MONTH, key, len, vec![day.clone(); len as usize])
    };

    let mut common_months = Vec::with_capacity(12);
    let mut leap_months = Vec::with_capacity(12);
    for (i, len) in MONTH_LENGTHS.iter().enumerate() {
        let key = format!("month.{}", i + 1);
        if i == 1 {
            common_months.push(month(&key, 28));
            leap_months.push(month("month.2.leap", 29));
        } else {
            common_months.push(month(&key, *len));
            leap_months.push(month(&key, *len));
        }
    }

    let year_common = PeriodStructure::composite(YEAR, "year.common", 365, common_months);
    let year_leap = PeriodStructure::composite(YEAR, "year.leap", 366, leap_months);

    // A leading century opens a 400-year cycle: its year 0 (a multiple of
    // 400) is leap. The other three centuries open on a common year.
    let century = |key: &str, leading: bool| -> Arc<PeriodStructure> {
        let mut years = Vec::with_capacity(100);
        for i in 0..100 {
            let leap = i % 4 == 0 && (i != 0 || leading);
            years.push(if leap {
                year_leap.clone()
            } else {
                year_common.clone()
            });
        }
        let days = if leading { 36_525 } else { 36_524 };
        PeriodStructure::composite(CENTURY, key, days, years)
    };

    let cycle = PeriodStructure::composite(
        CYCLE,
        "cycle",
        146_097,
        vec![
            century("century.leading", true),
            century("century", false),
            century("century", false),
            century("century", false),
        ],
    );

    CalendarDefinition::new(
        "gregorian",
        PeriodTypeRegistry::new(&["day", "month", "year", "century", "cycle"]),
        vec![cycle],
        EPOCH_OFFSET_DAYS,
        names(),
    )
}

fn names() -> NameTable {
    let mut table = NameTable::new("en");
    table.insert("en", "day", "Day");
    table.insert("bg", "day", "ден");
    for (i, name) in MONTH_NAMES_EN.iter().enumerate() {
        table.insert("en", &format!("month.{}", i + 1), name);
    }
    for (i, name) in MONTH_NAMES_BG.iter().enumerate() {
        table.insert("bg", &format!("month.{}", i + 1), name);
    }
    table.insert("en", "month.2.leap", "February");
    table.insert("bg", "month.2.leap", "февруари");
    table.insert("en", "year.common", "Year");
    table.insert("en", "year.leap", "Year");
    table.insert("bg", "year.common", "година");
    table.insert("bg", "year.leap", "година");
    table.insert("en", "century.leading", "Century");
    table.insert("en", "century", "Century");
    table.insert("bg", "century.leading", "век");
    table.insert("bg", "century", "век");
    table.insert("en", "cycle", "Four-hundred-year cycle");
    table.insert("bg", "cycle", "Четиристотингодишен кръг");
    table
}

/// Reads the calendar year (anno Domini) out of a resolved instance array.
///
/// ```
/// # use calendarium::{resolve, definitions::gregorian::{year_ad, GREGORIAN}};
/// let periods = resolve(0, &GREGORIAN).unwrap();
/// assert_eq!(year_ad(&periods), 2000);
/// ```
pub fn year_ad(periods: &[PeriodInstance]) -> i64 {
    ANCHOR_YEAR
        + periods[CYCLE].relative() * 400
        + periods[CENTURY].relative() * 100
        + periods[YEAR].relative()
}
