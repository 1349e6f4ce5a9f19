//! resolver.rs
//!
//! The core decomposition algorithm: mapping a signed day count (relative
//! to a calendar's epoch) into one [`PeriodInstance`] per period type, and
//! the exact inverse mapping back to a day count.
//!
//! The algorithm is a pure function of its two inputs. It starts at the
//! coarsest type, divides the day count by the single root structure's
//! length, and then walks down the type registry one level at a time. At
//! each level it scans the active structure's ordered child list as a flat
//! sequence of sibling periods: siblings whose whole length fits into the
//! remaining day count are consumed (their lengths subtracted, the
//! relative counter incremented, and every finer type's absolute counter
//! advanced by the sibling's precomputed containment table), and the first
//! sibling longer than what remains becomes the active structure for the
//! next level down. Irregular siblings (leap Februaries, trailing
//! one-day intercalary periods) need no special cases; they are simply
//! differently shaped entries in the list being scanned.
//!
//! Division at the root is *floor* division (`div_euclid`), so the
//! remainder handed to the sibling scan is always non-negative and the
//! round-trip law `to_day_count(resolve(d)) == d` holds for day counts
//! before the epoch as well. The sign convention is pinned by tests in
//! `tests/round_trip.rs`.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::names::NameTable;
use crate::period::{CalendarDefinition, PeriodStructure};

/// Largest supported day-count magnitude, roughly 1.1 million years.
///
/// The span of both shipped calendars (the ancient-Bulgarian epoch lies
/// about 2.7 million days before 1970) sits far inside this bound, and
/// every intermediate product in the resolver stays well below `i64::MAX`
/// for day counts within it.
pub const MAX_DAY_SPAN: i64 = 400_000_000;

/// The resolved result for one period type of one query.
///
/// Instances are created fresh per [`resolve`] call, are immutable, and
/// carry no identity beyond that call.
#[derive(Debug, Clone)]
pub struct PeriodInstance {
    type_ordinal: usize,
    type_name: &'static str,
    relative: i64,
    absolute: i64,
    start_day: i64,
    structure: Arc<PeriodStructure>,
    names: Arc<NameTable>,
}

impl PeriodInstance {
    /// Ordinal of the period type this instance resolves (0 = finest).
    pub fn type_ordinal(&self) -> usize {
        self.type_ordinal
    }

    /// Name of the period type this instance resolves.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Position within the immediate parent period: the number of fully
    /// elapsed siblings, so 0-based. At the coarsest level there is no
    /// parent to reset it and this is the (possibly negative) root
    /// quotient itself.
    pub fn relative(&self) -> i64 {
        self.relative
    }

    /// The 1-based form of [`relative`](Self::relative), as shown to users
    /// (day 29, month 2, ...).
    pub fn display_relative(&self) -> i64 {
        self.relative + 1
    }

    /// Complete periods of this type elapsed since the calendar epoch.
    /// Never resets; negative before the epoch.
    pub fn absolute(&self) -> i64 {
        self.absolute
    }

    /// Day offset from the epoch at which this instance starts.
    pub fn start_day(&self) -> i64 {
        self.start_day
    }

    /// The period structure that was active for this instance.
    pub fn structure(&self) -> &Arc<PeriodStructure> {
        &self.structure
    }

    /// Locale-resolved display name of the active structure.
    pub fn name(&self, lang: &str) -> String {
        self.names.name(self.structure.name_key(), lang)
    }
}

/// Resolves a day count into one period instance per period type,
/// ordered finest to coarsest.
///
/// `day_count` is relative to the calendar's epoch and may be negative
/// (dates before the epoch) or millions of days in magnitude; the
/// arithmetic is exact integer arithmetic throughout.
///
/// ```
/// # use calendarium::{resolve, definitions::gregorian::GREGORIAN};
/// // 59 days after 2000-01-01 is 2000-02-29.
/// let periods = resolve(59, &GREGORIAN).unwrap();
/// assert_eq!(periods[0].display_relative(), 29); // day
/// assert_eq!(periods[1].display_relative(), 2);  // month
/// assert_eq!(periods[1].name("en"), "February");
/// ```
///
/// # Errors
///
/// Fails with [`CalendarError::OutOfRange`] when `|day_count|` exceeds
/// [`MAX_DAY_SPAN`], or with [`CalendarError::CoverageGap`] when the
/// definition's child lists cover fewer days than their parents declare
/// (a defect [`check_definition`](crate::check_definition) reports). For
/// a definition with a clean diagnostic report, every in-range query
/// succeeds.
pub fn resolve(
    day_count: i64,
    def: &CalendarDefinition,
) -> Result<Vec<PeriodInstance>, CalendarError> {
    if day_count.abs() > MAX_DAY_SPAN {
        return Err(CalendarError::OutOfRange {
            day_count,
            max: MAX_DAY_SPAN,
        });
    }

    let root = def.root();
    let levels = def.registry().len();

    // Floor division: the remainder is in [0, root.days) even before the
    // epoch, and the quotient is both the relative and the absolute count
    // of the coarsest type.
    let quotient = day_count.div_euclid(root.days());
    let mut remaining = day_count.rem_euclid(root.days());
    let mut elapsed = quotient * root.days();

    let mut absolutes = vec![0i64; levels];
    for (t, slot) in absolutes.iter_mut().enumerate() {
        *slot = quotient * root.unit_count(t);
    }

    let mut instances = Vec::with_capacity(levels);
    instances.push(PeriodInstance {
        type_ordinal: levels - 1,
        type_name: def.registry().coarsest().name,
        relative: quotient,
        absolute: absolutes[levels - 1],
        start_day: elapsed,
        structure: root.clone(),
        names: def.names().clone(),
    });

    let mut active = root.clone();
    for level in (0..levels - 1).rev() {
        let mut chosen = None;
        let mut relative = 0i64;
        for child in active.children() {
            if child.days() > remaining {
                chosen = Some(child.clone());
                break;
            }
            // Whole sibling consumed: account for it at its own level and
            // at every finer one.
            remaining -= child.days();
            elapsed += child.days();
            relative += 1;
            for (t, n) in child.unit_counts().iter().enumerate() {
                absolutes[t] += n;
            }
        }
        let Some(next) = chosen else {
            return Err(CalendarError::CoverageGap {
                type_name: def.registry().types()[level].name,
                remaining,
            });
        };
        instances.push(PeriodInstance {
            type_ordinal: level,
            type_name: def.registry().types()[level].name,
            relative,
            absolute: absolutes[level],
            start_day: elapsed,
            structure: next.clone(),
            names: def.names().clone(),
        });
        active = next;
    }

    instances.reverse();
    Ok(instances)
}

/// Resolves the current wall-clock day against the given calendar.
///
/// Computes the number of days from 1970-01-01 to today (UTC), shifts it
/// by the definition's epoch offset, and delegates to [`resolve`].
///
/// # Errors
///
/// Exactly the failure modes of [`resolve`]; for the shipped definitions
/// this cannot fail until well past the year 1000000.
pub fn today(def: &CalendarDefinition) -> Result<Vec<PeriodInstance>, CalendarError> {
    let unix_epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
    let days_since_1970 = chrono::Utc::now()
        .date_naive()
        .signed_duration_since(unix_epoch)
        .num_days();
    resolve(days_since_1970 - def.epoch_offset_days(), def)
}

/// Maps a period instance array back to its day count from the epoch,
/// the exact inverse of [`resolve`] for any array [`resolve`] produced.
///
/// The coarsest instance contributes `relative × root length`; each finer
/// instance contributes the summed lengths of the siblings preceding its
/// structure in the parent's child list. Summing prefixes (rather than
/// multiplying the relative number by a single length) is what keeps the
/// inverse exact when siblings have irregular lengths.
///
/// ```
/// # use calendarium::{resolve, to_day_count, definitions::bulgar::BULGAR};
/// let periods = resolve(123_456, &BULGAR).unwrap();
/// assert_eq!(to_day_count(&periods).unwrap(), 123_456);
/// ```
///
/// # Errors
///
/// Fails with [`CalendarError::EmptyInstances`] on an empty array, or
/// with [`CalendarError::InconsistentInstances`] on a hand-constructed
/// array whose structures and relative numbers do not describe one
/// coherent path down a structure tree.
pub fn to_day_count(instances: &[PeriodInstance]) -> Result<i64, CalendarError> {
    let Some(coarsest) = instances.last() else {
        return Err(CalendarError::EmptyInstances);
    };
    if coarsest.type_ordinal() != instances.len() - 1 {
        return Err(CalendarError::InconsistentInstances {
            level: instances.len() - 1,
        });
    }

    let mut days = coarsest.relative() * coarsest.structure().days();
    let mut parent = coarsest.structure().clone();
    for (level, instance) in instances.iter().enumerate().rev().skip(1) {
        if instance.type_ordinal() != level {
            return Err(CalendarError::InconsistentInstances { level });
        }
        let index = usize::try_from(instance.relative())
            .map_err(|_| CalendarError::InconsistentInstances { level })?;
        let children = parent.children();
        let Some(chosen) = children.get(index) else {
            return Err(CalendarError::InconsistentInstances { level });
        };
        if !Arc::ptr_eq(chosen, instance.structure()) {
            return Err(CalendarError::InconsistentInstances { level });
        }
        days += children[..index].iter().map(|c| c.days()).sum::<i64>();
        parent = chosen.clone();
    }
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::NameTable;
    use crate::period::{PeriodStructure, PeriodTypeRegistry};

    /// A deliberately irregular toy calendar: years of three months with
    /// lengths 3, 1 and 2 days (6-day year).
    fn toy() -> CalendarDefinition {
        let day = PeriodStructure::unit(0, "day", 1);
        let m1 = PeriodStructure::composite(1, "month.long", 3, vec![day.clone(); 3]);
        let m2 = PeriodStructure::composite(1, "month.tiny", 1, vec![day.clone()]);
        let m3 = PeriodStructure::composite(1, "month.short", 2, vec![day.clone(); 2]);
        let year = PeriodStructure::composite(2, "year", 6, vec![m1, m2, m3]);
        let mut names = NameTable::new("en");
        names.insert("en", "month.tiny", "Tiny");
        CalendarDefinition::new(
            "toy",
            PeriodTypeRegistry::new(&["day", "month", "year"]),
            vec![year],
            0,
            names,
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_day_zero() {
        let def = toy();
        let periods = resolve(0, &def).unwrap();
        assert_eq!(periods.len(), 3);
        for p in &periods {
            assert_eq!(p.relative(), 0);
            assert_eq!(p.absolute(), 0);
            assert_eq!(p.start_day(), 0);
        }
        assert_eq!(periods[0].type_name(), "day");
        assert_eq!(periods[2].type_name(), "year");
    }

    #[test]
    fn test_resolve_inside_irregular_siblings() {
        let def = toy();
        // Day 3 is the single day of the one-day middle month.
        let periods = resolve(3, &def).unwrap();
        assert_eq!(periods[1].relative(), 1);
        assert_eq!(periods[1].name("en"), "Tiny");
        assert_eq!(periods[1].start_day(), 3);
        assert_eq!(periods[0].relative(), 0);
        // Day 4 is day 1 of the trailing two-day month.
        let periods = resolve(4, &def).unwrap();
        assert_eq!(periods[1].relative(), 2);
        assert_eq!(periods[0].relative(), 0);
        assert_eq!(periods[0].absolute(), 4);
    }

    #[test]
    fn test_resolve_second_year_absolutes() {
        let def = toy();
        let periods = resolve(7, &def).unwrap();
        assert_eq!(periods[2].relative(), 1);
        assert_eq!(periods[2].absolute(), 1);
        // One full year consumed 3 months and 6 days.
        assert_eq!(periods[1].absolute(), 3);
        assert_eq!(periods[0].absolute(), 7);
        assert_eq!(periods[2].start_day(), 6);
        assert_eq!(periods[1].start_day(), 6);
    }

    #[test]
    fn test_resolve_negative_day_count() {
        let def = toy();
        // Floor division: -1 is the last day of year -1.
        let periods = resolve(-1, &def).unwrap();
        assert_eq!(periods[2].relative(), -1);
        assert_eq!(periods[2].start_day(), -6);
        assert_eq!(periods[1].relative(), 2);
        assert_eq!(periods[0].relative(), 1);
        assert_eq!(periods[0].absolute(), -1);
    }

    #[test]
    fn test_round_trip_toy() {
        let def = toy();
        for d in -20..=20 {
            let periods = resolve(d, &def).unwrap();
            assert_eq!(to_day_count(&periods).unwrap(), d, "day {d}");
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        let def = toy();
        let err = resolve(MAX_DAY_SPAN + 1, &def).unwrap_err();
        assert!(matches!(err, CalendarError::OutOfRange { .. }));
        assert!(resolve(MAX_DAY_SPAN, &def).is_ok());
        assert!(resolve(-MAX_DAY_SPAN, &def).is_ok());
    }

    #[test]
    fn test_coverage_gap_reported_not_zero_filled() {
        // A year that declares 10 days but whose months cover only 6.
        let day = PeriodStructure::unit(0, "day", 1);
        let m1 = PeriodStructure::composite(1, "month.1", 3, vec![day.clone(); 3]);
        let m2 = PeriodStructure::composite(1, "month.2", 3, vec![day.clone(); 3]);
        let year = PeriodStructure::composite(2, "year", 10, vec![m1, m2]);
        let def = CalendarDefinition::new(
            "gappy",
            PeriodTypeRegistry::new(&["day", "month", "year"]),
            vec![year],
            0,
            NameTable::new("en"),
        )
        .unwrap();
        let err = resolve(8, &def).unwrap_err();
        assert_eq!(
            err,
            CalendarError::CoverageGap {
                type_name: "month",
                remaining: 2
            }
        );
        // Day counts inside the covered span still resolve.
        assert!(resolve(5, &def).is_ok());
    }

    #[test]
    fn test_to_day_count_rejects_empty() {
        assert_eq!(to_day_count(&[]).unwrap_err(), CalendarError::EmptyInstances);
    }

    #[test]
    fn test_to_day_count_rejects_tampered_array() {
        let def = toy();
        let mut periods = resolve(4, &def).unwrap();
        // Swap the month instance for the day instance's position.
        periods.swap(0, 1);
        let err = to_day_count(&periods).unwrap_err();
        assert!(matches!(err, CalendarError::InconsistentInstances { .. }));
    }

    #[test]
    fn test_display_relative_is_one_based() {
        let def = toy();
        let periods = resolve(0, &def).unwrap();
        assert_eq!(periods[0].display_relative(), 1);
    }
}
