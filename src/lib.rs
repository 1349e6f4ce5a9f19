//! calendarium
//!
//! A generic calendrical decomposition engine: given a signed count of
//! days relative to a calendar's epoch, it resolves that count into one
//! instance per period type of the calendar's hierarchy (day, month,
//! year, multi-year cycles, ...) and can invert the operation exactly.
//!
//! The engine is driven entirely by declarative period data. A
//! [`CalendarDefinition`] binds an ordered [`PeriodTypeRegistry`] to a
//! single root [`PeriodStructure`], a tree in which every node declares
//! its exact length in days and its ordered sub-periods, plus an epoch
//! offset and a locale [`NameTable`]. The same algorithm serves the
//! standard Gregorian calendar and a reconstruction of the ancient
//! Bulgarian calendar with its intercalary days and multi-year animal
//! cycles; all leap and intercalary knowledge lives in the definitions
//! under [`definitions`], none in the resolver.
//!
//! # The four operations
//!
//! - [`resolve`]: day count to period instances, finest type first.
//! - [`today`]: the same, for the current wall-clock day.
//! - [`to_day_count`]: the exact inverse mapping.
//! - [`check_definition`]: diagnostic validation of a definition's
//!   internal consistency, off the query path.
//!
//! # Usage
//!
//! ```
//! use calendarium::{resolve, to_day_count};
//! use calendarium::definitions::bulgar::{BULGAR, YEAR};
//!
//! // Day 1460 is the Бехти day closing the first four-year cycle.
//! let periods = resolve(1460, &BULGAR).unwrap();
//! assert_eq!(periods[YEAR].name("bg"), "Ден Бехти");
//! assert_eq!(periods[YEAR].display_relative(), 5);
//!
//! // The inverse mapping is exact.
//! assert_eq!(to_day_count(&periods).unwrap(), 1460);
//! ```
//!
//! Everything is a pure function of its inputs: the shipped definitions
//! are built once inside `Lazy` statics and never mutated, so every
//! operation may be called from any number of threads without locks.

pub mod checker;
pub mod dateentry;
pub mod definitions;
pub mod error;
pub mod names;
pub mod period;
pub mod resolver;

pub use checker::{check_definition, Diagnostics, Finding};
pub use error::CalendarError;
pub use names::NameTable;
pub use period::{CalendarDefinition, PeriodStructure, PeriodType, PeriodTypeRegistry};
pub use resolver::{resolve, to_day_count, today, PeriodInstance, MAX_DAY_SPAN};
