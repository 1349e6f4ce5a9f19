//! error.rs
//!
//! Error types for the calendarium crate.
//!
//! The taxonomy distinguishes *configuration* errors (a calendar definition
//! that is malformed, caught when the definition is constructed) from
//! *resolution* errors (a query that cannot be answered). A well-formed
//! definition never produces a resolution error for an in-range day count,
//! including negative ones.

/// Error type for all fallible operations in the calendarium crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// A calendar definition declared more (or fewer) than one candidate
    /// structure for its coarsest period type.
    #[error("calendar '{calendar}' declares {count} root structures (must be exactly 1)")]
    AmbiguousRoot {
        /// Name of the offending calendar definition.
        calendar: String,
        /// Number of root candidates that were supplied.
        count: usize,
    },

    /// A calendar definition was built with an empty period type registry.
    #[error("calendar '{calendar}' has an empty period type registry")]
    EmptyRegistry {
        /// Name of the offending calendar definition.
        calendar: String,
    },

    /// A period structure declared a zero or negative length in days.
    #[error("structure '{name}' has non-positive length of {days} days")]
    NonPositiveLength {
        /// Name key of the offending structure.
        name: String,
        /// The declared length.
        days: i64,
    },

    /// A child structure does not sit exactly one type level below its parent.
    #[error(
        "structure '{parent}' at level {parent_level} has child '{child}' at level {child_level} \
         (children must sit one level below their parent)"
    )]
    BrokenTypeChain {
        /// Name key of the parent structure.
        parent: String,
        /// Type ordinal of the parent.
        parent_level: usize,
        /// Name key of the child structure.
        child: String,
        /// Type ordinal of the child.
        child_level: usize,
    },

    /// A structure above the finest type has no children, so no finer period
    /// could ever be resolved inside it.
    #[error("structure '{name}' at level {level} has no children")]
    MissingChildren {
        /// Name key of the offending structure.
        name: String,
        /// Type ordinal of the structure.
        level: usize,
    },

    /// A structure of the finest type has children, which the resolver can
    /// never descend into.
    #[error("structure '{name}' at the finest level has {count} children (must have none)")]
    ChildrenBelowFinest {
        /// Name key of the offending structure.
        name: String,
        /// Number of children that were supplied.
        count: usize,
    },

    /// The sibling scan at some level ran out of candidates before finding
    /// one containing the remaining day offset. Can only happen when a
    /// structure's children cover fewer days than the structure declares;
    /// [`check_definition`](crate::check_definition) reports such gaps.
    #[error("no candidate at level '{type_name}' covers the remaining {remaining} days")]
    CoverageGap {
        /// Name of the period type whose sibling list was exhausted.
        type_name: &'static str,
        /// Days left unaccounted for when the scan exhausted.
        remaining: i64,
    },

    /// The queried day count lies outside the supported range
    /// (see [`MAX_DAY_SPAN`](crate::resolver::MAX_DAY_SPAN)).
    #[error("day count {day_count} is outside the supported range of ±{max} days")]
    OutOfRange {
        /// The rejected day count.
        day_count: i64,
        /// The supported magnitude bound.
        max: i64,
    },

    /// An empty instance array was passed to the inverse mapping.
    #[error("cannot compute a day count from an empty instance array")]
    EmptyInstances,

    /// A hand-constructed instance array is not internally consistent: the
    /// instance at the given level is not the child its relative number
    /// selects within its parent's structure.
    #[error("instance array is inconsistent at level {level}")]
    InconsistentInstances {
        /// Index (type ordinal) of the offending instance.
        level: usize,
    },

    /// A manual date-entry string did not parse as `DD.MM.YYYY`, or named a
    /// day that does not exist in the Gregorian calendar.
    #[error("'{input}' is not a valid DD.MM.YYYY date")]
    BadDateString {
        /// The rejected input.
        input: String,
    },
}
