//! checker.rs
//!
//! Diagnostic validation of a calendar definition's internal consistency.
//!
//! [`check_definition`] walks the whole structure tree once and reports
//! every place where the declared data disagrees with itself: a structure
//! whose children's lengths do not sum to its own declared length, or a
//! containment table out of step with what the children actually contain.
//! A clean report guarantees the resolver's sibling scan can never
//! exhaust a child list, so `resolve` cannot fail for in-range inputs.
//!
//! The checker runs once per definition, at startup or on demand; it is
//! never on the per-query path, and it reports findings rather than
//! raising errors mid-query.

use std::fmt;

use crate::period::{CalendarDefinition, PeriodStructure};

/// One inconsistency found in a calendar definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    /// A structure's children cover a different number of days than the
    /// structure declares.
    ChildSumMismatch {
        /// Slash-separated path of name keys from the root to the structure.
        path: String,
        /// The structure's declared length in days.
        declared: i64,
        /// The children's summed length in days.
        children_sum: i64,
    },
    /// A structure's containment table disagrees with its children's
    /// tables for some period type.
    UnitCountMismatch {
        /// Slash-separated path of name keys from the root to the structure.
        path: String,
        /// Name of the period type whose count is off.
        type_name: &'static str,
        /// The count stored in the structure's table.
        stored: i64,
        /// The count recomputed from the children.
        computed: i64,
    },
    /// A containment table whose length does not match the structure's own
    /// type level, or whose own-type entry is not exactly 1.
    MalformedUnitTable {
        /// Slash-separated path of name keys from the root to the structure.
        path: String,
    },
    /// The finest-type units below this path do not account for the
    /// structure's declared days one by one (the finest type's day count
    /// must equal the declared length).
    DayCountMismatch {
        /// Slash-separated path of name keys from the root to the structure.
        path: String,
        /// The structure's declared length in days.
        declared: i64,
        /// Number of finest-type units the table claims.
        finest_units: i64,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::ChildSumMismatch {
                path,
                declared,
                children_sum,
            } => write!(
                f,
                "{path}: declares {declared} days but children sum to {children_sum}"
            ),
            Finding::UnitCountMismatch {
                path,
                type_name,
                stored,
                computed,
            } => write!(
                f,
                "{path}: containment table stores {stored} '{type_name}' periods, children contain {computed}"
            ),
            Finding::MalformedUnitTable { path } => {
                write!(f, "{path}: malformed containment table")
            }
            Finding::DayCountMismatch {
                path,
                declared,
                finest_units,
            } => write!(
                f,
                "{path}: declares {declared} days but contains {finest_units} finest-type units"
            ),
        }
    }
}

/// The result of checking one calendar definition.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    findings: Vec<Finding>,
}

impl Diagnostics {
    /// `true` when no inconsistency was found.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Every inconsistency found, in tree-walk order.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.findings.is_empty() {
            return write!(f, "definition is consistent");
        }
        for (i, finding) in self.findings.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{finding}")?;
        }
        Ok(())
    }
}

/// Verifies a calendar definition's internal consistency.
///
/// ```
/// # use calendarium::{check_definition, definitions::gregorian::GREGORIAN};
/// assert!(check_definition(&GREGORIAN).is_clean());
/// ```
pub fn check_definition(def: &CalendarDefinition) -> Diagnostics {
    let mut diagnostics = Diagnostics::default();
    let registry_len = def.registry().len();
    check_structure(def, def.root(), def.root().name_key(), registry_len, &mut diagnostics);
    diagnostics
}

fn check_structure(
    def: &CalendarDefinition,
    structure: &PeriodStructure,
    path: &str,
    registry_len: usize,
    out: &mut Diagnostics,
) {
    let table = structure.unit_counts();
    if table.len() != structure.type_ordinal() + 1
        || table.len() > registry_len
        || table[structure.type_ordinal()] != 1
    {
        out.findings.push(Finding::MalformedUnitTable {
            path: path.to_string(),
        });
    }

    // A day is a day: with the finest type being the single day, every
    // structure's finest-unit count must equal its declared length.
    if structure.unit_count(0) != structure.days() {
        out.findings.push(Finding::DayCountMismatch {
            path: path.to_string(),
            declared: structure.days(),
            finest_units: structure.unit_count(0),
        });
    }

    if structure.children().is_empty() {
        return;
    }

    let children_sum: i64 = structure.children().iter().map(|c| c.days()).sum();
    if children_sum != structure.days() {
        out.findings.push(Finding::ChildSumMismatch {
            path: path.to_string(),
            declared: structure.days(),
            children_sum,
        });
    }

    for t in 0..structure.type_ordinal() {
        let computed: i64 = structure
            .children()
            .iter()
            .map(|c| c.unit_count(t))
            .sum();
        if structure.unit_count(t) != computed {
            let type_name = def.registry().get(t).map(|ty| ty.name).unwrap_or("?");
            out.findings.push(Finding::UnitCountMismatch {
                path: path.to_string(),
                type_name,
                stored: structure.unit_count(t),
                computed,
            });
        }
    }

    for child in structure.children() {
        let child_path = format!("{path}/{}", child.name_key());
        check_structure(def, child, &child_path, registry_len, out);
    }
}
