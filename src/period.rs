//! period.rs
//!
//! The declarative data model that drives the resolver: period types,
//! the ordered type registry, period structures, and the calendar
//! definition that binds them together.
//!
//! Nothing in this module computes a date. A calendar is *described* as a
//! tree of [`PeriodStructure`] nodes, each declaring its exact length in
//! days and the ordered list of sub-periods it contains, and the
//! resolver in [`crate::resolver`] walks that description. All leap-year
//! and intercalary-day knowledge lives in the trees built by
//! [`crate::definitions`]; the algorithm has none.
//!
//! Structures are immutable after construction and shared via [`Arc`], so
//! identical shapes (every 31-day January in a 400-year cycle, say) are a
//! single node. A [`CalendarDefinition`] is built once, validated in its
//! constructor, and read-only afterward, which makes it safe to share
//! across threads without locks.

use std::sync::Arc;

use crate::error::CalendarError;
use crate::names::NameTable;

/// One named granularity level of a calendar hierarchy.
///
/// Ordinal 0 is the finest type (the day); higher ordinals are coarser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodType {
    /// Unique name of the level, e.g. `"month"`.
    pub name: &'static str,
    /// Position in the registry; 0 = finest.
    pub ordinal: usize,
}

/// Ordered list of period types, finest first.
///
/// The registry length is fixed per calendar definition and equals the
/// length of every instance array the resolver produces for it.
///
/// ```
/// # use calendarium::PeriodTypeRegistry;
/// let reg = PeriodTypeRegistry::new(&["day", "month", "year"]);
/// assert_eq!(reg.len(), 3);
/// assert_eq!(reg.finest().name, "day");
/// assert_eq!(reg.coarsest().name, "year");
/// ```
#[derive(Debug, Clone)]
pub struct PeriodTypeRegistry {
    types: Vec<PeriodType>,
}

impl PeriodTypeRegistry {
    /// Builds a registry from type names ordered finest to coarsest.
    pub fn new(names: &[&'static str]) -> Self {
        let types = names
            .iter()
            .enumerate()
            .map(|(ordinal, name)| PeriodType { name, ordinal })
            .collect();
        PeriodTypeRegistry { types }
    }

    /// Number of period types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// `true` when the registry holds no types.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// The ordered type list, finest first.
    pub fn types(&self) -> &[PeriodType] {
        &self.types
    }

    /// The type at the given ordinal, if any.
    pub fn get(&self, ordinal: usize) -> Option<&PeriodType> {
        self.types.get(ordinal)
    }

    /// The finest type. Panics on an empty registry, which
    /// [`CalendarDefinition::new`] rejects before anything else runs.
    pub fn finest(&self) -> &PeriodType {
        &self.types[0]
    }

    /// The coarsest type.
    pub fn coarsest(&self) -> &PeriodType {
        &self.types[self.types.len() - 1]
    }
}

/// One concrete possible shape of a period of a given type.
///
/// A structure declares its total length in days, the ordered list of
/// child structures one type level below it, and a precomputed table of
/// how many complete periods of each finer type it contains (used by the
/// resolver for absolute counting). Irregular siblings such as a 29-day
/// February or a trailing one-day intercalary period are just differently
/// shaped entries in a parent's child list.
#[derive(Debug)]
pub struct PeriodStructure {
    type_ordinal: usize,
    name_key: String,
    days: i64,
    children: Vec<Arc<PeriodStructure>>,
    /// `unit_counts[t]` = complete type-`t` periods contained in one
    /// occurrence of this structure; own ordinal entry is always 1.
    unit_counts: Vec<i64>,
}

impl PeriodStructure {
    /// Builds a childless structure (a unit of the finest type, or a leaf
    /// of a one-day intercalary chain).
    ///
    /// ```
    /// # use calendarium::PeriodStructure;
    /// let day = PeriodStructure::unit(0, "day", 1);
    /// assert_eq!(day.days(), 1);
    /// assert_eq!(day.unit_count(0), 1);
    /// ```
    pub fn unit(type_ordinal: usize, name_key: &str, days: i64) -> Arc<Self> {
        let mut unit_counts = vec![0; type_ordinal + 1];
        unit_counts[type_ordinal] = 1;
        Arc::new(PeriodStructure {
            type_ordinal,
            name_key: name_key.to_string(),
            days,
            children: Vec::new(),
            unit_counts,
        })
    }

    /// Builds a structure with an explicitly declared length and an ordered
    /// child list. The declared length is taken at face value here; the
    /// correctness checker reports any mismatch against the children's sum.
    pub fn composite(
        type_ordinal: usize,
        name_key: &str,
        days: i64,
        children: Vec<Arc<PeriodStructure>>,
    ) -> Arc<Self> {
        let mut unit_counts = vec![0; type_ordinal + 1];
        unit_counts[type_ordinal] = 1;
        for child in &children {
            for (t, n) in child.unit_counts.iter().enumerate() {
                unit_counts[t] += n;
            }
        }
        Arc::new(PeriodStructure {
            type_ordinal,
            name_key: name_key.to_string(),
            days,
            children,
            unit_counts,
        })
    }

    /// Like [`composite`](Self::composite), with the length derived from
    /// the children instead of declared.
    pub fn from_children(
        type_ordinal: usize,
        name_key: &str,
        children: Vec<Arc<PeriodStructure>>,
    ) -> Arc<Self> {
        let days = children.iter().map(|c| c.days).sum();
        Self::composite(type_ordinal, name_key, days, children)
    }

    /// Ordinal of the period type this structure belongs to.
    pub fn type_ordinal(&self) -> usize {
        self.type_ordinal
    }

    /// Language-independent key for display-name lookup.
    pub fn name_key(&self) -> &str {
        &self.name_key
    }

    /// Total length of one occurrence of this structure, in days.
    pub fn days(&self) -> i64 {
        self.days
    }

    /// The ordered sub-periods, one type level below this structure.
    pub fn children(&self) -> &[Arc<PeriodStructure>] {
        &self.children
    }

    /// Complete type-`t` periods contained in one occurrence of this
    /// structure (0 for types coarser than this structure's own).
    pub fn unit_count(&self, type_ordinal: usize) -> i64 {
        self.unit_counts.get(type_ordinal).copied().unwrap_or(0)
    }

    /// The full per-type containment table, indexed by type ordinal.
    pub fn unit_counts(&self) -> &[i64] {
        &self.unit_counts
    }
}

/// A complete calendar: a type registry, the single root structure of the
/// coarsest type, the epoch offset, and the locale name table.
///
/// The epoch offset is the signed number of days from the fixed reference
/// instant (1970-01-01) to day 0 of the calendar; the resolver works in
/// day counts relative to the calendar's own epoch.
#[derive(Debug)]
pub struct CalendarDefinition {
    name: &'static str,
    registry: PeriodTypeRegistry,
    root: Arc<PeriodStructure>,
    epoch_offset_days: i64,
    names: Arc<NameTable>,
}

impl CalendarDefinition {
    /// Builds and validates a calendar definition.
    ///
    /// `root_candidates` holds the candidate structures for the coarsest
    /// type; exactly one must be supplied. The whole structure tree is
    /// validated eagerly: positive lengths everywhere, children exactly one
    /// type level below their parent, no children below the finest type and
    /// no childless structures above it.
    ///
    /// # Errors
    ///
    /// Any violation is a configuration error
    /// ([`CalendarError::AmbiguousRoot`], [`CalendarError::EmptyRegistry`],
    /// [`CalendarError::NonPositiveLength`],
    /// [`CalendarError::BrokenTypeChain`],
    /// [`CalendarError::MissingChildren`],
    /// [`CalendarError::ChildrenBelowFinest`]) and fails construction;
    /// no partially valid definition is ever returned.
    pub fn new(
        name: &'static str,
        registry: PeriodTypeRegistry,
        mut root_candidates: Vec<Arc<PeriodStructure>>,
        epoch_offset_days: i64,
        names: NameTable,
    ) -> Result<Self, CalendarError> {
        if registry.is_empty() {
            return Err(CalendarError::EmptyRegistry {
                calendar: name.to_string(),
            });
        }
        if root_candidates.len() != 1 {
            return Err(CalendarError::AmbiguousRoot {
                calendar: name.to_string(),
                count: root_candidates.len(),
            });
        }
        let root = root_candidates.remove(0);
        if root.type_ordinal() != registry.coarsest().ordinal {
            return Err(CalendarError::BrokenTypeChain {
                parent: name.to_string(),
                parent_level: registry.coarsest().ordinal,
                child: root.name_key().to_string(),
                child_level: root.type_ordinal(),
            });
        }
        validate_structure(&root)?;
        Ok(CalendarDefinition {
            name,
            registry,
            root,
            epoch_offset_days,
            names: Arc::new(names),
        })
    }

    /// Name of this calendar definition.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The ordered period type registry.
    pub fn registry(&self) -> &PeriodTypeRegistry {
        &self.registry
    }

    /// The single root structure of the coarsest type.
    pub fn root(&self) -> &Arc<PeriodStructure> {
        &self.root
    }

    /// Days from the 1970-01-01 reference instant to day 0 of this calendar.
    pub fn epoch_offset_days(&self) -> i64 {
        self.epoch_offset_days
    }

    /// The locale name table consulted by
    /// [`PeriodInstance::name`](crate::resolver::PeriodInstance::name).
    pub fn names(&self) -> &Arc<NameTable> {
        &self.names
    }
}

/// Recursive structural validation shared by every node of the tree.
fn validate_structure(structure: &PeriodStructure) -> Result<(), CalendarError> {
    if structure.days() <= 0 {
        return Err(CalendarError::NonPositiveLength {
            name: structure.name_key().to_string(),
            days: structure.days(),
        });
    }
    if structure.type_ordinal() == 0 {
        if !structure.children().is_empty() {
            return Err(CalendarError::ChildrenBelowFinest {
                name: structure.name_key().to_string(),
                count: structure.children().len(),
            });
        }
        return Ok(());
    }
    if structure.children().is_empty() {
        return Err(CalendarError::MissingChildren {
            name: structure.name_key().to_string(),
            level: structure.type_ordinal(),
        });
    }
    for child in structure.children() {
        if child.type_ordinal() + 1 != structure.type_ordinal() {
            return Err(CalendarError::BrokenTypeChain {
                parent: structure.name_key().to_string(),
                parent_level: structure.type_ordinal(),
                child: child.name_key().to_string(),
                child_level: child.type_ordinal(),
            });
        }
        validate_structure(child)?;
    }
    Ok(())
}
