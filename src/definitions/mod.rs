//! Shipped calendar definitions.
//!
//! Each definition is pure configuration: an ordered period type list, one
//! root structure per calendar, and nested child lists in which all leap
//! and intercalary knowledge is encoded as differently shaped siblings.
//! The resolver in [`crate::resolver`] has none of it.
//!
//! Both definitions live in `Lazy` statics, built and validated once at
//! first use and read-only afterward.

pub mod bulgar;
pub mod gregorian;
