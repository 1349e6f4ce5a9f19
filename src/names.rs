//! names.rs
//!
//! Locale display-name lookup for period structures.
//!
//! Every [`PeriodStructure`](crate::period::PeriodStructure) carries a
//! language-independent *name key* (e.g. `"month.2"`, `"behti"`). A
//! [`NameTable`] maps those keys to display names per language, with a
//! configurable fallback language. Lookup order is: requested language,
//! fallback language, then the key itself, so a missing translation never
//! fails; it merely degrades to the raw key.
//!
//! Each calendar definition owns its own table; nothing here is global.

use std::collections::HashMap;

/// Per-calendar table of localized display names.
///
/// ```
/// # use calendarium::NameTable;
/// let mut names = NameTable::new("en");
/// names.insert("en", "month.2", "February");
/// names.insert("bg", "month.2", "февруари");
/// assert_eq!(names.name("month.2", "bg"), "февруари");
/// // Unknown language falls back to "en":
/// assert_eq!(names.name("month.2", "de"), "February");
/// // Unknown key falls back to the key itself:
/// assert_eq!(names.name("month.99", "en"), "month.99");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    /// language -> (name key -> display name)
    tables: HashMap<String, HashMap<String, String>>,
    /// Language tried when the requested one has no entry for a key.
    fallback: String,
}

impl NameTable {
    /// Creates an empty table with the given fallback language.
    pub fn new(fallback: &str) -> Self {
        NameTable {
            tables: HashMap::new(),
            fallback: fallback.to_string(),
        }
    }

    /// The fallback language of this table.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Registers the display name for `key` in `lang`.
    pub fn insert(&mut self, lang: &str, key: &str, name: &str) {
        self.tables
            .entry(lang.to_string())
            .or_default()
            .insert(key.to_string(), name.to_string());
    }

    /// Registers a batch of `(key, name)` pairs for one language.
    pub fn insert_all(&mut self, lang: &str, entries: &[(&str, &str)]) {
        for (key, name) in entries {
            self.insert(lang, key, name);
        }
    }

    /// Resolves the display name for `key` in `lang`.
    ///
    /// Tries `lang`, then the fallback language; if neither has an entry,
    /// returns the key unchanged (with trailing whitespace trimmed).
    pub fn name(&self, key: &str, lang: &str) -> String {
        self.lookup(key, lang)
            .or_else(|| self.lookup(key, &self.fallback))
            .unwrap_or_else(|| key.to_string())
    }

    fn lookup(&self, key: &str, lang: &str) -> Option<String> {
        self.tables
            .get(lang)
            .and_then(|m| m.get(key))
            .map(|s| s.trim_end().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NameTable {
        let mut t = NameTable::new("bg");
        t.insert_all("bg", &[("day", "ден"), ("eni", "Ден Ени")]);
        t.insert("en", "day", "day");
        t
    }

    #[test]
    fn test_direct_hit() {
        let t = sample();
        assert_eq!(t.name("day", "en"), "day");
        assert_eq!(t.name("day", "bg"), "ден");
    }

    #[test]
    fn test_fallback_language() {
        let t = sample();
        // "eni" has no English entry, so the Bulgarian fallback is used.
        assert_eq!(t.name("eni", "en"), "Ден Ени");
    }

    #[test]
    fn test_key_passthrough() {
        let t = sample();
        assert_eq!(t.name("behti", "en"), "behti");
    }

    #[test]
    fn test_trailing_whitespace_trimmed() {
        let mut t = NameTable::new("en");
        t.insert("en", "year", "Year \n");
        assert_eq!(t.name("year", "en"), "Year");
    }
}
