//! Splits command arguments into a preamble and prefixed values.
//!
//! A prefix only counts when it directly follows a space, so `n/` inside
//! `clean/` or inside free text such as `a/12 Main St n/a` after a non-space
//! is left alone. Arguments are expected to keep the space that separated
//! them from the command word, e.g. `" 1 n/John"`.

use super::syntax::Prefix;
use std::collections::HashMap;

/// Values collected for each prefix, plus the text before the first prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first recognised prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`, if it appeared at all.
    pub fn get_value(&self, prefix: &Prefix) -> Option<&str> {
        self.values
            .get(prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix` in source order.
    ///
    /// Returns `None` when the prefix never appeared, never an empty slice.
    pub fn get_all_values(&self, prefix: &Prefix) -> Option<&[String]> {
        self.values.get(prefix).map(Vec::as_slice)
    }

    /// Returns true if every one of `prefixes` appeared at least once.
    pub fn contains_all(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.values.contains_key(p))
    }
}

/// Tokenize `args` against the declared `prefixes`.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| {
            let needle = format!(" {}", prefix.as_str());
            args.match_indices(&needle)
                .map(|(i, _)| (i + 1, *prefix))
                .collect::<Vec<_>>()
        })
        .collect();
    positions.sort_by_key(|(start, _)| *start);

    let preamble_end = positions.first().map_or(args.len(), |(start, _)| *start);
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        let value = args[value_start..value_end].trim().to_string();
        multimap.values.entry(*prefix).or_default().push(value);
    }

    multimap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax::{PREFIX_CLEAN_STATUS, PREFIX_NAME, PREFIX_TAG};

    const PREFIXES: [Prefix; 3] = [PREFIX_NAME, PREFIX_CLEAN_STATUS, PREFIX_TAG];

    #[test]
    fn test_empty_args() {
        let map = tokenize("", &PREFIXES);
        assert_eq!(map.preamble(), "");
        assert!(map.get_all_values(&PREFIX_NAME).is_none());
    }

    #[test]
    fn test_preamble_only() {
        let map = tokenize("  some random string /t tag with leading and trailing spaces ", &PREFIXES);
        assert_eq!(
            map.preamble(),
            "some random string /t tag with leading and trailing spaces"
        );
        assert!(map.get_value(&PREFIX_TAG).is_none());
    }

    #[test]
    fn test_repeated_prefix_keeps_order() {
        let map = tokenize(" 1 t/friends t/ owesMoney  n/Loft t/neighbours", &PREFIXES);
        assert_eq!(map.preamble(), "1");
        assert_eq!(
            map.get_all_values(&PREFIX_TAG).unwrap(),
            &["friends", "owesMoney", "neighbours"]
        );
        assert_eq!(map.get_value(&PREFIX_TAG), Some("neighbours"));
        assert_eq!(map.get_value(&PREFIX_NAME), Some("Loft"));
    }

    #[test]
    fn test_prefix_must_follow_space() {
        let map = tokenize(" n/Loftt/friends clean/y", &PREFIXES);
        assert_eq!(map.get_value(&PREFIX_NAME), Some("Loftt/friends"));
        assert!(map.get_all_values(&PREFIX_TAG).is_none());
        // "n/" inside "clean/" is not a separate prefix
        assert_eq!(map.get_all_values(&PREFIX_NAME).unwrap().len(), 1);
        assert_eq!(map.get_value(&PREFIX_CLEAN_STATUS), Some("y"));
    }

    #[test]
    fn test_present_but_empty_value() {
        let map = tokenize(" 1 t/", &PREFIXES);
        assert_eq!(map.get_all_values(&PREFIX_TAG).unwrap(), &[""]);
    }

    #[test]
    fn test_undeclared_prefix_is_plain_text() {
        let map = tokenize(" n/Loft p/123", &[PREFIX_NAME]);
        assert_eq!(map.get_value(&PREFIX_NAME), Some("Loft p/123"));
    }

    #[test]
    fn test_contains_all() {
        let map = tokenize(" n/Loft t/a", &PREFIXES);
        assert!(map.contains_all(&[PREFIX_NAME, PREFIX_TAG]));
        assert!(!map.contains_all(&[PREFIX_NAME, PREFIX_CLEAN_STATUS]));
    }
}
