//! Locale-aware string ordering used by the lexical columns.

use std::cmp::Ordering;

use serde::Deserialize;

pub trait Collator {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

impl<F> Collator for F
where
    F: Fn(&str, &str) -> Ordering,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum CollationStrength {
    /// Case is ignored entirely.
    #[serde(rename = "primary")]
    Primary,
    /// Case only breaks ties between otherwise equal strings.
    #[default]
    #[serde(rename = "tertiary")]
    Tertiary,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleCollator {
    strength: CollationStrength,
}

impl LocaleCollator {
    pub fn new(strength: CollationStrength) -> Self {
        Self { strength }
    }
}

impl Collator for LocaleCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let folded = a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase));

        match self.strength {
            CollationStrength::Primary => folded,
            // Lowercase before uppercase, as most locales collate.
            CollationStrength::Tertiary => folded.then_with(|| b.cmp(a)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_ignores_case() {
        let collator = LocaleCollator::new(CollationStrength::Primary);
        assert_eq!(collator.compare("rome", "Rome"), Ordering::Equal);
        assert_eq!(collator.compare("antium", "Rome"), Ordering::Less);
    }

    #[test]
    fn tertiary_breaks_case_ties() {
        let collator = LocaleCollator::new(CollationStrength::Tertiary);
        assert_eq!(collator.compare("rome", "Rome"), Ordering::Less);
        assert_eq!(collator.compare("Rome", "rome"), Ordering::Greater);
        assert_eq!(collator.compare("Rome", "Rome"), Ordering::Equal);
        assert_eq!(collator.compare("babylon", "Athens"), Ordering::Greater);
    }

    #[test]
    fn closures_are_collators() {
        let reversed = |a: &str, b: &str| b.cmp(a);
        assert_eq!(reversed.compare("a", "b"), Ordering::Greater);
    }
}
