//! Word frequency counting.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Word → occurrence count, remembering the order in which words first appeared.
///
/// Lookups go through a hash index; iteration follows first occurrence, which
/// is what ranking uses to keep ties stable.
#[derive(Debug, Clone, Default)]
pub struct WordFrequency {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl WordFrequency {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `word`.
    pub fn increment(&mut self, word: &str) {
        self.add(word, 1);
    }

    fn add(&mut self, word: &str, count: usize) {
        if let Some(&slot) = self.index.get(word) {
            self.entries[slot].1 += count;
        } else {
            self.index.insert(word.to_string(), self.entries.len());
            self.entries.push((word.to_string(), count));
        }
    }

    /// Count for `word`, if it was seen.
    pub fn get(&self, word: &str) -> Option<usize> {
        self.index.get(word).map(|&slot| self.entries[slot].1)
    }

    /// Whether `word` was seen.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no words were counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterate `(word, count)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

impl PartialEq for WordFrequency {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordFrequency {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut freq = Self::new();
        for word in iter {
            freq.increment(word.as_ref());
        }
        freq
    }
}

/// Count occurrences of each token.
pub fn count_frequency<S: AsRef<str>>(tokens: &[S]) -> WordFrequency {
    tokens.iter().collect()
}

impl Serialize for WordFrequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, count) in &self.entries {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for WordFrequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FrequencyVisitor;

        impl<'de> Visitor<'de> for FrequencyVisitor {
            type Value = WordFrequency;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of words to counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut freq = WordFrequency::new();
                while let Some((word, count)) = access.next_entry::<String, usize>()? {
                    freq.add(&word, count);
                }
                Ok(freq)
            }
        }

        deserializer.deserialize_map(FrequencyVisitor)
    }
}

impl JsonSchema for WordFrequency {
    fn schema_name() -> Cow<'static, str> {
        "WordFrequency".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        <HashMap<String, usize>>::json_schema(generator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_token() {
        let freq = count_frequency(&["run", "run", "run", "jump", "jump", "play"]);
        assert_eq!(freq.get("run"), Some(3));
        assert_eq!(freq.get("jump"), Some(2));
        assert_eq!(freq.get("play"), Some(1));
        assert_eq!(freq.get("walk"), None);
        assert_eq!(freq.len(), 3);
        assert_eq!(freq.total(), 6);
    }

    #[test]
    fn empty_input_yields_empty_mapping() {
        let freq = count_frequency::<&str>(&[]);
        assert!(freq.is_empty());
        assert_eq!(freq.total(), 0);
    }

    #[test]
    fn iteration_follows_first_occurrence() {
        let freq = count_frequency(&["beta", "alpha", "beta", "gamma"]);
        let order: Vec<_> = freq.iter().map(|(w, _)| w).collect();
        assert_eq!(order, vec!["beta", "alpha", "gamma"]);
    }

    #[test]
    fn counts_do_not_depend_on_order() {
        let a = count_frequency(&["x", "y", "x"]);
        let b = count_frequency(&["y", "x", "x"]);
        assert_eq!(a.get("x"), b.get("x"));
        assert_eq!(a.get("y"), b.get("y"));
    }

    #[test]
    fn serializes_as_json_object_in_order() {
        let freq = count_frequency(&["run", "jump", "run"]);
        let json = serde_json::to_string(&freq).unwrap();
        assert_eq!(json, r#"{"run":2,"jump":1}"#);

        let back: WordFrequency = serde_json::from_str(&json).unwrap();
        assert_eq!(back, freq);
    }
}
