use std::collections::HashMap;

/// Map keyed by word that iterates in first-insertion order.
///
/// Inserting an existing word replaces its value but keeps its slot.
#[derive(Debug, Clone, PartialEq)]
pub struct WordMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> WordMap<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert or overwrite. Returns the previous value for `word`, if any.
    pub fn insert(&mut self, word: &str, value: V) -> Option<V> {
        match self.index.get(word) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, value)),
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), value));
                None
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<&V> {
        self.index.get(word).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(word, value)| (word.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for WordMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_keeps_first_slot() {
        let mut map = WordMap::new();
        map.insert("김치", 1);
        map.insert("라면", 2);
        assert_eq!(map.insert("김치", 3), Some(1));

        let entries: Vec<_> = map.iter().collect();
        assert_eq!(entries, vec![("김치", &3), ("라면", &2)]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_missing_word() {
        let map: WordMap<String> = WordMap::default();
        assert!(map.is_empty());
        assert!(map.get("호떡").is_none());
        assert!(!map.contains("호떡"));
    }
}
