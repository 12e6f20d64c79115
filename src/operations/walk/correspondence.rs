use std::collections::HashMap;

/// Mapping from source vertex index to target vertex index.
///
/// Inserting an existing key overwrites its value in place, so the last
/// write wins while iteration keeps first-insertion order. The map is not a
/// bijection: several source vertices may point at one target vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrespondenceMap {
    entries: Vec<(usize, usize)>,
    slots: HashMap<usize, usize>,
}

impl CorrespondenceMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `source` to `target`, returning the value it replaced.
    pub fn insert(&mut self, source: usize, target: usize) -> Option<usize> {
        if let Some(&slot) = self.slots.get(&source) {
            let previous = std::mem::replace(&mut self.entries[slot].1, target);
            return Some(previous);
        }
        self.slots.insert(source, self.entries.len());
        self.entries.push((source, target));
        None
    }

    /// The target vertex mapped from `source`.
    #[must_use]
    pub fn get(&self, source: usize) -> Option<usize> {
        self.slots.get(&source).map(|&slot| self.entries[slot].1)
    }

    #[must_use]
    pub fn contains_source(&self, source: usize) -> bool {
        self.slots.contains_key(&source)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(source, target)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Swaps keys and values. When several sources share a target, the one
    /// later in iteration order wins.
    #[must_use]
    pub fn inverted(&self) -> Self {
        let mut inverse = Self::new();
        for (source, target) in self.iter() {
            inverse.insert(target, source);
        }
        inverse
    }
}

impl FromIterator<(usize, usize)> for CorrespondenceMap {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (source, target) in iter {
            map.insert(source, target);
        }
        map
    }
}
