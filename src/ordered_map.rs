use std::collections::HashMap;

/// Map keyed by catalog indices that remembers insertion order, so the
/// scroll controller can walk entries the way they appear on screen.
#[derive(Debug, Clone)]
pub struct OrderedMap<T> {
    map: HashMap<usize, T>,
    keys: Vec<usize>,
}

impl<T> Default for OrderedMap<T> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            keys: Vec::new(),
        }
    }
}

impl<T> OrderedMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.keys
            .iter()
            .filter_map(|&key| self.map.get(&key).map(|value| (key, value)))
    }

    pub fn insert(&mut self, key: usize, value: T) -> Option<T> {
        if !self.map.contains_key(&key) {
            self.keys.push(key);
        }
        self.map.insert(key, value)
    }

    pub fn get(&self, key: usize) -> Option<&T> {
        self.map.get(&key)
    }

    /// Entry at a display position rather than a key.
    pub fn entry_by_position(&self, position: usize) -> Option<(usize, &T)> {
        self.keys
            .get(position)
            .and_then(|&key| self.map.get(&key).map(|value| (key, value)))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
