//! Ordered record collections and identifier matching

use super::id::IdGenerator;

/// A stored record with a stable string identifier
pub trait Record: Clone + Send + Sync + 'static {
    /// Resource label used in log lines and messages ("dish", "order")
    const KIND: &'static str;

    fn id(&self) -> &str;
}

/// Loose identifier comparison used by route lookups
///
/// Identical strings match. Two identifiers that both read as numbers match
/// when they are numerically equal, so `"1"` finds a record stored as `"01"`.
pub fn loose_id_eq(stored: &str, requested: &str) -> bool {
    if stored == requested {
        return true;
    }
    match (parse_numeric(stored), parse_numeric(requested)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn parse_numeric(id: &str) -> Option<f64> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// An ordered collection of records
///
/// Records keep insertion order. Lookups by route identifier use
/// [`loose_id_eq`]; removal uses strict equality.
#[derive(Debug, Clone)]
pub struct Records<T> {
    items: Vec<T>,
}

impl<T> Default for Records<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Records<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// All records, in stored order
    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First record whose id loosely matches `id`
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|record| loose_id_eq(record.id(), id))
    }

    /// Mutable variant of [`get`](Self::get)
    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items
            .iter_mut()
            .find(|record| loose_id_eq(record.id(), id))
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.items.iter().any(|record| record.id() == id)
    }

    /// Append a record and return a reference to the stored copy
    pub fn append(&mut self, record: T) -> &T {
        self.items.push(record);
        let last = self.items.len() - 1;
        &self.items[last]
    }

    /// Remove the record whose id is exactly `id`
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.items.iter().position(|record| record.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Draw identifiers from `generator` until one is not already stored
    pub fn next_id(&self, generator: &dyn IdGenerator) -> String {
        loop {
            let candidate = generator.generate();
            if !self.contains_id(&candidate) {
                return candidate;
            }
            tracing::debug!(kind = T::KIND, id = %candidate, "generated id collided, retrying");
        }
    }
}

impl<T: Record> From<Vec<T>> for Records<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}
