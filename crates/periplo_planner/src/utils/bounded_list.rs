use std::slice::Iter;

/// Ordered list whose capacity is fixed when it is created and never grows.
#[derive(Debug, Clone)]
pub struct BoundedList<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedList<T> {
    pub fn new(capacity: usize) -> Self {
        BoundedList {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Appends `item`, handing it back when the list is already full.
    pub fn push(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }

        self.items.push(item);
        Ok(())
    }

    /// Removes the item at `index`, shifting the following items left.
    pub fn remove(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    pub fn position<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().position(predicate)
    }

    /// Stable sort, equal keys keep their insertion order.
    pub fn sort_by_key<K, F>(&mut self, f: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.items.sort_by_key(f)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a BoundedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
