// Generational arena for level-owned entities
//
// Handles are weak references: removing an entry bumps its slot generation,
// so any handle still held elsewhere stops resolving instead of aliasing the
// next entity stored in that slot.

use std::fmt;
use std::marker::PhantomData;

/// Typed weak reference into an [`Arena`]
pub struct Handle<T> {
    index: u32,
    generation: u32,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    fn new(index: u32, generation: u32) -> Self {
        Self {
            index,
            generation,
            _phantom: PhantomData,
        }
    }
}

// Manual impls: derives would require `T: Clone` etc.
impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.generation == other.generation
    }
}

impl<T> Eq for Handle<T> {}

impl<T> std::hash::Hash for Handle<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.generation.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({}v{})", self.index, self.generation)
    }
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Slot storage with generation-checked handles
#[derive(Debug)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Store a value and return its handle
    pub fn insert(&mut self, value: T) -> Handle<T> {
        self.len += 1;

        if let Some(index) = self.free.pop() {
            if let Some(slot) = self.slots.get_mut(index as usize) {
                slot.value = Some(value);
                return Handle::new(index, slot.generation);
            }
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            value: Some(value),
        });
        Handle::new(index, 0)
    }

    pub fn get(&self, handle: Handle<T>) -> Option<&T> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.value.as_ref())
    }

    pub fn get_mut(&mut self, handle: Handle<T>) -> Option<&mut T> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.value.as_mut())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over live values with their handles
    pub fn iter(&self) -> impl Iterator<Item = (Handle<T>, &T)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.value
                .as_ref()
                .map(|value| (Handle::new(index as u32, slot.generation), value))
        })
    }

    /// Iterate mutably over live values with their handles
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Handle<T>, &mut T)> {
        self.slots.iter_mut().enumerate().filter_map(|(index, slot)| {
            let generation = slot.generation;
            slot.value
                .as_mut()
                .map(|value| (Handle::new(index as u32, generation), value))
        })
    }

    /// Remove every value for which `keep` returns false.
    ///
    /// Removal happens slot by slot without reordering, so it is safe to call
    /// between update passes while handles to the survivors stay valid.
    pub fn retain(&mut self, mut keep: impl FnMut(Handle<T>, &mut T) -> bool) -> Vec<T> {
        let mut removed = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let handle = Handle::new(index as u32, slot.generation);
            let drop_it = match slot.value.as_mut() {
                Some(value) => !keep(handle, value),
                None => false,
            };
            if drop_it {
                if let Some(value) = slot.value.take() {
                    removed.push(value);
                }
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index as u32);
                self.len -= 1;
            }
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut arena = Arena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");

        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a), Some(&"a"));
        assert_eq!(arena.get(b), Some(&"b"));
    }

    #[test]
    fn test_stale_handle_after_retain() {
        let mut arena = Arena::new();
        let a = arena.insert(1);
        assert_eq!(arena.retain(|_, _| false), vec![1]);
        assert_eq!(arena.get(a), None);
        assert!(arena.is_empty());

        // Slot is reused with a new generation
        let b = arena.insert(2);
        assert_eq!(b.index, a.index);
        assert_ne!(b.generation, a.generation);
        assert_ne!(a, b);
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.get(b), Some(&2));
    }

    #[test]
    fn test_retain_keeps_order_and_handles() {
        let mut arena = Arena::new();
        let handles: Vec<_> = (0..5).map(|i| arena.insert(i)).collect();

        let removed = arena.retain(|_, v| *v % 2 == 0);
        assert_eq!(removed, vec![1, 3]);
        assert_eq!(arena.len(), 3);

        let values: Vec<_> = arena.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![0, 2, 4]);
        assert_eq!(arena.get(handles[0]), Some(&0));
        assert_eq!(arena.get(handles[1]), None);
    }

    #[test]
    fn test_iter_mut() {
        let mut arena = Arena::new();
        let a = arena.insert(1);
        arena.insert(2);
        for (_, value) in arena.iter_mut() {
            *value *= 10;
        }
        assert_eq!(arena.get(a), Some(&10));
    }
}
