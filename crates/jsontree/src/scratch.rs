//! Transient LIFO workspace shared by every nesting level of one parse.
//!
//! Children of an array or object arrive one at a time, with no size known in
//! advance. Rather than growing a permanent container per level, each level
//! records a [`Mark`] on a shared stack, pushes its children above it, and on
//! completion splits off exactly the region above the mark into an exactly
//! sized allocation. Nested levels always finish before their parents, so the
//! regions nest like the call stack.
//!
//! Everything is index-based: children are moved into the stack by value and
//! nobody holds a reference into it across a push, so reallocation on growth is
//! harmless.

use alloc::{boxed::Box, vec::Vec};

use crate::value::{Member, Value};

/// Position on a [`Stack`] to return to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub(crate) struct Mark(usize);

/// A growable stack addressed by marks.
#[derive(Debug)]
pub(crate) struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub(crate) fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The current top of the stack.
    pub(crate) fn mark(&self) -> Mark {
        Mark(self.items.len())
    }

    pub(crate) fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Number of items above `mark`.
    #[cfg(test)]
    pub(crate) fn len_since(&self, mark: Mark) -> usize {
        self.items.len() - mark.0
    }

    /// Pops everything above `mark` into a vector with exactly that capacity.
    pub(crate) fn take(&mut self, mark: Mark) -> Vec<T> {
        debug_assert!(mark.0 <= self.items.len(), "mark above stack top");
        self.items.split_off(mark.0)
    }

    /// Drops everything above `mark`.
    pub(crate) fn unwind(&mut self, mark: Mark) {
        debug_assert!(mark.0 <= self.items.len(), "mark above stack top");
        self.items.truncate(mark.0);
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T: Copy> Stack<T> {
    pub(crate) fn extend_from_slice(&mut self, items: &[T]) {
        self.items.extend_from_slice(items);
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

/// Per-parse workspace: decoded string bytes, pending array elements and
/// pending object members.
#[derive(Debug)]
pub(crate) struct Scratch {
    pub(crate) bytes: Stack<u8>,
    pub(crate) values: Stack<Value>,
    pub(crate) members: Stack<Member>,
}

impl Scratch {
    pub(crate) fn new() -> Self {
        Self {
            bytes: Stack::new(),
            values: Stack::new(),
            members: Stack::new(),
        }
    }

    /// Pops the values above `mark` into a permanent array payload.
    pub(crate) fn take_values(&mut self, mark: Mark) -> Box<[Value]> {
        self.values.take(mark).into_boxed_slice()
    }

    /// Pops the members above `mark` into a permanent object payload.
    pub(crate) fn take_members(&mut self, mark: Mark) -> Box<[Member]> {
        self.members.take(mark).into_boxed_slice()
    }

    /// Bytes currently held in transient storage across all stacks.
    pub(crate) fn usage(&self) -> usize {
        self.bytes.len()
            + self.values.len() * size_of::<Value>()
            + self.members.len() * size_of::<Member>()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.usage() == 0
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{Scratch, Stack};
    use crate::value::Value;

    #[test]
    fn nested_regions_are_lifo() {
        let mut stack = Stack::new();
        let outer = stack.mark();
        stack.push(1);
        stack.push(2);
        let inner = stack.mark();
        stack.push(3);
        assert_eq!(stack.len_since(inner), 1);
        assert_eq!(stack.take(inner), vec![3]);
        stack.push(4);
        assert_eq!(stack.len_since(outer), 3);
        assert_eq!(stack.take(outer), vec![1, 2, 4]);
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn take_is_exactly_sized() {
        let mut stack = Stack::new();
        for i in 0..100 {
            stack.push(i);
        }
        let mark = stack.mark();
        stack.extend_from_slice(&[7, 8, 9]);
        let taken = stack.take(mark);
        assert_eq!(taken.capacity(), 3);
        assert_eq!(stack.len(), 100);
    }

    #[test]
    fn unwind_drops_region_only() {
        let mut stack = Stack::new();
        stack.push(1u8);
        let mark = stack.mark();
        stack.extend([2, 3, 4]);
        stack.unwind(mark);
        assert_eq!(stack.len(), 1);
        stack.unwind(mark);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn usage_tracks_every_stack() {
        let mut scratch = Scratch::new();
        assert!(scratch.is_empty());
        let values = scratch.values.mark();
        let bytes = scratch.bytes.mark();
        scratch.values.push(Value::Null);
        scratch.bytes.push(b'x');
        assert_eq!(scratch.usage(), 1 + size_of::<Value>());
        assert_eq!(scratch.bytes.take(bytes), b"x");
        assert!(!scratch.is_empty());
        assert_eq!(&*scratch.take_values(values), &[Value::Null]);
        assert!(scratch.is_empty());
    }
}
