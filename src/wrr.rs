//! Cursor scheduler.
//!
//! [`Wrr`] owns a copy of the slots and a compiled [`Cycle`]. Each selection
//! does one atomic `fetch_add` on a private cursor and two array lookups. There
//! are no locks and no allocation, and the only shared mutable state is the
//! cursor.
//!
//! The cursor is a wrapping `u64`. Its pre-increment value is reduced modulo
//! the cycle length, so concurrent callers always observe distinct consecutive
//! positions. Even a cursor that has wrapped past `u64::MAX` still yields a
//! valid index.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::compile::{compile, Cycle};
use crate::error::Result;
use crate::weight::Weighted;

/// A precompiled smooth weighted round-robin scheduler.
///
/// Safe to share across threads (`Wrr<T>: Sync` when `T: Sync`); `next` takes
/// `&self`.
///
/// ```
/// use junban::Wrr;
///
/// let wrr = Wrr::new(&[("a", 3i64), ("b", 1i64)]).unwrap();
/// let picks: Vec<&str> = (0..8).map(|_| wrr.next().0).collect();
/// assert_eq!(picks, ["a", "a", "b", "a", "a", "a", "b", "a"]);
/// ```
#[derive(Debug)]
pub struct Wrr<T> {
    slots: Box<[T]>,
    cycle: Cycle,
    cursor: AtomicU64,
}

impl<T: Weighted + Clone> Wrr<T> {
    /// Build a scheduler from a slice of weighted items.
    ///
    /// The slice is copied; it is neither retained nor modified.
    pub fn new(slots: &[T]) -> Result<Self> {
        Self::from_vec(slots.to_vec())
    }
}

impl<T: Weighted> Wrr<T> {
    /// Build a scheduler that takes ownership of `slots`.
    pub fn from_vec(slots: Vec<T>) -> Result<Self> {
        let weights: Vec<i64> = slots.iter().map(Weighted::weight).collect();
        let cycle = compile(&weights)?;
        Ok(Self {
            slots: slots.into_boxed_slice(),
            cycle,
            cursor: AtomicU64::new(0),
        })
    }
}

impl<T> Wrr<T> {
    /// Return the next item in the smooth weighted sequence.
    ///
    /// O(1), lock-free, and never fails.
    #[inline]
    pub fn next(&self) -> &T {
        &self.slots[self.next_index()]
    }

    /// Advance the cursor and return the selected slot's position in the input.
    #[inline]
    pub fn next_index(&self) -> usize {
        let pos = self.cursor.fetch_add(1, Ordering::Relaxed);
        let indices = self.cycle.indices();
        // len <= usize::MAX, so the remainder always fits back into usize.
        let at = (pos % indices.len() as u64) as usize;
        indices[at] as usize
    }

    /// An endless iterator over selections. It shares this scheduler's cursor.
    pub fn iter(&self) -> Picks<'_, T> {
        Picks { wrr: self }
    }

    /// The slots, in input order.
    pub fn slots(&self) -> &[T] {
        &self.slots
    }

    /// The compiled slot-index sequence.
    pub fn cycle(&self) -> &[u16] {
        self.cycle.indices()
    }

    /// The compiled cycle with its reduction metadata.
    pub fn compiled(&self) -> &Cycle {
        &self.cycle
    }

    /// Length of one full cycle (the GCD-reduced total weight).
    pub fn cycle_len(&self) -> usize {
        self.cycle.len()
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`; construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of selections made so far, modulo 2^64.
    ///
    /// A relaxed snapshot for diagnostics; it may already be stale under
    /// concurrent use.
    pub fn position(&self) -> u64 {
        self.cursor.load(Ordering::Relaxed)
    }

    #[cfg(test)]
    fn with_cursor(self, pos: u64) -> Self {
        self.cursor.store(pos, Ordering::Relaxed);
        self
    }
}

impl<T: Weighted> TryFrom<Vec<T>> for Wrr<T> {
    type Error = crate::error::WrrError;

    fn try_from(slots: Vec<T>) -> Result<Self> {
        Self::from_vec(slots)
    }
}

impl<'a, T> IntoIterator for &'a Wrr<T> {
    type Item = &'a T;
    type IntoIter = Picks<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Endless iterator returned by [`Wrr::iter`].
#[derive(Debug, Clone)]
pub struct Picks<'a, T> {
    wrr: &'a Wrr<T>,
}

impl<'a, T> Iterator for Picks<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        Some(self.wrr.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T> std::iter::FusedIterator for Picks<'_, T> {}
