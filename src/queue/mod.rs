//! A priority queue implemented with a binary min-heap.
//!
//! See [`MinQueue`] for the full API.

use core::fmt;
use core::iter::FusedIterator;

use alloc::slice;
use alloc::vec::{self, Vec};
use cfg_if::cfg_if;

#[cfg(test)]
mod tests;

/// Number of slots a queue created by [`MinQueue::new`] pre-allocates.
pub const INITIAL_CAPACITY: usize = 10;

/// Step size used by [`GrowthPolicy::FixedIncrement`] to reproduce the
/// classic fixed-increment growth schedule.
pub const GROWTH_INCREMENT: usize = 10;

/// The error returned by [`MinQueue::peek`] and [`MinQueue::extract_min`]
/// (and their `_entry` variants) when the queue holds no entries.
///
/// # Examples
///
/// ```
/// use minpq::{EmptyQueueError, MinQueue};
///
/// let mut queue = MinQueue::<&str>::new();
/// assert_eq!(queue.extract_min(), Err(EmptyQueueError));
///
/// queue.insert("ready", 0);
/// assert!(queue.extract_min().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EmptyQueueError;

impl fmt::Display for EmptyQueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("peek or extract on an empty priority queue")
    }
}

cfg_if! {
    if #[cfg(any(feature = "std", test))] {
        impl std::error::Error for EmptyQueueError {}
    }
}

/// A payload together with the numeric priority it was queued under.
///
/// All comparison impls delegate to the priority alone, so two entries with
/// equal priorities compare equal regardless of their payloads.
///
/// # Examples
///
/// ```
/// use minpq::Entry;
///
/// let a = Entry::new("first", 1);
/// let b = Entry::new("second", 2);
/// assert!(a < b);
/// assert_eq!(a, Entry::new("also first", 1));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Entry<T> {
    /// The caller-supplied value, returned on peek/extraction.
    pub payload: T,
    /// The totally ordered key; smaller priorities are extracted first.
    pub priority: i64,
}

impl<T> Entry<T> {
    /// Pairs `payload` with `priority`.
    pub fn new(payload: T, priority: i64) -> Self {
        Entry { payload, priority }
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.priority.cmp(&other.priority)
    }
}

/// How the backing buffer expands once every allocated slot is live.
///
/// Growth never moves an entry to a different index; it only relocates the
/// buffer as a whole, which is why no borrow into the queue may be held
/// across an insertion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// Amortized doubling, the backing vector's native schedule. Each
    /// insertion is amortized *O*(1).
    #[default]
    Geometric,
    /// Reserve exactly this many additional slots whenever the buffer is
    /// full. Simpler to reason about but amortized *O*(n) per insertion;
    /// a step of [`GROWTH_INCREMENT`] matches the classic schedule. A step
    /// of zero is treated as one.
    FixedIncrement(usize),
}

/// A priority queue implemented with a binary min-heap.
///
/// Every entry pairs an owned payload with an `i64` priority, and the entry
/// with the *smallest* priority is always at the front. Entries with equal
/// priorities are extracted in an unspecified order relative to one another,
/// and iteration visits entries in arbitrary order: root minimality is the
/// only ordering guarantee.
///
/// The heap invariant — each parent's priority is less than or equal to both
/// its children's — is restored after every mutation, so `peek` is *O*(1)
/// while `insert` and `extract_min` are *O*(log(*n*)).
///
/// # Examples
///
/// ```
/// use minpq::MinQueue;
///
/// let mut queue = MinQueue::new();
///
/// queue.insert(10, 5);
/// queue.insert(20, 3);
/// queue.insert(30, 8);
/// queue.insert(40, 1);
///
/// // Priority 1 is the minimum, so payload 40 is at the front.
/// assert_eq!(queue.peek(), Ok(&40));
///
/// // Extraction drains payloads in ascending priority order.
/// assert_eq!(queue.extract_min(), Ok(40));
/// assert_eq!(queue.extract_min(), Ok(20));
/// assert_eq!(queue.extract_min(), Ok(10));
/// assert_eq!(queue.extract_min(), Ok(30));
/// assert!(queue.extract_min().is_err());
/// ```
///
/// A queue with known contents can be built in bulk:
///
/// ```
/// use minpq::{Entry, MinQueue};
///
/// let queue = MinQueue::from_entries(vec![
///     Entry::new('b', 4),
///     Entry::new('d', 8),
///     Entry::new('a', 2),
///     Entry::new('c', 5),
/// ]);
/// let sorted: Vec<char> = queue.into_sorted_vec().into_iter().map(|e| e.payload).collect();
/// assert_eq!(sorted, ['a', 'b', 'c', 'd']);
/// ```
///
/// # Time complexity
///
/// | [insert]  | [extract\_min]  | [peek]   |
/// |-----------|-----------------|----------|
/// | *O*(1)~\* | *O*(log(*n*))   | *O*(1)   |
///
/// \* amortized under the default [`GrowthPolicy::Geometric`]; sifting makes
/// the worst case *O*(log(*n*)) even before reallocation is counted.
///
/// [insert]: MinQueue::insert
/// [extract\_min]: MinQueue::extract_min
/// [peek]: MinQueue::peek
pub struct MinQueue<T> {
    data: Vec<Entry<T>>,
    growth: GrowthPolicy,
}

impl<T: Clone> Clone for MinQueue<T> {
    fn clone(&self) -> Self {
        MinQueue { data: self.data.clone(), growth: self.growth }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.growth = source.growth;
    }
}

impl<T> Default for MinQueue<T> {
    /// Equivalent to [`MinQueue::new`].
    fn default() -> Self {
        MinQueue::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for MinQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T> MinQueue<T> {
    /// Creates an empty `MinQueue` with [`INITIAL_CAPACITY`] slots
    /// pre-allocated and the default [`GrowthPolicy::Geometric`].
    ///
    /// # Examples
    ///
    /// ```
    /// use minpq::{MinQueue, INITIAL_CAPACITY};
    ///
    /// let queue = MinQueue::<u32>::new();
    /// assert!(queue.is_empty());
    /// assert!(queue.capacity() >= INITIAL_CAPACITY);
    /// ```
    #[must_use]
    pub fn new() -> MinQueue<T> {
        MinQueue::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty `MinQueue` with at least the specified capacity.
    ///
    /// The queue will be able to hold at least `capacity` entries without
    /// reallocating; if `capacity` is 0, it will not allocate.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> MinQueue<T> {
        MinQueue { data: Vec::with_capacity(capacity), growth: GrowthPolicy::default() }
    }

    /// Creates an empty `MinQueue` that grows according to `growth`.
    ///
    /// # Examples
    ///
    /// ```
    /// use minpq::{GrowthPolicy, MinQueue, GROWTH_INCREMENT};
    ///
    /// let mut queue = MinQueue::with_growth_policy(
    ///     GrowthPolicy::FixedIncrement(GROWTH_INCREMENT),
    /// );
    /// for n in 0..30 {
    ///     queue.insert(n, n);
    /// }
    /// assert_eq!(queue.len(), 30);
    /// ```
    #[must_use]
    pub fn with_growth_policy(growth: GrowthPolicy) -> MinQueue<T> {
        MinQueue { data: Vec::with_capacity(INITIAL_CAPACITY), growth }
    }

    /// Returns the growth policy insertions use when the buffer is full.
    #[must_use]
    pub fn growth_policy(&self) -> GrowthPolicy {
        self.growth
    }

    /// Builds a queue from an arbitrary sequence of entries.
    ///
    /// Allocation is sized exactly for the input; ordering is established by
    /// a bottom-up rebuild in *O*(*n*) rather than by *n* repeated
    /// insertions.
    ///
    /// # Examples
    ///
    /// ```
    /// use minpq::{Entry, MinQueue};
    ///
    /// let queue = MinQueue::from_entries(vec![Entry::new("late", 9), Entry::new("early", 1)]);
    /// assert_eq!(queue.peek(), Ok(&"early"));
    /// ```
    #[must_use]
    pub fn from_entries(entries: Vec<Entry<T>>) -> MinQueue<T> {
        MinQueue::from(entries)
    }

    /// Adds `payload` to the queue under `priority`.
    ///
    /// The entry is appended after the current last slot (growing the buffer
    /// first if every slot is live) and then sifted up until its parent's
    /// priority no longer exceeds its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use minpq::MinQueue;
    ///
    /// let mut queue = MinQueue::new();
    /// queue.insert("low urgency", 7);
    /// queue.insert("high urgency", 1);
    /// assert_eq!(queue.peek(), Ok(&"high urgency"));
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(log(*n*)) worst case. Under [`GrowthPolicy::FixedIncrement`] a
    /// full buffer additionally costs a reallocation of the whole buffer,
    /// making insertion amortized *O*(*n*) across a long run of inserts.
    pub fn insert(&mut self, payload: T, priority: i64) {
        self.ensure_capacity();
        self.data.push(Entry { payload, priority });
        self.sift_up(self.data.len() - 1);
    }

    /// Returns a reference to the payload with the minimum priority, or
    /// [`EmptyQueueError`] if the queue holds no entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use minpq::{EmptyQueueError, MinQueue};
    ///
    /// let mut queue = MinQueue::new();
    /// assert_eq!(queue.peek(), Err(EmptyQueueError));
    ///
    /// queue.insert('x', 3);
    /// queue.insert('y', 2);
    /// assert_eq!(queue.peek(), Ok(&'y'));
    /// ```
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    pub fn peek(&self) -> Result<&T, EmptyQueueError> {
        self.peek_entry().map(|entry| &entry.payload)
    }

    /// Returns a reference to the minimum-priority entry (payload and
    /// priority), or [`EmptyQueueError`] if the queue holds no entries.
    pub fn peek_entry(&self) -> Result<&Entry<T>, EmptyQueueError> {
        self.data.first().ok_or(EmptyQueueError)
    }

    /// Removes the payload with the minimum priority from the queue and
    /// returns it, or [`EmptyQueueError`] if the queue holds no entries.
    ///
    /// The last entry is moved into the root slot and then sifted down until
    /// neither child has a strictly smaller priority.
    ///
    /// # Examples
    ///
    /// ```
    /// use minpq::MinQueue;
    ///
    /// let mut queue = MinQueue::new();
    /// queue.insert("b", 2);
    /// queue.insert("a", 1);
    ///
    /// assert_eq!(queue.extract_min(), Ok("a"));
    /// assert_eq!(queue.extract_min(), Ok("b"));
    /// assert!(queue.extract_min().is_err());
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(log(*n*)) worst case.
    pub fn extract_min(&mut self) -> Result<T, EmptyQueueError> {
        self.extract_min_entry().map(|entry| entry.payload)
    }

    /// Removes the minimum-priority entry and returns it with its priority
    /// intact. Diagnostic/testing flavor of [`extract_min`].
    ///
    /// # Examples
    ///
    /// ```
    /// use minpq::MinQueue;
    ///
    /// let mut queue = MinQueue::new();
    /// queue.insert("job", 4);
    ///
    /// let entry = queue.extract_min_entry().unwrap();
    /// assert_eq!((entry.payload, entry.priority), ("job", 4));
    /// ```
    ///
    /// [`extract_min`]: MinQueue::extract_min
    pub fn extract_min_entry(&mut self) -> Result<Entry<T>, EmptyQueueError> {
        self.pop_entry().ok_or(EmptyQueueError)
    }

    fn pop_entry(&mut self) -> Option<Entry<T>> {
        let mut entry = self.data.pop()?;
        if !self.data.is_empty() {
            core::mem::swap(&mut entry, &mut self.data[0]);
            self.sift_down(0);
        }
        Some(entry)
    }

    /// Returns the number of live entries in the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks whether the queue holds no entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use minpq::MinQueue;
    ///
    /// let mut queue = MinQueue::new();
    /// assert!(queue.is_empty());
    /// queue.insert((), 0);
    /// assert!(!queue.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of entries the queue can hold without growing.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns an iterator visiting all entries in arbitrary order.
    ///
    /// # Examples
    ///
    /// ```
    /// use minpq::MinQueue;
    ///
    /// let mut queue = MinQueue::new();
    /// queue.insert(1, 10);
    /// queue.insert(2, 20);
    ///
    /// let total: i64 = queue.iter().map(|entry| entry.priority).sum();
    /// assert_eq!(total, 30);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { iter: self.data.iter() }
    }

    /// Clears the queue, returning an iterator over the removed entries in
    /// arbitrary order. Entries not consumed by the iterator are dropped
    /// when it is.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { iter: self.data.drain(..) }
    }

    /// Drops all entries from the queue. Capacity is retained.
    ///
    /// # Examples
    ///
    /// ```
    /// use minpq::MinQueue;
    ///
    /// let mut queue = MinQueue::new();
    /// queue.insert('a', 1);
    /// queue.clear();
    /// assert!(queue.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.drain();
    }

    /// Consumes the queue and returns the underlying buffer in arbitrary
    /// order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<Entry<T>> {
        self.into()
    }

    /// Consumes the queue and returns its entries in ascending priority
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use minpq::{Entry, MinQueue};
    ///
    /// let queue = MinQueue::from_entries(vec![
    ///     Entry::new("mid", 5),
    ///     Entry::new("last", 9),
    ///     Entry::new("first", 2),
    /// ]);
    ///
    /// let priorities: Vec<i64> =
    ///     queue.into_sorted_vec().into_iter().map(|e| e.priority).collect();
    /// assert_eq!(priorities, [2, 5, 9]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<Entry<T>> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(entry) = self.pop_entry() {
            sorted.push(entry);
        }
        sorted
    }

    // Growth happens before the append; a failed reallocation leaves no
    // partially inserted entry behind.
    fn ensure_capacity(&mut self) {
        if let GrowthPolicy::FixedIncrement(step) = self.growth {
            if self.data.len() == self.data.capacity() {
                self.data.reserve_exact(step.max(1));
            }
        }
        // GrowthPolicy::Geometric: Vec::push reallocates on its own schedule.
    }

    /// Moves the entry at `pos` toward the root until its parent's priority
    /// no longer exceeds its own, and returns its final position.
    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.data[parent].priority <= self.data[pos].priority {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
        pos
    }

    /// Moves the entry at `pos` toward the leaves while either child has a
    /// strictly smaller priority. On a priority tie the entry stays put, and
    /// the left child is preferred over the right.
    fn sift_down(&mut self, mut pos: usize) {
        let end = self.data.len();
        loop {
            let left = 2 * pos + 1;
            if left >= end {
                break;
            }
            let mut child = left;
            let right = left + 1;
            if right < end && self.data[right].priority < self.data[left].priority {
                child = right;
            }
            if self.data[pos].priority <= self.data[child].priority {
                break;
            }
            self.data.swap(pos, child);
            pos = child;
        }
    }

    /// Restores the heap invariant over the whole buffer by sifting down
    /// from the last internal node backward to the root. *O*(*n*).
    fn rebuild(&mut self) {
        let mut n = self.data.len() / 2;
        while n > 0 {
            n -= 1;
            self.sift_down(n);
        }
    }
}

/// Depth of `index` in the implicit binary tree: `floor(log2(index))`, with
/// index 0 special-cased to 0. Display-only.
fn level(index: usize) -> usize {
    if index == 0 {
        return 0;
    }
    (usize::BITS - index.leading_zeros() - 1) as usize
}

impl<T: fmt::Display> fmt::Display for MinQueue<T> {
    /// Writes one line per live entry: its index, its computed level, and
    /// the priority/payload pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use minpq::MinQueue;
    ///
    /// let mut queue = MinQueue::new();
    /// queue.insert(40, 1);
    /// assert_eq!(queue.to_string(), "entry 0, level 0: {priority: 1, payload: 40}\n");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.data.iter().enumerate() {
            writeln!(
                f,
                "entry {}, level {}: {{priority: {}, payload: {}}}",
                index,
                level(index),
                entry.priority,
                entry.payload
            )?;
        }
        Ok(())
    }
}

/// An iterator over the entries of a `MinQueue` in arbitrary order.
///
/// This `struct` is created by [`MinQueue::iter()`]. See its documentation
/// for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, Entry<T>>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { iter: self.iter.clone() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Entry<T>;

    #[inline]
    fn next(&mut self) -> Option<&'a Entry<T>> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a Entry<T>> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the entries of a `MinQueue` in arbitrary order.
///
/// This `struct` is created by [`MinQueue::into_iter()`] (provided by the
/// [`IntoIterator`] trait).
#[derive(Clone)]
pub struct IntoIter<T> {
    iter: vec::IntoIter<Entry<T>>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = Entry<T>;

    #[inline]
    fn next(&mut self) -> Option<Entry<T>> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Entry<T>> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// A draining iterator over the entries of a `MinQueue` in arbitrary order.
///
/// This `struct` is created by [`MinQueue::drain()`]. See its documentation
/// for more.
#[derive(Debug)]
pub struct Drain<'a, T: 'a> {
    iter: vec::Drain<'a, Entry<T>>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = Entry<T>;

    #[inline]
    fn next(&mut self) -> Option<Entry<T>> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Entry<T>> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> FusedIterator for Drain<'_, T> {}

impl<T> From<Vec<Entry<T>>> for MinQueue<T> {
    /// Converts a `Vec<Entry<T>>` into a `MinQueue<T>`.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(entries: Vec<Entry<T>>) -> MinQueue<T> {
        let mut queue = MinQueue { data: entries, growth: GrowthPolicy::default() };
        queue.rebuild();
        queue
    }
}

impl<T, const N: usize> From<[Entry<T>; N]> for MinQueue<T> {
    /// ```
    /// use minpq::{Entry, MinQueue};
    ///
    /// let queue: MinQueue<_> = [Entry::new('z', 26), Entry::new('a', 1)].into();
    /// assert_eq!(queue.peek(), Ok(&'a'));
    /// ```
    fn from(arr: [Entry<T>; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T> From<MinQueue<T>> for Vec<Entry<T>> {
    /// Converts a `MinQueue<T>` into a `Vec<Entry<T>>` in arbitrary order.
    ///
    /// This conversion requires no data movement or allocation, and has
    /// constant time complexity.
    fn from(queue: MinQueue<T>) -> Vec<Entry<T>> {
        queue.data
    }
}

impl<T> FromIterator<Entry<T>> for MinQueue<T> {
    fn from_iter<I: IntoIterator<Item = Entry<T>>>(iter: I) -> MinQueue<T> {
        MinQueue::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> IntoIterator for MinQueue<T> {
    type Item = Entry<T>;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator, that is, one that moves each entry out
    /// of the queue in arbitrary order. The queue cannot be used after
    /// calling this.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { iter: self.data.into_iter() }
    }
}

impl<'a, T> IntoIterator for &'a MinQueue<T> {
    type Item = &'a Entry<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Extend<Entry<T>> for MinQueue<T> {
    fn extend<I: IntoIterator<Item = Entry<T>>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();

        self.data.reserve(lower);

        iterator.for_each(move |entry| self.insert(entry.payload, entry.priority));
    }
}
