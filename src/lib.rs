//! A minimum-priority queue implemented with a binary heap.
//!
//! Unlike the standard library's `BinaryHeap`, which orders elements by
//! their [`Ord`] implementation, [`MinQueue`] pairs each payload with an explicit
//! numeric priority and always surfaces the entry whose priority is
//! *smallest*. Insertion and extraction are *O*(log(*n*)); inspecting the
//! minimum is *O*(1).
//!
//! The queue owns its entries outright: a payload moves in on
//! [`insert`](MinQueue::insert) and moves back out on
//! [`extract_min`](MinQueue::extract_min). Entries live in one contiguous,
//! growable buffer, so there is no per-entry allocation and teardown is a
//! single [`Drop`].
//!
//! # Examples
//!
//! ```
//! use minpq::MinQueue;
//!
//! let mut jobs = MinQueue::new();
//!
//! // Lower priority numbers are served first.
//! jobs.insert("compact segments", 5);
//! jobs.insert("flush wal", 1);
//! jobs.insert("rotate logs", 3);
//!
//! assert_eq!(jobs.peek(), Ok(&"flush wal"));
//! assert_eq!(jobs.extract_min(), Ok("flush wal"));
//! assert_eq!(jobs.extract_min(), Ok("rotate logs"));
//! assert_eq!(jobs.extract_min(), Ok("compact segments"));
//! assert!(jobs.is_empty());
//! ```
//!
//! Inspecting or extracting from an empty queue is a recoverable error, not
//! a panic:
//!
//! ```
//! use minpq::{EmptyQueueError, MinQueue};
//!
//! let mut empty = MinQueue::<u32>::new();
//! assert_eq!(empty.peek(), Err(EmptyQueueError));
//! assert_eq!(empty.extract_min(), Err(EmptyQueueError));
//! ```
//!
//! # Concurrency
//!
//! `MinQueue` performs no internal synchronization and none of its methods
//! are safe to call from two threads simultaneously. Wrap the whole queue in
//! a mutex (or equivalent) for shared use; Rust's ownership rules enforce
//! this at compile time for safe code.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

extern crate alloc;

mod queue;

pub use queue::{
    Drain, EmptyQueueError, Entry, GrowthPolicy, IntoIter, Iter, MinQueue, GROWTH_INCREMENT,
    INITIAL_CAPACITY,
};
