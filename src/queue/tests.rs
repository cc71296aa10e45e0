use super::*;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

fn rng() -> XorShiftRng {
    XorShiftRng::seed_from_u64(0x2b2c_6a1d)
}

/// Checks the heap-order invariant directly against the backing buffer.
fn assert_heap_order<T>(queue: &MinQueue<T>) {
    for i in 1..queue.data.len() {
        let parent = (i - 1) / 2;
        assert!(
            queue.data[parent].priority <= queue.data[i].priority,
            "parent {} (priority {}) exceeds child {} (priority {})",
            parent,
            queue.data[parent].priority,
            i,
            queue.data[i].priority,
        );
    }
}

#[test]
fn test_new_is_empty_with_initial_capacity() {
    let queue = MinQueue::<u32>::new();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    assert!(queue.capacity() >= INITIAL_CAPACITY);
    assert_eq!(queue.growth_policy(), GrowthPolicy::Geometric);
}

#[test]
fn test_insert_peek_extract_scenario() {
    let mut queue = MinQueue::new();
    queue.insert(10, 5);
    queue.insert(20, 3);
    queue.insert(30, 8);
    queue.insert(40, 1);

    assert_eq!(queue.peek(), Ok(&40));
    assert_eq!(queue.len(), 4);

    assert_eq!(queue.extract_min(), Ok(40));
    assert_eq!(queue.extract_min(), Ok(20));
    assert_eq!(queue.extract_min(), Ok(10));
    assert_eq!(queue.extract_min(), Ok(30));
    assert_eq!(queue.extract_min(), Err(EmptyQueueError));
}

#[test]
fn test_build_scenario() {
    let mut queue = MinQueue::from_entries(vec![
        Entry::new('a', 2),
        Entry::new('b', 4),
        Entry::new('c', 5),
        Entry::new('d', 8),
    ]);
    assert_heap_order(&queue);

    assert_eq!(queue.extract_min(), Ok('a'));
    assert_eq!(queue.extract_min(), Ok('b'));
    assert_eq!(queue.extract_min(), Ok('c'));
    assert_eq!(queue.extract_min(), Ok('d'));
    assert!(queue.is_empty());
}

#[test]
fn test_empty_queue_error() {
    let mut queue = MinQueue::<i32>::new();
    assert_eq!(queue.peek(), Err(EmptyQueueError));
    assert_eq!(queue.peek_entry(), Err(EmptyQueueError));
    assert_eq!(queue.extract_min(), Err(EmptyQueueError));
    assert_eq!(queue.extract_min_entry(), Err(EmptyQueueError));

    // Once drained, a previously used queue reports the same error.
    queue.insert(1, 1);
    assert_eq!(queue.extract_min(), Ok(1));
    assert_eq!(queue.extract_min(), Err(EmptyQueueError));
}

#[test]
fn test_empty_queue_error_display() {
    let rendered = EmptyQueueError.to_string();
    assert!(!rendered.is_empty());
    assert!(rendered.contains("empty"));
}

#[test]
fn test_count_conservation() {
    let mut queue = MinQueue::new();
    let k = 25;
    let j = 17;

    for n in 0..k {
        queue.insert(n, n);
        assert_eq!(queue.len(), (n + 1) as usize);
    }
    for _ in 0..j {
        queue.extract_min().unwrap();
    }
    assert_eq!(queue.len(), (k - j) as usize);
}

#[test]
fn test_sorted_extraction_any_insertion_order() {
    let mut priorities: Vec<i64> = (0..100).collect();
    priorities.shuffle(&mut rng());

    let mut queue = MinQueue::new();
    for &p in &priorities {
        // Payload mirrors the priority so extraction order is checkable.
        queue.insert(p, p);
        assert_heap_order(&queue);
    }

    let mut extracted = Vec::new();
    while let Ok(payload) = queue.extract_min() {
        extracted.push(payload);
        assert_heap_order(&queue);
    }
    assert_eq!(extracted, (0..100).collect::<Vec<i64>>());
}

#[test]
fn test_peek_tracks_minimum() {
    let mut queue = MinQueue::new();
    let mut minimum = i64::MAX;
    let mut rng = rng();

    for _ in 0..200 {
        let p = rng.gen_range(-1000..1000);
        minimum = minimum.min(p);
        queue.insert(p, p);
        assert_eq!(queue.peek(), Ok(&minimum));
    }
}

#[test]
fn test_invariant_after_interleaving() {
    let mut queue = MinQueue::new();
    let mut rng = rng();

    for round in 0..500 {
        if queue.is_empty() || rng.gen_range(0u8..3) > 0 {
            let p = rng.gen_range(-50..50);
            queue.insert(round, p);
        } else {
            queue.extract_min().unwrap();
        }
        assert_heap_order(&queue);
    }
}

#[test]
fn test_growth_geometric() {
    let mut queue = MinQueue::new();
    for n in (0..30).rev() {
        queue.insert(n, n);
    }
    assert_eq!(queue.len(), 30);
    assert_heap_order(&queue);

    for expected in 0..30 {
        assert_eq!(queue.extract_min(), Ok(expected));
    }
}

#[test]
fn test_growth_fixed_increment() {
    let mut queue = MinQueue::with_growth_policy(GrowthPolicy::FixedIncrement(GROWTH_INCREMENT));
    assert_eq!(queue.capacity(), INITIAL_CAPACITY);

    for n in 0..30 {
        queue.insert(n, 29 - n);
    }
    // Two reallocations, each by exactly one increment.
    assert_eq!(queue.capacity(), INITIAL_CAPACITY + 2 * GROWTH_INCREMENT);
    assert_heap_order(&queue);

    for expected in (0..30).rev() {
        assert_eq!(queue.extract_min(), Ok(expected));
    }
}

#[test]
fn test_zero_increment_still_grows() {
    let mut queue = MinQueue::with_growth_policy(GrowthPolicy::FixedIncrement(0));
    for n in 0..(INITIAL_CAPACITY as i64 + 5) {
        queue.insert(n, n);
    }
    assert_eq!(queue.len(), INITIAL_CAPACITY + 5);
    assert_heap_order(&queue);
}

#[test]
fn test_build_matches_repeated_insert() {
    let mut pairs: Vec<(i64, i64)> = (0..64).map(|n| (n * 7 % 64, n)).collect();
    pairs.shuffle(&mut rng());

    let built: MinQueue<i64> =
        pairs.iter().map(|&(payload, priority)| Entry::new(payload, priority)).collect();

    let mut inserted = MinQueue::new();
    for &(payload, priority) in &pairs {
        inserted.insert(payload, priority);
    }

    let built: Vec<_> = built.into_sorted_vec();
    let inserted: Vec<_> = inserted.into_sorted_vec();
    assert_eq!(built.len(), inserted.len());
    for (b, i) in built.iter().zip(&inserted) {
        assert_eq!((b.payload, b.priority), (i.payload, i.priority));
    }
}

#[test]
fn test_equal_priorities_all_surface_once() {
    let mut queue = MinQueue::new();
    for payload in 0..10 {
        queue.insert(payload, 5);
    }
    queue.insert(99, 1);

    assert_eq!(queue.extract_min(), Ok(99));

    let mut payloads = Vec::new();
    while let Ok(entry) = queue.extract_min_entry() {
        assert_eq!(entry.priority, 5);
        payloads.push(entry.payload);
    }
    payloads.sort_unstable();
    assert_eq!(payloads, (0..10).collect::<Vec<i32>>());
}

#[test]
fn test_sift_down_prefers_left_child_on_tie() {
    // Root replacement must stop at the first strictly smaller child; with
    // equal children the left one is the swap target.
    let mut queue = MinQueue::new();
    queue.insert("root", 1);
    queue.insert("left", 2);
    queue.insert("right", 2);
    queue.insert("tail", 3);

    assert_eq!(queue.extract_min(), Ok("root"));
    assert_eq!(queue.data[0].payload, "left");
    assert_heap_order(&queue);
}

#[test]
fn test_level() {
    assert_eq!(level(0), 0);
    assert_eq!(level(1), 0);
    assert_eq!(level(2), 1);
    assert_eq!(level(3), 1);
    assert_eq!(level(4), 2);
    assert_eq!(level(7), 2);
    assert_eq!(level(8), 3);
    assert_eq!(level(1023), 9);
    assert_eq!(level(1024), 10);
}

#[test]
fn test_display_dump() {
    let mut queue = MinQueue::new();
    queue.insert(40, 1);
    queue.insert(20, 3);

    assert_eq!(
        queue.to_string(),
        "entry 0, level 0: {priority: 1, payload: 40}\n\
         entry 1, level 0: {priority: 3, payload: 20}\n"
    );

    let empty = MinQueue::<u8>::new();
    assert_eq!(empty.to_string(), "");
}

#[test]
fn test_into_sorted_vec() {
    let queue = MinQueue::from_entries(vec![
        Entry::new("mid", 5),
        Entry::new("last", 9),
        Entry::new("first", 2),
    ]);

    let sorted = queue.into_sorted_vec();
    let priorities: Vec<i64> = sorted.iter().map(|e| e.priority).collect();
    assert_eq!(priorities, [2, 5, 9]);
    assert_eq!(sorted[0].payload, "first");
}

#[test]
fn test_iter_visits_every_entry() {
    let mut queue = MinQueue::new();
    for n in 0..8 {
        queue.insert(n, -n);
    }

    assert_eq!(queue.iter().count(), 8);
    let sum: i64 = queue.iter().map(|entry| entry.payload).sum();
    assert_eq!(sum, (0..8).sum::<i64>());

    let by_ref: i64 = (&queue).into_iter().map(|entry| entry.payload).sum();
    assert_eq!(by_ref, sum);
}

#[test]
fn test_drain_and_clear() {
    let mut queue = MinQueue::new();
    for n in 0..6 {
        queue.insert(n, n);
    }

    let drained: Vec<_> = queue.drain().collect();
    assert_eq!(drained.len(), 6);
    assert!(queue.is_empty());

    for n in 0..6 {
        queue.insert(n, n);
    }
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.peek(), Err(EmptyQueueError));
}

#[test]
fn test_extend_preserves_invariant() {
    let mut queue = MinQueue::new();
    queue.insert(0, 0);
    queue.extend((1..20).map(|n| Entry::new(n, -n)));

    assert_eq!(queue.len(), 20);
    assert_heap_order(&queue);
    assert_eq!(queue.peek(), Ok(&19));
}

#[test]
fn test_clone_is_independent() {
    let mut queue = MinQueue::new();
    for n in 0..5 {
        queue.insert(n, n);
    }

    let mut copy = queue.clone();
    copy.extract_min().unwrap();
    assert_eq!(queue.len(), 5);
    assert_eq!(copy.len(), 4);
    assert_eq!(queue.peek(), Ok(&0));
    assert_eq!(copy.peek(), Ok(&1));
}

#[test]
fn test_into_vec_round_trip() {
    let queue = MinQueue::from_entries(vec![Entry::new(3, 3), Entry::new(1, 1), Entry::new(2, 2)]);
    let entries = queue.into_vec();
    assert_eq!(entries.len(), 3);

    let mut rebuilt = MinQueue::from(entries);
    assert_eq!(rebuilt.extract_min(), Ok(1));
    assert_eq!(rebuilt.extract_min(), Ok(2));
    assert_eq!(rebuilt.extract_min(), Ok(3));
}

#[test]
fn test_entry_ordering_ignores_payload() {
    assert_eq!(Entry::new("x", 3), Entry::new("y", 3));
    assert!(Entry::new("z", 1) < Entry::new("a", 2));
    assert!(Entry::new((), -5) <= Entry::new((), -5));
}
