//! Scheduler - cooperative timer queue on a virtual millisecond clock
//!
//! Timers are plain values; the owner decides what firing one means. Each
//! timer carries a [`Stamp`] captured when it was scheduled so the owner can
//! drop timers that belong to a superseded round.
//!
//! Ordering: timers fire by due time, ties broken by scheduling order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::types::Mode;

/// Game generation and mode captured when a timer was scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stamp {
    pub generation: u32,
    pub mode: Mode,
}

/// A timer that became due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Due<T> {
    pub at_ms: u64,
    pub stamp: Stamp,
    pub timer: T,
}

#[derive(Debug)]
struct Entry<T> {
    at_ms: u64,
    seq: u64,
    stamp: Stamp,
    timer: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.at_ms == other.at_ms && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // BinaryHeap is a max-heap; reverse so the earliest entry is on top.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .at_ms
            .cmp(&self.at_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug)]
pub struct Scheduler<T> {
    queue: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            queue: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Schedule `timer` to fire `delay_ms` after `now_ms`.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u32, stamp: Stamp, timer: T) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.queue.push(Entry {
            at_ms: now_ms.saturating_add(u64::from(delay_ms)),
            seq,
            stamp,
            timer,
        });
    }

    /// Remove and return the earliest timer due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<Due<T>> {
        if self.queue.peek()?.at_ms > now_ms {
            return None;
        }
        self.queue.pop().map(|e| Due {
            at_ms: e.at_ms,
            stamp: e.stamp,
            timer: e.timer,
        })
    }

    /// Due time of the earliest pending timer.
    pub fn next_due(&self) -> Option<u64> {
        self.queue.peek().map(|e| e.at_ms)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
