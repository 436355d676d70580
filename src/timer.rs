//! Owner-local one-shot timers.
//!
//! Every deferred action in the game — ship revival, enemy move/shot ticks,
//! level-transition steps — lives in a `TimerSet` owned by the entity or
//! scene that the action mutates.  The owner polls the set once per frame
//! and handles the events that came due; dropping or clearing the set
//! cancels everything still pending, so a restarted grid or a destroyed
//! scene can never be mutated by a stale timer.

use std::time::{Duration, Instant};

/// Handle to a scheduled entry, usable for targeted cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerId(u64);

struct Entry<E> {
    id: TimerId,
    deadline: Instant,
    event: E,
}

/// A set of pending one-shot timers emitting events of type `E`.
pub struct TimerSet<E> {
    next_id: u64,
    entries: Vec<Entry<E>>,
}

impl<E> TimerSet<E> {
    pub fn new() -> Self {
        TimerSet { next_id: 0, entries: Vec::new() }
    }

    /// Schedule `event` to fire `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, deadline: now + delay, event });
        id
    }

    /// Cancel one pending entry.  Returns false if it already fired.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Cancel every pending entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Remove and return every entry due at `now`, ordered by deadline
    /// (ties keep scheduling order), so multi-step sequences fire in the
    /// order they were laid out.
    pub fn poll(&mut self, now: Instant) -> Vec<E> {
        if self.entries.iter().all(|e| e.deadline > now) {
            return Vec::new();
        }

        let mut due: Vec<Entry<E>> = Vec::new();
        let mut remaining: Vec<Entry<E>> = Vec::new();
        for entry in self.entries.drain(..) {
            if entry.deadline <= now {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.entries = remaining;

        due.sort_by(|a, b| a.deadline.cmp(&b.deadline).then(a.id.0.cmp(&b.id.0)));
        due.into_iter().map(|e| e.event).collect()
    }
}

impl<E> Default for TimerSet<E> {
    fn default() -> Self {
        Self::new()
    }
}
