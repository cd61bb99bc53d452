use std::{
    cmp::Reverse,
    collections::BinaryHeap,
    time::{Duration, Instant},
};

use indexmap::IndexMap;
use log::debug;

use crate::{
    Point2D,
    clock::{Clock, MonotonicClock},
};

pub type ContactId = u64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub id: ContactId,
    pub x: f32,
    pub y: f32,
}

impl Contact {
    pub fn new(id: ContactId, position: Point2D) -> Self {
        Contact {
            id,
            x: position.0,
            y: position.1,
        }
    }

    pub fn position(&self) -> Point2D {
        (self.x, self.y)
    }
}

/// Field order matters: the derived ordering sorts by due time first, then by
/// the order in which removals were scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct PendingRemoval {
    due: Instant,
    sequence: u64,
    id: ContactId,
}

/// Active contacts keyed by id, plus the queue of deferred removals.
///
/// Removals are keyed by id only. If a contact is released and then pressed again
/// before its removal is due, the stale removal still deletes the new entry.
///
/// Removals that have fallen due run before any later upsert, and reads never report
/// a contact whose removal is due, even if nobody has polled the queue yet.
pub struct ContactTracker<C: Clock = MonotonicClock> {
    clock: C,
    contacts: IndexMap<ContactId, Point2D>,
    pending_removals: BinaryHeap<Reverse<PendingRemoval>>,
    next_sequence: u64,
}

impl ContactTracker<MonotonicClock> {
    pub fn new() -> Self {
        ContactTracker::with_clock(MonotonicClock)
    }
}

impl Default for ContactTracker<MonotonicClock> {
    fn default() -> Self {
        ContactTracker::new()
    }
}

impl<C: Clock> ContactTracker<C> {
    pub fn with_clock(clock: C) -> Self {
        ContactTracker {
            clock,
            contacts: IndexMap::new(),
            pending_removals: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub fn upsert(&mut self, id: ContactId, position: Point2D) {
        self.run_due_removals();
        self.contacts.insert(id, position);
    }

    /// Queue removal of `id` once `delay` has elapsed. There is no way to cancel this.
    pub fn schedule_removal(&mut self, id: ContactId, delay: Duration) {
        let due = self.clock.now() + delay;
        self.pending_removals.push(Reverse(PendingRemoval {
            due,
            sequence: self.next_sequence,
            id,
        }));
        self.next_sequence += 1;
        debug!(
            "Scheduled removal of contact #{} in {}ms",
            id,
            delay.as_millis()
        );
    }

    /// Run every removal whose due time has passed. Returns how many ran,
    /// including those whose contact was already gone.
    pub fn run_due_removals(&mut self) -> usize {
        let now = self.clock.now();
        let mut ran = 0;
        while let Some(Reverse(next)) = self.pending_removals.peek() {
            if next.due > now {
                break;
            }
            let id = next.id;
            self.pending_removals.pop();
            ran += 1;
            // swap_remove is a bit faster and we don't care about the order
            if self.contacts.swap_remove(&id).is_some() {
                debug!("Removed contact #{}", id);
            } else {
                debug!("Removal for contact #{} found nothing to remove", id);
            }
        }
        ran
    }

    pub fn time_until_next_removal(&self) -> Option<Duration> {
        self.pending_removals
            .peek()
            .map(|Reverse(next)| next.due.saturating_duration_since(self.clock.now()))
    }

    fn removal_due(&self, id: ContactId, now: Instant) -> bool {
        self.pending_removals
            .iter()
            .any(|Reverse(pending)| pending.id == id && pending.due <= now)
    }

    fn live_contacts(&self) -> impl Iterator<Item = (&ContactId, &Point2D)> {
        let now = self.clock.now();
        self.contacts
            .iter()
            .filter(move |(id, _)| !self.removal_due(**id, now))
    }

    pub fn snapshot(&self) -> Vec<Contact> {
        self.live_contacts()
            .map(|(id, position)| Contact::new(*id, *position))
            .collect()
    }

    pub fn position(&self, id: ContactId) -> Option<Point2D> {
        if self.removal_due(id, self.clock.now()) {
            return None;
        }
        self.contacts.get(&id).copied()
    }

    pub fn contains(&self, id: ContactId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.live_contacts().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn pending_removals(&self) -> usize {
        self.pending_removals.len()
    }
}
