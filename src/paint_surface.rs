use std::time::Duration;

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    clock::{Clock, MonotonicClock},
    contacts::{Contact, ContactTracker},
    input::{ContactAction, InputEvent, TouchListener},
    render::{Surface, render},
    style_config::StyleConfig,
};

/// Upper bound (exclusive) for the random delay between release and removal.
pub const MAX_REMOVAL_DELAY_MS: u64 = 500;

/// The touch-paint view: feed it input events, let it paint when asked.
///
/// Everything runs on the host's UI thread. Deferred removals sit in the tracker's
/// queue and run before the next input event or paint once they fall due.
pub struct PaintSurface<C: Clock = MonotonicClock, R: Rng = StdRng> {
    tracker: ContactTracker<C>,
    style: StyleConfig,
    rng: R,
    listener: Option<Box<dyn TouchListener>>,
    redraw_requested: bool,
}

impl PaintSurface<MonotonicClock, StdRng> {
    /// Real clock; seeded from `seed` if given, otherwise from the OS.
    pub fn new(style: StyleConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        PaintSurface::with_parts(style, MonotonicClock, rng)
    }
}

impl<C: Clock, R: Rng> PaintSurface<C, R> {
    pub fn with_parts(style: StyleConfig, clock: C, rng: R) -> Self {
        PaintSurface {
            tracker: ContactTracker::with_clock(clock),
            style,
            rng,
            listener: None,
            redraw_requested: false,
        }
    }

    /// Replaces any listener set before.
    pub fn set_touch_listener<L: TouchListener + 'static>(&mut self, listener: L) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_touch_listener(&mut self) {
        self.listener = None;
    }

    pub fn on_input_event(&mut self, event: &InputEvent) {
        debug!("Contact #{} {:?}", event.id, event.action);
        self.tracker.run_due_removals();
        match event.action {
            ContactAction::Press | ContactAction::Move => {
                self.tracker.upsert(event.id, event.position());
                if let Some(listener) = self.listener.as_mut() {
                    listener.on_touch();
                }
            }
            ContactAction::Release | ContactAction::Cancel => {
                let delay_ms = self.rng.random_range(0..MAX_REMOVAL_DELAY_MS);
                self.tracker
                    .schedule_removal(event.id, Duration::from_millis(delay_ms));
            }
            ContactAction::Unrecognised(code) => {
                debug!("Ignoring unrecognised action code {}", code);
            }
        }
        self.redraw_requested = true;
    }

    /// Paint callback: run whatever removals are due, then draw the rest.
    pub fn on_paint<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.tracker.run_due_removals();
        let contacts = self.tracker.snapshot();
        render(&contacts, &self.style, &mut self.rng, surface);
    }

    /// Runs due removals without drawing. Removals never request a redraw by themselves.
    pub fn run_pending_tasks(&mut self) -> usize {
        self.tracker.run_due_removals()
    }

    /// True once after any input event; the host should then repaint.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// How long the host may sleep before a scheduled removal falls due.
    pub fn next_wakeup(&self) -> Option<Duration> {
        self.tracker.time_until_next_removal()
    }

    pub fn contacts(&self) -> Vec<Contact> {
        self.tracker.snapshot()
    }

    pub fn tracker(&self) -> &ContactTracker<C> {
        &self.tracker
    }
}
