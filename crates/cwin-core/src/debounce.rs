#![forbid(unsafe_code)]

//! Debounced, cancellable scheduling for a single-threaded event loop.
//!
//! Cursor anchor updates arrive in bursts while the user types. Each one
//! wants the popup repositioned, but only the latest matters. [`Debouncer`]
//! implements "latest wins" with a generation counter:
//!
//! - [`request`](Debouncer::request) bumps the generation and (re)arms the
//!   deadline. Any ticket from an older generation is stale.
//! - [`poll`](Debouncer::poll) hands out the pending ticket once its deadline
//!   has passed, then disarms.
//! - [`cancel`](Debouncer::cancel) drops whatever is pending and also bumps
//!   the generation, so a ticket already handed to a host timer can no longer
//!   act on stale geometry.
//!
//! A `request` after a `cancel` always arms again; hiding never swallows the
//! next show.
//!
//! # Usage
//!
//! ```
//! use cwin_core::debounce::Debouncer;
//! use web_time::{Duration, Instant};
//!
//! let mut d = Debouncer::new(Duration::from_millis(10));
//! let t0 = Instant::now();
//! let first = d.request(t0);
//! let second = d.request(t0);
//! assert!(!d.is_current(first));
//! assert!(d.is_current(second));
//! assert!(d.poll(t0).is_none());
//! assert_eq!(d.poll(t0 + Duration::from_millis(10)), Some(second));
//! ```

use web_time::{Duration, Instant};

/// Proof that a scheduled action was armed at a particular generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    generation: u64,
}

impl Ticket {
    #[inline]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    ticket: Ticket,
    due: Instant,
}

/// Coalesces rapid requests into one deferred action.
///
/// Not thread-safe; lives on the UI thread with the surface it schedules for.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
    pending: Option<Pending>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    /// A debouncer that fires on the next poll after a request.
    #[must_use]
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm (or re-arm) the pending action. Supersedes any earlier ticket.
    pub fn request(&mut self, now: Instant) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        let ticket = Ticket {
            generation: self.generation,
        };
        self.pending = Some(Pending {
            ticket,
            due: now + self.delay,
        });
        #[cfg(feature = "tracing")]
        tracing::trace!(generation = self.generation, "debounce armed");
        ticket
    }

    /// Drop any pending action and invalidate outstanding tickets.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            #[cfg(feature = "tracing")]
            tracing::trace!(generation = self.generation, "debounce cancelled");
        }
        self.generation = self.generation.wrapping_add(1);
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending action, for hosts that arm a real timer.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.due)
    }

    /// Take the pending ticket if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<Ticket> {
        match self.pending {
            Some(p) if now >= p.due => {
                self.pending = None;
                Some(p.ticket)
            }
            _ => None,
        }
    }

    /// Whether `ticket` belongs to the latest generation.
    #[inline]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.generation == self.generation
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::immediate()
    }
}
