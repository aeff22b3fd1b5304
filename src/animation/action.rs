use std::fmt;

use crate::animation::easing::Easing;

/// Lifecycle of a single [`Animation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    /// Constructed or reset, no tick received yet.
    #[default]
    NotStarted,
    /// Ticking; writes happen while the clock is inside the window.
    Running,
    /// The final value has been written. Terminal until [`Animation::reset`].
    Finished,
}

type Sink<S> = Box<dyn FnMut(&mut S, f32)>;

/// A single eased interpolation over a time window.
///
/// The animation owns no target. Instead it writes through a sink closure
/// into an explicit state `S` handed to [`advance`](Self::advance), so the
/// caller decides who owns the animated cells (camera fields, door angle,
/// transparency...).
///
/// Times are whole milliseconds. The window is `[start, start + duration]`
/// on the clock local to the owning group. Before the window nothing is
/// written; inside it the sink receives
/// `first + easing((elapsed - start) / duration) * (last - first)`; the
/// first tick past the window writes `last` once and finishes.
///
/// # Example
///
/// ```rust
/// use bulkhead::animation::{Animation, Easing};
///
/// let mut value = 0.0_f32;
/// let mut anim = Animation::from_start(1000, 0.0, 10.0, Easing::Linear, |v: &mut f32, x| *v = x);
///
/// anim.advance(0, &mut value);
/// anim.advance(500, &mut value);
/// assert_eq!(value, 5.0);
///
/// anim.advance(600, &mut value);
/// assert_eq!(value, 10.0);
/// assert!(anim.is_finished());
/// ```
pub struct Animation<S> {
    start: u64,
    duration: u64,
    first: f32,
    last: f32,
    easing: Easing,
    sink: Sink<S>,

    elapsed: u64,
    state: AnimationState,
}

impl<S> Animation<S> {
    /// Creates an animation whose window opens `start` ms after the group's first tick.
    pub fn new<F>(start: u64, duration: u64, first: f32, last: f32, easing: Easing, sink: F) -> Self
    where
        F: FnMut(&mut S, f32) + 'static,
    {
        if duration == 0 {
            log::warn!("Zero-length animation at {start} ms: progress saturates to the end value");
        }
        Self {
            start,
            duration,
            first,
            last,
            easing,
            sink: Box::new(sink),
            elapsed: 0,
            state: AnimationState::NotStarted,
        }
    }

    /// Creates an animation whose window opens on the group's first tick.
    pub fn from_start<F>(duration: u64, first: f32, last: f32, easing: Easing, sink: F) -> Self
    where
        F: FnMut(&mut S, f32) + 'static,
    {
        Self::new(0, duration, first, last, easing, sink)
    }

    /// Pins the target to `value` for the whole window.
    pub fn hold<F>(start: u64, duration: u64, value: f32, sink: F) -> Self
    where
        F: FnMut(&mut S, f32) + 'static,
    {
        Self::new(start, duration, value, value, Easing::Hold, sink)
    }

    /// Pins the target to `value` from the group's first tick.
    pub fn hold_from_start<F>(duration: u64, value: f32, sink: F) -> Self
    where
        F: FnMut(&mut S, f32) + 'static,
    {
        Self::hold(0, duration, value, sink)
    }

    // ========================================================================
    // Playback
    // ========================================================================

    /// Advances the local clock by `delta` ms and writes into `target`.
    ///
    /// The first call after construction or [`reset`](Self::reset) treats
    /// `delta` as zero, absorbing whatever gap preceded activation.
    pub fn advance(&mut self, delta: u64, target: &mut S) {
        let delta = if self.state == AnimationState::NotStarted {
            self.state = AnimationState::Running;
            0
        } else {
            delta
        };

        self.elapsed = self.elapsed.saturating_add(delta);

        if self.elapsed <= self.end() {
            if self.elapsed >= self.start {
                let value = self.value_at(self.elapsed - self.start);
                (self.sink)(target, value);
            }
        } else if self.state != AnimationState::Finished {
            (self.sink)(target, self.last);
            self.state = AnimationState::Finished;
        }
    }

    /// Returns to [`AnimationState::NotStarted`] without writing anything.
    pub fn reset(&mut self) {
        self.elapsed = 0;
        self.state = AnimationState::NotStarted;
    }

    /// Interpolated value `local` ms into the window.
    ///
    /// A zero-length window has progress 1.
    #[must_use]
    pub fn value_at(&self, local: u64) -> f32 {
        let progress = if self.duration == 0 {
            1.0
        } else {
            (local as f64 / self.duration as f64) as f32
        };
        self.first + self.easing.apply(progress) * (self.last - self.first)
    }

    // ========================================================================
    // Getters
    // ========================================================================

    #[must_use]
    pub fn start(&self) -> u64 {
        self.start
    }

    #[must_use]
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Local time at which the window closes.
    #[must_use]
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.duration)
    }

    #[must_use]
    pub fn first(&self) -> f32 {
        self.first
    }

    #[must_use]
    pub fn last(&self) -> f32 {
        self.last
    }

    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    #[must_use]
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == AnimationState::Finished
    }
}

impl<S> fmt::Debug for Animation<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("start", &self.start)
            .field("duration", &self.duration)
            .field("first", &self.first)
            .field("last", &self.last)
            .field("easing", &self.easing.name())
            .field("elapsed", &self.elapsed)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
