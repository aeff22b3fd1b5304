use crate::animation::group::AnimationGroup;
use crate::errors::{Error, Result};

/// Result of one [`AnimationPlayer::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Playback is paused; nothing was ticked.
    Idle,
    /// The active group was ticked and is still running.
    Playing,
    /// The active group finished on this tick. It was reset and playback stopped.
    Finished,
}

/// Selects one [`AnimationGroup`] at a time and plays it.
///
/// Selecting a group (directly or through [`next`](Self::next) /
/// [`previous`](Self::previous)) resets it and pauses playback, so a
/// freshly selected group always starts from its first frame.
pub struct AnimationPlayer<S> {
    groups: Vec<AnimationGroup<S>>,
    current: usize,
    playing: bool,
}

impl<S> AnimationPlayer<S> {
    pub fn new(groups: Vec<AnimationGroup<S>>) -> Result<Self> {
        if groups.is_empty() {
            return Err(Error::NoAnimationGroups);
        }
        Ok(Self {
            groups,
            current: 0,
            playing: false,
        })
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Selects the group at `index` modulo the group count.
    ///
    /// Negative indices wrap from the end. Returns the selected index.
    pub fn select(&mut self, index: isize) -> usize {
        let count = self.groups.len() as isize;
        self.current = index.rem_euclid(count) as usize;
        self.groups[self.current].reset();
        self.playing = false;
        log::debug!(
            "Selected animation {} ({})",
            self.current,
            self.groups[self.current].name()
        );
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.select(self.current as isize + 1)
    }

    pub fn previous(&mut self) -> usize {
        self.select(self.current as isize - 1)
    }

    // ========================================================================
    // Playback
    // ========================================================================

    /// Flips the playing flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        log::debug!(
            "Animation {} {}",
            self.current,
            if self.playing { "playing" } else { "paused" }
        );
        self.playing
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Ticks the active group by `delta` ms when playing.
    pub fn advance(&mut self, delta: u64, target: &mut S) -> PlaybackStatus {
        if !self.playing {
            return PlaybackStatus::Idle;
        }

        let group = &mut self.groups[self.current];
        group.advance(delta, target);

        if group.is_finished() {
            group.reset();
            self.playing = false;
            log::debug!("Animation {} ({}) finished", self.current, group.name());
            PlaybackStatus::Finished
        } else {
            PlaybackStatus::Playing
        }
    }

    // ========================================================================
    // Getters
    // ========================================================================

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current(&self) -> &AnimationGroup<S> {
        &self.groups[self.current]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Always false: construction rejects empty playlists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> impl Iterator<Item = &AnimationGroup<S>> {
        self.groups.iter()
    }
}

impl<S> std::fmt::Debug for AnimationPlayer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationPlayer")
            .field("groups", &self.groups)
            .field("current", &self.current)
            .field("playing", &self.playing)
            .finish()
    }
}
