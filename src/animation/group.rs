use crate::animation::action::Animation;

/// A set of animations sharing one logical clock.
///
/// Every member receives the same `delta` on each advance, including
/// members that already finished (for them the tick is a no-op). The group
/// is finished once every member is.
pub struct AnimationGroup<S> {
    name: String,
    animations: Vec<Animation<S>>,
    finished: bool,
}

impl<S> AnimationGroup<S> {
    pub fn new(name: impl Into<String>, animations: Vec<Animation<S>>) -> Self {
        Self {
            name: name.into(),
            animations,
            finished: false,
        }
    }

    #[must_use]
    pub fn with(mut self, animation: Animation<S>) -> Self {
        self.animations.push(animation);
        self
    }

    pub fn push(&mut self, animation: Animation<S>) {
        self.animations.push(animation);
    }

    /// Ticks every member and recomputes the finished flag.
    pub fn advance(&mut self, delta: u64, target: &mut S) {
        // fold instead of all(): every member must receive the tick
        self.finished = self.animations.iter_mut().fold(true, |done, animation| {
            animation.advance(delta, target);
            done && animation.is_finished()
        });
    }

    pub fn reset(&mut self) {
        for animation in &mut self.animations {
            animation.reset();
        }
        self.finished = false;
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Local time at which the last member window closes.
    #[must_use]
    pub fn duration(&self) -> u64 {
        self.animations.iter().map(Animation::end).max().unwrap_or(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    pub fn animations(&self) -> impl Iterator<Item = &Animation<S>> {
        self.animations.iter()
    }
}

impl<S> std::fmt::Debug for AnimationGroup<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationGroup")
            .field("name", &self.name)
            .field("animations", &self.animations.len())
            .field("finished", &self.finished)
            .finish()
    }
}
