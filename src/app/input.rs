use std::f32::consts::FRAC_1_SQRT_2;

/// Movement keys currently held.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `(front, right)` axes in `[-1, 1]`.
    ///
    /// Opposite keys cancel. When both axes are active each is scaled by
    /// `1/√2` so diagonal movement is not faster.
    #[must_use]
    pub fn axes(&self) -> (f32, f32) {
        let front = f32::from(i8::from(self.forward) - i8::from(self.backward));
        let right = f32::from(i8::from(self.right) - i8::from(self.left));

        if front != 0.0 && right != 0.0 {
            (front * FRAC_1_SQRT_2, right * FRAC_1_SQRT_2)
        } else {
            (front, right)
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.axes() == (0.0, 0.0)
    }

    /// Releases every key.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
