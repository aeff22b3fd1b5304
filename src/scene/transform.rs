use glam::{Mat4, Vec3};
use smallvec::SmallVec;

use crate::core::DynamicValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Translate,
    /// Degrees about X, then Y, then Z.
    Rotate,
    Scale,
}

/// One entry of a shape's transform list.
///
/// Parameters are re-evaluated every time the matrix is built, so an
/// animated parameter moves the shape without touching the shape itself.
pub struct Transformation<S> {
    pub kind: TransformKind,
    pub parameters: DynamicValue<Vec3, S>,
}

impl<S> Transformation<S> {
    pub fn new(kind: TransformKind, parameters: impl Into<DynamicValue<Vec3, S>>) -> Self {
        Self {
            kind,
            parameters: parameters.into(),
        }
    }

    pub fn translate(offset: impl Into<DynamicValue<Vec3, S>>) -> Self {
        Self::new(TransformKind::Translate, offset)
    }

    pub fn rotate(degrees: impl Into<DynamicValue<Vec3, S>>) -> Self {
        Self::new(TransformKind::Rotate, degrees)
    }

    pub fn scale(factors: impl Into<DynamicValue<Vec3, S>>) -> Self {
        Self::new(TransformKind::Scale, factors)
    }

    /// Local matrix for the current state.
    #[must_use]
    pub fn matrix(&self, state: &S) -> Mat4 {
        let p = self.parameters.evaluate(state);
        match self.kind {
            TransformKind::Translate => Mat4::from_translation(p),
            TransformKind::Rotate => {
                Mat4::from_rotation_x(p.x.to_radians())
                    * Mat4::from_rotation_y(p.y.to_radians())
                    * Mat4::from_rotation_z(p.z.to_radians())
            }
            TransformKind::Scale => Mat4::from_scale(p),
        }
    }
}

impl<S> Clone for Transformation<S> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            parameters: self.parameters.clone(),
        }
    }
}

impl<S> std::fmt::Debug for Transformation<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transformation")
            .field("kind", &self.kind)
            .field("parameters", &self.parameters)
            .finish()
    }
}

/// Product of a transform list, applied in declaration order.
#[must_use]
pub fn compose<S>(transforms: &[Transformation<S>], state: &S) -> Mat4 {
    transforms
        .iter()
        .fold(Mat4::IDENTITY, |acc, t| acc * t.matrix(state))
}

// ============================================================================
// Matrix stack
// ============================================================================

/// Explicit push/apply/pop matrix stack.
///
/// [`apply`](Self::apply) post-multiplies the current matrix, so
/// transforms applied later act first on the geometry (the usual
/// fixed-function convention). Each shape pushes before applying its own
/// transforms and pops after rendering, leaving siblings unaffected.
#[derive(Debug, Clone)]
pub struct TransformStack {
    current: Mat4,
    saved: SmallVec<[Mat4; 16]>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStack {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base(Mat4::IDENTITY)
    }

    #[must_use]
    pub fn with_base(base: Mat4) -> Self {
        Self {
            current: base,
            saved: SmallVec::new(),
        }
    }

    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restores the matrix saved by the matching [`push`](Self::push).
    ///
    /// Returns `false` on an unbalanced pop, leaving the matrix unchanged.
    pub fn pop(&mut self) -> bool {
        match self.saved.pop() {
            Some(matrix) => {
                self.current = matrix;
                true
            }
            None => {
                log::warn!("TransformStack::pop on empty stack");
                false
            }
        }
    }

    pub fn apply(&mut self, matrix: Mat4) {
        self.current *= matrix;
    }

    #[must_use]
    pub fn current(&self) -> Mat4 {
        self.current
    }

    /// Number of saved matrices.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}
