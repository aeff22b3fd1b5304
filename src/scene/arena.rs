use slotmap::SlotMap;

use crate::errors::{Error, Result};
use crate::render::{DrawItem, RenderSink};
use crate::scene::ShapeKey;
use crate::scene::shape::{Shape, ShapeKind};
use crate::scene::transform::TransformStack;

/// Owns every shape of a scene; compounds refer to children by key.
///
/// A key may appear under several compounds. Insertion checks that
/// children already exist, so the tree built through this API is acyclic.
pub struct ShapeArena<S> {
    shapes: SlotMap<ShapeKey, Shape<S>>,
}

impl<S> Default for ShapeArena<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ShapeArena<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            shapes: SlotMap::with_key(),
        }
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Validates and stores a shape.
    ///
    /// Leaves are checked for generable parameters, compounds for live
    /// children.
    pub fn insert(&mut self, shape: Shape<S>) -> Result<ShapeKey> {
        match &shape.kind {
            ShapeKind::Leaf(leaf) => leaf.primitive().validate()?,
            ShapeKind::Compound(children) => {
                if let Some(missing) = children.iter().find(|k| !self.shapes.contains_key(**k)) {
                    return Err(Error::ShapeNotFound(*missing));
                }
            }
        }
        Ok(self.shapes.insert(shape))
    }

    /// Inserts a plain compound over `children`.
    pub fn group(&mut self, children: impl Into<Vec<ShapeKey>>) -> Result<ShapeKey> {
        self.insert(Shape::compound(children))
    }

    /// Copies the subtree rooted at `key` into fresh slots.
    ///
    /// Materials, transforms and child structure are duplicated; leaf
    /// geometry caches stay shared since geometry never changes.
    pub fn deep_copy(&mut self, key: ShapeKey) -> Result<ShapeKey> {
        let mut copy = self.get(key).ok_or(Error::ShapeNotFound(key))?.clone();
        if let ShapeKind::Compound(children) = &mut copy.kind {
            for child in children.iter_mut() {
                *child = self.deep_copy(*child)?;
            }
        }
        Ok(self.shapes.insert(copy))
    }

    /// Makes `times` independent deep copies of `key`, lets `arrange`
    /// adjust each copy, and wraps them in a new compound.
    ///
    /// The original subtree is left untouched, so it can be cloned again
    /// or rendered on its own.
    ///
    /// ```rust,ignore
    /// // ten bolts around a porthole
    /// let bolts = arena.clone_n(bolt, 10, |i, bolt| {
    ///     bolt.push_transform(Transformation::rotate(Vec3::new(0.0, i as f32 * 36.0, 0.0)))
    ///         .push_transform(Transformation::translate(Vec3::new(0.0, 0.0, 0.9)));
    /// })?;
    /// ```
    pub fn clone_n(
        &mut self,
        key: ShapeKey,
        times: usize,
        mut arrange: impl FnMut(usize, &mut Shape<S>),
    ) -> Result<ShapeKey> {
        self.clone_with(key, times, |arena, index, copy| {
            if let Some(shape) = arena.shapes.get_mut(copy) {
                arrange(index, shape);
            }
            Ok(copy)
        })
    }

    /// Like [`clone_n`](Self::clone_n), but the callback gets the arena and
    /// returns the key to place in the compound, so a copy can itself be
    /// cloned or wrapped.
    pub fn clone_with(
        &mut self,
        key: ShapeKey,
        times: usize,
        mut arrange: impl FnMut(&mut Self, usize, ShapeKey) -> Result<ShapeKey>,
    ) -> Result<ShapeKey> {
        if !self.shapes.contains_key(key) {
            return Err(Error::ShapeNotFound(key));
        }

        let mut copies = Vec::with_capacity(times);
        for index in 0..times {
            let copy = self.deep_copy(key)?;
            copies.push(arrange(self, index, copy)?);
        }
        self.group(copies)
    }

    /// Applies `edit` to a stored shape and hands the key back for chaining.
    pub fn update(&mut self, key: ShapeKey, edit: impl FnOnce(&mut Shape<S>)) -> Result<ShapeKey> {
        let shape = self.shapes.get_mut(key).ok_or(Error::ShapeNotFound(key))?;
        edit(shape);
        Ok(key)
    }

    // ========================================================================
    // Access
    // ========================================================================

    #[must_use]
    pub fn get(&self, key: ShapeKey) -> Option<&Shape<S>> {
        self.shapes.get(key)
    }

    /// Mutable access. Replacing a shape's kind bypasses the child checks
    /// of [`insert`](Self::insert); do not introduce cycles.
    pub fn get_mut(&mut self, key: ShapeKey) -> Option<&mut Shape<S>> {
        self.shapes.get_mut(key)
    }

    #[must_use]
    pub fn contains(&self, key: ShapeKey) -> bool {
        self.shapes.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Number of leaves reachable from `root`, counting shared subtrees once per reference.
    pub fn leaf_count(&self, root: ShapeKey) -> Result<usize> {
        let shape = self.get(root).ok_or(Error::ShapeNotFound(root))?;
        match &shape.kind {
            ShapeKind::Leaf(_) => Ok(1),
            ShapeKind::Compound(children) => children
                .iter()
                .try_fold(0, |n, child| self.leaf_count(*child).map(|c| n + c)),
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Renders the tree under `root` from the identity matrix.
    ///
    /// Returns the number of leaves drawn.
    pub fn render(&self, root: ShapeKey, state: &S, sink: &mut dyn RenderSink) -> Result<usize> {
        let mut stack = TransformStack::new();
        self.render_with(root, state, &mut stack, sink)
    }

    /// Renders the tree under `root` on top of an existing matrix stack.
    ///
    /// The stack is left as it was found.
    pub fn render_with(
        &self,
        root: ShapeKey,
        state: &S,
        stack: &mut TransformStack,
        sink: &mut dyn RenderSink,
    ) -> Result<usize> {
        let shape = self.get(root).ok_or(Error::ShapeNotFound(root))?;

        stack.push();
        for transform in &shape.transforms {
            stack.apply(transform.matrix(state));
        }

        let drawn: Result<usize> = match &shape.kind {
            ShapeKind::Leaf(leaf) => {
                let (mesh, smooth) = leaf.active_mesh(state);
                sink.draw_shape(&DrawItem {
                    shape: root,
                    world: stack.current(),
                    material: shape.material.resolve(state),
                    texture: leaf.texture(),
                    mesh,
                    smooth,
                });
                Ok(1)
            }
            ShapeKind::Compound(children) => children
                .iter()
                .try_fold(0, |n, child| {
                    self.render_with(*child, state, stack, sink).map(|c| n + c)
                }),
        };

        stack.pop();
        drawn
    }
}

impl<S> std::fmt::Debug for ShapeArena<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeArena").field("shapes", &self.shapes.len()).finish()
    }
}
