use std::cell::OnceCell;
use std::rc::Rc;

use glam::{Vec3, Vec4};
use smallvec::SmallVec;

use crate::core::DynamicValue;
use crate::resources::geometry::QuadMesh;
use crate::resources::material::{Material, MaterialState};
use crate::resources::primitives::Primitive;
use crate::resources::subdivision;
use crate::resources::texture::TextureId;
use crate::scene::ShapeKey;
use crate::scene::transform::Transformation;

/// Geometry of a leaf, generated once on first use.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafGeometry {
    pub base: QuadMesh,
    /// Subdivided mesh; `None` when the mesh level adds no passes.
    pub smooth: Option<QuadMesh>,
}

/// A procedural primitive with its lazily generated geometry.
///
/// Clones share the geometry cache: geometry depends only on the
/// primitive and the mesh level, both of which reset the cache when
/// changed.
pub struct Leaf<S> {
    primitive: Primitive,
    texture: Option<TextureId>,
    mesh_level: u32,
    mesh_enabled: DynamicValue<bool, S>,
    cache: Rc<OnceCell<LeafGeometry>>,
}

impl<S> Leaf<S> {
    pub fn new(primitive: impl Into<Primitive>) -> Self {
        Self {
            primitive: primitive.into(),
            texture: None,
            mesh_level: 1,
            mesh_enabled: DynamicValue::Literal(true),
            cache: Rc::default(),
        }
    }

    #[must_use]
    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    #[must_use]
    pub fn texture(&self) -> Option<TextureId> {
        self.texture
    }

    pub fn set_texture(&mut self, texture: Option<TextureId>) {
        self.texture = texture;
    }

    #[must_use]
    pub fn mesh_level(&self) -> u32 {
        self.mesh_level
    }

    pub fn set_mesh_level(&mut self, level: u32) {
        if level != self.mesh_level {
            self.mesh_level = level;
            self.cache = Rc::default();
        }
    }

    pub fn set_mesh_enabled(&mut self, enabled: impl Into<DynamicValue<bool, S>>) {
        self.mesh_enabled = enabled.into();
    }

    #[must_use]
    pub fn is_generated(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Generates the geometry on first call, then returns the cached copy.
    pub fn geometry(&self) -> &LeafGeometry {
        self.cache.get_or_init(|| {
            let base = self.primitive.generate();
            let passes = subdivision::passes_for_level(self.mesh_level);
            let smooth = (passes > 0).then(|| subdivision::subdivide(&base, passes));
            log::debug!(
                "Generated {} geometry: {} quads (mesh level {}, {} quads)",
                self.primitive.kind_name(),
                base.quad_count(),
                self.mesh_level,
                smooth.as_ref().map_or(base.quad_count(), QuadMesh::quad_count)
            );
            LeafGeometry { base, smooth }
        })
    }

    /// The mesh to draw: the subdivided one when the mesh flag is on.
    pub fn active_mesh(&self, state: &S) -> (&QuadMesh, bool) {
        let geometry = self.geometry();
        match &geometry.smooth {
            Some(smooth) if self.mesh_enabled.evaluate(state) => (smooth, true),
            _ => (&geometry.base, false),
        }
    }
}

impl<S> Clone for Leaf<S> {
    fn clone(&self) -> Self {
        Self {
            primitive: self.primitive,
            texture: self.texture,
            mesh_level: self.mesh_level,
            mesh_enabled: self.mesh_enabled.clone(),
            cache: Rc::clone(&self.cache),
        }
    }
}

pub enum ShapeKind<S> {
    Leaf(Leaf<S>),
    /// Children rendered under this shape's transforms.
    Compound(Vec<ShapeKey>),
}

impl<S> Clone for ShapeKind<S> {
    fn clone(&self) -> Self {
        match self {
            ShapeKind::Leaf(leaf) => ShapeKind::Leaf(leaf.clone()),
            ShapeKind::Compound(children) => ShapeKind::Compound(children.clone()),
        }
    }
}

/// A node of the shape tree: geometry (or children), surface and transforms.
///
/// Shapes are built by value with the chained `with_*` / transform
/// methods, then inserted into a [`ShapeArena`](super::ShapeArena).
///
/// ```rust,ignore
/// let bolt = Shape::leaf(SphereOptions::partial(0.05, 16, 0.0, 8, 0.0, 16))
///     .with_material(SILVER)
///     .translate(Vec3::new(0.0, 0.0, 0.9))
///     .rotate(Vec3::new(90.0, 0.0, 0.0));
/// ```
pub struct Shape<S> {
    pub kind: ShapeKind<S>,
    pub material: Material<S>,
    pub transforms: SmallVec<[Transformation<S>; 4]>,
}

impl<S> Shape<S> {
    pub fn leaf(primitive: impl Into<Primitive>) -> Self {
        Self::new(ShapeKind::Leaf(Leaf::new(primitive)))
    }

    pub fn compound(children: impl Into<Vec<ShapeKey>>) -> Self {
        Self::new(ShapeKind::Compound(children.into()))
    }

    fn new(kind: ShapeKind<S>) -> Self {
        Self {
            kind,
            material: Material::default(),
            transforms: SmallVec::new(),
        }
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Replaces the lighting channels. The color set by
    /// [`with_color`](Self::with_color) is kept.
    #[must_use]
    pub fn with_material(mut self, material: impl Into<Material<S>>) -> Self {
        let color = self.material.color.clone();
        self.material = material.into();
        self.material.color = color;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<DynamicValue<Vec4, S>>) -> Self {
        self.material.color = color.into();
        self
    }

    /// Sets the texture of a leaf. Ignored on compounds.
    #[must_use]
    pub fn with_texture(mut self, texture: TextureId) -> Self {
        match &mut self.kind {
            ShapeKind::Leaf(leaf) => leaf.set_texture(Some(texture)),
            ShapeKind::Compound(_) => log::warn!("with_texture ignored on a compound shape"),
        }
        self
    }

    /// Sets the subdivision level of a leaf. Ignored on compounds.
    #[must_use]
    pub fn with_mesh_level(mut self, level: u32) -> Self {
        match &mut self.kind {
            ShapeKind::Leaf(leaf) => leaf.set_mesh_level(level),
            ShapeKind::Compound(_) => log::warn!("with_mesh_level ignored on a compound shape"),
        }
        self
    }

    /// Sets the flag choosing between base and subdivided mesh. Ignored on compounds.
    #[must_use]
    pub fn with_mesh_enabled(mut self, enabled: impl Into<DynamicValue<bool, S>>) -> Self {
        match &mut self.kind {
            ShapeKind::Leaf(leaf) => leaf.set_mesh_enabled(enabled),
            ShapeKind::Compound(_) => log::warn!("with_mesh_enabled ignored on a compound shape"),
        }
        self
    }

    #[must_use]
    pub fn translate(self, offset: impl Into<DynamicValue<Vec3, S>>) -> Self {
        self.with_transform(Transformation::translate(offset))
    }

    #[must_use]
    pub fn rotate(self, degrees: impl Into<DynamicValue<Vec3, S>>) -> Self {
        self.with_transform(Transformation::rotate(degrees))
    }

    #[must_use]
    pub fn scale(self, factors: impl Into<DynamicValue<Vec3, S>>) -> Self {
        self.with_transform(Transformation::scale(factors))
    }

    #[must_use]
    pub fn translate_with(self, offset: impl Fn(&S) -> Vec3 + 'static) -> Self {
        self.translate(DynamicValue::computed(offset))
    }

    #[must_use]
    pub fn rotate_with(self, degrees: impl Fn(&S) -> Vec3 + 'static) -> Self {
        self.rotate(DynamicValue::computed(degrees))
    }

    #[must_use]
    pub fn scale_with(self, factors: impl Fn(&S) -> Vec3 + 'static) -> Self {
        self.scale(DynamicValue::computed(factors))
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Transformation<S>) -> Self {
        self.transforms.push(transform);
        self
    }

    /// In-place variant of [`with_transform`](Self::with_transform), for
    /// arranging copies inside a clone callback.
    pub fn push_transform(&mut self, transform: Transformation<S>) -> &mut Self {
        self.transforms.push(transform);
        self
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[must_use]
    pub fn is_compound(&self) -> bool {
        matches!(self.kind, ShapeKind::Compound(_))
    }

    #[must_use]
    pub fn as_leaf(&self) -> Option<&Leaf<S>> {
        match &self.kind {
            ShapeKind::Leaf(leaf) => Some(leaf),
            ShapeKind::Compound(_) => None,
        }
    }

    #[must_use]
    pub fn children(&self) -> &[ShapeKey] {
        match &self.kind {
            ShapeKind::Leaf(_) => &[],
            ShapeKind::Compound(children) => children,
        }
    }

    #[must_use]
    pub fn resolve_material(&self, state: &S) -> MaterialState {
        self.material.resolve(state)
    }
}

/// Shallow copy: compound children keep pointing at the same arena slots.
/// [`ShapeArena::deep_copy`](super::ShapeArena::deep_copy) copies whole subtrees.
impl<S> Clone for Shape<S> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            material: self.material.clone(),
            transforms: self.transforms.clone(),
        }
    }
}

impl<S> std::fmt::Debug for Shape<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.kind {
            ShapeKind::Leaf(leaf) => leaf.primitive.kind_name(),
            ShapeKind::Compound(_) => "Compound",
        };
        f.debug_struct("Shape")
            .field("kind", &kind)
            .field("children", &self.children().len())
            .field("transforms", &self.transforms)
            .finish_non_exhaustive()
    }
}
