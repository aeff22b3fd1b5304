use glam::Vec4;

use crate::core::DynamicValue;

/// Fixed-function style surface description, resolved for one draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialState {
    /// Vertex color, used when lighting is off.
    pub color: Vec4,
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub shininess: f32,
}

impl Default for MaterialState {
    fn default() -> Self {
        Self {
            color: Vec4::ONE,
            ambient: Vec4::ONE,
            diffuse: Vec4::ONE,
            specular: Vec4::ONE,
            shininess: 0.0,
        }
    }
}

impl MaterialState {
    #[must_use]
    pub const fn new(ambient: Vec4, diffuse: Vec4, specular: Vec4, shininess: f32) -> Self {
        Self {
            color: Vec4::ONE,
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    #[must_use]
    pub const fn with_color(mut self, color: Vec4) -> Self {
        self.color = color;
        self
    }
}

/// Material whose every channel may be animated.
///
/// Defaults to opaque white on every channel with zero shininess.
pub struct Material<S> {
    pub color: DynamicValue<Vec4, S>,
    pub ambient: DynamicValue<Vec4, S>,
    pub diffuse: DynamicValue<Vec4, S>,
    pub specular: DynamicValue<Vec4, S>,
    pub shininess: DynamicValue<f32, S>,
}

impl<S> Material<S> {
    #[must_use]
    pub fn resolve(&self, state: &S) -> MaterialState {
        MaterialState {
            color: self.color.evaluate(state),
            ambient: self.ambient.evaluate(state),
            diffuse: self.diffuse.evaluate(state),
            specular: self.specular.evaluate(state),
            shininess: self.shininess.evaluate(state),
        }
    }
}

impl<S> Default for Material<S> {
    fn default() -> Self {
        MaterialState::default().into()
    }
}

impl<S> From<MaterialState> for Material<S> {
    fn from(state: MaterialState) -> Self {
        Self {
            color: state.color.into(),
            ambient: state.ambient.into(),
            diffuse: state.diffuse.into(),
            specular: state.specular.into(),
            shininess: state.shininess.into(),
        }
    }
}

impl<S> Clone for Material<S> {
    fn clone(&self) -> Self {
        Self {
            color: self.color.clone(),
            ambient: self.ambient.clone(),
            diffuse: self.diffuse.clone(),
            specular: self.specular.clone(),
            shininess: self.shininess.clone(),
        }
    }
}

impl<S> std::fmt::Debug for Material<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Material")
            .field("color", &self.color)
            .field("ambient", &self.ambient)
            .field("diffuse", &self.diffuse)
            .field("specular", &self.specular)
            .field("shininess", &self.shininess)
            .finish()
    }
}
