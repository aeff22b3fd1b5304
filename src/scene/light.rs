use glam::{Vec3, Vec4};

use crate::core::DynamicValue;
use crate::render::{LightState, SpotState};

/// `1 / (constant + linear·d + quadratic·d²)` falloff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticAttenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Default for QuadraticAttenuation {
    fn default() -> Self {
        Self {
            constant: 1.0,
            linear: 0.0,
            quadratic: 0.0,
        }
    }
}

impl QuadraticAttenuation {
    #[must_use]
    pub const fn new(constant: f32, linear: f32, quadratic: f32) -> Self {
        Self {
            constant,
            linear,
            quadratic,
        }
    }
}

pub struct DirectionalLight<S> {
    /// Direction towards the light.
    pub direction: DynamicValue<Vec3, S>,
}

pub struct PointLight<S> {
    pub position: DynamicValue<Vec3, S>,
    pub attenuation: QuadraticAttenuation,
}

pub struct SpotLight<S> {
    pub position: DynamicValue<Vec3, S>,
    pub direction: DynamicValue<Vec3, S>,
    /// Cone half-angle in degrees.
    pub cutoff: f32,
    pub exponent: f32,
    pub attenuation: QuadraticAttenuation,
}

pub enum LightKind<S> {
    Directional(DirectionalLight<S>),
    Point(PointLight<S>),
    Spot(SpotLight<S>),
}

/// A scene light whose colors, placement and on/off switch may be animated.
pub struct Light<S> {
    pub ambient: DynamicValue<Vec4, S>,
    pub diffuse: DynamicValue<Vec4, S>,
    pub specular: DynamicValue<Vec4, S>,
    pub enabled: DynamicValue<bool, S>,
    pub kind: LightKind<S>,
}

impl<S> Light<S> {
    fn with_kind(
        diffuse: impl Into<DynamicValue<Vec4, S>>,
        specular: impl Into<DynamicValue<Vec4, S>>,
        kind: LightKind<S>,
    ) -> Self {
        Self {
            ambient: Vec4::new(0.0, 0.0, 0.0, 1.0).into(),
            diffuse: diffuse.into(),
            specular: specular.into(),
            enabled: true.into(),
            kind,
        }
    }

    pub fn new_directional(
        diffuse: impl Into<DynamicValue<Vec4, S>>,
        specular: impl Into<DynamicValue<Vec4, S>>,
        direction: impl Into<DynamicValue<Vec3, S>>,
    ) -> Self {
        Self::with_kind(
            diffuse,
            specular,
            LightKind::Directional(DirectionalLight {
                direction: direction.into(),
            }),
        )
    }

    pub fn new_point(
        diffuse: impl Into<DynamicValue<Vec4, S>>,
        specular: impl Into<DynamicValue<Vec4, S>>,
        position: impl Into<DynamicValue<Vec3, S>>,
        attenuation: QuadraticAttenuation,
    ) -> Self {
        Self::with_kind(
            diffuse,
            specular,
            LightKind::Point(PointLight {
                position: position.into(),
                attenuation,
            }),
        )
    }

    pub fn new_spot(
        diffuse: impl Into<DynamicValue<Vec4, S>>,
        specular: impl Into<DynamicValue<Vec4, S>>,
        position: impl Into<DynamicValue<Vec3, S>>,
        direction: impl Into<DynamicValue<Vec3, S>>,
        cutoff: f32,
        exponent: f32,
        attenuation: QuadraticAttenuation,
    ) -> Self {
        Self::with_kind(
            diffuse,
            specular,
            LightKind::Spot(SpotLight {
                position: position.into(),
                direction: direction.into(),
                cutoff,
                exponent,
                attenuation,
            }),
        )
    }

    #[must_use]
    pub fn with_ambient(mut self, ambient: impl Into<DynamicValue<Vec4, S>>) -> Self {
        self.ambient = ambient.into();
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: impl Into<DynamicValue<bool, S>>) -> Self {
        self.enabled = enabled.into();
        self
    }

    /// Resolves every dynamic parameter for slot `index`.
    #[must_use]
    pub fn resolve(&self, state: &S, index: usize) -> LightState {
        let (position, attenuation, spot) = match &self.kind {
            LightKind::Directional(light) => {
                (light.direction.evaluate(state).extend(0.0), None, None)
            }
            LightKind::Point(light) => (
                light.position.evaluate(state).extend(1.0),
                Some(light.attenuation),
                None,
            ),
            LightKind::Spot(light) => (
                light.position.evaluate(state).extend(1.0),
                Some(light.attenuation),
                Some(SpotState {
                    direction: light.direction.evaluate(state),
                    cutoff: light.cutoff,
                    exponent: light.exponent,
                }),
            ),
        };

        LightState {
            index,
            enabled: self.enabled.evaluate(state),
            ambient: self.ambient.evaluate(state),
            diffuse: self.diffuse.evaluate(state),
            specular: self.specular.evaluate(state),
            position,
            attenuation,
            spot,
        }
    }
}
