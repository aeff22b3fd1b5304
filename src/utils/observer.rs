use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Vec2, Vec3};

use crate::app::input::MovementInput;

/// Pitch stays this far away from the poles.
const PITCH_MARGIN: f32 = 0.001;

/// Initial state and physical constants of an [`Observer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverSettings {
    pub position: Vec3,
    /// Yaw in radians.
    pub theta: f32,
    /// Pitch in radians.
    pub phi: f32,
    /// Radians per pixel of mouse movement.
    pub sensitivity: f32,
    pub mass: f32,
    pub force_coefficient: f32,
    pub drag_coefficient: f32,
}

impl Default for ObserverSettings {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 14.0),
            theta: -FRAC_PI_2,
            phi: 0.0,
            sensitivity: 0.0003,
            mass: 1000.0,
            force_coefficient: 0.35,
            drag_coefficient: 5.0,
        }
    }
}

/// First-person camera body with mass and linear drag.
///
/// Time is measured in milliseconds. Each tick integrates the applied force
/// in closed form, so the result does not depend on how a span of time is
/// split into frames (as long as the force is constant across it).
#[derive(Debug, Clone, PartialEq)]
pub struct Observer {
    position: Vec3,
    velocity: Vec3,
    force: Vec3,
    front: Vec3,
    /// Right vector in the XZ plane.
    right: Vec2,
    theta: f32,
    phi: f32,
    sensitivity: f32,
    mass: f32,
    force_coefficient: f32,
    drag_coefficient: f32,
}

impl Default for Observer {
    fn default() -> Self {
        Self::new(&ObserverSettings::default())
    }
}

impl Observer {
    #[must_use]
    pub fn new(settings: &ObserverSettings) -> Self {
        let mut observer = Self {
            position: settings.position,
            velocity: Vec3::ZERO,
            force: Vec3::ZERO,
            front: Vec3::ZERO,
            right: Vec2::ZERO,
            theta: settings.theta % TAU,
            phi: settings.phi % FRAC_PI_2,
            sensitivity: settings.sensitivity,
            mass: settings.mass,
            force_coefficient: settings.force_coefficient,
            drag_coefficient: settings.drag_coefficient,
        };
        observer.update_vectors();
        observer
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Turns the view by a mouse displacement in pixels.
    ///
    /// Only the angles change; the direction vectors follow on the next
    /// [`tick`](Self::tick).
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.theta = (self.theta + dx * self.sensitivity) % TAU;
        self.phi = (self.phi - dy * self.sensitivity)
            .clamp(-FRAC_PI_2 + PITCH_MARGIN, FRAC_PI_2 - PITCH_MARGIN);
    }

    /// Sets the force for the next position update from movement axes.
    ///
    /// `front` moves along the full view direction (including pitch),
    /// `right` strafes in the horizontal plane.
    pub fn apply_force(&mut self, front: f32, right: f32) {
        self.force = Vec3::new(
            self.front.x * front + self.right.x * right,
            self.front.y * front,
            self.front.z * front + self.right.y * right,
        ) * self.force_coefficient;
    }

    pub fn apply_movement(&mut self, input: &MovementInput) {
        let (front, right) = input.axes();
        self.apply_force(front, right);
    }

    // ========================================================================
    // Integration
    // ========================================================================

    pub fn update_vectors(&mut self) {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        self.front = Vec3::new(cos_phi * cos_theta, sin_phi, cos_phi * sin_theta);

        let (sin_right, cos_right) = (self.theta + FRAC_PI_2).sin_cos();
        self.right = Vec2::new(cos_right, sin_right);
    }

    /// Integrates `m·dv/dt = F − k·v` over `delta` milliseconds, then
    /// clears the force.
    pub fn update_position(&mut self, delta: u64) {
        let k = self.drag_coefficient;
        let m = self.mass;
        let t = delta as f32;
        let decay = (-(f64::from(k) / f64::from(m)) * delta as f64).exp() as f32;

        let terminal = self.force / k;
        let gap = terminal - self.velocity;

        self.position += terminal * t + gap * (m / k) * decay - gap * (m / k);
        self.velocity = terminal - gap * decay;
        self.force = Vec3::ZERO;

        log::trace!("Observer at {} moving {}", self.position, self.velocity);
    }

    pub fn tick(&mut self, delta: u64) {
        self.update_vectors();
        self.update_position(delta);
    }

    // ========================================================================
    // Setters used by animations
    // ========================================================================

    pub fn set_x(&mut self, x: f32) {
        self.position.x = x;
    }

    pub fn set_y(&mut self, y: f32) {
        self.position.y = y;
    }

    pub fn set_z(&mut self, z: f32) {
        self.position.z = z;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Sets the yaw and refreshes the direction vectors.
    pub fn set_theta(&mut self, theta: f32) {
        self.theta = theta;
        self.update_vectors();
    }

    /// Sets the pitch and refreshes the direction vectors.
    pub fn set_phi(&mut self, phi: f32) {
        self.phi = phi;
        self.update_vectors();
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    // ========================================================================
    // Getters
    // ========================================================================

    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Force pending for the next position update.
    #[must_use]
    pub fn force(&self) -> Vec3 {
        self.force
    }

    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    #[must_use]
    pub fn right(&self) -> Vec2 {
        self.right
    }

    /// The point one unit ahead of the eye.
    #[must_use]
    pub fn focus_point(&self) -> Vec3 {
        self.position + self.front
    }

    #[must_use]
    pub fn theta(&self) -> f32 {
        self.theta
    }

    #[must_use]
    pub fn phi(&self) -> f32 {
        self.phi
    }

    #[must_use]
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }
}
