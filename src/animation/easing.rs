//! Easing curves
//!
//! Maps a normalized time `t ∈ [0, 1]` to a normalized progress value.
//! Every curve satisfies `f(0) = 0` and `f(1) = 1` except the exponential
//! family, which keeps the classic `2^(10(t-1))` formulation:
//! `ExponentialIn(0) = 2^-10` and `ExponentialOut(1) = 1 - 2^-10`.
//! Animation timings downstream are tuned against these exact values, so
//! the curve is not renormalized.

use std::f64::consts::{FRAC_PI_2, PI};

/// Easing curve applied to the progress fraction of an [`Animation`](super::Animation).
#[derive(Clone, Copy, Debug, Default)]
pub enum Easing {
    #[default]
    Linear,
    QuadraticIn,
    QuadraticOut,
    QuadraticInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuarticIn,
    QuarticOut,
    QuarticInOut,
    QuinticIn,
    QuinticOut,
    QuinticInOut,
    SinusoidalIn,
    SinusoidalOut,
    SinusoidalInOut,
    ExponentialIn,
    ExponentialOut,
    ExponentialInOut,
    CircularIn,
    CircularOut,
    CircularInOut,
    /// Always 0. Used by hold animations, where first and last are equal.
    Hold,
    /// User supplied curve.
    Custom(fn(f32) -> f32),
}

impl Easing {
    /// All named curves, in declaration order.
    pub const NAMED: [Easing; 22] = [
        Easing::Linear,
        Easing::QuadraticIn,
        Easing::QuadraticOut,
        Easing::QuadraticInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::QuarticIn,
        Easing::QuarticOut,
        Easing::QuarticInOut,
        Easing::QuinticIn,
        Easing::QuinticOut,
        Easing::QuinticInOut,
        Easing::SinusoidalIn,
        Easing::SinusoidalOut,
        Easing::SinusoidalInOut,
        Easing::ExponentialIn,
        Easing::ExponentialOut,
        Easing::ExponentialInOut,
        Easing::CircularIn,
        Easing::CircularOut,
        Easing::CircularInOut,
    ];

    /// Apply the easing curve to a progress value (0.0 to 1.0).
    #[must_use]
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,

            Easing::QuadraticIn => t * t,
            Easing::QuadraticOut => -t * (t - 2.0),
            Easing::QuadraticInOut => {
                let t = t * 2.0;
                if t < 1.0 {
                    return t * t / 2.0;
                }
                let t = t - 1.0;
                -(t * (t - 2.0) - 1.0) / 2.0
            }

            Easing::CubicIn => t * t * t,
            Easing::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            Easing::CubicInOut => {
                let t = t * 2.0;
                if t < 1.0 {
                    return t * t * t / 2.0;
                }
                let t = t - 2.0;
                (t * t * t + 2.0) / 2.0
            }

            Easing::QuarticIn => t * t * t * t,
            Easing::QuarticOut => {
                let t = t - 1.0;
                -t * t * t * t + 1.0
            }
            Easing::QuarticInOut => {
                let t = t * 2.0;
                if t < 1.0 {
                    return t * t * t * t / 2.0;
                }
                let t = t - 2.0;
                -(t * t * t * t - 2.0) / 2.0
            }

            Easing::QuinticIn => t * t * t * t * t,
            Easing::QuinticOut => {
                let t = t - 1.0;
                t * t * t * t * t + 1.0
            }
            Easing::QuinticInOut => {
                let t = t * 2.0;
                if t < 1.0 {
                    return t * t * t * t * t / 2.0;
                }
                let t = t - 2.0;
                (t * t * t * t * t + 2.0) / 2.0
            }

            // Trigonometric and exponential curves are evaluated in f64 and
            // rounded once, which keeps the boundary values stable.
            Easing::SinusoidalIn => (-(f64::from(t) * FRAC_PI_2).cos() + 1.0) as f32,
            Easing::SinusoidalOut => (f64::from(t) * FRAC_PI_2).sin() as f32,
            Easing::SinusoidalInOut => (-((PI * f64::from(t)).cos() - 1.0) / 2.0) as f32,

            Easing::ExponentialIn => exp2(10.0 * (t - 1.0)) as f32,
            Easing::ExponentialOut => (-exp2(-10.0 * t) + 1.0) as f32,
            Easing::ExponentialInOut => {
                let t = t * 2.0;
                if t < 1.0 {
                    return (exp2(10.0 * (t - 1.0)) / 2.0) as f32;
                }
                let t = t - 1.0;
                ((-exp2(-10.0 * t) + 2.0) / 2.0) as f32
            }

            Easing::CircularIn => -((1.0 - t * t).sqrt() - 1.0),
            Easing::CircularOut => {
                let t = t - 1.0;
                (1.0 - t * t).sqrt()
            }
            Easing::CircularInOut => {
                let t = t * 2.0;
                if t < 1.0 {
                    return -((1.0 - t * t).sqrt() - 1.0) / 2.0;
                }
                let t = t - 2.0;
                ((1.0 - t * t).sqrt() + 1.0) / 2.0
            }

            Easing::Hold => 0.0,
            Easing::Custom(f) => f(t),
        }
    }

    /// Display name of the curve.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::QuadraticIn => "quadraticIn",
            Easing::QuadraticOut => "quadraticOut",
            Easing::QuadraticInOut => "quadraticInOut",
            Easing::CubicIn => "cubicIn",
            Easing::CubicOut => "cubicOut",
            Easing::CubicInOut => "cubicInOut",
            Easing::QuarticIn => "quarticIn",
            Easing::QuarticOut => "quarticOut",
            Easing::QuarticInOut => "quarticInOut",
            Easing::QuinticIn => "quinticIn",
            Easing::QuinticOut => "quinticOut",
            Easing::QuinticInOut => "quinticInOut",
            Easing::SinusoidalIn => "sinusoidalIn",
            Easing::SinusoidalOut => "sinusoidalOut",
            Easing::SinusoidalInOut => "sinusoidalInOut",
            Easing::ExponentialIn => "exponentialIn",
            Easing::ExponentialOut => "exponentialOut",
            Easing::ExponentialInOut => "exponentialInOut",
            Easing::CircularIn => "circularIn",
            Easing::CircularOut => "circularOut",
            Easing::CircularInOut => "circularInOut",
            Easing::Hold => "hold",
            Easing::Custom(_) => "custom",
        }
    }
}

/// `2^x` in double precision.
#[inline]
fn exp2(x: f32) -> f64 {
    f64::from(x).exp2()
}
