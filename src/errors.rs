//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`Error`] covers the failure modes of scene
//! construction and viewer setup:
//! - Invalid procedural primitive parameters
//! - Stale shape keys handed to the arena
//! - Empty animation playlists
//! - Conflicting key bindings
//!
//! The per-frame path never produces errors for well-formed scenes.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bulkhead::errors::{Error, Result};
//!
//! fn build_scene() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::app::keys::Key;
use crate::scene::ShapeKey;

/// The main error type for the bulkhead core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ========================================================================
    // Scene Construction Errors
    // ========================================================================
    /// A procedural primitive was configured with parameters it cannot
    /// generate geometry from.
    #[error("Invalid {kind} parameters: {reason}")]
    InvalidPrimitive {
        /// Primitive type name
        kind: &'static str,
        /// What is wrong with the parameters
        reason: String,
    },

    /// The shape key does not refer to a live arena slot.
    #[error("Shape not found: {0:?}")]
    ShapeNotFound(ShapeKey),

    // ========================================================================
    // Animation Errors
    // ========================================================================
    /// An animation player needs at least one group to select from.
    #[error("Animation player requires at least one animation group")]
    NoAnimationGroups,

    // ========================================================================
    // Input Errors
    // ========================================================================
    /// Two bindings were registered for the same key.
    #[error("Key already bound: {0}")]
    DuplicateKeyBinding(Key),
}

/// Alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
