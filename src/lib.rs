//! numkit: dense matrix and flat numeric-array primitives.
//!
//! This crate provides the standalone numeric core behind a host-runtime
//! extension: a row-major [`Matrix`] with dimension-checked algebra and a
//! [`FlatArray`] with in-place scalar operations. Both own their buffers
//! outright, so destruction is deterministic and a boundary layer only has
//! to marshal flat value sequences in and out.
//!
//! The design favors small, testable modules: construction and arithmetic
//! return typed errors ([`Error`]) instead of panicking, and allocation
//! failures surface as [`Error::OutOfMemory`] rather than aborting.
//!
//! Embedders should call [`initialize`] once at startup, before creating
//! any instance.
pub mod array;
pub mod error;
pub mod matrix;

pub use array::FlatArray;
pub use error::{Error, Result};
pub use matrix::Matrix;

use std::sync::Once;

static INIT: Once = Once::new();

/// Process-wide setup, called once by the embedding boundary before first
/// use. Installs the logging backend.
///
/// Calling this more than once is a safe no-op.
pub fn initialize() {
    INIT.call_once(|| {
        let _ = env_logger::try_init();
        log::debug!("numkit initialized");
    });
}
