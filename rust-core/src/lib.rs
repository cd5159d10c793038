//! Molecular point group library
//!
//! Takes symmetry operations detected on a molecule, closes them into a finite
//! point group, partitions the group into conjugacy classes, gives every
//! operation its character-table label and determines the Schoenflies name.

pub mod config;
pub mod errors;
pub mod symmetries;

pub use errors::PointGroupError;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, PointGroupError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
