//! Infrastructure layer
//!
//! Handles the side-effecting pieces: the bundler subprocess and manifest
//! files on disk.

pub mod bundler;
pub mod manifest;
