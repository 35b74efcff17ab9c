// ABOUTME: Core types, traits, and utilities for Long Drive Log
// ABOUTME: Validated input buffers and shared constants used across all packages

pub mod constants;
pub mod validation;

// Re-export constants
pub use constants::{longdrive_dir, DEFAULT_STORE_FILE};

// Re-export validation
pub use validation::{
    Invalid, MaxLength, ValidatedField, Validation, WhitespaceOptions, WhitespaceValidation,
};
