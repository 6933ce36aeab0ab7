//! Mesh representations and conversions.

pub mod dcel;
