//! Marker types.

/// Marker type describing the moment a record was made.
#[derive(Clone, Copy, Debug)]
pub struct Occurrence;

/// Marker type describing the moment a computation is evaluated at.
#[derive(Clone, Copy, Debug)]
pub struct Evaluation;
