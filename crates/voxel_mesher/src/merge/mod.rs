//! Greedy merge strategies.
//!
//! Each strategy sweeps every plane axis in both directions, one depth layer at
//! a time, and emits [`Quad`]s covering the visible faces of that layer:
//! - [`naive`]: per-cell scan over a dense scratch slice, X-run first, then
//!   Y-run across the full X width.
//! - [`binary`]: bit-packed columns, runs found with trailing-zero counts.
//! - [`culled`]: no merging, one unit quad per visible face.

pub mod binary;
pub mod culled;
pub mod naive;

use crate::core::{PlaneAxis, Quad};

pub use binary::{binary_merge_plane, merge_binary_slice};
pub use culled::culled_faces;
pub use naive::naive_merge_plane;

/// Plane sweeps in emission order: forward faces first, then backward.
pub const PLANE_SWEEPS: [(PlaneAxis, bool); 6] = [
    (PlaneAxis::YZ, true),  // +X (Right)
    (PlaneAxis::XZ, true),  // +Y (Top)
    (PlaneAxis::XY, true),  // +Z (Front)
    (PlaneAxis::YZ, false), // -X (Left)
    (PlaneAxis::XZ, false), // -Y (Bottom)
    (PlaneAxis::XY, false), // -Z (Back)
];

/// Total unit faces covered by a set of quads.
pub fn covered_area(quads: &[Quad]) -> usize {
    quads.iter().map(Quad::area).sum()
}
