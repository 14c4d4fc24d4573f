//! Bit-vector sets over track identifiers.
//!
//! Purpose
//! - `TrackSet`: one bit per identifier; the representation of a path.
//! - `HeadedTrackSet`: two bits per identifier (one per travel direction);
//!   the per-search visited marking.
//! - `Path`/`PathSet`: route accumulators built on `TrackSet`.
//!
//! All capacities derive from a sealed `Network`, whose final track count
//! can no longer change underneath a live set.

mod headed;
mod path_set;
mod track_set;

pub use headed::HeadedTrackSet;
pub use path_set::{Path, PathSet};
pub use track_set::TrackSet;
