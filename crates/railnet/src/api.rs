//! Curated internal API surface (UNSTABLE).
//!
//! Important
//! - This is not a stable public API. It is a convenience surface for
//!   project-internal callers; breaking changes are allowed and expected.
//! - Prefer these re-exports for clarity and consistency across
//!   experiments.

// Registry, graph and wiring protocol
pub use crate::net::{
    ConnectError, Connector, Direction, Network, NetworkBuilder, TrackId, TrackKind, TrackNode,
};
// Deterministic layout sampling
pub use crate::net::rand::{
    draw_ring_layout, ReplayToken as LayoutReplay, RingCfg,
};
// Bit-set family
pub use crate::set::{HeadedTrackSet, Path, PathSet, TrackSet};
// Route search
pub use crate::route::{PathFinder, SearchCfg};
