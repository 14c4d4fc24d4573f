//! Track-network modelling and exhaustive route enumeration for
//! model-railway layouts.
//!
//! A layout is declared once at startup: tracks (dead ends, blocks,
//! turnouts, crossings) are registered on a [`net::NetworkBuilder`], wired
//! through the connect protocol, then sealed by `finalize`. Queries run
//! against the sealed [`net::Network`]: `paths_to` returns every distinct
//! route between two tracks for a travel direction, as bit-sets of the
//! tracks each route traverses. Downstream signalling and interlocking
//! logic consumes the result; none of it lives here.
//!
//! The library only emits `tracing` events and never installs a
//! subscriber.

pub mod api;
pub mod net;
pub mod route;
pub mod set;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::net::rand::{draw_ring_layout, ReplayToken, RingCfg};
    pub use crate::net::{
        ConnectError, Connector, Direction, Network, NetworkBuilder, TrackId, TrackKind, TrackNode,
    };
    pub use crate::route::{PathFinder, SearchCfg};
    pub use crate::set::{HeadedTrackSet, Path, PathSet, TrackSet};
}
