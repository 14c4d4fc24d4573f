//! Track registry and graph.
//!
//! Purpose
//! - Model the physical layout as a dense arena of typed track nodes
//!   (dead ends, blocks, turnouts, crossings) whose neighbor links are
//!   arena indices, never owning pointers; the layout is cyclic and the
//!   arena outlives every search.
//! - Provide the wiring protocol (`connect` with its reverse-registration
//!   half), the canonical-direction convention, and the one-time
//!   finalize/validate step that gates all queries.
//!
//! Why this design
//! - A closed tagged union plus exhaustive match keeps the variant set
//!   checkable at compile time.
//! - The open builder / sealed network split fixes every set capacity at
//!   seal time, so bit-sets can never be sized against a moving count.
//!
//! Note on module layout
//! - `types.rs` (data types), `build.rs` (construction and sealing),
//!   `rand.rs` (deterministic layout sampler for tests and benches).

mod build;
pub mod rand;
mod types;

pub use build::{Network, NetworkBuilder};
pub use types::{ConnectError, Connector, Direction, TrackId, TrackKind, TrackNode};
