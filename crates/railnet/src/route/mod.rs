//! All-paths route search.
//!
//! Purpose
//! - Answer "enumerate every distinct route between two tracks, travelling
//!   a given direction, without revisiting any track" by plain recursion
//!   over the arena, one call frame per visited track.
//!
//! Why this design
//! - The marking set strictly grows within one call, which bounds the
//!   recursion by the number of distinct (track, direction) states and
//!   makes termination a structural property, not a search-order accident.
//! - Turnouts memoize the partial path found through their converging
//!   side, so a closed loop folding back through the same turnout reuses
//!   the first exploration instead of re-deriving or rejecting it.
//!
//! Note on module layout
//! - `types.rs` (configuration), `dfs.rs` (the `PathFinder` runner).

mod dfs;
mod types;

pub use dfs::PathFinder;
pub use types::SearchCfg;

#[cfg(test)]
mod tests;
