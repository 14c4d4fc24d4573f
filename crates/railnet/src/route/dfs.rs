//! Recursive enumeration of all routes between two tracks.

use crate::net::{Direction, Network, TrackId, TrackKind};
use crate::set::{HeadedTrackSet, PathSet};

use super::types::SearchCfg;

/// Search runner carrying the network, the turnout partial-path memo and
/// per-call statistics.
///
/// The memo lives on the finder, not in the marking set, so it survives
/// the whole call and, when one finder serves several queries, across
/// calls. A repeat visit of a turnout in an already-marked state returns
/// the memoized partial path instead of re-deriving or rejecting it; this
/// is what both terminates the search on closed-loop layouts and keeps
/// "all paths" exact when the loop folds back through the same turnout.
pub struct PathFinder<'a> {
    net: &'a Network,
    cfg: SearchCfg,
    partial: Vec<Option<PathSet>>,
    expanded: u64,
}

impl<'a> PathFinder<'a> {
    pub fn new(net: &'a Network) -> Self {
        Self::with_cfg(net, SearchCfg::default())
    }

    pub fn with_cfg(net: &'a Network, cfg: SearchCfg) -> Self {
        Self {
            net,
            cfg,
            partial: vec![None; net.len()],
            expanded: 0,
        }
    }

    /// Marking-set expansions of the last `paths_to` call. Each marked
    /// (track, direction) state expands at most once per call.
    pub fn expanded_count(&self) -> u64 {
        self.expanded
    }

    /// Enumerate every distinct route from `from` to `target` travelling
    /// `dir`.
    ///
    /// The sanctioned entry point: allocates one fresh marking set and the
    /// seeded accumulator, then drives the recursion. On an invalid
    /// network the search is refused and the result counts zero paths.
    pub fn paths_to(&mut self, from: TrackId, target: TrackId, dir: Direction) -> PathSet {
        let mut paths = PathSet::seeded(self.net, from, target, dir);
        self.expanded = 0;
        if !self.net.is_valid() {
            tracing::debug!(
                faults = self.net.fault_count(),
                "search refused, network is invalid"
            );
            return paths;
        }
        if self.net.get(from).is_none() || self.net.get(target).is_none() {
            return paths;
        }
        if !self.cfg.keep_partial_paths {
            self.partial.iter_mut().for_each(|memo| *memo = None);
        }
        let mut marking = HeadedTrackSet::for_net(self.net);
        let found = self.all_paths_to(from, target, dir, &mut paths, None, &mut marking);
        tracing::debug!(%from, %target, %dir, found, routes = paths.count(), "search finished");
        paths
    }

    /// One recursion step. Returns true iff at least one qualifying route
    /// from `cur` to `target` exists; on true, `cur` has been appended to
    /// every contributing path in `io`.
    fn all_paths_to(
        &mut self,
        cur: TrackId,
        target: TrackId,
        dir: Direction,
        io: &mut PathSet,
        from: Option<TrackId>,
        marking: &mut HeadedTrackSet,
    ) -> bool {
        let net = self.net;
        let node = net.node(cur);
        tracing::trace!(track = %cur, label = node.label(), kind = node.kind().name(), "visit");

        match node.kind() {
            TrackKind::Deadend { outlet, .. } => {
                if marking.contains(cur, dir) {
                    return false;
                }
                marking.add(cur, dir);
                self.expanded += 1;
                if cur == target {
                    io.add_track(cur);
                    return true;
                }
                // Continues only when travelled in its own wiring sense;
                // the other sense runs into the buffer stop.
                if node.direction() != Some(dir) {
                    return false;
                }
                let Some(next) = *outlet else { return false };
                if self.all_paths_to(next, target, dir, io, Some(cur), marking) {
                    io.add_track(cur);
                    return true;
                }
                false
            }

            TrackKind::Block { inlet, outlet, .. } => {
                if marking.contains(cur, dir) {
                    // A block is a single pass-through point; any cycle
                    // through it has already been tried.
                    return false;
                }
                marking.add(cur, dir);
                self.expanded += 1;
                if cur == target {
                    io.add_track(cur);
                    return true;
                }
                let next = if node.direction() == Some(dir) {
                    *outlet
                } else {
                    *inlet
                };
                let Some(next) = next else { return false };
                if self.all_paths_to(next, target, dir, io, Some(cur), marking) {
                    io.add_track(cur);
                    return true;
                }
                false
            }

            TrackKind::Turnout {
                inlet,
                out_left,
                out_right,
                ..
            } => {
                if marking.contains(cur, dir) {
                    // Already explored in this state. A memoized partial
                    // path means a route to the target exists and is
                    // reused as-is; no memo means there is none.
                    return match &self.partial[cur.idx()] {
                        Some(memo) => {
                            tracing::debug!(track = %cur, "partial path reused");
                            io.assign_paths(memo);
                            true
                        }
                        None => false,
                    };
                }
                marking.add(cur, dir);
                self.expanded += 1;
                // A memo left by an earlier exploration holds for the
                // converging sense only; drop it when travelling the other
                // way.
                if node.direction() != Some(dir) {
                    self.partial[cur.idx()] = None;
                }
                if cur == target {
                    io.add_track(cur);
                    return true;
                }
                if node.direction() == Some(dir) {
                    // Inlet to outlets: both branches are real routes and
                    // are explored independently, each against its own
                    // accumulator copy.
                    let (Some(left), Some(right)) = (*out_left, *out_right) else {
                        return false;
                    };
                    let mut right_paths = io.clone();
                    if self.all_paths_to(left, target, dir, io, Some(cur), marking) {
                        if self.all_paths_to(right, target, dir, &mut right_paths, Some(cur), marking)
                        {
                            *io += &right_paths;
                        }
                        io.add_track(cur);
                        true
                    } else if self.all_paths_to(right, target, dir, io, Some(cur), marking) {
                        io.add_track(cur);
                        true
                    } else {
                        false
                    }
                } else {
                    // Outlets to inlet: single continuation; memoize the
                    // result for repeat visits in this state.
                    let Some(next) = *inlet else { return false };
                    if self.all_paths_to(next, target, dir, io, Some(cur), marking) {
                        io.add_track(cur);
                        self.partial[cur.idx()] = Some(io.clone());
                        true
                    } else {
                        false
                    }
                }
            }

            TrackKind::Crossing {
                in_left,
                in_right,
                out_left,
                out_right,
                ..
            } => {
                // No marking and no memo: the continuation is fully
                // determined by the arrival side, so a crossing adds no
                // branch state of its own.
                if cur == target {
                    io.add_track(cur);
                    return true;
                }
                let Some(from) = from else { return false };
                let next = if node.direction() == Some(dir) {
                    if *in_left == Some(from) {
                        *out_right
                    } else if *in_right == Some(from) {
                        *out_left
                    } else {
                        None
                    }
                } else if *out_left == Some(from) {
                    *in_right
                } else if *out_right == Some(from) {
                    *in_left
                } else {
                    None
                };
                let Some(next) = next else { return false };
                if self.all_paths_to(next, target, dir, io, Some(cur), marking) {
                    io.add_track(cur);
                    return true;
                }
                false
            }
        }
    }
}
