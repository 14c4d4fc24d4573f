//! Two-phase network construction.
//!
//! `NetworkBuilder` is the open phase: tracks are declared in creation
//! order and wired through `connect`. `finalize` is the one-time seal: it
//! fixes the arena capacity, validates every connector slot and computes
//! the validity flag that gates every search. Set capacities are derived
//! from the sealed arena only, so they can never change underneath a live
//! set.

use crate::route::PathFinder;
use crate::set::PathSet;

use super::types::{ConnectError, Connector, Direction, TrackId, TrackKind, TrackNode};

/// Open-phase registry. Append-only; wiring faults are tallied, never
/// fatal.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    tracks: Vec<TrackNode>,
    faults: u32,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declared track count so far.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Wiring faults recorded so far.
    pub fn fault_count(&self) -> u32 {
        self.faults
    }

    pub fn get(&self, id: TrackId) -> Option<&TrackNode> {
        self.tracks.get(id.idx())
    }

    pub fn deadend(&mut self, label: &str, length: u16) -> TrackId {
        self.push(label, TrackKind::Deadend { length, outlet: None })
    }

    pub fn block(&mut self, label: &str, length: u16) -> TrackId {
        self.push(
            label,
            TrackKind::Block {
                length,
                inlet: None,
                outlet: None,
            },
        )
    }

    pub fn turnout(&mut self, label: &str, left_length: u16, right_length: u16) -> TrackId {
        self.push(
            label,
            TrackKind::Turnout {
                left_length,
                right_length,
                inlet: None,
                out_left: None,
                out_right: None,
            },
        )
    }

    pub fn crossing(&mut self, label: &str, left_length: u16, right_length: u16) -> TrackId {
        self.push(
            label,
            TrackKind::Crossing {
                left_length,
                right_length,
                in_left: None,
                in_right: None,
                out_left: None,
                out_right: None,
            },
        )
    }

    fn push(&mut self, label: &str, kind: TrackKind) -> TrackId {
        let id = TrackId(self.tracks.len() as u16);
        self.tracks.push(TrackNode {
            id,
            label: label.to_owned(),
            direction: None,
            kind,
        });
        id
    }

    /// Wire `from`'s connector to `to` and register the reverse link on
    /// `to`'s connector.
    ///
    /// Both halves are validated before either is committed, so a failure
    /// leaves the whole network unchanged. Canonical directions follow the
    /// wiring sense: the active side turns Forward when wired through an
    /// outlet-like connector and Backward through an inlet-like one; the
    /// passive side is the mirror image.
    pub fn connect(
        &mut self,
        from: TrackId,
        from_connector: Connector,
        to: TrackId,
        to_connector: Connector,
    ) -> Result<(), ConnectError> {
        self.check_slot(from, from_connector)?;
        self.check_slot(to, to_connector)?;

        let dir = if from_connector.is_inlet() {
            Direction::Backward
        } else {
            Direction::Forward
        };
        let node = &mut self.tracks[from.idx()];
        if let Some(slot) = node.kind.slot_mut(from_connector) {
            *slot = Some(to);
        }
        node.set_direction(dir);

        let dir = if to_connector.is_inlet() {
            Direction::Forward
        } else {
            Direction::Backward
        };
        let node = &mut self.tracks[to.idx()];
        if let Some(slot) = node.kind.slot_mut(to_connector) {
            *slot = Some(from);
        }
        node.set_direction(dir);

        tracing::trace!(
            from = %from,
            from_connector = %from_connector,
            to = %to,
            to_connector = %to_connector,
            "wired"
        );
        Ok(())
    }

    fn check_slot(&mut self, track: TrackId, connector: Connector) -> Result<(), ConnectError> {
        let err = match self.tracks[track.idx()].kind.slot(connector) {
            Some(None) => return Ok(()),
            Some(Some(_)) => ConnectError::UsedConnector { track, connector },
            None => ConnectError::BadConnector { track, connector },
        };
        self.faults += 1;
        tracing::warn!(error = %err, "wiring rejected");
        Err(err)
    }

    /// Seal the network. Runs per-track connector validation; any unfilled
    /// required slot joins the fault tally. A non-zero tally makes the
    /// network permanently invalid.
    pub fn finalize(self) -> Network {
        let NetworkBuilder { tracks, mut faults } = self;
        for node in &tracks {
            if node.kind.connections_ok() {
                continue;
            }
            for &connector in node.kind.connectors() {
                if matches!(node.kind.slot(connector), Some(None)) {
                    tracing::warn!(track = %node.id, label = %node.label, %connector, "unwired connector");
                }
            }
            faults += 1;
        }
        tracing::debug!(
            tracks = tracks.len(),
            faults,
            valid = faults == 0,
            "network sealed"
        );
        Network {
            tracks: tracks.into_boxed_slice(),
            faults,
        }
    }
}

/// Sealed track network. Arena capacity and therefore every set capacity
/// are fixed for the lifetime of the value.
#[derive(Debug)]
pub struct Network {
    tracks: Box<[TrackNode]>,
    faults: u32,
}

impl Network {
    /// Final registered track count.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, id: TrackId) -> Option<&TrackNode> {
        self.tracks.get(id.idx())
    }

    pub fn tracks(&self) -> impl Iterator<Item = &TrackNode> {
        self.tracks.iter()
    }

    /// True iff construction recorded no wiring fault and every connector
    /// was filled at seal time. Gates every search.
    pub fn is_valid(&self) -> bool {
        self.faults == 0
    }

    pub fn fault_count(&self) -> u32 {
        self.faults
    }

    pub(crate) fn node(&self, id: TrackId) -> &TrackNode {
        &self.tracks[id.idx()]
    }

    /// Enumerate every distinct route from `from` to `target` travelling
    /// `dir`, with a search scoped entirely to this call.
    ///
    /// Reuse a [`PathFinder`] instead to keep turnout partial paths warm
    /// across queries.
    pub fn paths_to(&self, from: TrackId, target: TrackId, dir: Direction) -> PathSet {
        PathFinder::new(self).paths_to(from, target, dir)
    }
}
