//! Core track types: identifiers, directions, connectors, and the closed
//! set of track variants.
//!
//! Kept small and explicit to make `build` and the `route` module easy to
//! read.

use std::fmt;

use thiserror::Error;

/// Identifier of a track in its network's arena.
///
/// Identifiers are dense, zero-based and assigned in creation order; they
/// index the arena directly and address one bit (or one bit pair) in every
/// set type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TrackId(pub u16);

impl TrackId {
    #[inline]
    pub(crate) fn idx(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Travel sense over a track, relative to the sense it was first wired in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Bit value used by the headed-set packing (Forward = 0, Backward = 1).
    #[inline]
    pub(crate) fn bit(self) -> u8 {
        match self {
            Direction::Forward => 0,
            Direction::Backward => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "F"),
            Direction::Backward => write!(f, "B"),
        }
    }
}

/// Named attachment point on a track variant. Each slot holds at most one
/// neighbor and is immutable once filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connector {
    Inlet,
    LeftInlet,
    RightInlet,
    Outlet,
    LeftOutlet,
    RightOutlet,
}

impl Connector {
    /// Inlet-like connectors are the side forward traffic enters through.
    #[inline]
    pub fn is_inlet(self) -> bool {
        matches!(
            self,
            Connector::Inlet | Connector::LeftInlet | Connector::RightInlet
        )
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Connector::Inlet => "inlet",
            Connector::LeftInlet => "left-inlet",
            Connector::RightInlet => "right-inlet",
            Connector::Outlet => "outlet",
            Connector::LeftOutlet => "left-outlet",
            Connector::RightOutlet => "right-outlet",
        };
        write!(f, "{name}")
    }
}

/// Wiring failure. Local and non-fatal: the builder logs it, tallies it and
/// leaves the network unchanged.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ConnectError {
    #[error("track {track} has no {connector} connector")]
    BadConnector { track: TrackId, connector: Connector },
    #[error("{connector} connector of track {track} is already wired")]
    UsedConnector { track: TrackId, connector: Connector },
}

/// Track variants and their connector slots.
///
/// The set is closed on purpose: traversal and validation dispatch by
/// exhaustive match, so a new variant (a double slip, say) extends every
/// match below at compile time. Lengths are construction data in
/// millimetres; the search does not read them.
#[derive(Clone, Debug)]
pub enum TrackKind {
    /// Single-ended stub; its one neighbor sits at the outlet.
    Deadend {
        length: u16,
        outlet: Option<TrackId>,
    },
    /// Linear segment.
    Block {
        length: u16,
        inlet: Option<TrackId>,
        outlet: Option<TrackId>,
    },
    /// One converging side, two diverging branches.
    Turnout {
        left_length: u16,
        right_length: u16,
        inlet: Option<TrackId>,
        out_left: Option<TrackId>,
        out_right: Option<TrackId>,
    },
    /// Diamond crossing, no switching: the left inlet pairs with the right
    /// outlet and vice versa.
    Crossing {
        left_length: u16,
        right_length: u16,
        in_left: Option<TrackId>,
        in_right: Option<TrackId>,
        out_left: Option<TrackId>,
        out_right: Option<TrackId>,
    },
}

impl TrackKind {
    /// Variant name for logs and Display.
    pub fn name(&self) -> &'static str {
        match self {
            TrackKind::Deadend { .. } => "deadend",
            TrackKind::Block { .. } => "block",
            TrackKind::Turnout { .. } => "turnout",
            TrackKind::Crossing { .. } => "crossing",
        }
    }

    /// Connectors this variant exposes.
    pub fn connectors(&self) -> &'static [Connector] {
        match self {
            TrackKind::Deadend { .. } => &[Connector::Outlet],
            TrackKind::Block { .. } => &[Connector::Inlet, Connector::Outlet],
            TrackKind::Turnout { .. } => &[
                Connector::Inlet,
                Connector::LeftOutlet,
                Connector::RightOutlet,
            ],
            TrackKind::Crossing { .. } => &[
                Connector::LeftInlet,
                Connector::RightInlet,
                Connector::LeftOutlet,
                Connector::RightOutlet,
            ],
        }
    }

    /// Slot for `connector`, or `None` when the variant does not expose it.
    pub(crate) fn slot(&self, connector: Connector) -> Option<&Option<TrackId>> {
        match (self, connector) {
            (TrackKind::Deadend { outlet, .. }, Connector::Outlet) => Some(outlet),
            (TrackKind::Block { inlet, .. }, Connector::Inlet) => Some(inlet),
            (TrackKind::Block { outlet, .. }, Connector::Outlet) => Some(outlet),
            (TrackKind::Turnout { inlet, .. }, Connector::Inlet) => Some(inlet),
            (TrackKind::Turnout { out_left, .. }, Connector::LeftOutlet) => Some(out_left),
            (TrackKind::Turnout { out_right, .. }, Connector::RightOutlet) => Some(out_right),
            (TrackKind::Crossing { in_left, .. }, Connector::LeftInlet) => Some(in_left),
            (TrackKind::Crossing { in_right, .. }, Connector::RightInlet) => Some(in_right),
            (TrackKind::Crossing { out_left, .. }, Connector::LeftOutlet) => Some(out_left),
            (TrackKind::Crossing { out_right, .. }, Connector::RightOutlet) => Some(out_right),
            _ => None,
        }
    }

    pub(crate) fn slot_mut(&mut self, connector: Connector) -> Option<&mut Option<TrackId>> {
        match (self, connector) {
            (TrackKind::Deadend { outlet, .. }, Connector::Outlet) => Some(outlet),
            (TrackKind::Block { inlet, .. }, Connector::Inlet) => Some(inlet),
            (TrackKind::Block { outlet, .. }, Connector::Outlet) => Some(outlet),
            (TrackKind::Turnout { inlet, .. }, Connector::Inlet) => Some(inlet),
            (TrackKind::Turnout { out_left, .. }, Connector::LeftOutlet) => Some(out_left),
            (TrackKind::Turnout { out_right, .. }, Connector::RightOutlet) => Some(out_right),
            (TrackKind::Crossing { in_left, .. }, Connector::LeftInlet) => Some(in_left),
            (TrackKind::Crossing { in_right, .. }, Connector::RightInlet) => Some(in_right),
            (TrackKind::Crossing { out_left, .. }, Connector::LeftOutlet) => Some(out_left),
            (TrackKind::Crossing { out_right, .. }, Connector::RightOutlet) => Some(out_right),
            _ => None,
        }
    }

    /// True iff every connector slot the variant requires is filled.
    pub fn connections_ok(&self) -> bool {
        self.connectors()
            .iter()
            .all(|&c| matches!(self.slot(c), Some(Some(_))))
    }
}

/// One track of a network, open or sealed.
#[derive(Clone, Debug)]
pub struct TrackNode {
    pub(crate) id: TrackId,
    pub(crate) label: String,
    pub(crate) direction: Option<Direction>,
    pub(crate) kind: TrackKind,
}

impl TrackNode {
    #[inline]
    pub fn id(&self) -> TrackId {
        self.id
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Canonical travel direction: the sense this track was first wired in.
    /// `None` until the first connect touches the track.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    #[inline]
    pub fn kind(&self) -> &TrackKind {
        &self.kind
    }

    /// Set at most once per distinct value; a conflicting re-set is logged
    /// and ignored, and does not count as a wiring fault.
    pub(crate) fn set_direction(&mut self, dir: Direction) {
        match self.direction {
            None => self.direction = Some(dir),
            Some(current) if current == dir => {}
            Some(current) => {
                tracing::warn!(
                    track = %self.id,
                    label = %self.label,
                    current = %current,
                    requested = %dir,
                    "direction already set"
                );
            }
        }
    }
}

impl fmt::Display for TrackNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}] {}", self.kind.name(), self.id, self.label)
    }
}
