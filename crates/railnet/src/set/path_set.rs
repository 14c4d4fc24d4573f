//! Paths and path collections.
//!
//! A path is the set of tracks one concrete route passes through. A path
//! set is the accumulator the search builds its answer in: it starts with
//! a single empty path, tracks are broadcast-appended to every contained
//! path as the recursion unwinds, and sibling branches merge through a
//! duplicate-checked union.

use std::fmt;
use std::ops::AddAssign;

use crate::net::{Direction, Network, TrackId};

use super::track_set::TrackSet;

/// One concrete route, as the set of tracks it traverses. Equality is
/// bitwise set equality over the fixed capacity.
#[derive(Clone, PartialEq, Eq)]
pub struct Path {
    tracks: TrackSet,
}

impl Path {
    pub fn for_net(net: &Network) -> Self {
        Self {
            tracks: TrackSet::for_net(net),
        }
    }

    pub(crate) fn with_bytes(bytes: usize) -> Self {
        Self {
            tracks: TrackSet::with_bytes(bytes),
        }
    }

    #[inline]
    pub fn add(&mut self, id: TrackId) {
        self.tracks.add(id);
    }

    #[inline]
    pub fn contains(&self, id: TrackId) -> bool {
        self.tracks.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Number of tracks on the path.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = TrackId> + '_ {
        self.tracks.iter()
    }

    /// True iff no track is shared by both paths.
    pub fn is_disjoint(&self, other: &Path) -> bool {
        self.tracks.is_disjoint(&other.tracks)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tracks, f)
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path{}", self.tracks)
    }
}

/// All distinct routes found for one query, with the query's departure,
/// arrival and travel direction carried as diagnostic metadata.
#[derive(Clone, Debug)]
pub struct PathSet {
    paths: Vec<Path>,
    departure: TrackId,
    arrival: TrackId,
    direction: Direction,
}

impl PathSet {
    /// A set holding one empty sentinel path, ready to accumulate a search
    /// rooted at `departure`.
    pub(crate) fn seeded(
        net: &Network,
        departure: TrackId,
        arrival: TrackId,
        direction: Direction,
    ) -> Self {
        Self {
            paths: vec![Path::for_net(net)],
            departure,
            arrival,
            direction,
        }
    }

    #[inline]
    pub fn departure(&self) -> TrackId {
        self.departure
    }

    #[inline]
    pub fn arrival(&self) -> TrackId {
        self.arrival
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of non-empty paths.
    pub fn count(&self) -> usize {
        self.paths.iter().filter(|p| !p.is_empty()).count()
    }

    /// Iterate over the non-empty paths.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().filter(|p| !p.is_empty())
    }

    pub fn contains_path(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    /// Append `id` to every path in the set.
    pub fn add_track(&mut self, id: TrackId) {
        for path in &mut self.paths {
            path.add(id);
        }
    }

    /// Replace this set's paths with a copy of `other`'s, keeping the
    /// metadata.
    pub(crate) fn assign_paths(&mut self, other: &PathSet) {
        self.paths.clear();
        self.paths.extend(other.paths.iter().cloned());
    }
}

/// Union: paths of `rhs` not already present are copied in. Metadata is
/// untouched.
impl AddAssign<&PathSet> for PathSet {
    fn add_assign(&mut self, rhs: &PathSet) {
        for path in &rhs.paths {
            if !self.contains_path(path) {
                self.paths.push(path.clone());
            }
        }
    }
}

impl fmt::Display for PathSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({}): ",
            self.departure, self.arrival, self.direction
        )?;
        if self.count() == 0 {
            return write!(f, "no path");
        }
        for (i, path) in self.paths().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{path}")?;
        }
        Ok(())
    }
}
