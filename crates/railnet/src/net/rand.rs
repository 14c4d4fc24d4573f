//! Random closed-loop layouts (ring + turnout sidings, replay tokens).
//!
//! Model
//! - A ring of blocks with `sidings` turnout/dead-end pairs spliced in at
//!   random positions; every connector ends up wired, so `finalize` yields
//!   a valid network by construction.
//! - Determinism uses a replay token `(seed, index)` mixed into a single
//!   RNG, so draws are reproducible and indexable.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::build::NetworkBuilder;
use super::types::{Connector, TrackId, TrackKind};

/// Ring sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RingCfg {
    /// Blocks on the main loop. Clamped to >= 2.
    pub blocks: usize,
    /// Turnout + dead-end siding pairs spliced into the loop.
    pub sidings: usize,
    /// Track lengths are drawn uniformly from this range (millimetres).
    pub length_range: (u16, u16),
}

impl Default for RingCfg {
    fn default() -> Self {
        Self {
            blocks: 8,
            sidings: 2,
            length_range: (250, 2500),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a ring layout into a fresh builder.
///
/// Blocks are created first, so ids `0..cfg.blocks` always address loop
/// blocks regardless of where the sidings land.
pub fn draw_ring_layout(cfg: RingCfg, tok: ReplayToken) -> NetworkBuilder {
    let mut rng = tok.to_std_rng();
    let blocks = cfg.blocks.max(2);
    let (lo, hi) = cfg.length_range;
    let hi = hi.max(lo);

    let mut builder = NetworkBuilder::new();
    let mut ring: Vec<TrackId> = (0..blocks)
        .map(|i| builder.block(&format!("ring{i}"), rng.gen_range(lo..=hi)))
        .collect();

    let mut ok = true;
    for s in 0..cfg.sidings {
        let turnout = builder.turnout(
            &format!("siding{s}"),
            rng.gen_range(lo..=hi),
            rng.gen_range(lo..=hi),
        );
        let stub = builder.deadend(&format!("stub{s}"), rng.gen_range(lo..=hi));
        ok &= builder
            .connect(turnout, Connector::RightOutlet, stub, Connector::Outlet)
            .is_ok();
        let at = rng.gen_range(0..=ring.len());
        ring.insert(at, turnout);
    }

    for i in 0..ring.len() {
        let cur = ring[i];
        let next = ring[(i + 1) % ring.len()];
        let exit = match builder.get(cur).map(|node| node.kind()) {
            Some(TrackKind::Turnout { .. }) => Connector::LeftOutlet,
            _ => Connector::Outlet,
        };
        ok &= builder.connect(cur, exit, next, Connector::Inlet).is_ok();
    }
    debug_assert!(ok, "ring layouts wire without conflicts");
    builder
}
