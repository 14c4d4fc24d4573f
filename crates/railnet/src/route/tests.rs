use crate::net::{Connector, Direction, Network, NetworkBuilder, TrackId};

use super::*;

use Connector::{Inlet, LeftInlet, LeftOutlet, Outlet, RightInlet, RightOutlet};
use Direction::{Backward, Forward};

fn ids(paths: &crate::set::PathSet) -> Vec<Vec<u16>> {
    let mut v: Vec<Vec<u16>> = paths
        .paths()
        .map(|p| p.iter().map(|t| t.0).collect())
        .collect();
    v.sort();
    v
}

/// d1 -> x -> y -> z -> d2, forward sense along the chain.
fn chain() -> (Network, [TrackId; 5]) {
    let mut b = NetworkBuilder::new();
    let d1 = b.deadend("d1", 0);
    let x = b.block("x", 0);
    let y = b.block("y", 0);
    let z = b.block("z", 0);
    let d2 = b.deadend("d2", 0);
    b.connect(d1, Outlet, x, Inlet).expect("free");
    b.connect(x, Outlet, y, Inlet).expect("free");
    b.connect(y, Outlet, z, Inlet).expect("free");
    b.connect(z, Outlet, d2, Outlet).expect("free");
    let net = b.finalize();
    assert!(net.is_valid());
    (net, [d1, x, y, z, d2])
}

/// Closed loop with one diverging turnout `t` and two parallel return
/// branches that merge through `m2` (a turnout taken against its wiring
/// sense) before reaching `m`:
///
///   e -> t -L-> a --\
///        t -R-> bb --m2 -> m -> e
fn branching_loop() -> (Network, [TrackId; 6]) {
    let mut b = NetworkBuilder::new();
    let e = b.block("e", 0);
    let t = b.turnout("t", 0, 0);
    let a = b.block("a", 0);
    let bb = b.block("bb", 0);
    let m2 = b.turnout("m2", 0, 0);
    let m = b.block("m", 0);
    b.connect(e, Outlet, t, Inlet).expect("free");
    b.connect(t, LeftOutlet, a, Inlet).expect("free");
    b.connect(t, RightOutlet, bb, Inlet).expect("free");
    b.connect(a, Outlet, m2, LeftOutlet).expect("free");
    b.connect(bb, Outlet, m2, RightOutlet).expect("free");
    b.connect(m2, Inlet, m, Inlet).expect("free");
    b.connect(m, Outlet, e, Inlet).expect("free");
    let net = b.finalize();
    assert!(net.is_valid());
    (net, [e, t, a, bb, m2, m])
}

/// Figure-eight: two circles sharing the diamond crossing `c`. The P
/// circle runs through the left-inlet/right-outlet diagonal, the Q circle
/// through the other one.
fn figure_eight() -> (Network, [TrackId; 5]) {
    let mut b = NetworkBuilder::new();
    let c = b.crossing("c", 0, 0);
    let p1 = b.block("p1", 0);
    let p2 = b.block("p2", 0);
    let q1 = b.block("q1", 0);
    let q2 = b.block("q2", 0);
    b.connect(c, RightOutlet, p1, Inlet).expect("free");
    b.connect(p1, Outlet, p2, Inlet).expect("free");
    b.connect(p2, Outlet, c, LeftInlet).expect("free");
    b.connect(c, LeftOutlet, q1, Inlet).expect("free");
    b.connect(q1, Outlet, q2, Inlet).expect("free");
    b.connect(q2, Outlet, c, RightInlet).expect("free");
    let net = b.finalize();
    assert!(net.is_valid());
    (net, [c, p1, p2, q1, q2])
}

#[test]
fn chain_forward_yields_exactly_one_path() {
    let (net, [_, x, y, z, _]) = chain();
    let paths = net.paths_to(x, z, Forward);
    assert_eq!(paths.count(), 1);
    assert_eq!(ids(&paths), vec![vec![x.0, y.0, z.0]]);
    assert_eq!(paths.departure(), x);
    assert_eq!(paths.arrival(), z);
    assert_eq!(paths.direction(), Forward);
}

#[test]
fn chain_backward_yields_none() {
    let (net, [_, x, _, z, _]) = chain();
    assert_eq!(net.paths_to(x, z, Backward).count(), 0);
}

#[test]
fn target_is_departure() {
    let (net, [_, x, ..]) = chain();
    let paths = net.paths_to(x, x, Forward);
    assert_eq!(ids(&paths), vec![vec![x.0]]);
}

#[test]
fn deadend_continues_only_in_its_own_sense() {
    let (net, [_, _, _, z, d2]) = chain();
    // d2 was wired from z's side, so its sense points back up the chain.
    assert_eq!(net.paths_to(d2, z, Backward).count(), 1);
    assert_eq!(net.paths_to(d2, z, Forward).count(), 0);
}

#[test]
fn turnout_explores_both_branches() {
    let (net, [e, t, a, bb, m2, m]) = branching_loop();
    let paths = net.paths_to(e, m, Forward);
    assert_eq!(paths.count(), 2);
    assert_eq!(
        ids(&paths),
        vec![
            vec![e.0, t.0, a.0, m2.0, m.0],
            vec![e.0, t.0, bb.0, m2.0, m.0],
        ]
    );
}

#[test]
fn merge_turnout_memo_is_reused_across_calls() {
    let (net, [e, _, _, _, _, m]) = branching_loop();
    let mut finder = PathFinder::new(&net);
    let first = finder.paths_to(e, m, Forward);
    let second = finder.paths_to(e, m, Forward);
    assert_eq!(ids(&first), ids(&second));

    // Re-deriving everything per call must not change the answer.
    let mut cold = PathFinder::with_cfg(
        &net,
        SearchCfg {
            keep_partial_paths: false,
        },
    );
    assert_eq!(ids(&cold.paths_to(e, m, Forward)), ids(&first));
    assert_eq!(ids(&cold.paths_to(e, m, Forward)), ids(&first));
}

#[test]
fn closed_loop_terminates_with_finite_result() {
    let (net, [e, t, _, bb, _, m]) = branching_loop();
    let paths = net.paths_to(e, bb, Forward);
    assert_eq!(ids(&paths), vec![vec![e.0, t.0, bb.0]]);

    // Around the loop the other way.
    let paths = net.paths_to(e, m, Backward);
    assert_eq!(ids(&paths), vec![vec![e.0, m.0]]);
}

#[test]
fn marking_expands_each_state_at_most_once() {
    let (net, [e, _, _, _, _, m]) = branching_loop();
    let mut finder = PathFinder::new(&net);
    for (from, to, dir) in [(e, m, Forward), (e, m, Backward), (m, e, Forward)] {
        finder.paths_to(from, to, dir);
        assert!(
            finder.expanded_count() <= net.len() as u64,
            "{from}->{to} expanded {} states on {} tracks",
            finder.expanded_count(),
            net.len()
        );
    }
}

#[test]
fn crossing_pairs_diagonals() {
    let (net, [c, p1, p2, q1, q2]) = figure_eight();

    // With the running sense: in over the left inlet, out over the right
    // outlet.
    let paths = net.paths_to(p2, p1, Forward);
    assert_eq!(ids(&paths), vec![vec![c.0, p1.0, p2.0]]);

    // Against it: back in over an outlet, out over the opposite inlet.
    let paths = net.paths_to(p1, p2, Backward);
    assert_eq!(ids(&paths), vec![vec![c.0, p1.0, p2.0]]);

    // The diagonals never transfer between the two circles.
    assert_eq!(net.paths_to(p1, q1, Forward).count(), 0);
    assert_eq!(net.paths_to(q1, p1, Forward).count(), 0);
    assert_eq!(net.paths_to(q1, q2, Forward).count(), 1);
}

#[test]
fn invalid_network_refuses_every_search() {
    let mut b = NetworkBuilder::new();
    let e = b.block("e", 0);
    let t = b.turnout("t", 0, 0);
    b.connect(e, Outlet, t, Inlet).expect("free");
    let net = b.finalize();
    assert!(!net.is_valid());

    assert_eq!(net.paths_to(e, t, Forward).count(), 0);
    assert_eq!(net.paths_to(t, e, Backward).count(), 0);
    // Even the trivial query is refused.
    assert_eq!(net.paths_to(e, e, Forward).count(), 0);
}

/// A small yard in the shape of the layouts this crate is written for: a
/// closed running loop with two turnouts and their stub sidings.
#[test]
fn yard_loop_with_sidings() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut b = NetworkBuilder::new();
    let o1 = b.block("o1", 1200);
    let t1 = b.turnout("t1", 400, 400);
    let o2 = b.block("o2", 900);
    let t2 = b.turnout("t2", 400, 400);
    let o3 = b.block("o3", 1500);
    let g1 = b.deadend("g1", 600);
    let g2 = b.deadend("g2", 600);
    b.connect(o1, Outlet, t1, Inlet).expect("free");
    b.connect(t1, LeftOutlet, o2, Inlet).expect("free");
    b.connect(t1, RightOutlet, g1, Outlet).expect("free");
    b.connect(o2, Outlet, t2, Inlet).expect("free");
    b.connect(t2, LeftOutlet, o3, Inlet).expect("free");
    b.connect(t2, RightOutlet, g2, Outlet).expect("free");
    b.connect(o3, Outlet, o1, Inlet).expect("free");
    let net = b.finalize();
    assert!(net.is_valid());

    let mut finder = PathFinder::new(&net);

    // Around the loop, past both siding switches.
    let paths = finder.paths_to(o1, o3, Forward);
    assert_eq!(ids(&paths), vec![vec![o1.0, t1.0, o2.0, t2.0, o3.0]]);

    // Into a siding.
    let paths = finder.paths_to(o1, g2, Forward);
    assert_eq!(ids(&paths), vec![vec![o1.0, t1.0, o2.0, t2.0, g2.0]]);

    // Out of the siding, against the running sense.
    let paths = finder.paths_to(g2, o1, Backward);
    assert_eq!(ids(&paths), vec![vec![o1.0, t1.0, o2.0, t2.0, g2.0]]);

    // The stub points away from the loop in its own forward sense.
    assert_eq!(finder.paths_to(g2, o1, Forward).count(), 0);

    assert!(finder.expanded_count() <= net.len() as u64);
}

#[test]
fn sampled_rings_route_and_terminate() {
    use crate::net::rand::{draw_ring_layout, ReplayToken, RingCfg};

    let cfg = RingCfg {
        blocks: 10,
        sidings: 3,
        ..RingCfg::default()
    };
    for index in 0..4 {
        let net = draw_ring_layout(cfg, ReplayToken { seed: 99, index }).finalize();
        assert!(net.is_valid());
        let mut finder = PathFinder::new(&net);
        // Loop blocks hold the low ids; any pair is connected both ways
        // around a ring.
        let from = TrackId(0);
        let to = TrackId((cfg.blocks / 2) as u16);
        assert!(finder.paths_to(from, to, Forward).count() >= 1);
        assert!(finder.paths_to(from, to, Backward).count() >= 1);
        assert!(finder.expanded_count() <= net.len() as u64);
    }
}
