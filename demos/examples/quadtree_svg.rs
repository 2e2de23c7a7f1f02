// Copyright 2025 the Orthant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render a quadtree as SVG.
//!
//! Walks the tree, stroking every node's bounds with Kurbo paths and plotting the points
//! each node holds. The query circle and its hits are drawn on top. Set `RUST_LOG=trace`
//! to watch the subdivisions.
//!
//! Run:
//! - `cargo run -p orthant_demos --example quadtree_svg > quadtree.svg`

use std::fmt::Write as _;

use kurbo::{Circle as KCircle, Shape};
use orthant_tree::{Area, Circle, Quadtree, Rectangle, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIDE: f64 = 512.0;
const TOLERANCE: f64 = 0.1;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut tree = Quadtree::with_capacity(Rectangle::new(0.0, 0.0, SIDE, SIDE)?, 4)?;
    // Two clusters and some background noise.
    for (cx, cy, spread, n) in [(140.0, 150.0, 60.0, 120), (380.0, 330.0, 40.0, 80)] {
        for _ in 0..n {
            let p = Vec2::new(
                cx + rng.gen_range(-spread..spread),
                cy + rng.gen_range(-spread..spread),
            );
            if let Err(e) = tree.insert(p) {
                log::warn!("skipped {:?}: {e}", e.point());
            }
        }
    }
    for _ in 0..60 {
        let p = Vec2::new(rng.gen_range(0.0..SIDE), rng.gen_range(0.0..SIDE));
        tree.insert(p).map_err(|e| format!("{e}: {:?}", e.point()))?;
    }

    let lens = Circle::new(300.0, 260.0, 90.0)?;
    let hits = tree.query(lens);
    log::info!("{} of {} points inside {lens:?}", hits.len(), tree.len());

    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {SIDE} {SIDE}">"#
    )?;
    // `walk` takes a plain closure, so the first write error is held and raised after.
    let mut drawn = Ok(());
    tree.walk(|node, depth| {
        if drawn.is_ok() {
            drawn = draw_node(&mut svg, node, depth);
        }
    });
    drawn?;
    let ring = Area::from(lens).to_path(TOLERANCE).to_svg();
    writeln!(svg, r#"<path d="{ring}" fill="none" stroke="crimson"/>"#)?;
    for p in hits {
        let dot = KCircle::new((p.x, p.y), 2.5).to_path(TOLERANCE).to_svg();
        writeln!(svg, r#"<path d="{dot}" fill="crimson"/>"#)?;
    }
    writeln!(svg, "</svg>")?;

    print!("{svg}");
    Ok(())
}

/// Outline a node's bounds, fading with depth, and dot the points it holds.
fn draw_node(
    svg: &mut String,
    node: &Quadtree<f64, Vec2<f64>>,
    depth: usize,
) -> std::fmt::Result {
    let outline = Area::from(*node.bounds()).to_path(TOLERANCE).to_svg();
    let opacity = 1.0 / (1.0 + depth as f64);
    writeln!(
        svg,
        r#"<path d="{outline}" fill="none" stroke="gray" stroke-opacity="{opacity:.2}"/>"#
    )?;
    for p in node.local_points() {
        let dot = KCircle::new((p.x, p.y), 1.5).to_path(TOLERANCE).to_svg();
        writeln!(svg, r#"<path d="{dot}" fill="black"/>"#)?;
    }
    Ok(())
}
