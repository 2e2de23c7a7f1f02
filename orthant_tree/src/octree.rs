// Copyright 2025 the Orthant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Octrees: [`RegionTree`]s bounded by [`Box3`]es and queried with [`Volume`]s.

use orthant_shapes::{Box3, Position3, Scalar, Volume};

use crate::bounds::Bounds;
use crate::tree::RegionTree;

/// A region tree over 3D points, splitting each full node into eight octants.
pub type Octree<T, P> = RegionTree<Box3<T>, P>;

bitflags::bitflags! {
    /// One of the eight children of a divided octree node.
    ///
    /// A set flag selects the upper half along that axis, so [`Octant::empty`] is the
    /// minimum corner and [`Octant::all`] the maximum. The bits read as an integer are the
    /// child's index in [`RegionTree::children`], which is also the order inserts try them in.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Octant: u8 {
        /// Upper half along x.
        const X = 0b0000_0001;
        /// Upper half along y.
        const Y = 0b0000_0010;
        /// Upper half along z.
        const Z = 0b0000_0100;
    }
}

impl Octant {
    /// Position of this octant in a node's child list.
    pub const fn index(self) -> usize {
        self.bits() as usize
    }
}

impl<T, P> Bounds<P> for Box3<T>
where
    T: Scalar,
    P: Position3<T>,
{
    type Query = Volume<T>;
    type Split = [Self; 8];

    fn contains(&self, point: &P) -> bool {
        Self::contains(self, point)
    }

    fn intersects(&self, query: &Volume<T>) -> bool {
        Self::intersects(self, query)
    }

    fn query_contains(query: &Volume<T>, point: &P) -> bool {
        query.contains(point)
    }

    fn to_query(&self) -> Volume<T> {
        Volume::Box(*self)
    }

    fn split(&self) -> [Self; 8] {
        let half = self.half_extents();
        let lo = self.origin();
        let mid = lo + half;
        // Each axis is a (start, extent) pair for the lower and upper half. Upper halves
        // end exactly on this box's max edge.
        let xs = [(lo.x, half.x), (mid.x, T::reach(mid.x, self.max_x()))];
        let ys = [(lo.y, half.y), (mid.y, T::reach(mid.y, self.max_y()))];
        let zs = [(lo.z, half.z), (mid.z, T::reach(mid.z, self.max_z()))];
        let cell = |(x, width): (T, T), (y, height): (T, T), (z, depth): (T, T)| Self {
            x,
            y,
            z,
            width,
            height,
            depth,
        };
        // Indexed by `Octant` bits: x is bit 0, y bit 1, z bit 2.
        [
            cell(xs[0], ys[0], zs[0]),
            cell(xs[1], ys[0], zs[0]),
            cell(xs[0], ys[1], zs[0]),
            cell(xs[1], ys[1], zs[0]),
            cell(xs[0], ys[0], zs[1]),
            cell(xs[1], ys[0], zs[1]),
            cell(xs[0], ys[1], zs[1]),
            cell(xs[1], ys[1], zs[1]),
        ]
    }
}

impl<T, P> RegionTree<Box3<T>, P> {
    /// The child covering `octant`, or `None` if this node has not divided.
    pub fn child(&self, octant: Octant) -> Option<&Self> {
        self.children().get(octant.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InsertError;
    use alloc::vec::Vec;
    use orthant_shapes::{Sphere, Vec3};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn cube(x: f64, y: f64, z: f64, side: f64) -> Box3<f64> {
        Box3::new(x, y, z, side, side, side).unwrap()
    }

    #[test]
    fn capacity_overflow_divides_and_query_prunes() {
        let mut t = Octree::with_capacity(cube(0.0, 0.0, 0.0, 100.0), 2).unwrap();
        t.insert(Vec3::new(10.0, 10.0, 10.0)).unwrap();
        t.insert(Vec3::new(20.0, 20.0, 20.0)).unwrap();
        t.insert(Vec3::new(30.0, 30.0, 30.0)).unwrap();
        assert!(t.is_divided());
        assert_eq!(t.children().len(), 8);

        let found = t.query(cube(0.0, 0.0, 0.0, 25.0));
        assert_eq!(
            found,
            [&Vec3::new(10.0, 10.0, 10.0), &Vec3::new(20.0, 20.0, 20.0)]
        );
        assert_eq!(t.child(Octant::empty()).unwrap().len(), 1);
    }

    #[test]
    fn octant_bits_index_children() {
        let b = cube(0.0, 0.0, 0.0, 2.0);
        let cells = <Box3<f64> as Bounds<Vec3<f64>>>::split(&b);
        assert_eq!(cells[Octant::empty().index()], cube(0.0, 0.0, 0.0, 1.0));
        assert_eq!(cells[Octant::X.index()], cube(1.0, 0.0, 0.0, 1.0));
        assert_eq!(cells[Octant::Y.index()], cube(0.0, 1.0, 0.0, 1.0));
        assert_eq!(cells[(Octant::X | Octant::Y).index()], cube(1.0, 1.0, 0.0, 1.0));
        assert_eq!(cells[Octant::Z.index()], cube(0.0, 0.0, 1.0, 1.0));
        assert_eq!(cells[Octant::all().index()], cube(1.0, 1.0, 1.0, 1.0));

        // Every lattice point on a seam lands in exactly one cell.
        for x in [0.0, 1.0, 1.5] {
            for y in [0.0, 1.0, 1.5] {
                for z in [0.0, 1.0, 1.5] {
                    let claims = cells.iter().filter(|c| c.contains(&(x, y, z))).count();
                    assert_eq!(claims, 1, "({x}, {y}, {z})");
                }
            }
        }
    }

    #[test]
    fn out_of_bounds_depth_is_rejected() {
        let mut t = Octree::new(cube(0.0, 0.0, 0.0, 10.0));
        let p = Vec3::new(5.0, 5.0, 10.0);
        assert_eq!(t.insert(p), Err(InsertError::OutOfBounds(p)));
        assert!(t.is_empty());
    }

    #[test]
    fn point_near_far_edge_lands_in_far_child() {
        // 4.55 + 0.1 rounds below 4.45 + 0.2 on every axis.
        let mut t = Octree::with_capacity(cube(4.45, 4.45, 4.45, 0.2), 1).unwrap();
        t.insert(Vec3::new(4.45, 4.45, 4.45)).unwrap();

        let edge = 4.649_999_999_999_999_5;
        for (p, octant) in [
            (Vec3::new(edge, 4.45, 4.45), Octant::X),
            (Vec3::new(4.45, edge, 4.45), Octant::Y),
            (Vec3::new(4.45, 4.45, edge), Octant::Z),
            (Vec3::new(edge, edge, edge), Octant::all()),
        ] {
            assert!(t.bounds().contains(&p));
            assert_eq!(t.insert(p), Ok(()));
            assert_eq!(t.child(octant).unwrap().local_points(), [p]);
        }
        assert_eq!(t.len(), 5);

        let far = t.child(Octant::all()).unwrap().bounds();
        assert_eq!(far.max_x(), t.bounds().max_x());
        assert_eq!(far.max_y(), t.bounds().max_y());
        assert_eq!(far.max_z(), t.bounds().max_z());
    }

    #[test]
    fn sphere_query_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(5);
        let points: Vec<_> = (0..800)
            .map(|_| {
                (
                    rng.gen_range(0.0..32.0),
                    rng.gen_range(0.0..32.0),
                    rng.gen_range(0.0..32.0),
                )
            })
            .collect();
        let mut t = Octree::with_capacity(cube(0.0, 0.0, 0.0, 32.0), 4).unwrap();
        for p in &points {
            t.insert(*p).unwrap();
        }
        assert_eq!(t.len(), points.len());

        for _ in 0..40 {
            let s = Sphere::new(
                rng.gen_range(-4.0..36.0),
                rng.gen_range(-4.0..36.0),
                rng.gen_range(-4.0..36.0),
                rng.gen_range(0.0..12.0),
            )
            .unwrap();
            let found = t.query(s);
            assert!(found.iter().all(|p| s.contains(*p)));
            assert_eq!(found.len(), points.iter().filter(|p| s.contains(*p)).count());
        }
    }

    #[test]
    fn corner_sphere_prunes_node() {
        let mut t = Octree::with_capacity(cube(0.0, 0.0, 0.0, 10.0), 1).unwrap();
        t.insert(Vec3::new(9.0, 9.0, 9.0)).unwrap();

        // The root box is out of reach below 5 * sqrt(3).
        assert!(t.query(Sphere::new(15.0, 15.0, 15.0, 8.6).unwrap()).is_empty());
        // In reach, but the point is still farther than the radius.
        assert!(t.query(Sphere::new(15.0, 15.0, 15.0, 9.0).unwrap()).is_empty());
        assert_eq!(
            t.query(Sphere::new(15.0, 15.0, 15.0, 10.4).unwrap()).len(),
            1
        );
    }

    #[test]
    fn random_point_from_octree() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut t = Octree::with_capacity(cube(0.0, 0.0, 0.0, 2.0), 1).unwrap();
        assert!(t.random_point(&mut rng).is_none());
        t.insert([0.5, 0.5, 0.5]).unwrap();
        t.insert([1.5, 1.5, 1.5]).unwrap();
        let p = t.random_point(&mut rng).unwrap();
        assert!(*p == [0.5, 0.5, 0.5] || *p == [1.5, 1.5, 1.5]);
        assert_eq!(t.child(Octant::all()).unwrap().len(), 1);
    }
}
