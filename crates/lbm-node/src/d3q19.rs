//! D3Q19 velocity set.
//!
//! Nineteen velocity directions on 3D cubic lattice:
//! - 1 rest (0)
//! - 6 face-centered (±x, ±y, ±z)
//! - 12 edge-centered (±x±y, ±y±z, ±z±x)
//!
//! Opposite directions sit next to each other, so `OPPOSITE` swaps odd/even pairs.

use crate::distribution::DensityDistribution;
use crate::lattice::{check_geometry, LatticeGeometry, Weight};

/// D3Q19 lattice model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct D3Q19;

/// Populations of one D3Q19 node.
pub type D3Q19Distribution<S> = DensityDistribution<3, 19, S>;

const FACE: Weight = Weight::new(1, 18);
const EDGE: Weight = Weight::new(1, 36);

impl LatticeGeometry<3, 19> for D3Q19 {
    const NAME: &'static str = "D3Q19";

    const DIRECTIONS: [[i32; 3]; 19] = [
        [0, 0, 0], // 0: rest
        [1, 0, 0], // 1-6: face
        [-1, 0, 0],
        [0, 1, 0],
        [0, -1, 0],
        [0, 0, 1],
        [0, 0, -1],
        [1, 1, 0], // 7-18: edge
        [-1, -1, 0],
        [1, -1, 0],
        [-1, 1, 0],
        [1, 0, 1],
        [-1, 0, -1],
        [1, 0, -1],
        [-1, 0, 1],
        [0, 1, 1],
        [0, -1, -1],
        [0, 1, -1],
        [0, -1, 1],
    ];

    const WEIGHTS: [Weight; 19] = [
        Weight::new(1, 3),
        FACE,
        FACE,
        FACE,
        FACE,
        FACE,
        FACE,
        EDGE,
        EDGE,
        EDGE,
        EDGE,
        EDGE,
        EDGE,
        EDGE,
        EDGE,
        EDGE,
        EDGE,
        EDGE,
        EDGE,
    ];
}

const _: () = check_geometry(
    &<D3Q19 as LatticeGeometry<3, 19>>::DIRECTIONS,
    &<D3Q19 as LatticeGeometry<3, 19>>::WEIGHTS,
);
