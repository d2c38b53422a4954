//! D2Q5 velocity set.
//!
//! Rest plus the four nearest neighbours:
//! ```text
//!       2
//!       |
//!   3 - 0 - 1
//!       |
//!       4
//! ```
//! Used mostly for advection-diffusion of passive scalars.

use crate::distribution::DensityDistribution;
use crate::lattice::{check_geometry, LatticeGeometry, Weight};

/// Dimension of the D2Q5 stencil.
pub const D2Q5_DIMENSION: usize = 2;
/// Population count of the D2Q5 stencil.
pub const D2Q5_SIZE: usize = 5;

/// D2Q5 lattice model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct D2Q5;

/// Populations of one D2Q5 node.
pub type D2Q5Distribution<S> = DensityDistribution<D2Q5_DIMENSION, D2Q5_SIZE, S>;

impl LatticeGeometry<D2Q5_DIMENSION, D2Q5_SIZE> for D2Q5 {
    const NAME: &'static str = "D2Q5";

    const DIRECTIONS: [[i32; 2]; 5] = [
        [0, 0],  // 0: rest
        [1, 0],  // 1: east
        [0, 1],  // 2: north
        [-1, 0], // 3: west
        [0, -1], // 4: south
    ];

    const WEIGHTS: [Weight; 5] = [
        Weight::new(1, 3),
        Weight::new(1, 6),
        Weight::new(1, 6),
        Weight::new(1, 6),
        Weight::new(1, 6),
    ];
}

const _: () = check_geometry(
    &<D2Q5 as LatticeGeometry<2, 5>>::DIRECTIONS,
    &<D2Q5 as LatticeGeometry<2, 5>>::WEIGHTS,
);
