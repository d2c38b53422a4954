//! D1Q3 velocity set: rest, right, left.

use crate::distribution::DensityDistribution;
use crate::lattice::{check_geometry, LatticeGeometry, Weight};

/// D1Q3 lattice model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct D1Q3;

/// Populations of one D1Q3 node.
pub type D1Q3Distribution<S> = DensityDistribution<1, 3, S>;

impl LatticeGeometry<1, 3> for D1Q3 {
    const NAME: &'static str = "D1Q3";

    const DIRECTIONS: [[i32; 1]; 3] = [[0], [1], [-1]];

    const WEIGHTS: [Weight; 3] = [Weight::new(2, 3), Weight::new(1, 6), Weight::new(1, 6)];
}

const _: () = check_geometry(
    &<D1Q3 as LatticeGeometry<1, 3>>::DIRECTIONS,
    &<D1Q3 as LatticeGeometry<1, 3>>::WEIGHTS,
);
