//! D2Q9 velocity set.
//!
//! Nine velocity directions on 2D square lattice:
//! ```text
//!   6   2   5
//!    \  |  /
//!   3 - 0 - 1
//!    /  |  \
//!   7   4   8
//! ```

use crate::distribution::DensityDistribution;
use crate::lattice::{check_geometry, LatticeGeometry, Weight};

/// Dimension of the D2Q9 stencil.
pub const D2Q9_DIMENSION: usize = 2;
/// Population count of the D2Q9 stencil.
pub const D2Q9_SIZE: usize = 9;

/// D2Q9 lattice model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct D2Q9;

/// Populations of one D2Q9 node.
pub type D2Q9Distribution<S> = DensityDistribution<D2Q9_DIMENSION, D2Q9_SIZE, S>;

impl LatticeGeometry<D2Q9_DIMENSION, D2Q9_SIZE> for D2Q9 {
    const NAME: &'static str = "D2Q9";

    const DIRECTIONS: [[i32; 2]; 9] = [
        [0, 0],   // 0: rest
        [1, 0],   // 1: east
        [0, 1],   // 2: north
        [-1, 0],  // 3: west
        [0, -1],  // 4: south
        [1, 1],   // 5: northeast
        [-1, 1],  // 6: northwest
        [-1, -1], // 7: southwest
        [1, -1],  // 8: southeast
    ];

    const WEIGHTS: [Weight; 9] = [
        Weight::new(4, 9), // 0: rest
        Weight::new(1, 9), // 1-4: cardinal
        Weight::new(1, 9),
        Weight::new(1, 9),
        Weight::new(1, 9),
        Weight::new(1, 36), // 5-8: diagonal
        Weight::new(1, 36),
        Weight::new(1, 36),
        Weight::new(1, 36),
    ];
}

const _: () = check_geometry(
    &<D2Q9 as LatticeGeometry<2, 9>>::DIRECTIONS,
    &<D2Q9 as LatticeGeometry<2, 9>>::WEIGHTS,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_matches_bounce_back_table() {
        assert_eq!(<D2Q9 as LatticeGeometry<2, 9>>::OPPOSITE, [0, 3, 4, 1, 2, 7, 8, 5, 6]);
    }

    #[test]
    fn test_weights_equal_literature_values() {
        // Krüger et al., The Lattice Boltzmann Method (2017), table 3.1
        let w: [f64; 9] = D2Q9.weights();
        assert_eq!(
            w,
            [
                4.0 / 9.0,
                1.0 / 9.0,
                1.0 / 9.0,
                1.0 / 9.0,
                1.0 / 9.0,
                1.0 / 36.0,
                1.0 / 36.0,
                1.0 / 36.0,
                1.0 / 36.0
            ]
        );

        let w: [f32; 9] = D2Q9.weights();
        assert_eq!(w[0], (4.0_f64 / 9.0) as f32);
        assert_eq!(w[8], (1.0_f64 / 36.0) as f32);
    }

    #[test]
    fn test_direction_as_scalar() {
        let e: [f64; 2] = D2Q9.direction(7);
        assert_eq!(e, [-1.0, -1.0]);
        assert_eq!(D2Q9.dimension(), 2);
        assert_eq!(D2Q9.size(), 9);
    }
}
