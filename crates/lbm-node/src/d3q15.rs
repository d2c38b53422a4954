//! D3Q15 velocity set: rest, 6 faces, 8 corners.

use crate::distribution::DensityDistribution;
use crate::lattice::{check_geometry, LatticeGeometry, Weight};

/// D3Q15 lattice model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct D3Q15;

/// Populations of one D3Q15 node.
pub type D3Q15Distribution<S> = DensityDistribution<3, 15, S>;

const FACE: Weight = Weight::new(1, 9);
const CORNER: Weight = Weight::new(1, 72);

impl LatticeGeometry<3, 15> for D3Q15 {
    const NAME: &'static str = "D3Q15";

    const DIRECTIONS: [[i32; 3]; 15] = [
        [0, 0, 0], // 0: rest
        [1, 0, 0], // 1-6: face
        [-1, 0, 0],
        [0, 1, 0],
        [0, -1, 0],
        [0, 0, 1],
        [0, 0, -1],
        [1, 1, 1], // 7-14: corner
        [-1, -1, -1],
        [1, 1, -1],
        [-1, -1, 1],
        [1, -1, 1],
        [-1, 1, -1],
        [-1, 1, 1],
        [1, -1, -1],
    ];

    const WEIGHTS: [Weight; 15] = [
        Weight::new(2, 9),
        FACE,
        FACE,
        FACE,
        FACE,
        FACE,
        FACE,
        CORNER,
        CORNER,
        CORNER,
        CORNER,
        CORNER,
        CORNER,
        CORNER,
        CORNER,
    ];
}

const _: () = check_geometry(
    &<D3Q15 as LatticeGeometry<3, 15>>::DIRECTIONS,
    &<D3Q15 as LatticeGeometry<3, 15>>::WEIGHTS,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_pairs_are_adjacent() {
        assert_eq!(
            <D3Q15 as LatticeGeometry<3, 15>>::OPPOSITE,
            [0, 2, 1, 4, 3, 6, 5, 8, 7, 10, 9, 12, 11, 14, 13]
        );
    }
}
