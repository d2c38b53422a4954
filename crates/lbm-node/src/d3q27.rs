//! D3Q27 velocity set: the full 3×3×3 neighbourhood.

use crate::distribution::DensityDistribution;
use crate::lattice::{check_geometry, LatticeGeometry, Weight};

/// D3Q27 lattice model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct D3Q27;

/// Populations of one D3Q27 node.
pub type D3Q27Distribution<S> = DensityDistribution<3, 27, S>;

const FACE: Weight = Weight::new(2, 27);
const EDGE: Weight = Weight::new(1, 54);
const CORNER: Weight = Weight::new(1, 216);

impl LatticeGeometry<3, 27> for D3Q27 {
    const NAME: &'static str = "D3Q27";

    const DIRECTIONS: [[i32; 3]; 27] = [
        [0, 0, 0], // 0: rest
        [1, 0, 0], // 1-6: face
        [-1, 0, 0],
        [0, 1, 0],
        [0, -1, 0],
        [0, 0, 1],
        [0, 0, -1],
        [1, 1, 0], // 7-18: edge
        [-1, -1, 0],
        [1, 0, 1],
        [-1, 0, -1],
        [0, 1, 1],
        [0, -1, -1],
        [1, -1, 0],
        [-1, 1, 0],
        [1, 0, -1],
        [-1, 0, 1],
        [0, 1, -1],
        [0, -1, 1],
        [1, 1, 1], // 19-26: corner
        [-1, -1, -1],
        [1, 1, -1],
        [-1, -1, 1],
        [1, -1, 1],
        [-1, 1, -1],
        [-1, 1, 1],
        [1, -1, -1],
    ];

    const WEIGHTS: [Weight; 27] = [
        Weight::new(8, 27),
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
    &<D3Q27 as LatticeGeometry<3, 27>>::DIRECTIONS,
    &<D3Q27 as LatticeGeometry<3, 27>>::WEIGHTS,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_neighbour_appears_once() {
        let mut seen = [[[false; 3]; 3]; 3];
        for e in <D3Q27 as LatticeGeometry<3, 27>>::DIRECTIONS {
            let slot = &mut seen[(e[0] + 1) as usize][(e[1] + 1) as usize][(e[2] + 1) as usize];
            assert!(!*slot);
            *slot = true;
        }
        assert!(seen.iter().flatten().flatten().all(|&s| s));
    }
}
