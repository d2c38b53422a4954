//! Stencil description: discrete velocities and quadrature weights.
//!
//! A stencil is a zero-sized type implementing [`LatticeGeometry<D, N>`] for exactly
//! one `(D, N)` pair, so handing a distribution of the wrong shape to a moment
//! function fails to compile. Tables are checked during constant evaluation with
//! [`check_geometry`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;

/// Exact rational quadrature weight `num / den`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Weight {
    pub num: u32,
    pub den: u32,
}

impl Weight {
    pub const fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }

    /// Weight as a scalar value.
    #[inline]
    pub fn to_scalar<S: Scalar>(self) -> S {
        S::from_ratio(self.num, self.den)
    }

    pub fn to_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/// Compile-time description of a velocity set.
///
/// `DIRECTIONS[0]` must be the rest vector and the weights must sum to one exactly.
pub trait LatticeGeometry<const D: usize, const N: usize>:
    Copy + Default + fmt::Debug + Send + Sync + 'static
{
    /// Conventional name, e.g. `"D2Q9"`.
    const NAME: &'static str;

    /// Discrete velocities e_i.
    const DIRECTIONS: [[i32; D]; N];

    /// Quadrature weights w_i.
    const WEIGHTS: [Weight; N];

    /// Opposite direction indices for bounce-back.
    const OPPOSITE: [usize; N] = opposite_table(&Self::DIRECTIONS);

    #[inline]
    fn dimension(&self) -> usize {
        D
    }

    #[inline]
    fn size(&self) -> usize {
        N
    }

    /// Weights converted to the scalar type, in direction order.
    fn weights<S: Scalar>(&self) -> [S; N] {
        std::array::from_fn(|i| Self::WEIGHTS[i].to_scalar())
    }

    /// Direction `i` converted to the scalar type.
    ///
    /// # Panics
    /// Panics if `i >= N`.
    fn direction<S: Scalar>(&self, i: usize) -> [S; D] {
        let e = Self::DIRECTIONS[i];
        std::array::from_fn(|k| S::from_component(e[k]))
    }

    /// Index of the direction pointing opposite to `i`.
    ///
    /// # Panics
    /// Panics if `i >= N`.
    #[inline]
    fn opposite(&self, i: usize) -> usize {
        Self::OPPOSITE[i]
    }
}

// ---------------------------------------------------------------------------
// Constant-evaluated validation
// ---------------------------------------------------------------------------

const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Exact rational sum of the weights, reduced, as `(num, den)`.
///
/// Returns `None` if a denominator is zero or the sum does not fit in `u64`.
pub const fn weight_sum(weights: &[Weight]) -> Option<(u64, u64)> {
    let mut num: u64 = 0;
    let mut den: u64 = 1;
    let mut i = 0;
    while i < weights.len() {
        let w = weights[i];
        if w.den == 0 {
            return None;
        }
        let scaled = match num.checked_mul(w.den as u64) {
            Some(v) => v,
            None => return None,
        };
        let added = match (w.num as u64).checked_mul(den) {
            Some(v) => v,
            None => return None,
        };
        num = match scaled.checked_add(added) {
            Some(v) => v,
            None => return None,
        };
        den = match den.checked_mul(w.den as u64) {
            Some(v) => v,
            None => return None,
        };
        let g = gcd(num, den);
        if g > 1 {
            num /= g;
            den /= g;
        }
        i += 1;
    }
    Some((num, den))
}

/// Whether the weights add up to exactly one.
pub const fn weights_sum_to_one(weights: &[Weight]) -> bool {
    match weight_sum(weights) {
        Some((num, den)) => num == den,
        None => false,
    }
}

const fn is_opposite<const D: usize>(a: &[i32; D], b: &[i32; D]) -> bool {
    let mut k = 0;
    while k < D {
        if a[k] != -b[k] {
            return false;
        }
        k += 1;
    }
    true
}

const fn is_rest<const D: usize>(e: &[i32; D]) -> bool {
    let mut k = 0;
    while k < D {
        if e[k] != 0 {
            return false;
        }
        k += 1;
    }
    true
}

/// Opposite-direction table for `directions`.
///
/// # Panics
/// Panics (at compile time when used in a constant) if some direction has no
/// opposite in the set.
pub const fn opposite_table<const D: usize, const N: usize>(
    directions: &[[i32; D]; N],
) -> [usize; N] {
    let mut table = [0usize; N];
    let mut i = 0;
    while i < N {
        let mut j = 0;
        let mut found = false;
        while j < N {
            if is_opposite(&directions[i], &directions[j]) {
                table[i] = j;
                found = true;
                break;
            }
            j += 1;
        }
        assert!(found, "direction without opposite in stencil");
        i += 1;
    }
    table
}

/// Validate a stencil table during constant evaluation.
///
/// ```
/// use lbm_node::lattice::{check_geometry, Weight};
///
/// const _: () = check_geometry(
///     &[[0], [1], [-1]],
///     &[Weight::new(2, 3), Weight::new(1, 6), Weight::new(1, 6)],
/// );
/// ```
pub const fn check_geometry<const D: usize, const N: usize>(
    directions: &[[i32; D]; N],
    weights: &[Weight; N],
) {
    assert!(D > 0, "stencil dimension must be positive");
    assert!(N > 0, "stencil must have at least one direction");
    assert!(is_rest(&directions[0]), "direction 0 must be the rest vector");
    assert!(weights_sum_to_one(weights), "stencil weights must sum to one");

    let mut i = 0;
    while i < N {
        let mut j = i + 1;
        while j < N {
            let mut same = true;
            let mut k = 0;
            while k < D {
                if directions[i][k] != directions[j][k] {
                    same = false;
                }
                k += 1;
            }
            assert!(!same, "duplicate direction in stencil");
            j += 1;
        }
        i += 1;
    }

    let _ = opposite_table(directions);
}
