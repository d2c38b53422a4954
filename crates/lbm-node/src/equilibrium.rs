//! Second-order equilibrium distribution.
//!
//! f_i^eq = w_i ρ [1 + 3(e_i·u) + 9/2(e_i·u)² - 3/2(u·u)]
//!
//! The coefficients assume c_s² = 1/3, which holds for every stencil in this crate.

use crate::distribution::DensityDistribution;
use crate::lattice::LatticeGeometry;
use crate::scalar::Scalar;

/// Equilibrium populations for density `rho` and velocity `u`.
///
/// ```
/// use lbm_node::{equilibrium, D2Q9, D2Q9Distribution};
///
/// let feq: D2Q9Distribution<f64> = equilibrium(D2Q9, 1.0, [0.0, 0.0]);
/// assert_eq!(feq[0], 4.0 / 9.0);
/// ```
pub fn equilibrium<L, const D: usize, const N: usize, S>(
    lattice: L,
    rho: S,
    u: [S; D],
) -> DensityDistribution<D, N, S>
where
    L: LatticeGeometry<D, N>,
    S: Scalar,
{
    let three = S::from_ratio(3, 1);
    let nine_halves = S::from_ratio(9, 2);
    let three_halves = S::from_ratio(3, 2);

    let uu: S = u.iter().map(|&uk| uk * uk).sum();
    let w: [S; N] = lattice.weights();

    DensityDistribution::from_array(std::array::from_fn(|i| {
        let e = lattice.direction::<S>(i);
        let mut eu = S::zero();
        for (ek, uk) in e.iter().zip(u.iter()) {
            eu += *ek * *uk;
        }
        w[i] * rho * (S::one() + three * eu + nine_halves * eu * eu - three_halves * uu)
    }))
}
