//! Macroscopic moments of a node distribution.
//!
//! Sums run in direction-index order so results are reproducible bit-for-bit.

use nalgebra as na;
use serde::{Deserialize, Serialize};

use crate::distribution::DensityDistribution;
use crate::lattice::LatticeGeometry;
use crate::scalar::Scalar;

/// Zeroth moment: ρ = Σ f_i.
pub fn compute_density<L, const D: usize, const N: usize, S>(
    _lattice: L,
    f: &DensityDistribution<D, N, S>,
) -> S
where
    L: LatticeGeometry<D, N>,
    S: Scalar,
{
    let mut rho = S::zero();
    for &fi in f {
        rho += fi;
    }
    rho
}

/// First moment: ρu = Σ f_i e_i.
pub fn compute_momentum<L, const D: usize, const N: usize, S>(
    _lattice: L,
    f: &DensityDistribution<D, N, S>,
) -> [S; D]
where
    L: LatticeGeometry<D, N>,
    S: Scalar,
{
    let mut m = [S::zero(); D];
    for (fi, e) in f.iter().zip(L::DIRECTIONS.iter()) {
        for (mk, &ek) in m.iter_mut().zip(e.iter()) {
            *mk += *fi * S::from_component(ek);
        }
    }
    m
}

/// Velocity u = ρu / ρ.
///
/// Zero density is not guarded: the components come out NaN or ±∞.
pub fn compute_velocity<const D: usize, S: Scalar>(density: S, momentum: [S; D]) -> [S; D] {
    momentum.map(|mk| mk / density)
}

/// Quadrature weights of the stencil `f` lives on.
pub fn lattice_weights<L, const D: usize, const N: usize, S>(
    lattice: L,
    _f: &DensityDistribution<D, N, S>,
) -> [S; N]
where
    L: LatticeGeometry<D, N>,
    S: Scalar,
{
    lattice.weights()
}

/// First moment as a nalgebra column vector.
pub fn compute_momentum_vector<L, const D: usize, const N: usize, S>(
    lattice: L,
    f: &DensityDistribution<D, N, S>,
) -> na::SVector<S, D>
where
    L: LatticeGeometry<D, N>,
    S: Scalar,
{
    na::SVector::from(compute_momentum(lattice, f))
}

/// Density, momentum and velocity of one node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macroscopic<S, const D: usize> {
    pub density: S,
    #[serde(with = "vector")]
    pub momentum: [S; D],
    #[serde(with = "vector")]
    pub velocity: [S; D],
}

impl<S: Scalar, const D: usize> Macroscopic<S, D> {
    pub fn from_distribution<L, const N: usize>(
        lattice: L,
        f: &DensityDistribution<D, N, S>,
    ) -> Self
    where
        L: LatticeGeometry<D, N>,
    {
        let density = compute_density(lattice, f);
        let momentum = compute_momentum(lattice, f);
        Self {
            density,
            momentum,
            velocity: compute_velocity(density, momentum),
        }
    }

    /// Kinetic energy density ½ρ|u|².
    pub fn kinetic_energy(&self) -> S {
        let uu: S = self.velocity.iter().map(|&u| u * u).sum();
        S::from_ratio(1, 2) * self.density * uu
    }
}

/// Serde adapter for `[S; D]` with arbitrary `D`.
mod vector {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serialize, Ser: Serializer, const D: usize>(
        v: &[S; D],
        serializer: Ser,
    ) -> Result<Ser::Ok, Ser::Error> {
        v.as_slice().serialize(serializer)
    }

    pub fn deserialize<'de, S, De, const D: usize>(deserializer: De) -> Result<[S; D], De::Error>
    where
        S: Deserialize<'de>,
        De: Deserializer<'de>,
    {
        let v = Vec::<S>::deserialize(deserializer)?;
        let len = v.len();
        v.try_into()
            .map_err(|_| <De::Error as Error>::invalid_length(len, &"a vector of the lattice dimension"))
    }
}
