//! Node-level building blocks for the lattice Boltzmann method (LBM).
//!
//! A [`DensityDistribution`] holds the populations of one lattice node. A stencil
//! ([`D2Q9`], [`D3Q19`], ...) gives them physical meaning through its discrete
//! velocities and quadrature weights, and the moment functions turn them into
//! density, momentum and velocity. Shapes are const generics, so pairing a D2Q5
//! node with the D2Q9 stencil is a compile error.
//!
//! # Example
//!
//! ```
//! use lbm_node::{compute_density, compute_momentum, compute_velocity, D2Q9, D2Q9Distribution};
//!
//! let mut f = D2Q9Distribution::<f64>::new();
//! f[0] = 0.4;
//! f[1] = 0.3; // east
//! f[3] = 0.1; // west
//!
//! let rho = compute_density(D2Q9, &f);
//! let u = compute_velocity(rho, compute_momentum(D2Q9, &f));
//! assert!((rho - 0.8).abs() < 1e-12);
//! assert!((u[0] - 0.25).abs() < 1e-12);
//! assert_eq!(u[1], 0.0);
//! ```

pub mod arithmetic;
pub mod config;
pub mod d1q3;
pub mod d2q5;
pub mod d2q9;
pub mod d3q15;
pub mod d3q19;
pub mod d3q27;
pub mod distribution;
pub mod equilibrium;
pub mod error;
pub mod lattice;
pub mod moments;
pub mod scalar;

pub use arithmetic::{add, subtract};
pub use config::{LatticeDescriptor, StencilKind};
pub use d1q3::{D1Q3Distribution, D1Q3};
pub use d2q5::{D2Q5Distribution, D2Q5, D2Q5_DIMENSION, D2Q5_SIZE};
pub use d2q9::{D2Q9Distribution, D2Q9, D2Q9_DIMENSION, D2Q9_SIZE};
pub use d3q15::{D3Q15Distribution, D3Q15};
pub use d3q19::{D3Q19Distribution, D3Q19};
pub use d3q27::{D3Q27Distribution, D3Q27};
pub use distribution::DensityDistribution;
pub use equilibrium::equilibrium;
pub use error::{LbmError, Result};
pub use lattice::{check_geometry, LatticeGeometry, Weight};
pub use moments::{
    compute_density, compute_momentum, compute_momentum_vector, compute_velocity,
    lattice_weights, Macroscopic,
};
pub use scalar::Scalar;

/// Lattice sound speed: c_s = 1/sqrt(3)
pub const C_S: f64 = 0.577350269189626;

/// Lattice sound speed squared
pub const C_S_SQ: f64 = 1.0 / 3.0;
