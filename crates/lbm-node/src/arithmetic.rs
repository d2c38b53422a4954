//! Elementwise algebra on node distributions.
//!
//! Operands must share `(D, N)`; anything else does not type-check. Negative
//! populations are valid inputs and outputs.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::distribution::DensityDistribution;
use crate::scalar::Scalar;

/// `result[i] = a[i] + b[i]`.
pub fn add<const D: usize, const N: usize, S: Scalar>(
    a: &DensityDistribution<D, N, S>,
    b: &DensityDistribution<D, N, S>,
) -> DensityDistribution<D, N, S> {
    let (a, b) = (a.as_array(), b.as_array());
    DensityDistribution::from_array(std::array::from_fn(|i| a[i] + b[i]))
}

/// `result[i] = a[i] - b[i]`.
pub fn subtract<const D: usize, const N: usize, S: Scalar>(
    a: &DensityDistribution<D, N, S>,
    b: &DensityDistribution<D, N, S>,
) -> DensityDistribution<D, N, S> {
    let (a, b) = (a.as_array(), b.as_array());
    DensityDistribution::from_array(std::array::from_fn(|i| a[i] - b[i]))
}

impl<const D: usize, const N: usize, S: Scalar> Add for DensityDistribution<D, N, S> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        add(&self, &rhs)
    }
}

impl<const D: usize, const N: usize, S: Scalar> Sub for DensityDistribution<D, N, S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        subtract(&self, &rhs)
    }
}

impl<const D: usize, const N: usize, S: Scalar> AddAssign for DensityDistribution<D, N, S> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.iter_mut().zip(rhs) {
            *a += b;
        }
    }
}

impl<const D: usize, const N: usize, S: Scalar> SubAssign for DensityDistribution<D, N, S> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.iter_mut().zip(rhs) {
            *a -= b;
        }
    }
}

impl<const D: usize, const N: usize, S: Scalar> Neg for DensityDistribution<D, N, S> {
    type Output = Self;

    fn neg(self) -> Self {
        DensityDistribution::from_array(self.into_array().map(|v| -v))
    }
}

/// Uniform scaling, e.g. for relaxation `f - (f - feq) * (1 / tau)`.
impl<const D: usize, const N: usize, S: Scalar> Mul<S> for DensityDistribution<D, N, S> {
    type Output = Self;

    fn mul(self, rhs: S) -> Self {
        DensityDistribution::from_array(self.into_array().map(|v| v * rhs))
    }
}

impl<const D: usize, const N: usize, S: Scalar> MulAssign<S> for DensityDistribution<D, N, S> {
    fn mul_assign(&mut self, rhs: S) {
        for v in self.iter_mut() {
            *v = *v * rhs;
        }
    }
}
