//! Floating-point scalar abstraction for population values.
//!
//! Sealed: only `f32` and `f64` implement [`Scalar`].

use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{AddAssign, SubAssign};

use bytemuck::Pod;
use num_traits::Float;

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Scalar type of a population value.
pub trait Scalar:
    private::Sealed
    + Float
    + Pod
    + AddAssign
    + SubAssign
    + Sum
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// Machine epsilon of the type.
    const EPSILON: Self;

    /// Convert a rational `num / den`.
    ///
    /// The quotient is formed in `f64` and then narrowed, so `f32` weights carry the
    /// same rounding as a literal `4.0 / 9.0` assigned to an `f32`.
    fn from_ratio(num: u32, den: u32) -> Self;

    /// Convert a lattice direction component.
    fn from_component(c: i32) -> Self;
}

impl Scalar for f32 {
    const EPSILON: f32 = f32::EPSILON;

    #[inline]
    fn from_ratio(num: u32, den: u32) -> Self {
        (f64::from(num) / f64::from(den)) as f32
    }

    #[inline]
    fn from_component(c: i32) -> Self {
        c as f32
    }
}

impl Scalar for f64 {
    const EPSILON: f64 = f64::EPSILON;

    #[inline]
    fn from_ratio(num: u32, den: u32) -> Self {
        f64::from(num) / f64::from(den)
    }

    #[inline]
    fn from_component(c: i32) -> Self {
        f64::from(c)
    }
}
