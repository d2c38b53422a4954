//! Fixed-size population array of a single lattice node.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{LbmError, Result};
use crate::scalar::Scalar;

/// Populations f_i of one node of a `D`-dimensional, `N`-velocity lattice.
///
/// Entry `i` belongs to direction `i` of the matching [`LatticeGeometry`].
///
/// [`LatticeGeometry`]: crate::lattice::LatticeGeometry
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct DensityDistribution<const D: usize, const N: usize, S> {
    values: [S; N],
}

impl<const D: usize, const N: usize, S: Scalar> DensityDistribution<D, N, S> {
    /// All populations zero.
    pub fn new() -> Self {
        Self {
            values: [S::zero(); N],
        }
    }

    pub const fn from_array(values: [S; N]) -> Self {
        Self { values }
    }

    /// Copy exactly `N` values in direction order.
    pub fn from_slice(values: &[S]) -> Result<Self> {
        let values: [S; N] = values.try_into().map_err(|_| LbmError::LengthMismatch {
            expected: N,
            actual: values.len(),
        })?;
        Ok(Self { values })
    }

    /// Collect exactly `N` values from an iterator.
    ///
    /// Pulls at most `N + 1` items, so an over-long or endless iterator fails with
    /// [`LbmError::TooManyValues`] instead of being drained.
    pub fn try_from_iter<I: IntoIterator<Item = S>>(iter: I) -> Result<Self> {
        let mut values = [S::zero(); N];
        let mut iter = iter.into_iter();
        for (i, slot) in values.iter_mut().enumerate() {
            *slot = iter.next().ok_or(LbmError::LengthMismatch {
                expected: N,
                actual: i,
            })?;
        }
        if iter.next().is_some() {
            return Err(LbmError::TooManyValues { expected: N });
        }
        Ok(Self { values })
    }

    /// Spatial dimension `D`.
    #[inline]
    pub const fn dimension(&self) -> usize {
        D
    }

    /// Number of populations `N`.
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// Population at direction `index`.
    pub fn get(&self, index: usize) -> Result<S> {
        self.values
            .get(index)
            .copied()
            .ok_or(LbmError::IndexOutOfRange { index, size: N })
    }

    /// Replace the population at direction `index`.
    pub fn set(&mut self, index: usize, value: S) -> Result<()> {
        let slot = self
            .values
            .get_mut(index)
            .ok_or(LbmError::IndexOutOfRange { index, size: N })?;
        *slot = value;
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.values.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, S> {
        self.values.iter_mut()
    }

    #[inline]
    pub fn as_slice(&self) -> &[S] {
        &self.values
    }

    #[inline]
    pub fn as_array(&self) -> &[S; N] {
        &self.values
    }

    #[inline]
    pub fn into_array(self) -> [S; N] {
        self.values
    }
}

impl<const D: usize, const N: usize, S: Scalar> Default for DensityDistribution<D, N, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const D: usize, const N: usize, S: Scalar> From<[S; N]> for DensityDistribution<D, N, S> {
    fn from(values: [S; N]) -> Self {
        Self::from_array(values)
    }
}

impl<const D: usize, const N: usize, S: Scalar> TryFrom<&[S]> for DensityDistribution<D, N, S> {
    type Error = LbmError;

    fn try_from(values: &[S]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl<const D: usize, const N: usize, S: Scalar> TryFrom<Vec<S>> for DensityDistribution<D, N, S> {
    type Error = LbmError;

    fn try_from(values: Vec<S>) -> Result<Self> {
        Self::from_slice(&values)
    }
}

impl<const D: usize, const N: usize, S> Index<usize> for DensityDistribution<D, N, S> {
    type Output = S;

    #[inline]
    fn index(&self, index: usize) -> &S {
        &self.values[index]
    }
}

impl<const D: usize, const N: usize, S> IndexMut<usize> for DensityDistribution<D, N, S> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut S {
        &mut self.values[index]
    }
}

impl<const D: usize, const N: usize, S> IntoIterator for DensityDistribution<D, N, S> {
    type Item = S;
    type IntoIter = std::array::IntoIter<S, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, const D: usize, const N: usize, S> IntoIterator for &'a DensityDistribution<D, N, S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<'a, const D: usize, const N: usize, S> IntoIterator
    for &'a mut DensityDistribution<D, N, S>
{
    type Item = &'a mut S;
    type IntoIter = std::slice::IterMut<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter_mut()
    }
}

// SAFETY: `repr(transparent)` over `[S; N]`, which is `Zeroable`/`Pod` when `S` is.
unsafe impl<const D: usize, const N: usize, S: Zeroable> Zeroable for DensityDistribution<D, N, S> {}
unsafe impl<const D: usize, const N: usize, S: Pod> Pod for DensityDistribution<D, N, S> {}

// ---------------------------------------------------------------------------
// Serde: a plain sequence of N numbers
// ---------------------------------------------------------------------------

impl<const D: usize, const N: usize, S> Serialize for DensityDistribution<D, N, S>
where
    S: Scalar + Serialize,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error> {
        let mut seq = serializer.serialize_seq(Some(N))?;
        for value in &self.values {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

struct DistributionVisitor<const D: usize, const N: usize, S>(PhantomData<S>);

impl<'de, const D: usize, const N: usize, S> Visitor<'de> for DistributionVisitor<D, N, S>
where
    S: Scalar + Deserialize<'de>,
{
    type Value = DensityDistribution<D, N, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a sequence of {} population values", N)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error> {
        let mut values = [S::zero(); N];
        for (i, slot) in values.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
        }
        let mut extra = 0;
        while seq.next_element::<de::IgnoredAny>()?.is_some() {
            extra += 1;
        }
        if extra > 0 {
            return Err(de::Error::invalid_length(N + extra, &self));
        }
        Ok(DensityDistribution { values })
    }
}

impl<'de, const D: usize, const N: usize, S> Deserialize<'de> for DensityDistribution<D, N, S>
where
    S: Scalar + Deserialize<'de>,
{
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> std::result::Result<Self, De::Error> {
        deserializer.deserialize_seq(DistributionVisitor(PhantomData))
    }
}
