//! Runtime stencil selection and serializable stencil tables.
//!
//! [`StencilKind`] names one of the built-in velocity sets, e.g. from a solver
//! configuration file. [`LatticeDescriptor`] carries the full table at runtime and
//! re-runs the compile-time checks on data loaded from JSON.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::d1q3::D1Q3;
use crate::d2q5::D2Q5;
use crate::d2q9::D2Q9;
use crate::d3q15::D3Q15;
use crate::d3q19::D3Q19;
use crate::d3q27::D3Q27;
use crate::error::{LbmError, Result};
use crate::lattice::{weight_sum, LatticeGeometry, Weight};

/// Built-in velocity sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StencilKind {
    #[serde(alias = "d1q3")]
    D1Q3,
    #[serde(alias = "d2q5")]
    D2Q5,
    #[serde(alias = "d2q9")]
    D2Q9,
    #[serde(alias = "d3q15")]
    D3Q15,
    #[serde(alias = "d3q19")]
    D3Q19,
    #[serde(alias = "d3q27")]
    D3Q27,
}

impl StencilKind {
    pub const ALL: [StencilKind; 6] = [
        StencilKind::D1Q3,
        StencilKind::D2Q5,
        StencilKind::D2Q9,
        StencilKind::D3Q15,
        StencilKind::D3Q19,
        StencilKind::D3Q27,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StencilKind::D1Q3 => D1Q3::NAME,
            StencilKind::D2Q5 => D2Q5::NAME,
            StencilKind::D2Q9 => D2Q9::NAME,
            StencilKind::D3Q15 => D3Q15::NAME,
            StencilKind::D3Q19 => D3Q19::NAME,
            StencilKind::D3Q27 => D3Q27::NAME,
        }
    }

    pub fn dimension(self) -> usize {
        match self {
            StencilKind::D1Q3 => 1,
            StencilKind::D2Q5 | StencilKind::D2Q9 => 2,
            StencilKind::D3Q15 | StencilKind::D3Q19 | StencilKind::D3Q27 => 3,
        }
    }

    pub fn size(self) -> usize {
        match self {
            StencilKind::D1Q3 => 3,
            StencilKind::D2Q5 => 5,
            StencilKind::D2Q9 => 9,
            StencilKind::D3Q15 => 15,
            StencilKind::D3Q19 => 19,
            StencilKind::D3Q27 => 27,
        }
    }

    /// Full direction/weight table of this stencil.
    pub fn descriptor(self) -> LatticeDescriptor {
        match self {
            StencilKind::D1Q3 => LatticeDescriptor::from_geometry::<_, 1, 3>(D1Q3),
            StencilKind::D2Q5 => LatticeDescriptor::from_geometry::<_, 2, 5>(D2Q5),
            StencilKind::D2Q9 => LatticeDescriptor::from_geometry::<_, 2, 9>(D2Q9),
            StencilKind::D3Q15 => LatticeDescriptor::from_geometry::<_, 3, 15>(D3Q15),
            StencilKind::D3Q19 => LatticeDescriptor::from_geometry::<_, 3, 19>(D3Q19),
            StencilKind::D3Q27 => LatticeDescriptor::from_geometry::<_, 3, 27>(D3Q27),
        }
    }
}

impl fmt::Display for StencilKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StencilKind {
    type Err = LbmError;

    fn from_str(s: &str) -> Result<Self> {
        StencilKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LbmError::UnknownStencil(s.to_string()))
    }
}

/// Runtime copy of a stencil table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatticeDescriptor {
    pub name: String,
    pub dimension: usize,
    pub directions: Vec<Vec<i32>>,
    pub weights: Vec<Weight>,
}

impl LatticeDescriptor {
    pub fn from_geometry<L, const D: usize, const N: usize>(_lattice: L) -> Self
    where
        L: LatticeGeometry<D, N>,
    {
        Self {
            name: L::NAME.to_string(),
            dimension: D,
            directions: L::DIRECTIONS.iter().map(|e| e.to_vec()).collect(),
            weights: L::WEIGHTS.to_vec(),
        }
    }

    /// Parse and validate a descriptor.
    pub fn from_json(json: &str) -> Result<Self> {
        let descriptor: Self = serde_json::from_str(json)?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn size(&self) -> usize {
        self.directions.len()
    }

    /// Same checks as [`check_geometry`](crate::lattice::check_geometry), reported as errors.
    pub fn validate(&self) -> Result<()> {
        match self.check() {
            Ok(()) => {
                log::debug!(
                    "stencil {} validated: D={}, Q={}",
                    self.name,
                    self.dimension,
                    self.size()
                );
                Ok(())
            }
            Err(reason) => {
                log::warn!("rejecting stencil {}: {}", self.name, reason);
                Err(LbmError::InvalidStencil(format!("{}: {}", self.name, reason)))
            }
        }
    }

    fn check(&self) -> std::result::Result<(), String> {
        if self.dimension == 0 {
            return Err("dimension must be positive".into());
        }
        if self.directions.is_empty() {
            return Err("no directions".into());
        }
        if self.weights.len() != self.directions.len() {
            return Err(format!(
                "{} weights for {} directions",
                self.weights.len(),
                self.directions.len()
            ));
        }
        if let Some(i) = self
            .directions
            .iter()
            .position(|e| e.len() != self.dimension)
        {
            return Err(format!(
                "direction {} has {} components, expected {}",
                i,
                self.directions[i].len(),
                self.dimension
            ));
        }
        if self.directions[0].iter().any(|&c| c != 0) {
            return Err("direction 0 must be the rest vector".into());
        }
        if let Some(i) = self.weights.iter().position(|w| w.den == 0) {
            return Err(format!("weight {} has a zero denominator", i));
        }
        match weight_sum(&self.weights) {
            None => return Err("weight sum overflows u64".into()),
            Some((num, den)) if num != den => {
                return Err(format!("weights sum to {}/{}, not 1", num, den));
            }
            Some(_) => {}
        }
        for (i, e) in self.directions.iter().enumerate() {
            if self.directions[..i].contains(e) {
                return Err(format!("direction {} duplicates {:?}", i, e));
            }
            if self.opposite_of(i).is_none() {
                return Err(format!("direction {} {:?} has no opposite", i, e));
            }
        }
        Ok(())
    }

    /// Index of the direction opposite to `i`, if present.
    pub fn opposite_of(&self, i: usize) -> Option<usize> {
        let e = self.directions.get(i)?;
        self.directions.iter().position(|other| {
            other
                .iter()
                .zip(e)
                .all(|(a, b)| b.checked_neg() == Some(*a))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_descriptors_validate() {
        for kind in StencilKind::ALL {
            let d = kind.descriptor();
            assert!(d.validate().is_ok(), "{} failed validation", kind);
            assert_eq!(d.size(), kind.size());
            assert_eq!(d.dimension, kind.dimension());
            assert_eq!(d.name, kind.name());
        }
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("D2Q9".parse::<StencilKind>().unwrap(), StencilKind::D2Q9);
        assert_eq!(" d3q27 ".parse::<StencilKind>().unwrap(), StencilKind::D3Q27);
        assert!(matches!(
            "D4Q81".parse::<StencilKind>(),
            Err(LbmError::UnknownStencil(_))
        ));
    }

    #[test]
    fn test_kind_serde_names() {
        assert_eq!(serde_json::to_string(&StencilKind::D2Q5).unwrap(), "\"D2Q5\"");
        let kind: StencilKind = serde_json::from_str("\"d3q19\"").unwrap();
        assert_eq!(kind, StencilKind::D3Q19);
    }

    #[test]
    fn test_descriptor_rejects_bad_weights() {
        let mut d = StencilKind::D2Q5.descriptor();
        d.weights[0] = Weight::new(1, 2);
        assert!(matches!(d.validate(), Err(LbmError::InvalidStencil(_))));
    }

    #[test]
    fn test_descriptor_rejects_missing_opposite() {
        let d = LatticeDescriptor {
            name: "lopsided".into(),
            dimension: 1,
            directions: vec![vec![0], vec![1]],
            weights: vec![Weight::new(1, 2), Weight::new(1, 2)],
        };
        let err = d.validate().unwrap_err();
        assert!(err.to_string().contains("no opposite"));
    }

    #[test]
    fn test_descriptor_rejects_overflowing_weight_sum() {
        let d = LatticeDescriptor {
            name: "coprime".into(),
            dimension: 1,
            directions: vec![vec![0], vec![1], vec![-1]],
            weights: vec![
                Weight::new(1, 4_294_967_291),
                Weight::new(1, 4_294_967_279),
                Weight::new(1, 4_294_967_231),
            ],
        };
        let err = d.validate().unwrap_err();
        assert!(err.to_string().contains("overflows"), "{}", err);

        let mut d = StencilKind::D1Q3.descriptor();
        d.weights[2] = Weight::new(1, 0);
        let err = d.validate().unwrap_err();
        assert!(err.to_string().contains("zero denominator"), "{}", err);
    }

    #[test]
    fn test_descriptor_rejects_unnegatable_component() {
        let d = LatticeDescriptor {
            name: "extreme".into(),
            dimension: 1,
            directions: vec![vec![0], vec![i32::MIN], vec![1]],
            weights: vec![Weight::new(1, 3), Weight::new(1, 3), Weight::new(1, 3)],
        };
        assert_eq!(d.opposite_of(1), None);
        let err = d.validate().unwrap_err();
        assert!(err.to_string().contains("no opposite"), "{}", err);
    }

    #[test]
    fn test_descriptor_rejects_ragged_directions() {
        let mut d = StencilKind::D2Q9.descriptor();
        d.directions[4] = vec![0, -1, 0];
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_opposite_of_matches_compile_time_table() {
        let d = StencilKind::D2Q9.descriptor();
        let table: Vec<usize> = (0..d.size()).map(|i| d.opposite_of(i).unwrap()).collect();
        assert_eq!(table, <D2Q9 as LatticeGeometry<2, 9>>::OPPOSITE.to_vec());
        assert_eq!(d.opposite_of(9), None);
    }
}
