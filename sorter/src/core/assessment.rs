//! Explainable view of a classification: which thresholds a package crossed.

use serde::Serialize;

use crate::core::classifier::Package;
use crate::core::types::Classification;

/// A threshold that pushed a package out of the standard stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    Volume,
    Dimension,
    Mass,
}

impl Reason {
    pub fn describe(self) -> &'static str {
        match self {
            Reason::Volume => "volume ≥ 1,000,000 cm³",
            Reason::Dimension => "dimension ≥ 150 cm",
            Reason::Mass => "mass ≥ 20 kg",
        }
    }
}

/// Intermediate derivation behind a [`Classification`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub classification: Classification,
    pub volume: f64,
    pub bulky_by_volume: bool,
    pub bulky_by_dimension: bool,
    pub heavy: bool,
    /// Ordered volume, dimension, mass; empty for standard packages.
    pub reasons: Vec<Reason>,
}

impl Assessment {
    pub fn is_bulky(&self) -> bool {
        self.bulky_by_volume || self.bulky_by_dimension
    }

    /// Human-readable reasoning, e.g. `volume ≥ 1,000,000 cm³ and mass ≥ 20 kg`.
    pub fn reasoning(&self) -> String {
        if self.reasons.is_empty() {
            return "within standard limits".to_string();
        }
        self.reasons
            .iter()
            .map(|reason| reason.describe())
            .collect::<Vec<_>>()
            .join(" and ")
    }
}

pub fn assess(package: &Package) -> Assessment {
    let bulky_by_volume = package.bulky_by_volume();
    let bulky_by_dimension = package.bulky_by_dimension();
    let heavy = package.is_heavy();

    let reasons = [
        (bulky_by_volume, Reason::Volume),
        (bulky_by_dimension, Reason::Dimension),
        (heavy, Reason::Mass),
    ]
    .into_iter()
    .filter_map(|(hit, reason)| hit.then_some(reason))
    .collect();

    Assessment {
        classification: package.classification(),
        volume: package.volume(),
        bulky_by_volume,
        bulky_by_dimension,
        heavy,
        reasons,
    }
}
