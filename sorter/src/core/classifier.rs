//! Deterministic classification of packages into handling stacks.

use serde::Serialize;

use crate::core::error::ClassifyError;
use crate::core::measurement::Measurement;
use crate::core::types::{Classification, Field};

/// Volume (cm³) at or above which a package is bulky.
pub const BULKY_VOLUME_CM3: f64 = 1_000_000.0;
/// Single dimension (cm) at or above which a package is bulky.
pub const BULKY_DIMENSION_CM: f64 = 150.0;
/// Mass (kg) at or above which a package is heavy.
pub const HEAVY_MASS_KG: f64 = 20.0;

/// A validated package: every measurement is a non-negative real number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Package {
    width: f64,
    height: f64,
    length: f64,
    mass: f64,
}

impl Package {
    /// Coerce and validate the four measurements.
    ///
    /// All inputs are coerced before any is checked for negativity, so a type
    /// error anywhere takes priority over a value error elsewhere.
    pub fn new(
        width: impl Into<Measurement>,
        height: impl Into<Measurement>,
        length: impl Into<Measurement>,
        mass: impl Into<Measurement>,
    ) -> Result<Self, ClassifyError> {
        let raw = [width.into(), height.into(), length.into(), mass.into()];

        let mut values = [0.0_f64; 4];
        for ((slot, field), measurement) in values.iter_mut().zip(Field::ALL).zip(&raw) {
            *slot = measurement.coerce(field)?;
        }

        if let Some((field, value)) = Field::ALL
            .into_iter()
            .zip(values)
            .find(|(_, value)| *value < 0.0)
        {
            return Err(ClassifyError::InvalidInputValue { field, value });
        }

        let [width, height, length, mass] = values;
        Ok(Self {
            width,
            height,
            length,
            mass,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }

    pub fn bulky_by_volume(&self) -> bool {
        self.volume() >= BULKY_VOLUME_CM3
    }

    pub fn bulky_by_dimension(&self) -> bool {
        [self.width, self.height, self.length]
            .iter()
            .any(|dimension| *dimension >= BULKY_DIMENSION_CM)
    }

    pub fn is_bulky(&self) -> bool {
        self.bulky_by_volume() || self.bulky_by_dimension()
    }

    pub fn is_heavy(&self) -> bool {
        self.mass >= HEAVY_MASS_KG
    }

    pub fn classification(&self) -> Classification {
        decide(self.is_heavy(), self.is_bulky())
    }
}

/// Classify a package into `STANDARD`, `SPECIAL` or `REJECTED`.
///
/// - `REJECTED` if the package is both heavy and bulky.
/// - `SPECIAL` if it is exactly one of heavy or bulky.
/// - `STANDARD` otherwise.
///
/// Bulky: volume >= 1,000,000 cm³ or any dimension >= 150 cm.
/// Heavy: mass >= 20 kg.
pub fn classify(
    width: impl Into<Measurement>,
    height: impl Into<Measurement>,
    length: impl Into<Measurement>,
    mass: impl Into<Measurement>,
) -> Result<Classification, ClassifyError> {
    Package::new(width, height, length, mass).map(|package| package.classification())
}

fn decide(is_heavy: bool, is_bulky: bool) -> Classification {
    match (is_heavy, is_bulky) {
        (true, true) => Classification::Rejected,
        (true, false) | (false, true) => Classification::Special,
        (false, false) => Classification::Standard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::CASES;

    #[test]
    fn known_cases_classify_as_expected() {
        for case in CASES {
            let [w, h, l, m] = case.dims;
            assert_eq!(classify(w, h, l, m), Ok(case.expected), "{}", case.description);
        }
    }

    #[test]
    fn decision_table_is_exhaustive() {
        assert_eq!(decide(true, true), Classification::Rejected);
        assert_eq!(decide(true, false), Classification::Special);
        assert_eq!(decide(false, true), Classification::Special);
        assert_eq!(decide(false, false), Classification::Standard);
    }

    #[test]
    fn small_light_package_is_standard() {
        assert_eq!(classify(10, 10, 10, 5), Ok(Classification::Standard));
        assert_eq!(classify(0, 0, 0, 0), Ok(Classification::Standard));
        assert_eq!(classify(100, 100, 99, 19), Ok(Classification::Standard));
    }

    #[test]
    fn bulky_by_each_dimension_is_special() {
        assert_eq!(classify(150, 10, 10, 5), Ok(Classification::Special));
        assert_eq!(classify(10, 150, 10, 5), Ok(Classification::Special));
        assert_eq!(classify(10, 10, 150, 5), Ok(Classification::Special));
    }

    #[test]
    fn bulky_by_volume_is_special() {
        assert_eq!(classify(100, 100, 100, 5), Ok(Classification::Special));
        assert_eq!(classify(1, 1, 1_000_000, 1), Ok(Classification::Special));
        assert_eq!(classify(1000, 1000, 1, 15), Ok(Classification::Special));
    }

    #[test]
    fn heavy_only_is_special() {
        assert_eq!(classify(10, 10, 10, 20), Ok(Classification::Special));
        assert_eq!(classify(149, 149, 45, 20), Ok(Classification::Special));
        assert_eq!(classify(100, 100, 99, 20), Ok(Classification::Special));
    }

    #[test]
    fn heavy_and_bulky_is_rejected() {
        assert_eq!(classify(150, 10, 10, 20), Ok(Classification::Rejected));
        assert_eq!(classify(100, 100, 100, 25), Ok(Classification::Rejected));
        assert_eq!(classify(150, 150, 150, 20), Ok(Classification::Rejected));
        assert_eq!(classify(149, 149, 149, 20), Ok(Classification::Rejected));
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(classify(149.999, 1, 1, 1), Ok(Classification::Standard));
        assert_eq!(classify(150.0, 1, 1, 1), Ok(Classification::Special));
        assert_eq!(classify(1, 1, 1, 19.999), Ok(Classification::Standard));
        assert_eq!(classify(1, 1, 1, 20.0), Ok(Classification::Special));
        assert_eq!(classify(99.9, 99.9, 100.1, 19.9), Ok(Classification::Standard));
        assert_eq!(classify(100.0, 100.0, 100.0, 19), Ok(Classification::Special));
    }

    #[test]
    fn negative_input_is_a_value_error() {
        for field in Field::ALL {
            let mut inputs = [10.0, 10.0, 10.0, 5.0];
            inputs[field as usize] = -1.0;
            let [w, h, l, m] = inputs;
            assert_eq!(
                classify(w, h, l, m),
                Err(ClassifyError::InvalidInputValue { field, value: -1.0 })
            );
        }
    }

    #[test]
    fn type_error_dominates_value_error() {
        let err = classify(-1, "abc", 10, 5).expect_err("must fail");
        assert_eq!(
            err,
            ClassifyError::InvalidInputType {
                field: Field::Height,
                input: "\"abc\"".to_string(),
            }
        );
    }

    #[test]
    fn first_type_error_in_positional_order_is_reported() {
        let err = classify(10, None::<f64>, "xyz", 5).expect_err("must fail");
        assert_eq!(err.field(), Field::Height);
    }

    #[test]
    fn numeric_text_matches_numbers() {
        assert_eq!(classify("10", "10", "10", "5"), classify(10, 10, 10, 5));
        assert_eq!(classify("150", "10", "10", "20"), Ok(Classification::Rejected));
    }

    #[test]
    fn huge_values_are_accepted() {
        assert_eq!(classify(10_000, 10_000, 10_000, 5), Ok(Classification::Special));
        assert_eq!(classify(f64::INFINITY, 1, 1, 1), Ok(Classification::Special));
        assert_eq!(classify(200, 10, 10, 1000), Ok(Classification::Rejected));
    }

    #[test]
    fn package_exposes_derivation() {
        let package = Package::new(200, 200, 25, 10).expect("valid");
        assert_eq!(package.volume(), 1_000_000.0);
        assert!(package.bulky_by_volume());
        assert!(package.bulky_by_dimension());
        assert!(!package.is_heavy());
    }
}
