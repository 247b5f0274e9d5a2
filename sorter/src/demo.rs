//! Built-in demonstration catalog for `sorter demo`.

use anyhow::{Context, Result};

use crate::core::{Classification, Package};
use crate::report::ClassificationReport;

/// A described sample package.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub description: &'static str,
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub mass: f64,
    pub expected: Classification,
}

const fn sample(
    description: &'static str,
    dims: (f64, f64, f64),
    mass: f64,
    expected: Classification,
) -> Sample {
    Sample {
        description,
        width: dims.0,
        height: dims.1,
        length: dims.2,
        mass,
        expected,
    }
}

pub const CATALOG: [Sample; 7] = [
    sample(
        "Standard shipping box",
        (50.0, 50.0, 50.0),
        10.0,
        Classification::Standard,
    ),
    sample(
        "Long tube - bulky by dimension",
        (200.0, 50.0, 50.0),
        15.0,
        Classification::Special,
    ),
    sample(
        "Heavy equipment box",
        (80.0, 80.0, 80.0),
        25.0,
        Classification::Special,
    ),
    sample(
        "Heavy and bulky - industrial equipment",
        (100.0, 100.0, 100.0),
        30.0,
        Classification::Rejected,
    ),
    sample(
        "Large cube - bulky by volume",
        (149.0, 149.0, 149.0),
        19.0,
        Classification::Special,
    ),
    sample(
        "Large but within limits",
        (149.0, 149.0, 45.0),
        19.0,
        Classification::Standard,
    ),
    sample(
        "Thin rod - bulky by single dimension",
        (150.0, 1.0, 1.0),
        1.0,
        Classification::Special,
    ),
];

impl Sample {
    pub fn package(&self) -> Result<Package> {
        Package::new(self.width, self.height, self.length, self.mass)
            .with_context(|| format!("sample {:?}", self.description))
    }
}

/// Render every catalog entry with its reasoning.
pub fn render_catalog() -> Result<String> {
    let mut out = String::from("Package Sorting Demonstration\n");
    out.push_str(&"=".repeat(40));
    out.push('\n');
    for sample in &CATALOG {
        let report = ClassificationReport::new(sample.package()?);
        out.push('\n');
        out.push_str(&format!("Package: {}\n", sample.description));
        out.push_str(&report.render_text(true));
    }
    Ok(out)
}
