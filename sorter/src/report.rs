//! Rendering of classification results for the CLI.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{Classification, Package, Reason, assess};

/// Everything the CLI prints about a single classified package.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationReport {
    pub package: Package,
    pub classification: Classification,
    pub volume: f64,
    pub bulky: bool,
    pub heavy: bool,
    pub reasons: Vec<Reason>,
    #[serde(skip)]
    reasoning: String,
}

impl ClassificationReport {
    pub fn new(package: Package) -> Self {
        let assessment = assess(&package);
        Self {
            package,
            classification: assessment.classification,
            volume: assessment.volume,
            bulky: assessment.is_bulky(),
            heavy: assessment.heavy,
            reasoning: assessment.reasoning(),
            reasons: assessment.reasons,
        }
    }

    /// Label only, or the full breakdown when `explain` is set.
    pub fn render_text(&self, explain: bool) -> String {
        if !explain {
            return format!("{}\n", self.classification);
        }
        let p = &self.package;
        let mut out = format!(
            "Dimensions: {}×{}×{} cm\n",
            p.width(),
            p.height(),
            p.length()
        );
        out.push_str(&format!("Volume: {} cm³\n", group_thousands(self.volume)));
        out.push_str(&format!("Mass: {} kg\n", p.mass()));
        out.push_str(&format!("Classification: {}\n", self.classification));
        out.push_str(&format!("Reason: {}\n", self.reasoning));
        out
    }

    pub fn render_json(&self) -> Result<String> {
        let mut payload = serde_json::to_string(self).context("serialize classification")?;
        payload.push('\n');
        Ok(payload)
    }
}

/// Format whole numbers with `,` separators; other values print as-is.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() >= 1e15 {
        return value.to_string();
    }
    let digits = format!("{}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}
