//! Depth class table: an ordered, contiguous set of half-open depth bands.

use crate::error::DepthError;

/// Name assigned to depths below the lowest class (no flood impact).
pub const NO_IMPACT_NAME: &str = "None";

/// One severity band covering depths in `[min, max)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthClass {
    name: String,
    min: f64,
    max: f64,
}

impl DepthClass {
    /// Creates a bounded class covering `[min, max)`.
    pub fn new(name: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            min,
            max,
        }
    }

    /// Creates an unbounded class covering `[min, ∞)`.
    pub fn unbounded(name: impl Into<String>, min: f64) -> Self {
        Self::new(name, min, f64::INFINITY)
    }

    /// Class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inclusive lower bound in metres.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Exclusive upper bound in metres (`f64::INFINITY` for the last class).
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns `true` if `depth` lies in `[min, max)`.
    pub fn contains(&self, depth: f64) -> bool {
        depth >= self.min && depth < self.max
    }
}

/// Severity assigned to a single depth value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Severity<'a> {
    /// 1-based class id, or 0 for no impact.
    pub class: u8,
    /// Class name, or [`NO_IMPACT_NAME`] for class 0.
    pub name: &'a str,
}

/// Validated, ordered list of depth classes.
///
/// Class ids are the 1-based positions in the table. Invariants enforced by
/// [`DepthClassTable::new`]:
///
/// - at least one and at most 255 classes,
/// - every lower bound finite and `>= 0`, every class non-empty (`min < max`),
/// - consecutive classes contiguous (`max[i] == min[i + 1]`),
/// - only the last class unbounded above.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthClassTable {
    classes: Vec<DepthClass>,
}

impl DepthClassTable {
    /// Validates and wraps `classes`.
    ///
    /// # Errors
    ///
    /// Returns [`DepthError::Configuration`] describing the first violated
    /// invariant.
    pub fn new(classes: Vec<DepthClass>) -> Result<Self, DepthError> {
        if classes.is_empty() {
            return Err(config_err("table must contain at least one class"));
        }
        if classes.len() > u8::MAX as usize {
            return Err(config_err(format!(
                "table has {} classes, at most {} are supported",
                classes.len(),
                u8::MAX
            )));
        }

        let last = classes.len() - 1;
        for (i, class) in classes.iter().enumerate() {
            let id = i + 1;
            if class.name.trim().is_empty() {
                return Err(config_err(format!("class {id} has an empty name")));
            }
            if !class.min.is_finite() || class.min < 0.0 {
                return Err(config_err(format!(
                    "class {id} ('{}'): lower bound must be finite and >= 0, got {}",
                    class.name, class.min
                )));
            }
            if class.max.is_nan() || class.max <= class.min {
                return Err(config_err(format!(
                    "class {id} ('{}'): upper bound {} must exceed lower bound {}",
                    class.name, class.max, class.min
                )));
            }
            if i < last && class.max.is_infinite() {
                return Err(config_err(format!(
                    "class {id} ('{}'): only the last class may be unbounded",
                    class.name
                )));
            }
            if i == last && class.max.is_finite() {
                return Err(config_err(format!(
                    "class {id} ('{}'): last class must be unbounded above, got upper bound {}",
                    class.name, class.max
                )));
            }
        }

        for (i, pair) in classes.windows(2).enumerate() {
            let (lower, upper) = (&pair[0], &pair[1]);
            if lower.max < upper.min {
                return Err(config_err(format!(
                    "gap between class {} and {}: [{}, {}) is not covered",
                    i + 1,
                    i + 2,
                    lower.max,
                    upper.min
                )));
            }
            if lower.max > upper.min {
                return Err(config_err(format!(
                    "class {} and {} overlap on [{}, {})",
                    i + 1,
                    i + 2,
                    upper.min,
                    lower.max
                )));
            }
        }

        Ok(Self { classes })
    }

    /// The FEMA depth bands: Low, Moderate, High and Very High.
    pub fn fema() -> Self {
        Self {
            classes: vec![
                DepthClass::new("Low", 0.0001, 0.4),
                DepthClass::new("Moderate", 0.4, 0.8),
                DepthClass::new("High", 0.8, 1.8),
                DepthClass::unbounded("Very High", 1.8),
            ],
        }
    }

    /// All classes in ascending order.
    pub fn classes(&self) -> &[DepthClass] {
        &self.classes
    }

    /// Number of classes (the highest class id).
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Always `false`; a validated table holds at least one class.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Lower bound of the first class; shallower depths have no impact.
    pub fn impact_threshold(&self) -> f64 {
        self.classes[0].min
    }

    /// Name for a class id, including [`NO_IMPACT_NAME`] for 0.
    pub fn name_of(&self, class: u8) -> Option<&str> {
        match class {
            0 => Some(NO_IMPACT_NAME),
            id => self.classes.get(id as usize - 1).map(DepthClass::name),
        }
    }

    /// Classify a single depth value.
    ///
    /// # Precondition
    ///
    /// `depth` must be finite and non-negative. This is **not** validated
    /// here; [`classify`](crate::classify) checks records before calling.
    #[inline]
    pub fn classify_depth(&self, depth: f64) -> Severity<'_> {
        // Number of classes whose lower bound is <= depth. Contiguity makes
        // the last of those the unique containing class.
        let idx = self.classes.partition_point(|c| c.min <= depth);
        if idx == 0 {
            Severity {
                class: 0,
                name: NO_IMPACT_NAME,
            }
        } else {
            Severity {
                class: idx as u8,
                name: &self.classes[idx - 1].name,
            }
        }
    }
}

impl Default for DepthClassTable {
    fn default() -> Self {
        Self::fema()
    }
}

fn config_err(reason: impl Into<String>) -> DepthError {
    DepthError::Configuration {
        reason: reason.into(),
    }
}
