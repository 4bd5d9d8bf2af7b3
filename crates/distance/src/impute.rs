//! Missing-value imputation.
//!
//! When the target of a comparison has not answered a question, a concrete
//! coordinate is substituted based on the reference coordinate. The reference
//! itself is always a resolved value; only the absolute-maximum policy moves
//! it.

use serde::{Deserialize, Serialize};

use crate::coordinate::{SignedNormalizedDistance, MAX, MIN, NEUTRAL};

/// How a missing target coordinate is replaced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingValueMethod {
    /// Impute the neutral coordinate.
    Neutral,
    /// Impute the extreme opposite the reference. On a 5-point scale a
    /// reference of 1 or 2 yields 5, a reference of 4 or 5 yields 1 and a
    /// neutral reference follows the bias.
    #[default]
    RelativeMaximum,
    /// Push both coordinates to opposite extremes, so a missing answer is
    /// always at maximum distance.
    AbsoluteMaximum,
}

/// Direction used when the reference is exactly neutral.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingValueBias {
    /// Favor the maximum extreme for the imputed value.
    #[default]
    Positive,
    /// Favor the minimum extreme for the imputed value.
    Negative,
}

/// Imputation policy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MissingValueOptions {
    pub method: MissingValueMethod,
    #[serde(default)]
    pub bias: MissingValueBias,
}

impl MissingValueOptions {
    pub fn new(method: MissingValueMethod) -> Self {
        Self {
            method,
            bias: MissingValueBias::default(),
        }
    }

    pub fn with_bias(mut self, bias: MissingValueBias) -> Self {
        self.bias = bias;
        self
    }
}

/// Resolve a missing target coordinate against `reference`.
///
/// Returns `(resolved_reference, imputed_value)`.
pub fn impute_missing_values(
    reference: SignedNormalizedDistance,
    options: &MissingValueOptions,
) -> (SignedNormalizedDistance, SignedNormalizedDistance) {
    match options.method {
        MissingValueMethod::Neutral => (reference, NEUTRAL),
        MissingValueMethod::RelativeMaximum => {
            let imputed = if reference == NEUTRAL {
                match options.bias {
                    MissingValueBias::Positive => MAX,
                    MissingValueBias::Negative => MIN,
                }
            } else if reference < NEUTRAL {
                MAX
            } else {
                MIN
            };
            (reference, imputed)
        }
        MissingValueMethod::AbsoluteMaximum => {
            // The bias applies to the imputed value, so a neutral reference
            // goes to the opposite extreme.
            let snapped = if reference == NEUTRAL {
                match options.bias {
                    MissingValueBias::Positive => MIN,
                    MissingValueBias::Negative => MAX,
                }
            } else if reference < NEUTRAL {
                MIN
            } else {
                MAX
            };
            (snapped, -snapped)
        }
    }
}
