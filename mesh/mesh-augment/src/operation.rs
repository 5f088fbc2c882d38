//! The fixed set of named mesh operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AugmentError;

/// Whether an operation prepares a mesh or randomly perturbs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Deterministic preparation of a mesh.
    Preprocessing,
    /// Random perturbation of a mesh.
    Augmentation,
}

impl Category {
    /// Display name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Preprocessing => "Preprocessing",
            Self::Augmentation => "Augmentation",
        }
    }
}

/// A named mesh operation.
///
/// Names match the option lists shown to users, e.g. `"Adding Noise"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Scale so the largest absolute coordinate is 1.
    Normalization,
    /// Translate the centroid to the origin.
    Centering,
    /// Random intrinsic XYZ rotation.
    Rotation,
    /// Random per-axis scaling.
    Scaling,
    /// Gaussian noise proportional to the mesh extent.
    #[serde(rename = "Adding Noise")]
    AddingNoise,
}

impl Operation {
    /// Every operation, preprocessing first.
    pub const ALL: [Self; 5] = [
        Self::Normalization,
        Self::Centering,
        Self::Rotation,
        Self::Scaling,
        Self::AddingNoise,
    ];

    /// User-facing name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normalization => "Normalization",
            Self::Centering => "Centering",
            Self::Rotation => "Rotation",
            Self::Scaling => "Scaling",
            Self::AddingNoise => "Adding Noise",
        }
    }

    /// File name prefix for the output mesh.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Normalization => "normalized",
            Self::Centering => "centered",
            Self::Rotation => "rotated",
            Self::Scaling => "scaled",
            Self::AddingNoise => "noisy",
        }
    }

    /// Lower-case name used in error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normalization => "normalization",
            Self::Centering => "centering",
            Self::Rotation => "rotation",
            Self::Scaling => "scaling",
            Self::AddingNoise => "adding noise",
        }
    }

    /// Category the operation is listed under.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::Normalization | Self::Centering => Category::Preprocessing,
            Self::Rotation | Self::Scaling | Self::AddingNoise => Category::Augmentation,
        }
    }

    /// Whether the operation draws from the random source.
    #[must_use]
    pub const fn is_random(self) -> bool {
        matches!(self.category(), Category::Augmentation)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = AugmentError;

    /// Parse a user-facing name.
    ///
    /// Matching ignores ASCII case and treats `_` and `-` as spaces, so
    /// `"adding-noise"` and `"ADDING_NOISE"` both name [`Operation::AddingNoise`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .map(|c| if c == '_' || c == '-' { ' ' } else { c })
            .collect();
        Self::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| AugmentError::unknown_operation(s))
    }
}
