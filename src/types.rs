use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Failure to turn a UI identifier back into one of the closed enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown {kind}: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },
}

impl ParseError {
    fn unknown(kind: &'static str, value: &str) -> Self {
        ParseError::UnknownVariant {
            kind,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrewMethod {
    PourOver,
    FrenchPress,
    Aeropress,
    Espresso,
    PregroundEspresso,
    Cowboy,
}

impl BrewMethod {
    pub const ALL: [BrewMethod; 6] = [
        BrewMethod::PourOver,
        BrewMethod::FrenchPress,
        BrewMethod::Aeropress,
        BrewMethod::Espresso,
        BrewMethod::PregroundEspresso,
        BrewMethod::Cowboy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BrewMethod::PourOver => "pour-over",
            BrewMethod::FrenchPress => "french-press",
            BrewMethod::Aeropress => "aeropress",
            BrewMethod::Espresso => "espresso",
            BrewMethod::PregroundEspresso => "preground-espresso",
            BrewMethod::Cowboy => "cowboy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BrewMethod::PourOver => "Pour Over",
            BrewMethod::FrenchPress => "French Press",
            BrewMethod::Aeropress => "AeroPress",
            BrewMethod::Espresso => "Espresso",
            BrewMethod::PregroundEspresso => "Pre-ground Espresso",
            BrewMethod::Cowboy => "Cowboy",
        }
    }
}

impl FromStr for BrewMethod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BrewMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ParseError::unknown("brew method", s))
    }
}

/// Sub-mode selecting one of the two AeroPress tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AeropressMode {
    Immersion,
    Espresso,
}

impl AeropressMode {
    pub const ALL: [AeropressMode; 2] = [AeropressMode::Immersion, AeropressMode::Espresso];

    pub fn as_str(&self) -> &'static str {
        match self {
            AeropressMode::Immersion => "immersion",
            AeropressMode::Espresso => "espresso",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AeropressMode::Immersion => "Immersion",
            AeropressMode::Espresso => "Espresso Style",
        }
    }
}

impl FromStr for AeropressMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AeropressMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ParseError::unknown("aeropress mode", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoastLevel {
    Light,
    Medium,
    Dark,
}

impl RoastLevel {
    pub const ALL: [RoastLevel; 3] = [RoastLevel::Light, RoastLevel::Medium, RoastLevel::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoastLevel::Light => "light",
            RoastLevel::Medium => "medium",
            RoastLevel::Dark => "dark",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoastLevel::Light => "Light Roast",
            RoastLevel::Medium => "Medium Roast",
            RoastLevel::Dark => "Dark Roast",
        }
    }

    /// Grams of whole beans in one heaping tablespoon.
    ///
    /// Depends on the roast only: darker beans lose mass and density, so the
    /// same spoon holds less.
    pub const fn spoon_weight_g(&self) -> u32 {
        match self {
            RoastLevel::Light => LIGHT_SPOON_WEIGHT_G,
            RoastLevel::Medium => MEDIUM_SPOON_WEIGHT_G,
            RoastLevel::Dark => DARK_SPOON_WEIGHT_G,
        }
    }
}

impl FromStr for RoastLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoastLevel::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ParseError::unknown("roast level", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualityLevel {
    High,
    Low,
}

impl QualityLevel {
    pub const ALL: [QualityLevel; 2] = [QualityLevel::High, QualityLevel::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityLevel::High => "high",
            QualityLevel::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QualityLevel::High => "High Quality",
            QualityLevel::Low => "Low Quality",
        }
    }
}

impl FromStr for QualityLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QualityLevel::ALL
            .into_iter()
            .find(|q| q.as_str() == s)
            .ok_or_else(|| ParseError::unknown("quality level", s))
    }
}

/// Grind sizes, finest first. Declaration order is the coarseness ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrindSize {
    ExtraFine,
    Fine,
    MediumFine,
    Medium,
    MediumCoarse,
    Coarse,
}

impl GrindSize {
    pub const ALL: [GrindSize; 6] = [
        GrindSize::ExtraFine,
        GrindSize::Fine,
        GrindSize::MediumFine,
        GrindSize::Medium,
        GrindSize::MediumCoarse,
        GrindSize::Coarse,
    ];

    /// Position in the coarseness ordering, 0 (extra-fine) to 5 (coarse).
    pub const fn ordinal(&self) -> i32 {
        match self {
            GrindSize::ExtraFine => 0,
            GrindSize::Fine => 1,
            GrindSize::MediumFine => 2,
            GrindSize::Medium => 3,
            GrindSize::MediumCoarse => 4,
            GrindSize::Coarse => 5,
        }
    }

    /// Signed step count from `recommended` to `self`; negative means finer.
    pub const fn deviation(&self, recommended: GrindSize) -> i32 {
        self.ordinal() - recommended.ordinal()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GrindSize::ExtraFine => "extra-fine",
            GrindSize::Fine => "fine",
            GrindSize::MediumFine => "medium-fine",
            GrindSize::Medium => "medium",
            GrindSize::MediumCoarse => "medium-coarse",
            GrindSize::Coarse => "coarse",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GrindSize::ExtraFine => "Extra Fine",
            GrindSize::Fine => "Fine",
            GrindSize::MediumFine => "Medium Fine",
            GrindSize::Medium => "Medium",
            GrindSize::MediumCoarse => "Medium Coarse",
            GrindSize::Coarse => "Coarse",
        }
    }
}

impl FromStr for GrindSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GrindSize::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| ParseError::unknown("grind size", s))
    }
}

/// Whether the user's amount is dry beans (grams) or liquid (cups).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperatingMode {
    Beans,
    Water,
}

impl OperatingMode {
    pub const ALL: [OperatingMode; 2] = [OperatingMode::Beans, OperatingMode::Water];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingMode::Beans => "beans",
            OperatingMode::Water => "water",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OperatingMode::Beans => "I have beans",
            OperatingMode::Water => "I want cups",
        }
    }
}

impl FromStr for OperatingMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperatingMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ParseError::unknown("operating mode", s))
    }
}

/// Espresso-class brews use a low yield/beans ratio (1.5-3.5); filter-class
/// brews use water grams per bean gram (10-20).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrewClass {
    Espresso,
    Filter,
}

impl BrewClass {
    /// Pre-ground espresso is brewed like a pour-over and stays filter-class.
    pub fn of(method: BrewMethod, aeropress_mode: AeropressMode) -> Self {
        match (method, aeropress_mode) {
            (BrewMethod::Espresso, _) | (BrewMethod::Aeropress, AeropressMode::Espresso) => {
                BrewClass::Espresso
            }
            _ => BrewClass::Filter,
        }
    }

    pub fn is_espresso(&self) -> bool {
        matches!(self, BrewClass::Espresso)
    }
}

impl fmt::Display for BrewMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RoastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for GrindSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Baseline recipe for one (method, roast, quality) cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BrewConfig {
    pub ratio: f64,
    pub temperature: &'static str,
    pub recommended_grind: GrindSize,
    pub brew_time: &'static str,
    pub rationale: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoastEntry {
    pub spoon_weight_g: u32,
    pub high: BrewConfig,
    pub low: BrewConfig,
}

impl RoastEntry {
    pub const fn config(&self, quality: QualityLevel) -> &BrewConfig {
        match quality {
            QualityLevel::High => &self.high,
            QualityLevel::Low => &self.low,
        }
    }
}

pub const LIGHT_SPOON_WEIGHT_G: u32 = 9;
pub const MEDIUM_SPOON_WEIGHT_G: u32 = 8;
pub const DARK_SPOON_WEIGHT_G: u32 = 7;

pub const ESPRESSO_GRIND_STEP: f64 = 0.15;
pub const FILTER_GRIND_STEP: f64 = 0.5;
pub const ESPRESSO_RATIO_BOUNDS: (f64, f64) = (1.5, 3.5);
pub const FILTER_RATIO_BOUNDS: (f64, f64) = (10.0, 20.0);

/// Below this value results keep one decimal place.
pub const PRECISION_THRESHOLD: f64 = 100.0;
