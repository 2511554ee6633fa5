//! Centralized configuration: grind-adjustment parameters and request loading

use crate::brewing::calculator::BrewRequest;
use crate::types::{
    BrewClass, ESPRESSO_GRIND_STEP, ESPRESSO_RATIO_BOUNDS, FILTER_GRIND_STEP, FILTER_RATIO_BOUNDS,
};
use anyhow::Context;
use log::{info, warn};
use serde::Serialize;

/// Step size and hard bounds for shifting a ratio by grind deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrindAdjustment {
    /// Ratio change per grind-size step.
    pub step: f64,
    pub min_ratio: f64,
    pub max_ratio: f64,
}

impl GrindAdjustment {
    pub const ESPRESSO: Self = Self {
        step: ESPRESSO_GRIND_STEP,
        min_ratio: ESPRESSO_RATIO_BOUNDS.0,
        max_ratio: ESPRESSO_RATIO_BOUNDS.1,
    };

    pub const FILTER: Self = Self {
        step: FILTER_GRIND_STEP,
        min_ratio: FILTER_RATIO_BOUNDS.0,
        max_ratio: FILTER_RATIO_BOUNDS.1,
    };

    pub const fn for_class(class: BrewClass) -> Self {
        match class {
            BrewClass::Espresso => Self::ESPRESSO,
            BrewClass::Filter => Self::FILTER,
        }
    }

    #[inline]
    pub fn clamp(&self, ratio: f64) -> f64 {
        ratio.max(self.min_ratio).min(self.max_ratio)
    }
}

/// Parse a caller request from JSON. Missing fields take [`BrewRequest::default`].
pub fn load_request(json: &str) -> anyhow::Result<BrewRequest> {
    let request: BrewRequest =
        serde_json::from_str(json).context("Failed to parse brew request JSON")?;

    info!(
        "Loaded brew request: {} {} {} ({} mode, amount {})",
        request.brew_method,
        request.roast,
        request.quality.as_str(),
        request.mode.as_str(),
        request.amount
    );

    if !request.amount.is_finite() || request.amount <= 0.0 {
        warn!(
            "Brew request amount {} is not a positive number; results will be meaningless",
            request.amount
        );
    }

    Ok(request)
}
