//! Grind-deviation ratio adjustment
//!
//! A finer grind than recommended extracts faster, so the ratio goes up
//! (more water per gram); a coarser grind brings it down. The result is
//! clamped to the brew class's plausible range.

use crate::system::config::GrindAdjustment;
use crate::types::{BrewClass, GrindSize};
use log::debug;

pub fn adjust_ratio(
    selected: GrindSize,
    recommended: GrindSize,
    base_ratio: f64,
    is_espresso: bool,
) -> f64 {
    let deviation = selected.deviation(recommended);
    if deviation == 0 {
        return base_ratio;
    }

    let class = if is_espresso {
        BrewClass::Espresso
    } else {
        BrewClass::Filter
    };
    let params = GrindAdjustment::for_class(class);

    let adjustment = -(deviation as f64) * params.step;
    let unclamped = base_ratio + adjustment;
    let adjusted = params.clamp(unclamped);

    if adjusted != unclamped {
        debug!(
            "Grind {} vs {}: ratio {:.2} saturated at {:.2}",
            selected, recommended, unclamped, adjusted
        );
    } else {
        debug!(
            "Grind {} vs {} ({:+} steps): ratio {:.2} -> {:.2}",
            selected, recommended, deviation, base_ratio, adjusted
        );
    }

    adjusted
}
