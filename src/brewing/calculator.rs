//! Derived quantity calculator
//!
//! Turns an effective ratio plus the caller's [`BrewRequest`] into the
//! display values a presentation layer shows: the complementary quantity,
//! the same numbers in the other unit family, and heaping-tablespoon
//! approximations.

use crate::brewing::grind::adjust_ratio;
use crate::brewing::table;
use crate::conversions::{cups_to_ml, grams_to_oz, ml_to_cups};
use crate::types::{
    AeropressMode, BrewClass, BrewConfig, BrewMethod, GrindSize, OperatingMode, QualityLevel,
    RoastLevel, PRECISION_THRESHOLD,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// One calculation's worth of caller input. Built fresh per call, never retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrewRequest {
    pub mode: OperatingMode,
    /// Grams of beans in beans mode, cups of water in filter water mode,
    /// grams of beans in espresso water mode.
    pub amount: f64,
    pub brew_method: BrewMethod,
    /// Only consulted when `brew_method` is AeroPress.
    pub aeropress_mode: AeropressMode,
    pub roast: RoastLevel,
    pub quality: QualityLevel,
    pub grind_size: GrindSize,
    /// Whether the user picked a grind instead of following the recommendation.
    pub grind_override: bool,
}

impl Default for BrewRequest {
    fn default() -> Self {
        Self {
            mode: OperatingMode::Water,
            amount: 2.0,
            brew_method: BrewMethod::PourOver,
            aeropress_mode: AeropressMode::Immersion,
            roast: RoastLevel::Medium,
            quality: QualityLevel::High,
            grind_size: GrindSize::Medium,
            grind_override: false,
        }
    }
}

impl BrewRequest {
    pub fn brew_class(&self) -> BrewClass {
        BrewClass::of(self.brew_method, self.aeropress_mode)
    }

    pub fn is_espresso(&self) -> bool {
        self.brew_class().is_espresso()
    }

    pub fn baseline(&self) -> &'static BrewConfig {
        table::lookup(self.brew_method, self.aeropress_mode, self.roast, self.quality)
    }

    pub fn spoon_weight(&self) -> u32 {
        table::spoon_weight(self.brew_method, self.aeropress_mode, self.roast)
    }
}

/// Baseline ratio shifted by the selected grind, whether or not the user
/// enabled the override.
pub fn adjusted_ratio(request: &BrewRequest) -> f64 {
    let baseline = request.baseline();
    adjust_ratio(
        request.grind_size,
        baseline.recommended_grind,
        baseline.ratio,
        request.is_espresso(),
    )
}

/// Ratio the caller should compute with: grind-adjusted only when the user
/// overrode the recommended grind.
pub fn effective_ratio(request: &BrewRequest) -> f64 {
    if request.grind_override {
        adjusted_ratio(request)
    } else {
        request.baseline().ratio
    }
}

/// Field labels and units for one (mode, class) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayLabels {
    pub input_label: &'static str,
    pub input_hint: &'static str,
    pub input_unit: &'static str,
    pub result_label: &'static str,
    pub result_unit: &'static str,
}

impl DisplayLabels {
    pub fn new(mode: OperatingMode, is_espresso: bool) -> Self {
        match (mode, is_espresso) {
            (OperatingMode::Beans, false) => Self {
                input_label: "Beans Weight",
                input_hint: BEANS_HINT,
                input_unit: "g",
                result_label: "Water Needed",
                result_unit: "ml",
            },
            (OperatingMode::Beans, true) => Self {
                input_label: "Beans Weight",
                input_hint: BEANS_HINT,
                input_unit: "g",
                result_label: "Espresso Yield",
                result_unit: "g",
            },
            (OperatingMode::Water, true) => Self {
                input_label: "Beans Weight",
                input_hint: BEANS_HINT,
                input_unit: "g",
                result_label: "Beans Needed",
                result_unit: "g",
            },
            (OperatingMode::Water, false) => Self {
                input_label: "Number of Cups",
                input_hint: "8oz per cup",
                input_unit: "cups",
                result_label: "Beans Needed",
                result_unit: "g",
            },
        }
    }
}

const BEANS_HINT: &str = "Enter amount of beans you have";

pub fn input_label(mode: OperatingMode, is_espresso: bool) -> &'static str {
    DisplayLabels::new(mode, is_espresso).input_label
}

pub fn input_hint(mode: OperatingMode, is_espresso: bool) -> &'static str {
    DisplayLabels::new(mode, is_espresso).input_hint
}

pub fn input_unit(mode: OperatingMode, is_espresso: bool) -> &'static str {
    DisplayLabels::new(mode, is_espresso).input_unit
}

pub fn result_label(mode: OperatingMode, is_espresso: bool) -> &'static str {
    DisplayLabels::new(mode, is_espresso).result_label
}

pub fn result_unit(mode: OperatingMode, is_espresso: bool) -> &'static str {
    DisplayLabels::new(mode, is_espresso).result_unit
}

/// The complementary quantity: water (ml) or espresso yield (g) in beans
/// mode, beans (g) or espresso yield (g) in water mode.
pub fn result_value(request: &BrewRequest, ratio: f64) -> String {
    match request.mode {
        OperatingMode::Beans => format_whole(request.amount * ratio),
        OperatingMode::Water if request.is_espresso() => format_scaled(request.amount * ratio),
        OperatingMode::Water => format_scaled(cups_to_ml(request.amount) / ratio),
    }
}

/// The user's amount in the other unit family.
pub fn input_conversion(request: &BrewRequest) -> String {
    match request.mode {
        OperatingMode::Water if !request.is_espresso() => {
            format!("{} ml", format_tenths(cups_to_ml(request.amount)))
        }
        _ => format!("{} oz", format_tenths(grams_to_oz(request.amount))),
    }
}

/// The result in the other unit family: cups of water for filter beans
/// mode, ounces otherwise.
pub fn result_conversion(request: &BrewRequest, ratio: f64) -> String {
    match request.mode {
        OperatingMode::Beans if !request.is_espresso() => {
            format!("{} cups", format_tenths(ml_to_cups(request.amount * ratio)))
        }
        OperatingMode::Water if !request.is_espresso() => {
            let beans_g = cups_to_ml(request.amount) / ratio;
            format!("{} oz", format_tenths(grams_to_oz(beans_g)))
        }
        _ => format!("{} oz", format_tenths(grams_to_oz(request.amount * ratio))),
    }
}

pub fn input_spoon_val(request: &BrewRequest, spoon_weight: u32) -> String {
    format_spoons(request.amount / f64::from(spoon_weight))
}

pub fn result_spoon_val(request: &BrewRequest, ratio: f64, spoon_weight: u32) -> String {
    let beans = request.amount / ratio;
    format_spoons(beans / f64::from(spoon_weight))
}

/// Water volume for filter water mode; `None` everywhere else.
pub fn water_volume_info(request: &BrewRequest) -> Option<String> {
    match request.mode {
        OperatingMode::Water if !request.is_espresso() => Some(format!(
            "{} ml water",
            format_whole(cups_to_ml(request.amount))
        )),
        _ => None,
    }
}

/// Everything a presentation layer renders for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedQuantities {
    pub brew_class: BrewClass,
    pub ratio: f64,
    pub spoon_weight_g: u32,
    pub labels: DisplayLabels,
    pub result_value: String,
    pub input_conversion: String,
    pub result_conversion: String,
    pub input_spoons: String,
    pub result_spoons: String,
    pub water_volume: Option<String>,
}

pub fn compute_derived_quantities(
    request: &BrewRequest,
    ratio: f64,
    spoon_weight: u32,
) -> DerivedQuantities {
    let brew_class = request.brew_class();
    let quantities = DerivedQuantities {
        brew_class,
        ratio,
        spoon_weight_g: spoon_weight,
        labels: DisplayLabels::new(request.mode, brew_class.is_espresso()),
        result_value: result_value(request, ratio),
        input_conversion: input_conversion(request),
        result_conversion: result_conversion(request, ratio),
        input_spoons: input_spoon_val(request, spoon_weight),
        result_spoons: result_spoon_val(request, ratio, spoon_weight),
        water_volume: water_volume_info(request),
    };

    debug!(
        "{} {} {}: ratio {:.2}, {} {} -> {} {}",
        request.brew_method,
        request.roast,
        request.quality.as_str(),
        ratio,
        request.amount,
        quantities.labels.input_unit,
        quantities.result_value,
        quantities.labels.result_unit
    );

    quantities
}

/// Resolve, adjust and derive in one call.
pub fn compute(request: &BrewRequest) -> DerivedQuantities {
    compute_derived_quantities(request, effective_ratio(request), request.spoon_weight())
}

fn format_spoons(spoons: f64) -> String {
    format!("~ {} heaping tbsp", format_tenths(spoons))
}

/// One decimal place of the exact stored value. Exact ties (odd multiples
/// of 0.25) round away from zero; `{:.1}` alone would round them to even.
fn format_tenths(value: f64) -> String {
    let quarters = value * 4.0;
    let is_tie = quarters.fract() == 0.0 && quarters % 2.0 != 0.0;
    if is_tie {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}

fn format_whole(value: f64) -> String {
    format!("{:.0}", value.round())
}

/// One decimal below the precision threshold, whole numbers above it.
fn format_scaled(value: f64) -> String {
    if value < PRECISION_THRESHOLD {
        format_tenths(value)
    } else {
        format_whole(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(mode: OperatingMode, amount: f64) -> BrewRequest {
        BrewRequest {
            mode,
            amount,
            ..BrewRequest::default()
        }
    }

    fn espresso(mode: OperatingMode, amount: f64) -> BrewRequest {
        BrewRequest {
            brew_method: BrewMethod::Espresso,
            ..request(mode, amount)
        }
    }

    #[test]
    fn test_request_brew_class() {
        assert!(!request(OperatingMode::Water, 2.0).is_espresso());
        assert!(espresso(OperatingMode::Water, 18.0).is_espresso());

        let aeropress = BrewRequest {
            brew_method: BrewMethod::Aeropress,
            aeropress_mode: AeropressMode::Espresso,
            ..BrewRequest::default()
        };
        assert!(aeropress.is_espresso());

        let preground = BrewRequest {
            brew_method: BrewMethod::PregroundEspresso,
            ..BrewRequest::default()
        };
        assert_eq!(preground.brew_class(), BrewClass::Filter);
    }

    #[test]
    fn test_label_table() {
        let beans = DisplayLabels::new(OperatingMode::Beans, false);
        assert_eq!(beans.input_label, "Beans Weight");
        assert_eq!(beans.input_unit, "g");
        assert_eq!(beans.result_label, "Water Needed");
        assert_eq!(beans.result_unit, "ml");

        let beans_espresso = DisplayLabels::new(OperatingMode::Beans, true);
        assert_eq!(beans_espresso.result_label, "Espresso Yield");
        assert_eq!(beans_espresso.result_unit, "g");

        let water_espresso = DisplayLabels::new(OperatingMode::Water, true);
        assert_eq!(water_espresso.input_label, "Beans Weight");
        assert_eq!(water_espresso.input_unit, "g");
        assert_eq!(water_espresso.result_label, "Beans Needed");
        assert_eq!(water_espresso.result_unit, "g");

        let water = DisplayLabels::new(OperatingMode::Water, false);
        assert_eq!(water.input_label, "Number of Cups");
        assert_eq!(water.input_unit, "cups");
        assert_eq!(water.result_label, "Beans Needed");
        assert_eq!(water.result_unit, "g");
    }

    #[test]
    fn test_input_hints() {
        assert_eq!(input_hint(OperatingMode::Beans, false), "Enter amount of beans you have");
        assert_eq!(input_hint(OperatingMode::Water, true), "Enter amount of beans you have");
        assert_eq!(input_hint(OperatingMode::Water, false), "8oz per cup");
        assert_eq!(input_label(OperatingMode::Water, false), "Number of Cups");
        assert_eq!(input_unit(OperatingMode::Beans, true), "g");
        assert_eq!(result_label(OperatingMode::Beans, true), "Espresso Yield");
        assert_eq!(result_unit(OperatingMode::Beans, false), "ml");
    }

    #[test]
    fn test_result_value_beans_mode() {
        assert_eq!(result_value(&request(OperatingMode::Beans, 20.0), 15.0), "300");
        assert_eq!(result_value(&request(OperatingMode::Beans, 100.0), 15.0), "1500");
        assert_eq!(result_value(&espresso(OperatingMode::Beans, 18.0), 2.5), "45");
    }

    #[test]
    fn test_result_value_water_mode() {
        // 10 cups = 2365.88 ml / 16 = 147.87 g
        assert_eq!(result_value(&request(OperatingMode::Water, 10.0), 16.0), "148");
        // 2 cups = 473.176 ml / 16 = 29.57 g
        assert_eq!(result_value(&request(OperatingMode::Water, 2.0), 16.0), "29.6");
    }

    #[test]
    fn test_result_value_espresso_water_mode() {
        assert_eq!(result_value(&espresso(OperatingMode::Water, 18.0), 2.5), "45.0");
        assert_eq!(result_value(&espresso(OperatingMode::Water, 50.0), 2.5), "125");
    }

    #[test]
    fn test_input_conversion() {
        assert_eq!(input_conversion(&request(OperatingMode::Beans, 28.35)), "1.0 oz");
        assert_eq!(input_conversion(&request(OperatingMode::Water, 2.0)), "473.2 ml");
        assert_eq!(input_conversion(&espresso(OperatingMode::Water, 18.0)), "0.6 oz");
    }

    #[test]
    fn test_result_conversion() {
        // 300 ml / 236.588 = 1.27 cups
        assert_eq!(result_conversion(&request(OperatingMode::Beans, 20.0), 15.0), "1.3 cups");
        // 45 g / 28.3495 = 1.59 oz
        assert_eq!(result_conversion(&espresso(OperatingMode::Beans, 18.0), 2.5), "1.6 oz");
        assert_eq!(result_conversion(&espresso(OperatingMode::Water, 18.0), 2.5), "1.6 oz");
        // 29.57 g / 28.3495 = 1.04 oz
        assert_eq!(result_conversion(&request(OperatingMode::Water, 2.0), 16.0), "1.0 oz");
    }

    #[test]
    fn test_spoon_values() {
        assert_eq!(input_spoon_val(&request(OperatingMode::Beans, 24.0), 8), "~ 3.0 heaping tbsp");
        // 18 g / 9 g per spoon
        assert_eq!(input_spoon_val(&request(OperatingMode::Beans, 18.0), 9), "~ 2.0 heaping tbsp");
        // 240 / 15 = 16 g of beans, / 8 = 2 spoons
        assert_eq!(
            result_spoon_val(&request(OperatingMode::Beans, 240.0), 15.0, 8),
            "~ 2.0 heaping tbsp"
        );
        assert!(result_spoon_val(&request(OperatingMode::Water, 2.0), 16.0, 8).ends_with("tbsp"));
    }

    #[test]
    fn test_tenths_round_half_away_from_zero() {
        // 18 / 8 = 2.25 exactly
        assert_eq!(input_spoon_val(&request(OperatingMode::Beans, 18.0), 8), "~ 2.3 heaping tbsp");
        assert_eq!(format_tenths(0.25), "0.3");
        assert_eq!(format_tenths(0.75), "0.8");
        assert_eq!(format_tenths(2.0), "2.0");
    }

    #[test]
    fn test_tenths_use_stored_value_below_half() {
        // 1.2 / 8 is stored just under 0.15
        assert_eq!(input_spoon_val(&request(OperatingMode::Beans, 1.2), 8), "~ 0.1 heaping tbsp");
        assert_eq!(input_spoon_val(&request(OperatingMode::Beans, 2.8), 8), "~ 0.3 heaping tbsp");
        assert_eq!(input_spoon_val(&request(OperatingMode::Beans, 7.6), 8), "~ 0.9 heaping tbsp");
    }

    #[test]
    fn test_water_volume_info() {
        assert_eq!(
            water_volume_info(&request(OperatingMode::Water, 2.0)).as_deref(),
            Some("473 ml water")
        );
        assert_eq!(water_volume_info(&request(OperatingMode::Beans, 18.0)), None);
        assert_eq!(water_volume_info(&espresso(OperatingMode::Water, 18.0)), None);
    }

    #[test]
    fn test_adjusted_ratio_follows_grind() {
        let matching = BrewRequest {
            grind_size: GrindSize::Medium,
            ..BrewRequest::default()
        };
        assert_eq!(adjusted_ratio(&matching), 16.0);

        let finer = BrewRequest {
            grind_size: GrindSize::MediumFine,
            ..BrewRequest::default()
        };
        assert!(adjusted_ratio(&finer) > adjusted_ratio(&matching));
        assert!((adjusted_ratio(&finer) - 16.5).abs() < 1e-9);

        let shot = BrewRequest {
            brew_method: BrewMethod::Espresso,
            grind_size: GrindSize::Fine,
            ..BrewRequest::default()
        };
        // one step coarser than extra-fine: 2.5 - 0.15
        assert!((adjusted_ratio(&shot) - 2.35).abs() < 1e-9);
    }

    #[test]
    fn test_effective_ratio_respects_override_flag() {
        let mut request = BrewRequest {
            grind_size: GrindSize::Fine,
            ..BrewRequest::default()
        };
        assert_eq!(effective_ratio(&request), 16.0);

        request.grind_override = true;
        assert!((effective_ratio(&request) - 17.0).abs() < 1e-9);
    }

    #[test]
    fn test_compute_pour_over_light_high() {
        let request = BrewRequest {
            mode: OperatingMode::Beans,
            amount: 20.0,
            roast: RoastLevel::Light,
            grind_size: GrindSize::MediumFine,
            grind_override: true,
            ..BrewRequest::default()
        };
        assert_eq!(request.baseline().temperature, "100°C / 212°F");

        let quantities = compute(&request);
        assert_eq!(quantities.ratio, 17.0);
        assert_eq!(quantities.spoon_weight_g, 9);
        assert_eq!(quantities.brew_class, BrewClass::Filter);
        assert_eq!(quantities.result_value, "340");
        assert_eq!(quantities.labels.result_label, "Water Needed");
        assert_eq!(quantities.water_volume, None);
    }

    #[test]
    fn test_compute_serializes_for_display() {
        let quantities = compute(&BrewRequest::default());
        let json = serde_json::to_value(&quantities).unwrap();
        assert_eq!(json["brewClass"], "filter");
        assert_eq!(json["spoonWeightG"], 8);
        assert_eq!(json["labels"]["inputLabel"], "Number of Cups");
        assert_eq!(json["labels"]["resultUnit"], "g");
        assert_eq!(json["resultValue"], "29.6");
        assert_eq!(json["inputConversion"], "473.2 ml");
        assert_eq!(json["waterVolume"], "473 ml water");
        assert!(json.get("brew_class").is_none());
        assert!(json["labels"].get("input_label").is_none());
    }

    #[test]
    fn test_request_and_output_share_key_style() {
        let request_json = serde_json::to_value(BrewRequest::default()).unwrap();
        assert!(request_json.get("brewMethod").is_some());
        assert!(request_json.get("grindOverride").is_some());

        let beans = BrewRequest {
            mode: OperatingMode::Beans,
            amount: 18.0,
            ..BrewRequest::default()
        };
        let output_json = serde_json::to_value(compute(&beans)).unwrap();
        assert_eq!(output_json["waterVolume"], serde_json::Value::Null);
        assert_eq!(output_json["resultSpoons"], "~ 0.1 heaping tbsp");
    }
}
