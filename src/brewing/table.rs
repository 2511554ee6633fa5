//! Static brew reference table
//!
//! Every (method, roast, quality) cell, and for AeroPress every
//! (sub-mode, roast, quality) cell, resolves to a baseline [`BrewConfig`].
//! The table is plain `static` data; lookups are total and never allocate.

use crate::types::{
    AeropressMode, BrewConfig, BrewMethod, GrindSize, QualityLevel, RoastEntry, RoastLevel,
};

use crate::types::GrindSize::{Coarse, ExtraFine, Fine, Medium, MediumCoarse, MediumFine};

/// Light, medium and dark entries for one method (or AeroPress sub-mode).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoastTable {
    pub light: RoastEntry,
    pub medium: RoastEntry,
    pub dark: RoastEntry,
}

impl RoastTable {
    pub const fn entry(&self, roast: RoastLevel) -> &RoastEntry {
        match roast {
            RoastLevel::Light => &self.light,
            RoastLevel::Medium => &self.medium,
            RoastLevel::Dark => &self.dark,
        }
    }
}

/// Shape of a method's slice of the table.
///
/// AeroPress carries an extra key level; every other method goes straight
/// from roast to entry.
#[derive(Debug, Clone, Copy)]
pub enum MethodTable {
    Standard(&'static RoastTable),
    Aeropress {
        immersion: &'static RoastTable,
        espresso: &'static RoastTable,
    },
}

impl MethodTable {
    pub fn roasts(&self, aeropress_mode: AeropressMode) -> &'static RoastTable {
        match *self {
            MethodTable::Standard(table) => table,
            MethodTable::Aeropress { immersion, espresso } => match aeropress_mode {
                AeropressMode::Immersion => immersion,
                AeropressMode::Espresso => espresso,
            },
        }
    }
}

pub fn method_table(method: BrewMethod) -> MethodTable {
    match method {
        BrewMethod::PourOver => MethodTable::Standard(&POUR_OVER),
        BrewMethod::FrenchPress => MethodTable::Standard(&FRENCH_PRESS),
        BrewMethod::Aeropress => MethodTable::Aeropress {
            immersion: &AEROPRESS_IMMERSION,
            espresso: &AEROPRESS_ESPRESSO,
        },
        BrewMethod::Espresso => MethodTable::Standard(&ESPRESSO),
        BrewMethod::PregroundEspresso => MethodTable::Standard(&PREGROUND_ESPRESSO),
        BrewMethod::Cowboy => MethodTable::Standard(&COWBOY),
    }
}

/// `aeropress_mode` is only consulted when `method` is AeroPress.
pub fn roast_entry(
    method: BrewMethod,
    aeropress_mode: AeropressMode,
    roast: RoastLevel,
) -> &'static RoastEntry {
    method_table(method).roasts(aeropress_mode).entry(roast)
}

pub fn lookup(
    method: BrewMethod,
    aeropress_mode: AeropressMode,
    roast: RoastLevel,
    quality: QualityLevel,
) -> &'static BrewConfig {
    roast_entry(method, aeropress_mode, roast).config(quality)
}

pub fn spoon_weight(method: BrewMethod, aeropress_mode: AeropressMode, roast: RoastLevel) -> u32 {
    roast_entry(method, aeropress_mode, roast).spoon_weight_g
}

/// Fixed explanation of how a roast level behaves during extraction.
pub fn roast_description(roast: RoastLevel) -> &'static str {
    match roast {
        RoastLevel::Light => {
            "Dense beans with low porosity require finer grind and higher ratios for proper extraction."
        }
        RoastLevel::Medium => "Balanced solubility with moderate density.",
        RoastLevel::Dark => {
            "Highly porous and soluble; prone to over-extraction. Use coarser grind and tighter ratios."
        }
    }
}

const fn brew(
    ratio: f64,
    temperature: &'static str,
    recommended_grind: GrindSize,
    brew_time: &'static str,
    rationale: &'static str,
) -> BrewConfig {
    BrewConfig {
        ratio,
        temperature,
        recommended_grind,
        brew_time,
        rationale,
    }
}

const fn per_roast(spoon_weight_g: u32, high: BrewConfig, low: BrewConfig) -> RoastEntry {
    RoastEntry {
        spoon_weight_g,
        high,
        low,
    }
}

#[rustfmt::skip]
static POUR_OVER: RoastTable = RoastTable {
    light: per_roast(
        9,
        brew(17.0, "100°C / 212°F", MediumFine, "2:30-3:30",
            "High ratio to highlight delicate floral and acidic notes."),
        brew(16.0, "96°C / 205°F", MediumFine, "2:30-3:30",
            "Slightly tighter ratio to add body and mask potential under-development."),
    ),
    medium: per_roast(
        8,
        brew(16.0, "93°C / 200°F", Medium, "2:30-3:30",
            "Balanced sweetness and acidity with moderate extraction."),
        brew(15.0, "90°C / 195°F", Medium, "2:30-3:30",
            "Stronger brew to emphasize chocolatey notes over clarity."),
    ),
    dark: per_roast(
        7,
        brew(15.0, "85°C / 185°F", Medium, "2:30-3:30",
            "Rich and heavy body. Lower temp prevents bitterness."),
        brew(14.0, "80°C / 176°F", MediumCoarse, "2:30-3:30",
            "Very strong. Punchy. Ideal for adding milk or sugar."),
    ),
};

#[rustfmt::skip]
static FRENCH_PRESS: RoastTable = RoastTable {
    light: per_roast(
        9,
        brew(14.0, "98°C / 208°F", Coarse, "4:00",
            "Immersion requires tighter ratio. Coarse grind for clean separation."),
        brew(13.0, "95°C / 203°F", Coarse, "4:00",
            "Fuller body with stronger concentration."),
    ),
    medium: per_roast(
        8,
        brew(13.0, "92°C / 198°F", MediumCoarse, "4:00",
            "Classic French press ratio with balanced extraction."),
        brew(12.0, "88°C / 190°F", MediumCoarse, "4:00",
            "Strong and bold. Perfect for morning coffee."),
    ),
    dark: per_roast(
        7,
        brew(13.0, "83°C / 181°F", Coarse, "4:00",
            "Prevent over-extraction with lower temp and coarse grind."),
        brew(12.0, "80°C / 176°F", Coarse, "4:00",
            "Intense and concentrated. Great with milk."),
    ),
};

#[rustfmt::skip]
static AEROPRESS_IMMERSION: RoastTable = RoastTable {
    light: per_roast(
        9,
        brew(15.0, "96°C / 205°F", MediumFine, "1:30-2:00",
            "Shorter immersion time with finer grind for light roasts."),
        brew(14.0, "93°C / 199°F", MediumFine, "1:30-2:00",
            "Concentrated and smooth with good body."),
    ),
    medium: per_roast(
        8,
        brew(14.0, "90°C / 194°F", MediumFine, "1:30-2:00",
            "Versatile ratio for clean, balanced cup."),
        brew(13.0, "87°C / 189°F", Medium, "1:30-2:00",
            "Rich and full-bodied AeroPress brew."),
    ),
    dark: per_roast(
        7,
        brew(13.0, "82°C / 180°F", Medium, "1:30-2:00",
            "Lower temp prevents bitter extraction."),
        brew(12.0, "78°C / 172°F", Medium, "1:30-2:00",
            "Strong concentrate perfect for dilution or milk drinks."),
    ),
};

#[rustfmt::skip]
static AEROPRESS_ESPRESSO: RoastTable = RoastTable {
    light: per_roast(
        9,
        brew(3.0, "96°C / 205°F", Fine, "30-45s",
            "Lungo-style shot with extended ratio for light roasts."),
        brew(2.5, "93°C / 199°F", Fine, "30-45s",
            "Concentrated espresso-style shot with good clarity."),
    ),
    medium: per_roast(
        8,
        brew(2.5, "90°C / 194°F", Fine, "30-45s",
            "Classic espresso ratio with balanced sweetness."),
        brew(2.0, "87°C / 189°F", Fine, "30-45s",
            "Ristretto-style shot. Intense and syrupy."),
    ),
    dark: per_roast(
        7,
        brew(2.0, "82°C / 180°F", Fine, "30-45s",
            "Short ratio prevents over-extraction of bitter compounds."),
        brew(1.5, "78°C / 172°F", Fine, "30-45s",
            "Ultra-concentrated shot. Perfect for milk-based drinks."),
    ),
};

#[rustfmt::skip]
static ESPRESSO: RoastTable = RoastTable {
    light: per_roast(
        9,
        brew(3.0, "96°C / 205°F", ExtraFine, "25-30s",
            "Lungo ratio for light roasts. Bright and complex."),
        brew(2.5, "93°C / 199°F", ExtraFine, "25-30s",
            "Extended extraction for dense light roast beans."),
    ),
    medium: per_roast(
        8,
        brew(2.5, "90°C / 194°F", ExtraFine, "25-30s",
            "Traditional espresso ratio. Sweet and balanced."),
        brew(2.0, "87°C / 189°F", ExtraFine, "25-30s",
            "Ristretto ratio for concentrated sweetness."),
    ),
    dark: per_roast(
        7,
        brew(2.0, "82°C / 180°F", ExtraFine, "25-30s",
            "Short ratio to avoid harsh bitterness."),
        brew(1.5, "78°C / 172°F", ExtraFine, "25-30s",
            "Ultra-short pull. Thick and syrupy body."),
    ),
};

// Espresso grind, but brewed as a pour-over: filter-class ratios.
#[rustfmt::skip]
static PREGROUND_ESPRESSO: RoastTable = RoastTable {
    light: per_roast(
        9,
        brew(16.0, "98°C / 208°F", ExtraFine, "5:00-7:00",
            "Adapted for espresso grind. Expect slow flow and longer brew time."),
        brew(15.0, "95°C / 203°F", ExtraFine, "5:00-7:00",
            "Tighter ratio compensates for fine grind resistance."),
    ),
    medium: per_roast(
        8,
        brew(15.0, "91°C / 196°F", ExtraFine, "5:00-7:00",
            "Making the best of espresso grind in pour-over situation."),
        brew(14.0, "88°C / 190°F", ExtraFine, "5:00-7:00",
            "Stronger brew to mask any over-extraction from fine grind."),
    ),
    dark: per_roast(
        7,
        brew(14.0, "82°C / 180°F", ExtraFine, "5:00-7:00",
            "Lower temp critical to prevent bitterness with fine grind."),
        brew(13.0, "78°C / 172°F", ExtraFine, "5:00-7:00",
            "Camping survival mode. Strong and serviceable."),
    ),
};

#[rustfmt::skip]
static COWBOY: RoastTable = RoastTable {
    light: per_roast(
        9,
        brew(15.0, "98°C / 208°F", Medium, "4:00-5:00",
            "Mug immersion then filter. Use whatever grind you have."),
        brew(14.0, "95°C / 203°F", Medium, "4:00-5:00",
            "Improvised brewing. Adjust based on available equipment."),
    ),
    medium: per_roast(
        8,
        brew(14.0, "91°C / 196°F", Medium, "4:00-5:00",
            "Camping-friendly method. Flexible and forgiving."),
        brew(13.0, "88°C / 190°F", Medium, "4:00-5:00",
            "Strong cowboy coffee. Works with any grind size."),
    ),
    dark: per_roast(
        7,
        brew(13.0, "82°C / 180°F", Coarse, "4:00-5:00",
            "Rustic brewing method. Coarser grind if available."),
        brew(12.0, "78°C / 172°F", Coarse, "4:00-5:00",
            "Bold camping brew. Make do with what you have."),
    ),
};
