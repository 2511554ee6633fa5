//! Unit conversions between the volume and mass units shown to the user.
//!
//! Every function is total over finite inputs; callers never pass negatives,
//! but nothing here rejects them.

pub const ML_PER_FL_OZ: f64 = 29.5735;
pub const FL_OZ_PER_CUP: f64 = 8.0;
pub const ML_PER_CUP: f64 = ML_PER_FL_OZ * FL_OZ_PER_CUP;
pub const GRAMS_PER_OZ: f64 = 28.3495;

/// Fluid ounces to milliliters.
#[inline]
pub fn oz_to_ml(oz: f64) -> f64 {
    oz * ML_PER_FL_OZ
}

#[inline]
pub fn ml_to_oz(ml: f64) -> f64 {
    ml / ML_PER_FL_OZ
}

/// US cups (8 fl oz) to milliliters.
#[inline]
pub fn cups_to_ml(cups: f64) -> f64 {
    cups * ML_PER_CUP
}

#[inline]
pub fn ml_to_cups(ml: f64) -> f64 {
    ml / ML_PER_CUP
}

/// Grams to avoirdupois ounces.
#[inline]
pub fn grams_to_oz(grams: f64) -> f64 {
    grams / GRAMS_PER_OZ
}

#[inline]
pub fn oz_to_grams(oz: f64) -> f64 {
    oz * GRAMS_PER_OZ
}
