// src/formules/pourcentage.rs

use super::{ErreurFormule, Result};

/// p % de v
pub fn pourcentage_de(p: f64, v: f64) -> f64 {
    p / 100.0 * v
}

/// part / tout, en pourcent
pub fn part_en_pourcentage(part: f64, tout: f64) -> Result<f64> {
    if tout == 0.0 {
        return Err(ErreurFormule::DivisionParZero);
    }
    Ok(part / tout * 100.0)
}

/// Variation relative de `de` vers `a`, en pourcent
pub fn variation_pourcentage(de: f64, a: f64) -> Result<f64> {
    if de == 0.0 {
        return Err(ErreurFormule::DivisionParZero);
    }
    Ok((a - de) / de * 100.0)
}
