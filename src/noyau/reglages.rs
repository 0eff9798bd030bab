// src/noyau/reglages.rs
//
// Réglages du noyau : mode d’angle + format d’affichage.
// Aucun état global : les réglages sont passés explicitement à chaque appel.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Variable d’environnement lue par `Reglages::depuis_env`.
pub const ENV_MODE_ANGLE: &str = "CALC_MODE_ANGLE";

/// Unité d’angle pour sin/cos/tan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModeAngle {
    #[default]
    #[serde(rename = "radians")]
    Radians,
    #[serde(rename = "degrees", alias = "degres")]
    Degres,
}

impl ModeAngle {
    /// Convertit un angle saisi dans ce mode en radians.
    pub fn en_radians(self, angle: f64) -> f64 {
        match self {
            ModeAngle::Radians => angle,
            ModeAngle::Degres => angle.to_radians(),
        }
    }

    pub fn bascule(self) -> Self {
        match self {
            ModeAngle::Radians => ModeAngle::Degres,
            ModeAngle::Degres => ModeAngle::Radians,
        }
    }

    /// Libellé court (bouton Rad/Deg).
    pub fn libelle(self) -> &'static str {
        match self {
            ModeAngle::Radians => "Rad",
            ModeAngle::Degres => "Deg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("mode d’angle inconnu : {0:?} (attendu radians ou degrees)")]
pub struct ModeAngleInconnu(pub String);

impl FromStr for ModeAngle {
    type Err = ModeAngleInconnu;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "radians" | "radian" | "rad" => Ok(ModeAngle::Radians),
            "degrees" | "degree" | "degres" | "degrés" | "deg" => Ok(ModeAngle::Degres),
            _ => Err(ModeAngleInconnu(s.to_string())),
        }
    }
}

/// Politique d’affichage numérique (arrondi pour l’affichage seulement).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatNombre {
    /// |x| ≥ seuil_haut => notation scientifique.
    pub seuil_haut: f64,
    /// 0 < |x| < seuil_bas => notation scientifique.
    pub seuil_bas: f64,
    /// Chiffres significatifs en notation scientifique.
    pub chiffres_scientifiques: usize,
    /// Chiffres significatifs sinon (gomme le bruit flottant).
    pub chiffres_significatifs: usize,
}

impl Default for FormatNombre {
    fn default() -> Self {
        Self {
            seuil_haut: 1e12,
            seuil_bas: 1e-9,
            chiffres_scientifiques: 9,
            chiffres_significatifs: 15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Reglages {
    pub mode_angle: ModeAngle,
    pub format: FormatNombre,
}

impl Reglages {
    pub fn avec_mode(mode_angle: ModeAngle) -> Self {
        Self {
            mode_angle,
            ..Self::default()
        }
    }

    /// Réglages par défaut, mode d’angle pris dans `CALC_MODE_ANGLE` si présent.
    pub fn depuis_env() -> Self {
        let mut r = Self::default();
        if let Ok(v) = std::env::var(ENV_MODE_ANGLE) {
            match v.parse::<ModeAngle>() {
                Ok(mode) => r.mode_angle = mode,
                Err(e) => log::warn!("{ENV_MODE_ANGLE} ignoré : {e}"),
            }
        }
        r
    }
}
