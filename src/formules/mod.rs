//! Calculatrices simples : fonctions `entrées -> sorties`, sans état.
//!
//! Chaque fonction valide ses contraintes de domaine (poids positif,
//! dénominateur non nul...) et échoue avec `ErreurFormule`.

pub mod fraction;
pub mod imc;
pub mod interets;
pub mod pourcentage;
pub mod pret;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurFormule {
    #[error("{champ} doit être strictement positif (reçu {valeur})")]
    NonPositif { champ: &'static str, valeur: f64 },

    #[error("{champ} ne peut pas être négatif (reçu {valeur})")]
    Negatif { champ: &'static str, valeur: f64 },

    #[error("{champ} doit être un nombre fini")]
    NonFini { champ: &'static str },

    #[error("{champ} ne peut pas dépasser {max} (reçu {valeur})")]
    TropGrand {
        champ: &'static str,
        valeur: u32,
        max: u32,
    },

    #[error("le dénominateur ne peut pas être nul")]
    DenominateurNul,

    #[error("division par zéro")]
    DivisionParZero,
}

pub type Result<T> = std::result::Result<T, ErreurFormule>;

/// Durée maximale (prêts, placements), en années.
pub const ANNEES_MAX: u32 = 100;

pub(crate) fn positif(champ: &'static str, valeur: f64) -> Result<f64> {
    if !valeur.is_finite() {
        return Err(ErreurFormule::NonFini { champ });
    }
    if valeur <= 0.0 {
        return Err(ErreurFormule::NonPositif { champ, valeur });
    }
    Ok(valeur)
}

pub(crate) fn non_negatif(champ: &'static str, valeur: f64) -> Result<f64> {
    if !valeur.is_finite() {
        return Err(ErreurFormule::NonFini { champ });
    }
    if valeur < 0.0 {
        return Err(ErreurFormule::Negatif { champ, valeur });
    }
    Ok(valeur)
}

/// Durée en années, dans 1..=ANNEES_MAX ; renvoie le nombre de mois.
pub(crate) fn duree_en_mois(annees: u32) -> Result<u32> {
    if annees == 0 {
        return Err(ErreurFormule::NonPositif {
            champ: "durée",
            valeur: 0.0,
        });
    }
    if annees > ANNEES_MAX {
        return Err(ErreurFormule::TropGrand {
            champ: "durée",
            valeur: annees,
            max: ANNEES_MAX,
        });
    }
    Ok(annees * 12)
}
