// src/formules/imc.rs
//
// Indice de masse corporelle (métrique : kg + cm ; impérial : lb + pieds/pouces).

use super::{non_negatif, positif, Result};

const IMC_SAIN_MIN: f64 = 18.5;
const IMC_SAIN_MAX: f64 = 24.9;
const POUCE_EN_M: f64 = 0.0254;
const LIVRE_EN_KG: f64 = 0.453592;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unites {
    Metrique,
    Imperial,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Categorie {
    Maigreur,
    Normal,
    Surpoids,
    Obesite,
}

impl Categorie {
    /// < 18.5 ≤ normal < 25 ≤ surpoids < 30 ≤ obésité
    pub fn depuis_imc(imc: f64) -> Self {
        if imc < 18.5 {
            Categorie::Maigreur
        } else if imc < 25.0 {
            Categorie::Normal
        } else if imc < 30.0 {
            Categorie::Surpoids
        } else {
            Categorie::Obesite
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            Categorie::Maigreur => "Insuffisance pondérale",
            Categorie::Normal => "Poids normal",
            Categorie::Surpoids => "Surpoids",
            Categorie::Obesite => "Obésité",
        }
    }
}

/// Écart au poids sain, en kg.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Objectif {
    Perdre(f64),
    Prendre(f64),
    DansLaNorme,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultatImc {
    pub imc: f64,
    pub categorie: Categorie,
    pub poids_sain_min_kg: f64,
    pub poids_sain_max_kg: f64,
    pub objectif: Objectif,
}

/// `taille` : cm en métrique, pieds en impérial (`pouces` en plus, ignoré en métrique).
pub fn calculer_imc(unites: Unites, poids: f64, taille: f64, pouces: f64) -> Result<ResultatImc> {
    let poids = positif("poids", poids)?;
    let taille = positif("taille", taille)?;

    let (imc, taille_m, poids_kg) = match unites {
        Unites::Metrique => {
            let m = taille / 100.0;
            (poids / (m * m), m, poids)
        }
        Unites::Imperial => {
            let total_pouces = taille * 12.0 + non_negatif("pouces", pouces)?;
            let imc = poids / (total_pouces * total_pouces) * 703.0;
            (imc, total_pouces * POUCE_EN_M, poids * LIVRE_EN_KG)
        }
    };

    let h2 = taille_m * taille_m;
    let poids_sain_min_kg = IMC_SAIN_MIN * h2;
    let poids_sain_max_kg = IMC_SAIN_MAX * h2;

    let objectif = if imc >= 25.0 {
        Objectif::Perdre(poids_kg - poids_sain_max_kg)
    } else if imc < IMC_SAIN_MIN {
        Objectif::Prendre(poids_sain_min_kg - poids_kg)
    } else {
        Objectif::DansLaNorme
    };

    Ok(ResultatImc {
        imc,
        categorie: Categorie::depuis_imc(imc),
        poids_sain_min_kg,
        poids_sain_max_kg,
        objectif,
    })
}
