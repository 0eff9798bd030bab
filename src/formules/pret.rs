// src/formules/pret.rs
//
// Prêt à mensualités constantes + tableau d’amortissement.

use super::{duree_en_mois, non_negatif, positif, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LignePret {
    pub mois: u32,
    pub principal: f64,
    pub interets: f64,
    /// Plancher à 0 (le bruit flottant ne rend jamais le solde négatif).
    pub solde: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultatPret {
    pub mensualite: f64,
    pub total_paye: f64,
    pub interets_totaux: f64,
    pub amortissement: Vec<LignePret>,
}

/// `taux_annuel` en pourcent (5.5 = 5,5 %), `annees` dans 1..=ANNEES_MAX.
pub fn calculer_pret(montant: f64, taux_annuel: f64, annees: u32) -> Result<ResultatPret> {
    let principal = positif("montant", montant)?;
    let taux_mensuel = non_negatif("taux", taux_annuel)? / 100.0 / 12.0;
    let n = duree_en_mois(annees)?;

    let mensualite = if taux_mensuel == 0.0 {
        principal / n as f64
    } else {
        let facteur = (1.0 + taux_mensuel).powi(n as i32);
        principal * taux_mensuel * facteur / (facteur - 1.0)
    };

    let total_paye = mensualite * n as f64;

    let mut solde = principal;
    let amortissement = (1..=n)
        .map(|mois| {
            let interets = solde * taux_mensuel;
            let part_principal = mensualite - interets;
            solde -= part_principal;
            LignePret {
                mois,
                principal: part_principal,
                interets,
                solde: solde.max(0.0),
            }
        })
        .collect();

    Ok(ResultatPret {
        mensualite,
        total_paye,
        interets_totaux: total_paye - principal,
        amortissement,
    })
}
