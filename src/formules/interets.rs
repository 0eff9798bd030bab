// src/formules/interets.rs
//
// Intérêts composés mensuellement, versements en fin de période.

use super::{duree_en_mois, non_negatif, positif, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frequence {
    Mensuelle,
    Annuelle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BilanAnnuel {
    pub annee: u32,
    pub valeur: f64,
    pub interets: f64,
    pub principal: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultatInterets {
    pub valeur_totale: f64,
    pub interets_totaux: f64,
    pub principal_total: f64,
    /// Année 0 (dépôt initial) puis une ligne par année.
    pub par_annee: Vec<BilanAnnuel>,
}

pub fn calculer_interets(
    capital: f64,
    taux_annuel: f64,
    annees: u32,
    versement: f64,
    frequence: Frequence,
) -> Result<ResultatInterets> {
    let capital = positif("capital", capital)?;
    let taux_mensuel = non_negatif("taux", taux_annuel)? / 100.0 / 12.0;
    let versement = non_negatif("versement", versement)?;
    let mois_total = duree_en_mois(annees)?;

    let mut solde = capital;
    let mut principal = capital;
    let mut interets = 0.0;
    let mut par_annee = vec![BilanAnnuel {
        annee: 0,
        valeur: solde,
        interets: 0.0,
        principal,
    }];

    for mois in 1..=mois_total {
        let du_mois = solde * taux_mensuel;
        solde += du_mois;
        interets += du_mois;

        let verse = match frequence {
            Frequence::Mensuelle => true,
            Frequence::Annuelle => mois % 12 == 0,
        };
        if verse {
            solde += versement;
            principal += versement;
        }

        if mois % 12 == 0 {
            par_annee.push(BilanAnnuel {
                annee: mois / 12,
                valeur: solde,
                interets,
                principal,
            });
        }
    }

    Ok(ResultatInterets {
        valeur_totale: solde,
        interets_totaux: interets,
        principal_total: principal,
        par_annee,
    })
}
