//! src/app/etat.rs
//!
//! État UI (sans vue) : l’écran de la calculatrice, le mode d’angle et la
//! dernière démarche. L’évaluation elle-même est déléguée au noyau.
//!
//! Contrats :
//! - l’écran n’est jamais vide (au pire "0")
//! - "Error" / "Infinity" sont des états d’écran : la saisie suivante repart de zéro
//! - aucune erreur du noyau ne remonte ici autrement que par ces deux états

use calculatrice_scientifique::noyau::erreur::{AFFICHAGE_ERREUR, AFFICHAGE_INFINI};
use calculatrice_scientifique::noyau::jetons::{Constante, Fonction};
use calculatrice_scientifique::noyau::{evaluer_avec_demarche, Demarche, ModeAngle, Reglages};

/// Écran au repos.
const ECRAN_VIDE: &str = "0";

/// Saisies qui prolongent l’écran au lieu de remplacer le "0" initial.
const OPERATEURS: &str = "+-×÷^.";

/// Touches scientifiques du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpSci {
    Fonction(Fonction),
    Carre,
    Constante(Constante),
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub ecran: String,
    pub reglages: Reglages,

    // dernière évaluation réussie (panneau « Démarche »)
    pub demarche: Option<Demarche>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::depuis_env())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            ecran: ECRAN_VIDE.to_string(),
            reglages,
            demarche: None,
        }
    }

    pub fn mode_angle(&self) -> ModeAngle {
        self.reglages.mode_angle
    }

    fn ecran_en_erreur(&self) -> bool {
        self.ecran == AFFICHAGE_ERREUR || self.ecran == AFFICHAGE_INFINI
    }

    /* ------------------------ Touches ------------------------ */

    /// Chiffre, opérateur, parenthèse ou point.
    pub fn saisir(&mut self, valeur: &str) {
        if self.ecran_en_erreur() {
            self.ecran = valeur.to_string();
            return;
        }

        let prolonge = valeur.chars().next().is_some_and(|c| OPERATEURS.contains(c));
        if self.ecran == ECRAN_VIDE && !prolonge {
            self.ecran = valeur.to_string();
        } else {
            self.ecran.push_str(valeur);
        }
    }

    /// C
    pub fn effacer(&mut self) {
        self.ecran = ECRAN_VIDE.to_string();
    }

    /// ⌫ : un caractère, "0" quand il n’en reste plus.
    pub fn retour_arriere(&mut self) {
        if self.ecran_en_erreur() || self.ecran.chars().count() <= 1 {
            self.effacer();
            return;
        }
        self.ecran.pop();
    }

    /// = : remplace l’écran par le résultat, "Infinity" ou "Error".
    pub fn egal(&mut self) {
        if self.ecran.is_empty() || self.ecran_en_erreur() {
            return;
        }

        match evaluer_avec_demarche(&self.ecran, &self.reglages) {
            Ok(ev) => {
                log::debug!("{} = {}", self.ecran, ev.affichage);
                self.ecran = ev.affichage;
                self.demarche = Some(ev.demarche);
            }
            Err(e) => {
                log::debug!("évaluation refusée : {:?} ({e})", self.ecran);
                self.ecran = e.affichage().to_string();
                self.demarche = None;
            }
        }
    }

    pub fn operation_sci(&mut self, op: OpSci) {
        if self.ecran_en_erreur() {
            self.effacer();
            return;
        }

        match op {
            OpSci::Fonction(f) => self.remplacer_ou_ajouter(&format!("{}(", f.nom())),
            OpSci::Carre => self.saisir("^2"),
            OpSci::Constante(c) => self.remplacer_ou_ajouter(c.symbole()),
        }
    }

    fn remplacer_ou_ajouter(&mut self, texte: &str) {
        if self.ecran == ECRAN_VIDE {
            self.ecran = texte.to_string();
        } else {
            self.ecran.push_str(texte);
        }
    }

    pub fn basculer_angle(&mut self) {
        self.reglages.mode_angle = self.reglages.mode_angle.bascule();
    }
}
