//! Noyau: évaluation (pipeline réel)
//!
//! prétraitement -> jetons -> RPN (shunting-yard) -> calcul RPN -> format
//!
//! Chaque étape est pure : rien n’est partagé entre deux appels, le premier
//! échec arrête le pipeline et remonte tel quel.

use super::calcul::evaluer_rpn;
use super::erreur::Result;
use super::format::{formater_resultat, presenter};
use super::jetons::{format_tokens, tokenize};
use super::pretraitement::pretraiter;
use super::reglages::{ModeAngle, Reglages};
use super::rpn::{format_rpn, to_rpn};

/// Étapes intermédiaires (panneau « Démarche » de l’UI).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub pretraite: String,
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub affichage: String,
    pub demarche: Demarche,
}

/// API publique : évalue une expression en f64 (valeur brute, non arrondie).
pub fn evaluate(expression: &str, mode: ModeAngle) -> Result<f64> {
    evaluer_interne(expression, mode).map(|(valeur, _)| valeur)
}

/// Comme `evaluate`, avec l’affichage formaté et la démarche.
pub fn evaluer_avec_demarche(expression: &str, reglages: &Reglages) -> Result<Evaluation> {
    let (valeur, demarche) = evaluer_interne(expression, reglages.mode_angle)?;
    Ok(Evaluation {
        valeur,
        affichage: formater_resultat(valeur, &reglages.format),
        demarche,
    })
}

/// Convention d’appel de l’UI : valeur formatée, "Infinity" ou "Error".
pub fn evaluer_affichage(expression: &str, reglages: &Reglages) -> String {
    let r = evaluate(expression, reglages.mode_angle);
    presenter(&r, &reglages.format)
}

fn evaluer_interne(expression: &str, mode: ModeAngle) -> Result<(f64, Demarche)> {
    // 1) Prétraitement (la forme de tracé n’intéresse pas le scalaire)
    let pretraite = pretraiter(expression);
    log::trace!("prétraité : {:?}", pretraite.expression);

    // 2) Jetons (positions d’erreur ramenées à la saisie)
    let jetons = tokenize(&pretraite.expression)
        .map_err(|e| e.repositionner(|p| pretraite.position_source(p)))
        .inspect_err(|e| log::debug!("{expression:?} : {e}"))?;
    log::trace!("jetons : {}", format_tokens(&jetons));

    // 3) RPN
    let rpn = to_rpn(&jetons).inspect_err(|e| log::debug!("{expression:?} : {e}"))?;
    log::trace!("rpn : {}", format_rpn(&rpn));

    // 4) Calcul
    let valeur = evaluer_rpn(&rpn, mode).inspect_err(|e| log::debug!("{expression:?} : {e}"))?;

    let demarche = Demarche {
        pretraite: pretraite.expression,
        jetons: format_tokens(&jetons),
        rpn: format_rpn(&rpn),
    };
    Ok((valeur, demarche))
}
