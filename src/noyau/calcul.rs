// src/noyau/calcul.rs
//
// Évaluation RPN : une pile de f64, un seul passage.
// - Valeur   : empile
// - Fonction : dépile 1, applique, empile
// - Op       : dépile droite PUIS gauche (l’ordre compte pour - ÷ ^), applique, empile
// - fin      : exactement une valeur, finie

use super::erreur::{ErreurEval, Result};
use super::jetons::{Fonction, Operateur};
use super::reglages::ModeAngle;
use super::rpn::Rpn;

fn appliquer_fonction(f: Fonction, x: f64, mode: ModeAngle) -> f64 {
    match f {
        Fonction::Sin => mode.en_radians(x).sin(),
        Fonction::Cos => mode.en_radians(x).cos(),
        Fonction::Tan => mode.en_radians(x).tan(),
        Fonction::Log => x.log10(),
        Fonction::Ln => x.ln(),
        Fonction::Racine => x.sqrt(),
    }
}

fn appliquer_operateur(op: Operateur, gauche: f64, droite: f64) -> Result<f64> {
    Ok(match op {
        Operateur::Plus => gauche + droite,
        Operateur::Moins => gauche - droite,
        Operateur::Fois => gauche * droite,
        Operateur::Divise => {
            if droite == 0.0 {
                return Err(ErreurEval::DivisionParZero);
            }
            gauche / droite
        }
        Operateur::Puissance => gauche.powf(droite),
    })
}

/// Évalue une séquence postfixe en une seule valeur.
pub fn evaluer_rpn(rpn: &[Rpn], mode: ModeAngle) -> Result<f64> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for el in rpn {
        match *el {
            Rpn::Valeur(v) => pile.push(v),

            Rpn::Fonction(f) => {
                let x = pile.pop().ok_or_else(ErreurEval::invalide)?;
                pile.push(appliquer_fonction(f, x, mode));
            }

            Rpn::Op(op) => {
                let droite = pile.pop().ok_or_else(ErreurEval::invalide)?;
                let gauche = pile.pop().ok_or_else(ErreurEval::invalide)?;
                pile.push(appliquer_operateur(op, gauche, droite)?);
            }
        }
    }

    let resultat = match pile.as_slice() {
        [v] => *v,
        _ => return Err(ErreurEval::invalide()),
    };

    if resultat.is_nan() {
        return Err(ErreurEval::evaluation("résultat non défini (NaN)"));
    }
    if !resultat.is_finite() {
        return Err(ErreurEval::evaluation("résultat non fini"));
    }

    Ok(resultat)
}
