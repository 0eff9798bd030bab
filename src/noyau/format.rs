// src/noyau/format.rs
//
// Présentation des nombres (affichage seulement, jamais pendant le calcul).
// Partagé par l’évaluateur et les formules simples.

use super::erreur::{ErreurEval, AFFICHAGE_ERREUR, AFFICHAGE_INFINI};
use super::reglages::FormatNombre;

/* ------------------------ Résultat de l’évaluateur ------------------------ */

/// Affichage d’un résultat :
/// - |x| ≥ seuil_haut, ou 0 < |x| < seuil_bas : notation scientifique
/// - sinon : arrondi à `chiffres_significatifs` (gomme 0.1+0.2 = 0.30000000000000004)
pub fn formater_resultat(x: f64, f: &FormatNombre) -> String {
    if x.is_nan() {
        return AFFICHAGE_ERREUR.to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 {
            AFFICHAGE_INFINI.to_string()
        } else {
            format!("-{AFFICHAGE_INFINI}")
        };
    }
    // couvre aussi -0
    if x == 0.0 {
        return "0".to_string();
    }

    let a = x.abs();
    if a >= f.seuil_haut || a < f.seuil_bas {
        return notation_scientifique(x, f.chiffres_scientifiques);
    }

    let arrondi = arrondir_significatifs(x, f.chiffres_significatifs);
    format!("{arrondi}")
}

/// Résultat OU erreur => texte d’écran ("Infinity" / "Error" pour les erreurs).
pub fn presenter(resultat: &Result<f64, ErreurEval>, f: &FormatNombre) -> String {
    match resultat {
        Ok(x) => formater_resultat(*x, f),
        Err(e) => e.affichage().to_string(),
    }
}

/// Mantisse à `chiffres` chiffres significatifs, exposant signé : 1.00000000e+12
pub fn notation_scientifique(x: f64, chiffres: usize) -> String {
    let decimales = chiffres.saturating_sub(1);
    let s = format!("{x:.decimales$e}");
    match s.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => s,
    }
}

fn arrondir_significatifs(x: f64, chiffres: usize) -> f64 {
    if chiffres == 0 {
        return x;
    }
    let decimales = chiffres - 1;
    format!("{x:.decimales$e}").parse::<f64>().unwrap_or(x)
}

/* ------------------------ Formules simples ------------------------ */

/// Décimales fixes ; "-0.00" devient "0.00".
pub fn formater_fixe(x: f64, decimales: usize) -> String {
    let s = format!("{x:.decimales$}");
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        return s[1..].to_string();
    }
    s
}

/// "1234567" -> "1,234,567" (partie entière seulement, sans signe)
pub fn grouper_milliers(entier: &str) -> String {
    let n = entier.chars().count();
    let mut out = String::with_capacity(n + n / 3);
    for (i, c) in entier.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Monnaie (en-US) : $1,234.56 ; -$1,234.56
pub fn formater_monnaie(x: f64) -> String {
    let fixe = formater_fixe(x.abs(), 2);
    let (entier, frac) = fixe.split_once('.').unwrap_or((fixe.as_str(), "00"));
    let signe = if x < 0.0 && fixe != "0.00" { "-" } else { "" };
    format!("{signe}${}.{frac}", grouper_milliers(entier))
}

/// Pourcentage : 12.5 -> "12.50%" (x est déjà en pourcent)
pub fn formater_pourcentage(x: f64, decimales: usize) -> String {
    format!("{}%", formater_fixe(x, decimales))
}
