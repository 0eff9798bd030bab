//! Noyau scientifique
//!
//! Organisation interne :
//! - balayage.rs      : grammaire des lexèmes (partagée)
//! - pretraitement.rs : multiplication implicite + formes de tracé (y=…, f=g)
//! - jetons.rs        : tokenisation + moins unaire
//! - rpn.rs           : shunting-yard
//! - calcul.rs        : évaluation de la RPN (pile de f64)
//! - format.rs        : présentation (scientifique, monnaie, pourcentage)
//! - reglages.rs      : mode d’angle + format d’affichage
//! - erreur.rs        : taxonomie des erreurs
//! - eval.rs          : pipeline complet

pub mod balayage;
pub mod calcul;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod pretraitement;
pub mod reglages;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurEval, GenreErreur, Result};
pub use eval::{evaluate, evaluer_affichage, evaluer_avec_demarche, Demarche, Evaluation};
pub use pretraitement::{pretraiter, Pretraite, TypeTrace};
pub use reglages::{FormatNombre, ModeAngle, Reglages};
