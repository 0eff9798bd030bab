//! Calculatrice scientifique: bibliothèque
//!
//! - `noyau`    : évaluateur d’expressions (prétraitement, jetons, shunting-yard, RPN)
//! - `formules` : calculatrices simples (IMC, prêt, intérêts, pourcentages, fractions)
//!
//! L’UI (src/app) ne consomme que l’API publique de ces deux modules.

pub mod formules;
pub mod noyau;

pub use noyau::{evaluate, ErreurEval, ModeAngle};
