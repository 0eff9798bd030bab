// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// - Lexicale      : fragment non reconnu par le balayage
// - Syntaxe       : parenthèses / arrangement opérateurs-opérandes
// - DivisionParZero : toujours distincte (affichée "Infinity" côté UI)
// - Evaluation    : résultat NaN ou non fini

use thiserror::Error;

/// Sous-genres de l’erreur de syntaxe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Syntaxe {
    #[error("parenthèses non appariées")]
    ParenthesesNonAppariees,

    #[error("expression invalide")]
    ExpressionInvalide,
}

/// Erreur d’évaluation (premier échec rencontré, le pipeline s’arrête là).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurEval {
    #[error("erreur lexicale : « {fragment} » non reconnu (position {position})")]
    Lexicale { fragment: String, position: usize },

    #[error("erreur de syntaxe : {0}")]
    Syntaxe(Syntaxe),

    #[error("erreur arithmétique : division par zéro")]
    DivisionParZero,

    #[error("erreur d’évaluation : {0}")]
    Evaluation(String),
}

/// Genre seul (pour les appelants qui n’ont pas besoin du détail).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreErreur {
    Lexicale,
    Syntaxe,
    Arithmetique,
    Evaluation,
}

/// Affichage UI pour une division par zéro.
pub const AFFICHAGE_INFINI: &str = "Infinity";

/// Affichage UI pour toute autre erreur.
pub const AFFICHAGE_ERREUR: &str = "Error";

impl ErreurEval {
    pub fn lexicale(fragment: impl Into<String>, position: usize) -> Self {
        Self::Lexicale {
            fragment: fragment.into(),
            position,
        }
    }

    pub fn parentheses() -> Self {
        Self::Syntaxe(Syntaxe::ParenthesesNonAppariees)
    }

    pub fn invalide() -> Self {
        Self::Syntaxe(Syntaxe::ExpressionInvalide)
    }

    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Ramène la position d’une erreur lexicale dans un autre repère
    /// (texte prétraité -> saisie). Les autres genres passent tels quels.
    pub fn repositionner(self, vers: impl FnOnce(usize) -> usize) -> Self {
        match self {
            Self::Lexicale { fragment, position } => Self::Lexicale {
                fragment,
                position: vers(position),
            },
            autre => autre,
        }
    }

    pub fn genre(&self) -> GenreErreur {
        match self {
            Self::Lexicale { .. } => GenreErreur::Lexicale,
            Self::Syntaxe(_) => GenreErreur::Syntaxe,
            Self::DivisionParZero => GenreErreur::Arithmetique,
            Self::Evaluation(_) => GenreErreur::Evaluation,
        }
    }

    /// "Infinity" pour la division par zéro, "Error" pour le reste.
    pub fn affichage(&self) -> &'static str {
        match self {
            Self::DivisionParZero => AFFICHAGE_INFINI,
            _ => AFFICHAGE_ERREUR,
        }
    }
}

pub type Result<T> = std::result::Result<T, ErreurEval>;
