// src/noyau/jetons.rs

use super::balayage::{balayer, GenreLexeme};
use super::erreur::{ErreurEval, Result};

/// Opérateurs binaires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance, // ^
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

impl Operateur {
    /// `+ -` < `× ÷` < `^`
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
            Operateur::Puissance => 3,
        }
    }

    pub fn associativite(self) -> Associativite {
        match self {
            Operateur::Puissance => Associativite::Droite,
            _ => Associativite::Gauche,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
            Operateur::Puissance => '^',
        }
    }
}

/// Fonctions unaires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log, // base 10
    Ln,
    Racine, // √
}

impl Fonction {
    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Log => "log",
            Fonction::Ln => "ln",
            Fonction::Racine => "√",
        }
    }

    pub fn est_trigo(self) -> bool {
        matches!(self, Fonction::Sin | Fonction::Cos | Fonction::Tan)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => std::f64::consts::PI,
            Constante::E => std::f64::consts::E,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Constante::Pi => "π",
            Constante::E => "e",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Nombre(f64),
    Constante(Constante),
    Fonction(Fonction),
    Op(Operateur),
    LPar,
    RPar,
}

impl Tok {
    /// Après ces jetons, un '-' est unaire.
    fn ouvre_operande(&self) -> bool {
        matches!(self, Tok::Op(_) | Tok::LPar)
    }
}

/// Tokenize une chaîne (déjà prétraitée) en jetons.
///
/// - nombres décimaux, π / pi, e
/// - fonctions sin cos tan log ln √ (ou sqrt)
/// - opérateurs + - × ÷ ^ (ou * /), parenthèses
/// - moins unaire résolu ici (voir `resoudre_moins_unaire`)
///
/// Échoue (Lexicale) sur tout fragment non reconnu, y compris x, y et '='
/// qui n’ont pas de sens pour l’évaluation scalaire.
pub fn tokenize(s: &str) -> Result<Vec<Tok>> {
    let mut bruts = Vec::new();

    for lx in balayer(s) {
        let tok = match lx.genre {
            GenreLexeme::Nombre => {
                let v = lx
                    .texte
                    .parse::<f64>()
                    .map_err(|_| ErreurEval::lexicale(&lx.texte, lx.debut))?;
                Tok::Nombre(v)
            }
            GenreLexeme::Constante(c) => Tok::Constante(c),
            GenreLexeme::Fonction(f) => Tok::Fonction(f),
            GenreLexeme::Op(op) => Tok::Op(op),
            GenreLexeme::ParOuvrante => Tok::LPar,
            GenreLexeme::ParFermante => Tok::RPar,
            GenreLexeme::Variable(_) | GenreLexeme::Egal | GenreLexeme::Inconnu => {
                return Err(ErreurEval::lexicale(lx.texte, lx.debut));
            }
        };
        bruts.push(tok);
    }

    Ok(resoudre_moins_unaire(&bruts))
}

/// Moins unaire : un '-' en tête, ou juste après un opérateur ou '(' :
/// - suivi d’un nombre (ou d’une constante) => replié dans la valeur
/// - suivi de '(' ou d’une fonction         => `-1 ×` inséré
/// - sinon                                  => laissé tel quel (binaire)
///
/// Le contexte « précédent » est lu sur les jetons bruts.
fn resoudre_moins_unaire(bruts: &[Tok]) -> Vec<Tok> {
    let mut out = Vec::with_capacity(bruts.len());
    let mut i = 0;

    while i < bruts.len() {
        let tok = bruts[i];
        let unaire = tok == Tok::Op(Operateur::Moins)
            && (i == 0 || bruts[i - 1].ouvre_operande());

        if !unaire {
            out.push(tok);
            i += 1;
            continue;
        }

        match bruts.get(i + 1) {
            Some(Tok::Nombre(v)) => {
                out.push(Tok::Nombre(-v));
                i += 2;
            }
            Some(Tok::Constante(c)) => {
                out.push(Tok::Nombre(-c.valeur()));
                i += 2;
            }
            Some(Tok::LPar) | Some(Tok::Fonction(_)) => {
                out.push(Tok::Nombre(-1.0));
                out.push(Tok::Op(Operateur::Fois));
                i += 1;
            }
            _ => {
                out.push(tok);
                i += 1;
            }
        }
    }

    out
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Nombre(v) => format!("{v}"),
            Tok::Constante(c) => c.symbole().to_string(),
            Tok::Fonction(f) => f.nom().to_string(),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
