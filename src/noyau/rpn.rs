// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfix)
// Objectif:
// - Convertir une suite de Tok en RPN, en un seul passage (O(n), sans retour arrière)
//
// Règles:
// - Nombre / constante : sortie directe (la constante est résolue en valeur)
// - Fonction : empilée ; elle sort après la parenthèse fermante de son argument
// - Opérateur op : on dépile tant que le sommet est un OPÉRATEUR (pas '(' ni fonction)
//   de précédence > op, ou de précédence égale avec op associatif à gauche
// - ')' : dépile jusqu’à '(' ; pile épuisée sans '(' => parenthèses non appariées
// - fin : '(' restante => parenthèses non appariées

use super::erreur::{ErreurEval, Result};
use super::jetons::{Associativite, Fonction, Operateur, Tok};

/// Élément d’une séquence postfixe : pas de parenthèse possible ici.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rpn {
    Valeur(f64),
    Op(Operateur),
    Fonction(Fonction),
}

/// Contenu de la pile d’opérateurs.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Pile {
    Op(Operateur),
    Fonction(Fonction),
    LPar,
}

fn doit_depiler(sommet: Operateur, op: Operateur) -> bool {
    let (p_top, p_op) = (sommet.precedence(), op.precedence());
    p_top > p_op || (p_top == p_op && op.associativite() == Associativite::Gauche)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fonction(Sin), LPar, Constante(Pi), Op(Divise), Nombre(2), RPar]
///   rpn:    [Valeur(π), Valeur(2), Op(Divise), Fonction(Sin)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Rpn>> {
    let mut out: Vec<Rpn> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Pile> = Vec::new();

    for tok in tokens.iter().copied() {
        match tok {
            Tok::Nombre(v) => out.push(Rpn::Valeur(v)),
            Tok::Constante(c) => out.push(Rpn::Valeur(c.valeur())),

            Tok::Fonction(f) => ops.push(Pile::Fonction(f)),

            Tok::Op(op) => {
                while let Some(Pile::Op(sommet)) = ops.last().copied() {
                    if !doit_depiler(sommet, op) {
                        break;
                    }
                    ops.pop();
                    out.push(Rpn::Op(sommet));
                }
                ops.push(Pile::Op(op));
            }

            Tok::LPar => ops.push(Pile::LPar),

            Tok::RPar => {
                // dépile jusqu’à '(' (incluse, jetée)
                loop {
                    match ops.pop() {
                        Some(Pile::LPar) => break,
                        Some(Pile::Op(op)) => out.push(Rpn::Op(op)),
                        Some(Pile::Fonction(f)) => out.push(Rpn::Fonction(f)),
                        None => return Err(ErreurEval::parentheses()),
                    }
                }

                // fonction au sommet : elle s’attache au groupe qu’on vient d’aplatir
                if let Some(Pile::Fonction(f)) = ops.last().copied() {
                    ops.pop();
                    out.push(Rpn::Fonction(f));
                }
            }
        }
    }

    // vide la pile ops
    while let Some(p) = ops.pop() {
        match p {
            Pile::LPar => return Err(ErreurEval::parentheses()),
            Pile::Op(op) => out.push(Rpn::Op(op)),
            Pile::Fonction(f) => out.push(Rpn::Fonction(f)),
        }
    }

    Ok(out)
}

/// Format utilitaire (démarche) : RPN en texte.
pub fn format_rpn(rpn: &[Rpn]) -> String {
    rpn.iter()
        .map(|r| match r {
            Rpn::Valeur(v) => format!("{v}"),
            Rpn::Op(op) => op.symbole().to_string(),
            Rpn::Fonction(f) => f.nom().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
