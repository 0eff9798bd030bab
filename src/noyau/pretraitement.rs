// src/noyau/pretraitement.rs
//
// Prétraitement : réécrit la saisie concise en forme canonique AVANT les jetons.
// 1) multiplication implicite  : 2(3) 5sin(30) (1)(2) 2π (2)3  => ×
// 2) formes de tracé           : "y = f(x)" => "f(x)" (explicite)
//                                "f(x,y) = g(x,y)" => "(f) - (g)" (implicite)
// N’échoue jamais : une saisie mal formée échoue plus loin (jetons / calcul).

use super::balayage::{balayer, GenreLexeme, Lexeme};

/// Genre de tracé (consommé par un traceur, jamais par l’évaluation scalaire).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeTrace {
    Explicite,
    Implicite,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pretraite {
    pub expression: String,
    pub trace: Option<TypeTrace>,
    /// `sources[i]` : position dans la saisie du caractère `i` de `expression`.
    pub sources: Vec<usize>,
}

impl Pretraite {
    /// Position dans la saisie d’origine d’une position de `expression`.
    pub fn position_source(&self, position: usize) -> usize {
        self.sources.get(position).copied().unwrap_or(position)
    }
}

pub fn pretraiter(s: &str) -> Pretraite {
    let (expression, sources) = inserer_fois(s);
    forme_trace(expression, sources)
}

/// A puis B sans opérateur => A×B, selon la grammaire des lexèmes.
fn besoin_fois(a: &GenreLexeme, b: &GenreLexeme) -> bool {
    use GenreLexeme::*;

    let gauche_valeur = matches!(a, Nombre | Constante(_) | Variable(_) | ParFermante);
    let droite_operande = matches!(b, ParOuvrante | Fonction(_) | Constante(_) | Variable(_));
    let nombre_apres_parenthese = matches!((a, b), (ParFermante, Nombre));

    (gauche_valeur && droite_operande) || nombre_apres_parenthese
}

pub fn multiplication_implicite(s: &str) -> String {
    inserer_fois(s).0
}

/// Un `×` inséré pointe sur le caractère qui le suit.
fn inserer_fois(s: &str) -> (String, Vec<usize>) {
    let lexemes = balayer(s);
    let mut positions: Vec<usize> = lexemes
        .windows(2)
        .filter(|w| besoin_fois(&w[0].genre, &w[1].genre))
        .map(|w| w[0].fin)
        .collect();
    positions.dedup();

    let mut out = String::with_capacity(s.len() + positions.len() * 2);
    let mut sources = Vec::with_capacity(s.len() + positions.len());
    let mut suivantes = positions.iter().peekable();
    for (i, c) in s.chars().enumerate() {
        while suivantes.next_if(|&&p| p == i).is_some() {
            out.push('×');
            sources.push(i);
        }
        out.push(c);
        sources.push(i);
    }
    // insertion en toute fin : impossible (il faut un lexème après)
    (out, sources)
}

fn forme_trace(expression: String, sources: Vec<usize>) -> Pretraite {
    let lexemes = balayer(&expression);
    let chars: Vec<char> = expression.chars().collect();

    let est_y = |l: &Lexeme| matches!(l.genre, GenreLexeme::Variable('y'));
    let est_egal = |l: &Lexeme| l.genre == GenreLexeme::Egal;

    let egaux: Vec<&Lexeme> = lexemes.iter().filter(|l| est_egal(*l)).collect();
    let nb_y = lexemes.iter().filter(|l| est_y(*l)).count();

    // y = rhs  (rhs sans y ni '=')
    if let [premier, second, ..] = lexemes.as_slice() {
        if est_y(premier) && est_egal(second) && nb_y == 1 && egaux.len() == 1 {
            let mut r = Reecriture::default();
            r.recopier(&chars, &sources, second.fin, chars.len());
            return r.fin(Some(TypeTrace::Explicite));
        }
    }

    // f(x,y) = g(x,y)
    if nb_y > 0 && egaux.len() == 1 {
        let p = egaux[0].debut;
        let egal = sources[p];
        let mut r = Reecriture::default();
        r.inserer("(", egal);
        r.recopier(&chars, &sources, 0, p);
        r.inserer(") - (", egal);
        r.recopier(&chars, &sources, p + 1, chars.len());
        r.inserer(")", egal);
        return r.fin(Some(TypeTrace::Implicite));
    }

    let avec_x = lexemes
        .iter()
        .any(|l| matches!(l.genre, GenreLexeme::Variable('x')));
    let trace = (avec_x && nb_y == 0 && egaux.is_empty()).then_some(TypeTrace::Explicite);

    Pretraite {
        expression,
        trace,
        sources,
    }
}

/// Texte réécrit + positions d’origine, caractère par caractère.
#[derive(Default)]
struct Reecriture {
    texte: String,
    sources: Vec<usize>,
}

impl Reecriture {
    fn inserer(&mut self, texte: &str, source: usize) {
        for c in texte.chars() {
            self.texte.push(c);
            self.sources.push(source);
        }
    }

    /// Recopie `chars[debut..fin]` sans les espaces de bord.
    fn recopier(&mut self, chars: &[char], sources: &[usize], debut: usize, fin: usize) {
        let mut debut = debut;
        let mut fin = fin;
        while debut < fin && chars[debut].is_whitespace() {
            debut += 1;
        }
        while fin > debut && chars[fin - 1].is_whitespace() {
            fin -= 1;
        }
        self.texte.extend(&chars[debut..fin]);
        self.sources.extend_from_slice(&sources[debut..fin]);
    }

    fn fin(self, trace: Option<TypeTrace>) -> Pretraite {
        Pretraite {
            expression: self.texte,
            trace,
            sources: self.sources,
        }
    }
}
