// src/noyau/balayage.rs
//
// Balayage lexical partagé (prétraitement + jetons)
// --------------------------------------------------
// Grammaire précise des lexèmes :
// - nombre      : \d+(\.\d*)?  ou  \.\d+ , exposant optionnel (e|E)[+-]?\d+
//                 collé à un chiffre (relit l’affichage 1.00000000e+12)
// - opérateurs  : + - × ÷ ^   (alias ASCII : * => ×, / => ÷)
// - ( ) =
// - mots        : une suite de lettres ASCII est découpée par plus long
//                 préfixe connu (sqrt sin cos tan log ln pi e x y),
//                 insensible à la casse ; √ et π sont des mots d’un caractère.
// - tout le reste : Inconnu (gardé tel quel, la suite décide)
// Les espaces sont ignorés.

use super::jetons::{Constante, Fonction, Operateur};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GenreLexeme {
    Nombre,
    Op(Operateur),
    ParOuvrante,
    ParFermante,
    Egal,
    Fonction(Fonction),
    Constante(Constante),
    Variable(char),
    Inconnu,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Lexeme {
    pub genre: GenreLexeme,
    pub texte: String,
    /// Position (en caractères) du premier caractère.
    pub debut: usize,
    /// Position (en caractères) juste après le dernier.
    pub fin: usize,
}

/// Noms reconnus dans une suite de lettres, du plus long au plus court.
const NOMS: [(&str, GenreLexeme); 10] = [
    ("sqrt", GenreLexeme::Fonction(Fonction::Racine)),
    ("sin", GenreLexeme::Fonction(Fonction::Sin)),
    ("cos", GenreLexeme::Fonction(Fonction::Cos)),
    ("tan", GenreLexeme::Fonction(Fonction::Tan)),
    ("log", GenreLexeme::Fonction(Fonction::Log)),
    ("ln", GenreLexeme::Fonction(Fonction::Ln)),
    ("pi", GenreLexeme::Constante(Constante::Pi)),
    ("e", GenreLexeme::Constante(Constante::E)),
    ("x", GenreLexeme::Variable('x')),
    ("y", GenreLexeme::Variable('y')),
];

/// Découpe une chaîne en lexèmes. N’échoue jamais : l’inconnu est un lexème.
pub fn balayer(s: &str) -> Vec<Lexeme> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    let texte = |a: usize, b: usize| -> String { chars[a..b].iter().collect() };

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre : 12, 12., 12.5, .5
        let debut_nombre =
            c.is_ascii_digit() || (c == '.' && chars.get(i + 1).is_some_and(|d| d.is_ascii_digit()));
        if debut_nombre {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            if chars[i - 1].is_ascii_digit() {
                i += longueur_exposant(&chars[i..]);
            }
            out.push(Lexeme {
                genre: GenreLexeme::Nombre,
                texte: texte(start, i),
                debut: start,
                fin: i,
            });
            continue;
        }

        let simple = match c {
            '+' => Some(GenreLexeme::Op(Operateur::Plus)),
            '-' => Some(GenreLexeme::Op(Operateur::Moins)),
            '×' | '*' => Some(GenreLexeme::Op(Operateur::Fois)),
            '÷' | '/' => Some(GenreLexeme::Op(Operateur::Divise)),
            '^' => Some(GenreLexeme::Op(Operateur::Puissance)),
            '(' => Some(GenreLexeme::ParOuvrante),
            ')' => Some(GenreLexeme::ParFermante),
            '=' => Some(GenreLexeme::Egal),
            '√' => Some(GenreLexeme::Fonction(Fonction::Racine)),
            'π' => Some(GenreLexeme::Constante(Constante::Pi)),
            _ => None,
        };
        if let Some(genre) = simple {
            out.push(Lexeme {
                genre,
                texte: c.to_string(),
                debut: i,
                fin: i + 1,
            });
            i += 1;
            continue;
        }

        // Mots : suite de lettres ASCII découpée en noms connus
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            decouper_mot(&chars[start..i], start, &mut out);
            continue;
        }

        out.push(Lexeme {
            genre: GenreLexeme::Inconnu,
            texte: c.to_string(),
            debut: i,
            fin: i + 1,
        });
        i += 1;
    }

    out
}

/// Exposant `e12`, `E-9`, `e+12` en tête de `reste` ; 0 si absent
/// (`2e` reste 2 puis la constante e).
fn longueur_exposant(reste: &[char]) -> usize {
    let signe = match reste {
        ['e' | 'E', '+' | '-', ..] => 2,
        ['e' | 'E', ..] => 1,
        _ => return 0,
    };
    let chiffres = reste[signe..]
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if chiffres == 0 {
        0
    } else {
        signe + chiffres
    }
}

/// Plus long préfixe connu, répété ; le reste non reconnu devient un seul Inconnu.
fn decouper_mot(mot: &[char], decalage: usize, out: &mut Vec<Lexeme>) {
    let minuscule: String = mot.iter().map(|c| c.to_ascii_lowercase()).collect();
    let mut pos = 0;

    while pos < mot.len() {
        let reste = &minuscule[pos..];
        let trouve = NOMS
            .iter()
            .filter(|(nom, _)| reste.starts_with(nom))
            .max_by_key(|(nom, _)| nom.len());

        match trouve {
            Some((nom, genre)) => {
                let n = nom.len();
                out.push(Lexeme {
                    genre: *genre,
                    texte: mot[pos..pos + n].iter().collect(),
                    debut: decalage + pos,
                    fin: decalage + pos + n,
                });
                pos += n;
            }
            None => {
                out.push(Lexeme {
                    genre: GenreLexeme::Inconnu,
                    texte: mot[pos..].iter().collect(),
                    debut: decalage + pos,
                    fin: decalage + mot.len(),
                });
                return;
            }
        }
    }
}
