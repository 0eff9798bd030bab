//! Tests scientifiques (campagne) : propriétés attendues du pipeline complet.
//!
//! - précédence, associativité, multiplication implicite, moins unaire
//! - genres d’erreurs (division par zéro distincte de la syntaxe)
//! - mode d’angle, constantes, seuil d’affichage 1e12, déterminisme

use super::erreur::GenreErreur;
use super::format::formater_resultat;
use super::reglages::{FormatNombre, ModeAngle, Reglages};
use super::{evaluate, evaluer_affichage};

const TOL: f64 = 1e-9;

fn eval_ok(expr: &str, mode: ModeAngle) -> f64 {
    evaluate(expr, mode).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, mode: ModeAngle, attendu: f64) {
    let v = eval_ok(expr, mode);
    assert!(
        (v - attendu).abs() < TOL,
        "expr={expr:?} mode={mode:?} : {v} ≠ {attendu}"
    );
}

fn assert_genre(expr: &str, attendu: GenreErreur) {
    match evaluate(expr, ModeAngle::Radians) {
        Ok(v) => panic!("expr={expr:?} : erreur attendue, obtenu {v}"),
        Err(e) => assert_eq!(e.genre(), attendu, "expr={expr:?} err={e}"),
    }
}

/* ------------------------ Arithmétique ------------------------ */

#[test]
fn sci_precedence() {
    assert_eq!(eval_ok("2+3×4", ModeAngle::Radians), 14.0);
    assert_eq!(eval_ok("2×3+4", ModeAngle::Radians), 10.0);
    assert_eq!(eval_ok("10-4÷2", ModeAngle::Radians), 8.0);
}

#[test]
fn sci_puissance_associative_a_droite() {
    assert_eq!(eval_ok("2^3^2", ModeAngle::Radians), 512.0);
    assert_eq!(eval_ok("(2^3)^2", ModeAngle::Radians), 64.0);
}

#[test]
fn sci_gauche_pour_le_reste() {
    assert_eq!(eval_ok("10-3-2", ModeAngle::Radians), 5.0);
    assert_eq!(eval_ok("64÷4÷2", ModeAngle::Radians), 8.0);
}

#[test]
fn sci_multiplication_implicite() {
    assert_eq!(eval_ok("2(3+4)", ModeAngle::Radians), 14.0);
    assert_eq!(eval_ok("5sin(0)", ModeAngle::Radians), 0.0);
    assert_eq!(eval_ok("5sin(0)", ModeAngle::Degres), 0.0);
    assert_eq!(eval_ok("(1+1)(2+2)", ModeAngle::Radians), 8.0);
    assert_proche("2π", ModeAngle::Radians, 2.0 * std::f64::consts::PI);
}

#[test]
fn sci_moins_unaire() {
    assert_eq!(eval_ok("-5+3", ModeAngle::Radians), -2.0);
    assert_eq!(eval_ok("-(2+3)", ModeAngle::Radians), -5.0);
    assert_eq!(eval_ok("3-(-2)", ModeAngle::Radians), 5.0);
    assert_eq!(eval_ok("2×-3", ModeAngle::Radians), -6.0);
    assert_eq!(eval_ok("-sin(0)", ModeAngle::Radians), 0.0);
    assert_proche("-π+π", ModeAngle::Radians, 0.0);
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_division_par_zero_distincte() {
    assert_genre("5÷0", GenreErreur::Arithmetique);
    assert_genre("5÷(3-3)", GenreErreur::Arithmetique);
    assert_genre("5+", GenreErreur::Syntaxe);

    let r = Reglages::default();
    assert_eq!(evaluer_affichage("5÷0", &r), "Infinity");
    assert_eq!(evaluer_affichage("5+", &r), "Error");
}

#[test]
fn sci_parentheses_non_appariees() {
    assert_genre("(2+3", GenreErreur::Syntaxe);
    assert_genre("2+3)", GenreErreur::Syntaxe);
    assert_genre("((1)", GenreErreur::Syntaxe);
}

#[test]
fn sci_lexicales_et_evaluation() {
    assert_genre("2 & 3", GenreErreur::Lexicale);
    assert_genre("foo(2)", GenreErreur::Lexicale);
    assert_genre("log(-1)", GenreErreur::Evaluation);
    assert_genre("ln(0)", GenreErreur::Evaluation);
    assert_genre("", GenreErreur::Syntaxe);
}

/* ------------------------ Angles / constantes ------------------------ */

#[test]
fn sci_degres_radians() {
    assert_proche("sin(90)", ModeAngle::Degres, 1.0);
    assert_proche("sin(90)", ModeAngle::Radians, 0.893_996_663_6);
    assert_proche("cos(180)", ModeAngle::Degres, -1.0);
    assert_proche("tan(45)", ModeAngle::Degres, 1.0);
    assert_proche("cos(π)", ModeAngle::Radians, -1.0);
}

#[test]
fn sci_constantes() {
    assert_proche("π×2", ModeAngle::Radians, 6.283_185_307);
    assert_proche("e^1", ModeAngle::Radians, 2.718_281_828);
    assert_proche("ln(e)", ModeAngle::Radians, 1.0);
}

/* ------------------------ Affichage ------------------------ */

#[test]
fn sci_seuil_affichage_1e12() {
    let f = FormatNombre::default();
    assert!(formater_resultat(1_000_000_000_000.0, &f).contains('e'));
    assert!(!formater_resultat(999_999_999_999.0, &f).contains('e'));

    let r = Reglages::default();
    assert_eq!(evaluer_affichage("999999999999", &r), "999999999999");
    assert_eq!(evaluer_affichage("999999999999+1", &r), "1.00000000e+12");
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn sci_determinisme_bit_a_bit() {
    for expr in ["sin(1)^2+cos(1)^2", "π×e÷3", "2^0.5", "log(7)-ln(7)"] {
        for mode in [ModeAngle::Radians, ModeAngle::Degres] {
            let a = eval_ok(expr, mode);
            let b = eval_ok(expr, mode);
            assert_eq!(a.to_bits(), b.to_bits(), "expr={expr:?} mode={mode:?}");
        }
    }
}

#[test]
fn sci_appels_concurrents_sans_interference() {
    let exprs = ["sin(1)^2+cos(1)^2", "2^3^2", "5÷0", "log(-1)", "π×e÷3", "cos(60)"];
    let modes = [ModeAngle::Radians, ModeAngle::Degres];

    let attendu: Vec<_> = modes
        .iter()
        .flat_map(|&m| exprs.iter().map(move |e| evaluate(e, m)))
        .collect();

    std::thread::scope(|s| {
        let fils: Vec<_> = (0..8)
            .map(|i| {
                s.spawn(move || {
                    // chaque fil alterne les modes dans un ordre différent
                    let mut vus = Vec::new();
                    for _ in 0..50 {
                        for (k, &m) in modes.iter().enumerate() {
                            let m = if (i + k) % 2 == 0 { m } else { m.bascule() };
                            for e in exprs {
                                vus.push((m, e, evaluate(e, m)));
                            }
                        }
                    }
                    vus
                })
            })
            .collect();

        for fil in fils {
            let vus = fil.join().unwrap_or_else(|_| panic!("fil paniqué"));
            for (m, e, r) in vus {
                let idx = modes.iter().position(|&x| x == m).unwrap() * exprs.len()
                    + exprs.iter().position(|&x| x == e).unwrap();
                match (&r, &attendu[idx]) {
                    (Ok(a), Ok(b)) => assert_eq!(a.to_bits(), b.to_bits(), "expr={e:?} mode={m:?}"),
                    (a, b) => assert_eq!(a, b, "expr={e:?} mode={m:?}"),
                }
            }
        }
    });
}
