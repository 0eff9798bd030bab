//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe) pour les campagnes générées
//! - profondeur bornée
//! - budget temps global
//! - proptest pour les propriétés (précédence, saisie arbitraire sans panique)

use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::erreur::{ErreurEval, GenreErreur};
use super::reglages::{ModeAngle, Reglages};
use super::{evaluate, evaluer_affichage};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => format!("{}", rng.pick(10)),
        1 => format!("{}.{}", rng.pick(100), rng.pick(10)),
        2 => "π".to_string(),
        3 => "e".to_string(),
        4 => format!("-{}", 1 + rng.pick(9)),
        _ => format!("{}", 1 + rng.pick(999)),
    }
}

/// Expression bien formée : parenthèses équilibrées, que des opérateurs connus.
fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    let a = gen_expr(rng, depth - 1);
    match rng.pick(10) {
        0 => gen_atom(rng),
        1 => format!("({a}+{})", gen_expr(rng, depth - 1)),
        2 => format!("({a}-{})", gen_expr(rng, depth - 1)),
        3 => format!("({a}×{})", gen_expr(rng, depth - 1)),
        4 => format!("({a}÷{})", gen_expr(rng, depth - 1)),
        5 => format!("sin({a})"),
        6 => format!("cos({a})"),
        7 => {
            if rng.coin() {
                format!("√({a})")
            } else {
                format!("log({a})")
            }
        }
        8 => format!("2({a})"), // multiplication implicite
        _ => format!("-({a})"),
    }
}

/// Abîme une expression : caractère retiré ou inséré au hasard.
fn abimer(rng: &mut Rng, s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return ")".to_string();
    }
    let i = rng.pick(chars.len() as u32) as usize;
    if rng.coin() {
        chars.remove(i);
    } else {
        let parasites = ['(', ')', '+', '×', '^', '.', '#'];
        chars.insert(i, parasites[rng.pick(parasites.len() as u32) as usize]);
    }
    chars.into_iter().collect()
}

/* ------------------------ Helpers ------------------------ */

fn meme_issue(a: &Result<f64, ErreurEval>, b: &Result<f64, ErreurEval>) -> bool {
    match (a, b) {
        (Ok(x), Ok(y)) => x.to_bits() == y.to_bits(),
        (Err(e), Err(f)) => e == f,
        _ => false,
    }
}

fn check_affichage(expr: &str, r: &Result<f64, ErreurEval>) {
    let aff = evaluer_affichage(expr, &Reglages::default());
    match r {
        Err(ErreurEval::DivisionParZero) => assert_eq!(aff, "Infinity", "expr={expr:?}"),
        Err(_) => assert_eq!(aff, "Error", "expr={expr:?}"),
        Ok(_) => assert!(aff != "Error" && aff != "Infinity", "expr={expr:?} aff={aff}"),
    }
}

/* ------------------------ somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bien_formees_jamais_lexicale_ni_syntaxe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let mode = if rng.coin() {
            ModeAngle::Radians
        } else {
            ModeAngle::Degres
        };

        let r1 = evaluate(&expr, mode);
        let r2 = evaluate(&expr, mode);
        assert!(meme_issue(&r1, &r2), "non déterministe: expr={expr:?}");
        check_affichage(&expr, &evaluate(&expr, ModeAngle::Radians));

        match r1 {
            Ok(v) => {
                assert!(v.is_finite(), "expr={expr:?} v={v}");
                seen_ok += 1;
            }
            Err(e) => {
                // domaine : √/log de négatifs, division par zéro
                assert!(
                    matches!(
                        e.genre(),
                        GenreErreur::Arithmetique | GenreErreur::Evaluation
                    ),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_expressions_abimees_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let saine = gen_expr(&mut rng, 3);
        let expr = abimer(&mut rng, &saine);

        let r = evaluate(&expr, ModeAngle::Radians);
        assert!(
            meme_issue(&r, &evaluate(&expr, ModeAngle::Radians)),
            "non déterministe: expr={expr:?}"
        );
        check_affichage(&expr, &r);
    }
}

#[test]
fn fuzz_safe_parentheses_englobantes_neutres() {
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..150 {
        let expr = gen_expr(&mut rng, 3);
        let a = evaluate(&expr, ModeAngle::Radians);
        let b = evaluate(&format!("({expr})"), ModeAngle::Radians);
        assert!(meme_issue(&a, &b), "expr={expr:?} {a:?} vs {b:?}");
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("1÷2", 800);
    let v = evaluate(&expr, ModeAngle::Radians).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    // 800×(1/2) = 400
    assert_eq!(v, 400.0);
}

/* ------------------------ Propriétés (proptest) ------------------------ */

proptest! {
    #[test]
    fn prop_precedence_et_associativite(a in 0i32..50, b in 0i32..50, c in 1i32..50) {
        let (fa, fb, fc) = (a as f64, b as f64, c as f64);

        let v = evaluate(&format!("{a}+{b}×{c}"), ModeAngle::Radians).unwrap();
        prop_assert_eq!(v, fa + fb * fc);

        let v = evaluate(&format!("{a}-{b}-{c}"), ModeAngle::Radians).unwrap();
        prop_assert_eq!(v, (fa - fb) - fc);

        let v = evaluate(&format!("{a}({b}+{c})"), ModeAngle::Radians).unwrap();
        prop_assert_eq!(v, fa * (fb + fc));
    }

    #[test]
    fn prop_puissance_a_droite(a in 1i32..4, b in 0i32..3, c in 0i32..3) {
        let v = evaluate(&format!("{a}^{b}^{c}"), ModeAngle::Radians).unwrap();
        let attendu = (a as f64).powf((b as f64).powf(c as f64));
        prop_assert_eq!(v, attendu);
    }

    #[test]
    fn prop_saisie_arbitraire_sans_panique(s in "[0-9+×÷^()πe.sincotalgn√ -]{0,24}") {
        let r = evaluate(&s, ModeAngle::Degres);
        prop_assert!(meme_issue(&r, &evaluate(&s, ModeAngle::Degres)));
        if let Ok(v) = r {
            prop_assert!(v.is_finite());
        }
    }
}
