// src/formules/fraction.rs
//
// Fractions exactes (BigRational) : quatre opérations + forme mixte.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use super::{ErreurFormule, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fraction(BigRational);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpFraction {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl OpFraction {
    pub fn symbole(self) -> &'static str {
        match self {
            OpFraction::Addition => "+",
            OpFraction::Soustraction => "-",
            OpFraction::Multiplication => "×",
            OpFraction::Division => "÷",
        }
    }
}

impl Fraction {
    /// Fraction réduite ; le signe est porté par le numérateur.
    pub fn new(num: i64, den: i64) -> Result<Self> {
        if den == 0 {
            return Err(ErreurFormule::DenominateurNul);
        }
        Ok(Self(BigRational::new(BigInt::from(num), BigInt::from(den))))
    }

    pub fn numerateur(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denominateur(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn est_nulle(&self) -> bool {
        self.0.is_zero()
    }

    /// "1 1/4", "-1 1/4", "3/4", "2"
    pub fn mixte(&self) -> String {
        if self.0.is_integer() {
            return self.0.numer().to_string();
        }

        let abs = self.0.abs();
        let entier = abs.trunc().to_integer();
        let reste = abs.fract();
        let signe = if self.0.is_negative() { "-" } else { "" };

        if entier.is_zero() {
            format!("{signe}{}/{}", reste.numer(), reste.denom())
        } else {
            format!("{signe}{entier} {}/{}", reste.numer(), reste.denom())
        }
    }

    /// Approximation décimale (None si hors des f64).
    pub fn decimal(&self) -> Option<f64> {
        // conversion du rationnel entier : numérateur et dénominateur
        // peuvent dépasser les f64 alors que le quotient tient
        let x = self.0.to_f64()?;
        x.is_finite().then_some(x)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_integer() {
            write!(f, "{}", self.0.numer())
        } else {
            write!(f, "{}/{}", self.0.numer(), self.0.denom())
        }
    }
}

pub fn operer(a: &Fraction, op: OpFraction, b: &Fraction) -> Result<Fraction> {
    let r = match op {
        OpFraction::Addition => &a.0 + &b.0,
        OpFraction::Soustraction => &a.0 - &b.0,
        OpFraction::Multiplication => &a.0 * &b.0,
        OpFraction::Division => {
            if b.est_nulle() {
                return Err(ErreurFormule::DivisionParZero);
            }
            &a.0 / &b.0
        }
    };
    Ok(Fraction(r))
}
