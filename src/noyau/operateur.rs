// src/noyau/operateur.rs

use serde::{Deserialize, Serialize};

use super::erreur::EvalError;

/// Les quatre opérations binaires de la calculatrice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const TOUS: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbole(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn depuis_symbole(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    /// Applique l’opération `a op b`.
    ///
    /// Division par zéro et résultat non fini (débordement) => ArithmeticError.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, EvalError> {
        let r = match self {
            Operator::Add => a + b,
            Operator::Sub => a - b,
            Operator::Mul => a * b,
            Operator::Div => {
                if b == 0.0 {
                    return Err(EvalError::ArithmeticError("division par zéro".into()));
                }
                a / b
            }
        };

        if !r.is_finite() {
            return Err(EvalError::ArithmeticError("résultat non fini".into()));
        }
        Ok(r)
    }
}
