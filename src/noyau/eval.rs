//! Noyau — évaluateurs purs (sans état)
//!
//! - evaluate_left_to_right : tokenize -> pliage gauche-droite (aucune priorité)
//! - evaluate_with_parentheses : réduit le groupe le plus interne, réinjecte
//!   le résultat dans le texte, recommence ; puis pliage final
//!
//! Utilisables seuls (mode --eval, tests) ; les sessions interactives ne
//! re-parsent jamais une expression complète.

use tracing::debug;

use super::erreur::EvalError;
use super::format::format_litteral;
use super::jetons::{format_tokens, tokenize, Tok};

/// Plie une suite de jetons strictement de gauche à droite.
///
/// acc = jetons[0], puis pour chaque paire (op, nombre) : acc = op(acc, nombre).
/// Un jeton isolé en fin de suite (ex: "2+") est ignoré.
pub fn fold_tokens(tokens: &[Tok]) -> Result<f64, EvalError> {
    let (premier, reste) = tokens.split_first().ok_or(EvalError::EmptyExpression)?;

    let mut acc = match premier {
        Tok::Num(v) => *v,
        Tok::Op(op) => return Err(EvalError::ParseError(op.symbole().to_string())),
    };

    for paire in reste.chunks_exact(2) {
        acc = match (&paire[0], &paire[1]) {
            (Tok::Op(op), Tok::Num(v)) => op.apply(acc, *v)?,
            (Tok::Num(v), _) => return Err(EvalError::ParseError(format_litteral(*v))),
            (_, Tok::Op(op)) => return Err(EvalError::ParseError(op.symbole().to_string())),
        };
    }

    Ok(acc)
}

/// Évalue une chaîne plate strictement de gauche à droite : "2+3*4" => 20.
pub fn evaluate_left_to_right(expr: &str) -> Result<f64, EvalError> {
    let jetons = tokenize(expr);
    debug!(jetons = %format_tokens(&jetons), "pliage gauche-droite");
    fold_tokens(&jetons)
}

/// Cherche le groupe le plus interne : (indice '(', indice ')').
///
/// - ')' sans '(' ouverte => UnbalancedParentheses
/// - '(' restée ouverte en fin de lecture => UnbalancedParentheses
/// - None : plus aucune parenthèse
fn groupe_interne(expr: &str) -> Result<Option<(usize, usize)>, EvalError> {
    let mut ouverte: Option<usize> = None;

    for (i, c) in expr.char_indices() {
        match c {
            '(' => ouverte = Some(i),
            ')' => {
                let debut = ouverte.ok_or(EvalError::UnbalancedParentheses)?;
                return Ok(Some((debut, i)));
            }
            _ => {}
        }
    }

    match ouverte {
        Some(_) => Err(EvalError::UnbalancedParentheses),
        None => Ok(None),
    }
}

/// Évalue une chaîne avec parenthèses : chaque groupe est plié gauche-droite
/// comme une expression autonome, puis remplacé par son résultat.
///
/// "(2+3)*4" => 20 ; "((1+2))" => 3 ; "(2+3" => UnbalancedParentheses ; "()" => EmptyGroup
pub fn evaluate_with_parentheses(expr: &str) -> Result<f64, EvalError> {
    let mut expr: String = expr.chars().filter(|c| !c.is_whitespace()).collect();

    while let Some((debut, fin)) = groupe_interne(&expr)? {
        let interieur = &expr[debut + 1..fin];
        if interieur.is_empty() {
            return Err(EvalError::EmptyGroup);
        }

        let valeur = evaluate_left_to_right(interieur)?;
        debug!(groupe = interieur, valeur, "groupe réduit");

        expr.replace_range(debut..=fin, &format_litteral(valeur));
    }

    evaluate_left_to_right(&expr)
}
