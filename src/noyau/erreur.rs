// src/noyau/erreur.rs
//
// Erreurs du noyau (évaluateurs purs).
// Les sessions interactives ne les propagent jamais : elles les convertissent
// en affichage d’erreur (voir infixe.rs / rpn.rs).

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    /// Aucun jeton exploitable dans l’expression.
    #[error("expression vide")]
    EmptyExpression,

    #[error("parenthèses non équilibrées")]
    UnbalancedParentheses,

    /// Groupe `()` sans contenu.
    #[error("groupe vide entre parenthèses")]
    EmptyGroup,

    /// Division par zéro ou résultat non fini.
    #[error("erreur arithmétique : {0}")]
    ArithmeticError(String),

    /// Texte numérique mal formé (ex: "1.2.3", marqueur d’erreur).
    #[error("nombre invalide : {0:?}")]
    ParseError(String),
}
