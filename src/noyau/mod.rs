//! Noyau de la calculatrice continue
//!
//! Organisation interne :
//! - operateur.rs : + - * / et leur application (erreurs arithmétiques)
//! - jetons.rs    : tokenisation tolérante (nombres positifs + opérateurs)
//! - eval.rs      : évaluateurs purs (gauche-droite, parenthèses)
//! - format.rs    : rendu "%.Ng" + littéraux réinjectés
//! - memoire.rs   : case mémoire M / MR / MC
//! - evenement.rs : Event, SessionEffect, trait Session
//! - infixe.rs    : session infixe continue (avec ou sans parenthèses)
//! - rpn.rs       : session RPN (pile)

pub mod erreur;
pub mod eval;
pub mod evenement;
pub mod format;
pub mod infixe;
pub mod jetons;
pub mod memoire;
pub mod operateur;
pub mod rpn;


#[cfg(test)]
mod tests_sessions;

// API publique minimale
pub use erreur::EvalError;
pub use eval::{evaluate_left_to_right, evaluate_with_parentheses};
pub use evenement::{transition, Event, Session, SessionEffect, MARQUEUR_ERREUR};
pub use format::format_general;
pub use infixe::{InfixSession, InfixVariant};
pub use operateur::Operator;
pub use rpn::RpnSession;
