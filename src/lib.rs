//! Calculatrice continue : noyau d’évaluation + réglages + interface egui.
//!
//! - noyau    : évaluateurs purs et machines à états (infixe, parenthèses, RPN)
//! - reglages : fichier TOML optionnel
//! - app      : vue egui (n’envoie que des Event, n’affiche que des SessionEffect)

pub mod app;
pub mod noyau;
pub mod reglages;
