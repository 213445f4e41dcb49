// src/noyau/evenement.rs
//
// Contrat entre les sessions (infixe.rs, rpn.rs) et la vue :
// - Event : une touche pressée
// - SessionEffect : tout ce que la vue a le droit d’afficher
// La vue ne lit jamais les champs internes d’une session.

use serde::{Deserialize, Serialize};

use super::erreur::EvalError;
use super::operateur::Operator;

/// Texte affiché après une erreur (division par zéro, nombre invalide…).
pub const MARQUEUR_ERREUR: &str = "Erreur";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// '0'..='9' ou '.' (les autres caractères sont ignorés).
    Digit(char),
    Operator(Operator),
    Equals,
    /// RPN : empile la saisie.
    Enter,
    Open,
    Close,
    /// Efface la saisie courante.
    Clear,
    /// Remise à zéro (la mémoire est conservée).
    AllClear,
    Backspace,
    MemoryStore,
    MemoryRecall,
    MemoryClear,
}

impl Event {
    /// Traduit une touche clavier/pavé en événement.
    pub fn depuis_caractere(c: char) -> Option<Event> {
        match c {
            '0'..='9' | '.' => Some(Event::Digit(c)),
            '(' => Some(Event::Open),
            ')' => Some(Event::Close),
            '=' => Some(Event::Equals),
            _ => Operator::depuis_symbole(c).map(Event::Operator),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionEffect {
    pub display_text: String,
    pub history_text: String,
    pub memory_text: String,
    pub operator_highlight: Option<Operator>,
    pub is_error: bool,
}

/// Une machine à états pilotée par événements.
pub trait Session {
    /// Applique un événement (toujours total : jamais d’erreur remontée).
    fn handle_event(&mut self, event: Event) -> SessionEffect;

    /// Rendu de l’état courant, sans le modifier.
    fn effect(&self) -> SessionEffect;
}

/// Forme "pure" : l’état entre, l’état suivant + l’effet sortent.
pub fn transition<S: Session>(mut etat: S, event: Event) -> (S, SessionEffect) {
    let effet = etat.handle_event(event);
    (etat, effet)
}

/// Lecture du tampon d’affichage : vide => None, marqueur/texte invalide => ParseError.
pub fn lire_nombre(texte: &str) -> Result<Option<f64>, EvalError> {
    let t = texte.trim();
    if t.is_empty() {
        return Ok(None);
    }
    if t == MARQUEUR_ERREUR {
        return Err(EvalError::ParseError(t.to_string()));
    }
    t.parse::<f64>()
        .map(Some)
        .map_err(|_| EvalError::ParseError(t.to_string()))
}
