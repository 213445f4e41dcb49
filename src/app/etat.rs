//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder les trois sessions (une par mode) et le dernier effet à afficher.
//!
//! Contrats :
//! - Aucune logique de calcul ici : tout passe par Session::handle_event.
//! - La vue ne lit que `effet` (jamais les champs internes d’une session).
//! - Changer de mode ne réinitialise pas les autres sessions.

use crate::noyau::{Event, InfixSession, InfixVariant, RpnSession, Session, SessionEffect};
use crate::reglages::{Mode, Reglages};

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub mode: Mode,

    infixe: InfixSession,
    parentheses: InfixSession,
    rpn: RpnSession,

    /// Rendu de la session active.
    pub effet: SessionEffect,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: &Reglages) -> Self {
        let mut app = Self {
            mode: reglages.mode_initial,
            infixe: InfixSession::with_precision(InfixVariant::Plain, reglages.precision_infixe),
            parentheses: InfixSession::with_precision(
                InfixVariant::Parenthesized,
                reglages.precision_infixe,
            ),
            rpn: RpnSession::with_precision(reglages.precision_rpn),
            effet: SessionEffect::default(),
        };
        app.effet = app.session().effect();
        app
    }

    fn session(&self) -> &dyn Session {
        match self.mode {
            Mode::Infixe => &self.infixe,
            Mode::Parentheses => &self.parentheses,
            Mode::Rpn => &self.rpn,
        }
    }

    fn session_mut(&mut self) -> &mut dyn Session {
        match self.mode {
            Mode::Infixe => &mut self.infixe,
            Mode::Parentheses => &mut self.parentheses,
            Mode::Rpn => &mut self.rpn,
        }
    }

    /* ------------------------ Actions ------------------------ */

    /// Transmet une touche à la session active.
    pub fn envoyer(&mut self, event: Event) {
        self.effet = self.session_mut().handle_event(event);
    }

    /// Touche "valider" : '=' en infixe, Enter en RPN.
    pub fn valider(&mut self) {
        let event = match self.mode {
            Mode::Rpn => Event::Enter,
            Mode::Infixe | Mode::Parentheses => Event::Equals,
        };
        self.envoyer(event);
    }

    pub fn changer_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.mode = mode;
            self.effet = self.session().effect();
        }
    }
}
