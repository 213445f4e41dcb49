// src/noyau/rpn.rs
//
// Session RPN (notation polonaise inversée)
// Objectif:
// - Pile explicite de f64, aucune opérande implicite
// - Enter empile la saisie ; un opérateur dépile b puis a, empile a op b
//
// Règles:
// - opérateur sur pile vide : sans effet
// - saisie non vide au moment d’un opérateur : empilée d’abord
// - échec (division par zéro…) : TOUTE la pile est vidée
//   (son contenu après un calcul raté n’a plus de sens)
//
// NOTE:
// - Le résultat d’un opérateur reste dans la saisie : Enter ou un nouvel
//   opérateur l’empile à nouveau ("3 E 4 + E" => [7 7]). Un chiffre le remplace.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::erreur::EvalError;
use super::evenement::{lire_nombre, Event, Session, SessionEffect, MARQUEUR_ERREUR};
use super::format::{format_general, PRECISION_MAX};
use super::memoire::Memory;
use super::operateur::Operator;

/// "%.6g" par défaut.
pub const PRECISION_RPN: usize = 6;

/// Nombre de valeurs visibles dans la ligne "Pile".
const PILE_VISIBLE: usize = 3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RpnSession {
    precision: usize,
    pile: Vec<f64>,
    /// Tampon de saisie (ce que Enter / un opérateur empile).
    saisie: String,
    memory: Memory,
    awaiting_fresh_digit: bool,
    is_error: bool,
    surbrillance: Option<Operator>,
}

impl Default for RpnSession {
    fn default() -> Self {
        Self::with_precision(PRECISION_RPN)
    }
}

impl RpnSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precision(precision: usize) -> Self {
        Self {
            precision: precision.clamp(1, PRECISION_MAX),
            pile: Vec::new(),
            saisie: String::new(),
            memory: Memory::default(),
            awaiting_fresh_digit: false,
            is_error: false,
            surbrillance: None,
        }
    }

    pub fn stack(&self) -> &[f64] {
        &self.pile
    }

    pub fn memory(&self) -> f64 {
        self.memory.recall()
    }

    fn fmt(&self, v: f64) -> String {
        format_general(v, self.precision)
    }

    fn texte_affichage(&self) -> String {
        if self.is_error {
            MARQUEUR_ERREUR.to_string()
        } else {
            self.saisie.clone()
        }
    }

    /// "Pile : [... 3 4 7]" (trois valeurs du sommet au plus).
    fn texte_pile(&self) -> String {
        let debut = self.pile.len().saturating_sub(PILE_VISIBLE);
        let valeurs: Vec<String> = self.pile[debut..].iter().map(|v| self.fmt(*v)).collect();
        let prefixe = if debut > 0 { "... " } else { "" };
        format!("Pile : [{prefixe}{}]", valeurs.join(" "))
    }

    /// Empile la saisie si elle n’est pas vide. Ok(false) : rien à empiler.
    fn empiler_saisie(&mut self) -> Result<bool, EvalError> {
        match lire_nombre(&self.saisie)? {
            Some(v) => {
                self.pile.push(v);
                self.saisie.clear();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn reinitialiser(&mut self) {
        let memory = self.memory;
        *self = Self::with_precision(self.precision);
        self.memory = memory;
    }

    /* ------------------------ Transitions ------------------------ */

    fn chiffre(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '.') {
            debug!(?c, "caractère ignoré");
            return;
        }
        if self.awaiting_fresh_digit || self.is_error {
            self.saisie.clear();
            self.awaiting_fresh_digit = false;
            self.is_error = false;
        }
        self.saisie.push(c);
    }

    fn entrer(&mut self) {
        match self.empiler_saisie() {
            Ok(true) => self.awaiting_fresh_digit = true,
            Ok(false) => {}
            Err(e) => debug!(erreur = %e, "Enter : saisie refusée"),
        }
    }

    fn operateur(&mut self, op: Operator) {
        if self.pile.is_empty() {
            debug!(?op, "pile vide : opérateur ignoré");
            return;
        }

        if let Err(e) = self.empiler_saisie() {
            debug!(erreur = %e, "opérateur : saisie refusée");
            return;
        }

        if self.pile.len() < 2 {
            return;
        }
        let (Some(b), Some(a)) = (self.pile.pop(), self.pile.pop()) else {
            return;
        };

        match op.apply(a, b) {
            Ok(r) => {
                self.pile.push(r);
                self.saisie = self.fmt(r);
                self.awaiting_fresh_digit = true;
                self.surbrillance = Some(op);
            }
            Err(e) => {
                warn!(erreur = %e, a, b, "calcul RPN interrompu, pile vidée");
                self.pile.clear();
                self.saisie.clear();
                self.is_error = true;
                self.awaiting_fresh_digit = true;
            }
        }
    }

    fn memoire_stocker(&mut self) {
        if !self.saisie.is_empty() {
            match lire_nombre(&self.saisie) {
                Ok(Some(v)) => self.memory.store(v),
                Ok(None) => {}
                Err(e) => debug!(erreur = %e, "M : saisie non numérique"),
            }
        } else if let Some(sommet) = self.pile.last() {
            self.memory.store(*sommet);
        }
    }

    fn memoire_rappeler(&mut self) {
        self.saisie = self.fmt(self.memory.recall());
        self.is_error = false;
        self.awaiting_fresh_digit = true;
    }
}

impl Session for RpnSession {
    fn handle_event(&mut self, event: Event) -> SessionEffect {
        debug!(?event, profondeur = self.pile.len(), "événement RPN");

        // la surbrillance ne survit qu’à l’opérateur qui l’a posée
        if !matches!(event, Event::Operator(_)) {
            self.surbrillance = None;
        }

        match event {
            Event::Digit(c) => self.chiffre(c),
            Event::Enter => self.entrer(),
            Event::Operator(op) => self.operateur(op),
            Event::Clear | Event::AllClear => self.reinitialiser(),
            Event::Backspace => {
                if !self.is_error {
                    self.saisie.pop();
                }
            }
            Event::MemoryStore => self.memoire_stocker(),
            Event::MemoryRecall => self.memoire_rappeler(),
            Event::MemoryClear => self.memory.clear(),
            Event::Equals | Event::Open | Event::Close => {
                debug!(?event, "sans effet en RPN");
            }
        }

        self.effect()
    }

    fn effect(&self) -> SessionEffect {
        SessionEffect {
            display_text: self.texte_affichage(),
            history_text: self.texte_pile(),
            memory_text: self.memory.texte(self.precision),
            operator_highlight: self.surbrillance,
            is_error: self.is_error,
        }
    }
}
