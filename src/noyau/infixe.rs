//! Session infixe "continue" (avec ou sans parenthèses).
//!
//! Machine à états incrémentale : on garde une paire (opérande, opérateur en
//! attente) et on plie dès qu’un nouvel opérateur arrive. Aucune expression
//! complète n’est stockée ni re-parsée ; l’historique n’est qu’un texte.
//!
//! Variante `Parenthesized` :
//! - '(' sauvegarde le contexte extérieur dans un BracketFrame (pile)
//! - ')' plie l’intérieur, restaure le contexte, et met le résultat "en attente"
//!   (plié paresseusement au prochain opérateur / '=')
//! - '=' ferme implicitement les parenthèses encore ouvertes
//!
//! Invariant : pending_operator.is_some() => operand.is_some().

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::erreur::EvalError;
use super::evenement::{lire_nombre, Event, Session, SessionEffect, MARQUEUR_ERREUR};
use super::format::{format_general, PRECISION_MAX};
use super::memoire::Memory;
use super::operateur::Operator;

/// "%.10g" par défaut.
pub const PRECISION_INFIXE: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfixVariant {
    Plain,
    Parenthesized,
}

/// Contexte extérieur sauvegardé à l’ouverture d’une parenthèse.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BracketFrame {
    pub operand: Option<f64>,
    pub operator: Option<Operator>,
    pub pre_bracket_value: f64,
    pub outer_history_text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InfixSession {
    variant: InfixVariant,
    precision: usize,

    operand: Option<f64>,
    pending_operator: Option<Operator>,

    display_text: String,
    history_text: String,
    /// Début (octet) de l’opérande en cours de frappe dans `history_text`.
    debut_operande: usize,

    memory: Memory,

    awaiting_fresh_digit: bool,
    just_finalized: bool,
    is_error: bool,

    // --- parenthèses (variante Parenthesized seulement) ---
    bracket_stack: Vec<BracketFrame>,
    /// Some(v) <=> résultat de parenthèse prêt, pas encore plié.
    pending_bracket_result: Option<f64>,
}

impl InfixSession {
    pub fn new(variant: InfixVariant) -> Self {
        Self::with_precision(variant, PRECISION_INFIXE)
    }

    pub fn with_precision(variant: InfixVariant, precision: usize) -> Self {
        Self {
            variant,
            precision: precision.clamp(1, PRECISION_MAX),
            operand: None,
            pending_operator: None,
            display_text: String::new(),
            history_text: String::new(),
            debut_operande: 0,
            memory: Memory::default(),
            awaiting_fresh_digit: false,
            just_finalized: false,
            is_error: false,
            bracket_stack: Vec::new(),
            pending_bracket_result: None,
        }
    }

    /* ------------------------ Lecture (tests / débogage) ------------------------ */

    pub fn variant(&self) -> InfixVariant {
        self.variant
    }

    pub fn operand(&self) -> Option<f64> {
        self.operand
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn bracket_depth(&self) -> usize {
        self.bracket_stack.len()
    }

    pub fn bracket_result_ready(&self) -> bool {
        self.pending_bracket_result.is_some()
    }

    pub fn memory(&self) -> f64 {
        self.memory.recall()
    }

    /* ------------------------ Helpers ------------------------ */

    fn fmt(&self, v: f64) -> String {
        format_general(v, self.precision)
    }

    /// L’utilisateur est en train de taper l’opérande (l’affichage n’est pas un résultat).
    fn saisie_en_cours(&self) -> bool {
        !self.awaiting_fresh_digit
            && !self.just_finalized
            && !self.is_error
            && self.pending_bracket_result.is_none()
    }

    /// Un calcul terminé sans rien en attente : la prochaine saisie repart de zéro.
    fn calcul_termine(&self) -> bool {
        self.just_finalized && self.pending_operator.is_none() && self.bracket_stack.is_empty()
    }

    /// Remplace l’opérande courant de l’historique par le tampon d’affichage.
    fn reecrire_operande(&mut self) {
        self.history_text.truncate(self.debut_operande);
        self.history_text.push_str(&self.display_text);
    }

    fn pousser_historique(&mut self, c: char) {
        self.history_text.push(c);
        self.debut_operande = self.history_text.len();
    }

    /// Valeur courante : résultat de parenthèse en attente, sinon tampon (vide => 0).
    fn valeur_courante(&mut self) -> Result<f64, EvalError> {
        if let Some(v) = self.pending_bracket_result.take() {
            return Ok(v);
        }
        Ok(lire_nombre(&self.display_text)?.unwrap_or(0.0))
    }

    /// Plie la paire en attente avec `courant` (sans paire : `courant` tel quel).
    fn plier(&self, courant: f64) -> Result<f64, EvalError> {
        match (self.operand, self.pending_operator) {
            (Some(a), Some(op)) => op.apply(a, courant),
            _ => Ok(courant),
        }
    }

    /// Remise à zéro complète, mémoire conservée.
    fn reinitialiser(&mut self) {
        let memory = self.memory;
        *self = Self::with_precision(self.variant, self.precision);
        self.memory = memory;
    }

    /// Erreur d’opération : tout l’état de calcul est perdu, marqueur affiché.
    fn echec(&mut self, e: EvalError) {
        warn!(erreur = %e, historique = %self.history_text, "calcul infixe interrompu");
        self.reinitialiser();
        self.display_text = MARQUEUR_ERREUR.to_string();
        self.is_error = true;
        self.awaiting_fresh_digit = true;
    }

    /* ------------------------ Transitions ------------------------ */

    fn chiffre(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '.') {
            debug!(?c, "caractère ignoré");
            return;
        }

        if !self.saisie_en_cours() {
            if self.calcul_termine() || self.is_error {
                self.history_text.clear();
                self.debut_operande = 0;
            }
            self.display_text.clear();
            self.awaiting_fresh_digit = false;
            self.just_finalized = false;
            self.is_error = false;
            self.pending_bracket_result = None;
        }

        self.display_text.push(c);
        self.reecrire_operande();
    }

    fn operateur(&mut self, op: Operator) {
        let courant = match self.valeur_courante() {
            Ok(v) => v,
            Err(e) => return self.echec(e),
        };

        let repart_du_resultat = self.calcul_termine();

        if self.pending_operator.is_some() {
            match self.plier(courant) {
                Ok(r) => {
                    self.operand = Some(r);
                    self.display_text = self.fmt(r);
                }
                Err(e) => return self.echec(e),
            }
        } else {
            self.operand = Some(courant);
        }

        if repart_du_resultat || self.history_text.is_empty() {
            self.history_text = self.fmt(courant);
        }

        self.pending_operator = Some(op);
        self.awaiting_fresh_digit = true;
        self.just_finalized = false;
        self.pousser_historique(op.symbole());
    }

    fn egal(&mut self) {
        let rien_en_attente = self.pending_operator.is_none()
            && self.bracket_stack.is_empty()
            && self.pending_bracket_result.is_none();
        if rien_en_attente {
            return;
        }

        let valeur_parenthese = self.pending_bracket_result.is_some();
        let mut courant = match self.valeur_courante() {
            Ok(v) => v,
            Err(e) => return self.echec(e),
        };

        // '=' avec des parenthèses ouvertes : fermeture implicite
        let fermetures = self.bracket_stack.len();
        while let Some(cadre) = self.bracket_stack.pop() {
            courant = match self.plier(courant) {
                Ok(v) => v,
                Err(e) => return self.echec(e),
            };
            self.operand = cadre.operand;
            self.pending_operator = cadre.operator;
            self.history_text.push(')');
        }

        let resultat = if self.pending_operator.is_some() {
            match self.plier(courant) {
                Ok(v) => v,
                Err(e) => return self.echec(e),
            }
        } else if fermetures > 0 || valeur_parenthese {
            courant
        } else {
            return;
        };

        let texte = self.fmt(resultat);
        self.history_text = format!("{} = {texte}", self.history_text);
        self.debut_operande = self.history_text.len();
        self.display_text = texte;

        self.operand = Some(resultat);
        self.pending_operator = None;
        self.just_finalized = true;
        self.awaiting_fresh_digit = false;
    }

    fn ouvrir(&mut self) {
        let courant = match self.valeur_courante() {
            Ok(v) => v,
            Err(e) => return self.echec(e),
        };

        if self.calcul_termine() {
            self.history_text.clear();
            self.debut_operande = 0;
        }

        self.bracket_stack.push(BracketFrame {
            operand: self.operand,
            operator: self.pending_operator,
            pre_bracket_value: courant,
            outer_history_text: self.history_text.clone(),
        });
        debug!(profondeur = self.bracket_stack.len(), "parenthèse ouverte");

        self.operand = None;
        self.pending_operator = None;
        self.awaiting_fresh_digit = true;
        self.just_finalized = false;
        self.pousser_historique('(');
    }

    fn fermer(&mut self) {
        if self.bracket_stack.is_empty() {
            debug!("')' sans '(' : ignorée");
            return;
        }

        let resultat = match self.valeur_courante().and_then(|v| self.plier(v)) {
            Ok(v) => v,
            Err(e) => return self.echec(e),
        };

        let Some(cadre) = self.bracket_stack.pop() else {
            return;
        };
        debug!(
            resultat,
            avant = cadre.pre_bracket_value,
            exterieur = %cadre.outer_history_text,
            "parenthèse fermée"
        );

        self.operand = cadre.operand;
        self.pending_operator = cadre.operator;

        self.display_text = self.fmt(resultat);
        self.pousser_historique(')');

        self.pending_bracket_result = Some(resultat);
        self.awaiting_fresh_digit = false;
        self.just_finalized = false;
    }

    fn effacer_saisie(&mut self) {
        self.display_text.clear();
        if self.is_error {
            self.is_error = false;
        } else if self.saisie_en_cours() {
            self.reecrire_operande();
        }
    }

    fn retour_arriere(&mut self) {
        if self.is_error || self.display_text.pop().is_none() {
            return;
        }
        if self.saisie_en_cours() {
            self.reecrire_operande();
        }
    }

    fn memoire_stocker(&mut self) {
        if self.is_error {
            return;
        }
        match lire_nombre(&self.display_text) {
            Ok(Some(v)) => self.memory.store(v),
            Ok(None) => {}
            Err(e) => debug!(erreur = %e, "M : affichage non numérique"),
        }
    }

    fn memoire_rappeler(&mut self) {
        self.display_text = self.fmt(self.memory.recall());
        self.is_error = false;
        self.pending_bracket_result = None;

        // au milieu d’un calcul : la valeur rappelée devient l’opérande de l’historique
        if self.pending_operator.is_some() || !self.bracket_stack.is_empty() {
            self.reecrire_operande();
        }
        self.just_finalized = true;
    }
}

impl Session for InfixSession {
    fn handle_event(&mut self, event: Event) -> SessionEffect {
        debug!(?event, variante = ?self.variant, "événement infixe");

        let parentheses = self.variant == InfixVariant::Parenthesized;
        match event {
            Event::Digit(c) => self.chiffre(c),
            Event::Operator(op) => self.operateur(op),
            Event::Equals => self.egal(),
            Event::Open if parentheses => self.ouvrir(),
            Event::Close if parentheses => self.fermer(),
            Event::Clear => self.effacer_saisie(),
            Event::AllClear => self.reinitialiser(),
            Event::Backspace => self.retour_arriere(),
            Event::MemoryStore => self.memoire_stocker(),
            Event::MemoryRecall => self.memoire_rappeler(),
            Event::MemoryClear => self.memory.clear(),
            Event::Enter | Event::Open | Event::Close => {
                debug!(?event, "sans effet dans cette variante");
            }
        }

        self.effect()
    }

    fn effect(&self) -> SessionEffect {
        SessionEffect {
            display_text: self.display_text.clone(),
            history_text: self.history_text.clone(),
            memory_text: self.memory.texte(self.precision),
            operator_highlight: self.pending_operator,
            is_error: self.is_error,
        }
    }
}
