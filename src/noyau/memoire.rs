// src/noyau/memoire.rs

use serde::{Deserialize, Serialize};

use super::format::format_general;

/// Case mémoire (M / MR / MC). Une par session, jamais touchée par C / AC.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    valeur: f64,
}

impl Memory {
    pub fn store(&mut self, v: f64) {
        self.valeur = v;
    }

    pub fn recall(&self) -> f64 {
        self.valeur
    }

    pub fn clear(&mut self) {
        self.valeur = 0.0;
    }

    /// Ligne mémoire affichée : "M : 42".
    pub fn texte(&self, precision: usize) -> String {
        format!("M : {}", format_general(self.valeur, precision))
    }
}
