//! src/reglages.rs
//!
//! Réglages (fichier TOML optionnel).
//!
//! Emplacement : <config_dir>/calculatrice-continue/config.toml
//! Exemple :
//!   mode_initial = "rpn"
//!   precision_infixe = 10
//!   precision_rpn = 6
//!
//! Contrats :
//! - fichier absent => réglages par défaut (pas une erreur)
//! - clés absentes  => valeur par défaut clé par clé
//! - précisions bornées (même garde-fou que le noyau)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::noyau::format::PRECISION_MAX;
use crate::noyau::infixe::PRECISION_INFIXE;
use crate::noyau::rpn::PRECISION_RPN;

const DOSSIER_APP: &str = "calculatrice-continue";
const FICHIER: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("lecture de {} impossible : {source}", .chemin.display())]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("fichier de réglages invalide : {0}")]
    Format(#[from] toml::de::Error),
}

/// Les trois calculatrices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Infixe,
    Parentheses,
    Rpn,
}

impl Mode {
    pub const TOUS: [Mode; 3] = [Mode::Infixe, Mode::Parentheses, Mode::Rpn];

    pub fn libelle(self) -> &'static str {
        match self {
            Mode::Infixe => "Continue",
            Mode::Parentheses => "Parenthèses",
            Mode::Rpn => "RPN",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Reglages {
    pub mode_initial: Mode,
    pub precision_infixe: usize,
    pub precision_rpn: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            mode_initial: Mode::default(),
            precision_infixe: PRECISION_INFIXE,
            precision_rpn: PRECISION_RPN,
        }
    }
}

impl Reglages {
    /// Chemin par défaut (None si la plateforme n’a pas de dossier de config, ex: wasm).
    pub fn chemin_defaut() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(DOSSIER_APP).join(FICHIER))
    }

    pub fn depuis_toml(texte: &str) -> Result<Self, ConfigError> {
        let r: Reglages = toml::from_str(texte)?;
        Ok(r.bornee())
    }

    /// Lit un fichier ; absent => défauts.
    pub fn lire(chemin: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(chemin) {
            Ok(texte) => Self::depuis_toml(&texte),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Lecture {
                chemin: chemin.to_path_buf(),
                source,
            }),
        }
    }

    /// Charge les réglages sans jamais échouer : une erreur est journalisée
    /// et remplacée par les défauts.
    pub fn charger(chemin: Option<&Path>) -> Self {
        let chemin = match chemin {
            Some(c) => Some(c.to_path_buf()),
            None => Self::chemin_defaut(),
        };
        let Some(chemin) = chemin else {
            return Self::default();
        };

        match Self::lire(&chemin) {
            Ok(r) => {
                info!(chemin = %chemin.display(), reglages = ?r, "réglages chargés");
                r
            }
            Err(e) => {
                warn!(erreur = %e, "réglages ignorés, valeurs par défaut");
                Self::default()
            }
        }
    }

    fn bornee(mut self) -> Self {
        self.precision_infixe = self.precision_infixe.clamp(1, PRECISION_MAX);
        self.precision_rpn = self.precision_rpn.clamp(1, PRECISION_MAX);
        self
    }
}
