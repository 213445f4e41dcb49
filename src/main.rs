// src/main.rs
//
// Calculatrice continue — point d’entrée NATIF + WEB (WASM)
// ---------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : ligne de commande (clap) + journal (tracing)
//                                 puis eframe::run_native, ou --eval sans fenêtre
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports, dead_code))]

use eframe::egui;

use calculatrice_continue::app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice continue";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::Parser;
    use tracing_subscriber::EnvFilter;

    use super::{egui, AppCalc, TITRE_APP};
    use calculatrice_continue::noyau::{evaluate_with_parentheses, format_general};
    use calculatrice_continue::reglages::{Mode, Reglages};

    #[derive(Debug, Parser)]
    #[command(version, about = "Calculatrice continue : infixe, parenthèses, RPN")]
    pub struct Args {
        /// Mode au démarrage (remplace celui du fichier de réglages).
        #[arg(long, value_enum)]
        pub mode: Option<Mode>,

        /// Fichier de réglages TOML.
        #[arg(long)]
        pub config: Option<PathBuf>,

        /// Évalue une expression (gauche-droite, parenthèses) et quitte.
        #[arg(long, value_name = "EXPR")]
        pub eval: Option<String>,
    }

    fn initialiser_journal() {
        let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt().with_env_filter(filtre).init();
    }

    fn evaluer(expr: &str, reglages: &Reglages) -> ExitCode {
        match evaluate_with_parentheses(expr) {
            Ok(v) => {
                println!("{}", format_general(v, reglages.precision_infixe));
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("erreur : {e}");
                ExitCode::FAILURE
            }
        }
    }

    pub fn lancer() -> ExitCode {
        let args = Args::parse();
        initialiser_journal();

        let mut reglages = Reglages::charger(args.config.as_deref());
        if let Some(mode) = args.mode {
            reglages.mode_initial = mode;
        }

        if let Some(expr) = args.eval.as_deref() {
            return evaluer(expr, &reglages);
        }

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([320.0, 520.0])
                .with_min_inner_size([300.0, 480.0]),
            ..Default::default()
        };

        let resultat = eframe::run_native(
            TITRE_APP,
            options,
            Box::new(move |_cc| Ok(Box::new(AppCalc::new(&reglages)))),
        );

        match resultat {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!(erreur = %e, "fenêtre impossible à ouvrir");
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    natif::lancer()
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        // pas de fichier de réglages côté web : défauts
        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
