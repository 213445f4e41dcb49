// src/app.rs
//
// Calculatrice continue — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Clavier : chiffres/opérateurs/parenthèses tapés, Enter, Backspace, Escape (AC)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Event;

impl AppCalc {
    fn clavier(&mut self, ctx: &egui::Context) {
        let evenements = ctx.input(|i| i.events.clone());

        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        if let Some(event) = Event::depuis_caractere(c) {
                            self.envoyer(event);
                        }
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => self.valider(),
                    egui::Key::Backspace => self.envoyer(Event::Backspace),
                    egui::Key::Escape => self.envoyer(Event::AllClear),
                    _ => {}
                },
                _ => {}
            }
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
