// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Une seule vue pour les trois modes (sélecteur en haut)
// - La vue ne fait qu’envoyer des Event et afficher le SessionEffect
// - Opérateur en attente : bouton sélectionné (surbrillance)
//
// Note :
// - Le clavier est traité dans app.rs (une seule fois par frame)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Event, Operator};
use crate::reglages::Mode;

const TAILLE_TOUCHE: [f32; 2] = [64.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_modes(ui);
        ui.add_space(6.0);
        ui.separator();
        ui.add_space(6.0);

        self.ui_ecran(ui);
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_modes(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for mode in Mode::TOUS {
                if ui.selectable_label(self.mode == mode, mode.libelle()).clicked() {
                    self.changer_mode(mode);
                }
            }
        });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let couleur = if self.effet.is_error {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    let affichage = if self.effet.display_text.is_empty() {
                        "0"
                    } else {
                        self.effet.display_text.as_str()
                    };
                    ui.label(
                        egui::RichText::new(affichage)
                            .size(28.0)
                            .monospace()
                            .color(couleur),
                    );
                });
            });

        ui.monospace(&self.effet.history_text);
        ui.weak(&self.effet.memory_text);
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let valider = match self.mode {
            Mode::Rpn => Touche::Valider("EN"),
            Mode::Infixe | Mode::Parentheses => Touche::Valider("="),
        };

        let mut lignes = vec![
            [
                Touche::Chiffre('7'),
                Touche::Chiffre('8'),
                Touche::Chiffre('9'),
                Touche::Op(Operator::Div),
            ],
            [
                Touche::Chiffre('4'),
                Touche::Chiffre('5'),
                Touche::Chiffre('6'),
                Touche::Op(Operator::Mul),
            ],
            [
                Touche::Chiffre('1'),
                Touche::Chiffre('2'),
                Touche::Chiffre('3'),
                Touche::Op(Operator::Sub),
            ],
            [
                Touche::Chiffre('0'),
                Touche::Chiffre('.'),
                valider,
                Touche::Op(Operator::Add),
            ],
        ];

        if self.mode == Mode::Parentheses {
            lignes.push([
                Touche::Action("(", Event::Open),
                Touche::Action(")", Event::Close),
                Touche::Action("DEL", Event::Backspace),
                Touche::Action("AC", Event::AllClear),
            ]);
        } else {
            lignes.push([
                Touche::Action("DEL", Event::Backspace),
                Touche::Vide,
                Touche::Vide,
                Touche::Action("AC", Event::AllClear),
            ]);
        }

        lignes.push([
            Touche::Action("M", Event::MemoryStore),
            Touche::Action("MR", Event::MemoryRecall),
            Touche::Action("MC", Event::MemoryClear),
            Touche::Action("C", Event::Clear),
        ]);

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in lignes {
                    for touche in ligne {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let (texte, actif) = match touche {
            Touche::Vide => {
                ui.label("");
                return;
            }
            Touche::Chiffre(c) => (c.to_string(), false),
            Touche::Op(op) => (
                op.symbole().to_string(),
                self.effet.operator_highlight == Some(op),
            ),
            Touche::Valider(label) | Touche::Action(label, _) => (label.to_string(), false),
        };

        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(texte).selected(actif));
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Chiffre(c) => self.envoyer(Event::Digit(c)),
            Touche::Op(op) => self.envoyer(Event::Operator(op)),
            Touche::Valider(_) => self.valider(),
            Touche::Action(_, event) => self.envoyer(event),
            Touche::Vide => {}
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(char),
    Op(Operator),
    Valider(&'static str),
    Action(&'static str, Event),
    Vide,
}
