// src/app/vue.rs
//
// Vue (UI egui): natif + web
// ---------------------------
// - Écran en lecture seule, aligné à droite
// - Rad / Deg
// - Pavé 5 colonnes (fonctions, chiffres, opérateurs)
// - Panneau « Démarche » repliable (prétraité, jetons, RPN)
//
// Le clavier physique est géré ici : chiffres/opérateurs via les événements
// texte, Enter = "=", Backspace = ⌫.

use eframe::egui;

use calculatrice_scientifique::noyau::jetons::{Constante, Fonction};
use calculatrice_scientifique::noyau::ModeAngle;

use super::etat::{AppCalc, OpSci};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.clavier_physique(ui);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_ecran(ui);
                ui.add_space(4.0);
                self.ui_mode_angle(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.ecran)
                            .monospace()
                            .size(28.0),
                    );
                });
            });
    }

    fn ui_mode_angle(&mut self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // ordre inversé (right_to_left)
            for mode in [ModeAngle::Degres, ModeAngle::Radians] {
                let actif = self.mode_angle() == mode;
                if ui.selectable_label(actif, mode.libelle()).clicked() && !actif {
                    self.basculer_angle();
                }
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        use Touche::*;

        let lignes: [[Touche; 5]; 6] = [
            [
                Sci(OpSci::Fonction(Fonction::Sin)),
                Sci(OpSci::Fonction(Fonction::Cos)),
                Sci(OpSci::Fonction(Fonction::Tan)),
                Sci(OpSci::Fonction(Fonction::Log)),
                Sci(OpSci::Fonction(Fonction::Ln)),
            ],
            [
                Saisie("("),
                Saisie(")"),
                Sci(OpSci::Fonction(Fonction::Racine)),
                Sci(OpSci::Carre),
                Saisie("^"),
            ],
            [
                Sci(OpSci::Constante(Constante::Pi)),
                Saisie("7"),
                Saisie("8"),
                Saisie("9"),
                Saisie("÷"),
            ],
            [
                Sci(OpSci::Constante(Constante::E)),
                Saisie("4"),
                Saisie("5"),
                Saisie("6"),
                Saisie("×"),
            ],
            [Effacer, Saisie("1"), Saisie("2"), Saisie("3"), Saisie("-")],
            [RetourArriere, Saisie("0"), Saisie("."), Egal, Saisie("+")],
        ];

        egui::Grid::new("pave_scientifique")
            .num_columns(5)
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
        let resp = ui.add_sized([56.0, 36.0], egui::Button::new(touche.libelle()));
        let resp = match touche {
            Touche::Effacer => resp.on_hover_text("Remet l’écran à 0 (Échap)"),
            Touche::RetourArriere => resp.on_hover_text("Efface le dernier caractère"),
            _ => resp,
        };

        if resp.clicked() {
            self.appuyer(touche);
        }
    }

    fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Saisie(s) => self.saisir(s),
            Touche::Sci(op) => self.operation_sci(op),
            Touche::Effacer => self.effacer(),
            Touche::RetourArriere => self.retour_arriere(),
            Touche::Egal => self.egal(),
        }
    }

    /// Clavier PC : texte tapé + Enter/Backspace.
    fn clavier_physique(&mut self, ui: &mut egui::Ui) {
        let evenements = ui.input(|i| i.events.clone());
        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        if let Some(touche) = touche_clavier(c) {
                            self.appuyer(touche);
                        }
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => self.egal(),
                    egui::Key::Backspace => self.retour_arriere(),
                    _ => {}
                },
                _ => {}
            }
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| match &self.demarche {
                Some(d) => {
                    Self::champ_demarche(ui, "Prétraité", "demarche_pretraite", &d.pretraite);
                    Self::champ_demarche(ui, "Jetons", "demarche_jetons", &d.jetons);
                    Self::champ_demarche(ui, "RPN", "demarche_rpn", &d.rpn);
                }
                None => {
                    ui.weak("aucune évaluation réussie");
                }
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Saisie(&'static str),
    Sci(OpSci),
    Effacer,
    RetourArriere,
    Egal,
}

impl Touche {
    fn libelle(self) -> &'static str {
        match self {
            Touche::Saisie(s) => s,
            Touche::Sci(OpSci::Fonction(f)) => f.nom(),
            Touche::Sci(OpSci::Carre) => "x²",
            Touche::Sci(OpSci::Constante(c)) => c.symbole(),
            Touche::Effacer => "C",
            Touche::RetourArriere => "⌫",
            Touche::Egal => "=",
        }
    }
}

/// Caractère tapé -> touche du pavé (alias ASCII * et /).
fn touche_clavier(c: char) -> Option<Touche> {
    Some(match c {
        '0' => Touche::Saisie("0"),
        '1' => Touche::Saisie("1"),
        '2' => Touche::Saisie("2"),
        '3' => Touche::Saisie("3"),
        '4' => Touche::Saisie("4"),
        '5' => Touche::Saisie("5"),
        '6' => Touche::Saisie("6"),
        '7' => Touche::Saisie("7"),
        '8' => Touche::Saisie("8"),
        '9' => Touche::Saisie("9"),
        '.' => Touche::Saisie("."),
        '(' => Touche::Saisie("("),
        ')' => Touche::Saisie(")"),
        '+' => Touche::Saisie("+"),
        '-' => Touche::Saisie("-"),
        '^' => Touche::Saisie("^"),
        '*' | '×' => Touche::Saisie("×"),
        '/' | '÷' => Touche::Saisie("÷"),
        '=' => Touche::Egal,
        'e' => Touche::Sci(OpSci::Constante(Constante::E)),
        'p' | 'π' => Touche::Sci(OpSci::Constante(Constante::Pi)),
        _ => return None,
    })
}
