// src/app.rs
//
// Module App (racine)
// - sous-modules : etat.rs (écran + touches) et vue.rs (egui)
// - impl eframe::App, commune au natif et au web

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = touche "C"
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.effacer();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
