// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus) ; Backspace reste celui du TextEdit
// - Tactile : boutons, focus redonné après clic (focus_entree)

use eframe::egui;
use tracing::debug;

use calculatrice_entiere::config::Largeur;
use calculatrice_entiere::noyau::eval_expression;

use super::etat::{AppCalc, Demarche};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice entière");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2 + 3) * 4, 8 - 3 - 2, 7 / 2")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter : singleline perd le focus sur Enter, d’où lost_focus()
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        // Actions + réglages
        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            let mut largeur = self.config.largeur;
            ui.selectable_value(&mut largeur, Largeur::I32, Largeur::I32.libelle())
                .on_hover_text("Entier 32 bits (int C)");
            ui.selectable_value(&mut largeur, Largeur::I64, Largeur::I64.libelle())
                .on_hover_text("Entier 64 bits");
            if largeur != self.config.largeur {
                self.set_largeur(largeur);
            }

            ui.separator();

            let mut stricte = self.stricte();
            if ui
                .checkbox(&mut stricte, "strict")
                .on_hover_text("Refuser les caractères inconnus au lieu de les ignorer")
                .changed()
            {
                self.set_stricte(stricte);
            }
        });

        ui.add_space(8.0);

        self.ui_pave(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_entier")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", InsertKind::Digit);
                self.bouton_insert(ui, "8", InsertKind::Digit);
                self.bouton_insert(ui, "9", InsertKind::Digit);
                self.bouton_insert(ui, "/", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "4", InsertKind::Digit);
                self.bouton_insert(ui, "5", InsertKind::Digit);
                self.bouton_insert(ui, "6", InsertKind::Digit);
                self.bouton_insert(ui, "*", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "1", InsertKind::Digit);
                self.bouton_insert(ui, "2", InsertKind::Digit);
                self.bouton_insert(ui, "3", InsertKind::Digit);
                self.bouton_insert(ui, "-", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "0", InsertKind::Digit);
                self.bouton_insert(ui, "(", InsertKind::OpenParen);
                self.bouton_insert(ui, ")", InsertKind::CloseParen);
                self.bouton_insert(ui, "+", InsertKind::Op);
                ui.end_row();

                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.label("");
                ui.label("");
                let eq = ui.add_sized([46.0, 28.0], egui::Button::new("="));
                if eq.clicked() {
                    self.eval_via_noyau();
                }
                ui.end_row();
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "Arbre", "demarche_arbre", &self.demarche.arbre);
                Self::champ_demarche(ui, "Mesures", "demarche_mesures", &self.demarche.mesures);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Lecture seule, sans TextEdit interactif.
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

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([46.0, 28.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, symbole: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(symbole));
        if resp.clicked() {
            self.insere(symbole, kind);
        }
    }

    /// Insertion avec espacement lisible : "12 + (3 - 4)".
    fn insere(&mut self, symbole: &str, kind: InsertKind) {
        match kind {
            InsertKind::Digit => {
                // chiffres: pas d’espaces auto
                self.entree.push_str(symbole);
            }
            InsertKind::CloseParen => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                self.entree.push_str(symbole);
            }
            InsertKind::OpenParen => {
                let last = self.entree.chars().rev().find(|c| !c.is_whitespace());
                if matches!(last, Some(c) if c.is_ascii_digit() || c == ')') {
                    self.entree.push(' ');
                }
                self.entree.push_str(symbole);
            }
            InsertKind::Op => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(symbole);
                self.entree.push(' ');
            }
        }

        self.focus_entree = true;
    }

    /// Évalue l’entrée via le noyau, dans la largeur choisie, puis dépose résultat/démarche.
    fn eval_via_noyau(&mut self) {
        let s = self.entree.trim();
        if s.is_empty() {
            self.set_erreur("Entrée vide");
            return;
        }

        debug!(entree = s, largeur = self.config.largeur.libelle(), "évaluation");

        let largeur = self.config.largeur;
        let res = match largeur {
            Largeur::I32 => eval_expression::<i32>(s, &self.config).map(|(v, d)| (v.to_string(), d)),
            Largeur::I64 => eval_expression::<i64>(s, &self.config).map(|(v, d)| (v.to_string(), d)),
        };

        match res {
            Ok((valeur, d)) => self.set_resultat(valeur, Demarche::depuis_noyau(d, largeur)),
            Err(e) => self.set_erreur(e.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Op,
    OpenParen,
    CloseParen,
}
