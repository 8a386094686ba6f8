//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche, réglages)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Longueur d’entrée bornée (la récursion du noyau suit l’imbrication).

use calculatrice_entiere::config::{Config, Largeur, PolitiqueCaracteres};
use calculatrice_entiere::noyau::DemarcheNoyau;

/// Garde-fou : longueur maximale de l’entrée (anti-gel / anti-débordement de pile).
pub const LONGUEUR_MAX: usize = 1000;

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub arbre: String,
    pub mesures: String,
}

impl Demarche {
    pub fn depuis_noyau(d: DemarcheNoyau, largeur: Largeur) -> Self {
        Self {
            jetons: d.jetons,
            arbre: d.arbre,
            mesures: format!(
                "profondeur {}, {} noeuds, entiers {}",
                d.profondeur,
                d.noeuds,
                largeur.libelle()
            ),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // "= 14"
    pub erreur: String,   // message d’erreur (si parsing/éval échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub config: Config,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

fn config_defaut() -> Config {
    Config::default().avec_longueur_max(LONGUEUR_MAX)
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            config: config_defaut(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + réglages par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.config = config_defaut();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier caractère non blanc.
    pub fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute,
    /// mais la démarche n’a plus de sens.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (valeur + démarche).
    pub fn set_resultat(&mut self, valeur: impl std::fmt::Display, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = format!("= {valeur}");
        self.demarche = demarche;
        self.focus_entree = true;
    }

    pub fn stricte(&self) -> bool {
        self.config.caracteres_inconnus == PolitiqueCaracteres::Rejeter
    }

    pub fn set_stricte(&mut self, stricte: bool) {
        self.config.caracteres_inconnus = if stricte {
            PolitiqueCaracteres::Rejeter
        } else {
            PolitiqueCaracteres::Ignorer
        };
        self.focus_entree = true;
    }

    pub fn set_largeur(&mut self, largeur: Largeur) {
        self.config.largeur = largeur;
        self.focus_entree = true;
    }
}
