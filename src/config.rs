//! Configuration du pipeline (noyau + interface).
//!
//! Pas de fichier : une simple structure avec des valeurs par défaut,
//! passée explicitement à chaque appel.

/// Que faire d’un caractère qui n’est ni chiffre, ni opérateur, ni parenthèse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolitiqueCaracteres {
    /// Ignoré (mais termine un nombre en cours).
    #[default]
    Ignorer,
    /// Refusé avec `EntreeInvalide`. Les blancs restent acceptés.
    Rejeter,
}

/// Largeur de l’entier machine utilisé par l’interface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Largeur {
    /// `int` C classique
    I32,
    #[default]
    I64,
}

impl Largeur {
    pub fn libelle(self) -> &'static str {
        match self {
            Largeur::I32 => "i32",
            Largeur::I64 => "i64",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub caracteres_inconnus: PolitiqueCaracteres,
    /// `None` = pas de limite.
    pub longueur_max: Option<usize>,
    pub largeur: Largeur,
}

impl Config {
    /// Configuration stricte : refuse les caractères inconnus.
    pub fn stricte() -> Self {
        Self {
            caracteres_inconnus: PolitiqueCaracteres::Rejeter,
            ..Self::default()
        }
    }

    pub fn avec_longueur_max(mut self, max: usize) -> Self {
        self.longueur_max = Some(max);
        self
    }
}
