// src/noyau/jetons.rs

use std::fmt;

use tracing::{debug, warn};

use super::entier::{pousse_chiffre, Entier};
use super::erreur::{ErreurNoyau, Resultat};
use crate::config::{Config, PolitiqueCaracteres};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tok<T> {
    Num(T),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

impl<T: fmt::Display> fmt::Display for Tok<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(n) => write!(f, "{n}"),
            Tok::Plus => f.write_str("+"),
            Tok::Minus => f.write_str("-"),
            Tok::Star => f.write_str("*"),
            Tok::Slash => f.write_str("/"),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Les six symboles reconnus hors nombres.
fn symbole<T>(c: char) -> Option<Tok<T>> {
    match c {
        '+' => Some(Tok::Plus),
        '-' => Some(Tok::Minus),
        '*' => Some(Tok::Star),
        '/' => Some(Tok::Slash),
        '(' => Some(Tok::LPar),
        ')' => Some(Tok::RPar),
        _ => None,
    }
}

/// Lecteur caractère par caractère.
///
/// Un seul état : `en_cours` vaut `Some(valeur)` tant qu’on est dans un nombre.
/// Un lecteur neuf par appel : rien ne survit d’une entrée à l’autre.
#[derive(Debug)]
pub struct Lecteur<T> {
    en_cours: Option<T>,
    out: Vec<Tok<T>>,
}

impl<T: Entier> Default for Lecteur<T> {
    fn default() -> Self {
        Self {
            en_cours: None,
            out: Vec::new(),
        }
    }
}

impl<T: Entier> Lecteur<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consomme un caractère. Retourne `false` s’il n’est pas reconnu
    /// (blanc compris) ; il est alors ignoré mais termine un nombre en cours.
    pub fn consume(&mut self, c: char) -> bool {
        if let Some(chiffre) = c.to_digit(10) {
            let acc = self.en_cours.unwrap_or_else(T::zero);
            self.en_cours = Some(pousse_chiffre(acc, chiffre as u8));
            return true;
        }

        self.ferme_nombre();

        match symbole(c) {
            Some(t) => {
                self.out.push(t);
                true
            }
            None => false,
        }
    }

    /// Fin d’entrée : émet le nombre en attente.
    pub fn finish(mut self) -> Vec<Tok<T>> {
        self.ferme_nombre();
        self.out
    }

    fn ferme_nombre(&mut self) {
        if let Some(n) = self.en_cours.take() {
            self.out.push(Tok::Num(n));
        }
    }
}

/// Tokenize une chaîne (politique tolérante, sans limite).
///
/// Les caractères inconnus sont simplement ignorés : `"1 x 2"` donne `[1, 2]`.
pub fn tokenize<T: Entier>(s: &str) -> Vec<Tok<T>> {
    let mut lecteur = Lecteur::new();
    for c in s.chars() {
        lecteur.consume(c);
    }
    lecteur.finish()
}

/// Tokenize selon `config` (politique des caractères + longueur max).
pub fn tokenize_avec<T: Entier>(s: &str, config: &Config) -> Resultat<Vec<Tok<T>>> {
    if let Some(max) = config.longueur_max {
        let longueur = s.chars().count();
        if longueur > max {
            return Err(ErreurNoyau::EntreeTropLongue { longueur, max });
        }
    }

    let mut lecteur = Lecteur::new();
    for (position, c) in s.chars().enumerate() {
        let reconnu = lecteur.consume(c);
        if !reconnu
            && !c.is_whitespace()
            && config.caracteres_inconnus == PolitiqueCaracteres::Rejeter
        {
            warn!(%c, position, "caractère refusé");
            return Err(ErreurNoyau::EntreeInvalide {
                caractere: c,
                position,
            });
        }
    }

    let jetons = lecteur.finish();
    debug!(jetons = jetons.len(), "tokenize");
    Ok(jetons)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens<T: fmt::Display>(tokens: &[Tok<T>]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
