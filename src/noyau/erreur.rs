//! Erreurs du noyau.
//!
//! Les messages sont affichés tels quels par l’interface.

use thiserror::Error;

/// Raison précise d’une expression malformée (détectée par la construction).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    /// `)` sans `(` correspondante sur la pile d’opérateurs
    #[error("parenthèse fermante sans ouvrante")]
    ParentheseFermanteOrpheline,

    /// `(` encore sur la pile à la fin des jetons
    #[error("parenthèses non fermées")]
    ParentheseOuvranteNonFermee,

    /// fusion avec moins de deux sous-arbres disponibles
    #[error("opérande manquant")]
    OperandeManquant,

    /// aucun jeton utile
    #[error("expression vide")]
    ExpressionVide,

    /// plusieurs sous-arbres restent sans opérateur pour les relier
    #[error("{0} expressions sans opérateur entre elles")]
    OperandesEnTrop(usize),
}

/// Erreur unique du noyau.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurNoyau {
    /// Caractère non reconnu (politique stricte seulement)
    #[error("caractère inattendu: '{caractere}' (position {position})")]
    EntreeInvalide { caractere: char, position: usize },

    /// Entrée plus longue que la limite configurée
    #[error("entrée trop longue: {longueur} caractères (max {max})")]
    EntreeTropLongue { longueur: usize, max: usize },

    #[error("expression invalide: {0}")]
    ExpressionMalformee(#[from] Malformation),

    /// Seulement via `evaluate_checked`
    #[error("division par zéro")]
    DivisionParZero,
}

/// Alias de résultat du noyau.
pub type Resultat<T> = Result<T, ErreurNoyau>;
