// src/noyau/entier.rs
//
// Entier machine (largeur fixe) pour tout le noyau.
// - littéraux : valeur*10 + chiffre, qui boucle au dépassement
// - + - *     : bouclent au dépassement (sémantique native acceptée)
// - /         : quotient tronqué vers zéro ; MIN / -1 boucle sur MIN
//
// La division par zéro n’est PAS gérée ici : voir eval.rs.

use std::fmt;

use num_traits::ops::wrapping::{WrappingAdd, WrappingMul, WrappingSub};
use num_traits::PrimInt;

/// Entier utilisable par le noyau (i32, i64, u64…).
pub trait Entier:
    PrimInt + WrappingAdd + WrappingSub + WrappingMul + From<u8> + fmt::Display + fmt::Debug
{
}

impl<T> Entier for T where
    T: PrimInt + WrappingAdd + WrappingSub + WrappingMul + From<u8> + fmt::Display + fmt::Debug
{
}

/// Ajoute un chiffre décimal à droite : `acc*10 + chiffre`.
pub fn pousse_chiffre<T: Entier>(acc: T, chiffre: u8) -> T {
    // `T::from` serait ambigu avec NumCast::from
    acc.wrapping_mul(&<T as From<u8>>::from(10))
        .wrapping_add(&<T as From<u8>>::from(chiffre))
}

/// Quotient tronqué. `d == 0` garde la faute native (panic).
pub fn quotient<T: Entier>(g: T, d: T) -> T {
    match g.checked_div(&d) {
        Some(q) => q,
        // seul débordement possible : MIN / -1
        None if !d.is_zero() => T::min_value(),
        None => g / d,
    }
}
