//! Calculatrice entière : texte -> jetons -> AST -> entier.

pub mod config;
pub mod noyau;

pub use config::Config;
