//! Noyau entier
//!
//! Organisation interne :
//! - entier.rs       : entier machine générique (i32, i64…) + arithmétique qui boucle
//! - jetons.rs       : tokenisation (lecteur à état explicite)
//! - expr.rs         : AST + rendu canonique
//! - construction.rs : shunting-yard -> Expr + table de précédence
//! - eval.rs         : évaluation + pipeline complet
//! - erreur.rs       : erreurs typées

pub mod construction;
pub mod entier;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod jetons;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use construction::build;
pub use erreur::{ErreurNoyau, Malformation, Resultat};
pub use eval::{eval_expression, evaluate, evaluate_checked, DemarcheNoyau};
pub use expr::{Expr, Op};
pub use jetons::{tokenize, tokenize_avec, Tok};
