//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> build (shunting-yard) -> Expr -> evaluate
//!
//! `evaluate` garde la faute native sur division par zéro ; l’interface passe
//! par `eval_expression`, qui utilise `evaluate_checked`.

use tracing::debug;

use super::construction::build;
use super::entier::{quotient, Entier};
use super::erreur::{ErreurNoyau, Resultat};
use super::expr::{Expr, Op};
use super::jetons::{format_tokens, tokenize_avec};
use crate::config::Config;

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub arbre: String,
    pub profondeur: usize,
    pub noeuds: usize,
}

fn combine<T: Entier>(op: Op, g: T, d: T) -> T {
    match op {
        Op::Plus => g.wrapping_add(&d),
        Op::Minus => g.wrapping_sub(&d),
        Op::Star => g.wrapping_mul(&d),
        Op::Slash => quotient(g, d),
    }
}

/// Réduit l’arbre à un entier.
///
/// # Panics
/// Sur division par zéro (faute native de l’entier machine).
pub fn evaluate<T: Entier>(expr: &Expr<T>) -> T {
    match expr {
        Expr::Num(v) => *v,
        Expr::BinOp(op, a, b) => {
            let g = evaluate(a);
            let d = evaluate(b);
            combine(*op, g, d)
        }
    }
}

/// Comme `evaluate`, mais la division par zéro devient `DivisionParZero`.
pub fn evaluate_checked<T: Entier>(expr: &Expr<T>) -> Resultat<T> {
    match expr {
        Expr::Num(v) => Ok(*v),
        Expr::BinOp(op, a, b) => {
            let g = evaluate_checked(a)?;
            let d = evaluate_checked(b)?;
            if *op == Op::Slash && d.is_zero() {
                return Err(ErreurNoyau::DivisionParZero);
            }
            Ok(combine(*op, g, d))
        }
    }
}

/// API publique : évalue une expression texte et retourne le résultat + la démarche.
pub fn eval_expression<T: Entier>(expr_str: &str, config: &Config) -> Resultat<(T, DemarcheNoyau)> {
    let s = expr_str.trim();

    // 1) Jetons
    let jetons = tokenize_avec::<T>(s, config)?;

    // 2) AST
    let expr = build(&jetons)?;

    // 3) Valeur
    let valeur = evaluate_checked(&expr)?;
    debug!(%valeur, "eval");

    let d = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        arbre: expr.to_string(),
        profondeur: expr.profondeur(),
        noeuds: expr.noeuds(),
    };

    Ok((valeur, d))
}
