// src/noyau/expr.rs
//
// AST entier.
// - Num   : feuille
// - BinOp : opérateur binaire, deux enfants possédés par le noeud
//
// Pas de noeud "parenthèse" : le marqueur ne vit que sur la pile
// d’opérateurs de construction.rs, il ne peut pas atteindre l’arbre.
//
// Profondeur : évaluation, affichage et libération sont récursifs ; une
// imbrication extrême peut épuiser la pile d’appel (limite de ressource assumée).

use std::fmt;

/// Les quatre opérateurs binaires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Op {
    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr<T> {
    Num(T),
    BinOp(Op, Box<Expr<T>>, Box<Expr<T>>),
}

impl<T> Expr<T> {
    pub fn bin(op: Op, a: Expr<T>, b: Expr<T>) -> Self {
        Expr::BinOp(op, Box::new(a), Box::new(b))
    }

    /// Nombre de niveaux (feuille = 1).
    pub fn profondeur(&self) -> usize {
        match self {
            Expr::Num(_) => 1,
            Expr::BinOp(_, a, b) => 1 + a.profondeur().max(b.profondeur()),
        }
    }

    /// Nombre total de noeuds.
    pub fn noeuds(&self) -> usize {
        match self {
            Expr::Num(_) => 1,
            Expr::BinOp(_, a, b) => 1 + a.noeuds() + b.noeuds(),
        }
    }
}

/// Rendu canonique entièrement parenthésé : `((8 - 3) - 2)`.
/// Re-tokeniser ce texte reconstruit le même arbre.
impl<T: fmt::Display> fmt::Display for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(n) => write!(f, "{n}"),
            Expr::BinOp(op, a, b) => write!(f, "({a} {op} {b})"),
        }
    }
}
