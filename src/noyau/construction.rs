// src/noyau/construction.rs
//
// Shunting-yard -> AST, en une passe et sans RPN intermédiaire.
//
// Deux piles :
// - exprs : sous-arbres terminés (feuilles + BinOp fusionnés)
// - ops   : opérateurs en attente + marqueurs de parenthèse ouvrante
//
// Fusion : dépile un opérateur, puis deux sous-arbres (le premier dépilé est
// l’opérande DROIT), et repousse le BinOp obtenu sur exprs.

use tracing::{debug, trace};

use super::entier::Entier;
use super::erreur::{Malformation, Resultat};
use super::expr::{Expr, Op};
use super::jetons::Tok;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Gauche,
    Droite,
}

/// Table de précédence/associativité (constante, partagée sans verrou).
impl Op {
    pub const fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Minus => 1,
            Op::Star | Op::Slash => 2,
        }
    }

    pub const fn associativite(self) -> Assoc {
        Assoc::Gauche
    }
}

fn op_de<T>(t: &Tok<T>) -> Option<Op> {
    match t {
        Tok::Plus => Some(Op::Plus),
        Tok::Minus => Some(Op::Minus),
        Tok::Star => Some(Op::Star),
        Tok::Slash => Some(Op::Slash),
        Tok::Num(_) | Tok::LPar | Tok::RPar => None,
    }
}

/// L’opérateur au sommet doit-il être fusionné avant d’empiler `entrant` ?
fn doit_fusionner(haut: Op, entrant: Op) -> bool {
    let (ph, pe) = (haut.precedence(), entrant.precedence());
    ph > pe || (ph == pe && entrant.associativite() == Assoc::Gauche)
}

/// Entrée de la pile d’opérateurs.
#[derive(Clone, Copy, Debug)]
enum EntreeOp {
    Op(Op),
    Paren,
}

struct Construction<T> {
    exprs: Vec<Expr<T>>,
    ops: Vec<EntreeOp>,
}

impl<T: Entier> Construction<T> {
    fn new() -> Self {
        Self {
            exprs: Vec::new(),
            ops: Vec::new(),
        }
    }

    fn analyse(&mut self, tok: &Tok<T>) -> Result<(), Malformation> {
        if let Some(op) = op_de(tok) {
            while let Some(&EntreeOp::Op(haut)) = self.ops.last() {
                if !doit_fusionner(haut, op) {
                    break;
                }
                self.ops.pop();
                self.fusionne(haut)?;
            }
            self.ops.push(EntreeOp::Op(op));
            return Ok(());
        }

        match *tok {
            Tok::Num(n) => self.exprs.push(Expr::Num(n)),
            Tok::LPar => self.ops.push(EntreeOp::Paren),
            Tok::RPar => loop {
                match self.ops.pop() {
                    Some(EntreeOp::Paren) => break,
                    Some(EntreeOp::Op(op)) => self.fusionne(op)?,
                    None => return Err(Malformation::ParentheseFermanteOrpheline),
                }
            },
            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {}
        }
        Ok(())
    }

    fn fusionne(&mut self, op: Op) -> Result<(), Malformation> {
        let droite = self.exprs.pop().ok_or(Malformation::OperandeManquant)?;
        let gauche = self.exprs.pop().ok_or(Malformation::OperandeManquant)?;
        trace!(%op, "fusion");
        self.exprs.push(Expr::bin(op, gauche, droite));
        Ok(())
    }

    /// Vide les opérateurs restants, puis exige un seul sous-arbre.
    fn termine(mut self) -> Result<Expr<T>, Malformation> {
        while let Some(entree) = self.ops.pop() {
            match entree {
                EntreeOp::Op(op) => self.fusionne(op)?,
                EntreeOp::Paren => return Err(Malformation::ParentheseOuvranteNonFermee),
            }
        }

        match self.exprs.len() {
            0 => Err(Malformation::ExpressionVide),
            1 => self.exprs.pop().ok_or(Malformation::ExpressionVide),
            n => Err(Malformation::OperandesEnTrop(n)),
        }
    }
}

/// Construit l’AST d’une suite de jetons.
///
/// Échoue (sans arbre partiel) sur parenthèses déséquilibrées, opérande
/// manquant, ou s’il ne reste pas exactement un sous-arbre.
pub fn build<T: Entier>(tokens: &[Tok<T>]) -> Resultat<Expr<T>> {
    let mut c = Construction::new();
    for tok in tokens {
        c.analyse(tok)?;
    }
    let expr = c.termine()?;
    debug!(
        profondeur = expr.profondeur(),
        noeuds = expr.noeuds(),
        "build"
    );
    Ok(expr)
}
