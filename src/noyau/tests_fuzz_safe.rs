//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - oracle : un analyseur récursif descendant indépendant de la grammaire
//! - invariant clé : une soupe de jetons ne fait jamais paniquer build/evaluate_checked

use std::time::{Duration, Instant};

use super::{build, eval_expression, evaluate_checked, tokenize, ErreurNoyau};
use crate::config::Config;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Oracle (descente récursive) ------------------------ */

// expr := term (('+'|'-') term)* ; term := factor (('*'|'/') factor)*
// factor := NUMBER | '(' expr ')'
// Une division par zéro lève `div_zero` ; la lecture continue jusqu’au bout.
struct Oracle<'a> {
    c: &'a [u8],
    i: usize,
    div_zero: bool,
}

impl Oracle<'_> {
    fn eval(s: &str) -> Option<i64> {
        let mut o = Oracle {
            c: s.as_bytes(),
            i: 0,
            div_zero: false,
        };
        let v = o.expr();
        o.blancs();
        assert_eq!(o.i, o.c.len(), "oracle: reste non lu dans {s:?}");
        if o.div_zero {
            None
        } else {
            Some(v)
        }
    }

    fn blancs(&mut self) {
        while self.i < self.c.len() && self.c[self.i] == b' ' {
            self.i += 1;
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.blancs();
        self.c.get(self.i).copied()
    }

    fn expr(&mut self) -> i64 {
        let mut v = self.term();
        loop {
            match self.peek() {
                Some(b'+') => {
                    self.i += 1;
                    v = v.wrapping_add(self.term());
                }
                Some(b'-') => {
                    self.i += 1;
                    v = v.wrapping_sub(self.term());
                }
                _ => return v,
            }
        }
    }

    fn term(&mut self) -> i64 {
        let mut v = self.factor();
        loop {
            match self.peek() {
                Some(b'*') => {
                    self.i += 1;
                    v = v.wrapping_mul(self.factor());
                }
                Some(b'/') => {
                    self.i += 1;
                    let d = self.factor();
                    if d == 0 {
                        self.div_zero = true;
                        v = 0;
                    } else {
                        v = v.checked_div(d).unwrap_or(i64::MIN);
                    }
                }
                _ => return v,
            }
        }
    }

    fn factor(&mut self) -> i64 {
        if self.peek() == Some(b'(') {
            self.i += 1;
            let v = self.expr();
            assert_eq!(self.peek(), Some(b')'), "oracle: ')' attendue");
            self.i += 1;
            return v;
        }
        let mut v: i64 = 0;
        let debut = self.i;
        while self.i < self.c.len() && self.c[self.i].is_ascii_digit() {
            v = v.wrapping_mul(10).wrapping_add((self.c[self.i] - b'0') as i64);
            self.i += 1;
        }
        assert!(self.i > debut, "oracle: nombre attendu");
        v
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(1_000_000)),
        2 => "9223372036854775807".to_string(),
        _ => format!("{}", rng.pick(20)),
    }
}

fn gen_op(rng: &mut Rng) -> &'static str {
    match rng.pick(4) {
        0 => "+",
        1 => "-",
        2 => "*",
        _ => "/",
    }
}

fn gen_expr(rng: &mut Rng, profondeur: u32) -> String {
    if profondeur == 0 || rng.pick(4) == 0 {
        return gen_nombre(rng);
    }
    let sep = if rng.coin() { " " } else { "" };
    match rng.pick(3) {
        0 => format!("({sep}{}{sep})", gen_expr(rng, profondeur - 1)),
        _ => {
            let a = gen_expr(rng, profondeur - 1);
            let b = gen_expr(rng, profondeur - 1);
            format!("{a}{sep}{}{sep}{b}", gen_op(rng))
        }
    }
}

fn gen_soupe(rng: &mut Rng) -> String {
    const ALPHABET: [&str; 9] = ["1", "23", "+", "-", "*", "/", "(", ")", " "];
    let n = rng.pick(16);
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_conforme_a_l_oracle() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(0x5eed_cafe);
    let cfg = Config::default();

    for _ in 0..3000 {
        budget(start, max);
        let s = gen_expr(&mut rng, 6);
        let attendu = Oracle::eval(&s);
        let obtenu = eval_expression::<i64>(&s, &cfg);

        match (attendu, obtenu) {
            (Some(v), Ok((w, _))) => assert_eq!(v, w, "expr={s:?}"),
            (None, Err(ErreurNoyau::DivisionParZero)) => {}
            (a, o) => panic!("expr={s:?} oracle={a:?} noyau={o:?}"),
        }
    }
}

#[test]
fn fuzz_soupe_sans_panique() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(42);

    for _ in 0..5000 {
        budget(start, max);
        let s = gen_soupe(&mut rng);
        if let Ok(e) = build(&tokenize::<i64>(&s)) {
            let _ = evaluate_checked(&e);
        }
    }
}

#[test]
fn fuzz_deterministe() {
    let mut r1 = Rng::new(7);
    let mut r2 = Rng::new(7);
    let cfg = Config::default();
    for _ in 0..200 {
        let s1 = gen_expr(&mut r1, 4);
        let s2 = gen_expr(&mut r2, 4);
        assert_eq!(s1, s2);
        assert_eq!(
            eval_expression::<i64>(&s1, &cfg),
            eval_expression::<i64>(&s2, &cfg)
        );
    }
}

#[test]
fn imbrication_profonde_bornee() {
    // profondeur modeste : la récursion est une limite de ressource assumée
    let n = 200;
    let s = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    let (v, d) = eval_expression::<i64>(&s, &Config::default()).unwrap();
    assert_eq!(v, 1);
    assert_eq!(d.profondeur, 1);

    let s = (0..n).map(|_| "1").collect::<Vec<_>>().join(" - ");
    let (v, d) = eval_expression::<i64>(&s, &Config::default()).unwrap();
    assert_eq!(v, 1 - (n as i64 - 1));
    assert_eq!(d.profondeur, n);
}
