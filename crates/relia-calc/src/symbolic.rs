//! Symbolic probability expressions.
//!
//! A small expression tree, enough to carry inclusion-exclusion over failure
//! symbols such as `F_A` and print the result. Constructors simplify as they
//! go: nested sums and products are flattened, numeric constants folded, and
//! identities (`x + 0`, `x * 1`, `x * 0`, `--x`) eliminated.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::{Add, Mul, Neg};

use relia_core::errors::ProbabilityError;

use crate::value::ProbabilityValue;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(f64),
    Symbol(String),
    Sum(Vec<Expr>),
    Product(Vec<Expr>),
    Neg(Box<Expr>),
}

impl Expr {
    pub fn num(value: f64) -> Self {
        Expr::Num(value)
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::Symbol(name.into())
    }

    /// Simplified sum of `terms`.
    pub fn sum<I: IntoIterator<Item = Expr>>(terms: I) -> Self {
        let mut constant = 0.0;
        let mut flat = Vec::new();
        for term in terms {
            match term {
                Expr::Num(x) => constant += x,
                Expr::Sum(inner) => {
                    for t in inner {
                        match t {
                            Expr::Num(x) => constant += x,
                            other => flat.push(other),
                        }
                    }
                }
                other => flat.push(other),
            }
        }
        if constant != 0.0 {
            flat.push(Expr::Num(constant));
        }
        match flat.len() {
            0 => Expr::Num(0.0),
            1 => flat.remove(0),
            _ => Expr::Sum(flat),
        }
    }

    /// Simplified product of `factors`. Negations are pulled out as a sign.
    pub fn product<I: IntoIterator<Item = Expr>>(factors: I) -> Self {
        let mut coefficient = 1.0;
        let mut flat = Vec::new();
        let mut pending: Vec<Expr> = factors.into_iter().collect();
        while let Some(factor) = pending.pop() {
            match factor {
                Expr::Num(x) => coefficient *= x,
                Expr::Neg(inner) => {
                    coefficient = -coefficient;
                    pending.push(*inner);
                }
                Expr::Product(inner) => pending.extend(inner),
                other => flat.push(other),
            }
        }
        if coefficient == 0.0 {
            return Expr::Num(0.0);
        }
        // Popping reversed the order.
        flat.reverse();

        let body = match flat.len() {
            0 => return Expr::Num(coefficient),
            1 => flat.remove(0),
            _ => Expr::Product(flat),
        };
        if coefficient == 1.0 {
            body
        } else if coefficient == -1.0 {
            Expr::Neg(Box::new(body))
        } else {
            let mut factors = vec![Expr::Num(coefficient)];
            match body {
                Expr::Product(inner) => factors.extend(inner),
                other => factors.push(other),
            }
            Expr::Product(factors)
        }
    }

    /// Simplified negation.
    pub fn negate(self) -> Self {
        match self {
            Expr::Num(x) => Expr::Num(-x),
            Expr::Neg(inner) => *inner,
            other => Expr::Neg(Box::new(other)),
        }
    }

    /// Every symbol appearing in the expression.
    pub fn symbols(&self) -> BTreeSet<&str> {
        let mut out = BTreeSet::new();
        self.collect_symbols(&mut out);
        out
    }

    fn collect_symbols<'a>(&'a self, out: &mut BTreeSet<&'a str>) {
        match self {
            Expr::Num(_) => {}
            Expr::Symbol(name) => {
                out.insert(name.as_str());
            }
            Expr::Sum(items) | Expr::Product(items) => {
                for item in items {
                    item.collect_symbols(out);
                }
            }
            Expr::Neg(inner) => inner.collect_symbols(out),
        }
    }

    /// Evaluate with symbol values from `lookup`.
    pub fn eval_with<F>(&self, lookup: &F) -> Result<f64, ProbabilityError>
    where
        F: Fn(&str) -> Option<f64>,
    {
        match self {
            Expr::Num(x) => Ok(*x),
            Expr::Symbol(name) => {
                lookup(name.as_str()).ok_or_else(|| ProbabilityError::UnboundSymbol {
                    symbol: name.clone(),
                })
            }
            Expr::Sum(items) => items.iter().map(|item| item.eval_with(lookup)).sum(),
            Expr::Product(items) => items.iter().map(|item| item.eval_with(lookup)).product(),
            Expr::Neg(inner) => Ok(-inner.eval_with(lookup)?),
        }
    }

    pub fn eval(&self, bindings: &BTreeMap<String, f64>) -> Result<f64, ProbabilityError> {
        self.eval_with(&|name: &str| bindings.get(name).copied())
    }

    /// Render one factor of a product, parenthesizing sums and negations.
    fn fmt_factor(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Sum(_) | Expr::Neg(_) => write!(f, "({self})"),
            _ => write!(f, "{self}"),
        }
    }
}

fn fmt_num(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.fract() == 0.0 && x.abs() < 1e15 {
        write!(f, "{}", x as i64)
    } else {
        write!(f, "{x}")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(x) => fmt_num(*x, f),
            Expr::Symbol(name) => f.write_str(name),
            Expr::Sum(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    match (i, term) {
                        (0, Expr::Neg(inner)) => {
                            f.write_str("-")?;
                            inner.fmt_factor(f)?;
                        }
                        (0, _) => write!(f, "{term}")?,
                        (_, Expr::Neg(inner)) => {
                            f.write_str(" - ")?;
                            inner.fmt_factor(f)?;
                        }
                        (_, Expr::Num(x)) if *x < 0.0 => {
                            f.write_str(" - ")?;
                            fmt_num(-x, f)?;
                        }
                        _ => write!(f, " + {term}")?,
                    }
                }
                Ok(())
            }
            Expr::Product(factors) => {
                for (i, factor) in factors.iter().enumerate() {
                    if i > 0 {
                        f.write_str("*")?;
                    }
                    factor.fmt_factor(f)?;
                }
                Ok(())
            }
            Expr::Neg(inner) => {
                f.write_str("-")?;
                inner.fmt_factor(f)
            }
        }
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::sum([self, rhs])
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::product([self, rhs])
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        self.negate()
    }
}

impl ProbabilityValue for Expr {
    fn zero() -> Self {
        Expr::Num(0.0)
    }

    fn one() -> Self {
        Expr::Num(1.0)
    }

    fn sum_all<I: IntoIterator<Item = Self>>(values: I) -> Self {
        Expr::sum(values)
    }

    fn product_all<I: IntoIterator<Item = Self>>(values: I) -> Self {
        Expr::product(values)
    }
}
