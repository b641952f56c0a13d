use itertools::Itertools;

use std::fmt;

use crate::config::DividerConfig;
use crate::divider::v_out;

fn _format_rval(r: f64, unit: &str) -> String {
    // drops noise from the decade multiplication, e.g. 0.22000000000000003
    let r = (r * 1e6).round() / 1e6;
    let mut val = format!("{}", r);
    if val.contains('.') {
        val.replace(".", unit)
    } else {
        val.push_str(unit);
        val
    }
}

/// Formats a resistance in the usual part notation, e.g. `0R22`, `75R`, `4K7`, `1M`.
pub fn print_r(r: f64) -> String {
    if r < 1000.0 {
        _format_rval(r, "R")
    } else if r < 1_000_000.0 {
        _format_rval(r / 1000.0, "K")
    } else {
        _format_rval(r / 1_000_000.0, "M")
    }
}

/// A binding of values to the resistors R1, R2, ... of the divider.
#[derive(Debug, Clone, PartialEq)]
pub struct RSet(pub(crate) Box<[f64]>);

impl RSet {
    /// Retrieves the value of R{idx}, starting from R1, R2, ..., Rn
    pub fn r(&self, idx: usize) -> f64 {
        self.0[idx - 1]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sep = if f.alternate() { "\n" } else { " | " };
        write!(
            f,
            "{}",
            self.0
                .iter()
                .enumerate()
                .map(|(i, r)| format!("R{}: {}", i + 1, print_r(*r)))
                .join(sep)
        )
    }
}

/// A valid (R1, R2, R3) set with the output voltages it realizes.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub values: RSet,
    /// Output with R3 shorted
    pub higher: f64,
    /// Output with R3 in circuit
    pub lower: f64,
}

impl Match {
    pub(crate) fn new(values: RSet, cfg: &DividerConfig) -> Self {
        let (r1, r2, r3) = (values.r(1), values.r(2), values.r(3));
        Match {
            higher: v_out(cfg.v_ref, r1, r2),
            lower: v_out(cfg.v_ref, r1, r2 + r3),
            values,
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} | higher voltage: {:.4} V | lower voltage: {:.4} V",
            self.values, self.higher, self.lower
        )
    }
}

/// Stores the result of a search, in the order the matches were found.
#[derive(Debug, Clone, Default)]
pub struct Matches {
    res: Vec<Match>,
}

impl Matches {
    pub(crate) fn new(res: Vec<Match>) -> Self {
        Matches { res }
    }

    /// Print one line per match. Prints nothing if the search found nothing.
    pub fn print_all(&self) {
        for m in self.iter() {
            println!("{}", m);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.res.iter()
    }

    pub fn len(&self) -> usize {
        self.res.len()
    }

    pub fn is_empty(&self) -> bool {
        self.res.is_empty()
    }
}
