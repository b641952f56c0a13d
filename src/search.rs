//! The three stage search for (R1, R2, R3).
//!
//! Each stage is a plain function over the value table so it can be run and checked on its
//! own; [`search`] chains them.

use itertools::Itertools;

use crate::config::DividerConfig;
use crate::divider::{in_range, is_match, v_out};
use crate::report::{Match, Matches, RSet};
use crate::series::value_table;

/// Stage A: values usable as R2 on their own, in table order.
pub fn r2_candidates(values: &[f64], cfg: &DividerConfig) -> Vec<f64> {
    values
        .iter()
        .cloned()
        .filter(|&r2| in_range(r2, cfg.r23_min, cfg.r23_max))
        .collect()
}

/// Stage B: every (R1, R2) that hits the higher target with R3 shorted.
///
/// R2 is the outer loop and R1 the inner one, both over their full lists.
pub fn higher_pairs(values: &[f64], r2s: &[f64], cfg: &DividerConfig) -> Vec<RSet> {
    r2s.iter()
        .cartesian_product(values.iter())
        .filter(|&(&r2, &r1)| {
            is_match(
                cfg.u_out_higher,
                v_out(cfg.v_ref, r1, r2),
                cfg.output_tolerance,
            )
        })
        .map(|(&r2, &r1)| RSet(vec![r1, r2].into_boxed_slice()))
        .collect()
}

/// Stage C: extends each (R1, R2) pair with every R3 that keeps R2 + R3 in range and hits the
/// lower target.
pub fn triples(values: &[f64], pairs: &[RSet], cfg: &DividerConfig) -> Vec<RSet> {
    pairs
        .iter()
        .cartesian_product(values.iter())
        .filter(|&(pair, &r3)| {
            let r_ground = pair.r(2) + r3;
            in_range(r_ground, cfg.r23_min, cfg.r23_max)
                && is_match(
                    cfg.u_out_lower,
                    v_out(cfg.v_ref, pair.r(1), r_ground),
                    cfg.output_tolerance,
                )
        })
        .map(|(pair, &r3)| RSet(vec![pair.r(1), pair.r(2), r3].into_boxed_slice()))
        .collect()
}

/// Runs all stages for `cfg` and returns every match in search order.
///
/// A config that cannot be satisfied gives an empty result rather than an error.
/// # Examples
/// ```
///     # use ldo_divider_calc::{search, DividerConfig};
///     let res = search(&DividerConfig::default());
///     for m in res.iter() {
///         println!("{}", m);
///     }
/// ```
pub fn search(cfg: &DividerConfig) -> Matches {
    let values = value_table(&cfg.e_series, &cfg.decade_exponents);
    debug!("value table holds {} resistances", values.len());

    let r2s = r2_candidates(&values, cfg);
    debug!(
        "{} R2 candidates within {}..={}",
        r2s.len(),
        cfg.r23_min,
        cfg.r23_max
    );

    let pairs = higher_pairs(&values, &r2s, cfg);
    debug!("{} (R1, R2) pairs reach {}V", pairs.len(), cfg.u_out_higher);

    let found = triples(&values, &pairs, cfg);
    debug!("{} (R1, R2, R3) sets reach {}V", found.len(), cfg.u_out_lower);
    debug!(
        "{} divider evaluations",
        (r2s.len() + pairs.len()) * values.len()
    );

    let res: Vec<Match> = found
        .into_iter()
        .map(|rs| {
            trace!("match {}", rs);
            Match::new(rs, cfg)
        })
        .collect();
    info!(
        "{} matches for {}V / {}V within {}%",
        res.len(),
        cfg.u_out_higher,
        cfg.u_out_lower,
        cfg.output_tolerance * 100.0
    );
    Matches::new(res)
}
