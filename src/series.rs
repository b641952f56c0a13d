use itertools::Itertools;

use std::cmp::Ordering;

/// Decade exponents used when none are configured, covering 0.1R up to 9.1M.
pub const DEFAULT_DECADES: &[i32] = &[-1, 0, 1, 2, 3, 4, 5, 6];

lazy_static! {
    /// RSeries constant for the E3 standard series
    pub static ref E3: RSeries = RSeries::new(&[1.0, 2.2, 4.7]);
    /// RSeries constant for the E6 standard series
    pub static ref E6: RSeries = RSeries::extend(&E3, &[1.5, 3.3, 6.8]);
    /// RSeries constant for the E12 standard series
    pub static ref E12: RSeries = RSeries::extend(&E6, &[1.2, 1.8, 2.7, 3.9, 5.6, 8.2]);
    /// RSeries constant for the E24 standard series
    pub static ref E24: RSeries = RSeries::extend(
        &E12,
        &[1.1, 1.3, 1.6, 2.0, 2.4, 3.0, 3.6, 4.3, 5.1, 6.2, 7.5, 9.1]
    );
}

/// A series of resistor mantissas spanning one decade, kept in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub struct RSeries {
    values: Box<[f64]>,
}

impl RSeries {
    /// Creates a series from a set of mantissas, which are expected to lie within `[1.0, 10.0)`.
    /// # Examples
    /// ```
    ///     # use ldo_divider_calc::RSeries;
    ///     let s = RSeries::new(&[4.7, 1.0, 2.2]);
    ///     assert_eq!(s.iter().cloned().collect::<Vec<_>>(), vec![1.0, 2.2, 4.7]);
    /// ```
    pub fn new(series: &[f64]) -> Self {
        let mut values = series.to_vec();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        RSeries {
            values: values.into_boxed_slice(),
        }
    }

    fn extend(base: &RSeries, add: &[f64]) -> Self {
        RSeries::new(&base.iter().chain(add.iter()).cloned().collect::<Vec<f64>>())
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> + Clone {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Multiplier for a decade exponent, `10^exp`.
pub fn decade(exp: i32) -> f64 {
    10f64.powi(exp)
}

/// Builds every candidate resistance from `series` scaled across the given decade exponents.
///
/// The table is ordered decade-major, then in series order, and contains exactly
/// `series.len() * exponents.len()` values. Values that coincide numerically are kept.
pub fn value_table(series: &RSeries, exponents: &[i32]) -> Vec<f64> {
    exponents
        .iter()
        .map(|&e| decade(e))
        .cartesian_product(series.iter())
        .map(|(multi, val)| multi * val)
        .collect()
}
