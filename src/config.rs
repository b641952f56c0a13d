use crate::error::ConfigError;
use crate::series::{RSeries, DEFAULT_DECADES, E24};

/// Inputs for a single search run.
///
/// All voltages are in volts, resistances in ohms. `output_tolerance` is a fraction of the
/// target voltage, so `0.001` accepts outputs within 0.1% of each target.
#[derive(Debug, Clone)]
pub struct DividerConfig {
    /// Feedback voltage held at the divider tap by the regulator
    pub v_ref: f64,
    /// Output with the MOSFET open, lower leg R2 + R3
    pub u_out_lower: f64,
    /// Output with R3 shorted, lower leg R2 only
    pub u_out_higher: f64,
    pub output_tolerance: f64,
    /// Lower bound for both R2 and R2 + R3
    pub r23_min: f64,
    /// Upper bound for both R2 and R2 + R3
    pub r23_max: f64,
    pub e_series: RSeries,
    pub decade_exponents: Vec<i32>,
}

impl Default for DividerConfig {
    /// 3.3V / 1.8V from a 0.8V reference, 0.1% tolerance, R23 between 5K and 200K, E24 values
    /// from 0R1 to 9M1.
    fn default() -> Self {
        DividerConfig {
            v_ref: 0.8,
            u_out_lower: 1.8,
            u_out_higher: 3.3,
            output_tolerance: 0.001,
            r23_min: 5000.0,
            r23_max: 200_000.0,
            e_series: E24.clone(),
            decade_exponents: DEFAULT_DECADES.to_vec(),
        }
    }
}

impl DividerConfig {
    /// Same as `DividerConfig::default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the regulator reference voltage.
    pub fn v_ref(mut self, v_ref: f64) -> Self {
        self.v_ref = v_ref;
        self
    }

    /// Set both target voltages, `lower` is produced with R3 in circuit, `higher` with it shorted.
    pub fn targets(mut self, lower: f64, higher: f64) -> Self {
        self.u_out_lower = lower;
        self.u_out_higher = higher;
        self
    }

    /// Set the relative output tolerance as a fraction, e.g. `0.01` for 1%.
    pub fn tolerance(mut self, tol: f64) -> Self {
        self.output_tolerance = tol;
        self
    }

    /// Set the allowed range for R2 and R2 + R3.
    pub fn r23_range(mut self, min: f64, max: f64) -> Self {
        self.r23_min = min;
        self.r23_max = max;
        self
    }

    /// Draw values from a different series, e.g. `E12`.
    pub fn series(mut self, series: &RSeries) -> Self {
        self.e_series = series.clone();
        self
    }

    /// Set the decade exponents the series is scaled across.
    pub fn decades(mut self, exponents: &[i32]) -> Self {
        self.decade_exponents = exponents.to_vec();
        self
    }

    /// Number of resistor values each of R1, R2 and R3 is drawn from.
    pub fn table_size(&self) -> usize {
        self.e_series.len() * self.decade_exponents.len()
    }

    /// Checks for setups that cannot produce any result.
    ///
    /// Target checks take the tolerance band into account, so passing does not guarantee a
    /// match but failing does rule one out. Searching with an invalid config is still allowed and simply finds nothing.
    /// # Examples
    /// ```
    ///     # use ldo_divider_calc::{ConfigError, DividerConfig};
    ///     assert!(DividerConfig::default().validate().is_ok());
    ///     let bad = DividerConfig::default().targets(3.3, 1.8);
    ///     assert_eq!(
    ///         bad.validate(),
    ///         Err(ConfigError::TargetsNotOrdered { lower: 3.3, higher: 1.8 })
    ///     );
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("v_ref", self.v_ref),
            ("u_out_lower", self.u_out_lower),
            ("u_out_higher", self.u_out_higher),
            ("output_tolerance", self.output_tolerance),
            ("r23_min", self.r23_min),
        ];
        for &(field, value) in positive.iter() {
            // negated so NaN is rejected too
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.r23_min > self.r23_max {
            return Err(ConfigError::EmptyRange {
                min: self.r23_min,
                max: self.r23_max,
            });
        }
        let tol = self.output_tolerance;
        // the output is always strictly above v_ref
        for &target in [self.u_out_lower, self.u_out_higher].iter() {
            if (1.0 + tol) * target <= self.v_ref {
                return Err(ConfigError::TargetBelowReference {
                    target,
                    v_ref: self.v_ref,
                });
            }
        }
        // adding R3 strictly lowers the output, so the lower band must start below the top of
        // the higher band
        if (1.0 - tol) * self.u_out_lower >= (1.0 + tol) * self.u_out_higher {
            return Err(ConfigError::TargetsNotOrdered {
                lower: self.u_out_lower,
                higher: self.u_out_higher,
            });
        }
        if self.e_series.is_empty() {
            return Err(ConfigError::EmptySeries);
        }
        if let Some(&value) = self
            .e_series
            .iter()
            .find(|&&v| !(1.0 <= v && v < 10.0))
        {
            return Err(ConfigError::MantissaOutOfRange { value });
        }
        if self.decade_exponents.is_empty() {
            return Err(ConfigError::NoDecades);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::divider::is_match;
    use crate::search::search;
    use crate::series::E12;

    #[test]
    fn defaults() {
        let cfg = DividerConfig::default();
        assert_eq!(cfg.v_ref, 0.8);
        assert_eq!(cfg.u_out_lower, 1.8);
        assert_eq!(cfg.u_out_higher, 3.3);
        assert_eq!(cfg.output_tolerance, 0.001);
        assert_eq!(cfg.r23_min, 5000.0);
        assert_eq!(cfg.r23_max, 200_000.0);
        assert_eq!(cfg.e_series, *E24);
        assert_eq!(cfg.decade_exponents, vec![-1, 0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(cfg.table_size(), 192);
    }

    #[test]
    fn builder_sets_fields() {
        let cfg = DividerConfig::new()
            .v_ref(1.25)
            .targets(2.5, 5.0)
            .tolerance(0.01)
            .r23_range(1000.0, 50_000.0)
            .series(&E12)
            .decades(&[2, 3, 4]);
        assert_eq!(cfg.v_ref, 1.25);
        assert_eq!((cfg.u_out_lower, cfg.u_out_higher), (2.5, 5.0));
        assert_eq!(cfg.output_tolerance, 0.01);
        assert_eq!((cfg.r23_min, cfg.r23_max), (1000.0, 50_000.0));
        assert_eq!(cfg.table_size(), 36);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive() {
        assert_eq!(
            DividerConfig::default().tolerance(0.0).validate(),
            Err(ConfigError::NonPositive {
                field: "output_tolerance",
                value: 0.0
            })
        );
        assert_eq!(
            DividerConfig::default().v_ref(-0.8).validate(),
            Err(ConfigError::NonPositive {
                field: "v_ref",
                value: -0.8
            })
        );
        assert!(DividerConfig::default()
            .tolerance(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn rejects_empty_range() {
        assert_eq!(
            DividerConfig::default()
                .r23_range(200_000.0, 5000.0)
                .validate(),
            Err(ConfigError::EmptyRange {
                min: 200_000.0,
                max: 5000.0
            })
        );
    }

    #[test]
    fn rejects_unreachable_targets() {
        assert_eq!(
            DividerConfig::default().targets(0.5, 3.3).validate(),
            Err(ConfigError::TargetBelowReference {
                target: 0.5,
                v_ref: 0.8
            })
        );
        // 0.79V plus 1% still sits below the reference
        assert_eq!(
            DividerConfig::default()
                .tolerance(0.01)
                .targets(0.79, 3.3)
                .validate(),
            Err(ConfigError::TargetBelowReference {
                target: 0.79,
                v_ref: 0.8
            })
        );
        assert_eq!(
            DividerConfig::default().targets(1.9, 1.8).validate(),
            Err(ConfigError::TargetsNotOrdered {
                lower: 1.9,
                higher: 1.8
            })
        );
    }

    #[test]
    fn targets_within_tolerance_are_accepted() {
        // 0.795V plus 1% reaches above the reference
        assert!(DividerConfig::default()
            .tolerance(0.01)
            .targets(0.795, 3.3)
            .validate()
            .is_ok());
        // the bands of 1.801V and 1.8V overlap at 0.1%
        assert!(DividerConfig::default()
            .targets(1.801, 1.8)
            .validate()
            .is_ok());
    }

    #[test]
    fn equal_targets_can_match() {
        // a tiny R3 under a large R2 moves the output by less than the tolerance
        let cfg = DividerConfig::default().targets(1.8, 1.8);
        assert!(cfg.validate().is_ok());
        let res = search(&cfg);
        assert!(!res.is_empty());
        let m = res.iter().next().unwrap();
        assert!(is_match(1.8, m.higher, cfg.output_tolerance));
        assert!(is_match(1.8, m.lower, cfg.output_tolerance));
    }

    #[test]
    fn rejects_bad_series() {
        assert_eq!(
            DividerConfig::default()
                .series(&RSeries::new(&[]))
                .validate(),
            Err(ConfigError::EmptySeries)
        );
        assert_eq!(
            DividerConfig::default()
                .series(&RSeries::new(&[1.0, 10.0]))
                .validate(),
            Err(ConfigError::MantissaOutOfRange { value: 10.0 })
        );
        assert_eq!(
            DividerConfig::default().decades(&[]).validate(),
            Err(ConfigError::NoDecades)
        );
    }
}
