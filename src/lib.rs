//! A resistor value finder for LDO feedback dividers with two selectable output voltages.
//!
//! The divider is made of R1 between the output and the feedback pin, and R2 in series with R3
//! between the feedback pin and ground. A MOSFET across R3 can short it, so the regulator
//! produces a higher voltage with R3 shorted (lower leg R2) and a lower voltage with it open
//! (lower leg R2 + R3). The MOSFET on-resistance is assumed negligible compared to R3.
//!
//! Every combination of standard series values is checked against both targets, keeping only
//! those where R2 and R2 + R3 stay within a configured range.
//!
//! # Example
//! A regulator with a 0.8v reference that should switch between 3.3v and 1.8v, within 0.1%,
//! with R2 + R3 between 5K and 200K:
//! ```rust
//! extern crate ldo_divider_calc;
//!
//! use ldo_divider_calc::*;
//!
//! fn main() {
//!     let cfg = DividerConfig::new()
//!         .v_ref(0.8)
//!         .targets(1.8, 3.3)
//!         .tolerance(0.001)
//!         .r23_range(5e3, 200e3)
//!         .series(&E24);
//!
//!     let res = search(&cfg);
//!     assert_eq!(res.len(), 1);
//!     res.print_all();
//! }
//! ```
//! Running this example produces:
//! ```text
//! R1: 75K | R2: 24K | R3: 36K | higher voltage: 3.3000 V | lower voltage: 1.8000 V
//! ```

extern crate itertools;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate thiserror;

pub mod config;
pub mod divider;
pub mod error;
pub mod report;
pub mod search;
pub mod series;

pub use config::DividerConfig;
pub use divider::{in_range, is_match, v_out};
pub use error::ConfigError;
pub use report::{print_r, Match, Matches, RSet};
pub use search::{higher_pairs, r2_candidates, search, triples};
pub use series::{decade, value_table, RSeries, DEFAULT_DECADES, E12, E24, E3, E6};
