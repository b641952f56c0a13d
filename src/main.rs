extern crate env_logger;
extern crate ldo_divider_calc;
#[macro_use]
extern crate log;

use ldo_divider_calc::*;

fn main() {
    let _ = env_logger::builder().is_test(false).try_init();

    let cfg = DividerConfig::default();
    if let Err(e) = cfg.validate() {
        warn!("{}, expect no matches", e);
    }

    search(&cfg).print_all();
}
