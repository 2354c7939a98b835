//! Shared helpers for integration tests.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use paygen_core::{
    engine::PaymentGenerator, rng::GenRng, timestamp::DateWindow, GeneratorConfig,
};

pub fn at(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

/// Config over a fixed window with everything else at its defaults.
pub fn config(records: usize, start: NaiveDateTime, end: NaiveDateTime) -> GeneratorConfig {
    GeneratorConfig {
        record_count: records,
        start,
        end: Some(end),
        ..GeneratorConfig::default()
    }
}

/// Route the crate's log output through the test harness. Run with
/// `RUST_LOG=debug` to see it.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn generator_with(config: GeneratorConfig, seed: u64) -> PaymentGenerator {
    init_logging();
    let window = config.resolve_window().expect("window");
    PaymentGenerator::new(config, window, GenRng::seeded(seed)).expect("generator")
}

/// First quarter of 2024, seeded.
pub fn q1_generator(records: usize, seed: u64) -> PaymentGenerator {
    generator_with(
        config(records, at(2024, 1, 1, 0, 0, 0), at(2024, 3, 31, 23, 59, 59)),
        seed,
    )
}

pub fn window_of(g: &PaymentGenerator) -> DateWindow {
    *g.window()
}
