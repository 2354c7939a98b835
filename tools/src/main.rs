//! paygen: writes a synthetic point-of-sale payment dataset to CSV.
//!
//! Usage:
//!   paygen
//!   paygen --seed 12345 --records 5000 --out demo.csv
//!   paygen --config paygen.json --start 2024-06-01 --end 2024-06-30
//!
//! With no flags the built-in defaults apply: 100,000 records from
//! 2024-01-01 up to now, written to payments_100k.csv.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use paygen_core::{
    engine::PaymentGenerator,
    report::{with_thousands, RunSummary},
    writer, GeneratorConfig,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = build_config(&args)?;
    log::debug!("effective config: {config:?}");

    let mut generator = PaymentGenerator::build(config)?;
    let records = generator.generate()?;

    let config = generator.config();
    writer::write_csv_file(&config.output_path, &records)
        .with_context(|| format!("writing {}", config.output_path))?;

    let methods: Vec<_> = config.payment_methods.iter().map(|m| m.method).collect();
    let summary = RunSummary::from_records(&records, &methods);
    print_summary(&generator, &summary);
    Ok(())
}

/// Defaults, then the optional JSON file, then individual flags.
fn build_config(args: &[String]) -> Result<GeneratorConfig> {
    let mut config = match str_arg(args, "--config") {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(records) = str_arg(args, "--records") {
        config.record_count = records
            .parse()
            .with_context(|| format!("bad --records '{records}'"))?;
    }
    if let Some(seed) = str_arg(args, "--seed") {
        config.seed = Some(seed.parse().with_context(|| format!("bad --seed '{seed}'"))?);
    }
    if let Some(out) = str_arg(args, "--out") {
        config.output_path = out.to_string();
    }
    if let Some(start) = str_arg(args, "--start") {
        config.start = parse_date(start)?.and_time(NaiveTime::MIN);
    }
    if let Some(end) = str_arg(args, "--end") {
        config.end = Some(end_of_day(parse_date(end)?));
    }
    Ok(config)
}

fn print_summary(generator: &PaymentGenerator, s: &RunSummary) {
    let config = generator.config();
    let window = generator.window();

    println!("✅ CSV written: {}", config.output_path);
    println!();
    println!("📊 Generated data");
    println!("  - records: {}", s.total);
    println!("  - period:  {} ~ {}", window.start().date(), window.end().date());
    println!("  - seed:    {}", generator.seed());

    println!();
    println!("Payment method:");
    for (method, count) in &s.by_method {
        println!("  - {method}: {count} ({:.1}%)", s.percent(*count));
    }

    println!();
    println!("Status:");
    println!("  - approved: {} ({:.1}%)", s.approved, s.percent(s.approved));
    println!("  - canceled: {} ({:.1}%)", s.canceled, s.percent(s.canceled));
    if s.canceled_no_time > 0 {
        println!(
            "    ⚠️  {} canceled after the window end (no cancellation time)",
            s.canceled_no_time
        );
    }

    println!();
    println!("Order type:");
    println!("  - delivery: {} ({:.1}%)", s.delivery, s.percent(s.delivery));
    println!("  - in-store: {} ({:.1}%)", s.in_store, s.percent(s.in_store));

    if let Some(a) = &s.amounts {
        println!();
        println!("Amount:");
        println!("  - mean:  {} KRW", with_thousands(a.mean.into()));
        println!("  - min:   {} KRW", with_thousands(a.min.into()));
        println!("  - max:   {} KRW", with_thousands(a.max.into()));
        println!("  - total: {} KRW", with_thousands(a.sum));
    }
}

fn str_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("bad date '{s}', expected YYYY-MM-DD"))
}

/// Last whole second of the given day.
fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + chrono::Duration::seconds(86_399)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(flags: &[&str]) -> Vec<String> {
        std::iter::once("paygen")
            .chain(flags.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_flags_keep_defaults() {
        assert_eq!(build_config(&args(&[])).unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = build_config(&args(&[
            "--records", "250", "--seed", "7", "--out", "x.csv",
            "--start", "2024-06-01", "--end", "2024-06-30",
        ]))
        .unwrap();
        assert_eq!(cfg.record_count, 250);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.output_path, "x.csv");
        assert_eq!(cfg.start.to_string(), "2024-06-01 00:00:00");
        assert_eq!(cfg.end.map(|e| e.to_string()), Some("2024-06-30 23:59:59".into()));
    }

    #[test]
    fn bad_record_count_is_an_error() {
        for bad in ["abc", "-5", ""] {
            let err = build_config(&args(&["--records", bad])).unwrap_err();
            assert!(err.to_string().contains("--records"), "{err}");
        }
    }

    #[test]
    fn bad_seed_and_date_are_errors() {
        assert!(build_config(&args(&["--seed", "x"])).is_err());
        assert!(build_config(&args(&["--start", "2024/06/01"])).is_err());
    }
}
