use crate::{
    error::{GenError, GenResult},
    timestamp::DateWindow,
    types::{Amount, PaymentMethod},
};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound};
use serde::{Deserialize, Serialize};

// ── Built-in defaults ───────────────────────────────────────────────

pub const DEFAULT_STORE_NAME: &str = "카카온 테스트 매장";
pub const DEFAULT_RECORD_COUNT: usize = 100_000;
pub const DEFAULT_OUTPUT_PATH: &str = "payments_100k.csv";

pub const DELIVERY_PROBABILITY: f64 = 0.3;
pub const CANCEL_PROBABILITY: f64 = 0.05;

pub const CANCEL_DELAY_MIN_HOURS: u32 = 1;
pub const CANCEL_DELAY_MAX_HOURS: u32 = 72;
pub const CANCEL_DELAY_MAX_MINUTES: u32 = 59;

/// Amounts are modelled in whole thousands of won.
pub const AMOUNT_UNIT: Amount = 1000;

pub const PAYMENT_METHOD_WEIGHTS: [(PaymentMethod, f64); 4] = [
    (PaymentMethod::Card,     45.0),
    (PaymentMethod::KakaoPay, 30.0),
    (PaymentMethod::Cash,     20.0),
    (PaymentMethod::Transfer,  5.0),
];

/// (min, max, weight)
pub const AMOUNT_TIERS: [(Amount, Amount, f64); 5] = [
    (5_000,   15_000,  40.0),
    (15_000,  30_000,  35.0),
    (30_000,  50_000,  15.0),
    (50_000,  100_000,  8.0),
    (100_000, 200_000,  2.0),
];

/// Relative traffic per hour of day. Lunch and dinner peaks.
pub const HOUR_WEIGHTS: [f64; 24] = [
    0.5, 0.3, 0.2, 0.2, 0.3, 0.5, //  0-5
    1.0, 2.0, 3.0, 4.0, 5.0, 8.0, //  6-11
    10.0, 9.0, 7.0, 5.0, 4.0, 6.0, // 12-17
    9.0, 10.0, 8.0, 6.0, 4.0, 2.0, // 18-23
];

// ── Config types ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodWeight {
    pub method: PaymentMethod,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmountTier {
    pub min: Amount,
    pub max: Amount,
    pub weight: f64,
}

/// Delay between approval and cancellation:
/// `[min_hours, max_hours]` hours plus `[0, max_minutes]` minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CancelDelay {
    pub min_hours: u32,
    pub max_hours: u32,
    pub max_minutes: u32,
}

impl Default for CancelDelay {
    fn default() -> Self {
        Self {
            min_hours: CANCEL_DELAY_MIN_HOURS,
            max_hours: CANCEL_DELAY_MAX_HOURS,
            max_minutes: CANCEL_DELAY_MAX_MINUTES,
        }
    }
}

/// Every knob of a generator run. Fields missing from a config file fall
/// back to the built-in defaults above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub store_name: String,
    pub record_count: usize,
    pub start: NaiveDateTime,
    /// `None` means "now" at the moment the window is resolved.
    pub end: Option<NaiveDateTime>,
    pub payment_methods: Vec<MethodWeight>,
    pub amount_tiers: Vec<AmountTier>,
    pub hour_weights: Vec<f64>,
    pub delivery_probability: f64,
    pub cancel_probability: f64,
    pub cancel_delay: CancelDelay,
    pub output_path: String,
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.into(),
            record_count: DEFAULT_RECORD_COUNT,
            start: default_start(),
            end: None,
            payment_methods: PAYMENT_METHOD_WEIGHTS
                .iter()
                .map(|&(method, weight)| MethodWeight { method, weight })
                .collect(),
            amount_tiers: AMOUNT_TIERS
                .iter()
                .map(|&(min, max, weight)| AmountTier { min, max, weight })
                .collect(),
            hour_weights: HOUR_WEIGHTS.to_vec(),
            delivery_probability: DELIVERY_PROBABILITY,
            cancel_probability: CANCEL_PROBABILITY,
            cancel_delay: CancelDelay::default(),
            output_path: DEFAULT_OUTPUT_PATH.into(),
            seed: None,
        }
    }
}

fn default_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap_or_default()
        .and_time(NaiveTime::MIN)
}

impl GeneratorConfig {
    /// Load from a JSON file. Missing fields keep their defaults.
    /// In tests, build configs in code from `GeneratorConfig::default()`.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: GeneratorConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        Ok(config)
    }

    /// Fix the window end. An open end resolves to the current local time,
    /// truncated to whole seconds.
    pub fn resolve_window(&self) -> GenResult<DateWindow> {
        let end = self
            .end
            .unwrap_or_else(|| Local::now().naive_local().trunc_subsecs(0));
        DateWindow::new(self.start, end)
    }

    /// Reject configurations the generator cannot run.
    pub fn validate(&self) -> GenResult<()> {
        if self.record_count == 0 {
            return invalid("record_count must be at least 1");
        }
        if self.payment_methods.is_empty() {
            return invalid("payment_methods is empty");
        }
        if self.amount_tiers.is_empty() {
            return invalid("amount_tiers is empty");
        }
        if self.hour_weights.len() != 24 {
            return invalid(format!(
                "hour_weights needs 24 entries, got {}",
                self.hour_weights.len()
            ));
        }
        for (name, p) in [
            ("delivery_probability", self.delivery_probability),
            ("cancel_probability", self.cancel_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return invalid(format!("{name} must be within [0, 1], got {p}"));
            }
        }
        for tier in &self.amount_tiers {
            if tier.min == 0 || tier.min % AMOUNT_UNIT != 0 || tier.max % AMOUNT_UNIT != 0 {
                return invalid(format!(
                    "amount tier {}..={} must use positive multiples of {AMOUNT_UNIT}",
                    tier.min, tier.max
                ));
            }
            if tier.min > tier.max {
                return invalid(format!("amount tier {}..={} is inverted", tier.min, tier.max));
            }
            if tier.max.checked_mul(self.record_count as Amount).is_none() {
                return invalid(format!(
                    "amount tier max {} times {} records overflows the run total",
                    tier.max, self.record_count
                ));
            }
        }
        let delay = &self.cancel_delay;
        if delay.min_hours > delay.max_hours {
            return invalid(format!(
                "cancel_delay hours {}..={} is inverted",
                delay.min_hours, delay.max_hours
            ));
        }
        if delay.max_minutes > 59 {
            return invalid(format!(
                "cancel_delay max_minutes must be at most 59, got {}",
                delay.max_minutes
            ));
        }
        if let Some(end) = self.end {
            if end < self.start {
                return invalid(format!("window end {end} precedes start {}", self.start));
            }
        }
        Ok(())
    }
}

fn invalid<T>(reason: impl Into<String>) -> GenResult<T> {
    Err(GenError::InvalidConfig {
        reason: reason.into(),
    })
}
