//! The generator run: draws every record, then sorts.
//!
//! DRAW ORDER PER RECORD (fixed, so a seed always yields the same data):
//!   1. approval time
//!   2. amount
//!   3. payment method
//!   4. delivery flag
//!   5. cancellation flag, then cancellation delay if canceled
//!   6. authorization code
//!
//! RULES:
//!   - The generator owns the RNG and the issued-code set. No globals.
//!   - Records are independent; nothing drawn for one record feeds another
//!     except code uniqueness.
//!   - A canceled record whose cancellation lands past the window end keeps
//!     status CANCELED with no cancellation timestamp.

use crate::{
    amount::AmountGenerator,
    auth_code::AuthCodeIssuer,
    config::GeneratorConfig,
    error::GenResult,
    rng::GenRng,
    sampler::WeightedTable,
    timestamp::{self, DateWindow},
    types::{OrderType, PaymentMethod, PaymentRecord, PaymentStatus},
};

pub struct PaymentGenerator {
    config:  GeneratorConfig,
    window:  DateWindow,
    rng:     GenRng,
    issuer:  AuthCodeIssuer,
    methods: WeightedTable<PaymentMethod>,
    amounts: AmountGenerator,
    hours:   WeightedTable<u32>,
}

impl PaymentGenerator {
    /// Wire a generator from an already resolved window and RNG.
    /// Tests use this to inject fixed windows and seeds.
    pub fn new(config: GeneratorConfig, window: DateWindow, rng: GenRng) -> GenResult<Self> {
        config.validate()?;
        let methods = WeightedTable::new(
            "payment_methods",
            config
                .payment_methods
                .iter()
                .map(|m| (m.method, m.weight))
                .collect(),
        )?;
        let amounts = AmountGenerator::new(&config.amount_tiers)?;
        let hours = timestamp::hour_table(&config.hour_weights)?;
        Ok(Self {
            config,
            window,
            rng,
            issuer: AuthCodeIssuer::new(),
            methods,
            amounts,
            hours,
        })
    }

    /// Build from config alone: resolves the window end and seeds the RNG
    /// from `config.seed`, or from OS entropy when unset.
    pub fn build(config: GeneratorConfig) -> GenResult<Self> {
        config.validate()?;
        let window = config.resolve_window()?;
        let rng = match config.seed {
            Some(seed) => GenRng::seeded(seed),
            None => GenRng::from_entropy(),
        };
        Self::new(config, window, rng)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn window(&self) -> &DateWindow {
        &self.window
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn amounts(&self) -> &AmountGenerator {
        &self.amounts
    }

    /// Draw one record. Records come out in draw order, not sorted.
    pub fn next_record(&mut self) -> GenResult<PaymentRecord> {
        let rng = &mut self.rng;

        let approval_time = timestamp::approval_time(rng, &self.window, &self.hours);
        let amount = self.amounts.generate(rng);
        let payment_method = *self.methods.sample(rng);
        let order_type = if rng.chance(self.config.delivery_probability) {
            OrderType::Delivery
        } else {
            OrderType::InStore
        };

        let (status, canceled_at) = if rng.chance(self.config.cancel_probability) {
            let end = self.window.end();
            let kept = timestamp::cancellation_time(rng, approval_time, &self.config.cancel_delay)
                .filter(|&c| c <= end);
            (PaymentStatus::Canceled, kept)
        } else {
            (PaymentStatus::Approved, None)
        };

        let authorization_code = self.issuer.issue(approval_time, rng)?;

        Ok(PaymentRecord {
            store_name: self.config.store_name.clone(),
            authorization_code,
            amount,
            payment_method,
            status,
            order_type,
            approval_time,
            canceled_at,
        })
    }

    /// Generate the configured number of records, sorted ascending by
    /// approval time. Ties keep draw order.
    pub fn generate(&mut self) -> GenResult<Vec<PaymentRecord>> {
        let n = self.config.record_count;
        log::info!(
            "generating {n} records for '{}' ({} ~ {}), seed={}",
            self.config.store_name,
            self.window.start(),
            self.window.end(),
            self.rng.seed()
        );

        let mut records = Vec::with_capacity(n);
        for _ in 0..n {
            records.push(self.next_record()?);
        }
        records.sort_by_key(|r| r.approval_time);

        log::debug!(
            "issued {} authorization codes, {} suffix collisions redrawn",
            self.issuer.issued_count(),
            self.issuer.collisions()
        );
        let past_window = records.iter().filter(|r| r.is_canceled_after_window()).count();
        if past_window > 0 {
            log::warn!(
                "{past_window} canceled records have no cancellation time: \
                 their cancellation falls after {}",
                self.window.end()
            );
        }
        Ok(records)
    }
}
