//! Tiered amount generation.

use crate::{
    config::{AmountTier, AMOUNT_UNIT},
    error::GenResult,
    rng::GenRng,
    sampler::WeightedTable,
    types::Amount,
};

/// Draws amounts: pick a tier by weight, then a uniform whole number of
/// thousands inside the tier's bounds.
#[derive(Debug, Clone)]
pub struct AmountGenerator {
    tiers: WeightedTable<AmountTier>,
}

impl AmountGenerator {
    pub fn new(tiers: &[AmountTier]) -> GenResult<Self> {
        let tiers = WeightedTable::new(
            "amount_tiers",
            tiers.iter().map(|t| (*t, t.weight)).collect(),
        )?;
        Ok(Self { tiers })
    }

    pub fn generate(&self, rng: &mut GenRng) -> Amount {
        let tier = self.tiers.sample(rng);
        rng.range_inclusive(tier.min / AMOUNT_UNIT, tier.max / AMOUNT_UNIT) * AMOUNT_UNIT
    }

    /// Index of the tier an amount belongs to. Tier bounds share their
    /// edges, so an edge amount resolves to the lower tier.
    pub fn tier_of(&self, amount: Amount) -> Option<usize> {
        self.tiers
            .iter()
            .position(|(t, _)| (t.min..=t.max).contains(&amount))
    }

    pub fn tiers(&self) -> &WeightedTable<AmountTier> {
        &self.tiers
    }
}
