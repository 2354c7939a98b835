//! Authorization code issuing.
//!
//! Format: approval date as `YYMMDD` followed by a 5-digit zero-padded
//! random suffix, 11 characters total. Codes are unique within a run;
//! a colliding suffix is simply redrawn.

use crate::{
    error::{GenError, GenResult},
    rng::GenRng,
};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::{HashMap, HashSet};

pub const AUTH_CODE_LEN: usize = 11;

/// Distinct suffixes available per calendar day.
pub const SUFFIX_SPACE: u64 = 100_000;

/// Owns the set of codes already issued in this run.
#[derive(Debug, Default)]
pub struct AuthCodeIssuer {
    issued:     HashSet<String>,
    per_date:   HashMap<NaiveDate, u64>,
    collisions: u64,
}

impl AuthCodeIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh code for `approval_time` and register it.
    ///
    /// Retries on collision. Fails only once every suffix for the date
    /// has been handed out.
    pub fn issue(&mut self, approval_time: NaiveDateTime, rng: &mut GenRng) -> GenResult<String> {
        let date = approval_time.date();
        let used = self.per_date.entry(date).or_insert(0);
        if *used >= SUFFIX_SPACE {
            return Err(GenError::AuthCodeSpaceExhausted { date });
        }

        let prefix = approval_time.format("%y%m%d").to_string();
        loop {
            let suffix = rng.next_u64_below(SUFFIX_SPACE);
            let code = format!("{prefix}{suffix:05}");
            if self.issued.insert(code.clone()) {
                *used += 1;
                return Ok(code);
            }
            self.collisions += 1;
        }
    }

    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }

    /// Suffix redraws caused by collisions so far.
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    pub fn contains(&self, code: &str) -> bool {
        self.issued.contains(code)
    }
}
