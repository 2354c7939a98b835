//! paygen-core: synthetic point-of-sale payment dataset generation.
//!
//! A run draws N independent payment records from weighted
//! distributions, sorts them by approval time, writes them as CSV and
//! summarizes them.

pub mod amount;
pub mod auth_code;
pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod rng;
pub mod sampler;
pub mod timestamp;
pub mod types;
pub mod writer;

pub use config::GeneratorConfig;
pub use engine::PaymentGenerator;
pub use error::{GenError, GenResult};
pub use types::{OrderType, PaymentMethod, PaymentRecord, PaymentStatus};
