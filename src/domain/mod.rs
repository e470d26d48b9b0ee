//! Validated domain types for secret sharing
//!
//! - [`Threshold`] - minimum shares required for recovery (2..=255)
//! - [`ShareIndex`] - 0-based share identifier (0..=254)
//! - [`ShareCount`] - total shares to create (1..=254)
//! - [`SplitConfig`] - threshold and share count validated together

mod config;
mod share_count;
mod share_index;
mod threshold;

pub use config::SplitConfig;
pub use share_count::ShareCount;
pub use share_index::ShareIndex;
pub use threshold::Threshold;
