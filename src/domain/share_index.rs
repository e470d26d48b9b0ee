//! `ShareIndex` newtype

use anyhow::{Result, bail};

/// 0-based share identifier (0..=254)
///
/// 255 is rejected: the `blahaj` GF256 arithmetic reserves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareIndex(u8);

impl ShareIndex {
    /// Maximum valid share index
    pub const MAX: u8 = 254;

    /// Creates a new share index
    ///
    /// # Errors
    /// Returns an error if the index is 255
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fourword::domain::ShareIndex;
    ///
    /// let index = ShareIndex::new(0).unwrap();
    /// assert_eq!(*index, 0);
    ///
    /// assert!(ShareIndex::new(ShareIndex::MAX).is_ok());
    /// assert!(ShareIndex::new(255).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value == 255 {
            bail!("Share index 255 is reserved for GF256 operations");
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareIndex {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
