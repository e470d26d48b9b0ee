//! `Threshold` newtype

use anyhow::Result;

/// Minimum number of shares required to recover the secret (2..=255)
///
/// A threshold of 1 is rejected at construction: it would let any single
/// share recover the whole secret, which defeats splitting it at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    /// Creates a new threshold
    ///
    /// # Errors
    /// Returns an error if the value is less than 2
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fourword::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// assert!(Threshold::new(1).is_err());
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value < 2 {
            anyhow::bail!("Threshold must be at least 2 (got {value})");
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Threshold {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
