//! Round configuration options.

/// Total the dealer stands on by default.
pub const DEFAULT_DEALER_STANDS_ON: u8 = 17;

/// Highest total the dealer can be told to stand on.
const MAX_DEALER_STANDS_ON: u8 = 21;

/// Configuration options for a round engine.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::RoundOptions;
///
/// let options = RoundOptions::default().with_dealer_stands_on(16);
/// assert_eq!(options.dealer_stands_on, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundOptions {
    /// The dealer keeps drawing while their total is below this value.
    ///
    /// Soft and hard totals are treated alike. Values above 21 are clamped
    /// to 21.
    pub dealer_stands_on: u8,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: DEFAULT_DEALER_STANDS_ON,
        }
    }
}

impl RoundOptions {
    /// Sets the total the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_dealer_stands_on(30);
    /// assert_eq!(options.dealer_stands_on, 21);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = if total > MAX_DEALER_STANDS_ON {
            MAX_DEALER_STANDS_ON
        } else {
            total
        };
        self
    }
}
