//! Inclusive identifier ranges used to pick study material.

use std::fmt;

/// Size of the preset buckets offered next to free range input.
pub const PRESET_BUCKET_SIZE: u32 = 100;

/// An inclusive range of character identifiers, `start..=end`.
///
/// # Examples
///
/// ```
/// use cheonja_core::IdRange;
///
/// let range = IdRange::parse("9", "24").unwrap();
/// assert_eq!(range.len(), 16);
/// assert!(IdRange::parse("24", "9").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdRange {
    start: u32,
    end: u32,
}

/// Errors produced when building an [`IdRange`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RangeError {
    /// A bound was not a number.
    #[display("`{input}` is not a valid number")]
    NotANumber {
        /// The rejected input.
        input: String,
    },
    /// A bound was below 1.
    #[display("range bounds must be at least 1")]
    BelowOne,
    /// `start` was greater than `end`.
    #[display("start {start} is greater than end {end}")]
    Reversed {
        /// Requested start.
        start: u32,
        /// Requested end.
        end: u32,
    },
}

impl IdRange {
    /// Creates a range, checking `1 <= start <= end`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::BelowOne`] or [`RangeError::Reversed`].
    pub fn new(start: u32, end: u32) -> Result<Self, RangeError> {
        if start < 1 || end < 1 {
            return Err(RangeError::BelowOne);
        }
        if start > end {
            return Err(RangeError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parses a range from two user-entered strings.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::NotANumber`] if either bound does not parse, and
    /// the errors of [`IdRange::new`] otherwise.
    pub fn parse(start: &str, end: &str) -> Result<Self, RangeError> {
        let parse = |s: &str| {
            s.trim().parse::<u32>().map_err(|_| RangeError::NotANumber {
                input: s.to_owned(),
            })
        };
        Self::new(parse(start)?, parse(end)?)
    }

    /// First identifier in the range.
    #[must_use]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last identifier in the range.
    #[must_use]
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of identifiers covered.
    #[must_use]
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Always `false`: a range covers at least one identifier.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if `id` lies inside the range.
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        (self.start..=self.end).contains(&id)
    }

    /// Splits this range into consecutive buckets of [`PRESET_BUCKET_SIZE`].
    ///
    /// Bucket boundaries are aligned to multiples of the bucket size, so the
    /// full dataset yields `1-100`, `101-200`, ..., `901-1000`. The first and
    /// last bucket are clipped to this range.
    #[must_use]
    pub fn preset_buckets(&self) -> Vec<IdRange> {
        let mut buckets = vec![];
        let mut start = self.start;
        while start <= self.end {
            let bucket_end = (start - 1) / PRESET_BUCKET_SIZE * PRESET_BUCKET_SIZE
                + PRESET_BUCKET_SIZE;
            let end = bucket_end.min(self.end);
            buckets.push(IdRange { start, end });
            start = end + 1;
        }
        buckets
    }
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_bounds() {
        assert!(IdRange::new(1, 1).is_ok());
        assert_eq!(IdRange::new(0, 5), Err(RangeError::BelowOne));
        assert_eq!(
            IdRange::new(6, 5),
            Err(RangeError::Reversed { start: 6, end: 5 })
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(IdRange::parse(" 1 ", "40").unwrap(), IdRange::new(1, 40).unwrap());
        assert!(matches!(
            IdRange::parse("abc", "40"),
            Err(RangeError::NotANumber { .. })
        ));
        assert!(matches!(
            IdRange::parse("", "40"),
            Err(RangeError::NotANumber { .. })
        ));
        assert!(matches!(
            IdRange::parse("-3", "40"),
            Err(RangeError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_preset_buckets_full_dataset() {
        let buckets = IdRange::new(1, 1000).unwrap().preset_buckets();
        assert_eq!(buckets.len(), 10);
        assert_eq!(buckets[0], IdRange::new(1, 100).unwrap());
        assert_eq!(buckets[9], IdRange::new(901, 1000).unwrap());
    }

    #[test]
    fn test_preset_buckets_clipped() {
        let buckets = IdRange::new(50, 128).unwrap().preset_buckets();
        assert_eq!(
            buckets,
            vec![IdRange::new(50, 100).unwrap(), IdRange::new(101, 128).unwrap()]
        );
    }
}
