/// A power-of-ten grouping that has its own scale word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    Hundred,
    Thousand,
    Million,
    Billion,
    Trillion,
}

impl Scale {
    /// All scales in ascending order, matching the order of [`Dictionary::bigs`](crate::Dictionary::bigs).
    pub const ALL: [Scale; 5] = [
        Scale::Hundred,
        Scale::Thousand,
        Scale::Million,
        Scale::Billion,
        Scale::Trillion,
    ];

    /// The numeric value of one unit of this scale.
    pub const fn value(self) -> i64 {
        match self {
            Scale::Hundred => 100,
            Scale::Thousand => 1_000,
            Scale::Million => 1_000_000,
            Scale::Billion => 1_000_000_000,
            Scale::Trillion => 1_000_000_000_000,
        }
    }

    /// Position of this scale's word in a dictionary's `bigs` table.
    pub const fn index(self) -> usize {
        match self {
            Scale::Hundred => 0,
            Scale::Thousand => 1,
            Scale::Million => 2,
            Scale::Billion => 3,
            Scale::Trillion => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Scale;

    #[test]
    fn indices_follow_ascending_order() {
        for (position, scale) in Scale::ALL.into_iter().enumerate() {
            assert_eq!(scale.index(), position);
        }
    }

    #[test]
    fn each_scale_is_larger_than_the_previous() {
        for pair in Scale::ALL.windows(2) {
            assert!(pair[0].value() < pair[1].value());
        }
    }
}
