/// Orientation of a relationship between two products
///
/// Only the two discriminants below are valid. Any other raw value is a
/// data error and is rejected when a batch is canonicalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `primary` relates to `related` (+1)
    Forward = 1,
    /// `related` relates to `primary` (-1)
    Reverse = -1,
}

impl Direction {
    pub fn as_i64(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for Direction {
    /// The rejected raw value
    type Error = i64;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Direction::Forward),
            -1 => Ok(Direction::Reverse),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "+1"),
            Direction::Reverse => write!(f, "-1"),
        }
    }
}
