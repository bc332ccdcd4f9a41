use std::{fmt, str::FromStr};

/// Which edge column is kept open as the well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WellSide {
    Left,
    Right,
}

/// Strategy profile selecting one of the two evaluation branches.
///
/// The two well variants share one branch parameterized by which edge column
/// is the well; scoring dispatches with an exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Survival,
    Well { side: WellSide },
}

impl Strategy {
    pub const LEFT_WELL: Self = Strategy::Well {
        side: WellSide::Left,
    };
    pub const RIGHT_WELL: Self = Strategy::Well {
        side: WellSide::Right,
    };
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("unknown strategy {name:?}, expected \"survival\", \"left-well\" or \"right-well\"")]
pub struct ParseStrategyError {
    name: String,
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "survival" => Ok(Strategy::Survival),
            "left-well" => Ok(Strategy::LEFT_WELL),
            "right-well" => Ok(Strategy::RIGHT_WELL),
            _ => Err(ParseStrategyError { name: s.to_owned() }),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Survival => "survival",
            Strategy::Well {
                side: WellSide::Left,
            } => "left-well",
            Strategy::Well {
                side: WellSide::Right,
            } => "right-well",
        };
        f.write_str(name)
    }
}
