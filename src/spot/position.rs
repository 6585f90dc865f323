use crate::error::Error;

/// absolute seat at a full-ring table
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Position {
    Utg,
    Utg1,
    Utg2,
    Mp,
    Mp1,
    Hj,
    Co,
    #[default]
    Btn,
    Sb,
    Bb,
}

/// seat collapsed to who acts last postflop. strategy tables only care
/// about this, so absolute seats that share it share a cache key.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Relative {
    InPosition,
    OutOfPosition,
}

impl Position {
    pub const fn all() -> [Self; 10] {
        [
            Position::Utg,
            Position::Utg1,
            Position::Utg2,
            Position::Mp,
            Position::Mp1,
            Position::Hj,
            Position::Co,
            Position::Btn,
            Position::Sb,
            Position::Bb,
        ]
    }
    /// blinds and early seats act first on every postflop street
    pub fn relative(&self) -> Relative {
        match self {
            Position::Mp
            | Position::Mp1
            | Position::Hj
            | Position::Co
            | Position::Btn => Relative::InPosition,
            Position::Utg
            | Position::Utg1
            | Position::Utg2
            | Position::Sb
            | Position::Bb => Relative::OutOfPosition,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Position::Utg => "UTG",
                Position::Utg1 => "UTG1",
                Position::Utg2 => "UTG2",
                Position::Mp => "MP",
                Position::Mp1 => "MP1",
                Position::Hj => "HJ",
                Position::Co => "CO",
                Position::Btn => "BTN",
                Position::Sb => "SB",
                Position::Bb => "BB",
            }
        )
    }
}

impl std::str::FromStr for Position {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_uppercase().as_str() {
            "UTG" => Ok(Position::Utg),
            "UTG1" => Ok(Position::Utg1),
            "UTG2" => Ok(Position::Utg2),
            "MP" => Ok(Position::Mp),
            "MP1" => Ok(Position::Mp1),
            "HJ" => Ok(Position::Hj),
            "CO" => Ok(Position::Co),
            "BTN" => Ok(Position::Btn),
            "SB" => Ok(Position::Sb),
            "BB" => Ok(Position::Bb),
            _ => Err(Error::Configuration(format!("invalid position: {}", s))),
        }
    }
}

impl std::fmt::Display for Relative {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Relative::InPosition => "ip",
                Relative::OutOfPosition => "oop",
            }
        )
    }
}
