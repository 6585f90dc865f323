use super::card::Card;
use crate::error::Error;
use crate::Arbitrary;

/// two private cards. stored high card first so that "AhQs" and "QsAh"
/// are the same value and the Display form is canonical.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hole(Card, Card);

impl Hole {
    pub fn new(a: Card, b: Card) -> Result<Self, Error> {
        if a == b {
            Err(Error::Configuration(format!("duplicate hole card: {}", a)))
        } else if a > b {
            Ok(Self(a, b))
        } else {
            Ok(Self(b, a))
        }
    }
    pub fn high(&self) -> Card {
        self.0
    }
    pub fn low(&self) -> Card {
        self.1
    }
    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }
    pub fn contains(&self, card: Card) -> bool {
        self.0 == card || self.1 == card
    }
}

/// str isomorphism ("AhQs")
impl TryFrom<&str> for Hole {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Error> {
        // checked slicing: labels come from untrusted solver dumps, and
        // a multibyte character would put byte 2 off a char boundary
        match (s.len(), s.get(0..2), s.get(2..4)) {
            (4, Some(a), Some(b)) => Self::new(Card::try_from(a)?, Card::try_from(b)?),
            _ => Err(Error::Configuration(format!("invalid hole: {}", s))),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

impl serde::Serialize for Hole {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
impl<'de> serde::Deserialize<'de> for Hole {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::Deserialize;
        let s = String::deserialize(deserializer)?;
        Self::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

impl Arbitrary for Hole {
    fn random() -> Self {
        loop {
            let a = Card::random();
            let b = Card::random();
            if let Ok(hole) = Self::new(a, b) {
                return hole;
            }
        }
    }
}
