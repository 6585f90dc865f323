use crate::error::Error;
use crate::Chips;

/// a betting decision. sized actions carry their amount in big blinds.
#[derive(Debug, Clone, Copy)]
pub enum Action {
    Fold,
    Check,
    Call,
    Bet(Chips),
    Raise(Chips),
    Shove,
}

impl Action {
    fn discriminant(&self) -> u8 {
        match self {
            Action::Fold => 0,
            Action::Check => 1,
            Action::Call => 2,
            Action::Bet(_) => 3,
            Action::Raise(_) => 4,
            Action::Shove => 5,
        }
    }
    fn amount(&self) -> Chips {
        match self {
            Action::Bet(x) | Action::Raise(x) => *x,
            _ => 0.0,
        }
    }
}

/// amounts come out of the solver dump, never NaN, so total ordering
/// over (kind, amount) is safe and lets Action key a BTreeMap.
impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}
impl Eq for Action {}
impl PartialOrd for Action {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Action {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.discriminant()
            .cmp(&other.discriminant())
            .then(self.amount().total_cmp(&other.amount()))
    }
}

/// str isomorphism, matching the solver's dump labels
/// ("fold", "check", "call", "bet 12.5", "raise 30", "allin")
impl std::str::FromStr for Action {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        let lower = s.to_lowercase();
        let mut words = lower.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some("fold"), None, None) => Ok(Action::Fold),
            (Some("check"), None, None) => Ok(Action::Check),
            (Some("call"), None, None) => Ok(Action::Call),
            (Some("allin"), None, None) => Ok(Action::Shove),
            (Some("bet"), Some(x), None) => x
                .parse::<Chips>()
                .map(Action::Bet)
                .map_err(|_| Error::Configuration(format!("invalid bet amount: {}", s))),
            (Some("raise"), Some(x), None) => x
                .parse::<Chips>()
                .map(Action::Raise)
                .map_err(|_| Error::Configuration(format!("invalid raise amount: {}", s))),
            _ => Err(Error::Configuration(format!("invalid action: {}", s))),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "fold"),
            Action::Check => write!(f, "check"),
            Action::Call => write!(f, "call"),
            Action::Bet(x) => write!(f, "bet {}", x),
            Action::Raise(x) => write!(f, "raise {}", x),
            Action::Shove => write!(f, "allin"),
        }
    }
}

impl serde::Serialize for Action {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
impl<'de> serde::Deserialize<'de> for Action {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::Deserialize;
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
