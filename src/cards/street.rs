use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Street {
    #[default]
    #[serde(rename = "preflop")]
    Pref,
    #[serde(rename = "flop")]
    Flop,
    #[serde(rename = "turn")]
    Turn,
    #[serde(rename = "river")]
    Rive,
}

impl Street {
    pub const fn all() -> [Self; 4] {
        [Street::Pref, Street::Flop, Street::Turn, Street::Rive]
    }
    /// number of public cards dealt by this street
    pub const fn n_observed(&self) -> usize {
        match self {
            Street::Pref => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::Rive => 5,
        }
    }
    /// streets yet to come, this one excluded
    pub fn next(&self) -> Option<Self> {
        match self {
            Street::Pref => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::Rive),
            Street::Rive => None,
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Street::Pref => "preflop",
                Street::Flop => "flop",
                Street::Turn => "turn",
                Street::Rive => "river",
            }
        )
    }
}
