use super::card::Card;
use super::street::Street;
use crate::error::Error;

/// public cards in deal order. the flop's internal order is not
/// significant to the game, but we preserve it as given and only
/// normalize during canonicalization.
#[derive(Debug, Default, Clone, Hash, PartialEq, Eq)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn new(cards: Vec<Card>) -> Result<Self, Error> {
        match cards.len() {
            0 | 3 | 4 | 5 => {}
            n => return Err(Error::Configuration(format!("invalid board size: {}", n))),
        }
        for (i, a) in cards.iter().enumerate() {
            if cards.iter().skip(i + 1).any(|b| a == b) {
                return Err(Error::Configuration(format!("duplicate board card: {}", a)));
            }
        }
        Ok(Self(cards))
    }
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn contains(&self, card: Card) -> bool {
        self.0.contains(&card)
    }
    /// the street implied by how many cards are out
    pub fn street(&self) -> Street {
        match self.0.len() {
            0 => Street::Pref,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::Rive,
        }
    }
}

/// str isomorphism ("Qs,Jh,2h")
impl TryFrom<&str> for Board {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Error> {
        if s.is_empty() {
            Ok(Self::empty())
        } else {
            Self::new(
                s.split(',')
                    .map(Card::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            )
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(",")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        let board = Board::try_from("Qs,Jh,2h").unwrap();
        assert!(board == Board::try_from(board.to_string().as_str()).unwrap());
        assert!(board.street() == Street::Flop);
    }

    #[test]
    fn empty_is_preflop() {
        let board = Board::try_from("").unwrap();
        assert!(board.street() == Street::Pref);
    }

    #[test]
    fn street_by_count() {
        assert!(Board::try_from("Qs,Jh,2h,9d").unwrap().street() == Street::Turn);
        assert!(Board::try_from("Qs,Jh,2h,9d,3c").unwrap().street() == Street::Rive);
    }

    #[test]
    fn rejects_bad_sizes() {
        assert!(Board::try_from("Qs").is_err());
        assert!(Board::try_from("Qs,Jh").is_err());
    }

    #[test]
    fn rejects_duplicates() {
        assert!(Board::try_from("Qs,Qs,2h").is_err());
    }
}
