use super::rank::Rank;
use super::suit::Suit;
use crate::error::Error;
use crate::Arbitrary;

/// Ord is rank-major, so sorting a pile of cards sorts by strength
/// and only falls back to suit to stay deterministic.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + u8::from(c.rank) * 4
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// str isomorphism ("As", "Td", ...)
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => Ok(Self {
                rank: Rank::try_from(r)?,
                suit: Suit::try_from(u)?,
            }),
            _ => Err(Error::Configuration(format!("invalid card: {}", s))),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::thread_rng().gen_range(0..52u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let card = Card::random();
        assert!(card == Card::from(u8::from(card)));
    }

    #[test]
    fn bijective_str() {
        let card = Card::try_from("Ts").unwrap();
        assert!(card == Card::try_from(card.to_string().as_str()).unwrap());
        assert!(card.rank() == Rank::Ten);
        assert!(card.suit() == Suit::Spade);
    }

    #[test]
    fn rejects_garbage() {
        assert!(Card::try_from("T").is_err());
        assert!(Card::try_from("Tss").is_err());
        assert!(Card::try_from("1s").is_err());
        assert!(Card::try_from("Tx").is_err());
    }

    #[test]
    fn rank_major_order() {
        let weak = Card::try_from("Ks").unwrap();
        let strong = Card::try_from("Ac").unwrap();
        assert!(strong > weak);
    }
}
