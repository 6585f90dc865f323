use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Hole;
use crate::cards::Suit;
use crate::Arbitrary;

/// a bijection over suits. used to relabel a real deal into canonical
/// suits and back, so strategically identical deals share one key.
///
/// indexed by the real suit, yielding its canonical image.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Mapping([Suit; 4]);

impl Mapping {
    pub const fn identity() -> Self {
        Self(Suit::all())
    }

    /// rank suits by their rank-set signature, strongest first, and
    /// hand out canonical suits in that order. suits tied on signature
    /// keep real-suit order, so unseen suits land deterministically and
    /// any tie is a true automorphism.
    pub fn derive(board: &Board, hole: Option<&Hole>) -> Self {
        let mut suits = Suit::all();
        suits.sort_by_key(|s| std::cmp::Reverse(Self::signature(*s, board, hole)));
        let mut map = [Suit::Club; 4];
        for (canonical, real) in suits.iter().enumerate() {
            map[*real as usize] = Suit::from(canonical as u8);
        }
        Self(map)
    }

    /// one rank bitset per segment, in the order the canonical form
    /// serializes them: flop, turn, river, hole. keeping streets apart
    /// matters: two suits holding the same ranks over the whole board
    /// but on different streets are not interchangeable.
    fn signature(suit: Suit, board: &Board, hole: Option<&Hole>) -> (u16, u16, u16, u16) {
        let mask = |cards: &[Card]| {
            cards
                .iter()
                .filter(|c| c.suit() == suit)
                .map(|c| u16::from(c.rank()))
                .fold(0u16, |acc, bit| acc | bit)
        };
        let cards = board.cards();
        let flop = mask(&cards[..cards.len().min(3)]);
        let turn = mask(cards.get(3..4).unwrap_or(&[]));
        let river = mask(cards.get(4..5).unwrap_or(&[]));
        let pocket = hole.map(|h| mask(&h.cards())).unwrap_or(0);
        (flop, turn, river, pocket)
    }

    pub fn invert(&self) -> Self {
        let mut map = [Suit::Club; 4];
        for real in Suit::all() {
            map[self.suit(real) as usize] = real;
        }
        Self(map)
    }

    pub fn suit(&self, suit: Suit) -> Suit {
        self.0[suit as usize]
    }

    pub fn card(&self, card: Card) -> Card {
        Card::new(card.rank(), self.suit(card.suit()))
    }

    pub fn hole(&self, hole: Hole) -> Hole {
        Hole::new(self.card(hole.high()), self.card(hole.low()))
            .expect("bijection preserves distinctness")
    }

    pub fn board(&self, board: &Board) -> Vec<Card> {
        board.cards().iter().map(|c| self.card(*c)).collect()
    }

    /// canonical board: suits relabeled, flop sorted strongest first.
    /// turn and river cards keep their deal order.
    pub fn normalize(&self, board: &Board) -> Vec<Card> {
        let cards = self.board(board);
        let mut normal = cards.iter().take(3).copied().collect::<Vec<Card>>();
        normal.sort_by(|a, b| b.cmp(a));
        normal.extend(cards.iter().skip(3));
        normal
    }

    /// all 24 bijections over 4 suits
    pub fn exhaust() -> [Self; 24] {
        let mut all = [Self::identity(); 24];
        let mut i = 0;
        for a in 0..4u8 {
            for b in 0..4u8 {
                for c in 0..4u8 {
                    if a != b && a != c && b != c {
                        let d = 6 - a - b - c;
                        all[i] = Self([
                            Suit::from(a),
                            Suit::from(b),
                            Suit::from(c),
                            Suit::from(d),
                        ]);
                        i += 1;
                    }
                }
            }
        }
        all
    }
}

impl Arbitrary for Mapping {
    fn random() -> Self {
        use rand::seq::SliceRandom;
        *Self::exhaust()
            .choose(&mut rand::thread_rng())
            .expect("24 permutations")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_fixes_everything() {
        let card = Card::random();
        assert!(Mapping::identity().card(card) == card);
    }

    #[test]
    fn inverse_composes_to_identity() {
        let mapping = Mapping::random();
        let inverse = mapping.invert();
        let card = Card::random();
        assert!(inverse.card(mapping.card(card)) == card);
    }

    #[test]
    fn exhaust_is_24_unique() {
        let all = Mapping::exhaust();
        assert!(all.len() == 24);
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                assert!(a != b);
            }
        }
    }

    #[test]
    fn derive_ranks_suits_by_signature() {
        let board = Board::try_from("Qs,Jh,2h").unwrap();
        let mapping = Mapping::derive(&board, None);
        assert!(mapping.suit(Suit::Spade) == Suit::Club);
        assert!(mapping.suit(Suit::Heart) == Suit::Diamond);
        assert!(mapping.suit(Suit::Club) == Suit::Heart);
        assert!(mapping.suit(Suit::Diamond) == Suit::Spade);
    }

    #[test]
    fn derive_canonicalizes_board() {
        let board = Board::try_from("Qs,Jh,2h").unwrap();
        let mapping = Mapping::derive(&board, None);
        let canonical = mapping
            .board(&board)
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(",");
        assert!(canonical == "Qc,Jd,2d");
    }

    #[test]
    fn hole_maps_through() {
        let hole = Hole::try_from("AhQs").unwrap();
        let mapping = Mapping::derive(&Board::empty(), Some(&hole));
        assert!(mapping.hole(hole) == Hole::try_from("AcQd").unwrap());
    }
}
