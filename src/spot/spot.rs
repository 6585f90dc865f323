use super::action::Action;
use super::position::Position;
use crate::cards::Board;
use crate::cards::Street;
use crate::error::Error;
use crate::Chips;

/// a fully described decision point: the table state a caller wants
/// solved. validated once at construction so everything downstream can
/// assume structural sanity.
#[derive(Debug, Clone, PartialEq)]
pub struct Spot {
    board: Board,
    pot: Chips,
    stack: Chips,
    position: Position,
    history: Vec<Action>,
}

impl Spot {
    pub fn new(
        board: Board,
        pot: Chips,
        stack: Chips,
        position: Position,
        history: Vec<Action>,
    ) -> Result<Self, Error> {
        if pot <= 0.0 || !pot.is_finite() {
            Err(Error::Configuration(format!("invalid pot: {}", pot)))
        } else if stack <= 0.0 || !stack.is_finite() {
            Err(Error::Configuration(format!("invalid stack: {}", stack)))
        } else {
            Ok(Self {
                board,
                pot,
                stack,
                position,
                history,
            })
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn position(&self) -> Position {
        self.position
    }
    pub fn history(&self) -> &[Action] {
        &self.history
    }
    pub fn street(&self) -> Street {
        self.board.street()
    }
}

impl std::fmt::Display for Spot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] pot {} stack {} {}",
            self.street(),
            self.board,
            self.pot,
            self.stack,
            self.position,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flop() -> Board {
        Board::try_from("Qs,Jh,2h").unwrap()
    }

    #[test]
    fn valid_spot() {
        let spot = Spot::new(flop(), 12.0, 100.0, Position::Btn, vec![]).unwrap();
        assert!(spot.street() == Street::Flop);
        assert!(spot.pot() == 12.0);
    }

    #[test]
    fn rejects_nonpositive_pot() {
        assert!(Spot::new(flop(), 0.0, 100.0, Position::Btn, vec![]).is_err());
        assert!(Spot::new(flop(), -1.0, 100.0, Position::Btn, vec![]).is_err());
    }

    #[test]
    fn rejects_nonpositive_stack() {
        assert!(Spot::new(flop(), 10.0, 0.0, Position::Btn, vec![]).is_err());
    }
}
