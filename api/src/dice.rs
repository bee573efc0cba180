use serde::{Deserialize, Serialize};

use crate::consts::BOARD_SIZE;

/// One roll of the dice pair, derived from a board square.
/// Square index = (die1 - 1) * 6 + (die2 - 1), so die1 = square / 6 + 1 and
/// die2 = square % 6 + 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceOutcome {
    pub square: u8,
    pub die1: u8,
    pub die2: u8,
    pub sum: u8,
}

impl DiceOutcome {
    pub fn from_square(square: u8) -> Option<Self> {
        if square as usize >= BOARD_SIZE {
            return None;
        }
        let die1 = square / 6 + 1;
        let die2 = square % 6 + 1;
        Some(Self {
            square,
            die1,
            die2,
            sum: die1 + die2,
        })
    }

    /// Doubles sit on the board diagonal (squares 0, 7, 14, 21, 28, 35).
    pub fn is_double(&self) -> bool {
        self.die1 == self.die2
    }

    /// A hardway is a double whose sum is 4, 6, 8 or 10.
    pub fn is_hard(&self) -> bool {
        self.is_double() && matches!(self.sum, 4 | 6 | 8 | 10)
    }
}

/// Check if a dice sum is a "craps" (2, 3, or 12).
pub fn is_craps(sum: u8) -> bool {
    matches!(sum, 2 | 3 | 12)
}

/// Check if a dice sum is a "natural" (7 or 11).
pub fn is_natural(sum: u8) -> bool {
    matches!(sum, 7 | 11)
}

/// Check if a dice sum is a point number (4, 5, 6, 8, 9, 10).
pub fn is_point_number(sum: u8) -> bool {
    matches!(sum, 4 | 5 | 6 | 8 | 9 | 10)
}

/// Check if a dice sum wins a field bet (2, 3, 4, 9, 10, 11, 12).
pub fn is_field_number(sum: u8) -> bool {
    matches!(sum, 2 | 3 | 4 | 9 | 10 | 11 | 12)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_square() {
        let o = DiceOutcome::from_square(0).unwrap();
        assert_eq!((o.die1, o.die2, o.sum), (1, 1, 2));
        let o = DiceOutcome::from_square(5).unwrap();
        assert_eq!((o.die1, o.die2, o.sum), (1, 6, 7));
        let o = DiceOutcome::from_square(6).unwrap();
        assert_eq!((o.die1, o.die2, o.sum), (2, 1, 3));
        let o = DiceOutcome::from_square(35).unwrap();
        assert_eq!((o.die1, o.die2, o.sum), (6, 6, 12));
        assert!(DiceOutcome::from_square(36).is_none());
    }

    #[test]
    fn test_is_hard() {
        assert!(DiceOutcome::from_square(7).unwrap().is_hard()); // 2+2
        assert!(DiceOutcome::from_square(14).unwrap().is_hard()); // 3+3
        assert!(DiceOutcome::from_square(21).unwrap().is_hard()); // 4+4
        assert!(DiceOutcome::from_square(28).unwrap().is_hard()); // 5+5
        // Doubles summing to 2 or 12 are not hardways.
        assert!(!DiceOutcome::from_square(0).unwrap().is_hard()); // 1+1
        assert!(!DiceOutcome::from_square(35).unwrap().is_hard()); // 6+6
        // Easy six.
        assert!(!DiceOutcome::from_square(9).unwrap().is_hard()); // 2+4
    }

    #[test]
    fn test_sum_predicates() {
        assert!(is_craps(2) && is_craps(3) && is_craps(12));
        assert!(!is_craps(7) && !is_craps(11));
        assert!(is_natural(7) && is_natural(11));
        assert!(!is_natural(2));
        for sum in [4u8, 5, 6, 8, 9, 10] {
            assert!(is_point_number(sum));
        }
        assert!(!is_point_number(7));
        for sum in [2u8, 3, 4, 9, 10, 11, 12] {
            assert!(is_field_number(sum));
        }
        for sum in [5u8, 6, 7, 8] {
            assert!(!is_field_number(sum));
        }
    }

    #[test]
    fn test_every_square_maps_to_valid_dice() {
        for square in 0..BOARD_SIZE as u8 {
            let o = DiceOutcome::from_square(square).unwrap();
            assert!((1..=6).contains(&o.die1));
            assert!((1..=6).contains(&o.die2));
            assert_eq!(o.sum, o.die1 + o.die2);
            assert!((2..=12).contains(&o.sum));
        }
    }
}
