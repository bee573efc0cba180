use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::FairdiceError;

/// Every wager the table accepts. The discriminants are the wire encoding
/// used by the PlaceBet instruction; adding a kind here forces the settlement
/// engine's match arms to be extended at compile time.
#[repr(u8)]
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize,
)]
pub enum BetKind {
    // Line bets
    PassLine = 0,
    DontPass = 1,
    PassOdds = 2,
    DontPassOdds = 3,

    // Come bets (number chosen at placement)
    Come = 4,
    DontCome = 5,
    ComeOdds = 6,
    DontComeOdds = 7,

    // Number bets
    Place = 8,
    Hardway = 9,

    // Single-roll bets
    Field = 10,
    AnySeven = 11,
    AnyCraps = 12,
    YoEleven = 13,
    Aces = 14,
    Twelve = 15,
}

impl BetKind {
    pub fn from_u8(raw: u8) -> Result<Self, FairdiceError> {
        Self::try_from(raw).map_err(|_| FairdiceError::UnknownBetKind)
    }

    /// Single-roll bets resolve unconditionally on every roll.
    pub fn is_single_roll(&self) -> bool {
        matches!(
            self,
            Self::Field | Self::AnySeven | Self::AnyCraps | Self::YoEleven | Self::Aces | Self::Twelve
        )
    }

    /// Line bets read and drive the shared table point.
    pub fn is_line(&self) -> bool {
        matches!(
            self,
            Self::PassLine | Self::DontPass | Self::PassOdds | Self::DontPassOdds
        )
    }

    /// The numbers a bet of this kind may ride on. Kinds that carry no number
    /// require `None`.
    pub fn valid_point(&self, point: Option<u8>) -> bool {
        match self {
            Self::Come | Self::DontCome | Self::ComeOdds | Self::DontComeOdds | Self::Place => {
                matches!(point, Some(4 | 5 | 6 | 8 | 9 | 10))
            }
            Self::Hardway => matches!(point, Some(4 | 6 | 8 | 10)),
            _ => point.is_none(),
        }
    }
}

/// A single wager: what it is on, the number it rides (if any), and the
/// lamports staked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bet {
    pub kind: BetKind,
    pub point: Option<u8>,
    pub stake: u64,
}

impl Bet {
    /// Build a validated bet from wire values.
    pub fn try_new(kind: u8, point: u8, stake: u64) -> Result<Self, FairdiceError> {
        let kind = BetKind::from_u8(kind)?;
        let point = if point == 0 { None } else { Some(point) };
        if !kind.valid_point(point) {
            return Err(FairdiceError::InvalidPoint);
        }
        if stake == 0 {
            return Err(FairdiceError::InvalidBetAmount);
        }
        Ok(Self { kind, point, stake })
    }
}

/// The outcome of one bet for one roll. Exactly one of these is produced per
/// active bet per roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The bet resolved in the bettor's favor. Credit includes the returned
    /// stake.
    Won { credit: u64 },
    /// The stake is forfeited.
    Lost,
    /// The stake is returned with no winnings (don't pass on a come-out 12).
    Push,
    /// The bet carries to the next roll.
    StillActive,
}

/// Which of 2/12 pays the field bet's double ratio. The other pays 1:1.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum FieldRule {
    Both = 0,
    TwoOnly = 1,
    TwelveOnly = 2,
}

impl FieldRule {
    pub fn from_u8(raw: u8) -> Option<Self> {
        Self::try_from(raw).ok()
    }

    pub fn pays_double(&self, sum: u8) -> bool {
        match self {
            Self::Both => sum == 2 || sum == 12,
            Self::TwoOnly => sum == 2,
            Self::TwelveOnly => sum == 12,
        }
    }
}

/// Place bet payout ratio for a point number.
pub fn place_payout(point: u8) -> (u64, u64) {
    match point {
        4 | 10 => (PLACE_4_10_PAYOUT_NUM, PLACE_4_10_PAYOUT_DEN),
        5 | 9 => (PLACE_5_9_PAYOUT_NUM, PLACE_5_9_PAYOUT_DEN),
        6 | 8 => (PLACE_6_8_PAYOUT_NUM, PLACE_6_8_PAYOUT_DEN),
        _ => (0, 1),
    }
}

/// Hardway payout ratio for a hardway number.
pub fn hardway_payout(point: u8) -> (u64, u64) {
    match point {
        4 | 10 => (HARD_4_10_PAYOUT_NUM, HARD_4_10_PAYOUT_DEN),
        6 | 8 => (HARD_6_8_PAYOUT_NUM, HARD_6_8_PAYOUT_DEN),
        _ => (0, 1),
    }
}

/// True odds payout ratio for pass/come odds on a point number.
pub fn true_odds_payout(point: u8) -> (u64, u64) {
    match point {
        4 | 10 => (TRUE_ODDS_4_10_NUM, TRUE_ODDS_4_10_DEN),
        5 | 9 => (TRUE_ODDS_5_9_NUM, TRUE_ODDS_5_9_DEN),
        6 | 8 => (TRUE_ODDS_6_8_NUM, TRUE_ODDS_6_8_DEN),
        _ => (0, 1),
    }
}

/// Lay odds payout ratio for don't pass/don't come odds (inverse of true
/// odds).
pub fn lay_odds_payout(point: u8) -> (u64, u64) {
    match point {
        4 | 10 => (TRUE_ODDS_4_10_DEN, TRUE_ODDS_4_10_NUM), // 1:2
        5 | 9 => (TRUE_ODDS_5_9_DEN, TRUE_ODDS_5_9_NUM),    // 2:3
        6 | 8 => (TRUE_ODDS_6_8_DEN, TRUE_ODDS_6_8_NUM),    // 5:6
        _ => (0, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_wire_roundtrip() {
        for raw in 0u8..16 {
            let kind = BetKind::from_u8(raw).unwrap();
            assert_eq!(u8::from(kind), raw);
        }
        assert_eq!(BetKind::from_u8(16), Err(FairdiceError::UnknownBetKind));
        assert_eq!(BetKind::from_u8(255), Err(FairdiceError::UnknownBetKind));
    }

    #[test]
    fn test_point_validation() {
        for point in [4u8, 5, 6, 8, 9, 10] {
            assert!(BetKind::Place.valid_point(Some(point)));
        }
        assert!(!BetKind::Place.valid_point(Some(7)));
        assert!(!BetKind::Place.valid_point(None));
        assert!(BetKind::Hardway.valid_point(Some(8)));
        assert!(!BetKind::Hardway.valid_point(Some(5)));
        assert!(BetKind::PassLine.valid_point(None));
        assert!(!BetKind::PassLine.valid_point(Some(4)));
        assert!(BetKind::Field.valid_point(None));
    }

    #[test]
    fn test_try_new() {
        let bet = Bet::try_new(8, 6, 100).unwrap();
        assert_eq!(bet.kind, BetKind::Place);
        assert_eq!(bet.point, Some(6));
        assert_eq!(Bet::try_new(9, 5, 100), Err(FairdiceError::InvalidPoint));
        assert_eq!(Bet::try_new(0, 0, 0), Err(FairdiceError::InvalidBetAmount));
        assert_eq!(Bet::try_new(99, 0, 100), Err(FairdiceError::UnknownBetKind));
    }

    #[test]
    fn test_field_rule() {
        assert!(FieldRule::Both.pays_double(2));
        assert!(FieldRule::Both.pays_double(12));
        assert!(FieldRule::TwoOnly.pays_double(2));
        assert!(!FieldRule::TwoOnly.pays_double(12));
        assert!(!FieldRule::TwelveOnly.pays_double(2));
        assert!(FieldRule::TwelveOnly.pays_double(12));
        assert!(!FieldRule::Both.pays_double(4));
    }

    #[test]
    fn test_payout_tables() {
        assert_eq!(place_payout(4), (9, 5));
        assert_eq!(place_payout(9), (7, 5));
        assert_eq!(place_payout(8), (7, 6));
        assert_eq!(hardway_payout(10), (7, 1));
        assert_eq!(hardway_payout(6), (9, 1));
        assert_eq!(true_odds_payout(5), (3, 2));
        assert_eq!(lay_odds_payout(4), (1, 2));
    }
}
