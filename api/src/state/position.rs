use serde::{Deserialize, Serialize};
use steel::*;

use crate::bets::{Bet, BetKind};
use crate::state::position_pda;

use super::FairdiceAccount;

/// Number of point numbers (4, 5, 6, 8, 9, 10).
pub const NUM_POINTS: usize = 6;

/// Number of hardway numbers (4, 6, 8, 10).
pub const NUM_HARDWAYS: usize = 4;

/// Position tracks one bettor's active stakes and pending winnings.
///
/// Bets are stored as one lamport slot per kind (per number for the indexed
/// kinds); a zero slot is an absent bet. Slots are mutated only by the
/// PlaceBet and Settle processors.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Position {
    /// The authority (owner) of this position.
    pub authority: Pubkey,

    /// The epoch these bets belong to.
    pub epoch_id: u64,

    /// The most recent round this position settled.
    pub last_settled_round: u64,

    // ==================== LINE BETS ====================
    // These persist across rounds within an epoch.
    /// Pass Line stake.
    pub pass_line: u64,

    /// Don't Pass stake.
    pub dont_pass: u64,

    /// Pass odds stake (only valid once a point is established).
    pub pass_odds: u64,

    /// Don't Pass odds stake (only valid once a point is established).
    pub dont_pass_odds: u64,

    // ==================== NUMBER BETS ====================
    // Index: 0=4, 1=5, 2=6, 3=8, 4=9, 5=10
    /// Come stakes per number.
    pub come_bets: [u64; NUM_POINTS],

    /// Come odds stakes per number.
    pub come_odds: [u64; NUM_POINTS],

    /// Don't Come stakes per number.
    pub dont_come_bets: [u64; NUM_POINTS],

    /// Don't Come odds stakes per number.
    pub dont_come_odds: [u64; NUM_POINTS],

    /// Place stakes per number.
    pub place_bets: [u64; NUM_POINTS],

    /// Hardway stakes. Index: 0=hard4, 1=hard6, 2=hard8, 3=hard10
    pub hardways: [u64; NUM_HARDWAYS],

    // ==================== SINGLE-ROLL BETS ====================
    /// Field stake (wins on 2, 3, 4, 9, 10, 11, 12).
    pub field_bet: u64,

    /// Any Seven stake.
    pub any_seven: u64,

    /// Any Craps stake.
    pub any_craps: u64,

    /// Yo Eleven stake.
    pub yo_eleven: u64,

    /// Aces stake.
    pub aces: u64,

    /// Twelve stake.
    pub twelve: u64,

    // ==================== TRACKING ====================
    /// Winnings accrued and not yet claimed.
    pub pending_winnings: u64,

    /// Total wagered in this epoch.
    pub total_wagered: u64,

    /// Total won in this epoch.
    pub total_won: u64,

    /// Total lost in this epoch.
    pub total_lost: u64,
}

impl Position {
    pub fn pda(authority: Pubkey) -> (Pubkey, u8) {
        position_pda(authority)
    }

    /// Sum of every active stake. Used when refunding a position stranded in
    /// an ended epoch.
    pub fn total_active_stake(&self) -> u64 {
        let mut total = self.pass_line
            + self.dont_pass
            + self.pass_odds
            + self.dont_pass_odds
            + self.field_bet
            + self.any_seven
            + self.any_craps
            + self.yo_eleven
            + self.aces
            + self.twelve;
        for i in 0..NUM_POINTS {
            total += self.come_bets[i]
                + self.come_odds[i]
                + self.dont_come_bets[i]
                + self.dont_come_odds[i]
                + self.place_bets[i];
        }
        for i in 0..NUM_HARDWAYS {
            total += self.hardways[i];
        }
        total
    }

    pub fn has_active_bets(&self) -> bool {
        self.total_active_stake() > 0
    }

    /// Materialize every non-zero slot as a typed bet.
    pub fn active_bets(&self) -> Vec<Bet> {
        let mut bets = Vec::new();
        push_bet(&mut bets, BetKind::Field, None, self.field_bet);
        push_bet(&mut bets, BetKind::AnySeven, None, self.any_seven);
        push_bet(&mut bets, BetKind::AnyCraps, None, self.any_craps);
        push_bet(&mut bets, BetKind::YoEleven, None, self.yo_eleven);
        push_bet(&mut bets, BetKind::Aces, None, self.aces);
        push_bet(&mut bets, BetKind::Twelve, None, self.twelve);
        push_bet(&mut bets, BetKind::PassLine, None, self.pass_line);
        push_bet(&mut bets, BetKind::DontPass, None, self.dont_pass);
        push_bet(&mut bets, BetKind::PassOdds, None, self.pass_odds);
        push_bet(&mut bets, BetKind::DontPassOdds, None, self.dont_pass_odds);
        for i in 0..NUM_POINTS {
            let point = index_to_point(i);
            push_bet(&mut bets, BetKind::Place, point, self.place_bets[i]);
            push_bet(&mut bets, BetKind::Come, point, self.come_bets[i]);
            push_bet(&mut bets, BetKind::ComeOdds, point, self.come_odds[i]);
            push_bet(&mut bets, BetKind::DontCome, point, self.dont_come_bets[i]);
            push_bet(&mut bets, BetKind::DontComeOdds, point, self.dont_come_odds[i]);
        }
        for i in 0..NUM_HARDWAYS {
            push_bet(&mut bets, BetKind::Hardway, index_to_hardway(i), self.hardways[i]);
        }
        bets
    }

    /// The stake slot backing a (kind, point) pair.
    pub fn stake_mut(&mut self, kind: BetKind, point: Option<u8>) -> Option<&mut u64> {
        match kind {
            BetKind::PassLine => Some(&mut self.pass_line),
            BetKind::DontPass => Some(&mut self.dont_pass),
            BetKind::PassOdds => Some(&mut self.pass_odds),
            BetKind::DontPassOdds => Some(&mut self.dont_pass_odds),
            BetKind::Field => Some(&mut self.field_bet),
            BetKind::AnySeven => Some(&mut self.any_seven),
            BetKind::AnyCraps => Some(&mut self.any_craps),
            BetKind::YoEleven => Some(&mut self.yo_eleven),
            BetKind::Aces => Some(&mut self.aces),
            BetKind::Twelve => Some(&mut self.twelve),
            BetKind::Come => point_to_index(point?).map(|i| &mut self.come_bets[i]),
            BetKind::ComeOdds => point_to_index(point?).map(|i| &mut self.come_odds[i]),
            BetKind::DontCome => point_to_index(point?).map(|i| &mut self.dont_come_bets[i]),
            BetKind::DontComeOdds => point_to_index(point?).map(|i| &mut self.dont_come_odds[i]),
            BetKind::Place => point_to_index(point?).map(|i| &mut self.place_bets[i]),
            BetKind::Hardway => hardway_to_index(point?).map(|i| &mut self.hardways[i]),
        }
    }

    /// Clear single-roll stakes.
    pub fn clear_single_roll_bets(&mut self) {
        self.field_bet = 0;
        self.any_seven = 0;
        self.any_craps = 0;
        self.yo_eleven = 0;
        self.aces = 0;
        self.twelve = 0;
    }

    /// Clear every stake.
    pub fn clear_all_bets(&mut self) {
        self.pass_line = 0;
        self.dont_pass = 0;
        self.pass_odds = 0;
        self.dont_pass_odds = 0;
        self.come_bets = [0; NUM_POINTS];
        self.come_odds = [0; NUM_POINTS];
        self.dont_come_bets = [0; NUM_POINTS];
        self.dont_come_odds = [0; NUM_POINTS];
        self.place_bets = [0; NUM_POINTS];
        self.hardways = [0; NUM_HARDWAYS];
        self.clear_single_roll_bets();
    }

    /// Reset for a new epoch.
    pub fn reset_for_epoch(&mut self, epoch_id: u64) {
        self.epoch_id = epoch_id;
        self.clear_all_bets();
        self.total_wagered = 0;
        self.total_won = 0;
        self.total_lost = 0;
    }
}

fn push_bet(bets: &mut Vec<Bet>, kind: BetKind, point: Option<u8>, stake: u64) {
    if stake > 0 {
        bets.push(Bet { kind, point, stake });
    }
}

/// Helper: Convert point number (4,5,6,8,9,10) to array index (0-5).
pub fn point_to_index(point: u8) -> Option<usize> {
    match point {
        4 => Some(0),
        5 => Some(1),
        6 => Some(2),
        8 => Some(3),
        9 => Some(4),
        10 => Some(5),
        _ => None,
    }
}

/// Helper: Convert array index (0-5) to point number (4,5,6,8,9,10).
pub fn index_to_point(index: usize) -> Option<u8> {
    match index {
        0 => Some(4),
        1 => Some(5),
        2 => Some(6),
        3 => Some(8),
        4 => Some(9),
        5 => Some(10),
        _ => None,
    }
}

/// Helper: Convert hardway number (4,6,8,10) to array index (0-3).
pub fn hardway_to_index(hardway: u8) -> Option<usize> {
    match hardway {
        4 => Some(0),
        6 => Some(1),
        8 => Some(2),
        10 => Some(3),
        _ => None,
    }
}

/// Helper: Convert array index (0-3) to hardway number (4,6,8,10).
pub fn index_to_hardway(index: usize) -> Option<u8> {
    match index {
        0 => Some(4),
        1 => Some(6),
        2 => Some(8),
        3 => Some(10),
        _ => None,
    }
}

account!(FairdiceAccount, Position);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for i in 0..NUM_POINTS {
            assert_eq!(point_to_index(index_to_point(i).unwrap()), Some(i));
        }
        for i in 0..NUM_HARDWAYS {
            assert_eq!(hardway_to_index(index_to_hardway(i).unwrap()), Some(i));
        }
        assert_eq!(point_to_index(7), None);
        assert_eq!(hardway_to_index(5), None);
    }

    #[test]
    fn test_active_bets_materialization() {
        let mut position = Position::zeroed();
        position.pass_line = 100;
        position.place_bets[2] = 60; // place 6
        position.hardways[3] = 25; // hard 10
        position.field_bet = 10;

        let bets = position.active_bets();
        assert_eq!(bets.len(), 4);
        assert!(bets.contains(&Bet { kind: BetKind::PassLine, point: None, stake: 100 }));
        assert!(bets.contains(&Bet { kind: BetKind::Place, point: Some(6), stake: 60 }));
        assert!(bets.contains(&Bet { kind: BetKind::Hardway, point: Some(10), stake: 25 }));
        assert!(bets.contains(&Bet { kind: BetKind::Field, point: None, stake: 10 }));
        assert_eq!(position.total_active_stake(), 195);
    }

    #[test]
    fn test_stake_mut_addresses_every_materialized_bet() {
        let mut position = Position::zeroed();
        position.dont_come_bets[0] = 5;
        position.come_odds[5] = 7;
        position.twelve = 9;
        for bet in position.active_bets() {
            let slot = position.stake_mut(bet.kind, bet.point).unwrap();
            assert_eq!(*slot, bet.stake);
            *slot = 0;
        }
        assert!(!position.has_active_bets());
    }

    #[test]
    fn test_reset_for_epoch() {
        let mut position = Position::zeroed();
        position.epoch_id = 1;
        position.pass_line = 100;
        position.pending_winnings = 55;
        position.total_wagered = 100;
        position.reset_for_epoch(2);
        assert_eq!(position.epoch_id, 2);
        assert!(!position.has_active_bets());
        assert_eq!(position.total_wagered, 0);
        // Pending winnings survive an epoch reset.
        assert_eq!(position.pending_winnings, 55);
    }
}
