//! Pure settlement engine.
//!
//! Resolves a batch of bets against one dice outcome and computes the
//! line-state transition for the roll. Nothing here touches accounts; the
//! Settle processor feeds it the position's active bets and applies the
//! results.

mod resolve;

pub use resolve::*;

#[cfg(test)]
mod tests;

use fairdice_api::prelude::*;

/// The shared line state a roll is resolved against: the table as it stood
/// before the roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineState {
    pub come_out: bool,
    pub point: Option<u8>,
}

impl LineState {
    pub const COME_OUT: LineState = LineState {
        come_out: true,
        point: None,
    };

    pub fn with_point(point: u8) -> LineState {
        LineState {
            come_out: false,
            point: Some(point),
        }
    }
}

/// The table-state change produced by one roll. At most one field is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct LineTransition {
    /// A come-out roll established this point.
    pub establishes: Option<u8>,
    /// The point was hit; the table returns to come-out.
    pub point_made: bool,
    /// A 7 ended the epoch; the table returns to come-out.
    pub seven_out: bool,
}

/// Compute the line transition for a roll.
pub fn line_transition(line: LineState, outcome: DiceOutcome) -> LineTransition {
    let mut transition = LineTransition::default();
    if line.come_out {
        if is_point_number(outcome.sum) {
            transition.establishes = Some(outcome.sum);
        }
    } else if line.point == Some(outcome.sum) {
        transition.point_made = true;
    } else if outcome.sum == 7 {
        transition.seven_out = true;
    }
    transition
}

/// One bet together with its resolution for the roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettledBet {
    pub bet: Bet,
    pub resolution: Resolution,
}

/// The aggregate result of settling a batch against one roll.
#[derive(Clone, Debug)]
pub struct RollSettlement {
    /// Per-bet resolutions, in settlement order.
    pub settled: Vec<SettledBet>,
    /// Bets that failed validation, with the reason. These never abort the
    /// batch.
    pub rejected: Vec<(Bet, FairdiceError)>,
    /// The table transition for this roll.
    pub transition: LineTransition,
    /// Lamports owed to the bettor: winning credits plus pushed stakes.
    pub credited: u64,
    /// Lamports forfeited by the bettor.
    pub collected: u64,
}

/// Resolve a full batch in settlement order: single-roll bets first, then
/// line bets against the pre-roll state, then the number bets (place,
/// hardway, come family) against the final outcome.
///
/// Validation failures reject only the offending bet; arithmetic overflow
/// aborts the whole batch before anything is paid out.
pub fn settle_batch(
    bets: &[Bet],
    outcome: DiceOutcome,
    line: LineState,
    field_rule: FieldRule,
) -> Result<RollSettlement, FairdiceError> {
    let transition = line_transition(line, outcome);
    let mut settled = Vec::with_capacity(bets.len());
    let mut rejected = Vec::new();
    let mut credited: u64 = 0;
    let mut collected: u64 = 0;

    let groups: [fn(&Bet) -> bool; 3] = [
        |bet| bet.kind.is_single_roll(),
        |bet| bet.kind.is_line(),
        |bet| !bet.kind.is_single_roll() && !bet.kind.is_line(),
    ];
    for group in groups {
        for bet in bets.iter().filter(|&bet| group(bet)) {
            match resolve_bet(bet, outcome, line, field_rule) {
                Ok(resolution) => {
                    match resolution {
                        Resolution::Won { credit } => {
                            credited = credited
                                .checked_add(credit)
                                .ok_or(FairdiceError::StakeOverflow)?;
                        }
                        Resolution::Push => {
                            credited = credited
                                .checked_add(bet.stake)
                                .ok_or(FairdiceError::StakeOverflow)?;
                        }
                        Resolution::Lost => {
                            collected = collected
                                .checked_add(bet.stake)
                                .ok_or(FairdiceError::StakeOverflow)?;
                        }
                        Resolution::StillActive => {}
                    }
                    settled.push(SettledBet {
                        bet: *bet,
                        resolution,
                    });
                }
                Err(FairdiceError::StakeOverflow) => return Err(FairdiceError::StakeOverflow),
                Err(err) => rejected.push((*bet, err)),
            }
        }
    }

    Ok(RollSettlement {
        settled,
        rejected,
        transition,
        credited,
        collected,
    })
}
