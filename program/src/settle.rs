use fairdice_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

use crate::engine::{line_transition, settle_batch, LineState};

/// Settles a position against a revealed round.
///
/// The first settlement for a round snapshots the table's line state and
/// applies the roll's transition to it; every later settlement for the same
/// round resolves against that snapshot. The table therefore moves exactly
/// once per roll no matter how many positions settle, and every bettor sees
/// the same pre-roll point.
pub fn process_settle(accounts: &[AccountInfo<'_>], _data: &[u8]) -> ProgramResult {
    // Load accounts.
    let [signer_info, config_info, table_info, position_info, round_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    config_info.has_seeds(&[CONFIG], &fairdice_api::ID)?;
    table_info
        .is_writable()?
        .has_seeds(&[TABLE], &fairdice_api::ID)?;
    position_info.is_writable()?;

    let config = config_info.as_account::<Config>(&fairdice_api::ID)?;
    let round = round_info.as_account::<Round>(&fairdice_api::ID)?;
    let table = table_info.as_account_mut::<Table>(&fairdice_api::ID)?;
    let position = position_info.as_account_mut::<Position>(&fairdice_api::ID)?;

    // Settlement requires verified entropy.
    let Some(outcome) = round.outcome() else {
        sol_log("Round has not been revealed");
        return Err(FairdiceError::RoundNotRevealed.into());
    };

    // Sequencing guards.
    if position.last_settled_round >= round.id {
        sol_log("Already settled for this round");
        return Err(FairdiceError::AlreadySettled.into());
    }
    if table.applied_round > round.id {
        sol_log("A later roll has already been applied to the table");
        return Err(FairdiceError::StaleRound.into());
    }

    // Apply the roll to the table exactly once.
    if table.applied_round < round.id {
        let line = LineState {
            come_out: table.is_coming_out(),
            point: table.get_point(),
        };
        table.snapshot_roll(round.id);
        let transition = line_transition(line, outcome);
        if let Some(point) = transition.establishes {
            table.set_point(point);
            sol_log(&format!("Point established: {}", point));
        } else if transition.point_made {
            table.clear_point();
            sol_log("Point made! Returning to come-out.");
        } else if transition.seven_out {
            table.start_new_epoch(round.id);
            sol_log(&format!("Seven-out! New epoch: {}", table.epoch_id));
        }
    }

    // The pre-roll line state every position resolves against.
    let line = LineState {
        come_out: table.prev_coming_out(),
        point: table.prev_point(),
    };

    // A position opened after this roll's epoch ended has nothing riding on
    // the roll; its bets target future rounds.
    if position.epoch_id == table.epoch_id && position.epoch_id != table.prev_epoch {
        position.last_settled_round = round.id;
        return Ok(());
    }

    // A position from an epoch older than the roll's epoch missed settlement
    // of the roll that ended its epoch; its surviving stakes are refunded.
    if position.epoch_id != table.prev_epoch {
        let refund = position.total_active_stake();
        if refund > 0 {
            if table.house_bankroll < refund {
                sol_log("ERROR: Insufficient house bankroll for refund");
                return Err(FairdiceError::InsufficientBankroll.into());
            }
            table.house_bankroll -= refund;
            position.pending_winnings = position
                .pending_winnings
                .checked_add(refund)
                .ok_or(FairdiceError::StakeOverflow)?;
            sol_log(&format!("Refunded {} lamports from ended epoch", refund));
        }
        position.reset_for_epoch(table.epoch_id);
        position.last_settled_round = round.id;
        return Ok(());
    }

    let bets = position.active_bets();
    if bets.is_empty() {
        sol_log("No active bets to settle");
        position.last_settled_round = round.id;
        position.epoch_id = table.epoch_id;
        return Ok(());
    }

    let settlement = settle_batch(&bets, outcome, line, config.field_rule())?;
    for (bet, err) in &settlement.rejected {
        // A malformed slot cannot block the rest of the batch; drop it and
        // return the stake.
        sol_log(&format!("Rejected bet {:?}: {}", bet.kind, err));
    }

    // Apply per-bet resolutions back to the stake slots.
    let mut total_winnings: u64 = 0;
    let mut total_lost: u64 = 0;
    for settled in &settlement.settled {
        let bet = settled.bet;
        match settled.resolution {
            Resolution::Won { credit } => {
                total_winnings = total_winnings
                    .checked_add(credit)
                    .ok_or(FairdiceError::StakeOverflow)?;
                #[cfg(feature = "debug")]
                sol_log(&format!("{:?} won: credit {}", bet.kind, credit));
            }
            Resolution::Push => {
                total_winnings = total_winnings
                    .checked_add(bet.stake)
                    .ok_or(FairdiceError::StakeOverflow)?;
                #[cfg(feature = "debug")]
                sol_log(&format!("{:?} push", bet.kind));
            }
            Resolution::Lost => {
                total_lost = total_lost
                    .checked_add(bet.stake)
                    .ok_or(FairdiceError::StakeOverflow)?;
                #[cfg(feature = "debug")]
                sol_log(&format!("{:?} lost: {}", bet.kind, bet.stake));
            }
            Resolution::StillActive => continue,
        }
        if let Some(slot) = position.stake_mut(bet.kind, bet.point) {
            *slot = 0;
        }
    }
    // Rejected stakes are returned, not forfeited.
    for (bet, _) in &settlement.rejected {
        total_winnings = total_winnings
            .checked_add(bet.stake)
            .ok_or(FairdiceError::StakeOverflow)?;
        if let Some(slot) = position.stake_mut(bet.kind, bet.point) {
            *slot = 0;
        }
    }

    // Update position tracking.
    position.pending_winnings = position
        .pending_winnings
        .checked_add(total_winnings)
        .ok_or(FairdiceError::StakeOverflow)?;
    position.total_won = position
        .total_won
        .checked_add(total_winnings)
        .ok_or(FairdiceError::StakeOverflow)?;
    position.total_lost = position
        .total_lost
        .checked_add(total_lost)
        .ok_or(FairdiceError::StakeOverflow)?;
    position.last_settled_round = round.id;

    // Update the house ledger. Credits (returned stakes plus winnings) leave
    // house control; forfeited stakes were folded into the bankroll when
    // they were placed.
    table.total_payouts = table
        .total_payouts
        .checked_add(total_winnings)
        .ok_or(FairdiceError::StakeOverflow)?;
    table.total_collected = table
        .total_collected
        .checked_add(total_lost)
        .ok_or(FairdiceError::StakeOverflow)?;
    if table.house_bankroll < total_winnings {
        sol_log("ERROR: Insufficient house bankroll for payout");
        return Err(FairdiceError::InsufficientBankroll.into());
    }
    table.house_bankroll -= total_winnings;

    // A seven-out ends the epoch for this position as well.
    if position.epoch_id != table.epoch_id {
        position.reset_for_epoch(table.epoch_id);
    }

    sol_log(&format!(
        "Settlement complete: won={}, lost={}, pending={}",
        total_winnings, total_lost, position.pending_winnings
    ));

    Ok(())
}
