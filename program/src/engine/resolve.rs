use fairdice_api::prelude::*;

use super::LineState;

/// Winnings for a stake at num:den, exclusive of the returned stake.
fn winnings(stake: u64, ratio: (u64, u64)) -> Result<u64, FairdiceError> {
    let (num, den) = ratio;
    let raw = (stake as u128) * (num as u128) / (den.max(1) as u128);
    u64::try_from(raw).map_err(|_| FairdiceError::StakeOverflow)
}

/// Stake plus winnings at num:den.
fn credit(stake: u64, ratio: (u64, u64)) -> Result<Resolution, FairdiceError> {
    let credit = stake
        .checked_add(winnings(stake, ratio)?)
        .ok_or(FairdiceError::StakeOverflow)?;
    Ok(Resolution::Won { credit })
}

fn required_point(bet: &Bet) -> Result<u8, FairdiceError> {
    match bet.point {
        Some(point) if is_point_number(point) => Ok(point),
        _ => Err(FairdiceError::InvalidPoint),
    }
}

fn required_hardway(bet: &Bet) -> Result<u8, FairdiceError> {
    match bet.point {
        Some(point) if matches!(point, 4 | 6 | 8 | 10) => Ok(point),
        _ => Err(FairdiceError::InvalidPoint),
    }
}

/// Resolve one bet against one roll. Every kind produces exactly one
/// resolution; the match is exhaustive so a new kind cannot be silently
/// ignored.
pub fn resolve_bet(
    bet: &Bet,
    outcome: DiceOutcome,
    line: LineState,
    field_rule: FieldRule,
) -> Result<Resolution, FairdiceError> {
    match bet.kind {
        BetKind::PassLine => resolve_pass(bet.stake, outcome, line),
        BetKind::DontPass => resolve_dont_pass(bet.stake, outcome, line),
        BetKind::PassOdds => resolve_pass_odds(bet.stake, outcome, line),
        BetKind::DontPassOdds => resolve_dont_pass_odds(bet.stake, outcome, line),
        BetKind::Come => resolve_come(bet, outcome),
        BetKind::DontCome => resolve_dont_come(bet, outcome),
        BetKind::ComeOdds => resolve_come_odds(bet, outcome),
        BetKind::DontComeOdds => resolve_dont_come_odds(bet, outcome),
        BetKind::Place => resolve_place(bet, outcome),
        BetKind::Hardway => resolve_hardway(bet, outcome),
        BetKind::Field => resolve_field(bet.stake, outcome, field_rule),
        BetKind::AnySeven => resolve_exact_sums(bet.stake, outcome, &[7], (ANY_SEVEN_PAYOUT_NUM, ANY_SEVEN_PAYOUT_DEN)),
        BetKind::AnyCraps => resolve_exact_sums(bet.stake, outcome, &[2, 3, 12], (ANY_CRAPS_PAYOUT_NUM, ANY_CRAPS_PAYOUT_DEN)),
        BetKind::YoEleven => resolve_exact_sums(bet.stake, outcome, &[11], (YO_ELEVEN_PAYOUT_NUM, YO_ELEVEN_PAYOUT_DEN)),
        BetKind::Aces => resolve_exact_sums(bet.stake, outcome, &[2], (ACES_PAYOUT_NUM, ACES_PAYOUT_DEN)),
        BetKind::Twelve => resolve_exact_sums(bet.stake, outcome, &[12], (TWELVE_PAYOUT_NUM, TWELVE_PAYOUT_DEN)),
    }
}

/// Pass Line. Come-out: wins on a natural, loses on craps, otherwise rides
/// while the roll establishes the point. Point phase: wins when the point
/// repeats, loses on a 7.
fn resolve_pass(stake: u64, outcome: DiceOutcome, line: LineState) -> Result<Resolution, FairdiceError> {
    if line.come_out {
        if is_natural(outcome.sum) {
            credit(stake, (LINE_PAYOUT_NUM, LINE_PAYOUT_DEN))
        } else if is_craps(outcome.sum) {
            Ok(Resolution::Lost)
        } else {
            Ok(Resolution::StillActive)
        }
    } else {
        let point = line.point.ok_or(FairdiceError::InvalidPoint)?;
        if outcome.sum == point {
            credit(stake, (LINE_PAYOUT_NUM, LINE_PAYOUT_DEN))
        } else if outcome.sum == 7 {
            Ok(Resolution::Lost)
        } else {
            Ok(Resolution::StillActive)
        }
    }
}

/// Don't Pass. Come-out: wins on 2 or 3, pushes on 12, loses on a natural.
/// Point phase: wins on a 7, loses when the point repeats.
fn resolve_dont_pass(stake: u64, outcome: DiceOutcome, line: LineState) -> Result<Resolution, FairdiceError> {
    if line.come_out {
        if outcome.sum == 12 {
            Ok(Resolution::Push)
        } else if is_craps(outcome.sum) {
            credit(stake, (LINE_PAYOUT_NUM, LINE_PAYOUT_DEN))
        } else if is_natural(outcome.sum) {
            Ok(Resolution::Lost)
        } else {
            Ok(Resolution::StillActive)
        }
    } else {
        let point = line.point.ok_or(FairdiceError::InvalidPoint)?;
        if outcome.sum == 7 {
            credit(stake, (LINE_PAYOUT_NUM, LINE_PAYOUT_DEN))
        } else if outcome.sum == point {
            Ok(Resolution::Lost)
        } else {
            Ok(Resolution::StillActive)
        }
    }
}

/// Pass odds pay true odds behind the line. With no point up they are inert.
fn resolve_pass_odds(stake: u64, outcome: DiceOutcome, line: LineState) -> Result<Resolution, FairdiceError> {
    let Some(point) = line.point else {
        return Ok(Resolution::StillActive);
    };
    if outcome.sum == point {
        credit(stake, true_odds_payout(point))
    } else if outcome.sum == 7 {
        Ok(Resolution::Lost)
    } else {
        Ok(Resolution::StillActive)
    }
}

/// Don't pass odds lay the inverse of true odds.
fn resolve_dont_pass_odds(stake: u64, outcome: DiceOutcome, line: LineState) -> Result<Resolution, FairdiceError> {
    let Some(point) = line.point else {
        return Ok(Resolution::StillActive);
    };
    if outcome.sum == 7 {
        credit(stake, lay_odds_payout(point))
    } else if outcome.sum == point {
        Ok(Resolution::Lost)
    } else {
        Ok(Resolution::StillActive)
    }
}

/// Come: wins 1:1 when its number hits, loses on any 7.
fn resolve_come(bet: &Bet, outcome: DiceOutcome) -> Result<Resolution, FairdiceError> {
    let number = required_point(bet)?;
    if outcome.sum == number {
        credit(bet.stake, (LINE_PAYOUT_NUM, LINE_PAYOUT_DEN))
    } else if outcome.sum == 7 {
        Ok(Resolution::Lost)
    } else {
        Ok(Resolution::StillActive)
    }
}

/// Don't Come: wins 1:1 on any 7, loses when its number hits.
fn resolve_dont_come(bet: &Bet, outcome: DiceOutcome) -> Result<Resolution, FairdiceError> {
    let number = required_point(bet)?;
    if outcome.sum == 7 {
        credit(bet.stake, (LINE_PAYOUT_NUM, LINE_PAYOUT_DEN))
    } else if outcome.sum == number {
        Ok(Resolution::Lost)
    } else {
        Ok(Resolution::StillActive)
    }
}

/// Come odds pay true odds on the bet's own number.
fn resolve_come_odds(bet: &Bet, outcome: DiceOutcome) -> Result<Resolution, FairdiceError> {
    let number = required_point(bet)?;
    if outcome.sum == number {
        credit(bet.stake, true_odds_payout(number))
    } else if outcome.sum == 7 {
        Ok(Resolution::Lost)
    } else {
        Ok(Resolution::StillActive)
    }
}

/// Don't come odds lay the inverse of true odds on the bet's own number.
fn resolve_dont_come_odds(bet: &Bet, outcome: DiceOutcome) -> Result<Resolution, FairdiceError> {
    let number = required_point(bet)?;
    if outcome.sum == 7 {
        credit(bet.stake, lay_odds_payout(number))
    } else if outcome.sum == number {
        Ok(Resolution::Lost)
    } else {
        Ok(Resolution::StillActive)
    }
}

/// Place: wins its ratio when the number hits, loses on a 7.
fn resolve_place(bet: &Bet, outcome: DiceOutcome) -> Result<Resolution, FairdiceError> {
    let number = required_point(bet)?;
    if outcome.sum == number {
        credit(bet.stake, place_payout(number))
    } else if outcome.sum == 7 {
        Ok(Resolution::Lost)
    } else {
        Ok(Resolution::StillActive)
    }
}

/// Hardway: wins when the number comes as a double, loses on a 7 or on the
/// easy way.
fn resolve_hardway(bet: &Bet, outcome: DiceOutcome) -> Result<Resolution, FairdiceError> {
    let number = required_hardway(bet)?;
    if outcome.sum == number && outcome.is_hard() {
        credit(bet.stake, hardway_payout(number))
    } else if outcome.sum == 7 || outcome.sum == number {
        Ok(Resolution::Lost)
    } else {
        Ok(Resolution::StillActive)
    }
}

/// Field: wins 1:1 on a field number, with the configured double on 2/12.
fn resolve_field(stake: u64, outcome: DiceOutcome, field_rule: FieldRule) -> Result<Resolution, FairdiceError> {
    if !is_field_number(outcome.sum) {
        return Ok(Resolution::Lost);
    }
    let ratio = if field_rule.pays_double(outcome.sum) {
        (FIELD_PAYOUT_DOUBLE_NUM, FIELD_PAYOUT_DOUBLE_DEN)
    } else {
        (FIELD_PAYOUT_NORMAL_NUM, FIELD_PAYOUT_NORMAL_DEN)
    };
    credit(stake, ratio)
}

/// A one-roll bet on an exact set of sums.
fn resolve_exact_sums(
    stake: u64,
    outcome: DiceOutcome,
    sums: &[u8],
    ratio: (u64, u64),
) -> Result<Resolution, FairdiceError> {
    if sums.contains(&outcome.sum) {
        credit(stake, ratio)
    } else {
        Ok(Resolution::Lost)
    }
}
