use super::*;
use fairdice_api::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn roll(die1: u8, die2: u8) -> DiceOutcome {
    DiceOutcome::from_square((die1 - 1) * 6 + (die2 - 1)).unwrap()
}

fn bet(kind: BetKind, point: Option<u8>, stake: u64) -> Bet {
    Bet { kind, point, stake }
}

/// One representative bet per (kind, point) combination the table accepts.
fn every_bet(stake: u64) -> Vec<Bet> {
    let mut bets = Vec::new();
    for kind in [
        BetKind::PassLine,
        BetKind::DontPass,
        BetKind::PassOdds,
        BetKind::DontPassOdds,
        BetKind::Field,
        BetKind::AnySeven,
        BetKind::AnyCraps,
        BetKind::YoEleven,
        BetKind::Aces,
        BetKind::Twelve,
    ] {
        bets.push(bet(kind, None, stake));
    }
    for point in [4u8, 5, 6, 8, 9, 10] {
        for kind in [
            BetKind::Come,
            BetKind::DontCome,
            BetKind::ComeOdds,
            BetKind::DontComeOdds,
            BetKind::Place,
        ] {
            bets.push(bet(kind, Some(point), stake));
        }
    }
    for point in [4u8, 6, 8, 10] {
        bets.push(bet(BetKind::Hardway, Some(point), stake));
    }
    bets
}

#[test]
fn test_every_bet_resolves_on_every_square() {
    // Exactly one resolution per bet per roll, for every kind and every
    // square, in both line phases.
    let lines = [
        LineState::COME_OUT,
        LineState::with_point(4),
        LineState::with_point(6),
        LineState::with_point(10),
    ];
    for line in lines {
        for square in 0u8..36 {
            let outcome = DiceOutcome::from_square(square).unwrap();
            for b in every_bet(100) {
                resolve_bet(&b, outcome, line, FieldRule::Both).unwrap();
            }
        }
    }
}

#[test]
fn test_pass_line_come_out() {
    let line = LineState::COME_OUT;
    let b = bet(BetKind::PassLine, None, 100);
    // Natural: wins 1:1 and the point stays down.
    for outcome in [roll(3, 4), roll(5, 6)] {
        assert_eq!(
            resolve_bet(&b, outcome, line, FieldRule::Both).unwrap(),
            Resolution::Won { credit: 200 }
        );
        assert_eq!(line_transition(line, outcome), LineTransition::default());
    }
    // Craps: loses.
    for outcome in [roll(1, 1), roll(1, 2), roll(6, 6)] {
        assert_eq!(
            resolve_bet(&b, outcome, line, FieldRule::Both).unwrap(),
            Resolution::Lost
        );
    }
    // Point number: rides, and the roll establishes the point.
    let outcome = roll(2, 3);
    assert_eq!(
        resolve_bet(&b, outcome, line, FieldRule::Both).unwrap(),
        Resolution::StillActive
    );
    assert_eq!(line_transition(line, outcome).establishes, Some(5));
}

#[test]
fn test_pass_line_point_phase() {
    let line = LineState::with_point(5);
    let b = bet(BetKind::PassLine, None, 100);
    // Point repeats: wins, table returns to come-out.
    let outcome = roll(1, 4);
    assert_eq!(
        resolve_bet(&b, outcome, line, FieldRule::Both).unwrap(),
        Resolution::Won { credit: 200 }
    );
    assert!(line_transition(line, outcome).point_made);
    // Seven-out: loses, epoch ends.
    let outcome = roll(3, 4);
    assert_eq!(
        resolve_bet(&b, outcome, line, FieldRule::Both).unwrap(),
        Resolution::Lost
    );
    assert!(line_transition(line, outcome).seven_out);
    // Anything else rides.
    assert_eq!(
        resolve_bet(&b, roll(4, 5), line, FieldRule::Both).unwrap(),
        Resolution::StillActive
    );
}

#[test]
fn test_dont_pass_mirrors_pass() {
    let line = LineState::COME_OUT;
    let b = bet(BetKind::DontPass, None, 100);
    assert_eq!(
        resolve_bet(&b, roll(1, 1), line, FieldRule::Both).unwrap(),
        Resolution::Won { credit: 200 }
    );
    assert_eq!(
        resolve_bet(&b, roll(1, 2), line, FieldRule::Both).unwrap(),
        Resolution::Won { credit: 200 }
    );
    // Twelve pushes rather than wins.
    assert_eq!(
        resolve_bet(&b, roll(6, 6), line, FieldRule::Both).unwrap(),
        Resolution::Push
    );
    assert_eq!(
        resolve_bet(&b, roll(3, 4), line, FieldRule::Both).unwrap(),
        Resolution::Lost
    );
    assert_eq!(
        resolve_bet(&b, roll(5, 6), line, FieldRule::Both).unwrap(),
        Resolution::Lost
    );
    assert_eq!(
        resolve_bet(&b, roll(4, 4), line, FieldRule::Both).unwrap(),
        Resolution::StillActive
    );

    let line = LineState::with_point(8);
    assert_eq!(
        resolve_bet(&b, roll(3, 4), line, FieldRule::Both).unwrap(),
        Resolution::Won { credit: 200 }
    );
    assert_eq!(
        resolve_bet(&b, roll(4, 4), line, FieldRule::Both).unwrap(),
        Resolution::Lost
    );
}

#[test]
fn test_odds_pay_true_odds() {
    // 4/10 pay 2:1, 5/9 pay 3:2, 6/8 pay 6:5.
    let cases = [(4u8, 100u64, 300u64), (9, 100, 250), (8, 100, 220)];
    for (point, stake, expected) in cases {
        let line = LineState::with_point(point);
        let b = bet(BetKind::PassOdds, None, stake);
        let hit = DiceOutcome::from_square(
            (0..36)
                .find(|&s| DiceOutcome::from_square(s).unwrap().sum == point)
                .unwrap(),
        )
        .unwrap();
        assert_eq!(
            resolve_bet(&b, hit, line, FieldRule::Both).unwrap(),
            Resolution::Won { credit: expected }
        );
        assert_eq!(
            resolve_bet(&b, roll(3, 4), line, FieldRule::Both).unwrap(),
            Resolution::Lost
        );
    }
    // Don't pass odds lay the inverse: 1:2 on 4/10.
    let line = LineState::with_point(4);
    let b = bet(BetKind::DontPassOdds, None, 100);
    assert_eq!(
        resolve_bet(&b, roll(3, 4), line, FieldRule::Both).unwrap(),
        Resolution::Won { credit: 150 }
    );
    assert_eq!(
        resolve_bet(&b, roll(2, 2), line, FieldRule::Both).unwrap(),
        Resolution::Lost
    );
    // Odds are inert with no point up.
    assert_eq!(
        resolve_bet(&b, roll(3, 4), LineState::COME_OUT, FieldRule::Both).unwrap(),
        Resolution::StillActive
    );
}

#[test]
fn test_come_family() {
    let line = LineState::with_point(5);
    let come = bet(BetKind::Come, Some(6), 100);
    assert_eq!(
        resolve_bet(&come, roll(3, 3), line, FieldRule::Both).unwrap(),
        Resolution::Won { credit: 200 }
    );
    assert_eq!(
        resolve_bet(&come, roll(3, 4), line, FieldRule::Both).unwrap(),
        Resolution::Lost
    );
    assert_eq!(
        resolve_bet(&come, roll(2, 3), line, FieldRule::Both).unwrap(),
        Resolution::StillActive
    );

    let dont_come = bet(BetKind::DontCome, Some(6), 100);
    assert_eq!(
        resolve_bet(&dont_come, roll(3, 4), line, FieldRule::Both).unwrap(),
        Resolution::Won { credit: 200 }
    );
    assert_eq!(
        resolve_bet(&dont_come, roll(3, 3), line, FieldRule::Both).unwrap(),
        Resolution::Lost
    );

    // Come odds on 10 pay 2:1; don't come odds on 10 lay 1:2.
    let come_odds = bet(BetKind::ComeOdds, Some(10), 100);
    assert_eq!(
        resolve_bet(&come_odds, roll(5, 5), line, FieldRule::Both).unwrap(),
        Resolution::Won { credit: 300 }
    );
    let dont_come_odds = bet(BetKind::DontComeOdds, Some(10), 100);
    assert_eq!(
        resolve_bet(&dont_come_odds, roll(3, 4), line, FieldRule::Both).unwrap(),
        Resolution::Won { credit: 150 }
    );
}

#[test]
fn test_place_payouts() {
    let line = LineState::with_point(8);
    // 9:5 on 4/10, 7:5 on 5/9, 7:6 on 6/8.
    let cases = [
        (4u8, 50u64, roll(2, 2), 140u64),
        (10, 50, roll(4, 6), 140),
        (5, 50, roll(2, 3), 120),
        (9, 50, roll(4, 5), 120),
        (6, 60, roll(2, 4), 130),
        (8, 60, roll(3, 5), 130),
    ];
    for (point, stake, hit, expected) in cases {
        let b = bet(BetKind::Place, Some(point), stake);
        assert_eq!(
            resolve_bet(&b, hit, line, FieldRule::Both).unwrap(),
            Resolution::Won { credit: expected }
        );
        assert_eq!(
            resolve_bet(&b, roll(3, 4), line, FieldRule::Both).unwrap(),
            Resolution::Lost
        );
        assert_eq!(
            resolve_bet(&b, roll(1, 1), line, FieldRule::Both).unwrap(),
            Resolution::StillActive
        );
    }
}

#[test]
fn test_hardway_hard_and_easy() {
    let line = LineState::COME_OUT;
    let b = bet(BetKind::Hardway, Some(6), 60);
    // 3+3 is the hard six: 9:1.
    assert_eq!(
        resolve_bet(&b, roll(3, 3), line, FieldRule::Both).unwrap(),
        Resolution::Won { credit: 600 }
    );
    // 2+4 makes six the easy way: loses.
    assert_eq!(
        resolve_bet(&b, roll(2, 4), line, FieldRule::Both).unwrap(),
        Resolution::Lost
    );
    // Any seven: loses.
    assert_eq!(
        resolve_bet(&b, roll(3, 4), line, FieldRule::Both).unwrap(),
        Resolution::Lost
    );
    // Unrelated roll: rides.
    assert_eq!(
        resolve_bet(&b, roll(2, 3), line, FieldRule::Both).unwrap(),
        Resolution::StillActive
    );
    // Hard ten pays 7:1.
    let b = bet(BetKind::Hardway, Some(10), 100);
    assert_eq!(
        resolve_bet(&b, roll(5, 5), line, FieldRule::Both).unwrap(),
        Resolution::Won { credit: 800 }
    );
}

#[test]
fn test_field_rules() {
    let line = LineState::COME_OUT;
    let b = bet(BetKind::Field, None, 100);
    // Normal field numbers pay 1:1.
    for outcome in [roll(1, 2), roll(2, 2), roll(4, 5), roll(4, 6), roll(5, 6)] {
        assert_eq!(
            resolve_bet(&b, outcome, line, FieldRule::Both).unwrap(),
            Resolution::Won { credit: 200 }
        );
    }
    // Non-field sums lose.
    for outcome in [roll(1, 4), roll(3, 3), roll(3, 4), roll(4, 4)] {
        assert_eq!(
            resolve_bet(&b, outcome, line, FieldRule::Both).unwrap(),
            Resolution::Lost
        );
    }
    // The double on 2/12 follows the configured rule.
    let two = roll(1, 1);
    let twelve = roll(6, 6);
    assert_eq!(
        resolve_bet(&b, two, line, FieldRule::Both).unwrap(),
        Resolution::Won { credit: 300 }
    );
    assert_eq!(
        resolve_bet(&b, twelve, line, FieldRule::Both).unwrap(),
        Resolution::Won { credit: 300 }
    );
    assert_eq!(
        resolve_bet(&b, twelve, line, FieldRule::TwoOnly).unwrap(),
        Resolution::Won { credit: 200 }
    );
    assert_eq!(
        resolve_bet(&b, two, line, FieldRule::TwelveOnly).unwrap(),
        Resolution::Won { credit: 200 }
    );
}

#[test]
fn test_single_roll_props() {
    let line = LineState::COME_OUT;
    let cases = [
        (BetKind::AnySeven, roll(3, 4), 500u64),
        (BetKind::AnyCraps, roll(1, 2), 800),
        (BetKind::YoEleven, roll(5, 6), 1600),
        (BetKind::Aces, roll(1, 1), 3100),
        (BetKind::Twelve, roll(6, 6), 3100),
    ];
    for (kind, hit, expected) in cases {
        let b = bet(kind, None, 100);
        assert_eq!(
            resolve_bet(&b, hit, line, FieldRule::Both).unwrap(),
            Resolution::Won { credit: expected }
        );
        // A sum outside the bet's set loses; single-roll bets never ride.
        assert_eq!(
            resolve_bet(&b, roll(2, 3), line, FieldRule::Both).unwrap(),
            Resolution::Lost
        );
    }
}

#[test]
fn test_stake_overflow_fails_closed() {
    let line = LineState::COME_OUT;
    let b = bet(BetKind::Aces, None, u64::MAX);
    assert_eq!(
        resolve_bet(&b, roll(1, 1), line, FieldRule::Both),
        Err(FairdiceError::StakeOverflow)
    );
    // The whole batch aborts; no partial payout survives.
    assert_eq!(
        settle_batch(&[b], roll(1, 1), line, FieldRule::Both).err(),
        Some(FairdiceError::StakeOverflow)
    );
}

#[test]
fn test_invalid_point_rejects_single_bet() {
    let line = LineState::COME_OUT;
    let bad = bet(BetKind::Place, Some(7), 100);
    let good = bet(BetKind::Field, None, 100);
    let settlement = settle_batch(&[bad, good], roll(2, 2), line, FieldRule::Both).unwrap();
    assert_eq!(settlement.rejected.len(), 1);
    assert_eq!(settlement.rejected[0].1, FairdiceError::InvalidPoint);
    // The valid bet still settled.
    assert_eq!(settlement.settled.len(), 1);
    assert_eq!(
        settlement.settled[0].resolution,
        Resolution::Won { credit: 200 }
    );
}

#[test]
fn test_settlement_order() {
    // Single-roll bets settle first, then line bets, then number bets.
    let bets = [
        bet(BetKind::Place, Some(5), 50),
        bet(BetKind::PassLine, None, 100),
        bet(BetKind::Field, None, 10),
        bet(BetKind::Hardway, Some(8), 25),
    ];
    let settlement = settle_batch(&bets, roll(2, 3), LineState::COME_OUT, FieldRule::Both).unwrap();
    let order: Vec<BetKind> = settlement.settled.iter().map(|s| s.bet.kind).collect();
    assert_eq!(
        order,
        vec![BetKind::Field, BetKind::PassLine, BetKind::Place, BetKind::Hardway]
    );
}

#[test]
fn test_batch_accounting() {
    // Come-out 7: pass wins 200, field loses 10, any seven wins 50+200,
    // place and hardway lose to the 7, don't pass loses.
    let bets = [
        bet(BetKind::PassLine, None, 100),
        bet(BetKind::DontPass, None, 40),
        bet(BetKind::Field, None, 10),
        bet(BetKind::AnySeven, None, 50),
        bet(BetKind::Place, Some(6), 30),
        bet(BetKind::Hardway, Some(4), 20),
    ];
    let settlement = settle_batch(&bets, roll(3, 4), LineState::COME_OUT, FieldRule::Both).unwrap();
    assert_eq!(settlement.credited, 200 + 250);
    assert_eq!(settlement.collected, 40 + 10 + 30 + 20);
    assert_eq!(settlement.transition, LineTransition::default());
}

#[test]
fn test_point_cycle_scenario() {
    // Come-out 5 establishes the point; the pass line rides.
    let b = bet(BetKind::PassLine, None, 100);
    let come_out = LineState::COME_OUT;
    let establish = roll(2, 3);
    let s = settle_batch(&[b], establish, come_out, FieldRule::Both).unwrap();
    assert_eq!(s.settled[0].resolution, Resolution::StillActive);
    assert_eq!(s.transition.establishes, Some(5));

    // The point repeats: pass wins and the table returns to come-out.
    let point_phase = LineState::with_point(5);
    let s = settle_batch(&[b], roll(4, 1), point_phase, FieldRule::Both).unwrap();
    assert_eq!(s.settled[0].resolution, Resolution::Won { credit: 200 });
    assert!(s.transition.point_made);

    // A fresh point, then a seven-out: pass loses and the epoch ends.
    let s = settle_batch(&[b], roll(3, 4), point_phase, FieldRule::Both).unwrap();
    assert_eq!(s.settled[0].resolution, Resolution::Lost);
    assert!(s.transition.seven_out);
}

#[test]
fn test_randomized_batches_stay_consistent() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let stake = rng.gen_range(1..=1_000_000u64);
        let bets = every_bet(stake);
        let square = rng.gen_range(0..36u8);
        let outcome = DiceOutcome::from_square(square).unwrap();
        let line = if rng.gen_bool(0.5) {
            LineState::COME_OUT
        } else {
            LineState::with_point([4u8, 5, 6, 8, 9, 10][rng.gen_range(0..6)])
        };
        let settlement = settle_batch(&bets, outcome, line, FieldRule::Both).unwrap();
        assert!(settlement.rejected.is_empty());
        assert_eq!(settlement.settled.len(), bets.len());
        // Re-derive the totals from the per-bet resolutions.
        let mut credited = 0u64;
        let mut collected = 0u64;
        for s in &settlement.settled {
            match s.resolution {
                Resolution::Won { credit } => credited += credit,
                Resolution::Push => credited += s.bet.stake,
                Resolution::Lost => collected += s.bet.stake,
                Resolution::StillActive => {}
            }
        }
        assert_eq!(credited, settlement.credited);
        assert_eq!(collected, settlement.collected);
    }
}
