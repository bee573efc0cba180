use const_crypto::ed25519;
use solana_program::{pubkey, pubkey::Pubkey};

/// The authority allowed to initialize the program.
pub const ADMIN_ADDRESS: Pubkey = pubkey!("HBUh9g46wk2X89CvaNN15UmsznP59rh6od1h8JwYAopk");

/// The seed of the config account PDA.
pub const CONFIG: &[u8] = b"config";

/// The seed of the round account PDA.
pub const ROUND: &[u8] = b"round";

/// The seed of the table account PDA.
pub const TABLE: &[u8] = b"table";

/// The seed of the position account PDA.
pub const POSITION: &[u8] = b"position";

/// Program id for const pda derivations
const PROGRAM_ID: [u8; 32] = unsafe { *(&crate::id() as *const Pubkey as *const [u8; 32]) };

/// The address of the config account.
pub const CONFIG_ADDRESS: Pubkey =
    Pubkey::new_from_array(ed25519::derive_program_address(&[CONFIG], &PROGRAM_ID).0);

/// The address of the table account.
pub const TABLE_ADDRESS: Pubkey =
    Pubkey::new_from_array(ed25519::derive_program_address(&[TABLE], &PROGRAM_ID).0);

/// The number of squares on the board (6x6 grid for dice combinations).
pub const BOARD_SIZE: usize = 36;

/// The minimum number of slots between opening a round and its sample slot.
/// The slot hash sampled for a round must not be knowable at commit time.
pub const MIN_SAMPLE_DELAY_SLOTS: u64 = 5;

/// One SOL, denominated in lamports.
pub const ONE_SOL: u64 = 1_000_000_000;

/// Default minimum bet (0.0001 SOL).
pub const DEFAULT_MIN_BET: u64 = 100_000;

/// Default maximum bet (10 SOL).
pub const DEFAULT_MAX_BET: u64 = 10 * ONE_SOL;

/// Worst-case payout multiple across all bet kinds (Aces and Twelve pay 30:1,
/// so a winning stake returns 31x). Used for bankroll capacity checks.
pub const MAX_PAYOUT_MULTIPLE: u64 = 31;

// ============================================================================
// PAYOUT RATIOS
// ============================================================================

/// Pass Line / Don't Pass / Come / Don't Come payout ratio (1:1).
pub const LINE_PAYOUT_NUM: u64 = 1;
pub const LINE_PAYOUT_DEN: u64 = 1;

/// Field payout ratio for 3, 4, 9, 10, 11 (1:1).
pub const FIELD_PAYOUT_NORMAL_NUM: u64 = 1;
pub const FIELD_PAYOUT_NORMAL_DEN: u64 = 1;

/// Field payout ratio for 2 and 12 when the double applies (2:1).
pub const FIELD_PAYOUT_DOUBLE_NUM: u64 = 2;
pub const FIELD_PAYOUT_DOUBLE_DEN: u64 = 1;

/// Any Seven payout ratio (4:1).
pub const ANY_SEVEN_PAYOUT_NUM: u64 = 4;
pub const ANY_SEVEN_PAYOUT_DEN: u64 = 1;

/// Any Craps payout ratio (7:1).
pub const ANY_CRAPS_PAYOUT_NUM: u64 = 7;
pub const ANY_CRAPS_PAYOUT_DEN: u64 = 1;

/// Yo Eleven payout ratio (15:1).
pub const YO_ELEVEN_PAYOUT_NUM: u64 = 15;
pub const YO_ELEVEN_PAYOUT_DEN: u64 = 1;

/// Aces payout ratio (30:1).
pub const ACES_PAYOUT_NUM: u64 = 30;
pub const ACES_PAYOUT_DEN: u64 = 1;

/// Twelve payout ratio (30:1).
pub const TWELVE_PAYOUT_NUM: u64 = 30;
pub const TWELVE_PAYOUT_DEN: u64 = 1;

/// Place bet payout ratio on 4 and 10 (9:5).
pub const PLACE_4_10_PAYOUT_NUM: u64 = 9;
pub const PLACE_4_10_PAYOUT_DEN: u64 = 5;

/// Place bet payout ratio on 5 and 9 (7:5).
pub const PLACE_5_9_PAYOUT_NUM: u64 = 7;
pub const PLACE_5_9_PAYOUT_DEN: u64 = 5;

/// Place bet payout ratio on 6 and 8 (7:6).
pub const PLACE_6_8_PAYOUT_NUM: u64 = 7;
pub const PLACE_6_8_PAYOUT_DEN: u64 = 6;

/// True odds on 4 and 10 (2:1).
pub const TRUE_ODDS_4_10_NUM: u64 = 2;
pub const TRUE_ODDS_4_10_DEN: u64 = 1;

/// True odds on 5 and 9 (3:2).
pub const TRUE_ODDS_5_9_NUM: u64 = 3;
pub const TRUE_ODDS_5_9_DEN: u64 = 2;

/// True odds on 6 and 8 (6:5).
pub const TRUE_ODDS_6_8_NUM: u64 = 6;
pub const TRUE_ODDS_6_8_DEN: u64 = 5;

/// Hardway payout ratio on 4 and 10 (7:1).
pub const HARD_4_10_PAYOUT_NUM: u64 = 7;
pub const HARD_4_10_PAYOUT_DEN: u64 = 1;

/// Hardway payout ratio on 6 and 8 (9:1).
pub const HARD_6_8_PAYOUT_NUM: u64 = 9;
pub const HARD_6_8_PAYOUT_DEN: u64 = 1;
