use steel::*;

/// Fairdice program error codes
/// Range 1000-1999: Sequencing errors
/// Range 2000-2999: Integrity and bet validation errors
/// Range 3000-3999: Arithmetic and system errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(u32)]
pub enum FairdiceError {
    // Sequencing Errors (1000-1999)
    #[error("A round with this id already exists")]
    RoundAlreadyExists = 1001,

    #[error("The sample slot has not been reached")]
    TooEarly = 1002,

    #[error("The round has not been sampled")]
    RevealBeforeSample = 1003,

    #[error("The round has not been revealed")]
    RoundNotRevealed = 1004,

    #[error("Position has already been settled for this round")]
    AlreadySettled = 1005,

    #[error("The round is older than the last roll applied to the table")]
    StaleRound = 1006,

    #[error("Betting is closed for this round")]
    BetsClosed = 1007,

    // Integrity and Validation Errors (2000-2999)
    #[error("Revealed seed does not match the commitment")]
    CommitMismatch = 2001,

    #[error("Unknown bet kind")]
    UnknownBetKind = 2002,

    #[error("Invalid point for this bet kind")]
    InvalidPoint = 2003,

    #[error("Invalid bet amount")]
    InvalidBetAmount = 2004,

    #[error("Signer is not the position authority")]
    InvalidAuthority = 2005,

    #[error("Line bets are only accepted on the come-out roll")]
    LineBetNotAllowed = 2006,

    #[error("Odds require a matching line bet and an established point")]
    OddsNotAllowed = 2007,

    // Arithmetic and System Errors (3000-3999)
    #[error("Payout computation overflowed the stake width")]
    StakeOverflow = 3001,

    #[error("House bankroll insufficient for payout")]
    InsufficientBankroll = 3002,
}

error!(FairdiceError);
