use serde::{Deserialize, Serialize};
use steel::*;

use crate::bets::FieldRule;
use crate::state::config_pda;

use super::FairdiceAccount;

/// Config holds the admin settings for the table.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Config {
    /// The admin authority.
    pub admin: Pubkey,

    /// Minimum accepted stake, in lamports.
    pub min_bet: u64,

    /// Maximum accepted stake, in lamports.
    pub max_bet: u64,

    /// Which of 2/12 pays the field double (FieldRule as u64).
    pub field_double: u64,
}

impl Config {
    pub fn pda() -> (Pubkey, u8) {
        config_pda()
    }

    /// The configured field double rule, defaulting to double on both 2 and
    /// 12 when the stored value is out of range.
    pub fn field_rule(&self) -> FieldRule {
        FieldRule::from_u8(self.field_double as u8).unwrap_or(FieldRule::Both)
    }
}

account!(FairdiceAccount, Config);
