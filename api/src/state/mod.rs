mod config;
mod position;
mod round;
mod table;

pub use config::*;
pub use position::*;
pub use round::*;
pub use table::*;

use steel::*;

use crate::consts::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum FairdiceAccount {
    Config = 100,
    Round = 101,
    Table = 102,
    Position = 103,
}

pub fn config_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG], &crate::id())
}

pub fn round_pda(id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ROUND, &id.to_le_bytes()], &crate::id())
}

pub fn table_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TABLE], &crate::id())
}

pub fn position_pda(authority: Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POSITION, &authority.to_bytes()], &crate::id())
}
