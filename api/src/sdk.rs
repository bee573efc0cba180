use solana_program::sysvar;
use steel::*;

use crate::instruction::*;
use crate::state::{config_pda, position_pda, round_pda, table_pda};

/// Build an Initialize instruction. Signer must be the admin.
pub fn initialize(signer: Pubkey, min_bet: u64, max_bet: u64, field_double: u8) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(config_pda().0, false),
            AccountMeta::new(table_pda().0, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: Initialize {
            min_bet: min_bet.to_le_bytes(),
            max_bet: max_bet.to_le_bytes(),
            field_double,
            _padding: [0; 7],
        }
        .to_bytes(),
    }
}

/// Build an Open instruction committing to a seed for a new round.
pub fn open(signer: Pubkey, id: u64, commit: [u8; 32], sample_at: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(round_pda(id).0, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: Open {
            id: id.to_le_bytes(),
            commit,
            sample_at: sample_at.to_le_bytes(),
        }
        .to_bytes(),
    }
}

/// Build a Sample instruction capturing the round's slot hash.
pub fn sample(signer: Pubkey, id: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(round_pda(id).0, false),
            AccountMeta::new_readonly(sysvar::slot_hashes::ID, false),
        ],
        data: Sample {}.to_bytes(),
    }
}

/// Build a Reveal instruction disclosing the round's seed.
pub fn reveal(signer: Pubkey, id: u64, seed: [u8; 32]) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(round_pda(id).0, false),
        ],
        data: Reveal { seed }.to_bytes(),
    }
}

/// Build a PlaceBet instruction. `point` is 0 for kinds that carry no number.
pub fn place_bet(signer: Pubkey, round_id: u64, kind: u8, point: u8, amount: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new_readonly(config_pda().0, false),
            AccountMeta::new(table_pda().0, false),
            AccountMeta::new(position_pda(signer).0, false),
            AccountMeta::new_readonly(round_pda(round_id).0, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: PlaceBet {
            kind,
            point,
            _padding: [0; 6],
            amount: amount.to_le_bytes(),
        }
        .to_bytes(),
    }
}

/// Build a Settle instruction resolving a position against a revealed round.
pub fn settle(signer: Pubkey, authority: Pubkey, round_id: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new_readonly(config_pda().0, false),
            AccountMeta::new(table_pda().0, false),
            AccountMeta::new(position_pda(authority).0, false),
            AccountMeta::new_readonly(round_pda(round_id).0, false),
        ],
        data: Settle {}.to_bytes(),
    }
}

/// Build a Claim instruction withdrawing pending winnings.
pub fn claim(signer: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(table_pda().0, false),
            AccountMeta::new(position_pda(signer).0, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: Claim {}.to_bytes(),
    }
}

/// Build a FundHouse instruction adding lamports to the bankroll.
pub fn fund_house(signer: Pubkey, amount: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(table_pda().0, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: FundHouse {
            amount: amount.to_le_bytes(),
        }
        .to_bytes(),
    }
}
