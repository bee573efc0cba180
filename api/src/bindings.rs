//! TypeScript bindings generation for frontend types.
//!
//! This module exports Rust types to TypeScript using ts-rs.
//! Enable with the `ts-bindings` feature flag.

// Re-export types with TS derive when feature is enabled
#[cfg(feature = "ts-bindings")]
mod ts_types {
    use ts_rs::TS;

    /// TypeScript export for the BetKind enum
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/fairdice/src/generated/")]
    #[allow(dead_code)]
    pub enum BetKindTS {
        // Line bets
        PassLine = 0,
        DontPass = 1,
        PassOdds = 2,
        DontPassOdds = 3,

        // Come bets (number specified in data)
        Come = 4,
        DontCome = 5,
        ComeOdds = 6,
        DontComeOdds = 7,

        // Number bets (number specified in data)
        Place = 8,
        Hardway = 9,

        // Single-roll bets
        Field = 10,
        AnySeven = 11,
        AnyCraps = 12,
        YoEleven = 13,
        Aces = 14,
        Twelve = 15,
    }

    /// TypeScript export for the Round lifecycle phase
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/fairdice/src/generated/")]
    #[allow(dead_code)]
    pub enum RoundPhaseTS {
        Open = 0,
        Sampled = 1,
        Revealed = 2,
    }

    /// TypeScript export for Table state
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/fairdice/src/generated/")]
    #[allow(dead_code)]
    pub struct TableTS {
        /// The current epoch number
        pub epoch_id: u64,
        /// The current point (0 = no point, 4/5/6/8/9/10 = established point)
        pub point: u8,
        /// Whether the table is on the come-out roll
        pub is_come_out: bool,
        /// The round id at which the current epoch started
        pub epoch_start_round: u64,
        /// Lamports available as house bankroll
        pub house_bankroll: u64,
        /// Total lamports paid out
        pub total_payouts: u64,
        /// Total lamports collected from losing bets
        pub total_collected: u64,
    }

    /// TypeScript export for the public audit record of a round
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/fairdice/src/generated/")]
    #[allow(dead_code)]
    pub struct RoundTS {
        /// The round number
        pub id: u64,
        /// The round authority, as a base58 string
        pub authority: String,
        /// Keccak-256 commitment to the seed
        pub commit: Vec<u8>,
        /// The revealed seed (zero until reveal)
        pub seed: Vec<u8>,
        /// The sampled slot hash (zero until sampled)
        pub slot_hash: Vec<u8>,
        /// keccak256(seed || slot_hash) (zero until revealed)
        pub value: Vec<u8>,
        /// The lifecycle phase
        pub phase: u64,
        /// The earliest slot at which the slot hash may be sampled
        pub sample_at: u64,
    }
}
