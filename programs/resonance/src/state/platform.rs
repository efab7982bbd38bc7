use anchor_lang::prelude::*;

/// Maximum basis points (100%)
pub const MAX_BPS: u16 = 10_000;

/// Royalty rate assigned to newly minted works when the platform is
/// initialized with the standard configuration: 10%.
pub const DEFAULT_ROYALTY_RATE_BPS: u16 = 1_000;

// =============================================================================
// PLATFORM CONFIG
// =============================================================================
// Global configuration singleton. Holds the deploying authority, the one-shot
// streaming wiring, the mint defaults, and the id counters that drive the
// work and playlist PDA sequences.
// =============================================================================

#[account]
pub struct PlatformConfig {
    /// Deploying authority; the only signer allowed to wire the streaming
    /// collaborator
    pub authority: Pubkey,
    /// The key authorized to call `record_stream` on behalf of listeners.
    /// Set once, immutable afterwards
    pub streaming_authority: Option<Pubkey>,
    /// Royalty rate stamped onto newly minted works (basis points)
    pub default_royalty_rate_bps: u16,
    /// Id assigned to the next minted work; starts at 1, strictly increasing
    pub next_work_id: u64,
    /// Id assigned to the next created playlist; starts at 1
    pub next_playlist_id: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl PlatformConfig {
    pub const SIZE: usize = 8 +  // discriminator
        32 +                     // authority
        33 +                     // streaming_authority (Option<Pubkey>)
        2 +                      // default_royalty_rate_bps
        8 +                      // next_work_id
        8 +                      // next_playlist_id
        1;                       // bump

    /// Whether `key` is the wired streaming collaborator.
    pub fn is_streaming_authority(&self, key: &Pubkey) -> bool {
        self.streaming_authority.as_ref() == Some(key)
    }
}
