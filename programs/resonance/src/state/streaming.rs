use anchor_lang::prelude::*;

/// Closed sessions retained per work. History accounts are sized for this
/// many records at creation; older records are not evicted.
pub const MAX_STREAM_HISTORY: usize = 64;

// =============================================================================
// STREAMING LEDGER
// =============================================================================
// An open session is the existence of a StreamSession PDA for the
// (work, listener) pair; the account is closed when the stream ends, which
// both refunds the rent and re-arms the pair for the next session. Closed
// sessions are appended, oldest first, to the per-work StreamHistory.
// =============================================================================

#[account]
pub struct StreamSession {
    /// The work being streamed
    pub work_id: u64,
    /// The listening account; only it can end the session
    pub listener: Pubkey,
    /// When the stream was opened
    pub started_at: i64,
    /// Lamports paid to the holder when the stream opened
    pub payment: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl StreamSession {
    pub const SIZE: usize = 8 +  // discriminator
        8 +                      // work_id
        32 +                     // listener
        8 +                      // started_at
        8 +                      // payment
        1;                       // bump

    /// Close the session at `now`, producing the history record.
    pub fn close(&self, now: i64) -> StreamRecord {
        StreamRecord {
            listener: self.listener,
            started_at: self.started_at,
            ended_at: now,
            duration: now - self.started_at,
            payment: self.payment,
        }
    }
}

/// One finished stream, as kept in the per-work history.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct StreamRecord {
    pub listener: Pubkey,
    pub started_at: i64,
    pub ended_at: i64,
    pub duration: i64,
    pub payment: u64,
}

impl StreamRecord {
    pub const SIZE: usize = 32 + 8 + 8 + 8 + 8;
}

#[account]
pub struct StreamHistory {
    /// The work this history belongs to
    pub work_id: u64,
    /// Closed sessions, oldest first
    pub sessions: Vec<StreamRecord>,
    /// PDA bump seed
    pub bump: u8,
}

impl StreamHistory {
    pub const SIZE: usize = 8 +                              // discriminator
        8 +                                                  // work_id
        4 + MAX_STREAM_HISTORY * StreamRecord::SIZE +        // sessions
        1;                                                   // bump

    pub fn is_full(&self) -> bool {
        self.sessions.len() >= MAX_STREAM_HISTORY
    }
}
