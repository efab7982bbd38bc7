use anchor_lang::prelude::*;

use crate::state::licensing::LicenseType;

// One event per ledger transition, emitted from the instruction that applies
// it. Query operations emit nothing.

#[event]
pub struct WorkMinted {
    pub work_id: u64,
    pub holder: Pubkey,
    pub reference: String,
}

#[event]
pub struct WorkTransferred {
    pub work_id: u64,
    pub from: Pubkey,
    pub to: Pubkey,
}

#[event]
pub struct LicenseTermsSet {
    pub work_id: u64,
    pub price: u64,
    pub license_type: LicenseType,
    pub duration_seconds: i64,
    pub max_streams: u32,
    pub royalty_rate_bps: u16,
}

#[event]
pub struct LicensePurchased {
    pub licensee: Pubkey,
    pub work_id: u64,
}

#[event]
pub struct RoyaltyPaid {
    pub work_id: u64,
    pub amount: u64,
}

#[event]
pub struct StreamStarted {
    pub work_id: u64,
    pub listener: Pubkey,
    pub amount: u64,
}

#[event]
pub struct StreamEnded {
    pub work_id: u64,
    pub listener: Pubkey,
    pub duration: i64,
}

#[event]
pub struct PlaylistCreated {
    pub playlist_id: u64,
    pub creator: Pubkey,
}

#[event]
pub struct MusicLiked {
    pub work_id: u64,
    pub liker: Pubkey,
}

#[event]
pub struct PlaylistLiked {
    pub playlist_id: u64,
    pub liker: Pubkey,
}

#[event]
pub struct PlaylistFollowed {
    pub playlist_id: u64,
    pub follower: Pubkey,
}
