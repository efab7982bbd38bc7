use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
use state::licensing::LicenseType;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod resonance {
    use super::*;

    // === Platform ===

    /// Create the platform configuration; the signer becomes the platform
    /// authority
    pub fn initialize(ctx: Context<Initialize>, default_royalty_rate_bps: u16) -> Result<()> {
        instructions::initialize::handler(ctx, default_royalty_rate_bps)
    }

    /// Wire the streaming collaborator allowed to call record_stream.
    /// Callable once; immutable afterwards
    pub fn set_streaming_authority(
        ctx: Context<SetStreamingAuthority>,
        new_authority: Pubkey,
    ) -> Result<()> {
        instructions::set_streaming_authority::handler(ctx, new_authority)
    }

    // === Ownership Registry ===

    /// Register a new work; the signer becomes its holder
    pub fn mint_work(ctx: Context<MintWork>, reference: String) -> Result<()> {
        instructions::registry::mint_work::handler(ctx, reference)
    }

    /// Grant or clear the delegate allowed to transfer the work
    pub fn approve_delegate(
        ctx: Context<ApproveDelegate>,
        delegate: Option<Pubkey>,
    ) -> Result<()> {
        instructions::registry::approve_delegate::handler(ctx, delegate)
    }

    /// Move the work to a new holder; holder or approved delegate only
    pub fn transfer_work(ctx: Context<TransferWork>, to: Pubkey) -> Result<()> {
        instructions::registry::transfer_work::handler(ctx, to)
    }

    // === Licensing Ledger ===

    /// Create or overwrite the sale terms for a work; holder only
    pub fn set_license_terms(
        ctx: Context<SetLicenseTerms>,
        price: u64,
        active: bool,
        duration_seconds: i64,
        license_type: LicenseType,
        max_streams: u32,
        royalty_rate_bps: u16,
    ) -> Result<()> {
        instructions::licensing::set_license_terms::handler(
            ctx,
            price,
            active,
            duration_seconds,
            license_type,
            max_streams,
            royalty_rate_bps,
        )
    }

    /// Buy a license at the work's current terms, paying the royalty to the
    /// holder in the same transaction
    pub fn purchase_license(
        ctx: Context<PurchaseLicense>,
        license_type: LicenseType,
        payment: u64,
    ) -> Result<()> {
        instructions::licensing::purchase_license::handler(ctx, license_type, payment)
    }

    /// Revoke a licensee's license; holder only, idempotent
    pub fn revoke_license(ctx: Context<RevokeLicense>, licensee: Pubkey) -> Result<()> {
        instructions::licensing::revoke_license::handler(ctx, licensee)
    }

    /// Consume one stream from a license; wired streaming authority only
    pub fn record_stream(ctx: Context<RecordStream>, listener: Pubkey) -> Result<()> {
        instructions::licensing::record_stream::handler(ctx, listener)
    }

    // === Streaming ===

    /// Open a stream session; requires a valid license and a positive
    /// payment, which goes to the work's holder
    pub fn start_stream(ctx: Context<StartStream>, payment: u64) -> Result<()> {
        instructions::streaming::start_stream::handler(ctx, payment)
    }

    /// Close the caller's open session, consume one licensed stream, and
    /// append the play to the work's history
    pub fn end_stream(ctx: Context<EndStream>) -> Result<()> {
        instructions::streaming::end_stream::handler(ctx)
    }

    // === Curation ===

    /// Create a personal (non-curated) playlist
    pub fn create_playlist(
        ctx: Context<CreatePlaylist>,
        name: String,
        is_public: bool,
    ) -> Result<()> {
        instructions::curation::create_playlist::handler(ctx, name, is_public)
    }

    /// Publish a curated playlist; must contain at least one track
    pub fn create_curated_playlist(
        ctx: Context<CreateCuratedPlaylist>,
        name: String,
        description: String,
        track_ids: Vec<u64>,
        is_public: bool,
    ) -> Result<()> {
        instructions::curation::create_curated_playlist::handler(
            ctx,
            name,
            description,
            track_ids,
            is_public,
        )
    }

    /// Like a work; the per-work counter increments unconditionally
    pub fn like_music(ctx: Context<LikeMusic>, work_id: u64) -> Result<()> {
        instructions::curation::like_music::handler(ctx, work_id)
    }

    /// Like a playlist, crediting its creator's reputation
    pub fn like_playlist(ctx: Context<LikePlaylist>) -> Result<()> {
        instructions::curation::like_playlist::handler(ctx)
    }

    /// Follow a playlist, crediting its creator's reputation and feeding the
    /// follower's recommendations
    pub fn follow_playlist(ctx: Context<FollowPlaylist>) -> Result<()> {
        instructions::curation::follow_playlist::handler(ctx)
    }
}
