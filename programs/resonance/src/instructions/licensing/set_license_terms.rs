use anchor_lang::prelude::*;

use crate::errors::ResonanceError;
use crate::events::LicenseTermsSet;
use crate::state::licensing::{LicenseTerms, LicenseType};
use crate::state::platform::MAX_BPS;
use crate::state::registry::Work;

#[derive(Accounts)]
pub struct SetLicenseTerms<'info> {
    #[account(mut)]
    pub holder: Signer<'info>,

    #[account(
        seeds = [b"work", &work.work_id.to_le_bytes()],
        bump = work.bump,
        constraint = work.holder == holder.key() @ ResonanceError::NotWorkHolder,
    )]
    pub work: Account<'info, Work>,

    /// One terms record per work, created on first use and overwritten in
    /// place on every later call.
    #[account(
        init_if_needed,
        payer = holder,
        space = LicenseTerms::SIZE,
        seeds = [b"license_terms".as_ref(), work.work_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub terms: Account<'info, LicenseTerms>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<SetLicenseTerms>,
    price: u64,
    active: bool,
    duration_seconds: i64,
    license_type: LicenseType,
    max_streams: u32,
    royalty_rate_bps: u16,
) -> Result<()> {
    require!(price > 0, LicensingError::ZeroPrice);
    require!(duration_seconds > 0, LicensingError::NonPositiveDuration);
    require!(max_streams > 0, LicensingError::ZeroMaxStreams);
    require!(
        royalty_rate_bps <= MAX_BPS,
        ResonanceError::InvalidRoyaltyRate
    );

    let terms = &mut ctx.accounts.terms;
    let clock = Clock::get()?;

    terms.work_id = ctx.accounts.work.work_id;
    terms.price = price;
    terms.active = active;
    terms.duration_seconds = duration_seconds;
    terms.license_type = license_type;
    terms.max_streams = max_streams;
    terms.royalty_rate_bps = royalty_rate_bps;
    terms.updated_at = clock.unix_timestamp;
    terms.bump = ctx.bumps.terms;

    emit!(LicenseTermsSet {
        work_id: terms.work_id,
        price,
        license_type,
        duration_seconds,
        max_streams,
        royalty_rate_bps,
    });

    msg!(
        "Terms set for work #{}: {} lamports, {:?}, {}s, {} streams, {} bps royalty",
        terms.work_id,
        price,
        license_type,
        duration_seconds,
        max_streams,
        royalty_rate_bps
    );

    Ok(())
}

#[error_code]
pub enum LicensingError {
    #[msg("License price must be greater than zero")]
    ZeroPrice,

    #[msg("License duration must be greater than zero")]
    NonPositiveDuration,

    #[msg("License must allow at least one stream")]
    ZeroMaxStreams,

    #[msg("License terms are not active")]
    TermsInactive,

    #[msg("License type does not match the offered terms")]
    LicenseTypeMismatch,

    #[msg("Payment is below the license price")]
    InsufficientPayment,

    #[msg("No valid license")]
    NoValidLicense,

    #[msg("Holder wallet does not match the work's holder")]
    HolderWalletMismatch,

    #[msg("Streaming authority has not been wired")]
    StreamingAuthorityUnset,

    #[msg("Caller is not the wired streaming authority")]
    NotStreamingAuthority,
}
