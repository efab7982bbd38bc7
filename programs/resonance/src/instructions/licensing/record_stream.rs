use anchor_lang::prelude::*;

use crate::instructions::licensing::set_license_terms::LicensingError;
use crate::state::licensing::{License, LicenseTerms};
use crate::state::platform::PlatformConfig;

#[derive(Accounts)]
#[instruction(listener: Pubkey)]
pub struct RecordStream<'info> {
    /// Must be the wired streaming authority.
    pub authority: Signer<'info>,

    #[account(
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Account<'info, PlatformConfig>,

    #[account(
        seeds = [b"license_terms", &terms.work_id.to_le_bytes()],
        bump = terms.bump,
    )]
    pub terms: Account<'info, LicenseTerms>,

    #[account(
        mut,
        seeds = [b"license", &terms.work_id.to_le_bytes(), listener.as_ref()],
        bump = license.bump,
    )]
    pub license: Account<'info, License>,
}

/// Consume one stream from the listener's license. Only the collaborator
/// wired through `set_streaming_authority` may call this; the in-program
/// streaming ledger applies the same transition itself in `end_stream`.
pub fn handler(ctx: Context<RecordStream>, listener: Pubkey) -> Result<()> {
    let config = &ctx.accounts.config;
    require!(
        config.streaming_authority.is_some(),
        LicensingError::StreamingAuthorityUnset
    );
    require!(
        config.is_streaming_authority(&ctx.accounts.authority.key()),
        LicensingError::NotStreamingAuthority
    );

    let clock = Clock::get()?;
    let terms = &ctx.accounts.terms;
    let license = &mut ctx.accounts.license;

    require!(
        license.is_valid(clock.unix_timestamp, terms.max_streams),
        LicensingError::NoValidLicense
    );
    license.stream_count += 1;

    msg!(
        "Stream recorded for work #{} by {} ({}/{})",
        license.work_id,
        listener,
        license.stream_count,
        terms.max_streams
    );

    Ok(())
}
