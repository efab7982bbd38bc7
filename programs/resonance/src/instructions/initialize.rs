use anchor_lang::prelude::*;

use crate::errors::ResonanceError;
use crate::state::platform::{PlatformConfig, MAX_BPS};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = PlatformConfig::SIZE,
        seeds = [b"config"],
        bump,
    )]
    pub config: Account<'info, PlatformConfig>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, default_royalty_rate_bps: u16) -> Result<()> {
    require!(
        default_royalty_rate_bps <= MAX_BPS,
        ResonanceError::InvalidRoyaltyRate
    );

    let config = &mut ctx.accounts.config;
    config.authority = ctx.accounts.authority.key();
    config.streaming_authority = None;
    config.default_royalty_rate_bps = default_royalty_rate_bps;
    config.next_work_id = 1;
    config.next_playlist_id = 1;
    config.bump = ctx.bumps.config;

    msg!(
        "Platform initialized by {} (default royalty: {} bps)",
        config.authority,
        default_royalty_rate_bps
    );

    Ok(())
}
