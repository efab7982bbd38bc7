use anchor_lang::prelude::*;

use crate::errors::ResonanceError;
use crate::state::platform::PlatformConfig;

#[derive(Accounts)]
pub struct SetStreamingAuthority<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        constraint = config.authority == authority.key() @ ResonanceError::NotPlatformAuthority,
    )]
    pub config: Account<'info, PlatformConfig>,
}

/// One-shot wiring of the streaming collaborator. The named key becomes the
/// only signer `record_stream` accepts, and the binding cannot be changed
/// afterwards.
pub fn handler(ctx: Context<SetStreamingAuthority>, new_authority: Pubkey) -> Result<()> {
    require!(
        new_authority != Pubkey::default(),
        ResonanceError::InvalidAuthority
    );

    let config = &mut ctx.accounts.config;
    require!(
        config.streaming_authority.is_none(),
        ResonanceError::StreamingAuthorityAlreadySet
    );
    config.streaming_authority = Some(new_authority);

    msg!("Streaming authority wired to {}", new_authority);
    Ok(())
}
