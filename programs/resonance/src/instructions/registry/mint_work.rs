use anchor_lang::prelude::*;

use crate::errors::ResonanceError;
use crate::events::WorkMinted;
use crate::state::platform::PlatformConfig;
use crate::state::registry::{Work, MAX_REFERENCE_LEN};

#[derive(Accounts)]
pub struct MintWork<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Account<'info, PlatformConfig>,

    /// The new work, at the next slot of the id sequence. Seeding by the
    /// counter makes ids unique and strictly increasing from 1.
    #[account(
        init,
        payer = creator,
        space = Work::SIZE,
        seeds = [b"work".as_ref(), config.next_work_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub work: Account<'info, Work>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<MintWork>, reference: String) -> Result<()> {
    require!(!reference.is_empty(), ResonanceError::EmptyReference);
    require!(
        reference.len() <= MAX_REFERENCE_LEN,
        ResonanceError::ReferenceTooLong
    );

    let config = &mut ctx.accounts.config;
    let work = &mut ctx.accounts.work;
    let clock = Clock::get()?;

    work.work_id = config.next_work_id;
    work.holder = ctx.accounts.creator.key();
    work.approved_delegate = None;
    work.royalty_rate_bps = config.default_royalty_rate_bps;
    work.set_reference(&reference);
    work.minted_at = clock.unix_timestamp;
    work.bump = ctx.bumps.work;

    config.next_work_id += 1;

    emit!(WorkMinted {
        work_id: work.work_id,
        holder: work.holder,
        reference: reference.clone(),
    });

    msg!("Minted work #{} ({}) for {}", work.work_id, reference, work.holder);

    Ok(())
}
