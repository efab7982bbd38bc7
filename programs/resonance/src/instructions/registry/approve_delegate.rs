use anchor_lang::prelude::*;

use crate::errors::ResonanceError;
use crate::state::registry::Work;

#[derive(Accounts)]
pub struct ApproveDelegate<'info> {
    pub holder: Signer<'info>,

    #[account(
        mut,
        seeds = [b"work", &work.work_id.to_le_bytes()],
        bump = work.bump,
        constraint = work.holder == holder.key() @ ResonanceError::NotWorkHolder,
    )]
    pub work: Account<'info, Work>,
}

/// Grant or clear (with `None`) the single delegate allowed to transfer the
/// work on the holder's behalf.
pub fn handler(ctx: Context<ApproveDelegate>, delegate: Option<Pubkey>) -> Result<()> {
    if let Some(delegate) = delegate {
        require!(delegate != Pubkey::default(), ResonanceError::InvalidAuthority);
    }

    let work = &mut ctx.accounts.work;
    work.approved_delegate = delegate;

    match delegate {
        Some(delegate) => msg!("Work #{}: approved delegate {}", work.work_id, delegate),
        None => msg!("Work #{}: delegate cleared", work.work_id),
    }

    Ok(())
}
