use anchor_lang::prelude::*;

use crate::errors::ResonanceError;
use crate::events::WorkTransferred;
use crate::state::registry::Work;

#[derive(Accounts)]
pub struct TransferWork<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [b"work", &work.work_id.to_le_bytes()],
        bump = work.bump,
    )]
    pub work: Account<'info, Work>,
}

pub fn handler(ctx: Context<TransferWork>, to: Pubkey) -> Result<()> {
    require!(to != Pubkey::default(), ResonanceError::InvalidTransferTarget);

    let work = &mut ctx.accounts.work;
    require!(
        work.can_transfer(&ctx.accounts.caller.key()),
        ResonanceError::NotHolderOrDelegate
    );

    let from = work.holder;
    work.holder = to;
    // Approvals do not survive a change of holder.
    work.approved_delegate = None;

    emit!(WorkTransferred {
        work_id: work.work_id,
        from,
        to,
    });

    msg!("Work #{} transferred from {} to {}", work.work_id, from, to);

    Ok(())
}
