use anchor_lang::prelude::*;

use crate::errors::ResonanceError;
use crate::state::licensing::License;
use crate::state::registry::Work;

#[derive(Accounts)]
#[instruction(licensee: Pubkey)]
pub struct RevokeLicense<'info> {
    pub holder: Signer<'info>,

    #[account(
        seeds = [b"work", &work.work_id.to_le_bytes()],
        bump = work.bump,
        constraint = work.holder == holder.key() @ ResonanceError::NotWorkHolder,
    )]
    pub work: Account<'info, Work>,

    #[account(
        mut,
        seeds = [b"license", &work.work_id.to_le_bytes(), licensee.as_ref()],
        bump = license.bump,
    )]
    pub license: Account<'info, License>,
}

/// One-way revocation. Revoking an already revoked license is a no-op, not
/// an error.
pub fn handler(ctx: Context<RevokeLicense>, licensee: Pubkey) -> Result<()> {
    let license = &mut ctx.accounts.license;

    if license.revoked {
        msg!(
            "License for work #{} held by {} was already revoked",
            license.work_id,
            licensee
        );
        return Ok(());
    }

    license.revoked = true;
    msg!("Revoked license for work #{} held by {}", license.work_id, licensee);

    Ok(())
}
