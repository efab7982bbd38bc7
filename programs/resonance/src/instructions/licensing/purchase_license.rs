use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::events::{LicensePurchased, RoyaltyPaid};
use crate::instructions::licensing::set_license_terms::LicensingError;
use crate::state::licensing::{License, LicenseTerms, LicenseType};
use crate::state::registry::Work;

#[derive(Accounts)]
pub struct PurchaseLicense<'info> {
    #[account(mut)]
    pub licensee: Signer<'info>,

    #[account(
        seeds = [b"work", &work.work_id.to_le_bytes()],
        bump = work.bump,
    )]
    pub work: Account<'info, Work>,

    /// The holder's wallet; receives the royalty share of the price.
    #[account(
        mut,
        constraint = holder_wallet.key() == work.holder @ LicensingError::HolderWalletMismatch,
    )]
    pub holder_wallet: SystemAccount<'info>,

    #[account(
        seeds = [b"license_terms", &work.work_id.to_le_bytes()],
        bump = terms.bump,
    )]
    pub terms: Account<'info, LicenseTerms>,

    /// The (work, licensee) license. A re-purchase lands on the same PDA and
    /// overwrites the old record with a fresh one.
    #[account(
        init_if_needed,
        payer = licensee,
        space = License::SIZE,
        seeds = [b"license".as_ref(), work.work_id.to_le_bytes().as_ref(), licensee.key().as_ref()],
        bump,
    )]
    pub license: Account<'info, License>,

    /// Receives the non-royalty remainder of the price.
    #[account(
        mut,
        seeds = [b"treasury"],
        bump,
    )]
    pub treasury: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<PurchaseLicense>, license_type: LicenseType, payment: u64) -> Result<()> {
    let terms = &ctx.accounts.terms;
    let clock = Clock::get()?;

    require!(terms.active, LicensingError::TermsInactive);
    require!(
        terms.license_type == license_type,
        LicensingError::LicenseTypeMismatch
    );
    require!(payment >= terms.price, LicensingError::InsufficientPayment);

    // The buyer is charged exactly the list price: the royalty share goes to
    // the holder, the remainder to the treasury, in this same transaction.
    let royalty = terms.royalty_amount();
    let remainder = terms.price - royalty;

    if royalty > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.licensee.to_account_info(),
                    to: ctx.accounts.holder_wallet.to_account_info(),
                },
            ),
            royalty,
        )?;
    }
    if remainder > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.licensee.to_account_info(),
                    to: ctx.accounts.treasury.to_account_info(),
                },
            ),
            remainder,
        )?;
    }

    let work_id = ctx.accounts.work.work_id;
    let licensee = ctx.accounts.licensee.key();
    let license = &mut ctx.accounts.license;
    license.issue(licensee, work_id, clock.unix_timestamp, terms);
    license.bump = ctx.bumps.license;

    emit!(LicensePurchased { licensee, work_id });
    emit!(RoyaltyPaid {
        work_id,
        amount: royalty,
    });

    msg!(
        "License sold: work #{} to {} ({:?}, expires {}), royalty {} lamports to {}",
        work_id,
        licensee,
        license.license_type,
        license.expires_at,
        royalty,
        ctx.accounts.holder_wallet.key()
    );

    Ok(())
}
