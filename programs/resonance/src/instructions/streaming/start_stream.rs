use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::events::StreamStarted;
use crate::instructions::licensing::set_license_terms::LicensingError;
use crate::state::licensing::{License, LicenseTerms};
use crate::state::registry::Work;
use crate::state::streaming::StreamSession;

#[derive(Accounts)]
pub struct StartStream<'info> {
    #[account(mut)]
    pub listener: Signer<'info>,

    #[account(
        seeds = [b"work", &work.work_id.to_le_bytes()],
        bump = work.bump,
    )]
    pub work: Account<'info, Work>,

    /// The holder's wallet; stream payments go straight to the artist.
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

    #[account(
        seeds = [b"license", &work.work_id.to_le_bytes(), listener.key().as_ref()],
        bump = license.bump,
    )]
    pub license: Account<'info, License>,

    /// The open session marker for (work, listener). Existing and already
    /// populated means a second concurrent start, which is rejected.
    #[account(
        init_if_needed,
        payer = listener,
        space = StreamSession::SIZE,
        seeds = [b"stream_session".as_ref(), work.work_id.to_le_bytes().as_ref(), listener.key().as_ref()],
        bump,
    )]
    pub session: Account<'info, StreamSession>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<StartStream>, payment: u64) -> Result<()> {
    let clock = Clock::get()?;

    require!(payment > 0, StreamingError::ZeroPayment);
    require!(
        ctx.accounts.session.listener == Pubkey::default(),
        StreamingError::SessionAlreadyOpen
    );
    require!(
        ctx.accounts
            .license
            .is_valid(clock.unix_timestamp, ctx.accounts.terms.max_streams),
        LicensingError::NoValidLicense
    );

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.listener.to_account_info(),
                to: ctx.accounts.holder_wallet.to_account_info(),
            },
        ),
        payment,
    )?;

    let session = &mut ctx.accounts.session;
    session.work_id = ctx.accounts.work.work_id;
    session.listener = ctx.accounts.listener.key();
    session.started_at = clock.unix_timestamp;
    session.payment = payment;
    session.bump = ctx.bumps.session;

    emit!(StreamStarted {
        work_id: session.work_id,
        listener: session.listener,
        amount: payment,
    });

    msg!(
        "Stream started: work #{} by {} ({} lamports to holder)",
        session.work_id,
        session.listener,
        payment
    );

    Ok(())
}

#[error_code]
pub enum StreamingError {
    #[msg("Stream payment must be greater than zero")]
    ZeroPayment,

    #[msg("A stream session is already open for this work")]
    SessionAlreadyOpen,

    #[msg("Stream history for this work is full")]
    HistoryFull,
}
