use anchor_lang::prelude::*;

use crate::events::StreamEnded;
use crate::instructions::licensing::set_license_terms::LicensingError;
use crate::instructions::streaming::start_stream::StreamingError;
use crate::state::licensing::{License, LicenseTerms};
use crate::state::streaming::{StreamHistory, StreamSession};

#[derive(Accounts)]
pub struct EndStream<'info> {
    #[account(mut)]
    pub listener: Signer<'info>,

    /// The open session; seeded by the listener, so only the listener that
    /// started it can land here. Closed on success, rent back to the
    /// listener.
    #[account(
        mut,
        close = listener,
        seeds = [b"stream_session", &session.work_id.to_le_bytes(), listener.key().as_ref()],
        bump = session.bump,
    )]
    pub session: Account<'info, StreamSession>,

    #[account(
        seeds = [b"license_terms", &session.work_id.to_le_bytes()],
        bump = terms.bump,
    )]
    pub terms: Account<'info, LicenseTerms>,

    #[account(
        mut,
        seeds = [b"license", &session.work_id.to_le_bytes(), listener.key().as_ref()],
        bump = license.bump,
    )]
    pub license: Account<'info, License>,

    #[account(
        init_if_needed,
        payer = listener,
        space = StreamHistory::SIZE,
        seeds = [b"stream_history".as_ref(), session.work_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub history: Account<'info, StreamHistory>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<EndStream>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let session = &ctx.accounts.session;
    let record = StreamSession::close(session, now);

    // The finished play still consumes one stream from the license, the same
    // transition the wired collaborator applies through record_stream.
    let license = &mut ctx.accounts.license;
    require!(
        license.is_valid(now, ctx.accounts.terms.max_streams),
        LicensingError::NoValidLicense
    );
    license.stream_count += 1;

    let history = &mut ctx.accounts.history;
    if history.work_id == 0 {
        history.work_id = session.work_id;
        history.bump = ctx.bumps.history;
    }
    require!(!history.is_full(), StreamingError::HistoryFull);
    history.sessions.push(record);

    emit!(StreamEnded {
        work_id: session.work_id,
        listener: session.listener,
        duration: now - session.started_at,
    });

    msg!(
        "Stream ended: work #{} by {} after {}s ({} plays on record)",
        session.work_id,
        session.listener,
        now - session.started_at,
        history.sessions.len()
    );

    Ok(())
}
