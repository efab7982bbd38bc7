use anchor_lang::prelude::*;

use crate::events::MusicLiked;
use crate::state::curation::{ListenerProfile, WorkEngagement};

#[derive(Accounts)]
#[instruction(work_id: u64)]
pub struct LikeMusic<'info> {
    #[account(mut)]
    pub liker: Signer<'info>,

    /// Per-work like counter, seeded from the raw id: likes count
    /// unconditionally, registered work or not.
    #[account(
        init_if_needed,
        payer = liker,
        space = WorkEngagement::SIZE,
        seeds = [b"engagement".as_ref(), work_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub engagement: Account<'info, WorkEngagement>,

    #[account(
        init_if_needed,
        payer = liker,
        space = ListenerProfile::SIZE,
        seeds = [b"listener_profile", liker.key().as_ref()],
        bump,
    )]
    pub profile: Account<'info, ListenerProfile>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<LikeMusic>, work_id: u64) -> Result<()> {
    let liker = ctx.accounts.liker.key();

    let engagement = &mut ctx.accounts.engagement;
    if engagement.work_id == 0 {
        engagement.work_id = work_id;
        engagement.bump = ctx.bumps.engagement;
    }
    engagement.like_count += 1;

    let profile = &mut ctx.accounts.profile;
    if profile.wallet == Pubkey::default() {
        profile.wallet = liker;
        profile.bump = ctx.bumps.profile;
    }
    if !profile.record_like(work_id) && !profile.liked_works.contains(&work_id) {
        // Like still counted above; only the recommendation memory is full.
        msg!("Listener profile full; like on work #{} not remembered", work_id);
    }

    emit!(MusicLiked { work_id, liker });

    msg!(
        "Work #{} liked by {} ({} likes total)",
        work_id,
        liker,
        engagement.like_count
    );

    Ok(())
}
