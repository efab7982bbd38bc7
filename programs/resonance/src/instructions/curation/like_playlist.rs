use anchor_lang::prelude::*;

use crate::events::PlaylistLiked;
use crate::state::curation::{CuratorStats, Playlist};

#[derive(Accounts)]
pub struct LikePlaylist<'info> {
    #[account(mut)]
    pub liker: Signer<'info>,

    #[account(
        mut,
        seeds = [b"playlist", &playlist.playlist_id.to_le_bytes()],
        bump = playlist.bump,
    )]
    pub playlist: Account<'info, Playlist>,

    /// The playlist creator's stats; a like on any of their playlists feeds
    /// their reputation.
    #[account(
        init_if_needed,
        payer = liker,
        space = CuratorStats::SIZE,
        seeds = [b"curator_stats", playlist.creator.as_ref()],
        bump,
    )]
    pub curator_stats: Account<'info, CuratorStats>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<LikePlaylist>) -> Result<()> {
    let clock = Clock::get()?;
    let playlist = &mut ctx.accounts.playlist;
    playlist.like_count += 1;

    let stats = &mut ctx.accounts.curator_stats;
    if stats.curator == Pubkey::default() {
        stats.curator = playlist.creator;
        stats.bump = ctx.bumps.curator_stats;
    }
    stats.total_likes += 1;
    stats.recalculate();
    stats.updated_at = clock.unix_timestamp;

    emit!(PlaylistLiked {
        playlist_id: playlist.playlist_id,
        liker: ctx.accounts.liker.key(),
    });

    msg!(
        "Playlist #{} liked ({} likes, creator reputation {})",
        playlist.playlist_id,
        playlist.like_count,
        stats.reputation
    );

    Ok(())
}
