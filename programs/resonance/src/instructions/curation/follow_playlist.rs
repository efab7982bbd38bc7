use anchor_lang::prelude::*;

use crate::events::PlaylistFollowed;
use crate::state::curation::{CuratorStats, ListenerProfile, Playlist};

#[derive(Accounts)]
pub struct FollowPlaylist<'info> {
    #[account(mut)]
    pub follower: Signer<'info>,

    #[account(
        mut,
        seeds = [b"playlist", &playlist.playlist_id.to_le_bytes()],
        bump = playlist.bump,
    )]
    pub playlist: Account<'info, Playlist>,

    #[account(
        init_if_needed,
        payer = follower,
        space = CuratorStats::SIZE,
        seeds = [b"curator_stats", playlist.creator.as_ref()],
        bump,
    )]
    pub curator_stats: Account<'info, CuratorStats>,

    /// The follower's profile; followed playlists feed their
    /// recommendations.
    #[account(
        init_if_needed,
        payer = follower,
        space = ListenerProfile::SIZE,
        seeds = [b"listener_profile", follower.key().as_ref()],
        bump,
    )]
    pub profile: Account<'info, ListenerProfile>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<FollowPlaylist>) -> Result<()> {
    let clock = Clock::get()?;
    let follower = ctx.accounts.follower.key();

    let playlist = &mut ctx.accounts.playlist;
    playlist.follower_count += 1;

    let stats = &mut ctx.accounts.curator_stats;
    if stats.curator == Pubkey::default() {
        stats.curator = playlist.creator;
        stats.bump = ctx.bumps.curator_stats;
    }
    stats.total_followers += 1;
    stats.recalculate();
    stats.updated_at = clock.unix_timestamp;

    let profile = &mut ctx.accounts.profile;
    if profile.wallet == Pubkey::default() {
        profile.wallet = follower;
        profile.bump = ctx.bumps.profile;
    }
    profile.record_follow(playlist.playlist_id);

    emit!(PlaylistFollowed {
        playlist_id: playlist.playlist_id,
        follower,
    });

    msg!(
        "Playlist #{} followed ({} followers, creator reputation {})",
        playlist.playlist_id,
        playlist.follower_count,
        stats.reputation
    );

    Ok(())
}
