use anchor_lang::prelude::*;

use crate::events::PlaylistCreated;
use crate::state::curation::Playlist;
use crate::state::platform::PlatformConfig;

#[derive(Accounts)]
pub struct CreatePlaylist<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Account<'info, PlatformConfig>,

    #[account(
        init,
        payer = creator,
        space = Playlist::SIZE,
        seeds = [b"playlist", &config.next_playlist_id.to_le_bytes()],
        bump,
    )]
    pub playlist: Account<'info, Playlist>,

    pub system_program: Program<'info, System>,
}

/// A personal playlist: starts empty and does not touch the creator's
/// curator record.
pub fn handler(ctx: Context<CreatePlaylist>, name: String, is_public: bool) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let playlist = &mut ctx.accounts.playlist;
    let clock = Clock::get()?;

    playlist.playlist_id = config.next_playlist_id;
    playlist.creator = ctx.accounts.creator.key();
    playlist.set_name(&name);
    playlist.track_ids = Vec::new();
    playlist.is_public = is_public;
    playlist.curated = false;
    playlist.like_count = 0;
    playlist.follower_count = 0;
    playlist.created_at = clock.unix_timestamp;
    playlist.bump = ctx.bumps.playlist;

    config.next_playlist_id += 1;

    emit!(PlaylistCreated {
        playlist_id: playlist.playlist_id,
        creator: playlist.creator,
    });

    msg!(
        "Playlist #{} '{}' created by {}",
        playlist.playlist_id,
        playlist.name(),
        playlist.creator
    );

    Ok(())
}
