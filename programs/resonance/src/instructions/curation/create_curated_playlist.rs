use anchor_lang::prelude::*;

use crate::events::PlaylistCreated;
use crate::state::curation::{CuratorDirectory, CuratorStats, Playlist, MAX_PLAYLIST_TRACKS};
use crate::state::platform::PlatformConfig;

#[derive(Accounts)]
pub struct CreateCuratedPlaylist<'info> {
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

    #[account(
        init_if_needed,
        payer = creator,
        space = CuratorStats::SIZE,
        seeds = [b"curator_stats", creator.key().as_ref()],
        bump,
    )]
    pub curator_stats: Account<'info, CuratorStats>,

    #[account(
        init_if_needed,
        payer = creator,
        space = CuratorDirectory::SIZE,
        seeds = [b"curator_directory"],
        bump,
    )]
    pub directory: Account<'info, CuratorDirectory>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateCuratedPlaylist>,
    name: String,
    description: String,
    track_ids: Vec<u64>,
    is_public: bool,
) -> Result<()> {
    require!(!track_ids.is_empty(), CurationError::EmptyTrackList);
    require!(
        track_ids.len() <= MAX_PLAYLIST_TRACKS,
        CurationError::TooManyTracks
    );

    let config = &mut ctx.accounts.config;
    let playlist = &mut ctx.accounts.playlist;
    let creator = ctx.accounts.creator.key();
    let clock = Clock::get()?;

    playlist.playlist_id = config.next_playlist_id;
    playlist.creator = creator;
    playlist.set_name(&name);
    playlist.set_description(&description);
    playlist.track_ids = track_ids;
    playlist.is_public = is_public;
    playlist.curated = true;
    playlist.like_count = 0;
    playlist.follower_count = 0;
    playlist.created_at = clock.unix_timestamp;
    playlist.bump = ctx.bumps.playlist;

    config.next_playlist_id += 1;

    let stats = &mut ctx.accounts.curator_stats;
    if stats.curator == Pubkey::default() {
        stats.curator = creator;
        stats.bump = ctx.bumps.curator_stats;
    }
    stats.playlist_count += 1;
    stats.recalculate();
    stats.updated_at = clock.unix_timestamp;

    let directory = &mut ctx.accounts.directory;
    if directory.curators.is_empty() {
        directory.bump = ctx.bumps.directory;
    }
    if !directory.contains(&creator) {
        require!(!directory.is_full(), CurationError::DirectoryFull);
        directory.curators.push(creator);
    }

    emit!(PlaylistCreated {
        playlist_id: playlist.playlist_id,
        creator,
    });

    msg!(
        "Curated playlist #{} '{}' by {} ({} tracks, reputation now {})",
        playlist.playlist_id,
        playlist.name(),
        creator,
        playlist.track_ids.len(),
        stats.reputation
    );

    Ok(())
}

#[error_code]
pub enum CurationError {
    #[msg("Playlist must contain music")]
    EmptyTrackList,

    #[msg("Playlist exceeds the maximum track count")]
    TooManyTracks,

    #[msg("Curator directory is full")]
    DirectoryFull,
}
