//! Whole-ledger flows over the state layer, with an explicit clock value per
//! step. Account plumbing (PDAs, signers, lamport transfers) is the
//! runtime's concern; everything the ledgers decide — royalty splits,
//! validity windows, stream budgets, histories, reputation — is exercised
//! here.

use anchor_lang::prelude::Pubkey;

use resonance::state::curation::{
    playlist_appearances, popularity_score, recommended_music, top_curators, CuratorStats,
    ListenerProfile, Playlist, WorkEngagement, MAX_DESCRIPTION_LEN, MAX_NAME_LEN,
};
use resonance::state::licensing::{License, LicenseStatus, LicenseTerms, LicenseType};
use resonance::state::platform::DEFAULT_ROYALTY_RATE_BPS;
use resonance::state::registry::{Work, MAX_REFERENCE_LEN};
use resonance::state::streaming::{StreamHistory, StreamSession};

const SOL: u64 = 1_000_000_000;
const DAY: i64 = 86_400;

fn mint(work_id: u64, holder: Pubkey, reference: &str) -> Work {
    let mut work = Work {
        work_id,
        holder,
        approved_delegate: None,
        royalty_rate_bps: DEFAULT_ROYALTY_RATE_BPS,
        reference: [0u8; MAX_REFERENCE_LEN],
        reference_len: 0,
        minted_at: 0,
        bump: 255,
    };
    work.set_reference(reference);
    work
}

fn standard_terms(work_id: u64) -> LicenseTerms {
    LicenseTerms {
        work_id,
        price: SOL / 10,
        active: true,
        duration_seconds: DAY,
        license_type: LicenseType::Personal,
        max_streams: 100,
        royalty_rate_bps: DEFAULT_ROYALTY_RATE_BPS,
        updated_at: 0,
        bump: 255,
    }
}

fn purchase(terms: &LicenseTerms, licensee: Pubkey, now: i64) -> License {
    let mut license = License {
        licensee: Pubkey::default(),
        work_id: 0,
        purchased_at: 0,
        expires_at: 0,
        license_type: LicenseType::Personal,
        stream_count: 0,
        revoked: false,
        bump: 255,
    };
    license.issue(licensee, terms.work_id, now, terms);
    license
}

fn empty_profile(wallet: Pubkey) -> ListenerProfile {
    ListenerProfile {
        wallet,
        liked_works: Vec::new(),
        followed_playlists: Vec::new(),
        bump: 255,
    }
}

fn curated(playlist_id: u64, creator: Pubkey, tracks: &[u64]) -> Playlist {
    let mut playlist = Playlist {
        playlist_id,
        creator,
        name: [0u8; MAX_NAME_LEN],
        name_len: 0,
        description: [0u8; MAX_DESCRIPTION_LEN],
        description_len: 0,
        track_ids: tracks.to_vec(),
        is_public: true,
        curated: true,
        like_count: 0,
        follower_count: 0,
        created_at: 0,
        bump: 255,
    };
    playlist.set_name("Best Jazz 2024");
    playlist.set_description("A jazz selection");
    playlist
}

fn fresh_stats(curator: Pubkey) -> CuratorStats {
    CuratorStats {
        curator,
        total_likes: 0,
        total_followers: 0,
        playlist_count: 0,
        reputation: 0,
        updated_at: 0,
        bump: 255,
    }
}

#[test]
fn royalty_info_scales_exactly_with_price() {
    let artist = Pubkey::new_unique();
    let work = mint(1, artist, "ipfs://test");

    let (receiver, amount) = work.royalty_info(SOL);
    assert_eq!(receiver, artist);
    assert_eq!(amount, SOL / 10);

    let (_, amount) = work.royalty_info(2 * SOL);
    assert_eq!(amount, 2 * SOL / 10);
}

#[test]
fn purchase_splits_price_into_royalty_and_remainder() {
    let terms = standard_terms(1);
    let royalty = terms.royalty_amount();
    // 0.1 SOL at 10% royalty: exactly 0.01 SOL to the artist
    assert_eq!(royalty, SOL / 100);
    // the split consumes exactly the price
    assert_eq!(royalty + (terms.price - royalty), terms.price);
}

#[test]
fn license_expires_after_its_duration() {
    let terms = standard_terms(1);
    let listener = Pubkey::new_unique();
    let license = purchase(&terms, listener, 1_000);

    assert!(license.is_valid(1_000, terms.max_streams));
    assert!(license.is_valid(1_000 + DAY - 1, terms.max_streams));

    // one second past the window, nothing else changed
    assert!(!license.is_valid(1_000 + DAY + 1, terms.max_streams));
    assert_eq!(license.stream_count, 0);
    assert!(!license.revoked);
}

#[test]
fn commercial_terms_sell_commercial_licenses() {
    let mut terms = standard_terms(1);
    terms.price = SOL / 2;
    terms.license_type = LicenseType::Commercial;
    terms.duration_seconds = 30 * DAY;
    terms.max_streams = 1_000;
    terms.royalty_rate_bps = 2_000;

    let license = purchase(&terms, Pubkey::new_unique(), 0);
    assert_eq!(license.license_type, LicenseType::Commercial);
    assert_eq!(license.expires_at, 30 * DAY);
    // 20% of 0.5 SOL
    assert_eq!(terms.royalty_amount(), SOL / 10);
}

#[test]
fn revocation_kills_the_license_and_repeats_harmlessly() {
    let terms = standard_terms(1);
    let mut license = purchase(&terms, Pubkey::new_unique(), 0);
    assert!(license.is_valid(10, terms.max_streams));

    license.revoked = true;
    assert!(!license.is_valid(10, terms.max_streams));
    let snapshot = (license.stream_count, license.expires_at, license.revoked);

    // second revocation is a no-op
    license.revoked = true;
    assert_eq!(
        (license.stream_count, license.expires_at, license.revoked),
        snapshot
    );
}

#[test]
fn full_flow_mint_license_stream_history() {
    let artist = Pubkey::new_unique();
    let listener = Pubkey::new_unique();

    let work = mint(1, artist, "ipfs://QmTest123");
    let terms = standard_terms(work.work_id);

    // purchase at t=1000: artist royalty is exactly 0.01 SOL
    let mut license = purchase(&terms, listener, 1_000);
    assert_eq!(terms.royalty_amount(), SOL / 100);
    assert!(license.is_valid(1_000, terms.max_streams));

    // start a stream at t=2000
    let session = StreamSession {
        work_id: work.work_id,
        listener,
        started_at: 2_000,
        payment: SOL / 1_000,
        bump: 255,
    };

    // end it at t=2180: the play consumes one stream and lands in history
    let now = 2_180;
    let record = session.close(now);
    assert!(license.is_valid(now, terms.max_streams));
    license.stream_count += 1;

    let mut history = StreamHistory {
        work_id: work.work_id,
        sessions: Vec::new(),
        bump: 255,
    };
    history.sessions.push(record);

    assert_eq!(history.sessions.len(), 1);
    assert_eq!(history.sessions[0].duration, 180);
    assert_eq!(history.sessions[0].listener, listener);
    assert_eq!(license.stream_count, 1);
}

#[test]
fn exhausted_license_refuses_further_streams() {
    let mut terms = standard_terms(1);
    terms.max_streams = 2;
    let mut license = purchase(&terms, Pubkey::new_unique(), 0);

    for _ in 0..2 {
        assert!(license.is_valid(10, terms.max_streams));
        license.stream_count += 1;
    }
    assert!(!license.is_valid(10, terms.max_streams));
    assert_eq!(
        license.status(10, terms.max_streams),
        LicenseStatus::StreamsExhausted
    );
}

#[test]
fn engagement_ranks_curators_deterministically() {
    let curator1 = Pubkey::new_unique();
    let curator2 = Pubkey::new_unique();

    let mut stats1 = fresh_stats(curator1);
    let mut stats2 = fresh_stats(curator2);

    // both publish one curated playlist
    for stats in [&mut stats1, &mut stats2] {
        stats.playlist_count += 1;
        stats.recalculate();
    }
    assert_eq!(stats1.reputation, stats2.reputation);

    // only curator1's playlist gets a like and a follow
    stats1.total_likes += 1;
    stats1.recalculate();
    let after_like = stats1.reputation;
    stats1.total_followers += 1;
    stats1.recalculate();
    assert!(stats1.reputation >= after_like);

    let ranked = top_curators(&[
        (curator2, stats2.reputation),
        (curator1, stats1.reputation),
    ]);
    assert_eq!(ranked[0], curator1);
    assert_eq!(ranked.len(), 2);
}

#[test]
fn likes_and_follows_drive_recommendations() {
    let listener = Pubkey::new_unique();
    let curator = Pubkey::new_unique();

    let playlist = curated(1, curator, &[1, 2]);
    let mut profile = empty_profile(listener);
    profile.record_like(1);
    profile.record_follow(playlist.playlist_id);

    let recommended = recommended_music(&profile, &[&playlist]);
    assert!(!recommended.is_empty());
    assert_eq!(recommended, vec![1, 2]);
}

#[test]
fn popularity_reflects_all_engagement_signals() {
    let engagement = WorkEngagement {
        work_id: 1,
        like_count: 1,
        bump: 255,
    };
    let playlist = curated(1, Pubkey::new_unique(), &[1]);
    let appearances = playlist_appearances(&[&playlist], 1);
    assert_eq!(appearances, 1);

    let with_stream = popularity_score(engagement.like_count, 1, appearances);
    let without_stream = popularity_score(engagement.like_count, 0, appearances);
    assert!(with_stream > without_stream);
    assert_eq!(with_stream, 2 + 1 + 5);
}
