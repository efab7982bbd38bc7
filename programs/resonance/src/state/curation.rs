use anchor_lang::prelude::*;

/// Maximum tracks in a curated playlist.
pub const MAX_PLAYLIST_TRACKS: usize = 32;

/// Maximum stored length of a playlist name, in bytes.
pub const MAX_NAME_LEN: usize = 64;

/// Maximum stored length of a playlist description, in bytes.
pub const MAX_DESCRIPTION_LEN: usize = 128;

/// Maximum curators the directory can hold.
pub const MAX_CURATORS: usize = 128;

/// Maximum liked works / followed playlists remembered per listener.
pub const MAX_PROFILE_ENTRIES: usize = 64;

// =============================================================================
// CURATION LEDGER
// =============================================================================
// Playlists, likes, follows, and the reputation that curators accrue from
// them. Reputation is a pure weighted sum, so it is deterministic, cheap to
// recompute on every engagement, and can only grow as likes, follows, and
// playlists accumulate. Rankings, popularity, and recommendations are pure
// functions over fetched accounts.
// =============================================================================

/// Reputation weight of one playlist like received.
pub const LIKE_WEIGHT: u64 = 2;

/// Reputation weight of one playlist follower. A follow is a stronger
/// commitment than a like.
pub const FOLLOWER_WEIGHT: u64 = 3;

/// Reputation weight of one published curated playlist.
pub const PLAYLIST_WEIGHT: u64 = 10;

/// Popularity weight of one like on a work.
pub const POPULARITY_LIKE_WEIGHT: u64 = 2;

/// Popularity weight of one finished stream.
pub const POPULARITY_STREAM_WEIGHT: u64 = 1;

/// Popularity weight of one curated-playlist appearance. Appearances are the
/// scarcest signal, so they weigh most.
pub const POPULARITY_PLAYLIST_WEIGHT: u64 = 5;

// =============================================================================
// PLAYLIST ACCOUNT
// =============================================================================

#[account]
pub struct Playlist {
    /// Sequential id, assigned from the platform counter
    pub playlist_id: u64,
    /// The account that created the playlist
    pub creator: Pubkey,
    /// Display name
    pub name: [u8; MAX_NAME_LEN],
    pub name_len: u16,
    /// Display description (curated playlists only)
    pub description: [u8; MAX_DESCRIPTION_LEN],
    pub description_len: u16,
    /// Work ids on the playlist; non-empty for curated playlists
    pub track_ids: Vec<u64>,
    pub is_public: bool,
    /// Whether this playlist counts toward its creator's curator record
    pub curated: bool,
    pub like_count: u64,
    pub follower_count: u64,
    pub created_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl Playlist {
    pub const SIZE: usize = 8 +              // discriminator
        8 +                                  // playlist_id
        32 +                                 // creator
        MAX_NAME_LEN +                       // name
        2 +                                  // name_len
        MAX_DESCRIPTION_LEN +                // description
        2 +                                  // description_len
        4 + MAX_PLAYLIST_TRACKS * 8 +        // track_ids
        1 +                                  // is_public
        1 +                                  // curated
        8 +                                  // like_count
        8 +                                  // follower_count
        8 +                                  // created_at
        1;                                   // bump

    /// Truncating copy of `name` into the fixed field.
    pub fn set_name(&mut self, name: &str) {
        let bytes = name.as_bytes();
        let len = bytes.len().min(MAX_NAME_LEN);
        self.name[..len].copy_from_slice(&bytes[..len]);
        self.name_len = len as u16;
    }

    /// Truncating copy of `description` into the fixed field.
    pub fn set_description(&mut self, description: &str) {
        let bytes = description.as_bytes();
        let len = bytes.len().min(MAX_DESCRIPTION_LEN);
        self.description[..len].copy_from_slice(&bytes[..len]);
        self.description_len = len as u16;
    }

    pub fn name(&self) -> &str {
        core::str::from_utf8(&self.name[..self.name_len as usize]).unwrap_or("")
    }

    pub fn contains_track(&self, work_id: u64) -> bool {
        self.track_ids.contains(&work_id)
    }
}

// =============================================================================
// CURATOR STATS ACCOUNT
// =============================================================================
// Maintained per creator; recomputed on every like, follow, and curated
// playlist affecting them.
// =============================================================================

#[account]
pub struct CuratorStats {
    /// The curator these stats belong to
    pub curator: Pubkey,
    /// Likes received across the curator's playlists
    pub total_likes: u64,
    /// Followers across the curator's playlists
    pub total_followers: u64,
    /// Curated playlists published
    pub playlist_count: u32,
    /// Weighted reputation score, see `recalculate`
    pub reputation: u64,
    pub updated_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl CuratorStats {
    pub const SIZE: usize = 8 +  // discriminator
        32 +                     // curator
        8 +                      // total_likes
        8 +                      // total_followers
        4 +                      // playlist_count
        8 +                      // reputation
        8 +                      // updated_at
        1;                       // bump

    /// Recompute reputation from the engagement counters.
    ///
    /// reputation = likes * 2 + followers * 3 + playlists * 10
    ///
    /// A linear sum with fixed positive weights: every like, follow, or
    /// published playlist moves the score up, never down, and equal inputs
    /// always produce equal scores.
    pub fn recalculate(&mut self) {
        self.reputation = self
            .total_likes
            .saturating_mul(LIKE_WEIGHT)
            .saturating_add(self.total_followers.saturating_mul(FOLLOWER_WEIGHT))
            .saturating_add((self.playlist_count as u64).saturating_mul(PLAYLIST_WEIGHT));
    }
}

// =============================================================================
// CURATOR DIRECTORY ACCOUNT
// =============================================================================

#[account]
pub struct CuratorDirectory {
    /// Every account that has published at least one curated playlist
    pub curators: Vec<Pubkey>,
    /// PDA bump seed
    pub bump: u8,
}

impl CuratorDirectory {
    pub const SIZE: usize = 8 +          // discriminator
        4 + MAX_CURATORS * 32 +          // curators
        1;                               // bump

    pub fn contains(&self, curator: &Pubkey) -> bool {
        self.curators.contains(curator)
    }

    pub fn is_full(&self) -> bool {
        self.curators.len() >= MAX_CURATORS
    }
}

// =============================================================================
// WORK ENGAGEMENT ACCOUNT
// =============================================================================

/// Per-work like counter. Kept separate from the registry's Work account so
/// likes need no registry lookup and count even for ids not yet minted.
#[account]
pub struct WorkEngagement {
    pub work_id: u64,
    pub like_count: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl WorkEngagement {
    pub const SIZE: usize = 8 + 8 + 8 + 1;
}

// =============================================================================
// LISTENER PROFILE ACCOUNT
// =============================================================================

/// Per-listener engagement record feeding recommendations. Both lists are
/// deduplicated sets in first-engagement order.
#[account]
pub struct ListenerProfile {
    pub wallet: Pubkey,
    pub liked_works: Vec<u64>,
    pub followed_playlists: Vec<u64>,
    /// PDA bump seed
    pub bump: u8,
}

impl ListenerProfile {
    pub const SIZE: usize = 8 +              // discriminator
        32 +                                 // wallet
        4 + MAX_PROFILE_ENTRIES * 8 +        // liked_works
        4 + MAX_PROFILE_ENTRIES * 8 +        // followed_playlists
        1;                                   // bump

    /// Remember a liked work. Returns false when the entry was already
    /// present or the list is at capacity; the like itself still counts.
    pub fn record_like(&mut self, work_id: u64) -> bool {
        if self.liked_works.contains(&work_id) || self.liked_works.len() >= MAX_PROFILE_ENTRIES {
            return false;
        }
        self.liked_works.push(work_id);
        true
    }

    /// Remember a followed playlist, same contract as `record_like`.
    pub fn record_follow(&mut self, playlist_id: u64) -> bool {
        if self.followed_playlists.contains(&playlist_id)
            || self.followed_playlists.len() >= MAX_PROFILE_ENTRIES
        {
            return false;
        }
        self.followed_playlists.push(playlist_id);
        true
    }
}

// =============================================================================
// RANKING, POPULARITY, RECOMMENDATION
// =============================================================================
// Pure read-side layer. Clients fetch the accounts and evaluate these
// locally; tests drive them directly.
// =============================================================================

/// Rank curators by reputation, highest first. Ties break on pubkey byte
/// order, ascending, so equal scores always rank the same way.
pub fn rank_curators(entries: &[(Pubkey, u64)]) -> Vec<Pubkey> {
    let mut ranked: Vec<(Pubkey, u64)> = entries.to_vec();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.to_bytes().cmp(&b.0.to_bytes())));
    ranked.into_iter().map(|(curator, _)| curator).collect()
}

/// The ranked subset of curators with non-zero reputation.
pub fn top_curators(entries: &[(Pubkey, u64)]) -> Vec<Pubkey> {
    let scored: Vec<(Pubkey, u64)> = entries
        .iter()
        .copied()
        .filter(|(_, reputation)| *reputation > 0)
        .collect();
    rank_curators(&scored)
}

/// Popularity of a work from its engagement signals:
/// likes * 2 + streams * 1 + curated-playlist appearances * 5.
pub fn popularity_score(like_count: u64, stream_count: u64, playlist_appearances: u64) -> u64 {
    like_count
        .saturating_mul(POPULARITY_LIKE_WEIGHT)
        .saturating_add(stream_count.saturating_mul(POPULARITY_STREAM_WEIGHT))
        .saturating_add(playlist_appearances.saturating_mul(POPULARITY_PLAYLIST_WEIGHT))
}

/// How many curated playlists contain `work_id`.
pub fn playlist_appearances(playlists: &[&Playlist], work_id: u64) -> u64 {
    playlists
        .iter()
        .filter(|p| p.curated && p.contains_track(work_id))
        .count() as u64
}

/// Orders the works recommended to a listener. The output contract — every
/// id at most once — holds for any implementation; the ordering heuristic is
/// the implementation's choice.
pub trait RecommendationStrategy {
    fn recommend(&self, profile: &ListenerProfile, followed: &[&Playlist]) -> Vec<u64>;
}

/// Default strategy: works the listener liked, in first-like order, then the
/// tracks of playlists they follow, in follow order; first occurrence wins.
pub struct EngagementOrder;

impl RecommendationStrategy for EngagementOrder {
    fn recommend(&self, profile: &ListenerProfile, followed: &[&Playlist]) -> Vec<u64> {
        let mut recommended: Vec<u64> = Vec::new();
        for &work_id in &profile.liked_works {
            if !recommended.contains(&work_id) {
                recommended.push(work_id);
            }
        }
        for playlist in followed {
            for &work_id in &playlist.track_ids {
                if !recommended.contains(&work_id) {
                    recommended.push(work_id);
                }
            }
        }
        recommended
    }
}

/// Recommendations under the default strategy.
pub fn recommended_music(profile: &ListenerProfile, followed: &[&Playlist]) -> Vec<u64> {
    EngagementOrder.recommend(profile, followed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stats(likes: u64, followers: u64, playlists: u32) -> CuratorStats {
        let mut s = CuratorStats {
            curator: Pubkey::new_unique(),
            total_likes: likes,
            total_followers: followers,
            playlist_count: playlists,
            reputation: 0,
            updated_at: 0,
            bump: 255,
        };
        s.recalculate();
        s
    }

    fn playlist(id: u64, curated: bool, tracks: &[u64]) -> Playlist {
        let mut p = Playlist {
            playlist_id: id,
            creator: Pubkey::new_unique(),
            name: [0u8; MAX_NAME_LEN],
            name_len: 0,
            description: [0u8; MAX_DESCRIPTION_LEN],
            description_len: 0,
            track_ids: tracks.to_vec(),
            is_public: true,
            curated,
            like_count: 0,
            follower_count: 0,
            created_at: 0,
            bump: 255,
        };
        p.set_name("Best Jazz 2024");
        p
    }

    #[test]
    fn reputation_uses_the_documented_weights() {
        assert_eq!(stats(0, 0, 0).reputation, 0);
        assert_eq!(stats(1, 0, 0).reputation, LIKE_WEIGHT);
        assert_eq!(stats(0, 1, 0).reputation, FOLLOWER_WEIGHT);
        assert_eq!(stats(0, 0, 1).reputation, PLAYLIST_WEIGHT);
        assert_eq!(
            stats(3, 2, 1).reputation,
            3 * LIKE_WEIGHT + 2 * FOLLOWER_WEIGHT + PLAYLIST_WEIGHT
        );
    }

    #[test]
    fn engagement_never_lowers_reputation() {
        let mut s = stats(5, 5, 2);
        let mut previous = s.reputation;
        for _ in 0..10 {
            s.total_likes += 1;
            s.recalculate();
            assert!(s.reputation >= previous);
            previous = s.reputation;

            s.total_followers += 1;
            s.recalculate();
            assert!(s.reputation >= previous);
            previous = s.reputation;
        }
    }

    #[test]
    fn ranking_is_descending_with_pubkey_tie_break() {
        let a = Pubkey::new_from_array([1u8; 32]);
        let b = Pubkey::new_from_array([2u8; 32]);
        let c = Pubkey::new_from_array([3u8; 32]);
        let ranked = rank_curators(&[(c, 50), (a, 10), (b, 50)]);
        // b and c tie at 50; b's bytes sort first
        assert_eq!(ranked, vec![b, c, a]);
    }

    #[test]
    fn top_curators_drops_zero_reputation() {
        let active = Pubkey::new_unique();
        let idle = Pubkey::new_unique();
        let top = top_curators(&[(active, 12), (idle, 0)]);
        assert_eq!(top, vec![active]);
    }

    #[test]
    fn appearances_count_only_curated_playlists() {
        let curated_with = playlist(1, true, &[1, 2]);
        let curated_without = playlist(2, true, &[3]);
        let personal_with = playlist(3, false, &[1]);
        let all = [&curated_with, &curated_without, &personal_with];
        assert_eq!(playlist_appearances(&all, 1), 1);
        assert_eq!(playlist_appearances(&all, 3), 1);
        assert_eq!(playlist_appearances(&all, 9), 0);
    }

    #[test]
    fn popularity_combines_the_three_signals() {
        assert_eq!(popularity_score(0, 0, 0), 0);
        assert_eq!(
            popularity_score(4, 3, 2),
            4 * POPULARITY_LIKE_WEIGHT
                + 3 * POPULARITY_STREAM_WEIGHT
                + 2 * POPULARITY_PLAYLIST_WEIGHT
        );
    }

    #[test]
    fn recommendations_deduplicate_across_sources() {
        let mut profile = ListenerProfile {
            wallet: Pubkey::new_unique(),
            liked_works: Vec::new(),
            followed_playlists: Vec::new(),
            bump: 255,
        };
        assert!(profile.record_like(1));
        assert!(!profile.record_like(1));
        assert!(profile.record_follow(7));

        let followed = playlist(7, true, &[1, 2, 2, 3]);
        let recommended = recommended_music(&profile, &[&followed]);
        assert_eq!(recommended, vec![1, 2, 3]);
    }

    #[test]
    fn any_engagement_yields_recommendations() {
        let mut profile = ListenerProfile {
            wallet: Pubkey::new_unique(),
            liked_works: Vec::new(),
            followed_playlists: Vec::new(),
            bump: 255,
        };
        profile.record_like(42);
        assert!(!recommended_music(&profile, &[]).is_empty());
    }

    #[test]
    fn profile_caps_without_losing_the_count() {
        let mut profile = ListenerProfile {
            wallet: Pubkey::new_unique(),
            liked_works: Vec::new(),
            followed_playlists: Vec::new(),
            bump: 255,
        };
        for id in 0..MAX_PROFILE_ENTRIES as u64 {
            assert!(profile.record_like(id));
        }
        assert!(!profile.record_like(999));
        assert_eq!(profile.liked_works.len(), MAX_PROFILE_ENTRIES);
    }

    proptest! {
        #[test]
        fn reputation_is_monotone_in_every_counter(
            likes in 0u64..1_000_000,
            followers in 0u64..1_000_000,
            playlists in 0u32..10_000,
            extra_likes in 0u64..1_000,
            extra_followers in 0u64..1_000,
        ) {
            let before = stats(likes, followers, playlists).reputation;
            let after = stats(
                likes + extra_likes,
                followers + extra_followers,
                playlists,
            ).reputation;
            prop_assert!(after >= before);
        }

        #[test]
        fn ranking_is_always_non_increasing(
            scores in proptest::collection::vec(0u64..10_000, 0..20),
        ) {
            let entries: Vec<(Pubkey, u64)> = scores
                .iter()
                .map(|&score| (Pubkey::new_unique(), score))
                .collect();
            let ranked = rank_curators(&entries);
            let by_key: std::collections::HashMap<Pubkey, u64> =
                entries.iter().copied().collect();
            let ranked_scores: Vec<u64> =
                ranked.iter().map(|k| by_key[k]).collect();
            prop_assert!(ranked_scores.windows(2).all(|w| w[0] >= w[1]));
        }

        #[test]
        fn recommendations_never_repeat(
            liked in proptest::collection::vec(0u64..50, 0..MAX_PROFILE_ENTRIES),
            tracks in proptest::collection::vec(0u64..50, 1..MAX_PLAYLIST_TRACKS),
        ) {
            let mut profile = ListenerProfile {
                wallet: Pubkey::new_unique(),
                liked_works: Vec::new(),
                followed_playlists: Vec::new(),
                bump: 255,
            };
            for id in liked {
                profile.record_like(id);
            }
            let followed = playlist(1, true, &tracks);
            let recommended = recommended_music(&profile, &[&followed]);
            let unique: std::collections::HashSet<u64> =
                recommended.iter().copied().collect();
            prop_assert_eq!(unique.len(), recommended.len());
        }
    }
}
