use anchor_lang::prelude::*;

use crate::state::platform::MAX_BPS;

// =============================================================================
// LICENSING LEDGER
// =============================================================================
// Per-work sale terms, overwritten in place by the work's holder, and one
// license per (work, licensee) pair. A license moves through a one-way state
// machine:
//
//   NotPurchased -> Active -> { Expired | StreamsExhausted | Revoked }
//
// Nothing restores a dead license; a re-purchase overwrites the record with
// a fresh Active one. Validity is always judged against a single timestamp
// taken at the start of the operation and the stream budget of the work's
// current terms.
// =============================================================================

/// What a license permits.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum LicenseType {
    /// Private listening
    Personal,
    /// Commercial use (venues, sync, broadcast)
    Commercial,
}

/// Observed license state at a given timestamp.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LicenseStatus {
    Active,
    Expired,
    StreamsExhausted,
    Revoked,
}

// =============================================================================
// LICENSE TERMS ACCOUNT
// =============================================================================

#[account]
pub struct LicenseTerms {
    /// The work these terms sell
    pub work_id: u64,
    /// Price per license, in lamports
    pub price: u64,
    /// Whether the work is currently purchasable
    pub active: bool,
    /// License lifetime from purchase, in seconds
    pub duration_seconds: i64,
    /// The kind of license on offer
    pub license_type: LicenseType,
    /// Streams allowed per license
    pub max_streams: u32,
    /// Share of the price routed to the holder, in basis points
    pub royalty_rate_bps: u16,
    /// Last time the holder rewrote these terms
    pub updated_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl LicenseTerms {
    pub const SIZE: usize = 8 +  // discriminator
        8 +                      // work_id
        8 +                      // price
        1 +                      // active
        8 +                      // duration_seconds
        1 +                      // license_type
        4 +                      // max_streams
        2 +                      // royalty_rate_bps
        8 +                      // updated_at
        1;                       // bump

    /// Royalty owed to the holder on one purchase at these terms.
    pub fn royalty_amount(&self) -> u64 {
        ((self.price as u128 * self.royalty_rate_bps as u128) / MAX_BPS as u128) as u64
    }
}

// =============================================================================
// LICENSE ACCOUNT
// =============================================================================

#[account]
pub struct License {
    /// The account the license was sold to
    pub licensee: Pubkey,
    /// The licensed work
    pub work_id: u64,
    /// When the license was purchased
    pub purchased_at: i64,
    /// purchased_at + duration; the license is dead from this instant on
    pub expires_at: i64,
    /// The kind purchased
    pub license_type: LicenseType,
    /// Streams consumed so far
    pub stream_count: u32,
    /// One-way revocation flag, settable only by the work's holder
    pub revoked: bool,
    /// PDA bump seed
    pub bump: u8,
}

impl License {
    pub const SIZE: usize = 8 +  // discriminator
        32 +                     // licensee
        8 +                      // work_id
        8 +                      // purchased_at
        8 +                      // expires_at
        1 +                      // license_type
        4 +                      // stream_count
        1 +                      // revoked
        1;                       // bump

    /// (Re)issue this record as a fresh Active license purchased at `now`.
    pub fn issue(&mut self, licensee: Pubkey, work_id: u64, now: i64, terms: &LicenseTerms) {
        self.licensee = licensee;
        self.work_id = work_id;
        self.purchased_at = now;
        self.expires_at = now + terms.duration_seconds;
        self.license_type = terms.license_type;
        self.stream_count = 0;
        self.revoked = false;
    }

    /// Valid iff now < expires_at, not revoked, and the stream budget is not
    /// exhausted.
    pub fn is_valid(&self, now: i64, max_streams: u32) -> bool {
        self.status(now, max_streams) == LicenseStatus::Active
    }

    /// The license's observed state at `now` under a budget of `max_streams`.
    /// Revocation dominates the other terminal states.
    pub fn status(&self, now: i64, max_streams: u32) -> LicenseStatus {
        if self.revoked {
            LicenseStatus::Revoked
        } else if now >= self.expires_at {
            LicenseStatus::Expired
        } else if self.stream_count >= max_streams {
            LicenseStatus::StreamsExhausted
        } else {
            LicenseStatus::Active
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400;

    fn terms(price: u64, max_streams: u32) -> LicenseTerms {
        LicenseTerms {
            work_id: 1,
            price,
            active: true,
            duration_seconds: DAY,
            license_type: LicenseType::Personal,
            max_streams,
            royalty_rate_bps: 1_000,
            updated_at: 0,
            bump: 255,
        }
    }

    fn purchased(now: i64, t: &LicenseTerms) -> License {
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
        license.issue(Pubkey::new_unique(), t.work_id, now, t);
        license
    }

    #[test]
    fn royalty_on_terms_is_exact() {
        // 0.1 SOL at 10% -> 0.01 SOL
        assert_eq!(terms(100_000_000, 100).royalty_amount(), 10_000_000);
        // 20% variant
        let mut t = terms(500_000_000, 1_000);
        t.royalty_rate_bps = 2_000;
        assert_eq!(t.royalty_amount(), 100_000_000);
    }

    #[test]
    fn validity_flips_exactly_at_expiry() {
        let t = terms(100, 100);
        let license = purchased(1_000, &t);
        assert_eq!(license.expires_at, 1_000 + DAY);
        assert!(license.is_valid(1_000 + DAY - 1, t.max_streams));
        assert!(!license.is_valid(1_000 + DAY, t.max_streams));
        assert_eq!(
            license.status(1_000 + DAY, t.max_streams),
            LicenseStatus::Expired
        );
    }

    #[test]
    fn stream_budget_exhausts_the_license() {
        let t = terms(100, 2);
        let mut license = purchased(0, &t);
        license.stream_count = 1;
        assert!(license.is_valid(10, t.max_streams));
        license.stream_count = 2;
        assert!(!license.is_valid(10, t.max_streams));
        assert_eq!(
            license.status(10, t.max_streams),
            LicenseStatus::StreamsExhausted
        );
    }

    #[test]
    fn revocation_is_terminal_and_dominates() {
        let t = terms(100, 100);
        let mut license = purchased(0, &t);
        license.revoked = true;
        assert!(!license.is_valid(10, t.max_streams));
        // revoked wins over expired in the observed status
        assert_eq!(
            license.status(2 * DAY, t.max_streams),
            LicenseStatus::Revoked
        );
    }

    #[test]
    fn reissue_resets_a_dead_license() {
        let t = terms(100, 1);
        let mut license = purchased(0, &t);
        license.stream_count = 1;
        license.revoked = true;
        assert!(!license.is_valid(10, t.max_streams));

        let licensee = license.licensee;
        license.issue(licensee, t.work_id, 500, &t);
        assert_eq!(license.stream_count, 0);
        assert!(!license.revoked);
        assert_eq!(license.purchased_at, 500);
        assert_eq!(license.expires_at, 500 + DAY);
        assert!(license.is_valid(501, t.max_streams));
    }

    #[test]
    fn budget_is_read_from_current_terms() {
        // Rewriting terms with a smaller budget retroactively bounds
        // outstanding licenses.
        let t = terms(100, 10);
        let mut license = purchased(0, &t);
        license.stream_count = 5;
        assert!(license.is_valid(10, 10));
        assert!(!license.is_valid(10, 5));
    }
}
