use anchor_lang::prelude::*;

use crate::state::platform::MAX_BPS;

/// Maximum stored length of a content reference, in bytes.
pub const MAX_REFERENCE_LEN: usize = 128;

// =============================================================================
// OWNERSHIP REGISTRY
// =============================================================================
// One Work account per registered piece of music. The holder is the only
// mutable ownership fact; the content reference and the royalty rate are
// fixed at mint. Transfers may be executed by the holder or by a single
// approved delegate, which is cleared on every transfer.
// =============================================================================

#[account]
pub struct Work {
    /// Sequential id, assigned from the platform counter at mint
    pub work_id: u64,
    /// Current holder; receives royalties and stream payments
    pub holder: Pubkey,
    /// Delegate allowed to transfer on the holder's behalf; cleared on
    /// transfer
    pub approved_delegate: Option<Pubkey>,
    /// Royalty rate in basis points, immutable after mint
    pub royalty_rate_bps: u16,
    /// Opaque content reference (e.g. an ipfs:// URI), never interpreted
    pub reference: [u8; MAX_REFERENCE_LEN],
    /// Length of the stored reference in bytes
    pub reference_len: u16,
    /// When this work was minted
    pub minted_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl Work {
    pub const SIZE: usize = 8 +  // discriminator
        8 +                      // work_id
        32 +                     // holder
        33 +                     // approved_delegate (Option<Pubkey>)
        2 +                      // royalty_rate_bps
        MAX_REFERENCE_LEN +      // reference
        2 +                      // reference_len
        8 +                      // minted_at
        1;                       // bump

    /// Store a content reference. The caller must have validated that it is
    /// non-empty and fits; this only copies.
    pub fn set_reference(&mut self, reference: &str) {
        let bytes = reference.as_bytes();
        self.reference[..bytes.len()].copy_from_slice(bytes);
        self.reference_len = bytes.len() as u16;
    }

    /// The stored content reference.
    pub fn reference(&self) -> &str {
        core::str::from_utf8(&self.reference[..self.reference_len as usize]).unwrap_or("")
    }

    /// Royalty owed on a sale at `sale_price`, in exact integer arithmetic:
    /// sale_price * rate / 10000, truncating.
    pub fn royalty_amount(&self, sale_price: u64) -> u64 {
        ((sale_price as u128 * self.royalty_rate_bps as u128) / MAX_BPS as u128) as u64
    }

    /// Royalty receiver and amount for a sale at `sale_price`.
    pub fn royalty_info(&self, sale_price: u64) -> (Pubkey, u64) {
        (self.holder, self.royalty_amount(sale_price))
    }

    /// Whether `caller` may transfer this work: the holder, or the approved
    /// delegate.
    pub fn can_transfer(&self, caller: &Pubkey) -> bool {
        self.holder == *caller || self.approved_delegate.as_ref() == Some(caller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOL: u64 = 1_000_000_000;

    fn work(holder: Pubkey, rate_bps: u16) -> Work {
        let mut w = Work {
            work_id: 1,
            holder,
            approved_delegate: None,
            royalty_rate_bps: rate_bps,
            reference: [0u8; MAX_REFERENCE_LEN],
            reference_len: 0,
            minted_at: 0,
            bump: 255,
        };
        w.set_reference("ipfs://QmTest123");
        w
    }

    #[test]
    fn royalty_is_exact_at_ten_percent() {
        let w = work(Pubkey::new_unique(), 1_000);
        assert_eq!(w.royalty_amount(SOL), SOL / 10);
        assert_eq!(w.royalty_amount(2 * SOL), 2 * SOL / 10);
    }

    #[test]
    fn royalty_truncates_toward_zero() {
        let w = work(Pubkey::new_unique(), 1);
        // 9999 * 1 / 10000 truncates to 0
        assert_eq!(w.royalty_amount(9_999), 0);
        assert_eq!(w.royalty_amount(10_000), 1);
    }

    #[test]
    fn royalty_info_names_the_holder() {
        let holder = Pubkey::new_unique();
        let w = work(holder, 1_000);
        let (receiver, amount) = w.royalty_info(1_000);
        assert_eq!(receiver, holder);
        assert_eq!(amount, 100);
    }

    #[test]
    fn reference_round_trips() {
        let w = work(Pubkey::new_unique(), 1_000);
        assert_eq!(w.reference(), "ipfs://QmTest123");
    }

    #[test]
    fn delegate_may_transfer_until_cleared() {
        let holder = Pubkey::new_unique();
        let delegate = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();
        let mut w = work(holder, 1_000);

        assert!(w.can_transfer(&holder));
        assert!(!w.can_transfer(&delegate));

        w.approved_delegate = Some(delegate);
        assert!(w.can_transfer(&delegate));
        assert!(!w.can_transfer(&stranger));

        w.approved_delegate = None;
        assert!(!w.can_transfer(&delegate));
    }
}
