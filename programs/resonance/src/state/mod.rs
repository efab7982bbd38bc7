// =============================================================================
// RESONANCE STATE MODULE
// =============================================================================
//
// Three ledgers over flat, PDA-indexed tables:
// - registry:  one Work account per registered piece of music, current holder,
//              royalty rate fixed at mint
// - licensing: per-work sale terms plus per-(work, licensee) licenses with a
//              time window, a stream budget, and one-way revocation
// - streaming / curation: open sessions, per-work play history, playlists,
//              likes, follows, and curator reputation
//
// Each ledger owns its account types exclusively; the others read them as
// immutable inputs. Aggregate queries (rankings, popularity, recommendations)
// are pure functions over fetched accounts.
// =============================================================================

pub mod curation;
pub mod licensing;
pub mod platform;
pub mod registry;
pub mod streaming;

pub use curation::*;
pub use licensing::*;
pub use platform::*;
pub use registry::*;
pub use streaming::*;
