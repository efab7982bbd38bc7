pub mod initialize;
pub mod set_streaming_authority;

pub mod curation;
pub mod licensing;
pub mod registry;
pub mod streaming;

pub use initialize::*;
pub use set_streaming_authority::*;

pub use curation::*;
pub use licensing::*;
pub use registry::*;
pub use streaming::*;
