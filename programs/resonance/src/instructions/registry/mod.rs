pub mod approve_delegate;
pub mod mint_work;
pub mod transfer_work;

pub use approve_delegate::*;
pub use mint_work::*;
pub use transfer_work::*;
