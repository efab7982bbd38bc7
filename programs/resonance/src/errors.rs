use anchor_lang::prelude::*;

// Registry and platform error codes. Each feature area keeps its own codes
// next to its instructions (LicensingError, StreamingError, CurationError);
// unknown-id failures surface as Anchor's AccountNotInitialized when the PDA
// for the id does not exist.

#[error_code]
pub enum ResonanceError {
    #[msg("Content reference cannot be empty")]
    EmptyReference,

    #[msg("Content reference exceeds the maximum length")]
    ReferenceTooLong,

    #[msg("Royalty rate cannot exceed 10000 basis points")]
    InvalidRoyaltyRate,

    #[msg("Caller is not the work holder")]
    NotWorkHolder,

    #[msg("Caller is neither the work holder nor the approved delegate")]
    NotHolderOrDelegate,

    #[msg("Cannot transfer a work to the zero address")]
    InvalidTransferTarget,

    #[msg("Caller is not the platform authority")]
    NotPlatformAuthority,

    #[msg("Cannot set the zero address as an authority")]
    InvalidAuthority,

    #[msg("Streaming authority has already been set")]
    StreamingAuthorityAlreadySet,
}
