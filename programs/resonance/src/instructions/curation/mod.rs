pub mod create_curated_playlist;
pub mod create_playlist;
pub mod follow_playlist;
pub mod like_music;
pub mod like_playlist;

pub use create_curated_playlist::*;
pub use create_playlist::*;
pub use follow_playlist::*;
pub use like_music::*;
pub use like_playlist::*;
