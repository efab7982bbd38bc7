pub mod end_stream;
pub mod start_stream;

pub use end_stream::*;
pub use start_stream::*;
