pub mod purchase_license;
pub mod record_stream;
pub mod revoke_license;
pub mod set_license_terms;

pub use purchase_license::*;
pub use record_stream::*;
pub use revoke_license::*;
pub use set_license_terms::*;
