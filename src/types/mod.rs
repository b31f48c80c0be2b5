pub mod geo;
pub mod header;
pub mod session;
pub mod record;

pub use geo::*;
pub use header::*;
pub use session::*;
pub use record::*;
