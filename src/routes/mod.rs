pub mod health_checks;
pub mod index;
pub(crate) mod status;

pub use health_checks::*;
pub use index::*;
