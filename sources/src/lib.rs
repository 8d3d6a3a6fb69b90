pub mod fonts;
pub mod kernel;
pub mod util;

mod errors;
pub use errors::SourceError;
