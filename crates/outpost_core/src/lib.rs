pub mod error;
pub mod target;

pub use error::{OutpostError, Result};
pub use target::RemoteTarget;
