pub mod constants;
pub mod drag;
pub mod engine;
pub mod error;
pub mod index;
pub mod layout;

pub use constants::*;
pub use drag::*;
pub use engine::*;
pub use error::*;
pub use index::*;
pub use layout::*;
