// Domain data models

pub mod plan;
pub mod pose;
pub mod preferences;
pub mod routine;
pub mod session;

pub use plan::*;
pub use pose::*;
pub use preferences::*;
pub use routine::*;
pub use session::*;
