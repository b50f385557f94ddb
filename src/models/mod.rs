pub mod costs;
pub mod estimate;
pub mod usage;

pub use costs::*;
pub use estimate::*;
pub use usage::*;
