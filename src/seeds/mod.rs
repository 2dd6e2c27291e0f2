pub mod dev_seed;

pub use dev_seed::*;
