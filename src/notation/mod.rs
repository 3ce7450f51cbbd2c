pub mod move_list;
pub mod san;

pub use move_list::{MoveList, MoveToken};
pub use san::{SanMove, Wing};
