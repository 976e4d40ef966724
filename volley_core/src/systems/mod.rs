pub mod ball;
pub mod input;
pub mod movement;

pub use ball::*;
pub use input::*;
pub use movement::*;
