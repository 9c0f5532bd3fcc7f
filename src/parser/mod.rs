mod combinators;
mod primitive;
mod rule;
mod state;

pub use combinators::*;
pub use primitive::*;
pub use rule::*;
pub use state::*;
