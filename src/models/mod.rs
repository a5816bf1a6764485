pub mod recommendation;
pub mod rules;

pub use recommendation::*;
pub use rules::*;
