#[cfg(test)]
mod tests;

mod card;
mod compose;
mod kind;
mod payload;

pub use card::*;
pub use compose::*;
pub use kind::*;
pub use payload::*;
