pub mod swiss;
pub mod types;

pub use swiss::pair_adjacent;
pub use types::{Pairing, Pairings};
