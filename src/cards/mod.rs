//! Card records and their field types.
//!
//! ## Key Types
//!
//! - `Card`: one collection entry (name, image, rarity, value, description)
//! - `Rarity`: free-form classification label
//!
//! Construction is validated (`Card::new`), so everything downstream of
//! this module can treat a `Card` as complete.

pub mod card;
pub mod rarity;

pub use card::Card;
pub use rarity::Rarity;
