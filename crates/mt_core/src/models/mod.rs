pub mod player;
pub mod score;

pub use player::{DisciplinaryEvent, Player, PlayerId};
pub use score::{Score, Side};
