//! Domain types for battle decisions

mod conditions;
mod pokemon;
mod pokemon_type;
mod side;
mod stats;
mod status;

pub use conditions::Weather;
pub use pokemon::{Battler, MoveSlot};
pub use pokemon_type::{Type, TYPE_CHART};
pub use side::SideState;
pub use stats::{Stat, StatStages};
pub use status::{Status, Volatile};
