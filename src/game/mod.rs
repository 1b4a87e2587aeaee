//! Game rules and round bookkeeping
//!
//! `RoundState` holds one round, `Rules::validate` classifies submissions against it,
//! and `Game` runs rounds for a front end.

mod session;
mod state;
mod validator;

pub use session::Game;
pub use state::{GameError, RoundState};
pub use validator::{Rules, validate};
