pub mod actions;
pub mod colors;
pub mod constants;
pub mod engine;
pub mod error;
pub mod game_state;
pub mod operator;
pub mod profanity;
pub mod question;

pub use actions::Action;
pub use colors::{resolve_color, Rgb};
pub use constants::*;
pub use engine::{Guess, TriviaEngine, TuneField};
pub use error::EngineError;
pub use game_state::GameState;
pub use operator::Operator;
pub use question::Question;
