pub mod board;
pub mod by_player;
pub mod errors;
pub mod game_state;
pub mod input;
