pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod frame;
pub mod game_loop;
pub mod input;
pub mod pacing;
pub mod render;
