mod app;
mod colors;
mod game;

pub use app::SnakeApp;
