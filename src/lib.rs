//! Conway's Game of Life on a bounded board, rendered as text frames.

pub mod board;
pub mod engine;
pub mod error;
pub mod factory;
pub mod loader;
pub mod render;
pub mod simulation;

pub use board::{Board, CellState};
pub use engine::step;
pub use error::{BoardError, Malformed, Result};
pub use factory::UnitSource;
pub use render::render;
pub use simulation::{CancelToken, Frame, FrameSink, Simulation, WriterSink, run};
