//! Driving a board forward one generation at a time.

use crate::{board::Board, engine, render};
use std::{
    io::{self, Write},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

/// One rendered generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    generation: u64,
    alive: usize,
    text: String,
}
impl Frame {
    fn new(generation: u64, board: &Board) -> Self {
        Self {
            generation,
            alive: board.alive_count(),
            text: render::render(board),
        }
    }

    /// Generation number, the initial board is generation 0
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
    #[inline]
    pub fn alive(&self) -> usize {
        self.alive
    }
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Destination for rendered frames
pub trait FrameSink {
    fn emit(&mut self, frame: &Frame) -> io::Result<()>;
}
impl FrameSink for Vec<Frame> {
    fn emit(&mut self, frame: &Frame) -> io::Result<()> {
        self.push(frame.clone());
        Ok(())
    }
}
impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    #[inline]
    fn emit(&mut self, frame: &Frame) -> io::Result<()> {
        (**self).emit(frame)
    }
}

/// Writes each frame followed by a line break, flushing after every frame
pub struct WriterSink<W> {
    writer: W,
}
impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
    pub fn into_inner(self) -> W {
        self.writer
    }
}
impl<W: Write> FrameSink for WriterSink<W> {
    fn emit(&mut self, frame: &Frame) -> io::Result<()> {
        self.writer.write_all(frame.text().as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

/// Shared flag used to stop [`run`] from outside the loop
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);
impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The current generation of a running simulation
///
/// As an [`Iterator`] it never ends: every call to `next` yields the frame of
/// the current board and then advances to the following generation.
#[derive(Debug, Clone)]
pub struct Simulation {
    board: Board,
    generation: u64,
}

impl Simulation {
    pub fn new(initial: Board) -> Self {
        Self {
            board: initial,
            generation: 0,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn frame(&self) -> Frame {
        Frame::new(self.generation, &self.board)
    }

    /// Replaces the current board with its successor
    pub fn advance(&mut self) {
        self.board = engine::step(&self.board);
        self.generation += 1;
    }

    #[inline]
    pub fn into_board(self) -> Board {
        self.board
    }
}

impl Iterator for Simulation {
    type Item = Frame;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.frame();
        self.advance();
        Some(frame)
    }
}

/// Renders and advances `initial` into `sink` until `cancel` is cancelled
///
/// The token is checked before each frame, so a sink can cancel it to stop
/// right after the frame it was handed. Returns the board that would have been
/// rendered next. Sink errors end the loop immediately.
pub fn run<S: FrameSink + ?Sized>(
    initial: Board,
    sink: &mut S,
    cancel: &CancelToken,
) -> io::Result<Board> {
    let mut simulation = Simulation::new(initial);
    while !cancel.is_cancelled() {
        sink.emit(&simulation.frame())?;
        simulation.advance();
    }
    Ok(simulation.into_board())
}
