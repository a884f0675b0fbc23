use std::{
    fs,
    io::{self, Write},
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use lifeframe::{Board, CancelToken, Frame, FrameSink, WriterSink, loader, simulation};

mod console;
mod options;
mod stats;

use stats::{Recorder, SwitchRecorder};

fn initial_board(args: &options::Args) -> Result<Board> {
    if let Some(file_name) = args.input_file() {
        let text = fs::read_to_string(&file_name)
            .with_context(|| format!("failed to read board file {file_name}"))?;
        // editors usually end the last row with a line break
        let text = text.strip_suffix('\n').unwrap_or(&text);
        return loader::load(text).with_context(|| format!("failed to load board file {file_name}"));
    }

    let (width, height) = args.grid_size()?;
    args.fill_mode()?
        .create_board(width, height, args.probability()?, args.seed()?)
        .context("failed to create initial board")
}

fn board_summary(board: &Board) -> String {
    format!(
        "board: {}x{}, alive: {}",
        board.width(),
        board.height(),
        board.alive_count()
    )
}

/// Where frames end up
enum Display<W = io::StdoutLock<'static>> {
    Console(console::ConsoleSink),
    Stream(WriterSink<W>),
}
impl<W> Display<W> {
    fn report(&mut self, report: String) {
        match self {
            Self::Console(console) => console.set_report(report),
            // the stream carries only frames
            Self::Stream(_) => eprintln!("{report}"),
        }
    }
}
impl<W: Write> FrameSink for Display<W> {
    fn emit(&mut self, frame: &Frame) -> io::Result<()> {
        match self {
            Self::Console(console) => console.emit(frame),
            Self::Stream(stream) => stream.emit(frame),
        }
    }
}

/// Wraps the display with reporting, pacing and the generation limit
struct Driver {
    display: Display,
    stats: SwitchRecorder,
    sleep: Option<Duration>,
    limit: Option<u64>,
    cancel: CancelToken,
}
impl FrameSink for Driver {
    fn emit(&mut self, frame: &Frame) -> io::Result<()> {
        self.display.emit(frame)?;

        self.stats.record(frame);
        if self.stats.has_report() {
            let report = self.stats.report();
            self.display.report(report);
        }

        if self.limit.is_some_and(|limit| frame.generation() + 1 >= limit) {
            self.cancel.cancel();
        } else if let Some(time) = self.sleep {
            thread::sleep(time);
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };

    let board = initial_board(&args)?;

    let cancel = CancelToken::new();
    let limit = args.generations()?;
    if limit == Some(0) {
        cancel.cancel();
    }
    let mut display = if args.console() {
        Display::Console(console::ConsoleSink::new(cancel.clone())?)
    } else {
        Display::Stream(WriterSink::new(io::stdout().lock()))
    };
    display.report(board_summary(&board));
    let mut driver = Driver {
        display,
        stats: SwitchRecorder::new(args.stats_file().is_some()),
        sleep: args.sleep()?,
        limit,
        cancel: cancel.clone(),
    };

    let result = simulation::run(board, &mut driver, &cancel);
    let Driver { display, stats, .. } = driver;
    // restore the terminal before anything else is printed
    std::mem::drop(display);
    let last = result.context("failed to emit frame")?;

    if let Some(file_name) = args.output_file() {
        fs::write(&file_name, loader::encode(&last))
            .with_context(|| format!("failed to write board to {file_name}"))?;
    }
    if let (Some(file_name), Some(csv)) = (args.stats_file(), stats.csv()) {
        csv.save(&file_name)
            .with_context(|| format!("failed to write stats to {file_name}"))?;
    }

    Ok(())
}
