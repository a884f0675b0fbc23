use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    execute, queue, terminal,
};
use lifeframe::{CancelToken, Frame, FrameSink};
use std::io::{self, Write};

/// Draws frames into the alternate screen, leaving the last line for a report
///
/// Frames larger than the terminal are cropped; the arrow keys move the
/// visible area and Ctrl+C, `q` or Esc cancel the simulation.
pub struct ConsoleSink {
    top: usize,
    left: usize,
    report: String,
    cancel: CancelToken,
}
impl ConsoleSink {
    pub fn new(cancel: CancelToken) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self {
            top: 0,
            left: 0,
            report: String::new(),
            cancel,
        })
    }

    fn draw(&self, frame: &Frame) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;

        // the bottom row is kept for the footer
        let visible = visible_lines(
            frame.text(),
            (self.top, self.left),
            (cols as usize, rows.saturating_sub(1) as usize),
        );
        for (y, line) in visible.enumerate() {
            queue!(stdout, cursor::MoveTo(0, y as u16))?;
            stdout.write_all(line.as_bytes())?;
        }

        // write footer
        queue!(stdout, cursor::MoveTo(0, rows.saturating_sub(1)))?;
        stdout.write_all(self.report.as_bytes())?;

        stdout.flush()
    }

    fn poll_events(&mut self) -> io::Result<()> {
        // drain everything that queued up while the last frame was shown
        while event::poll(std::time::Duration::from_secs(0))? {
            match event::read()? {
                event::Event::Key(KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                })
                | event::Event::Key(KeyEvent {
                    code: KeyCode::Char('q') | KeyCode::Esc,
                    ..
                }) => self.cancel.cancel(),
                event::Event::Key(KeyEvent { code, .. }) => match code {
                    KeyCode::Up => self.top = self.top.saturating_sub(1),
                    KeyCode::Down => self.top += 1,
                    KeyCode::Left => self.left = self.left.saturating_sub(1),
                    KeyCode::Right => self.left += 1,
                    _ => {}
                },
                _ => {}
            }
        }
        Ok(())
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
impl FrameSink for ConsoleSink {
    fn emit(&mut self, frame: &Frame) -> io::Result<()> {
        self.poll_events()?;
        self.draw(frame)
    }
}
impl Drop for ConsoleSink {
    fn drop(&mut self) {
        // nothing left to report failures to once the screen is torn down
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// The part of `text` inside a `(cols, rows)` window whose top left corner is
/// at `(top, left)`
///
/// Frames are plain ASCII, so columns are byte offsets.
fn visible_lines(
    text: &str,
    (top, left): (usize, usize),
    (cols, rows): (usize, usize),
) -> impl Iterator<Item = &str> {
    text.lines().skip(top).take(rows).map(move |line| {
        let line = line.get(left..).unwrap_or_default();
        &line[..line.len().min(cols)]
    })
}
