use lifeframe::Frame;
use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

const REPORT_INTERVAL: Duration = Duration::from_millis(500);

pub trait Recorder {
    fn record(&mut self, frame: &Frame);

    fn has_report(&self) -> bool;
    fn report(&mut self) -> String;
}

/// Tracks the generation rate and the latest population
pub struct RateRecord {
    generation: u64,
    alive: usize,
    frames_in_report: u64,
    last_report: Instant,
}
impl RateRecord {
    pub fn new() -> Self {
        Self {
            generation: 0,
            alive: 0,
            frames_in_report: 0,
            last_report: Instant::now(),
        }
    }
}
impl Recorder for RateRecord {
    fn record(&mut self, frame: &Frame) {
        self.generation = frame.generation();
        self.alive = frame.alive();
        self.frames_in_report += 1;
    }

    fn has_report(&self) -> bool {
        self.last_report.elapsed() >= REPORT_INTERVAL
    }
    fn report(&mut self) -> String {
        let gens_per_sec = self.frames_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.frames_in_report = 0;

        format!(
            "{:.02}gen/s gen:{}, alive:{}",
            gens_per_sec, self.generation, self.alive
        )
    }
}

/// Keeps a row per recorded frame on top of the rate report
pub struct CsvRecord {
    inner: RateRecord,
    rows: Vec<(u64, u128, usize)>,
    last: Instant,
}
impl CsvRecord {
    pub fn new() -> Self {
        Self {
            inner: RateRecord::new(),
            rows: Vec::new(),
            last: Instant::now(),
        }
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(b"generation,delta_us,alive\n")?;
        for (generation, delta, alive) in &self.rows {
            writeln!(out, "{},{},{}", generation, delta, alive)?;
        }
        out.flush()
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> io::Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_to(io::BufWriter::new(file))
    }
}
impl Recorder for CsvRecord {
    fn record(&mut self, frame: &Frame) {
        let delta = self.last.elapsed().as_micros();
        self.last = Instant::now();

        self.rows.push((frame.generation(), delta, frame.alive()));
        self.inner.record(frame);
    }

    fn has_report(&self) -> bool {
        self.inner.has_report()
    }
    fn report(&mut self) -> String {
        self.inner.report()
    }
}

/// Picks between the two recorders at runtime
///
/// Only [`CsvRecord`] keeps per frame rows, which grow for as long as the
/// simulation runs, so it is only used when a stats file is requested.
pub enum SwitchRecorder {
    Csv(CsvRecord),
    Rate(RateRecord),
}
impl SwitchRecorder {
    pub fn new(csv: bool) -> Self {
        if csv {
            Self::Csv(CsvRecord::new())
        } else {
            Self::Rate(RateRecord::new())
        }
    }
    pub fn csv(&self) -> Option<&CsvRecord> {
        match self {
            Self::Csv(r) => Some(r),
            Self::Rate(_) => None,
        }
    }
}
impl Recorder for SwitchRecorder {
    fn record(&mut self, frame: &Frame) {
        match self {
            Self::Csv(r) => r.record(frame),
            Self::Rate(r) => r.record(frame),
        }
    }
    fn has_report(&self) -> bool {
        match self {
            Self::Csv(r) => r.has_report(),
            Self::Rate(r) => r.has_report(),
        }
    }
    fn report(&mut self) -> String {
        match self {
            Self::Csv(r) => r.report(),
            Self::Rate(r) => r.report(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeframe::{Simulation, loader};

    fn frames(count: usize) -> Vec<Frame> {
        let board = loader::load("00000\n00000\n01110\n00000\n00000").unwrap();
        Simulation::new(board).take(count).collect()
    }

    #[test]
    fn report_mentions_latest_frame() {
        let mut rec = RateRecord::new();
        for frame in frames(3) {
            rec.record(&frame);
        }

        let report = rec.report();
        assert!(report.ends_with("gen/s gen:2, alive:3"), "{report}");
        assert_eq!(rec.frames_in_report, 0);
    }

    #[test]
    fn csv_has_a_row_per_frame() {
        let mut rec = CsvRecord::new();
        for frame in frames(2) {
            rec.record(&frame);
        }

        let mut out = Vec::new();
        rec.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "generation,delta_us,alive");
        assert!(lines[1].starts_with("0,") && lines[1].ends_with(",3"));
        assert!(lines[2].starts_with("1,") && lines[2].ends_with(",3"));
    }

    #[test]
    fn csv_saves_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.csv");
        let mut rec = SwitchRecorder::new(true);
        rec.record(&frames(1)[0]);

        rec.csv().unwrap().save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn rate_recorder_has_no_csv() {
        assert!(SwitchRecorder::new(false).csv().is_none());
    }
}
