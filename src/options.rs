use std::{str::FromStr, sync::LazyLock, time::Duration};

use lifeframe::{Board, factory};
use rand::{SeedableRng, rngs::StdRng};
use regex::Regex;
use thiserror::Error;

/// Soup size used outside console mode
const DEFAULT_SIZE: (usize, usize) = (90, 20);

static SIZE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)[xX](\d+)$").expect("valid size pattern"));

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error(transparent)]
    Parse(#[from] getopts::Fail),
    #[error("invalid value {value:?} for --{name}")]
    Value { name: &'static str, value: String },
    #[error("unknown fill mode {0:?}, expected random or empty")]
    Fill(String),
    #[error("expected WIDTHxHEIGHT, got {0:?}")]
    Size(String),
}

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, ArgsError> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "draw frames in the terminal");
        opts.optopt("i", "input", "load the initial board from a 0/1 file", "FILE");
        opts.optopt("o", "output", "write the final board to a 0/1 file", "FILE");
        opts.optopt("w", "width", "set soup width", "WIDTH");
        opts.optopt("h", "height", "set soup height", "HEIGHT");
        opts.optopt("", "size", "set soup width and height", "WxH");
        opts.optopt("f", "fill", "set fill type (random, empty)", "TYPE");
        opts.optopt("p", "probability", "chance of a soup cell starting alive", "P");
        opts.optopt("", "seed", "seed for a reproducible soup", "SEED");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("", "stats", "write stats csv to file", "FILE");

        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: lifeframe [options] [FILE]"));
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }
    pub fn from_env() -> Result<Option<Self>, ArgsError> {
        let env = std::env::args().skip(1).collect::<Vec<_>>();
        Self::new(&env)
    }

    fn get<T: FromStr>(&self, name: &'static str) -> Result<Option<T>, ArgsError> {
        match self.matches.opt_str(name) {
            Some(value) => match value.parse() {
                Ok(parsed) => Ok(Some(parsed)),
                Err(_) => Err(ArgsError::Value { name, value }),
            },
            None => Ok(None),
        }
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }

    /// Frames to emit before stopping, `None` runs until interrupted
    pub fn generations(&self) -> Result<Option<u64>, ArgsError> {
        self.get("gens")
    }
    pub fn sleep(&self) -> Result<Option<Duration>, ArgsError> {
        Ok(match self.get("sleep")? {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if self.console() => Some(Duration::from_millis(100)),
            None => None,
        })
    }

    pub fn grid_size(&self) -> Result<(usize, usize), ArgsError> {
        let default = match self.matches.opt_str("size") {
            Some(size) => parse_size(&size)?,
            None if self.console() => match crossterm::terminal::size() {
                // leave room for the borders, the floor and the report footer
                Ok((cols, rows)) => (
                    (cols as usize).saturating_sub(2).max(1),
                    (rows as usize).saturating_sub(2).max(1),
                ),
                Err(_) => DEFAULT_SIZE,
            },
            None => DEFAULT_SIZE,
        };

        Ok((
            self.get("width")?.unwrap_or(default.0),
            self.get("height")?.unwrap_or(default.1),
        ))
    }
    pub fn fill_mode(&self) -> Result<FillMode, ArgsError> {
        let mode_str = self.matches.opt_str("fill");
        let mode_str = mode_str.as_deref().unwrap_or("random");
        FillMode::new(mode_str).ok_or_else(|| ArgsError::Fill(mode_str.to_owned()))
    }
    pub fn probability(&self) -> Result<f64, ArgsError> {
        Ok(self
            .get("probability")?
            .unwrap_or(factory::DEFAULT_LIVE_PROBABILITY))
    }
    pub fn seed(&self) -> Result<Option<u64>, ArgsError> {
        self.get("seed")
    }

    pub fn input_file(&self) -> Option<String> {
        self.matches
            .opt_str("input")
            .or_else(|| self.matches.free.first().cloned())
    }
    pub fn output_file(&self) -> Option<String> {
        self.matches.opt_str("output")
    }

    pub fn stats_file(&self) -> Option<String> {
        self.matches.opt_str("stats")
    }
}

fn parse_size(size: &str) -> Result<(usize, usize), ArgsError> {
    let invalid = || ArgsError::Size(size.to_owned());
    let caps = SIZE_PATTERN.captures(size).ok_or_else(invalid)?;
    let width = caps[1].parse().map_err(|_| invalid())?;
    let height = caps[2].parse().map_err(|_| invalid())?;
    Ok((width, height))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    Random,
    Empty,
}
impl FillMode {
    fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "random" => Some(Self::Random),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    pub fn create_board(
        self,
        width: usize,
        height: usize,
        live_probability: f64,
        seed: Option<u64>,
    ) -> lifeframe::Result<Board> {
        match (self, seed) {
            (Self::Empty, _) => factory::dead(width, height),
            (Self::Random, Some(seed)) => factory::random(
                width,
                height,
                live_probability,
                &mut StdRng::seed_from_u64(seed),
            ),
            (Self::Random, None) => {
                factory::random(width, height, live_probability, &mut rand::rng())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Args {
        Args::new(list).expect("valid args").expect("not a help request")
    }

    #[test]
    fn help_returns_none() {
        assert!(Args::new(&["--help"]).unwrap().is_none());
    }

    #[test]
    fn fill_mode_parses() {
        assert_eq!(args(&["--fill", "empty"]).fill_mode().unwrap(), FillMode::Empty);
        assert_eq!(args(&[]).fill_mode().unwrap(), FillMode::Random);
        assert!(matches!(
            args(&["-f", "alternating"]).fill_mode(),
            Err(ArgsError::Fill(_))
        ));
    }

    #[test]
    fn size_option_and_overrides() {
        assert_eq!(args(&["--size", "40x12"]).grid_size().unwrap(), (40, 12));
        assert_eq!(
            args(&["--size", "40x12", "-h", "5"]).grid_size().unwrap(),
            (40, 5)
        );
        assert_eq!(args(&["-w", "7"]).grid_size().unwrap(), (7, 20));
        assert!(matches!(
            args(&["--size", "40 by 12"]).grid_size(),
            Err(ArgsError::Size(_))
        ));
    }

    #[test]
    fn bad_numbers_name_the_option() {
        let err = args(&["--gens", "many"]).generations().unwrap_err();

        assert_eq!(err.to_string(), "invalid value \"many\" for --gens");
    }

    #[test]
    fn input_from_flag_or_free_argument() {
        assert_eq!(
            args(&["-i", "glider.txt"]).input_file().as_deref(),
            Some("glider.txt")
        );
        assert_eq!(
            args(&["pulsar.txt"]).input_file().as_deref(),
            Some("pulsar.txt")
        );
        assert_eq!(args(&[]).input_file(), None);
    }

    #[test]
    fn sleep_defaults() {
        assert_eq!(args(&[]).sleep().unwrap(), None);
        assert_eq!(
            args(&["-c"]).sleep().unwrap(),
            Some(Duration::from_millis(100))
        );
        assert_eq!(
            args(&["-s", "5"]).sleep().unwrap(),
            Some(Duration::from_millis(5))
        );
    }

    #[test]
    fn probability_defaults() {
        assert_eq!(args(&[]).probability().unwrap(), 0.6);
        assert_eq!(args(&["-p", "0.25"]).probability().unwrap(), 0.25);
    }

    #[test]
    fn seeded_random_fill_is_reproducible() {
        let a = FillMode::Random.create_board(16, 8, 0.4, Some(9)).unwrap();
        let b = FillMode::Random.create_board(16, 8, 0.4, Some(9)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn empty_fill_is_dead() {
        let board = FillMode::Empty.create_board(5, 4, 0.4, None).unwrap();

        assert_eq!(board.alive_count(), 0);
    }
}
