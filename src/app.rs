use std::time::Instant;

use anyhow::Result;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::Config;
use crate::generator::TextGenerator;
use crate::generator::dictionary::Dictionary;
use crate::generator::words::WordListGenerator;
use crate::session::grid::{Grid, Position};
use crate::session::input::{KeyInput, Session, Transition};
use crate::session::result::TestResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Typing,
    Result,
}

pub struct App {
    pub config: Config,
    pub session: Session,
    pub last_result: Option<TestResult>,
    pub should_quit: bool,
    /// Cells touched by the most recent key event.
    pub dirty: Vec<Position>,
    generator: WordListGenerator,
    rng: SmallRng,
}

impl App {
    pub fn new(config: Config, dictionary: Dictionary, seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let generator = WordListGenerator::new(dictionary, &config);

        let mut app = Self {
            config,
            session: Session::new(Grid::default()),
            last_result: None,
            should_quit: false,
            dirty: Vec::new(),
            generator,
            rng,
        };
        app.start_test()?;
        Ok(app)
    }

    pub fn screen(&self) -> AppScreen {
        if self.session.is_done() {
            AppScreen::Result
        } else {
            AppScreen::Typing
        }
    }

    /// Rows are laid out one column short of the display width so the
    /// trailing separator of each row still fits.
    pub fn layout_width(&self) -> usize {
        self.config.width.saturating_sub(1).max(1)
    }

    pub fn start_test(&mut self) -> Result<()> {
        let words = self.generator.generate(&mut self.rng)?;
        let grid = Grid::build(&words, self.layout_width());
        info!(
            "new test: {} words over {} rows",
            words.len(),
            grid.rows().len()
        );
        self.session.reset(grid);
        self.last_result = None;
        self.dirty.clear();
        Ok(())
    }

    pub fn handle_input(&mut self, input: KeyInput) -> Result<()> {
        self.handle_input_at(input, Instant::now())
    }

    pub fn handle_input_at(&mut self, input: KeyInput, now: Instant) -> Result<()> {
        match self.session.handle(input, now) {
            Transition::Ignored => self.dirty.clear(),
            Transition::Updated(cells) => self.dirty = cells,
            Transition::Finished { updated, result } => {
                info!(
                    "test finished in {:.2?}: {} wpm, {}% accuracy, {} adjusted wpm",
                    result.duration, result.wpm, result.accuracy, result.adjusted_wpm
                );
                self.dirty = updated;
                self.last_result = Some(result);
            }
            Transition::Regenerate => self.start_test()?,
            Transition::Exit => {
                debug!("exit requested via {input:?}");
                self.should_quit = true;
            }
        }
        Ok(())
    }
}
