use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Env, Target};
use log::{error, info, warn};
use ratatui::Frame;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use typegrid::app::{App, AppScreen};
use typegrid::config::Config;
use typegrid::event::{self, AppEvent, EventHandler};
use typegrid::generator::dictionary::Dictionary;
use typegrid::ui::components::result_panel::ResultPanel;
use typegrid::ui::components::typing_grid::TypingGrid;
use typegrid::ui::layout::{AppLayout, hint_line};
use typegrid::ui::terminal::{TerminalGuard, Tui};
use typegrid::ui::theme::Theme;

const EXIT_NOT_A_TERMINAL: u8 = 1;
const EXIT_TERMINAL_SETUP: u8 = 2;

#[derive(Parser)]
#[command(
    name = "typegrid",
    version,
    about = "Terminal typing test over weighted random words"
)]
struct Cli {
    #[arg(short, long, help = "Embedded dictionary (english, german)")]
    dict: Option<String>,

    #[arg(short, long, help = "JSON vocabulary file with a 'words' list")]
    file: Option<PathBuf>,

    #[arg(short, long, help = "Number of top ranked dictionary words to use")]
    top: Option<usize>,

    #[arg(short, long, help = "Number of words per test")]
    count: Option<usize>,

    #[arg(short, long, help = "Display width of the typing text")]
    width: Option<usize>,

    #[arg(long, help = "Mix random numbers into the text")]
    nums: bool,

    #[arg(long, conflicts_with = "no_punct", help = "Enable punctuation marks")]
    punct: bool,

    #[arg(long, help = "Disable punctuation marks")]
    no_punct: bool,

    #[arg(long, help = "Seed for reproducible tests")]
    seed: Option<u64>,

    #[arg(long, help = "Config file to read instead of the default location")]
    config: Option<PathBuf>,

    #[arg(long, help = "Write the effective settings back to the config file")]
    save_config: bool,

    #[arg(long, help = "Append log output to this file")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(dict) = &self.dict {
            config.dictionary = dict.clone();
        }
        if let Some(top) = self.top {
            config.top_words = top;
        }
        if let Some(count) = self.count {
            config.word_count = count;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if self.nums {
            config.numbers = true;
        }
        if self.punct {
            config.punctuation = true;
        }
        if self.no_punct {
            config.punctuation = false;
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.log_file.as_ref()) {
        eprintln!("Error: {err:#}");
        return ExitCode::FAILURE;
    }

    let app = match setup(&cli) {
        Ok(app) => app,
        Err(err) => {
            error!("startup failed: {err:#}");
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    if !io::stdin().is_terminal() {
        eprintln!("Use a terminal (requires a TTY)");
        return ExitCode::from(EXIT_NOT_A_TERMINAL);
    }

    let mut guard = match TerminalGuard::new() {
        Ok(guard) => guard,
        Err(err) => {
            error!("terminal setup failed: {err:#}");
            eprintln!("Raw mode activation failed: {err:#}");
            return ExitCode::from(EXIT_TERMINAL_SETUP);
        }
    };

    let result = run_app(guard.terminal(), app);
    drop(guard);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            env_logger::Builder::from_env(Env::default().default_filter_or("info"))
                .target(Target::Pipe(Box::new(file)))
                .init();
        }
        None => {
            env_logger::Builder::from_env(Env::default().default_filter_or("off")).init();
        }
    }
    Ok(())
}

fn setup(cli: &Cli) -> Result<App> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = match Config::load_from(&config_path) {
        Ok(config) => {
            info!("config loaded from {}", config_path.display());
            config
        }
        Err(err) => {
            warn!(
                "ignoring config {}: {err:#}; using defaults",
                config_path.display()
            );
            Config::default()
        }
    };
    cli.apply(&mut config);
    config.validate()?;

    if cli.save_config {
        config
            .save_to(&config_path)
            .with_context(|| format!("failed to save config to {}", config_path.display()))?;
        info!("config saved to {}", config_path.display());
    }

    let dictionary = match &cli.file {
        Some(path) => Dictionary::from_file(path, config.top_words)?,
        None => Dictionary::embedded(&config.dictionary, config.top_words).with_context(|| {
            format!("available dictionaries: {}", Dictionary::available().join(", "))
        })?,
    };
    info!("vocabulary of {} words loaded", dictionary.len());

    App::new(config, dictionary, cli.seed)
}

fn run_app(terminal: &mut Tui, mut app: App) -> Result<()> {
    let theme = Theme::default();
    let events = EventHandler::new();

    loop {
        terminal.draw(|frame| render(frame, &app, &theme))?;

        match events.next()? {
            AppEvent::Key(key) => {
                if let Some(input) = event::classify(key) {
                    app.handle_input(input)?;
                }
            }
            AppEvent::Resize => {}
            AppEvent::Closed => return Ok(()),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let grid = app.session.grid();
    let grid_width = grid.rows().iter().map(Vec::len).max().unwrap_or(0);
    let layout = AppLayout::new(
        frame.area(),
        grid_width.max(app.config.width),
        grid.rows().len(),
        app.screen() == AppScreen::Result,
    );

    let header = format!(
        " typegrid  {} words  {}{}",
        app.config.word_count,
        app.config.dictionary,
        match (app.config.numbers, app.config.punctuation) {
            (true, true) => "  nums punct",
            (true, false) => "  nums",
            (false, true) => "  punct",
            (false, false) => "",
        }
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(header, theme.accent))),
        layout.header,
    );

    frame.render_widget(TypingGrid::new(grid, theme), layout.grid);

    if let (Some(area), Some(result)) = (layout.result, app.last_result.as_ref()) {
        frame.render_widget(ResultPanel::new(result, theme), area);
    }

    let hints: &[&str] = match app.screen() {
        AppScreen::Typing => &["[Backspace] undo", "[Ctrl+R] restart", "[Ctrl+C] quit"],
        AppScreen::Result => &["[Enter] next", "[Ctrl+R] restart", "[Esc] quit"],
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hint_line(hints, usize::from(layout.footer.width)),
            theme.hint,
        ))),
        layout.footer,
    );
}
