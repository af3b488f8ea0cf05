use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::Size,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use status_banner::config::{self, ConfigResult, TimingConfig};
use status_banner::{
    BannerStyle, IncludedStyle, StatusBarDelegate, StatusBarPresenter, Transition,
};

/// Frame budget for the event loop while animations run
const POLL_INTERVAL: Duration = Duration::from_millis(16);
const PROGRESS_STEP: f64 = 0.1;

#[derive(Parser, Debug)]
#[command(version, about = "Show a status-bar banner in the terminal")]
struct Args {
    /// Text to show in the banner
    #[arg(default_value = "Hello from status-banner")]
    message: String,

    /// Style name (an included style or one from the config file)
    #[arg(short, long)]
    style: Option<String>,

    /// Dismiss automatically after this many seconds
    #[arg(short, long, value_name = "SECS", value_parser = parse_delay)]
    dismiss_after: Option<Duration>,

    /// Config file to use instead of ~/.config/status-banner/config.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print available style names and exit
    #[arg(long)]
    list_styles: bool,
}

/// Seconds as a [`Duration`]; negative values mean "right away".
fn parse_delay(value: &str) -> std::result::Result<Duration, String> {
    let secs: f64 = value
        .parse()
        .map_err(|_| format!("`{}` is not a number of seconds", value))?;
    Duration::try_from_secs_f64(secs.max(0.0)).map_err(|e| format!("{}: {}", value, e))
}

/// Counts dismissals and animates relayouts with the configured transition.
struct DemoDelegate {
    transition: Transition,
    dismissals: Cell<u32>,
}

impl StatusBarDelegate for DemoDelegate {
    fn animations_for_view_transition_to_size(&self, size: Size) -> Option<Transition> {
        log::debug!("Relayout to {}x{}", size.width, size.height);
        Some(self.transition)
    }

    fn did_dismiss_status_bar(&self) {
        self.dismissals.set(self.dismissals.get() + 1);
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_logging();

    let ConfigResult { config, warning } = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let registry = config.registry()?;

    if args.list_styles {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let style_name = args
        .style
        .clone()
        .unwrap_or_else(|| config.default_style_name().to_string());
    let style = registry.resolve(&style_name)?;

    let terminal = ratatui::init();
    let result = run(terminal, &args, &config.timing, style, warning);
    ratatui::restore();

    result
}

/// Log to a file so output doesn't tear the alternate screen. Only active
/// when RUST_LOG is set.
#[cfg(debug_assertions)]
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let path = std::env::temp_dir().join("status-banner.log");
    if let Ok(file) = std::fs::File::create(&path) {
        let _ = env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init();
    }
}

fn run(
    mut terminal: DefaultTerminal,
    args: &Args,
    timing: &TimingConfig,
    style: BannerStyle,
    warning: Option<String>,
) -> Result<()> {
    let delegate = Rc::new(DemoDelegate {
        transition: timing.resize_transition(),
        dismissals: Cell::new(0),
    });
    let mut presenter = StatusBarPresenter::with_style(style.clone()).with_timing(timing.timing());
    presenter.set_delegate(&delegate);
    presenter.on_container_size_changed(terminal.size()?);

    match warning {
        Some(warning) => {
            presenter.present(&warning, IncludedStyle::Warning.style());
        }
        None => {
            presenter.present(&args.message, style.clone());
        }
    }
    if let Some(delay) = args.dismiss_after {
        presenter.schedule_dismiss(delay, None);
    }

    let mut dirty = true;
    loop {
        if presenter.tick() {
            dirty = true;
        }
        if dirty {
            terminal.draw(|frame| render(frame, &presenter, &delegate))?;
            dirty = false;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        dirty = true;
        match event::read()? {
            // Only process key press events (avoid duplicates)
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => break,
                KeyCode::Enter => {
                    presenter.present(&args.message, style.clone());
                }
                KeyCode::Char('d') => {
                    presenter.dismiss(timing.timing().dismiss_duration, None);
                }
                KeyCode::Char('a') => {
                    presenter.schedule_dismiss(timing.default_dismiss_delay(), None);
                }
                KeyCode::Char('p') => {
                    if let Some(banner) = presenter.banner_mut() {
                        let next = banner.progress().map_or(0.0, |p| p + PROGRESS_STEP);
                        banner.set_progress(if next > 1.0 { None } else { Some(next) });
                    }
                }
                KeyCode::Char('s') => {
                    if let Some(banner) = presenter.banner_mut() {
                        let show = !banner.shows_activity_indicator();
                        banner.set_activity_indicator(show);
                    }
                }
                _ => {}
            },
            Event::Resize(width, height) => {
                presenter.on_container_size_changed(Size { width, height });
            }
            _ => {}
        }
    }

    Ok(())
}

fn render(frame: &mut Frame, presenter: &StatusBarPresenter, delegate: &DemoDelegate) {
    let help = vec![
        Line::from(""),
        Line::from(""),
        Line::from("Enter  present again"),
        Line::from("d      dismiss"),
        Line::from("a      dismiss after the configured delay"),
        Line::from("p      advance progress"),
        Line::from("s      toggle activity indicator"),
        Line::from("q      quit"),
        Line::from(""),
        Line::from(format!(
            "phase: {:?}   dismissals: {}",
            presenter.phase(),
            delegate.dismissals.get()
        )),
    ];
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        frame.area(),
    );

    presenter.render(frame);
}
