use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs, io,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
    time::{Duration, Instant},
};

use shoptui::api::CatalogClient;
use shoptui::config::Config;
use shoptui::model::{Model, View};
use shoptui::services::{self, ApiRequest, ApiResponse};
use shoptui::utils;

mod handlers;
mod ui;

/// Product Catalog TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp directory
    #[arg(short, long)]
    debug: bool,

    /// Backend base URL (overrides config)
    #[arg(long)]
    base_url: Option<String>,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

pub fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

pub struct App {
    pub model: Model,

    api_tx: tokio::sync::mpsc::UnboundedSender<ApiRequest>,
    api_rx: tokio::sync::mpsc::UnboundedReceiver<ApiResponse>,
}

impl App {
    fn new(config: Config) -> Self {
        let client = CatalogClient::new(config.base_url.clone());

        // Spawn the background fetch worker
        let (api_tx, api_rx) = services::api::spawn_api_service(client);

        let mut app = App {
            model: Model::new(config.page_size, config.categories),
            api_tx,
            api_rx,
        };

        // Initial page load
        app.request_catalog_fetch();
        app
    }

    /// Issue a list fetch for the current query state
    pub fn request_catalog_fetch(&mut self) {
        let (seq, query) = self.model.catalog.begin_fetch();
        log_debug(&format!("Fetching catalog (seq {}): {:?}", seq, query));
        let _ = self.api_tx.send(ApiRequest::ListProducts { seq, query });
    }

    /// Switch to the detail view and fetch the product
    pub fn open_detail(&mut self, id: String) {
        self.model.ui.view = View::Detail;
        let (seq, id) = self.model.detail.begin_fetch(id);
        log_debug(&format!("Fetching product {} (seq {})", id, seq));
        let _ = self.api_tx.send(ApiRequest::GetProduct { seq, id });
    }

    /// Leave the detail view; any in-flight detail reply is invalidated
    pub fn close_detail(&mut self) {
        self.model.detail.close();
        self.model.ui.view = View::Catalog;
    }
}

/// Load configuration with fallback logic:
/// 1. --config path (must exist)
/// 2. {config_dir}/shoptui/config.yaml
/// 3. ./config.yaml
/// 4. built-in defaults
fn load_config(cli_path: Option<String>) -> Result<Config> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if !p.exists() {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
        let config_str = fs::read_to_string(&p)?;
        return Ok(serde_yaml::from_str(&config_str)?);
    }

    let mut candidates = Vec::new();
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("shoptui").join("config.yaml"));
    }
    candidates.push(PathBuf::from("config.yaml"));

    for candidate in candidates {
        if candidate.exists() {
            let config_str = fs::read_to_string(&candidate)?;
            return Ok(serde_yaml::from_str(&config_str)?);
        }
    }

    Ok(Config::default())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    DEBUG_MODE.store(args.debug, Ordering::Relaxed);
    if args.debug {
        log_debug("Debug mode enabled");
    }

    let mut config = load_config(args.config)?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_quit {
            // The debounce timer dies with the view
            app.model.ui.debouncer.cancel();
            break;
        }

        // Commit a debounced search edit once the window has been quiet
        if let Some(text) = app.model.ui.debouncer.poll(Instant::now()) {
            if app.model.catalog.commit_search(text) {
                app.request_catalog_fetch();
            }
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            handlers::handle_api_response(app, response);
        }

        // Short poll keeps the debounce commit reasonably prompt
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key);
            }
        }
    }

    Ok(())
}
