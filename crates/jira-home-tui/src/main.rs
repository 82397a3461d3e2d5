mod app;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use jira_home_client::credentials::DEFAULT_KEYRING_SERVICE;
use jira_home_client::{
    CredentialChain, CredentialProvider, EnvToken, KeyringToken, ProxyClient, StaticToken,
    DEFAULT_PROXY_URL,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use tokio::time::Duration;
use tracing::info;

fn setup_logging() -> Result<()> {
    let mut log_path = std::env::temp_dir();
    log_path.push("jira-home-tui.log");

    let log_file = std::fs::File::create(log_path)?;
    let subscriber = tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter("jira_home_tui=debug,jira_home_client=debug")
        .json()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        let _ = crossterm::execute!(std::io::stdout(), crossterm::cursor::Show);

        tracing::error!(?panic_info, "Application panicked");

        eprintln!("A fatal error occurred: {}", panic_info);

        original_hook(panic_info);
    }));
}

#[derive(Parser, Debug)]
#[command(name = "jira-home")]
#[command(about = "Jira Home - project dashboard in the terminal", long_about = None)]
struct Args {
    /// Proxy base URL
    #[arg(short, long, default_value = DEFAULT_PROXY_URL)]
    proxy_url: String,

    /// Bearer token for the proxy (otherwise JIRA_HOME_TOKEN, then the keyring)
    #[arg(short, long)]
    token: Option<String>,

    /// Keyring service holding the token
    #[arg(long, default_value = DEFAULT_KEYRING_SERVICE)]
    keyring_service: String,

    /// Keyring user holding the token
    #[arg(long)]
    keyring_user: Option<String>,

    /// Save --token in the keyring for later runs
    #[arg(long, requires = "token")]
    store_token: bool,
}

impl Args {
    fn keyring(&self) -> Option<KeyringToken> {
        self.keyring_user
            .clone()
            .or_else(|| std::env::var("USER").ok())
            .map(|user| KeyringToken::new(self.keyring_service.clone(), user))
    }
}

fn credential_chain(args: &Args) -> CredentialChain {
    let mut chain = CredentialChain::new();

    if let Some(token) = &args.token {
        chain = chain.with(StaticToken(token.clone()));
    }
    chain = chain.with(EnvToken::default());

    if let Some(keyring) = args.keyring() {
        chain = chain.with(keyring);
    }

    chain
}

fn store_token(args: &Args) -> Result<()> {
    let (Some(token), Some(keyring)) = (&args.token, args.keyring()) else {
        anyhow::bail!("--store-token needs --token and a keyring user");
    };
    keyring.store(token)?;
    info!("Stored token in keyring service {}", args.keyring_service);
    Ok(())
}

/// Hand `url` to the platform opener
fn open_link(url: &str) -> io::Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = std::process::Command::new("open");
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut command = std::process::Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    };
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = std::process::Command::new("xdg-open");

    command
        .arg(url)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()?;
    Ok(())
}

fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Char('o') => {
            if let Some(url) = app.project_link().map(str::to_string) {
                app.status_message = match open_link(&url) {
                    Ok(()) => format!("Opened {}", url),
                    Err(e) => {
                        tracing::error!("Failed to open {}: {}", url, e);
                        format!("Could not open {}", url)
                    }
                };
            }
        }
        _ => {}
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;
    setup_panic_hook();
    info!("Jira Home TUI starting up");

    let args = Args::parse();

    if args.store_token {
        store_token(&args)?;
    }

    let client = Arc::new(ProxyClient::new(args.proxy_url.clone()));
    info!("Using proxy at {}", client.base_url());
    let credentials: Arc<dyn CredentialProvider> = Arc::new(credential_chain(&args));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    app.start_fetch(client, credentials);

    let result = run(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(
        fetch_cancelled = app.is_fetch_cancelled(),
        "Jira Home TUI exiting"
    );
    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.poll_fetch();
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit {
            return Ok(());
        }

        tokio::time::sleep(Duration::from_millis(16)).await;

        if event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key_event(app, key.code, key.modifiers);
                }
            }
        }
    }
}
