use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use voice_console::config::MODELS;
use voice_console::credential::StaticCredentials;
use voice_console::session::replay_payloads;
use voice_console::{
    create_router, render_text, AppState, AssistantSession, Config, Credential, CredentialProvider,
    HttpCredentialClient, NatsMediaSession, TokenRequest, UiPhase,
};

#[derive(Parser)]
#[command(name = "voice-console", about = "Live console for a real-time voice assistant")]
struct Cli {
    /// Configuration file (extension optional)
    #[arg(long, default_value = "config/voice-console")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start a call and render it until it ends or Ctrl-C
    Run {
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        room: Option<String>,
        #[arg(long)]
        identity: Option<String>,
        /// Use this token instead of asking the credential endpoint
        #[arg(long)]
        token: Option<String>,
        /// Don't serve the HTTP render surface
        #[arg(long)]
        no_http: bool,
    },
    /// Fold a file of raw event payloads (one JSON object per line)
    Replay { file: PathBuf },
    /// List the models the agent can run
    Models,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Models => {
            for model in MODELS {
                println!("{}", model);
            }
            Ok(())
        }
        Command::Replay { file } => replay_file(&file),
        Command::Run {
            model,
            room,
            identity,
            token,
            no_http,
        } => {
            let cfg = Config::load(&cli.config)?;
            info!("Loaded config: {}", cfg.service.name);
            run(cfg, model, room, identity, token, no_http).await
        }
    }
}

fn replay_file(path: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let state = replay_payloads(
        contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::as_bytes),
    );

    print!("{}", render_text(&UiPhase::Active, &state));
    Ok(())
}

async fn run(
    cfg: Config,
    model: Option<String>,
    room: Option<String>,
    identity: Option<String>,
    token: Option<String>,
    no_http: bool,
) -> Result<()> {
    let room = room.unwrap_or(cfg.credentials.room);
    let model = model.unwrap_or(cfg.credentials.model);
    if !MODELS.contains(&model.as_str()) {
        warn!("Model {} is not in the known catalogue", model);
    }

    let mut request = TokenRequest::new(room.clone(), model);
    if let Some(identity) = identity.or(cfg.credentials.identity) {
        request = request.with_identity(identity);
    }

    let credentials: Arc<dyn CredentialProvider> = match token {
        Some(token) => Arc::new(StaticCredentials::new(Credential::new(token))),
        None => Arc::new(HttpCredentialClient::new(cfg.credentials.endpoint)),
    };
    let media = Box::new(NatsMediaSession::new(
        cfg.transport.nats_url,
        room,
        cfg.transport.subject_prefix,
    ));

    let mut session = AssistantSession::new(request, credentials, media);
    let app_state = AppState::new(session.state(), session.phase());

    if !no_http {
        let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        info!("HTTP render surface on http://{}", addr);

        let router = create_router(app_state.clone());
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                warn!("HTTP server stopped: {}", e);
            }
        });
    }

    // Print the window on every change
    let mut updates = app_state.session.clone();
    let phase = app_state.phase.clone();
    let printer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let text = render_text(&phase.borrow(), &updates.borrow_and_update());
            println!("{}", text);
        }
    });

    match session.start().await {
        Ok(()) => {}
        Err(e) if e.is_recoverable() => {
            // Keep the unavailable phase visible until the user gives up
            error!("Session unavailable: {}", e);
            tokio::signal::ctrl_c().await.context("Failed to wait for Ctrl-C")?;
            printer.abort();
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to start session"),
    }

    let remote_end = tokio::select! {
        closed = session.closed() => Some(closed),
        _ = tokio::signal::ctrl_c() => None,
    };
    let final_state = match remote_end {
        Some(closed) => closed?,
        None => {
            info!("Ending call");
            session.stop().await?
        }
    };
    printer.abort();

    print!("{}", render_text(&UiPhase::Active, &final_state));
    Ok(())
}
