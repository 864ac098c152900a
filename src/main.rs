//! Binary entry point for the Ameen Pay waitlist client

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{error, info};

use ameen_waitlist::{
    cli::{Cli, Commands},
    collector::hosted_form_url,
    config::Config,
    flow::SubmissionFlow,
    models::SubmissionStatus,
    tui::App,
};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "ameen_waitlist=info");
    }

    let cli = Cli::parse();

    match cli.command {
        Some(command) => {
            init_console_logging();
            let config = Config::from_env()?;
            run_command(command, &config).await
        }
        None => {
            // Log to file only so the TUI display stays clean.
            init_file_logging()?;
            let config = Config::from_env()?;
            run_tui(config).await
        }
    }
}

fn init_console_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

fn init_file_logging() -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let file_appender = tracing_appender::rolling::never(".", "ameen-waitlist.log");

    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    Ok(())
}

/// Handle CLI mode commands - print output and exit
async fn run_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Submit {
            company,
            contact,
            email,
            phone,
            volume,
        } => {
            let form = Commands::build_form(&company, &contact, &email, &phone, volume.as_deref())?;

            let mut flow = SubmissionFlow::from_config(config);
            flow.form = form;

            info!("Submitting waitlist entry for: {}", company);

            match flow.submit().await {
                SubmissionStatus::Submitted => {
                    println!("You're on the waitlist! We'll be in touch soon.");
                    Ok(())
                }
                SubmissionStatus::Failed(reason) => {
                    eprintln!("Submission failed: {}", reason);
                    std::process::exit(1);
                }
                status => {
                    // Unreachable for a one-shot submit, but don't panic on it.
                    error!("Unexpected submission status: {:?}", status);
                    std::process::exit(1);
                }
            }
        }
        Commands::HostedForm => {
            println!("{}", hosted_form_url());
            Ok(())
        }
    }
}

async fn run_tui(config: Config) -> Result<()> {
    info!("Starting Ameen Pay waitlist TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let result = app.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match result {
        Ok(_) => {
            info!("Waitlist TUI exited successfully");
            Ok(())
        }
        Err(e) => {
            error!("Waitlist TUI encountered an error: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
