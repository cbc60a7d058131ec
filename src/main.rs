use maegia_console::config::{load_config, AppConfig, CliArgs};
use maegia_console::{app, errors, event, logging, ui};

use anyhow::Result;
use app::AppState;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use errors::AppResult;
use logging::LogSink;
use maegia_console::Session;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = CliArgs::parse();

    // Load configuration
    let config = load_config(&args)?;

    if args.debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(());
    }

    let headless = !args.exec.is_empty();
    let sink = if headless {
        LogSink::FileOrStderr
    } else {
        LogSink::FileOnly
    };
    logging::init_logging(&config, args.verbose, sink)?;

    let session = Session::new(config.catalog.clone(), &config.default_node, config.theme)?;
    log::info!(
        "session started on '{}' with {} nodes",
        config.default_node,
        config.catalog.len()
    );

    if headless {
        run_headless(session, &args.exec, args.json)?;
        return Ok(());
    }

    run_tui(config, session)
}

fn run_headless(mut session: Session, commands: &[String], json: bool) -> AppResult<()> {
    let mut instruction = session.render();
    for command in commands {
        instruction = session.submit(command);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &instruction)?;
        writeln!(out)?;
    } else {
        for entry in session.log() {
            writeln!(out, "{}", entry)?;
        }
    }
    Ok(())
}

fn run_tui(config: AppConfig, session: Session) -> Result<()> {
    let mut app = AppState::new(config, session);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Clear the terminal
    terminal.clear()?;

    // Run the main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors from the main loop
    if let Err(err) = res {
        log::error!("main loop failed: {}", err);
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> Result<()> {
    let tick = app.tick_rate();
    while app.running {
        // Draw the UI
        terminal.draw(|frame| ui::render(frame, app))?;

        // Handle events
        if let Some(action) = event::handle_events(tick)? {
            app.handle(action);
        }
    }

    Ok(())
}
