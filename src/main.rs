// sturun: run stu seven-segment programs on a JavaScript host

use std::io;

use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sturun::config::{self, Invocation};
use sturun::harness;
use sturun::runtime::RuntimeContext;
use sturun::ui::{App, Crossterm, TerminalSession};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let program_name = args
        .first()
        .map(|s| s.as_str())
        .unwrap_or("sturun")
        .to_string();

    let invocation = match config::parse_args(args.into_iter().skip(1), |key| {
        std::env::var(key).ok()
    }) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprint!("{}", config::usage(&program_name));
            std::process::exit(1);
        }
    };

    match invocation {
        Invocation::Help => {
            print!("{}", config::usage(&program_name));
            Ok(())
        }
        Invocation::Panel => run_panel(),
        Invocation::Run(config) => match harness::run(&config) {
            Ok(report) => {
                debug!(
                    script = %report.script_path.display(),
                    rewritten_bytes = report.rewritten_bytes,
                    status = ?report.status,
                    "run finished"
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}

/// Log to stderr so the program's own output stays on stdout
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_panel() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = TerminalSession::enter(Crossterm)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(RuntimeContext::new());
    let res = app.run(&mut terminal);

    // Restore terminal
    session.restore()?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
