// bisectty: Interactive Step-by-Step Binary Search Visualizer

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use bisectty::session;
use bisectty::ui::App;

const DEFAULT_ARRAY: &str = "2, 5, 8, 12, 16, 23, 38, 45, 56, 67, 78";
const DEFAULT_TARGET: &str = "23";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args
        .first()
        .map(|s| s.as_str())
        .unwrap_or("bisectty")
        .to_string();

    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        print_usage(&program_name);
        return Ok(());
    }

    // Headless mode: run the whole search and print the transcript
    if args.get(1).map(|s| s.as_str()) == Some("--run") {
        if args.len() != 4 {
            eprintln!("Error: --run needs an array and a target");
            eprintln!();
            eprintln!("Usage: {} --run \"<array>\" <target>", program_name);
            std::process::exit(1);
        }
        let (summary, log) = session::run_session(&args[2], &args[3]);
        if summary.starts_with("Error:") {
            eprintln!("{}", summary);
            std::process::exit(1);
        }
        if !log.is_empty() {
            println!("{}", log);
        }
        println!("{}", summary);
        return Ok(());
    }

    let (array_text, target_text, auto_start) = match args.len() {
        1 => (DEFAULT_ARRAY.to_string(), DEFAULT_TARGET.to_string(), false),
        3 => (args[1].clone(), args[2].clone(), true),
        _ => {
            eprintln!("Error: expected an array and a target");
            eprintln!();
            eprintln!("Usage: {} [\"<array>\" <target>]", program_name);
            eprintln!();
            eprintln!("Examples:");
            eprintln!(
                "  {}                          # Open the TUI with a demo array",
                program_name
            );
            eprintln!(
                "  {} \"2, 5, 8, 12, 16\" 12     # Start searching immediately",
                program_name
            );
            eprintln!(
                "  {} --run \"1, 3, 5, 7\" 5     # Print the transcript and exit",
                program_name
            );
            std::process::exit(1);
        }
    };

    // Reject bad inputs before entering the alternate screen
    if auto_start {
        let (state, status, _) = session::initialize_session(&array_text, &target_text);
        if state.is_none() {
            eprintln!("{}", status);
            std::process::exit(1);
        }
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(array_text, target_text);
    if auto_start {
        app.start_search();
    }
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn print_usage(program_name: &str) {
    println!("bisectty: step-by-step binary search visualizer");
    println!();
    println!("Usage: {} [\"<array>\" <target>]", program_name);
    println!("       {} --run \"<array>\" <target>", program_name);
    println!();
    println!("Modes:");
    println!("  (no arguments)          Open the TUI with a demo array");
    println!("  \"<array>\" <target>      Open the TUI and start searching immediately");
    println!("  --run \"<array>\" <target>  Print the full search transcript and exit");
    println!();
    println!("The array is comma-separated, sorted ascending; the target is an integer.");
}
