// tinyscript: tokenize and parse a script, then print or browse its syntax tree

use std::fs;
use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tinyscript::parser::lexer::Lexer;
use tinyscript::parser::parse::Parser;
use tinyscript::ui::App;

/// Options taken from the command line
struct Options {
    file: String,
    show_tokens: bool,
    tui: bool,
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} <file> [--tokens] [--tui]", program_name);
    eprintln!();
    eprintln!("  --tokens   print the token stream before the syntax tree");
    eprintln!("  --tui      browse source, tokens and tree in the terminal");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  {} demos/branching.tiny", program_name);
}

fn parse_args(args: &[String]) -> Option<Options> {
    let mut file = None;
    let mut show_tokens = false;
    let mut tui = false;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--tokens" => show_tokens = true,
            "--tui" => tui = true,
            _ if arg.starts_with("--") => {
                eprintln!("Error: Unknown option '{}'", arg);
                return None;
            }
            _ if file.is_none() => file = Some(arg.clone()),
            _ => {
                eprintln!("Error: Unexpected argument '{}'", arg);
                return None;
            }
        }
    }

    let Some(file) = file else {
        eprintln!("Error: No input file provided");
        return None;
    };

    Some(Options {
        file,
        show_tokens,
        tui,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("tinyscript");

    let Some(options) = parse_args(&args) else {
        eprintln!();
        print_usage(program_name);
        std::process::exit(1);
    };

    if !Path::new(&options.file).exists() {
        eprintln!("Error: File '{}' not found", options.file);
        print_usage(program_name);
        std::process::exit(1);
    }

    let source = fs::read_to_string(&options.file)?;

    eprintln!("Parsing {}...", options.file);
    let tokens = match Lexer::new(&source).tokenize() {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("Lexer error: {}", e);
            std::process::exit(1);
        }
    };

    let program = match Parser::new(tokens.clone()).parse_program() {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Parser error: {}", e);
            std::process::exit(1);
        }
    };

    eprintln!(
        "Parsed successfully. Found {} statements.",
        program.statements.len()
    );

    if !options.tui {
        if options.show_tokens {
            for token in &tokens {
                println!("{}", token);
            }
        }
        println!("{}", program);
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source, tokens, program);
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
