//! CLI tool to scan prompt files and inspect their span structure.

use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: promptspan <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  scan    Scan prompt file(s) and print spans as JSON");
        eprintln!("  check   Report unbalanced syntax in prompt file(s)");
        eprintln!("  strip   Remove //...// comments and print to stdout");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  promptspan scan prompt.txt");
        eprintln!("  promptspan check prompt.txt");
        eprintln!("  promptspan strip prompt.txt");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match command {
            "scan" => {
                let result = promptspan_rs::parse(&content);
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("{path}: {e}");
                        had_error = true;
                    }
                }
            }
            "check" => {
                let result = promptspan_rs::parse(&content);
                if result.unclosed_braces == 0
                    && result.unclosed_brackets == 0
                    && !result.unclosed_weight
                {
                    eprintln!("{path}: balanced ({} span(s))", result.spans.len());
                } else {
                    eprintln!(
                        "{path}: {} unclosed brace(s), \
                         {} unclosed bracket(s), \
                         unterminated weight: {}",
                        result.unclosed_braces, result.unclosed_brackets, result.unclosed_weight
                    );
                    had_error = true;
                }
            }
            "strip" => match promptspan_rs::strip_comments(&content) {
                Ok(stripped) => {
                    print!("{stripped}");
                }
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            },
            _ => {
                eprintln!("Unknown command: {command}");
                return ExitCode::from(2);
            }
        }
    }

    if had_error { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
