use std::{env, fs::read_to_string, process::ExitCode, time::Instant};

use pluto::{display_error, lexer::lexer::tokenize};
use tracing::debug;

const SAMPLE: &str = "
    Lang. Pluto
    Num x = 10;
    Deci y = 20.5;
    Num result = x + y * 2;
    Is result > 30 {
        Alpha z = 'A';
    } Es {
        Flag flag = True;
    }
";

/// Enabled with `RUST_LOG=pluto=debug` or `RUST_LOG=pluto=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let (file_name, source) = match args.as_slice() {
        [_] => (String::from("<sample>"), SAMPLE.to_string()),
        [_, file_path] => match read_to_string(file_path) {
            Ok(contents) => (file_path.clone(), contents),
            Err(err) => {
                eprintln!("Failed to read {}: {}", file_path, err);
                return ExitCode::FAILURE;
            }
        },
        _ => {
            eprintln!("Usage: pluto [FILE]");
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    match tokenize(&source) {
        Ok(tokens) => {
            debug!(elapsed = ?start.elapsed(), "tokenized {}", file_name);
            for token in tokens {
                token.debug();
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            display_error(&error, &source, &file_name);
            ExitCode::FAILURE
        }
    }
}
