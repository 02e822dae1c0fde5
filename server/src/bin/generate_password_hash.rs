//! Offline helper that produces a bcrypt hash to place in the
//! ADMIN_PASSWORD_HASH or GENERAL_PASSWORD_HASH environment variable.

use std::io::{self, BufRead, Write};

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Password to hash. Prompted for interactively when omitted.
    password: Option<String>,
}

fn main() {
    let args = Args::parse();

    let password = match args.password {
        Some(password) => {
            eprintln!("Warning: a password passed as an argument may be visible in process history.");
            eprintln!("Run without arguments to enter it interactively.");
            password
        }
        None => prompt_password().unwrap_or_else(|err| {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }),
    };

    if password.is_empty() {
        eprintln!("Error: password cannot be empty");
        std::process::exit(1);
    }

    match bcrypt::hash(&password, 10) {
        Ok(hash) => {
            println!("Add one of these to the server's environment:");
            println!("ADMIN_PASSWORD_HASH=\"{}\"", hash);
            println!("GENERAL_PASSWORD_HASH=\"{}\"", hash);
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

fn prompt_password() -> io::Result<String> {
    print!("Enter a password: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
}
