use clap::Parser as ClapParser;
use sprig::cli::{self, CliError, FilterOptions};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "sprig")]
#[command(about = "sprig - A tiny jq-style filter language for plucking values out of JSON")]
#[command(version)]
struct Cli {
    /// The filter to run, e.g. '.users[0].name'
    filter: String,

    /// JSON input (reads from stdin if not provided)
    #[arg(short, long)]
    input: Option<String>,

    /// Pretty-print the output
    #[arg(short, long)]
    pretty: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let input = match cli.input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Io)?;
            Some(buffer)
        }
        None => None,
    };

    let options = FilterOptions {
        filter: cli.filter,
        input,
        pretty: cli.pretty,
    };

    println!("{}", cli::run_filter(&options)?);
    Ok(())
}
