use clap::Parser;
use envseal::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encrypt { no_gitignore } => {
            envseal::cli::commands::encrypt::execute(&cli, no_gitignore)
        }
        Commands::Decrypt => envseal::cli::commands::decrypt::execute(&cli),
        Commands::List => envseal::cli::commands::list::execute(&cli),
        Commands::Completions { shell } => envseal::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        envseal::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
