//! Interactive Realodex shell.
//!
//! # Responsibility
//! - Resolve configuration from `realodex.toml` and command-line flags.
//! - Bootstrap logging and storage, then run the read-eval-print loop.

use clap::Parser;
use log::info;
use realodex_core::config::DEFAULT_CONFIG_FILE;
use realodex_core::model::birthday::today;
use realodex_core::{
    core_version, init_logging, load_config, open_db, open_db_in_memory, AppConfig,
    ContactRepository, ContactService, SqliteContactRepository,
};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "realodex", version, about = "Contact manager for real-estate agents")]
struct Cli {
    /// Configuration file; missing files fall back to defaults.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// SQLite data file, or `:memory:` for a throwaway session.
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// One of trace, debug, info, warn, error.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("realodex: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(cli)?;
    init_logging(&config.log_level, &config.log_dir)?;

    let mut conn = if config.is_in_memory() {
        open_db_in_memory()?
    } else {
        if let Some(parent) = config.data_file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        open_db(&config.data_file)?
    };
    let repo = SqliteContactRepository::try_new(&mut conn)?;
    let mut service = ContactService::open(repo)?;

    let mut stdout = io::stdout();
    writeln!(
        stdout,
        "Welcome to Realodex {}! Type `help` to see every command.",
        core_version()
    )?;
    print_displayed(&service, &mut stdout)?;
    repl(&mut service, io::stdin().lock(), stdout)?;
    info!("event=app_exit module=cli status=ok");
    Ok(())
}

fn resolve_config(cli: Cli) -> Result<AppConfig, Box<dyn Error>> {
    let mut config = load_config(&cli.config)?;
    if let Some(data_file) = cli.data_file {
        config.data_file = data_file;
    }
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level;
    }
    Ok(config)
}

fn repl<R: ContactRepository>(
    service: &mut ContactService<R>,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match service.execute_line(&line) {
            Ok(result) => {
                writeln!(output, "{}", result.feedback)?;
                if result.exit {
                    return Ok(());
                }
                if !result.show_help {
                    print_displayed(service, &mut output)?;
                }
            }
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}

fn print_displayed<R: ContactRepository>(
    service: &ContactService<R>,
    output: &mut impl Write,
) -> io::Result<()> {
    let today = today();
    for (slot, person) in service.contacts().displayed().iter().enumerate() {
        writeln!(output, "{}. {person}", slot + 1)?;
        for line in person.detail_lines(today) {
            writeln!(output, "   {line}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{repl, resolve_config, Cli};
    use clap::Parser;
    use realodex_core::{open_db_in_memory, ContactService, SqliteContactRepository};
    use std::io::Cursor;
    use std::path::PathBuf;

    #[test]
    fn flags_override_config_file_values() {
        let cli = Cli::parse_from([
            "realodex",
            "--config",
            "does-not-exist.toml",
            "--data-file",
            ":memory:",
            "--log-level",
            "warn",
        ]);
        let config = resolve_config(cli).unwrap();
        assert_eq!(config.data_file, PathBuf::from(":memory:"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn repl_runs_until_exit_and_lists_contacts() {
        let mut conn = open_db_in_memory().unwrap();
        let repo = SqliteContactRepository::try_new(&mut conn).unwrap();
        let mut service = ContactService::open(repo).unwrap();
        let input = Cursor::new(
            "add n/Amy Bee p/11111111 i/1000 e/amy@example.com a/Blk 1 f/2 t/buyer h/HDB\n\
             delete 5\n\
             exit\n\
             list\n",
        );
        let mut output = Vec::new();

        repl(&mut service, input, &mut output).unwrap();

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("New client added: Amy Bee"));
        assert!(printed.contains("1. Amy Bee"));
        assert!(printed.contains("   Preferred housing type is HDB"));
        assert!(printed.contains("   No specified Birthday."));
        assert!(printed.contains("   No days till an unspecified birthday!"));
        assert!(printed.contains("The client index provided is invalid"));
        assert!(printed.contains("Exiting Realodex as requested"));
        assert!(!printed.contains("Listed all clients"));
    }

    #[test]
    fn repl_stops_at_end_of_input() {
        let mut conn = open_db_in_memory().unwrap();
        let repo = SqliteContactRepository::try_new(&mut conn).unwrap();
        let mut service = ContactService::open(repo).unwrap();
        let mut output = Vec::new();
        repl(&mut service, Cursor::new("list\n"), &mut output).unwrap();
        assert!(String::from_utf8(output).unwrap().contains("Listed all clients"));
    }
}
