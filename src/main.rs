use std::error::Error as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use rusty_accounts::{
    Account, Config, Error, Format, ReadAccountInput, DEFAULT_BANK_CODE, DEFAULT_COUNTRY,
    DEFAULT_STORE_PATH,
};

#[derive(Parser)]
#[command(name = "rusty-accounts")]
#[command(about = "Create and look up bank accounts kept in a JSON or CSV file", long_about = None)]
struct Cli {
    /// Account store file; `.csv` selects CSV, anything else JSON
    #[arg(long, env = "ACCOUNTS_STORE", default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,
    /// Force the store format instead of inferring it from the extension
    #[arg(long, env = "ACCOUNTS_FORMAT")]
    format: Option<Format>,
    #[arg(long, env = "ACCOUNTS_COUNTRY", default_value = DEFAULT_COUNTRY)]
    country: String,
    #[arg(long, env = "ACCOUNTS_BANK_CODE", default_value = DEFAULT_BANK_CODE)]
    bank_code: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open an account and print its account number
    Create {
        #[arg(long)]
        holder: String,
        #[arg(long, default_value = "0")]
        balance: Decimal,
    },
    /// Print the account with the given account number
    Read { account_number: String },
    /// Print every account
    List,
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(Error::Validation(messages)) = err.downcast_ref::<Error>() {
                for message in messages {
                    eprintln!("Error: {}", message);
                }
                return ExitCode::from(2);
            }
            eprintln!("Error: {}", err);
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::new(cli.store, cli.format, &cli.country, &cli.bank_code)?;
    let service = config.service();

    match cli.command {
        Command::Create { holder, balance } => {
            let account_number = service.create_account(Some(Account::new(holder, balance)))?;
            println!("{}", account_number);
        }
        Command::Read { account_number } => {
            match service.read_account(Some(ReadAccountInput::new(account_number)))? {
                Some(account) => println!("{}", serde_json::to_string_pretty(&account)?),
                None => println!("no account found"),
            }
        }
        Command::List => {
            let accounts = service.retrieve_all_accounts()?;
            println!("{}", serde_json::to_string_pretty(&accounts)?);
        }
    }
    Ok(())
}
