use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use payout_instructions::{
    documented_variables, load_account_record, unresolved, AccountDetailsFormatter,
    InstructionsPreview, PreviewConfig,
};

#[derive(Parser, Debug)]
#[command(name = "payout-instructions", version, about = "Preview bank transfer instructions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an instructions template with sample order values
    Preview {
        /// Template file ("-" for stdin)
        #[arg(short = 't', long)]
        template: String,

        /// Payout account JSON file
        #[arg(short = 'a', long)]
        account: Option<PathBuf>,

        /// Config JSON file (preview values, ignored keys, labels)
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        #[arg(long)]
        amount: Option<String>,

        #[arg(long)]
        collective: Option<String>,

        #[arg(long)]
        reference: Option<String>,
    },

    /// Print the formatted details of a payout account
    Account {
        /// Payout account JSON file
        #[arg(short = 'a', long)]
        account: PathBuf,

        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },

    /// List the variables an instructions template can use
    Variables {
        /// Include `{account}` (structured bank form)
        #[arg(long)]
        structured: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Preview {
            template,
            account,
            config,
            amount,
            collective,
            reference,
        } => {
            let mut config = load_config(config)?;
            if let Some(amount) = amount {
                config.values.amount = amount;
            }
            if let Some(collective) = collective {
                config.values.collective = collective;
            }
            if let Some(reference) = reference {
                config.values.reference = reference;
            }

            let template = read_template(&template)?;
            let account = account.map(load_account_record).transpose()?;

            let preview = InstructionsPreview::from_config(config);
            for name in unresolved(&template, &preview.variables(account.as_ref())) {
                warn!(placeholder = %name, "placeholder has no value, left as is");
            }

            println!("{}", preview.render(&template, account.as_ref()));
        }
        Command::Account { account, config } => {
            let config = load_config(config)?;
            let record = load_account_record(&account)?;
            info!(path = ?account, "formatting account details");

            let formatter = AccountDetailsFormatter::new(config.formatter);
            println!("{}", formatter.format_value(&record));
        }
        Command::Variables { structured } => {
            for variable in documented_variables(structured) {
                println!("{{{}}}: {}", variable.name, variable.description);
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<PreviewConfig> {
    match path {
        Some(path) => PreviewConfig::from_file(path),
        None => Ok(PreviewConfig::default()),
    }
}

fn read_template(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read template from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(source).with_context(|| format!("Failed to read template file: {}", source))
    }
}
