use anyhow::Result;
use clap::{Parser, Subcommand};

use purse::cli::{
    handle_add_command, handle_history_command, handle_list_command, handle_lock_command,
    handle_show_command, handle_transfer_command,
};
use purse::config::{PursePaths, Settings};
use purse::storage::Storage;

#[derive(Parser)]
#[command(
    name = "purse",
    version,
    about = "Terminal-based budget purse ledger with atomic transfers",
    long_about = "purse keeps a set of budget envelopes (purses) with allocated \
                  and spent balances. Transfers between purses are atomic and \
                  fully audited; locked purses require an explicit break-glass \
                  override to transfer out of."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the ledger and seed the default purses
    Init,

    /// List all purses with balances
    #[command(alias = "ls")]
    List,

    /// Show details for one purse
    Show {
        /// Purse name or ID
        purse: String,
    },

    /// Create a new purse
    Add {
        /// Purse name
        name: String,
        /// Purse kind (flexible, locked, emergency)
        #[arg(short, long, default_value = "flexible")]
        kind: String,
        /// Initial allocation (e.g. "450.00" or "450")
        #[arg(short, long, default_value = "0")]
        allocated: String,
        /// Soft-overdraft buffer allowance
        #[arg(short, long, default_value = "0")]
        buffer: String,
        /// Lock the purse against outgoing transfers
        #[arg(long)]
        locked: bool,
    },

    /// Lock a purse against outgoing transfers
    Lock {
        /// Purse name or ID
        purse: String,
    },

    /// Unlock a purse
    Unlock {
        /// Purse name or ID
        purse: String,
    },

    /// Move funds from one purse to another
    Transfer {
        /// Source purse (name or ID)
        from: String,
        /// Destination purse (name or ID)
        to: String,
        /// Amount to move (e.g. "25.00")
        amount: String,
        /// Reason recorded in the audit trail
        #[arg(short, long, default_value = "manual transfer")]
        reason: String,
        /// Override the lock on the source purse
        #[arg(long)]
        break_glass: bool,
    },

    /// Show the audit history of a purse
    History {
        /// Purse name or ID
        purse: String,
        /// Number of most recent entries to show (0 for all)
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PursePaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::open(&paths.db_file())?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing purse ledger at: {}", paths.data_dir().display());
            if storage.seed_default_purses()? {
                settings.save(&paths)?;
                println!("Seeded default purses:");
                println!("  - Groceries (flexible)");
                println!("  - Rent (locked)");
                println!("  - Emergency Fund (emergency, locked)");
                println!("  - Fun Money (flexible)");
                println!();
                println!("Run 'purse list' to see balances.");
            } else {
                println!("Ledger already contains purses; nothing to do.");
            }
        }
        Some(Commands::List) => handle_list_command(&storage)?,
        Some(Commands::Show { purse }) => handle_show_command(&storage, &purse)?,
        Some(Commands::Add {
            name,
            kind,
            allocated,
            buffer,
            locked,
        }) => handle_add_command(&storage, &name, &kind, &allocated, &buffer, locked)?,
        Some(Commands::Lock { purse }) => handle_lock_command(&storage, &purse, true)?,
        Some(Commands::Unlock { purse }) => handle_lock_command(&storage, &purse, false)?,
        Some(Commands::Transfer {
            from,
            to,
            amount,
            reason,
            break_glass,
        }) => handle_transfer_command(&storage, &from, &to, &amount, reason, break_glass)?,
        Some(Commands::History { purse, limit }) => {
            handle_history_command(&storage, &settings, &purse, limit)?
        }
        Some(Commands::Config) => {
            println!("purse configuration");
            println!("===================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Database:         {}", paths.db_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("purse - budget purse ledger with atomic transfers");
            println!();
            println!("Run 'purse --help' for usage information.");
            println!("Run 'purse init' to create the default purses.");
        }
    }

    Ok(())
}
