use anyhow::Result;
use clap::{Parser, Subcommand};

use nestegg::cli::{
    handle_config_command, handle_export_command, handle_goal_command, handle_income_command,
    handle_report_command, handle_savings_command,
};
use nestegg::config::{NestEggPaths, Settings};
use nestegg::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "nestegg",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based income and savings tracker",
    long_about = "NestEgg tracks where your income comes from and how much of it \
                  you save each month, then projects your savings forward and \
                  estimates how long each savings goal will take."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init,

    /// Show or change settings
    #[command(subcommand)]
    Config(nestegg::cli::ConfigCommands),

    /// Income sources and monthly income entries
    #[command(subcommand)]
    Income(nestegg::cli::IncomeCommands),

    /// Monthly savings records
    #[command(subcommand)]
    Savings(nestegg::cli::SavingsCommands),

    /// Savings goals
    #[command(subcommand)]
    Goal(nestegg::cli::GoalCommands),

    /// Dashboard, what-if, goal and yearly reports
    #[command(subcommand)]
    Report(nestegg::cli::ReportCommands),

    /// Export all data as JSON or YAML
    Export(nestegg::cli::ExportArgs),

    /// Show recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    nestegg::init();
    let cli = Cli::parse();

    let paths = NestEggPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing NestEgg at: {}", paths.base_dir().display());
            let settings = initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Saving {} of income by default.", settings.savings_percentage);
            println!("Run 'nestegg income add <name> <amount>' to add your first income source.");
        }
        Some(Commands::Config(cmd)) => {
            handle_config_command(&storage, &paths, &settings, cmd)?;
        }
        Some(Commands::Income(cmd)) => {
            handle_income_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Savings(cmd)) => {
            handle_savings_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, &settings, args)?;
        }
        Some(Commands::Audit { limit }) => {
            let entries = storage.audit().read_recent(limit)?;
            if entries.is_empty() {
                println!("No changes recorded yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        None => {
            println!("NestEgg - income and savings tracking");
            println!();
            println!("Run 'nestegg --help' for usage information.");
            println!("Run 'nestegg report dashboard' to see this month's numbers.");
        }
    }

    Ok(())
}
