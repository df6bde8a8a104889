use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "cohort-cmd")]
#[command(about = "Finds sets of interests shared by groups of people")]
#[command(version)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Group interests into sets shared by enough people
    Group {
        /// Minimum number of people an interest must have
        #[arg(long = "i-min", default_value_t = 10)]
        i_min: usize,

        /// Interests with this many people or more are dropped as too generic
        #[arg(long = "i-max", default_value_t = 50)]
        i_max: usize,

        /// Minimum number of people a set of interests must have
        #[arg(long = "min-people", default_value_t = 25)]
        min_people: usize,

        /// Input TSV file with a header and `person<TAB>interest` rows
        #[arg(default_value = utils::DEFAULT_INPUT)]
        file: String,
    },

    /// Load a TSV file and display summary information
    Inspect {
        /// Input TSV file with a header and `person<TAB>interest` rows
        #[arg(default_value = utils::DEFAULT_INPUT)]
        file: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Group {
            i_min,
            i_max,
            min_people,
            file,
        } => commands::group::run(i_min, i_max, min_people, &file, &mut out),
        Commands::Inspect { file } => commands::inspect::run(&file, &mut out),
    }
}
