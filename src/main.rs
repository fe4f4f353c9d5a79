use std::io;

use clap::Parser;
use colored::Colorize;
use tracing::error;
use tracing_subscriber::EnvFilter;

use student_records::{
    commands::Menu,
    util::{Console, StudentStore},
};

#[derive(Parser)]
#[clap(name = "Student Records")]
#[clap(version = "0.1")]
#[clap(about = "Manage the students table from an interactive menu")]
pub struct Cli {
    /// Database file holding the students table
    #[clap(short, long, env = "STUDENTS_DB", default_value = "students.db")]
    database: String,

    /// Log every statement to stderr
    #[clap(short, long)]
    verbose: bool,
}

fn setup_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("student_records=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let store = match StudentStore::open(&cli.database) {
        Ok(store) => store,
        Err(why) => {
            println!("{} {}", "[ERROR]".red().bold(), why);
            return;
        }
    };

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    if let Err(why) = Menu::new(&store).run(&mut console) {
        error!(error = %why, "console failure");
        return;
    }

    if let Err(why) = store.close() {
        error!(error = %why, "could not close the database cleanly");
    }
}
