use clap::{Parser, Subcommand};
use colored::Colorize;
use devtools_cli::commands::{init, run, status};
use devtools_cli::logging;

#[derive(Parser)]
#[command(
    name = "devtools",
    version,
    about = "Python development utilities and project management tools."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new Python project with best practices
    Init {
        /// Run in interactive mode
        #[arg(short, long)]
        interactive: bool,
        /// Project name
        #[arg(short, long)]
        name: Option<String>,
        /// Project template
        #[arg(short, long, value_enum)]
        template: Option<init::Template>,
    },
    /// Show project status and health metrics
    Status,
    /// Run common development commands
    Run {
        /// Task to run (test, lint, format, typecheck, clean)
        command: String,
        /// Show the invocation and stream the tool's output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    logging::init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init {
            interactive,
            name,
            template,
        } => init::run(init::InitOptions {
            name,
            template,
            interactive,
        }),
        Commands::Status => status::run(),
        Commands::Run { command, verbose } => run::run(&command, verbose),
    };

    if let Err(e) = result {
        eprintln!("{}", format!("Error: {e}").red());
        std::process::exit(e.exit_code());
    }
}
