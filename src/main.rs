use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use git_hook::commands::{
    InstallArgs, StatusArgs, TestArgs, TimingArgs, run_edit, run_init, run_install, run_show,
    run_status, run_test, run_update,
};
use git_hook::error::Result;

#[derive(Parser, Debug)]
#[command(
    name = "git-hook",
    about = "Chain several managed scripts behind each git hook",
    version
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Plant the delegation stub for every hook timing
    Init,
    /// Register a hook source and install it
    Install(InstallArgs),
    /// Run the installed hooks for a timing (invoked by git)
    ///
    /// Everything after the timing is forwarded to the hooks untouched,
    /// including `-v` or `--help`.
    #[command(disable_help_flag = true)]
    Test(TestArgs),
    /// Edit the registered hooks and reinstall if they changed
    Edit(TimingArgs),
    /// Reinstall every registered hook for a timing
    Update(TimingArgs),
    /// Print the registered hooks for a timing
    Show(TimingArgs),
    /// Summarize stubs, registries and installed hooks
    Status(StatusArgs),
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "git_hook=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<()> = match cli.command {
        Commands::Init => run_init(),
        Commands::Install(args) => run_install(args).await,
        Commands::Test(args) => run_test(args),
        Commands::Edit(args) => run_edit(args).await,
        Commands::Update(args) => run_update(args).await,
        Commands::Show(args) => run_show(args),
        Commands::Status(args) => run_status(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
