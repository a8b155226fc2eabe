use clap::Args;

use crate::{
    error::Result,
    git::GitRepo,
    report::{TimingReport, inspect_all},
};

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_status(args: StatusArgs) -> Result<()> {
    let repo = GitRepo::discover()?;
    let reports = inspect_all(&repo.hook_paths())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!("Repository");
    println!("  Git dir   : {}", repo.git_dir().display());
    println!("  Work tree : {}", repo.work_tree().display());

    println!("\nHooks");
    for report in &reports {
        print_timing_report(report);
    }
    Ok(())
}

fn print_timing_report(report: &TimingReport) {
    if !report.stub_planted && !report.registered {
        println!("  - {}: not set up", report.timing);
        return;
    }

    let stub = if report.stub_planted {
        ""
    } else {
        " (stub missing, run `git-hook init`)"
    };
    let sync = if report.in_sync {
        "in sync"
    } else {
        "out of sync, run `git-hook update`"
    };
    let modified = report
        .registry_modified
        .map(|at| format!(", edited {}", at.to_rfc3339()))
        .unwrap_or_default();

    println!(
        "  - {}: {} registered, {} installed, {}{}{}",
        report.timing,
        report.registered_hooks,
        report.installed_hooks,
        sync,
        modified,
        stub
    );
    if let Some(problem) = report.problem.as_deref() {
        println!("      {problem}");
    }
}
