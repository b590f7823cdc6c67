use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use waybar_vpn_patch::patch::{Report, Targets};

#[derive(Parser)]
#[command(name = "waybar-vpn-patch")]
#[command(about = "Reapply the custom/vpn Waybar module after an upstream config reset")]
#[command(version)]
struct Cli {
    /// Waybar config directory (default: $WAYBAR_CONFIG_DIR, then the user
    /// config directory's waybar/ subdirectory)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Print the report as JSON instead of human-readable lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Patch the config, stylesheet, and toggle script (default)
    Apply,
    /// Report what apply would change, without writing
    Check,
}

fn main() {
    let cli = Cli::parse();

    let Some(targets) = Targets::resolve(cli.config_dir.as_deref()) else {
        eprintln!("Error: could not determine the user config directory");
        process::exit(2);
    };

    match cli.command.unwrap_or(Commands::Apply) {
        Commands::Apply => {
            let report = waybar_vpn_patch::commands::apply::run(&targets);
            print_report(&report, cli.json);
            if report.has_failures() {
                process::exit(2);
            }
            if !cli.json && report.any_changed() {
                println!();
                println!("Done! Restart waybar to apply changes:");
                println!("  killall waybar && waybar &");
            }
        }
        Commands::Check => {
            let report = waybar_vpn_patch::commands::check::run(&targets);
            print_report(&report, cli.json);
            if report.has_failures() {
                process::exit(2);
            }
            if report.any_changed() {
                process::exit(1);
            }
        }
    }
}

fn print_report(report: &Report, json: bool) {
    if json {
        println!("{}", report.to_json());
        return;
    }

    for target in &report.targets {
        match &target.result {
            Ok(outcome) => {
                println!("{}: {}", target.file.display(), outcome);
                if let Some(backup) = &target.backup {
                    println!("  backed up to {}", backup.display());
                }
            }
            Err(e) => {
                eprintln!("{}: error: {}", target.file.display(), e);
            }
        }
    }
}
