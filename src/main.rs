use clap::Parser;
use pkg_size_report::cli::{Cli, Commands};
use pkg_size_report::cmd;
use pkg_size_report::config::ConfigOverrides;
use std::process;

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Report {
            base,
            head,
            config,
            unchanged_files,
            hide_files,
            sort_by,
            sort_order,
            signature,
            output,
            json,
        }) => cmd::cmd_report(&cmd::ReportOptions {
            base,
            head,
            config,
            overrides: ConfigOverrides {
                unchanged_files,
                hide_files,
                sort_by,
                sort_order,
                comment_signature: signature,
            },
            output,
            json,
            emoji: !cli.no_emoji,
        }),
        Some(Commands::Init { force }) => cmd::cmd_init(force),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(shell);
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("pkg-size-report v{}", env!("CARGO_PKG_VERSION"));
            println!("Package size report generator\n");
            println!("Usage: pkg-size-report <COMMAND>\n");
            println!("Commands:");
            println!("  report       Render a size report comparing two snapshots");
            println!("  init         Create a .pkg-size-report.toml with default settings");
            println!("  completions  Generate shell completions");
            println!(
                "\nRun 'pkg-size-report <COMMAND> --help' for more information on a command."
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        use pkg_size_report::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
