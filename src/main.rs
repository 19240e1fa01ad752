use clap::Parser;
use form_autofill::cli::commands::{cmd_fill, cmd_match, cmd_serve};
use form_autofill::cli::config::{Cli, Commands, load_config, resolve_trace_path};
use form_autofill::trace::logger::TraceLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve trace sink: CLI > config > disabled
    let tracer = TraceLogger::from_path(resolve_trace_path(cli.trace.as_deref(), &config));

    match cli.command {
        Commands::Fill {
            page,
            profile,
            format,
            output,
        } => {
            cmd_fill(
                &page,
                &profile,
                &format,
                output.as_deref(),
                &config,
                &tracer,
                cli.verbose,
            )?;
        }
        Commands::Match { hints, profile } => {
            let matched = cmd_match(&hints, profile.as_deref(), &config)?;
            if matched.is_none() {
                std::process::exit(1);
            }
        }
        Commands::Serve { page, output } => {
            cmd_serve(&page, output.as_deref(), &config, &tracer, cli.verbose)?;
        }
    }

    Ok(())
}
