use advent_scaffold::utils::{logger, validation::Validate};
use advent_scaffold::{usage, CliConfig, LocalStorage, ScaffoldError, Scaffolder};

fn main() {
    logger::init_cli_logger();

    let config = match CliConfig::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => exit_with_usage(&e),
    };

    if let Err(e) = config.validate() {
        exit_with_usage(&e);
    }

    let identifier = match config.identifier() {
        Ok(identifier) => identifier,
        Err(e) => {
            report_failure(&e);
            std::process::exit(e.exit_code());
        }
    };

    tracing::info!("Scaffolding day {}", identifier);

    let scaffolder = Scaffolder::new(LocalStorage::new("."));
    let result = scaffolder.run(&identifier, &mut std::io::stdout().lock());

    match result {
        Ok(scaffold) => {
            tracing::info!(
                "Created {} and {}",
                scaffold.input_dir.display(),
                scaffold.source_file.display()
            );
        }
        Err(e) => {
            report_failure(&e);
            std::process::exit(e.exit_code());
        }
    }
}

fn exit_with_usage(e: &ScaffoldError) -> ! {
    tracing::debug!("{}", e);
    // Usage goes to stdout, alongside the status lines.
    println!("{}", usage());
    std::process::exit(e.exit_code());
}

fn report_failure(e: &ScaffoldError) {
    tracing::error!("Scaffolding failed: {}", e);
    eprintln!("Error: {}", e);
    eprintln!("Hint: {}", e.recovery_suggestion());
}
