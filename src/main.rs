use clap::Parser as _;
use supports_color::Stream;
use tracing::debug;

use typedfs::{
    application::{Application, ApplicationError},
    cli::Cli,
};

#[snafu::report]
fn main() -> Result<(), ApplicationError> {
    let cli_args = Cli::parse();
    setup_tracing(&cli_args);
    colored::control::set_override(supports_color::on(Stream::Stdout).is_some());
    debug!("Parsed CLI arguments: {cli_args:?}");

    Application::run(cli_args, &mut std::io::stdout().lock())?;

    Ok(())
}

fn setup_tracing(cli_args: &Cli) {
    if let Some(level) = cli_args.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}
