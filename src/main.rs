use std::process::ExitCode;

use clap::Parser;
use docform::app::{self, Cli, Outcome};

fn main() -> ExitCode {
    let cli = Cli::parse();
    app::init_tracing(&cli);

    let mut stdout = std::io::stdout().lock();
    match app::run(cli, &mut stdout) {
        Ok(Outcome::Valid) => ExitCode::SUCCESS,
        Ok(Outcome::Invalid) => ExitCode::from(1),
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::from(2)
        }
    }
}
