use std::io;
use std::process::ExitCode;
use wordle_guesser::cli::{parse_cli, run};
use wordle_guesser::logging::init_logging;

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.verbose);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match run(&cli, stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("run failed: {e:?}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
