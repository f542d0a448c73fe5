mod app;

use std::process::ExitCode;

fn main() -> ExitCode {
    match app::run_app() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("lecsimp: {err:#}");
            ExitCode::FAILURE
        }
    }
}
