use std::process::ExitCode;

fn main() -> ExitCode {
    tavolo_cli::run()
}
