use std::process::ExitCode;

fn main() -> ExitCode {
    weekly_tracker_lib::run()
}
