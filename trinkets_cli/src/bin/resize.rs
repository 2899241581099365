use std::process::ExitCode;
use trinkets_cli::commands::resize::{ResizeCmd, handle_resize_command};

fn main() -> ExitCode {
    let cmd: ResizeCmd = argh::from_env();
    trinkets_cli::exit_code(handle_resize_command(cmd))
}
