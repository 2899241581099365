use std::process::ExitCode;
use trinkets_cli::commands::pixelate::{PixelateCmd, handle_pixelate_command};

fn main() -> ExitCode {
    let cmd: PixelateCmd = argh::from_env();
    trinkets_cli::exit_code(handle_pixelate_command(cmd))
}
