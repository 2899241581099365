use std::process::ExitCode;
use trinkets_cli::commands::sort_image::{SortImageCmd, handle_sort_image_command};

fn main() -> ExitCode {
    let cmd: SortImageCmd = argh::from_env();
    trinkets_cli::exit_code(handle_sort_image_command(cmd))
}
