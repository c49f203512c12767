//! User-facing console output.
//! Results go to stdout unadorned so scripts can parse them; notices and
//! errors get a colored prefix when the stream is a terminal.

use owo_colors::OwoColorize;

fn stdout_is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn stderr_is_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

pub fn print_info(msg: &str) {
    if stderr_is_tty() {
        eprintln!("{} {}", "info:".cyan().bold(), msg);
    } else {
        eprintln!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if stderr_is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if stderr_is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

/// Completion notice for copy/move. Plain text when piped.
pub fn print_success(msg: &str) {
    if stdout_is_tty() {
        println!("{}", msg.green());
    } else {
        println!("{}", msg);
    }
}

/// Primary result line (counts, sizes). Never colored.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}
