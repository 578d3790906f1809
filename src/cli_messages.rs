//! Status lines for one-shot commands and the `config` subcommands.
//!
//! Info and success lines go to stdout next to the command output; errors
//! go to stderr so piped JSON stays clean.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Info,
    Success,
    Error,
}

impl Status {
    fn tag(self) -> &'static str {
        match self {
            Status::Info => "INFO",
            Status::Success => "SUCCESS",
            Status::Error => "ERROR",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Status::Info => "\x1b[1;33m",
            Status::Success => "\x1b[1;32m",
            Status::Error => "\x1b[1;31m",
        }
    }
}

/// `[TAG] title` with details tab-separated when present.
pub fn format_status(status: Status, title: &str, details: &str, color: bool) -> String {
    let tag = if color {
        format!("{}[{}]\x1b[0m", status.color(), status.tag())
    } else {
        format!("[{}]", status.tag())
    };
    if details.is_empty() {
        format!("{} {}", tag, title)
    } else {
        format!("{} {}\t {}", tag, title, details)
    }
}

pub fn print_status(status: Status, title: &str, details: &str) {
    let line = format_status(status, title, details, true);
    match status {
        Status::Error => eprintln!("{}", line),
        Status::Info | Status::Success => println!("{}", line),
    }
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_status(
            $crate::cli_messages::Status::Info,
            $title,
            &format!($($details)*),
        )
    };
}

/// Macro for CLI errors
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_status($crate::cli_messages::Status::Error, $title, "")
    };
}

/// Macro for CLI success messages
#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_status(
            $crate::cli_messages::Status::Success,
            $title,
            &format!($($details)*),
        )
    };
}
