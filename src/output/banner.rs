//! Start-up banner.

use colored::Colorize;
use std::io::{self, Write};

const BANNER: &str = r#"
+--------------------------------------------------+
|              _                _   _             |
|    ___ _   _| |__  _ __   ___| |_| |_ __ _      |
|   / __| | | | '_ \| '_ \ / _ \ __| __/ _` |     |
|   \__ \ |_| | |_) | | | |  __/ |_| || (_| |     |
|   |___/\__,_|_.__/|_| |_|\___|\__|\__\__,_|     |
|                                                  |
|               IPv4 Subnetting Tool               |
+--------------------------------------------------+"#;

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BANNER.cyan().bold())?;
    writeln!(
        out,
        "{}",
        "Welcome to Subnetta - Your IPv4 Subnetting Companion!".yellow()
    )?;
    writeln!(
        out,
        "{}",
        "Supports Classes A, B, and C with step-by-step guidance.".green()
    )
}
