//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     party-links                                       ║
║     Pull post links from kemono/coomer party users    ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(urls: &[String], link_discovery: bool, annotated: bool) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Targets: {}", urls.len());
    println!("  Link discovery: {}", if link_discovery { "on" } else { "off" });
    println!(
        "  Attachment format: {}",
        if annotated { "aria2 (annotated)" } else { "plain" }
    );
    println!();
}
