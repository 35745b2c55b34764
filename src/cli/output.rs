//! CLI output formatting utilities.

use crate::models::Showtime;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a key-value pair.
    pub fn kv(key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a movie line with its showtimes.
    pub fn movie_line(title: &str, showtimes: &[Showtime]) {
        if showtimes.is_empty() {
            println!(
                "  {} {} ({})",
                style("*").cyan(),
                style(title).bold(),
                style("no showtimes").dim()
            );
            return;
        }

        let times: Vec<String> = showtimes.iter().map(showtime_label).collect();
        println!(
            "  {} {}\n    {}",
            style("*").cyan(),
            style(title).bold(),
            times.join("  ")
        );
    }

    /// Create a spinner.
    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}

/// Format one showing, e.g. "7:00p (IMAX)" or "9:45p [sold out]".
fn showtime_label(showtime: &Showtime) -> String {
    let mut label = showtime.time.clone();
    if let Some(format) = &showtime.format {
        label.push_str(&format!(" ({})", format));
    }
    if showtime.is_sold_out {
        label.push_str(" [sold out]");
    }
    label
}
