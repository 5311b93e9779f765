use crate::ui::{err_theme, theme, Icons};
use owo_colors::OwoColorize;

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

/// Lineage being unavailable is not a failure, so notices go to stderr
pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(err_theme().warn.clone()));
}

pub fn section(icon: &str, title: &str) {
    println!("{} {}", icon, title.style(theme().header.clone()));
}

pub fn summary_row(label: &str, value: &str) {
    println!("  {} {}", label.style(theme().dim.clone()), value);
}
