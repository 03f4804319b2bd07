use colored::*;

pub const TOTAL_WIDTH: usize = 64;

pub fn header(msg: &str, quiet: u8) {
    if quiet > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    println!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right).bright_black()
    );
}

pub fn no_results(msg: &str) {
    println!("{} {}", "[-]".red().bold(), msg);
}

/// A titled list rendered as a one-level tree.
pub fn tree_list(title: &str, items: &[String]) {
    println!("{}", title.bold());
    if items.is_empty() {
        println!("  {} {}", "└─".bright_black(), "none".dimmed());
        return;
    }
    for (idx, item) in items.iter().enumerate() {
        let branch = if idx + 1 == items.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.bright_black(), item);
    }
}

pub fn tree_head(idx: usize, title: &str) {
    println!("{} {}", format!("[{}]", idx + 1).bright_black(), title.bold());
}

/// Key/value rows under the current tree head.
pub fn tree_details(details: &[(&str, String)]) {
    for (idx, (key, value)) in details.iter().enumerate() {
        let branch = if idx + 1 == details.len() { "└─" } else { "├─" };
        println!("  {} {}: {}", branch.bright_black(), key.cyan(), value);
    }
}
