use console::style;

/// Prints `label` followed by a green `OK`.
pub fn print_ok(label: &str) {
    println!("{label} {}", style("OK").green().bold());
}

/// Prints `label` followed by a red `FAILED`.
pub fn print_failed(label: &str) {
    println!("{label} {}", style("FAILED").red().bold());
}

/// Prints an `OK` or `FAILED` line for `label` depending on `ok`.
pub fn print_status(label: &str, ok: bool) {
    if ok {
        print_ok(label);
    } else {
        print_failed(label);
    }
}
