//! ANSI styling helpers.

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (for headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Green text (for success).
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text (for warnings and matches).
    pub const YELLOW: &str = "\x1b[33m";
    /// Red text (for errors).
    pub const RED: &str = "\x1b[31m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Wraps text in the given codes followed by a reset.
fn wrap(codes: &[&str], text: &str) -> String {
    let mut out = codes.concat();
    out.push_str(text);
    out.push_str(colors::RESET);
    out
}

/// Formats a header with bold cyan styling.
pub fn header(text: &str) -> String {
    wrap(&[colors::BOLD, colors::CYAN], text)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    wrap(&[colors::BOLD], text)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    wrap(&[colors::DIM], text)
}

/// Formats text as a success message (green).
pub fn success(text: &str) -> String {
    wrap(&[colors::GREEN], text)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    wrap(&[colors::YELLOW], text)
}

/// Formats text as an error (red).
pub fn error(text: &str) -> String {
    wrap(&[colors::RED], text)
}

/// Returns a dimmed horizontal rule of `width` characters.
pub fn rule(width: usize) -> String {
    dim(&"─".repeat(width))
}
