use crate::context::Notifier;
use colored::Colorize;

/// Renders error dialogs on the terminal for hosts without a windowing
/// layer: title line in red, body indented underneath.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn error(&mut self, title: &str, body: &str) {
        eprintln!("{} {}", "✗".red(), title.red().bold());
        for line in body.lines() {
            eprintln!("  {}", line);
        }
    }
}
