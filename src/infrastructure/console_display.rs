use crate::application::display::SolutionDisplay;

/// Terminal rendering surface.
///
/// Where the browser UI swaps image sources and toggles a modal, this prints
/// what changed so a shell user can follow the interaction.
pub struct ConsoleDisplay;

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl SolutionDisplay for ConsoleDisplay {
    fn set_busy(&self, busy: bool) {
        if busy {
            println!("⏳ Solving... (submissions are locked until the backend answers)");
        } else {
            println!("✓ Done, submissions unlocked");
        }
    }

    fn show_validation_error(&self, message: &str) {
        eprintln!("✗ {}", message);
    }

    fn set_preview_plot(&self, url: &str) {
        println!("Instance preview: {}", url);
    }

    fn set_solution_plot(&self, url: &str) {
        println!("Solution plot:    {}", url);
    }
}
