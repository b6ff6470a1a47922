/// Outbound port for everything the user sees.
///
/// The controller never talks to a rendering surface directly; it drives this
/// trait and the surface (a console, a test recorder) decides how to show it.
pub trait SolutionDisplay: Send + Sync {
    /// Busy covers both the submit affordance (disabled while busy) and the
    /// blocking progress indicator. The two always move together.
    fn set_busy(&self, busy: bool);

    /// Blocking notification for a rejected submission.
    fn show_validation_error(&self, message: &str);

    /// Point the unsolved-instance preview at a new URL.
    fn set_preview_plot(&self, url: &str);

    /// Point the solution plot at a new URL.
    fn set_solution_plot(&self, url: &str);
}
