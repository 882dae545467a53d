/// ProgressReporter port for user feedback while views load
///
/// This port abstracts progress reporting (e.g., a spinner on stderr) so
/// that it never mixes with the rendered pages on stdout.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Signals that a request is in flight; replaces any previous indicator
    ///
    /// # Arguments
    /// * `message` - What is being loaded
    fn report_loading(&self, message: &str);

    /// Reports an error or warning message, clearing any loading indicator
    fn report_error(&self, message: &str);

    /// Reports that a view finished loading, clearing any loading indicator
    fn report_completion(&self, message: &str);
}
