/// ProgressReporter port for reporting progress during operations
///
/// Reports go to a side channel (e.g. stderr) so they never mix with the
/// formatted output.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress as `current` out of `total` steps
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
