/// Port through which use cases report what they did.
///
/// Messages are plain text with list and item ids already formatted in.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    /// Recoverable oddities, such as deleting an item that was already gone.
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
