use crate::errors::FinbriefResult;

/// Turns the selected passages into one generated summary.
pub trait ISummaryGenerator {
    /// Generate a summary from passages in ranked order.
    fn generate(&self, passages: &[String]) -> FinbriefResult<String>;

    /// Identifier of the model that will be asked first.
    fn model(&self) -> &str;
}
