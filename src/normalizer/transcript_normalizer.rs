/// Trait for turning raw model output into display-ready text
pub trait TranscriptNormalizer: Send + Sync {
    /// Normalize the raw transcript. Must be total: any input yields an output.
    fn normalize(&self, raw_output: &str) -> String;

    /// Get the name of this normalizer for logging
    fn name(&self) -> &'static str;
}
