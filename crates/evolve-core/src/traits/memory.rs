/// Write-only sink for grounding outcomes.
///
/// The control loop calls `remember` exactly once per `ask` and never reads
/// anything back, so storage policy is entirely up to the implementation.
pub trait Memory: Send + Sync {
    fn remember(&self, query: &str, answer: &str, accepted: bool);
}
