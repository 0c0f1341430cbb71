use clap::Args;

pub mod document;
pub mod object_store;
pub mod provider;
pub mod stream;

pub use provider::aws::AWSConfigCliArgs;

/// Parameters controlling how long the binaries wait for a resource to
/// become ready (or to disappear after teardown).
#[derive(Debug, Clone, Args)]
pub struct PollCliArgs {
    /// Seconds between readiness probes.
    #[arg(env = "CLOUDCHECK_POLL_INTERVAL_SECS", long, default_value_t = 2)]
    pub poll_interval_secs: u64,

    /// Seconds before a readiness wait is abandoned.
    #[arg(env = "CLOUDCHECK_TIMEOUT_SECS", long, default_value_t = 120)]
    pub timeout_secs: u64,
}
