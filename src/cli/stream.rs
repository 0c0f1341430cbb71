use clap::Args;

/// Parameters used to config the stream check.
#[derive(Debug, Clone, Args)]
pub struct StreamCliArgs {
    /// The name of the stream the check creates and exercises.
    #[arg(env = "CLOUDCHECK_STREAM_NAME", long, default_value = "test-stream")]
    pub stream_name: String,

    /// Number of shards for the created stream.
    #[arg(env = "CLOUDCHECK_SHARD_COUNT", long, default_value_t = 1)]
    pub shard_count: i32,
}
