use clap::Args;

/// Parameters used to config the document store check.
#[derive(Debug, Clone, Args)]
pub struct DocumentCliArgs {
    /// The name of the table the check creates and exercises.
    #[arg(env = "CLOUDCHECK_TABLE_NAME", long, default_value = "Movies")]
    pub table_name: String,
}
