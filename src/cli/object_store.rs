use clap::Args;
use std::path::PathBuf;

/// Parameters used to config the object store check.
#[derive(Debug, Clone, Args)]
pub struct ObjectStoreCliArgs {
    /// The name of the bucket the check creates and exercises.
    #[arg(env = "CLOUDCHECK_BUCKET_NAME", long, default_value = "cloudcheck-bucket")]
    pub bucket_name: String,

    /// Key under which the check stores its object.
    #[arg(env = "CLOUDCHECK_OBJECT_KEY", long, default_value = "test.txt")]
    pub key: String,

    /// Local file uploaded by the check. Created with sample content when missing.
    #[arg(env = "CLOUDCHECK_UPLOAD_PATH", long, default_value = "test.txt")]
    pub upload_path: PathBuf,

    /// Local file the check downloads the object into.
    #[arg(env = "CLOUDCHECK_DOWNLOAD_PATH", long, default_value = "download.txt")]
    pub download_path: PathBuf,
}
