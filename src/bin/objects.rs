use clap::Parser;
use cloudcheck::checks;
use cloudcheck::cli::{object_store::ObjectStoreCliArgs, AWSConfigCliArgs, PollCliArgs};
use cloudcheck::core::client::object_store::s3::AWSS3;
use cloudcheck::core::cloud::CloudProvider;
use cloudcheck::core::traits::resource::Resource;
use cloudcheck::types::params::{MiscellaneousArgs, ObjectStoreArgs};
use cloudcheck::utils::logging::init_logging;
use cloudcheck::{CloudcheckError, CloudcheckResult};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{error, info};

/// Smoke check for the managed object store.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct ObjectsCmd {
    #[clap(flatten)]
    aws_config_args: AWSConfigCliArgs,

    #[clap(flatten)]
    object_store_args: ObjectStoreCliArgs,

    #[clap(flatten)]
    poll_args: PollCliArgs,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();
    let cmd = ObjectsCmd::parse();

    if let Err(e) = run_check(&cmd).await {
        error!(error = %e, error_chain = ?e, "Object store check failed");
        std::process::exit(1);
    }
    info!("Object store check completed");
}

async fn run_check(cmd: &ObjectsCmd) -> CloudcheckResult<()> {
    let provider = Arc::new(CloudProvider::from_aws_args(&cmd.aws_config_args).await);
    info!("Cloud provider initialized - {}", provider);

    let args = ObjectStoreArgs::from(cmd.object_store_args.clone());
    let misc = MiscellaneousArgs::from(cmd.poll_args.clone());

    let client = AWSS3::create_setup(provider, &args).await?;
    client.setup().await?;
    if !client.poll_ready(misc.poll_interval, misc.timeout).await {
        return Err(CloudcheckError::ResourceSetupError(format!(
            "bucket '{}' never became reachable",
            args.bucket_name
        )));
    }

    checks::object_store::run(&client, &args, &misc).await?;

    client.teardown().await?;
    if !client.poll_absent(misc.poll_interval, misc.timeout).await {
        return Err(CloudcheckError::ResourceSetupError(format!(
            "bucket '{}' still reachable after teardown",
            args.bucket_name
        )));
    }
    Ok(())
}
