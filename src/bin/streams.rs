use clap::Parser;
use cloudcheck::checks;
use cloudcheck::cli::{stream::StreamCliArgs, AWSConfigCliArgs, PollCliArgs};
use cloudcheck::core::client::stream::kinesis::AWSKinesis;
use cloudcheck::core::cloud::CloudProvider;
use cloudcheck::core::traits::resource::Resource;
use cloudcheck::types::params::{MiscellaneousArgs, StreamArgs};
use cloudcheck::utils::logging::init_logging;
use cloudcheck::{CloudcheckError, CloudcheckResult};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{error, info};

/// Smoke check for the managed stream service.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct StreamsCmd {
    #[clap(flatten)]
    aws_config_args: AWSConfigCliArgs,

    #[clap(flatten)]
    stream_args: StreamCliArgs,

    #[clap(flatten)]
    poll_args: PollCliArgs,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();
    let cmd = StreamsCmd::parse();

    if let Err(e) = run_check(&cmd).await {
        error!(error = %e, error_chain = ?e, "Stream check failed");
        std::process::exit(1);
    }
    info!("Stream check completed");
}

async fn run_check(cmd: &StreamsCmd) -> CloudcheckResult<()> {
    let provider = Arc::new(CloudProvider::from_aws_args(&cmd.aws_config_args).await);
    info!("Cloud provider initialized - {}", provider);

    let args = StreamArgs::from(cmd.stream_args.clone());
    let misc = MiscellaneousArgs::from(cmd.poll_args.clone());

    let client = AWSKinesis::create_setup(provider, &args).await?;
    client.setup().await?;
    if !client.poll_ready(misc.poll_interval, misc.timeout).await {
        return Err(CloudcheckError::ResourceSetupError(format!(
            "stream '{}' never became active",
            args.stream_name
        )));
    }

    checks::stream::run(&client).await?;

    client.teardown().await?;
    Ok(())
}
