use clap::Parser;
use cloudcheck::checks;
use cloudcheck::cli::{document::DocumentCliArgs, AWSConfigCliArgs, PollCliArgs};
use cloudcheck::core::client::document::dynamodb::AWSDynamo;
use cloudcheck::core::cloud::CloudProvider;
use cloudcheck::core::traits::resource::Resource;
use cloudcheck::types::params::{DocumentArgs, MiscellaneousArgs};
use cloudcheck::utils::logging::init_logging;
use cloudcheck::{CloudcheckError, CloudcheckResult};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{error, info};

/// Smoke check for the managed document store.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct DocumentsCmd {
    #[clap(flatten)]
    aws_config_args: AWSConfigCliArgs,

    #[clap(flatten)]
    document_args: DocumentCliArgs,

    #[clap(flatten)]
    poll_args: PollCliArgs,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();
    let cmd = DocumentsCmd::parse();

    if let Err(e) = run_check(&cmd).await {
        error!(error = %e, error_chain = ?e, "Document store check failed");
        std::process::exit(1);
    }
    info!("Document store check completed");
}

async fn run_check(cmd: &DocumentsCmd) -> CloudcheckResult<()> {
    let provider = Arc::new(CloudProvider::from_aws_args(&cmd.aws_config_args).await);
    info!("Cloud provider initialized - {}", provider);

    let args = DocumentArgs::from(cmd.document_args.clone());
    let misc = MiscellaneousArgs::from(cmd.poll_args.clone());

    let client = AWSDynamo::create_setup(provider, &args).await?;
    client.setup().await?;
    if !client.poll_ready(misc.poll_interval, misc.timeout).await {
        return Err(CloudcheckError::ResourceSetupError(format!(
            "table '{}' never became active",
            args.table_name
        )));
    }

    checks::document::run(&client).await?;

    client.teardown().await?;
    Ok(())
}
