use clap::Parser;

#[tokio::main]
async fn main() {
    let args = deployer::arguments::Arguments::parse();
    observe::tracing::initialize("warn,deploy=debug,deployer=debug", tracing::Level::ERROR.into());
    tracing::info!("running deployment with validated arguments:\n{}", args);

    // All failures end up here; there is no recovery for a half-submitted
    // deployment beyond reading the log and starting over.
    if let Err(err) = deployer::run(args).await {
        tracing::error!("deployment failed: {:?}", err);
        std::process::exit(1);
    }
}
