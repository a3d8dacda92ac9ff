use {
    crate::{
        domain::{self, Deployment, DeploymentFailure},
        infra::{Args, Ethereum, observe},
    },
    clap::Parser,
    contracts::Artifacts,
    std::{io::Write, process::ExitCode},
};

const SUCCESS: u8 = 0;
const FAILURE: u8 = 1;

/// Parses the arguments, deploys the contract and returns the exit code of
/// the process.
pub async fn start(args: impl Iterator<Item = String>) -> ExitCode {
    let args = match parse(args) {
        Ok(args) => args,
        Err(status) => return ExitCode::from(status),
    };
    observe::init(&args.log_filter, args.use_json_logs);
    tracing::info!("running deployer with validated arguments:\n{}", args);

    let result = run(&args, &mut std::io::stdout()).await;
    ExitCode::from(exit_status(result, &mut std::io::stderr()))
}

/// Parses the arguments and the environment. Help requests exit successfully,
/// every other parse error (e.g. a malformed `PRIVATE_KEYS`) is a failure.
fn parse(args: impl IntoIterator<Item = String>) -> Result<Args, u8> {
    Args::try_parse_from(args).map_err(|err| {
        // clap picks stdout for help and stderr for errors.
        err.print().ok();
        if err.exit_code() == 0 {
            SUCCESS
        } else {
            FAILURE
        }
    })
}

/// Connects to the configured node and deploys the configured contract,
/// writing the report to `out`.
pub async fn run(args: &Args, out: &mut impl Write) -> Result<Deployment, DeploymentFailure> {
    let ethereum = Ethereum::connect(
        &args.node_url,
        args.private_keys.clone(),
        Artifacts::new(&args.artifacts),
    )
    .await
    .map_err(DeploymentFailure::Connection)?;
    domain::deploy(&ethereum, &args.deployment(), out).await
}

/// Maps the outcome of a deployment to the process exit status. Failures are
/// written to `stderr` with their whole chain of causes.
fn exit_status(result: Result<Deployment, DeploymentFailure>, stderr: &mut impl Write) -> u8 {
    match result {
        Ok(_) => SUCCESS,
        Err(err) => {
            // There is nowhere left to report to if stderr itself is broken.
            writeln!(stderr, "Error: {:?}", anyhow::Error::new(err)).ok();
            FAILURE
        }
    }
}
