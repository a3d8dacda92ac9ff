use {
    crate::domain,
    alloy::signers::local::PrivateKeySigner,
    std::{fmt, path::PathBuf, time::Duration},
    url::Url,
};

#[derive(clap::Parser)]
pub struct Args {
    /// The log filter.
    #[clap(long, env, default_value = "warn,deployer=info,contracts=info")]
    pub log_filter: String,

    /// Whether to use JSON format for the logs.
    #[clap(long, env, default_value = "false")]
    pub use_json_logs: bool,

    /// The node RPC API endpoint.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Comma separated private keys of the accounts that may sign the
    /// deployment. The first one deploys. When empty the accounts unlocked on
    /// the node are used instead.
    #[clap(long, env, value_delimiter = ',')]
    pub private_keys: Vec<PrivateKeySigner>,

    /// Directory holding the compiled contract artifacts.
    #[clap(long, env, default_value = "artifacts")]
    pub artifacts: PathBuf,

    /// Name of the contract to deploy.
    #[clap(long, env, default_value = domain::DEFAULT_CONTRACT)]
    pub contract: String,

    /// How long to wait for the deployment transaction to be mined.
    #[clap(
        long,
        env,
        default_value = "5m",
        value_parser = humantime::parse_duration,
    )]
    pub confirmation_timeout: Duration,
}

impl Args {
    pub fn deployment(&self) -> domain::Config {
        domain::Config {
            contract: self.contract.clone(),
            confirmation_timeout: self.confirmation_timeout,
        }
    }
}

impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            log_filter,
            use_json_logs,
            node_url: _,
            private_keys,
            artifacts,
            contract,
            confirmation_timeout,
        } = self;

        writeln!(f, "log_filter: {log_filter}")?;
        writeln!(f, "use_json_logs: {use_json_logs}")?;
        writeln!(f, "node_url: SECRET")?;
        let accounts: Vec<_> = private_keys
            .iter()
            .map(|key| key.address().to_string())
            .collect();
        writeln!(f, "private_keys: SECRET for [{}]", accounts.join(", "))?;
        writeln!(f, "artifacts: {artifacts:?}")?;
        writeln!(f, "contract: {contract}")?;
        writeln!(f, "confirmation_timeout: {confirmation_timeout:?}")?;
        Ok(())
    }
}
