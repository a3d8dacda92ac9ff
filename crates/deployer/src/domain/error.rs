use {
    alloy::primitives::{Address, B256},
    std::time::Duration,
};

/// Any reason the deployment did not produce a contract. All of them are
/// fatal for the run.
#[derive(Debug, thiserror::Error)]
pub enum DeploymentFailure {
    #[error("could not connect to the node")]
    Connection(#[source] anyhow::Error),
    #[error("could not list signers")]
    Signers(#[source] anyhow::Error),
    #[error("no signer available")]
    NoSigner,
    #[error("could not fetch the balance of {0}")]
    Balance(Address, #[source] anyhow::Error),
    #[error("could not resolve the contract factory for {contract}")]
    Factory {
        contract: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("could not submit the deployment transaction")]
    Submission(#[source] anyhow::Error),
    #[error("deployment transaction {0:?} failed")]
    Confirmation(B256, #[source] anyhow::Error),
    #[error("deployment transaction {tx_hash:?} was not mined within {timeout:?}")]
    Timeout { tx_hash: B256, timeout: Duration },
    #[error("could not write the deployment report")]
    Output(#[from] std::io::Error),
}
