//! Deploying a contract, independent of how the chain is reached.

use {
    alloy::primitives::{Address, B256, Bytes, U256},
    anyhow::Result,
    std::time::Duration,
};

pub mod error;
mod runner;

pub use {error::DeploymentFailure, runner::deploy};

/// The contract deployed when no other name is configured.
pub const DEFAULT_CONTRACT: &str = "RealEstateTokenization";

#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the contract whose artifact gets deployed.
    pub contract: String,
    /// How long to wait for the deployment transaction to be mined before
    /// giving up.
    pub confirmation_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contract: DEFAULT_CONTRACT.to_string(),
            confirmation_timeout: Duration::from_secs(300),
        }
    }
}

/// The account that signs the deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployer {
    pub address: Address,
    /// Balance in wei at the time the deployment started.
    pub balance: U256,
}

/// Everything needed to build a deployment transaction for one contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractFactory {
    pub name: String,
    /// Creation bytecode.
    pub bytecode: Bytes,
}

impl From<contracts::Artifact> for ContractFactory {
    fn from(artifact: contracts::Artifact) -> Self {
        Self {
            name: artifact.contract_name,
            bytecode: artifact.bytecode,
        }
    }
}

/// A deployment transaction that was sent but not yet mined. The contract
/// does not exist at `expected_address` until the transaction is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDeployment {
    pub tx_hash: B256,
    pub expected_address: Address,
}

/// A contract whose deployment transaction was mined successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    pub address: Address,
    pub tx_hash: B256,
    pub block: Option<u64>,
}

/// The chain and the accounts the deployment is executed with.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Network: Send + Sync {
    /// Accounts able to sign transactions. The first one deploys.
    async fn signers(&self) -> Result<Vec<Address>>;

    /// Current balance of `account` in wei.
    async fn balance(&self, account: Address) -> Result<U256>;

    /// Resolves the factory for the contract with the given name.
    fn factory(&self, contract: &str) -> Result<ContractFactory>;

    /// Sends the transaction creating the contract without constructor
    /// arguments. Returns as soon as the node accepted the transaction.
    async fn deploy(
        &self,
        deployer: Address,
        factory: &ContractFactory,
    ) -> Result<PendingDeployment>;

    /// Waits until the deployment transaction is mined.
    async fn confirm(&self, pending: PendingDeployment) -> Result<Deployment>;
}
