//! This module implements the observability for the deployer. It exposes
//! functions which represent events that are meaningful to the system. These
//! functions are called when the corresponding events occur and log them.

use {
    crate::domain::{ContractFactory, Deployer, Deployment, PendingDeployment},
    alloy::primitives::{Address, utils::format_ether},
    url::Url,
};

/// Setup the observability. The log argument configures the tokio tracing
/// framework.
pub fn init(log: &str, use_json: bool) {
    observe::tracing::initialize(&observe::Config::new(log, use_json));
}

/// Observe that the connection to the node was established.
pub fn connected(url: &Url, chain_id: u64) {
    tracing::info!(host = url.host_str(), chain_id, "connected to node");
}

/// Observe the account the deployment is signed with.
pub fn deployer(deployer: &Deployer) {
    tracing::info!(
        address = %deployer.address,
        balance = %format_ether(deployer.balance),
        "deploying from account"
    );
}

/// Observe the resolved contract factory.
pub fn factory(factory: &ContractFactory) {
    tracing::debug!(
        contract = %factory.name,
        bytecode_len = factory.bytecode.len(),
        "resolved contract factory"
    );
}

/// Observe that the deployment transaction was accepted by the node.
pub fn submitted(factory: &ContractFactory, pending: &PendingDeployment) {
    tracing::info!(
        contract = %factory.name,
        tx_hash = ?pending.tx_hash,
        expected_address = %pending.expected_address,
        "deployment transaction sent, waiting for confirmation"
    );
}

/// Observe that the deployment transaction was mined.
pub fn confirmed(factory: &ContractFactory, deployment: &Deployment) {
    tracing::info!(
        contract = %factory.name,
        address = %deployment.address,
        tx_hash = ?deployment.tx_hash,
        block = ?deployment.block,
        "contract deployed"
    );
}

/// Observe a contract that ended up at a different address than derived from
/// the deployer's nonce. Happens when another transaction of the same account
/// was mined first.
pub fn unexpected_address(expected: Address, actual: Address) {
    tracing::warn!(%expected, %actual, "contract deployed at unexpected address");
}
