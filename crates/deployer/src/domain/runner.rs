use {
    super::{Config, Deployer, Deployment, DeploymentFailure, Network},
    crate::infra::observe,
    std::io::Write,
};

/// Deploys the configured contract from the first signer of `network` and
/// reports the deployer and the new contract's address to `out`.
///
/// Every step runs strictly after the previous one. Nothing is retried: the
/// first failing step ends the deployment.
pub async fn deploy<N>(
    network: &N,
    config: &Config,
    out: &mut impl Write,
) -> Result<Deployment, DeploymentFailure>
where
    N: Network + ?Sized,
{
    let signers = network.signers().await.map_err(DeploymentFailure::Signers)?;
    let address = *signers.first().ok_or(DeploymentFailure::NoSigner)?;
    let balance = network
        .balance(address)
        .await
        .map_err(|err| DeploymentFailure::Balance(address, err))?;
    let deployer = Deployer { address, balance };
    observe::deployer(&deployer);
    writeln!(out, "Deploying contract with account: {}", deployer.address)?;
    writeln!(out, "Account balance: {}", deployer.balance)?;

    let factory = network
        .factory(&config.contract)
        .map_err(|source| DeploymentFailure::Factory {
            contract: config.contract.clone(),
            source,
        })?;
    observe::factory(&factory);

    let pending = network
        .deploy(deployer.address, &factory)
        .await
        .map_err(DeploymentFailure::Submission)?;
    observe::submitted(&factory, &pending);

    let deployment = tokio::time::timeout(config.confirmation_timeout, network.confirm(pending))
        .await
        .map_err(|_| DeploymentFailure::Timeout {
            tx_hash: pending.tx_hash,
            timeout: config.confirmation_timeout,
        })?
        .map_err(|err| DeploymentFailure::Confirmation(pending.tx_hash, err))?;
    observe::confirmed(&factory, &deployment);

    writeln!(out, "{} deployed at: {}", factory.name, deployment.address)?;
    Ok(deployment)
}
