use {
    crate::{
        domain::{ContractFactory, Deployment, Network, PendingDeployment},
        infra::observe,
    },
    alloy::{
        network::{EthereumWallet, TransactionBuilder},
        primitives::{Address, U256},
        providers::{DynProvider, Provider, ProviderBuilder},
        rpc::types::TransactionRequest,
        signers::local::PrivateKeySigner,
    },
    anyhow::{Context, Result},
    contracts::Artifacts,
    url::Url,
};

/// An Ethereum node reached over JSON-RPC together with the artifacts of the
/// contracts that can be deployed to it.
pub struct Ethereum {
    provider: DynProvider,
    /// Addresses of the locally held keys. `None` if transactions are signed
    /// by the node.
    accounts: Option<Vec<Address>>,
    artifacts: Artifacts,
}

impl Ethereum {
    /// Connects to the node at `url`. Transactions are signed with `keys`,
    /// or by the node itself if no keys are given.
    pub async fn connect(
        url: &Url,
        keys: Vec<PrivateKeySigner>,
        artifacts: Artifacts,
    ) -> Result<Self> {
        let accounts: Vec<_> = keys.iter().map(PrivateKeySigner::address).collect();
        let mut keys = keys.into_iter();
        let provider = match keys.next() {
            Some(primary) => {
                let mut wallet = EthereumWallet::new(primary);
                for key in keys {
                    wallet.register_signer(key);
                }
                ProviderBuilder::new()
                    .wallet(wallet)
                    .connect_http(url.clone())
                    .erased()
            }
            None => ProviderBuilder::new().connect_http(url.clone()).erased(),
        };

        let chain_id = provider
            .get_chain_id()
            .await
            .context("could not fetch current chain id")?;
        observe::connected(url, chain_id);

        Ok(Self {
            provider,
            accounts: (!accounts.is_empty()).then_some(accounts),
            artifacts,
        })
    }
}

#[async_trait::async_trait]
impl Network for Ethereum {
    async fn signers(&self) -> Result<Vec<Address>> {
        match &self.accounts {
            Some(accounts) => Ok(accounts.clone()),
            None => self
                .provider
                .get_accounts()
                .await
                .context("could not list the accounts of the node"),
        }
    }

    async fn balance(&self, account: Address) -> Result<U256> {
        self.provider
            .get_balance(account)
            .await
            .context("could not fetch balance")
    }

    fn factory(&self, contract: &str) -> Result<ContractFactory> {
        let artifact = self.artifacts.find(contract)?;
        artifact.deployable()?;
        Ok(artifact.into())
    }

    async fn deploy(
        &self,
        deployer: Address,
        factory: &ContractFactory,
    ) -> Result<PendingDeployment> {
        // The nonce is fixed up front so the address the contract will be
        // created at is known before the transaction is mined.
        let nonce = self
            .provider
            .get_transaction_count(deployer)
            .pending()
            .await
            .context("could not fetch deployer nonce")?;
        let tx = TransactionRequest::default()
            .from(deployer)
            .nonce(nonce)
            .with_deploy_code(factory.bytecode.clone());

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .context("failed to send deployment transaction")?;

        Ok(PendingDeployment {
            tx_hash: *pending.tx_hash(),
            expected_address: deployer.create(nonce),
        })
    }

    async fn confirm(&self, pending: PendingDeployment) -> Result<Deployment> {
        // Polls until the node knows the receipt. The caller bounds how long.
        let receipt = loop {
            if let Some(receipt) = self
                .provider
                .get_transaction_receipt(pending.tx_hash)
                .await
                .context("failed to get deployment receipt")?
            {
                break receipt;
            }
            tokio::time::sleep(self.provider.client().poll_interval()).await;
        };

        anyhow::ensure!(
            receipt.status(),
            "deployment transaction reverted in block {:?}",
            receipt.block_number
        );
        let address = receipt
            .contract_address
            .context("receipt does not contain a contract address")?;
        if address != pending.expected_address {
            observe::unexpected_address(pending.expected_address, address);
        }

        Ok(Deployment {
            address,
            tx_hash: receipt.transaction_hash,
            block: receipt.block_number,
        })
    }
}
