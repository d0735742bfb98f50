//! One-shot deployment of the staking contract: connect to a node, submit
//! `RewardManagerStaking(reward_manager)`, await confirmation, and record the
//! resulting address.

pub mod arguments;
pub mod ethrpc;

use crate::{
    arguments::{Arguments, DeployerAccountArg},
    ethrpc::Web3,
};
use anyhow::{ensure, Context as _, Result};
use contracts::{paths, RewardManagerStaking};
use ethcontract::{Account, H160};
use std::{
    fs,
    time::{Duration, Instant},
};

pub async fn run(args: Arguments) -> Result<()> {
    let web3 = ethrpc::web3(&args.node_url)?;
    wait_for_node(&web3, args.node_timeout).await?;

    let chain_id = web3
        .eth()
        .chain_id()
        .await
        .context("failed to fetch the chain id")?
        .as_u64();
    tracing::info!("connected to network {}", chain_id);

    let account = deployer_account(&web3, args.deployer_account, chain_id).await?;
    ensure_contract_code(&web3, args.reward_manager).await?;

    tracing::info!(
        "deploying staking contract for reward manager {:?}",
        args.reward_manager
    );
    let mut builder = RewardManagerStaking::builder(&web3, args.reward_manager).from(account);
    if let Some(gas_limit) = args.gas_limit {
        builder = builder.gas(gas_limit.into());
    }
    let staking = builder
        .deploy()
        .await
        .context("staking contract deployment failed")?;

    tracing::info!("staking contract deployed at {:?}", staking.address());
    record_deployment("RewardManagerStaking", staking.address())?;

    Ok(())
}

/// Polls the node until it responds or the timeout elapses. Lets the tool get
/// started while the node it points at is still coming up.
async fn wait_for_node(web3: &Web3, timeout: Duration) -> Result<()> {
    const POLL_INTERVAL: Duration = Duration::from_secs(1);

    let deadline = Instant::now() + timeout;
    loop {
        let err = match web3.eth().chain_id().await {
            Ok(_) => return Ok(()),
            Err(err) => err,
        };
        if Instant::now() >= deadline {
            return Err(err).context("timed out waiting for the node to become available");
        }
        tracing::debug!("node not yet available: {}", err);
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

async fn deployer_account(
    web3: &Web3,
    arg: Option<DeployerAccountArg>,
    chain_id: u64,
) -> Result<Account> {
    match arg {
        Some(account) => Ok(account.into_account(chain_id)),
        None => {
            let accounts = web3
                .eth()
                .accounts()
                .await
                .context("failed to list node accounts")?;
            let address = *accounts
                .first()
                .context("node manages no accounts; pass --deployer-account")?;
            Ok(Account::Local(address, None))
        }
    }
}

// Deploying a staking contract wired to an address without code would burn
// the deployment; the constructor argument cannot be changed afterwards.
async fn ensure_contract_code(web3: &Web3, address: H160) -> Result<()> {
    let code = web3
        .eth()
        .code(address, None)
        .await
        .with_context(|| format!("failed to fetch the code of {address:?}"))?;
    ensure!(
        !code.0.is_empty(),
        "no contract code at reward manager address {:?}",
        address
    );
    Ok(())
}

fn record_deployment(name: &str, address: H160) -> Result<()> {
    let path = paths::contract_address_file(name);
    let dir = path
        .parent()
        .context("contract address file has no parent directory")?;
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    fs::write(&path, format!("{address:?}"))
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("recorded deployment address in {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_record_location_is_stable() {
        let path = paths::contract_address_file("RewardManagerStaking");
        assert!(path.ends_with("target/deploy/RewardManagerStaking.addr"));
    }

    #[test]
    fn recorded_address_is_full_length() {
        // `H160`'s `Display` abbreviates the middle of the address; the
        // record has to keep all 20 bytes.
        let address: H160 = "0xb383aaFA7A3AF7404644c372197AAd8BB4Ad7e32".parse().unwrap();
        let formatted = format!("{address:?}");
        assert_eq!(formatted.len(), 42);
        assert_eq!(formatted, formatted.to_lowercase());
    }
}
