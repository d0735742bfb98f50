//! This script is used to vendor the contract JSON artifacts produced by the
//! Hardhat workspace that compiles the Solidity sources. Vendoring a pruned
//! copy instead of reading the Hardhat output at build time keeps code
//! generation hermetic and limits the checked-in artifacts to the properties
//! it needs.
//!
//! The Hardhat artifacts root is taken from the `HARDHAT_ARTIFACTS`
//! environment variable.

use anyhow::{Context, Result};
use contracts::paths;
use serde_json::{Map, Value};
use std::{env, fs, path::PathBuf};

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn,vendor=info"));

    if let Err(err) = run() {
        log::error!("Error vendoring contracts: {:?}", err);
        std::process::exit(-1);
    }
}

fn run() -> Result<()> {
    let vendor = Vendor::new()?;

    vendor
        .full()
        .hardhat("RewardManagerStaking", "contracts/RewardManagerStaking.sol")?;

    vendor
        .abi_only()
        .hardhat("RewardManager", "contracts/RewardManager.sol")?;

    Ok(())
}

struct Vendor {
    artifacts: PathBuf,
    source: PathBuf,
}

impl Vendor {
    fn new() -> Result<Self> {
        let artifacts = paths::contract_artifacts_dir();
        let source = env::var("HARDHAT_ARTIFACTS")
            .map(PathBuf::from)
            .context("HARDHAT_ARTIFACTS must point to the Hardhat workspace's artifacts directory")?;
        log::info!("vendoring contract artifacts to '{}'", artifacts.display());
        fs::create_dir_all(&artifacts)?;
        Ok(Self { artifacts, source })
    }

    /// Creates a context for vendoring "full" contract data, including the
    /// creation bytecode needed for deployments.
    fn full(&self) -> VendorContext {
        VendorContext {
            vendor: self,
            properties: &["abi", "bytecode"],
        }
    }

    /// Creates a context for vendoring only the contract ABI for generating
    /// bindings. This is preferred over [`Vendor::full`] for contracts this
    /// repository never deploys.
    fn abi_only(&self) -> VendorContext {
        VendorContext {
            vendor: self,
            properties: &["abi"],
        }
    }
}

struct VendorContext<'a> {
    vendor: &'a Vendor,
    properties: &'a [&'a str],
}

impl VendorContext<'_> {
    // Hardhat writes one artifact per contract next to its compiled source
    // file: `<root>/contracts/Foo.sol/Foo.json`.
    fn hardhat(&self, name: &str, source: &str) -> Result<&Self> {
        let path = self.vendor.source.join(source).join(format!("{name}.json"));
        log::info!("retrieving {}", path.display());
        let artifact_json = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        log::debug!("pruning artifact JSON");
        let pruned = prune_artifact(&artifact_json, self.properties)?;

        let destination = self.vendor.artifacts.join(name).with_extension("json");
        log::debug!("saving artifact to {}", destination.display());
        fs::write(destination, pruned)?;

        Ok(self)
    }
}

fn prune_artifact(artifact_json: &str, properties: &[&str]) -> Result<String> {
    let mut json = serde_json::from_str::<Value>(artifact_json)?;
    let mut pruned = Map::new();
    for property in properties {
        if let Some(value) = json.get_mut(*property) {
            pruned.insert(property.to_string(), value.take());
        }
    }
    Ok(serde_json::to_string(&pruned)?)
}
