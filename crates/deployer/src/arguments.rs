use anyhow::anyhow;
use clap::Parser;
use ethcontract::{Account, PrivateKey, H160};
use std::{
    fmt::{self, Debug, Display, Formatter},
    num::ParseFloatError,
    str::FromStr,
    time::Duration,
};
use url::Url;

#[derive(Parser)]
pub struct Arguments {
    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Address of the reward manager contract the staking contract gets wired
    /// to at construction.
    #[clap(long, env, default_value = "0xb383aaFA7A3AF7404644c372197AAd8BB4Ad7e32")]
    pub reward_manager: H160,

    /// The account submitting the deployment. This can be either a 32-byte
    /// private key for offline signing, or a 20-byte Ethereum address for
    /// signing with an unlocked node account. When unset the node's first
    /// account is used.
    #[clap(long, env, hide_env_values = true)]
    pub deployer_account: Option<DeployerAccountArg>,

    /// Explicit gas limit for the deployment transaction. Estimated by the
    /// node when unset.
    #[clap(long, env)]
    pub gas_limit: Option<u64>,

    /// Maximum time in seconds to wait for the node to become available
    /// before giving up.
    #[clap(long, env, default_value = "30", value_parser = duration_from_seconds)]
    pub node_timeout: Duration,
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "node_url: {}", self.node_url)?;
        writeln!(f, "reward_manager: {:?}", self.reward_manager)?;
        writeln!(f, "deployer_account: {:?}", self.deployer_account)?;
        writeln!(f, "gas_limit: {:?}", self.gas_limit)?;
        writeln!(f, "node_timeout: {:?}", self.node_timeout)?;
        Ok(())
    }
}

#[derive(Clone)]
pub enum DeployerAccountArg {
    PrivateKey(PrivateKey),
    Address(H160),
}

impl Debug for DeployerAccountArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrivateKey(k) => write!(f, "PrivateKey({:?})", k.public_address()),
            Self::Address(a) => write!(f, "Address({a:?})"),
        }
    }
}

impl DeployerAccountArg {
    pub fn into_account(self, chain_id: u64) -> Account {
        match self {
            Self::PrivateKey(key) => Account::Offline(key, Some(chain_id)),
            Self::Address(address) => Account::Local(address, None),
        }
    }
}

impl FromStr for DeployerAccountArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<PrivateKey>()
            .map(Self::PrivateKey)
            .map_err(|pk_err| anyhow!("could not parse as private key: {}", pk_err))
            .or_else(|error_chain| {
                Ok(Self::Address(s.parse().map_err(|addr_err| {
                    error_chain.context(anyhow!("could not parse as address: {}", addr_err))
                })?))
            })
            .map_err(|err: Self::Err| {
                err.context(
                    "invalid deployer account, it is neither a private key nor an Ethereum \
                     address",
                )
            })
    }
}

pub fn duration_from_seconds(s: &str) -> Result<Duration, ParseFloatError> {
    Ok(Duration::from_secs_f32(s.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIVATE_KEY: &str =
        "0x0101010101010101010101010101010101010101010101010101010101010101";

    #[test]
    fn default_arguments() {
        let args = Arguments::try_parse_from(["deploy"]).unwrap();
        assert_eq!(args.node_url.as_str(), "http://localhost:8545/");
        assert_eq!(
            args.reward_manager,
            "0xb383aaFA7A3AF7404644c372197AAd8BB4Ad7e32".parse().unwrap()
        );
        assert!(args.deployer_account.is_none());
        assert!(args.gas_limit.is_none());
        assert_eq!(args.node_timeout, Duration::from_secs(30));
    }

    #[test]
    fn account_arg_parses_private_key_and_address() {
        let key: DeployerAccountArg = PRIVATE_KEY.parse().unwrap();
        assert!(matches!(key, DeployerAccountArg::PrivateKey(_)));

        let address: DeployerAccountArg = "0x5b1e2c2762667331Bc91648052F646d1b0d35984"
            .parse()
            .unwrap();
        assert!(matches!(address, DeployerAccountArg::Address(_)));

        assert!("not-an-account".parse::<DeployerAccountArg>().is_err());
    }

    #[test]
    fn account_arg_wires_chain_id_into_offline_account() {
        let arg: DeployerAccountArg = PRIVATE_KEY.parse().unwrap();
        assert!(matches!(
            arg.into_account(5),
            Account::Offline(_, Some(5))
        ));

        let arg: DeployerAccountArg = "0x5b1e2c2762667331Bc91648052F646d1b0d35984"
            .parse()
            .unwrap();
        assert!(matches!(arg.into_account(5), Account::Local(_, None)));
    }

    #[test]
    fn displaying_arguments_does_not_leak_the_private_key() {
        let args =
            Arguments::try_parse_from(["deploy", "--deployer-account", PRIVATE_KEY]).unwrap();
        let formatted = args.to_string();
        assert!(!formatted.contains(&PRIVATE_KEY[2..]));
        assert!(formatted.contains("deployer_account: Some(PrivateKey("));
    }
}
