#![allow(clippy::let_unit_value)]
#[macro_use]
pub mod macros;
pub mod paths;
pub mod web3;

include!(concat!(env!("OUT_DIR"), "/RewardManager.rs"));
include!(concat!(env!("OUT_DIR"), "/RewardManagerStaking.rs"));

#[cfg(test)]
mod tests {
    use super::*;
    use ethcontract::{
        common::abi::ParamType,
        futures::future::{self, FutureExt as _, Ready},
        json::json,
        jsonrpc::{Call, Id, MethodCall, Params, Value},
        web3::{error::Result as Web3Result, BatchTransport, RequestId, Transport, Web3},
    };

    #[derive(Debug, Clone)]
    struct ChainIdTransport(u64);

    impl Transport for ChainIdTransport {
        type Out = Ready<Web3Result<Value>>;

        fn prepare(&self, method: &str, params: Vec<Value>) -> (RequestId, Call) {
            assert_eq!(method, "net_version");
            assert_eq!(params.len(), 0);
            (
                0,
                MethodCall {
                    jsonrpc: None,
                    method: method.to_string(),
                    params: Params::Array(params),
                    id: Id::Num(0),
                }
                .into(),
            )
        }

        fn send(&self, _id: RequestId, _request: Call) -> Self::Out {
            future::ready(Ok(json!(format!("{}", self.0))))
        }
    }

    impl BatchTransport for ChainIdTransport {
        type Batch = Ready<Web3Result<Vec<Web3Result<Value>>>>;

        fn send_batch<T>(&self, requests: T) -> Self::Batch
        where
            T: IntoIterator<Item = (RequestId, Call)>,
        {
            future::ready(Ok(requests
                .into_iter()
                .map(|_| Ok(json!(format!("{}", self.0))))
                .collect()))
        }
    }

    #[test]
    fn reward_manager_resolves_on_mainnet() {
        let web3 = Web3::new(ChainIdTransport(1));
        let deployed = RewardManager::deployed(&web3).now_or_never().unwrap();
        assert!(deployed.is_ok());
    }

    #[test]
    fn reward_manager_unknown_on_other_networks() {
        for network in [5, 100, 11155111] {
            let web3 = Web3::new(ChainIdTransport(network));
            let deployed = RewardManager::deployed(&web3).now_or_never().unwrap();
            assert!(deployed.is_err(), "unexpected deployment for {network}");
        }
    }

    #[test]
    fn staking_contract_has_creation_bytecode() {
        assert!(!bytecode!(RewardManagerStaking).0.is_empty());
    }

    #[test]
    fn staking_constructor_takes_single_address() {
        let contract = RewardManagerStaking::raw_contract();
        let constructor = contract.abi.constructor.as_ref().unwrap();
        assert_eq!(constructor.inputs.len(), 1);
        assert_eq!(constructor.inputs[0].kind, ParamType::Address);
    }

    #[test]
    fn reward_manager_vendored_abi_only() {
        // Never deployed by this repo, so the vendored artifact carries no
        // creation code.
        assert!(RewardManager::raw_contract()
            .bytecode
            .to_bytes()
            .unwrap()
            .0
            .is_empty());
    }

    #[test]
    fn dummy_contract_has_requested_address() {
        let address = ethcontract::H160([0x42; 20]);
        let staking = dummy_contract!(RewardManagerStaking, address);
        assert_eq!(staking.address(), address);
    }
}
