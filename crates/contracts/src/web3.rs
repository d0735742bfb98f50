//! A stub [`web3::Transport`] for constructing contract instances without a
//! node connection. Generated bindings always want a `web3` handle, even when
//! they are only used to encode calldata or to inspect ABI information; the
//! transport below satisfies that requirement and panics should anything
//! actually try to talk to a node through it.

use ethcontract::{
    futures,
    json::Value,
    jsonrpc::Call as RpcCall,
    web3::{self, BatchTransport, RequestId, Transport, Web3},
};

/// A [`web3::Transport`] that must never be used to execute a request.
#[derive(Clone, Debug)]
pub struct DummyTransport;

impl Transport for DummyTransport {
    type Out = futures::future::Pending<web3::Result<Value>>;

    fn prepare(&self, method: &str, _params: Vec<Value>) -> (RequestId, RpcCall) {
        panic!("dummy transport was asked to prepare {method:?}")
    }

    fn send(&self, _id: RequestId, _request: RpcCall) -> Self::Out {
        panic!("dummy transport was asked to send a request")
    }
}

impl BatchTransport for DummyTransport {
    type Batch = futures::future::Pending<web3::Result<Vec<web3::Result<Value>>>>;

    fn send_batch<T>(&self, _requests: T) -> Self::Batch
    where
        T: IntoIterator<Item = (RequestId, RpcCall)>,
    {
        panic!("dummy transport was asked to send a batch")
    }
}

/// Creates a [`web3::Web3`] instance backed by a [`DummyTransport`].
pub fn dummy() -> Web3<DummyTransport> {
    Web3::new(DummyTransport)
}
