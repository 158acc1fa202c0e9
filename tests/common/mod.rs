//! In-process stand-in for a MultiChain node.

use std::{
    fmt, io,
    sync::{Arc, Mutex},
};

use multichain_rpc_client::jsonrpc::{
    self, Request, Response, Transport,
    error::RpcError,
    serde_json::{self, Value},
};

/// A request as the node received it.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    pub method: String,
    pub params: Value,
}

#[derive(Debug)]
enum Reply {
    Result(Value),
    Rpc { code: i32, message: String },
    Unreachable(String),
}

/// Records every request and answers each one with the same configured reply.
#[derive(Clone, Debug)]
pub struct MockTransport {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    reply: Arc<Reply>,
}

impl MockTransport {
    fn new(reply: Reply) -> Self {
        Self {
            calls: Arc::default(),
            reply: Arc::new(reply),
        }
    }

    /// Answers with `result`.
    pub fn replying(result: Value) -> Self {
        Self::new(Reply::Result(result))
    }

    /// Answers with a JSON-RPC error object.
    pub fn rpc_error(code: i32, message: &str) -> Self {
        Self::new(Reply::Rpc {
            code,
            message: message.to_string(),
        })
    }

    /// Fails every request at the transport level.
    pub fn unreachable(message: &str) -> Self {
        Self::new(Reply::Unreachable(message.to_string()))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The only call made so far. Panics if there were zero or several.
    pub fn single_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one remote call: {calls:?}");
        calls.into_iter().next().unwrap()
    }
}

impl Transport for MockTransport {
    fn send_request(&self, req: Request) -> Result<Response, jsonrpc::Error> {
        let params = match req.params {
            Some(raw) => serde_json::from_str(raw.get()).map_err(jsonrpc::Error::Json)?,
            None => Value::Null,
        };
        self.calls.lock().unwrap().push(RecordedCall {
            method: req.method.to_string(),
            params,
        });

        match &*self.reply {
            Reply::Result(value) => Ok(Response {
                result: Some(serde_json::value::to_raw_value(value).map_err(jsonrpc::Error::Json)?),
                error: None,
                id: req.id,
                jsonrpc: Some("2.0".to_string()),
            }),
            Reply::Rpc { code, message } => Ok(Response {
                result: None,
                error: Some(RpcError {
                    code: *code,
                    message: message.clone(),
                    data: None,
                }),
                id: req.id,
                jsonrpc: Some("2.0".to_string()),
            }),
            Reply::Unreachable(message) => Err(jsonrpc::Error::Transport(Box::new(
                io::Error::new(io::ErrorKind::ConnectionRefused, message.clone()),
            ))),
        }
    }

    fn send_batch(&self, _reqs: &[Request]) -> Result<Vec<Response>, jsonrpc::Error> {
        Err(jsonrpc::Error::EmptyBatch)
    }

    fn fmt_target(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "mock")
    }
}
