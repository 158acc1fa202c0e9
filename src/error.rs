//! Error types for the MultiChain RPC client.

use std::{fmt, io};

use corepc_types::bitcoin::hex::{HexToArrayError, HexToBytesError};
use jsonrpc::error::RpcError;
use jsonrpc::serde_json;

/// Result type alias for the RPC client.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using the MultiChain RPC client.
#[derive(Debug)]
pub enum Error {
    /// Missing authentication credentials.
    MissingAuthentication,

    /// Unreadable `multichain.conf`, or one without `rpcuser`/`rpcpassword`.
    InvalidConfigFile,

    /// A caller-supplied value that does not name a known option.
    InvalidArgument(String),

    /// JSON-RPC error from the server, or a transport failure reaching it.
    JsonRpc(jsonrpc::Error),

    /// Hex decoding error for raw transaction payloads.
    HexToBytes(HexToBytesError),

    /// Transaction id parsing error.
    HexToArray(HexToArrayError),

    /// JSON serialization/deserialization error.
    Json(serde_json::Error),

    /// I/O error (e.g., reading the config file).
    Io(io::Error),
}

impl Error {
    /// The error object returned by the node, if the call reached it and was rejected.
    pub fn rpc_error(&self) -> Option<&RpcError> {
        match self {
            Error::JsonRpc(jsonrpc::Error::Rpc(e)) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MissingAuthentication => {
                write!(f, "authentication is required but none was provided")
            }
            Error::InvalidConfigFile => write!(f, "invalid multichain config file"),
            Error::InvalidArgument(e) => write!(f, "invalid argument: {e}"),
            Error::HexToBytes(e) => write!(f, "Hex to bytes error: {e}"),
            Error::HexToArray(e) => write!(f, "Txid parsing error: {e}"),
            Error::JsonRpc(e) => write!(f, "JSON-RPC error: {e}"),
            Error::Json(e) => write!(f, "JSON error: {e}"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::JsonRpc(e) => Some(e),
            Error::Json(e) => Some(e),
            Error::Io(e) => Some(e),
            Error::HexToBytes(e) => Some(e),
            Error::HexToArray(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jsonrpc::Error> for Error {
    fn from(e: jsonrpc::Error) -> Self {
        Error::JsonRpc(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<HexToBytesError> for Error {
    fn from(e: HexToBytesError) -> Self {
        Error::HexToBytes(e)
    }
}

impl From<HexToArrayError> for Error {
    fn from(e: HexToArrayError) -> Self {
        Error::HexToArray(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
