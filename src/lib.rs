//! MultiChain RPC client library.
//!
//! This crate provides a Rust client for the wallet and raw transaction calls of a
//! MultiChain node's JSON-RPC interface: key pair generation, watch-only address
//! import, address history, signing, and broadcast. Every call is forwarded to the
//! node as-is and its answer returned unchanged; validation happens on the node.

mod api;
mod client;
mod error;
mod types;

pub use api::LedgerApi;
pub use client::{Auth, Client, DEFAULT_TIMEOUT};
pub use error::{Error, Result};
pub use types::{
    Addresses, Amounts, CreateRawSendFromOptions, ImportAddressOptions, KeyPair,
    ListAddressTransactionsOptions, ParentOutput, RawSendAction, RawSendFromResult,
    SendRawTransactionOptions, SigHashType, SignRawTransactionOptions, SignedRawTransaction,
};

pub use corepc_types::bitcoin::Txid;
pub use jsonrpc;
