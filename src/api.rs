//! The MultiChain wallet and raw transaction calls.

use jsonrpc::serde_json::{self, Value};
use serde::{Deserialize, Serialize};

use corepc_types::bitcoin::Txid;

use crate::error::Error;
use crate::types::{
    Addresses, Amounts, CreateRawSendFromOptions, ImportAddressOptions, KeyPair,
    ListAddressTransactionsOptions, ParentOutput, RawSendFromResult, SendRawTransactionOptions,
    SignRawTransactionOptions, SignedRawTransaction,
};

/// Shorthand for converting a variable into a positional JSON argument.
fn into_json<T: Serialize>(val: T) -> Result<Value, Error> {
    Ok(serde_json::to_value(val)?)
}

/// Typed access to a MultiChain node.
///
/// Implementors only provide [`LedgerApi::call`]; every operation is a single
/// request whose result is returned as the node sent it. Nothing is validated or
/// retried locally.
pub trait LedgerApi {
    /// Calls the RPC `method` with a given `args` list.
    fn call<T>(&self, method: &str, args: &[Value]) -> Result<T, Error>
    where
        T: for<'de> Deserialize<'de>;

    /// Generates `count` key pairs outside the node's wallet and key pool.
    fn create_keypairs(&self, count: u32) -> Result<Vec<KeyPair>, Error> {
        self.call("createkeypairs", &[into_json(count)?])
    }

    /// Adds watch-only address(es) or public key(s) to the wallet.
    ///
    /// With `rescan` set the node scans the whole chain before answering, which can
    /// outlast the default transport timeout.
    fn import_address(
        &self,
        addresses: impl Into<Addresses>,
        options: &ImportAddressOptions,
    ) -> Result<(), Error> {
        self.call(
            "importaddress",
            &[
                into_json(addresses.into())?,
                into_json(&options.label)?,
                into_json(options.rescan)?,
            ],
        )
    }

    /// Lists the most recent transactions touching `address` in this node's wallet.
    fn list_address_transactions(
        &self,
        address: &str,
        options: &ListAddressTransactionsOptions,
    ) -> Result<Vec<Value>, Error> {
        self.call(
            "listaddresstransactions",
            &[
                into_json(address)?,
                into_json(options.count)?,
                into_json(options.skip)?,
                into_json(options.verbose)?,
            ],
        )
    }

    /// Broadcasts a serialized transaction and returns its txid.
    fn send_raw_transaction(
        &self,
        tx_hex: &str,
        options: &SendRawTransactionOptions,
    ) -> Result<Txid, Error> {
        let res: String = self.call(
            "sendrawtransaction",
            &[into_json(tx_hex)?, into_json(options.allow_high_fees)?],
        )?;
        Ok(res.parse()?)
    }

    /// Signs `tx_hex`.
    ///
    /// `private_keys == None` lets the node sign with its wallet keys; passing a
    /// slice restricts signing to exactly those keys.
    fn sign_raw_transaction(
        &self,
        tx_hex: &str,
        parent_outputs: &[ParentOutput],
        private_keys: Option<&[String]>,
        options: &SignRawTransactionOptions,
    ) -> Result<SignedRawTransaction, Error> {
        self.call(
            "signrawtransaction",
            &[
                into_json(tx_hex)?,
                into_json(parent_outputs)?,
                into_json(private_keys)?,
                into_json(options.sighash_type)?,
            ],
        )
    }

    /// Builds a transaction paying `amounts` from inputs owned by `from_address`,
    /// with change going back to `from_address`.
    fn create_raw_send_from(
        &self,
        from_address: &str,
        amounts: &Amounts,
        data: &[Value],
        options: &CreateRawSendFromOptions,
    ) -> Result<RawSendFromResult, Error> {
        self.call(
            "createrawsendfrom",
            &[
                into_json(from_address)?,
                into_json(amounts)?,
                into_json(data)?,
                into_json(options.action)?,
            ],
        )
    }
}
