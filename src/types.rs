//! Request and response types for the MultiChain wallet and raw transaction calls.
//!
//! These are pass-through values. Nothing here is validated locally; the node decides
//! whether an address, script or payload is acceptable.

use std::{collections::BTreeMap, fmt, str::FromStr};

use corepc_types::bitcoin::hex::FromHex;
use jsonrpc::serde_json::Value;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::Error;

/// One address (or full public key), or a list of them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Addresses {
    Single(String),
    Many(Vec<String>),
}

impl From<&str> for Addresses {
    fn from(address: &str) -> Self {
        Addresses::Single(address.to_owned())
    }
}

impl From<String> for Addresses {
    fn from(address: String) -> Self {
        Addresses::Single(address)
    }
}

impl From<Vec<String>> for Addresses {
    fn from(addresses: Vec<String>) -> Self {
        Addresses::Many(addresses)
    }
}

impl From<&[&str]> for Addresses {
    fn from(addresses: &[&str]) -> Self {
        Addresses::Many(addresses.iter().map(|a| (*a).to_owned()).collect())
    }
}

/// A key pair generated by `createkeypairs`. Never stored by the node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    pub address: String,
    pub pubkey: String,
    pub privkey: String,
}

/// An output of an unbroadcast parent transaction, used when signing a chain of
/// transactions the node has not seen yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentOutput {
    pub txid: String,
    pub vout: u32,
    #[serde(rename = "scriptPubKey")]
    pub script_pub_key: String,
    #[serde(rename = "redeemScript", default, skip_serializing_if = "Option::is_none")]
    pub redeem_script: Option<String>,
}

impl ParentOutput {
    pub fn new(txid: impl Into<String>, vout: u32, script_pub_key: impl Into<String>) -> Self {
        Self {
            txid: txid.into(),
            vout,
            script_pub_key: script_pub_key.into(),
            redeem_script: None,
        }
    }

    /// Attaches the redeem script needed to sign a P2SH output.
    pub fn with_redeem_script(mut self, redeem_script: impl Into<String>) -> Self {
        self.redeem_script = Some(redeem_script.into());
        self
    }
}

/// Result of `signrawtransaction`.
///
/// `complete == false` means more signatures are needed before broadcast. The node
/// then reports why in `errors`, one object per input it could not sign.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedRawTransaction {
    pub hex: String,
    pub complete: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<Value>,
}

impl SignedRawTransaction {
    /// Decodes the hex payload into raw transaction bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        Ok(Vec::<u8>::from_hex(&self.hex)?)
    }
}

/// Which parts of the transaction a signature commits to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SigHashType {
    #[default]
    All,
    None,
    Single,
    AllAnyoneCanPay,
    NoneAnyoneCanPay,
    SingleAnyoneCanPay,
}

impl SigHashType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SigHashType::All => "ALL",
            SigHashType::None => "NONE",
            SigHashType::Single => "SINGLE",
            SigHashType::AllAnyoneCanPay => "ALL|ANYONECANPAY",
            SigHashType::NoneAnyoneCanPay => "NONE|ANYONECANPAY",
            SigHashType::SingleAnyoneCanPay => "SINGLE|ANYONECANPAY",
        }
    }
}

impl fmt::Display for SigHashType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SigHashType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(SigHashType::All),
            "NONE" => Ok(SigHashType::None),
            "SINGLE" => Ok(SigHashType::Single),
            "ALL|ANYONECANPAY" => Ok(SigHashType::AllAnyoneCanPay),
            "NONE|ANYONECANPAY" => Ok(SigHashType::NoneAnyoneCanPay),
            "SINGLE|ANYONECANPAY" => Ok(SigHashType::SingleAnyoneCanPay),
            other => Err(Error::InvalidArgument(format!(
                "unknown sighash type: {other}"
            ))),
        }
    }
}

impl Serialize for SigHashType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// What `createrawsendfrom` should do with the transaction it builds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RawSendAction {
    /// Return the unsigned transaction hex.
    #[default]
    Build,
    /// Lock the selected inputs and return the unsigned hex.
    Lock,
    /// Sign with wallet keys and return `{hex, complete}`.
    Sign,
    /// Lock the inputs, sign, and return `{hex, complete}`.
    LockSign,
    /// Sign and broadcast, returning the txid.
    Send,
}

impl RawSendAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RawSendAction::Build => "",
            RawSendAction::Lock => "lock",
            RawSendAction::Sign => "sign",
            RawSendAction::LockSign => "lock,sign",
            RawSendAction::Send => "send",
        }
    }
}

impl fmt::Display for RawSendAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RawSendAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(RawSendAction::Build),
            "lock" => Ok(RawSendAction::Lock),
            "sign" => Ok(RawSendAction::Sign),
            "lock,sign" => Ok(RawSendAction::LockSign),
            "send" => Ok(RawSendAction::Send),
            other => Err(Error::InvalidArgument(format!(
                "unknown createrawsendfrom action: {other}"
            ))),
        }
    }
}

impl Serialize for RawSendAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Result of `createrawsendfrom`. The shape depends on the requested action.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawSendFromResult {
    /// Returned for `sign` and `lock,sign`.
    Signed(SignedRawTransaction),
    /// Raw hex for the build and `lock` actions, the txid for `send`.
    Hex(String),
}

/// Address to amount map for `createrawsendfrom`. Amounts are either a native
/// quantity or an asset object, so they stay as raw JSON.
pub type Amounts = BTreeMap<String, Value>;

/// Optional parameters of `importaddress`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportAddressOptions {
    /// Wallet label for the imported address. Defaults to empty.
    pub label: String,
    /// Rescan the whole chain for the address history. Defaults to `true`.
    pub rescan: bool,
}

impl Default for ImportAddressOptions {
    fn default() -> Self {
        Self {
            label: String::new(),
            rescan: true,
        }
    }
}

impl ImportAddressOptions {
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn rescan(mut self, rescan: bool) -> Self {
        self.rescan = rescan;
        self
    }
}

/// Optional parameters of `listaddresstransactions`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListAddressTransactionsOptions {
    /// Number of transactions to return. Defaults to 10.
    pub count: u32,
    /// Number of most recent transactions to skip. Defaults to 0.
    pub skip: u32,
    /// Include inputs and outputs. Defaults to `false`.
    pub verbose: bool,
}

impl Default for ListAddressTransactionsOptions {
    fn default() -> Self {
        Self {
            count: 10,
            skip: 0,
            verbose: false,
        }
    }
}

impl ListAddressTransactionsOptions {
    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = skip;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Optional parameters of `sendrawtransaction`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SendRawTransactionOptions {
    /// Skip the node's fee sanity check. Defaults to `false`.
    pub allow_high_fees: bool,
}

impl SendRawTransactionOptions {
    pub fn allow_high_fees(mut self, allow_high_fees: bool) -> Self {
        self.allow_high_fees = allow_high_fees;
        self
    }
}

/// Optional parameters of `signrawtransaction`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SignRawTransactionOptions {
    /// Defaults to [`SigHashType::All`].
    pub sighash_type: SigHashType,
}

impl SignRawTransactionOptions {
    pub fn sighash_type(mut self, sighash_type: SigHashType) -> Self {
        self.sighash_type = sighash_type;
        self
    }
}

/// Optional parameters of `createrawsendfrom`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CreateRawSendFromOptions {
    /// Defaults to [`RawSendAction::Build`].
    pub action: RawSendAction,
}

impl CreateRawSendFromOptions {
    pub fn action(mut self, action: RawSendAction) -> Self {
        self.action = action;
        self
    }
}
