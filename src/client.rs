use std::{fs, path::PathBuf, time::Duration};

use crate::api::LedgerApi;
use crate::error::Error;
use crate::jsonrpc::minreq_http::Builder;
use jsonrpc::{Transport, serde, serde_json};
use log::{Level, debug, log_enabled, trace};

/// Timeout used by [`Client::with_auth`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// client authentication methods
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Auth {
    None,
    UserPass(String, String),
    /// Path to a chain's `multichain.conf`, read for `rpcuser` and `rpcpassword`.
    ConfigFile(PathBuf),
}

impl Auth {
    /// Convert into the arguments that jsonrpc::Client needs.
    pub fn get_user_pass(self) -> Result<(Option<String>, Option<String>), Error> {
        match self {
            Auth::None => Ok((None, None)),
            Auth::UserPass(u, p) => Ok((Some(u), Some(p))),
            Auth::ConfigFile(path) => {
                let (user, pass) = parse_config(&fs::read_to_string(path)?)?;
                Ok((Some(user), Some(pass)))
            }
        }
    }
}

/// Pulls `rpcuser` and `rpcpassword` out of `multichain.conf` contents.
fn parse_config(contents: &str) -> Result<(String, String), Error> {
    let mut user = None;
    let mut pass = None;

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        match key.trim() {
            "rpcuser" => user = Some(value.trim().to_string()),
            "rpcpassword" => pass = Some(value.trim().to_string()),
            _ => {}
        }
    }

    match (user, pass) {
        (Some(u), Some(p)) if !u.is_empty() => Ok((u, p)),
        _ => Err(Error::InvalidConfigFile),
    }
}

// RPC Client.
#[derive(Debug)]
pub struct Client {
    /// The inner JSON-RPC client.
    inner: jsonrpc::Client,
}

impl Client {
    /// Creates a client to a MultiChain JSON-RPC server.
    ///
    /// Requires authentication via username/password or the chain's config file.
    /// For connections without authentication, use `with_transport` instead.
    pub fn with_auth(url: &str, auth: Auth) -> Result<Self, Error> {
        Self::with_auth_timeout(url, auth, DEFAULT_TIMEOUT)
    }

    /// Like [`Client::with_auth`], with a caller-chosen request timeout.
    ///
    /// `importaddress` with rescan blocks for a full chain scan, so callers using it
    /// on a long chain want something larger than [`DEFAULT_TIMEOUT`].
    pub fn with_auth_timeout(url: &str, auth: Auth, timeout: Duration) -> Result<Self, Error> {
        if matches!(auth, Auth::None) {
            return Err(Error::MissingAuthentication);
        }

        let (user, pass) = match auth.get_user_pass()? {
            (Some(user), pass) => (user, pass),
            (None, _) => return Err(Error::MissingAuthentication),
        };

        let transport = Builder::new()
            .url(url)
            .map_err(|e| Error::InvalidArgument(format!("Invalid URL: {e}")))?
            .timeout(timeout)
            .basic_auth(user, pass)
            .build();

        Ok(Self {
            inner: jsonrpc::Client::with_transport(transport),
        })
    }

    /// Creates a client to a MultiChain JSON-RPC server with transport.
    pub fn with_transport<T>(transport: T) -> Self
    where
        T: Transport,
    {
        Self {
            inner: jsonrpc::Client::with_transport(transport),
        }
    }

    /// Calls the RPC `method` with a given `args` list.
    pub fn call<T>(&self, method: &str, args: &[serde_json::Value]) -> Result<T, Error>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        let raw = serde_json::value::to_raw_value(args)?;
        let request = self.inner.build_request(method, Some(&*raw));
        if log_enabled!(Level::Debug) {
            debug!(target: "multichain_rpc_client", "JSON-RPC request: {} {}", method, raw.get());
        }

        let resp = self.inner.send_request(request);
        log_response(method, &resp);

        Ok(resp?.result()?)
    }
}

fn log_response(method: &str, resp: &Result<jsonrpc::Response, jsonrpc::Error>) {
    if !log_enabled!(Level::Debug) {
        return;
    }
    match resp {
        Err(e) => debug!(target: "multichain_rpc_client", "JSON-RPC failed: {method}: {e}"),
        Ok(resp) => match (&resp.error, &resp.result) {
            (Some(e), _) => {
                debug!(target: "multichain_rpc_client", "JSON-RPC error for {method}: {e:?}")
            }
            (None, Some(result)) => {
                trace!(target: "multichain_rpc_client", "JSON-RPC response for {method}: {}", result.get())
            }
            (None, None) => {
                trace!(target: "multichain_rpc_client", "JSON-RPC response for {method}: null")
            }
        },
    }
}

impl LedgerApi for Client {
    fn call<T>(&self, method: &str, args: &[serde_json::Value]) -> Result<T, Error>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        Client::call(self, method, args)
    }
}
