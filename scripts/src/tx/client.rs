use alloy::{
    hex,
    network::{Ethereum, EthereumWallet},
    primitives::{Address, Bytes, TxHash, B256, U256},
    providers::{
        fillers::{ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, WalletFiller},
        Identity, Provider, ProviderBuilder, ReqwestProvider, WalletProvider,
    },
    signers::local::PrivateKeySigner,
};
use reqwest::{Client, Url};
use tracing::info;

use crate::{
    deploy::deploy_contract,
    errors::ScriptError,
    tx::{abi::LockInitParams, reader::get_balance, sender::send_init_lock, ChainClient},
};

/// Re-export from alloy recommend filter
type RecommendFiller =
    JoinFill<JoinFill<JoinFill<Identity, GasFiller>, NonceFiller>, ChainIdFiller>;

/// An alloy provider that signs with a local private key
/// & interfaces with the RPC endpoint over HTTP
pub type RpcProvider = FillProvider<
    JoinFill<RecommendFiller, WalletFiller<EthereumWallet>>,
    ReqwestProvider,
    alloy::transports::http::Http<Client>,
    Ethereum,
>;

/// Build the RPC client for the `rpc_url` endpoint, signing with the `priv_key` account
pub async fn create_rpc_provider(
    rpc_url: &str,
    priv_key: Option<&str>,
) -> Result<RpcProvider, ScriptError> {
    let priv_key = priv_key.ok_or(ScriptError::ClientInitialization(String::from(
        "no signer configured, set PRIVATE_KEY or pass --priv-key",
    )))?;
    let wallet = EthereumWallet::from(parse_signer(priv_key)?);

    let url = rpc_url
        .parse::<Url>()
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    // Create our provider with the rpc client + signer
    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_http(url);

    // Fetch chain id, failing early on an unreachable node
    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    info!("Build client on chain ID: {}", chain_id);

    Ok(provider)
}

/// Parse a hex private key, with or without the `0x` prefix
fn parse_signer(priv_key: &str) -> Result<PrivateKeySigner, ScriptError> {
    let bytes =
        hex::decode(priv_key.trim()).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    if bytes.len() != B256::len_bytes() {
        return Err(ScriptError::ClientInitialization(format!(
            "private key must be 32 bytes, got {}",
            bytes.len()
        )));
    }

    PrivateKeySigner::from_bytes(&B256::from_slice(&bytes))
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))
}

impl ChainClient for RpcProvider {
    async fn signer_address(&self) -> Result<Address, ScriptError> {
        Ok(self.default_signer_address())
    }

    async fn balance(&self, account: Address) -> Result<U256, ScriptError> {
        get_balance(account, self).await
    }

    async fn deploy(&self, bytecode: Bytes) -> Result<Address, ScriptError> {
        deploy_contract(bytecode, self).await
    }

    async fn initialize_lock(
        &self,
        lock: Address,
        params: &LockInitParams,
    ) -> Result<TxHash, ScriptError> {
        send_init_lock(lock, params, self).await
    }
}
