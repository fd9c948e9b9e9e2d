use alloy::{
    primitives::{Address, U256},
    sol,
};

sol! {
interface ITokenLock {
    function initialize(address owner, address token, uint256 depositDeadline, uint256 lockDuration, string name, string symbol) external;
}
}

/// Arguments of the `TokenLock.initialize` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockInitParams {
    /// Owner of the lock
    pub owner: Address,
    /// Token accepted by the lock
    pub token: Address,
    /// Unix timestamp after which deposits are refused
    pub deposit_deadline: u64,
    /// Seconds the deposits stay locked
    pub lock_duration: u64,
    /// Name of the locked token representation
    pub name: String,
    /// Symbol of the locked token representation
    pub symbol: String,
}

impl LockInitParams {
    /// Build the abi call for these params
    pub fn to_call(&self) -> ITokenLock::initializeCall {
        ITokenLock::initializeCall {
            owner: self.owner,
            token: self.token,
            depositDeadline: U256::from(self.deposit_deadline),
            lockDuration: U256::from(self.lock_duration),
            name: self.name.clone(),
            symbol: self.symbol.clone(),
        }
    }
}
