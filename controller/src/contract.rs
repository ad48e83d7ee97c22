#![no_std]

multiversx_sc::imports!();

pub use admin;

pub mod constants;
pub mod errors;
pub mod events;
pub mod governance;
pub mod guardian;
pub mod market;
pub mod policies;
pub mod proxies;
pub mod risk_profile;
pub mod shared;
pub mod storage;

/// Controller Smart Contract
///
/// Handles the control (i.e. checks) for virtually all interactions with the protocol: market listing, account
/// solvency, liquidations, pauses and reward checkpoints.
///
#[multiversx_sc::contract]
pub trait Controller: admin::AdminModule + events::EventModule + governance::GovernanceModule + guardian::GuardianModule + market::MarketModule + policies::PolicyModule + proxies::ProxyModule + risk_profile::RiskProfileModule + shared::SharedModule + storage::StorageModule {
    /// Initializes the contract with an optional admin address.
    ///
    /// # Arguments:
    ///
    /// - `opt_admin` - An optional admin address for the contract.
    ///
    /// Notes:
    ///
    /// - If the contract is being deployed for the first time, the admin address will be set.
    /// - If the admin address is not provided, the admin will be set as the deployer.
    /// - The close factor and the liquidation incentive start at their default values and are never overwritten.
    ///
    #[init]
    fn init(&self, opt_admin: OptionalValue<ManagedAddress>) {
        self.try_set_admin(opt_admin);
        self.try_set_close_factor();
        self.try_set_liquidation_incentive();
    }

    #[upgrade]
    fn upgrade(&self) {}
}
