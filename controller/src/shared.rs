multiversx_sc::imports!();

use super::{errors::*, events, proxies, storage};

use crate::storage::{MarketRiskConfig, Status};

#[multiversx_sc::module]
pub trait SharedModule: admin::AdminModule + events::EventModule + proxies::ProxyModule + storage::StorageModule {
    // Checks

    /// A utility function to highlight that this smart contract is a Controller.
    ///
    #[view(isController)]
    fn is_controller(&self) -> bool {
        true
    }

    /// Checks whether the specified smart contract address is a money market.
    ///
    /// # Arguments:
    ///
    /// - `sc_address` - The address of the smart contract to check.
    ///
    fn is_money_market_sc(&self, sc_address: &ManagedAddress) -> bool {
        self.blockchain().is_smart_contract(sc_address) && self.is_money_market(sc_address)
    }

    /// Checks whether the specified smart contract address is a price oracle.
    ///
    /// # Arguments:
    ///
    /// - `sc_address` - The address of the smart contract to check.
    ///
    fn is_price_oracle_sc(&self, sc_address: &ManagedAddress) -> bool {
        self.blockchain().is_smart_contract(sc_address) && self.is_price_oracle(sc_address)
    }

    /// Checks whether the specified smart contract address is a reward distributor.
    ///
    /// # Arguments:
    ///
    /// - `sc_address` - The address of the smart contract to check.
    ///
    fn is_reward_distributor_sc(&self, sc_address: &ManagedAddress) -> bool {
        self.blockchain().is_smart_contract(sc_address) && self.is_reward_distributor(sc_address)
    }

    /// Checks whether the specified money market address has already been whitelisted.
    ///
    /// # Arguments:
    ///
    /// - `sc_address` - The address of the money market to check.
    ///
    #[view(isWhitelistedMarket)]
    fn is_whitelisted_money_market(&self, sc_address: &ManagedAddress) -> bool {
        self.whitelisted_markets().contains(sc_address)
    }

    fn require_whitelisted_money_market(&self, sc_address: &ManagedAddress) {
        require!(self.is_whitelisted_money_market(sc_address), ERROR_MARKET_NOT_LISTED);
    }

    /// Requires that the caller is the money market itself.
    ///
    fn require_money_market_caller(&self, money_market: &ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(&caller == money_market, ERROR_ONLY_MONEY_MARKET_CALLER);
    }

    /// Requires that the caller is the admin or the pause guardian, if it is set.
    ///
    fn require_admin_or_guardian(&self) {
        let admin = self.get_admin();
        let caller = self.blockchain().get_caller();

        match self.get_pause_guardian() {
            None => {
                require!(caller == admin, ERROR_ONLY_ADMIN);
            },
            Some(pause_guardian) => {
                require!(caller == admin || caller == pause_guardian, ERROR_ONLY_ADMIN_OR_GUARDIAN);
            },
        }
    }

    /// Pausing is open to both the admin and the pause guardian, while unpausing is reserved to the admin.
    ///
    /// # Arguments:
    ///
    /// - `pause` - Whether the action pauses or unpauses.
    ///
    fn require_pause_permission(&self, pause: bool) {
        if pause {
            self.require_admin_or_guardian();
        } else {
            require!(self.blockchain().get_caller() == self.get_admin(), ERROR_ONLY_ADMIN);
        }
    }

    // Gets

    /// Gets the current supply cap for a given money market, if there is one.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The address of the money market smart contract.
    ///
    #[view(getSupplyCap)]
    fn get_supply_cap(&self, money_market: &ManagedAddress) -> Option<BigUint> {
        let mapper = self.supply_cap(money_market);
        if mapper.is_empty() {
            None
        } else {
            let supply_cap = mapper.get();
            Some(supply_cap)
        }
    }

    /// Gets the current borrow cap for a given money market, if there is one.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The address of the money market smart contract.
    ///
    #[view(getBorrowCap)]
    fn get_borrow_cap(&self, money_market: &ManagedAddress) -> Option<BigUint> {
        let mapper = self.borrow_cap(money_market);
        if mapper.is_empty() {
            None
        } else {
            let borrow_cap = mapper.get();
            Some(borrow_cap)
        }
    }

    /// Gets the address of the pause guardian, if one has been set.
    ///
    fn get_pause_guardian(&self) -> Option<ManagedAddress> {
        if self.pause_guardian().is_empty() {
            None
        } else {
            let pause_guardian = self.pause_guardian().get();
            Some(pause_guardian)
        }
    }

    /// Gets the current minting status at a given money market.
    ///
    /// # Notes:
    ///
    /// - By default, mint is active (returns the first enum value).
    ///
    #[view(getMintStatus)]
    fn get_mint_status(&self, money_market: &ManagedAddress) -> Status {
        self.require_whitelisted_money_market(money_market);
        self.mint_status(money_market).get()
    }

    #[view(getRedeemStatus)]
    fn get_redeem_status(&self, money_market: &ManagedAddress) -> Status {
        self.require_whitelisted_money_market(money_market);
        self.redeem_status(money_market).get()
    }

    #[view(getBorrowStatus)]
    fn get_borrow_status(&self, money_market: &ManagedAddress) -> Status {
        self.require_whitelisted_money_market(money_market);
        self.borrow_status(money_market).get()
    }

    #[view(getTransferStatus)]
    fn get_transfer_status(&self) -> Status {
        self.transfer_status().get()
    }

    #[view(getSeizeStatus)]
    fn get_seize_status(&self) -> Status {
        self.seize_status().get()
    }

    /// Gets the whole risk configuration of a money market. Non listed markets return an empty configuration.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The address of the money market smart contract.
    ///
    #[view(getMarketRiskConfig)]
    fn get_market_risk_config(&self, money_market: &ManagedAddress) -> MarketRiskConfig<Self::Api> {
        MarketRiskConfig {
            is_listed: self.is_whitelisted_money_market(money_market),
            collateral_factor: self.collateral_factor(money_market).get(),
            borrow_factor: self.borrow_factor(money_market).get(),
            supply_cap: self.get_supply_cap(money_market),
            borrow_cap: self.get_borrow_cap(money_market),
            distribution_factor: self.distribution_factor(money_market).get(),
            mint_paused: self.mint_status(money_market).get() == Status::Paused,
            redeem_paused: self.redeem_status(money_market).get() == Status::Paused,
            borrow_paused: self.borrow_status(money_market).get() == Status::Paused,
        }
    }

    /// Checks whether an account has entered a given money market.
    ///
    #[view(hasEnteredMarket)]
    fn has_entered_market(&self, account: &ManagedAddress, money_market: &ManagedAddress) -> bool {
        self.account_collaterals(account).contains(money_market)
    }

    /// Checks whether an account has an outstanding borrow at a given money market.
    ///
    #[view(hasBorrowed)]
    fn has_borrowed(&self, account: &ManagedAddress, money_market: &ManagedAddress) -> bool {
        self.account_borrows(account).contains(money_market)
    }

    // Sets

    /// Adds a money market to the set of markets an account has borrowed from.
    ///
    fn add_borrowed_market(&self, money_market: &ManagedAddress, account: &ManagedAddress) {
        if self.account_borrows(account).insert(money_market.clone()) {
            self.borrowed_market_added_event(money_market, account);
        }
    }

    /// Removes a money market from the set of markets an account has borrowed from.
    ///
    fn remove_borrowed_market(&self, money_market: &ManagedAddress, account: &ManagedAddress) {
        if self.account_borrows(account).swap_remove(money_market) {
            self.borrowed_market_removed_event(money_market, account);
        }
    }
}
