multiversx_sc::imports!();

use super::{constants::*, errors::*, events, proxies, shared, storage};

#[multiversx_sc::module]
pub trait GovernanceModule: admin::AdminModule + events::EventModule + proxies::ProxyModule + shared::SharedModule + storage::StorageModule {
    /// Incorporates a money market in a list of accepted money markets (a whitelist). This action will add support for the
    /// provided money market.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The address of the money market smart contract.
    /// - `collateral_factor` - The collateral factor in wad.
    /// - `borrow_factor` - The borrow factor in wad.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the admin.
    /// - The provided address must be a valid money market smart contract.
    /// - The money market should not have already been supported in the past.
    /// - The underlying must be priced by the price oracle.
    ///
    #[endpoint(supportMarket)]
    fn support_market(&self, money_market: &ManagedAddress, collateral_factor: &BigUint, borrow_factor: &BigUint) {
        self.require_admin();

        // must be a money market smart contract
        require!(self.is_money_market_sc(money_market), ERROR_INVALID_MONEY_MARKET_SC);

        // should not be supported
        require!(!self.is_whitelisted_money_market(money_market), ERROR_MARKET_ALREADY_LISTED);

        self.require_valid_collateral_factor(collateral_factor);
        self.require_valid_borrow_factor(borrow_factor);

        // add to list
        self.whitelisted_markets().insert(money_market.clone());

        let underlying_id = self.get_money_market_underlying_id(money_market);
        self.underlying_id(money_market).set(&underlying_id);

        // make sure pricing is available
        self.get_underlying_price(money_market);

        self.collateral_factor(money_market).set(collateral_factor);
        self.borrow_factor(money_market).set(borrow_factor);
        self.distribution_factor(money_market).set(BigUint::from(DISTRIBUTION_FACTOR));

        if let Some(reward_distributor) = self.get_reward_distributor() {
            self.add_reward_recipient(&reward_distributor, money_market);
        }

        self.support_money_market_event(money_market, &underlying_id);
    }

    /// Sets the collateral factor for a given money market.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The address of the money market smart contract.
    /// - `new_collateral_factor` - The new collateral factor in wad.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the admin.
    /// - The provided market must be a whitelisted money market.
    /// - A collateral factor of zero should be configured when a market is deprecated.
    ///
    #[endpoint(setCollateralFactor)]
    fn set_collateral_factor(&self, money_market: &ManagedAddress, new_collateral_factor: &BigUint) {
        self.require_admin();
        self.require_whitelisted_money_market(money_market);
        self.require_valid_collateral_factor(new_collateral_factor);

        // make sure the price oracle can price the underlying when the new collateral factor is != 0
        if new_collateral_factor != &BigUint::zero() {
            self.get_underlying_price(money_market);
        }

        let old_collateral_factor = self.collateral_factor(money_market).replace(new_collateral_factor);
        self.new_collateral_factor_event(money_market, &old_collateral_factor, new_collateral_factor);
    }

    /// Sets the borrow factor for a given money market.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The address of the money market smart contract.
    /// - `new_borrow_factor` - The new borrow factor in wad.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the admin.
    /// - The provided market must be a whitelisted money market.
    ///
    #[endpoint(setBorrowFactor)]
    fn set_borrow_factor(&self, money_market: &ManagedAddress, new_borrow_factor: &BigUint) {
        self.require_admin();
        self.require_whitelisted_money_market(money_market);
        self.require_valid_borrow_factor(new_borrow_factor);

        self.get_underlying_price(money_market);

        let old_borrow_factor = self.borrow_factor(money_market).replace(new_borrow_factor);
        self.new_borrow_factor_event(money_market, &old_borrow_factor, new_borrow_factor);
    }

    /// Sets or clears the supply cap of a given money market.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The address of the money market smart contract.
    /// - `opt_new_supply_cap` - The new supply cap in underlying. If not given, the cap is removed.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the admin.
    ///
    #[endpoint(setSupplyCap)]
    fn set_supply_cap(&self, money_market: &ManagedAddress, opt_new_supply_cap: OptionalValue<BigUint>) {
        self.require_admin();
        self.require_whitelisted_money_market(money_market);

        let old_supply_cap = self.get_supply_cap(money_market);
        let new_supply_cap = opt_new_supply_cap.into_option();
        match &new_supply_cap {
            None => self.supply_cap(money_market).clear(),
            Some(cap) => self.supply_cap(money_market).set(cap),
        }

        self.new_supply_cap_event(money_market, &old_supply_cap, &new_supply_cap);
    }

    /// Sets or clears the borrow cap of a given money market.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The address of the money market smart contract.
    /// - `opt_new_borrow_cap` - The new borrow cap in underlying. If not given, the cap is removed.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the admin.
    ///
    #[endpoint(setBorrowCap)]
    fn set_borrow_cap(&self, money_market: &ManagedAddress, opt_new_borrow_cap: OptionalValue<BigUint>) {
        self.require_admin();
        self.require_whitelisted_money_market(money_market);

        let old_borrow_cap = self.get_borrow_cap(money_market);
        let new_borrow_cap = opt_new_borrow_cap.into_option();
        match &new_borrow_cap {
            None => self.borrow_cap(money_market).clear(),
            Some(cap) => self.borrow_cap(money_market).set(cap),
        }

        self.new_borrow_cap_event(money_market, &old_borrow_cap, &new_borrow_cap);
    }

    /// Sets the close factor, i.e. the maximum share of a borrow that can be repaid in a single liquidation.
    ///
    /// # Arguments:
    ///
    /// - `new_close_factor` - The new close factor in wad.
    ///
    #[endpoint(setCloseFactor)]
    fn set_close_factor(&self, new_close_factor: &BigUint) {
        self.require_admin();
        self.set_close_factor_internal(new_close_factor);
    }

    /// Sets the liquidation incentive, i.e. the premium on the seized collateral received by liquidators.
    ///
    /// # Arguments:
    ///
    /// - `new_liquidation_incentive` - The new liquidation incentive in wad.
    ///
    #[endpoint(setLiquidationIncentive)]
    fn set_liquidation_incentive(&self, new_liquidation_incentive: &BigUint) {
        self.require_admin();
        self.set_liquidation_incentive_internal(new_liquidation_incentive);
    }

    /// Sets the pricing Oracle smart contract address.
    ///
    /// # Arguments:
    ///
    /// - `new_price_oracle` - The address of the pricing oracle smart contract.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the admin.
    /// - The provided address must be a valid oracle smart contract.
    ///
    #[endpoint(setPriceOracle)]
    fn set_price_oracle(&self, new_price_oracle: &ManagedAddress) {
        self.require_admin();

        let old_price_oracle = self.get_price_oracle();
        self.require_new_address(&old_price_oracle, new_price_oracle);
        require!(self.is_price_oracle_sc(new_price_oracle), ERROR_INVALID_PRICE_ORACLE_SC);

        self.price_oracle().set(new_price_oracle);

        self.new_price_oracle_event(&old_price_oracle, new_price_oracle);
    }

    /// Sets the reward distributor smart contract address. Every listed market becomes a reward recipient.
    ///
    /// # Arguments:
    ///
    /// - `new_reward_distributor` - The address of the reward distributor smart contract.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the admin.
    /// - The reward distributor must have this controller as its controller.
    ///
    #[endpoint(setRewardDistributor)]
    fn set_reward_distributor(&self, new_reward_distributor: &ManagedAddress) {
        self.require_admin();

        let old_reward_distributor = self.get_reward_distributor();
        self.require_new_address(&old_reward_distributor, new_reward_distributor);
        require!(self.is_reward_distributor_sc(new_reward_distributor), ERROR_INVALID_REWARD_DISTRIBUTOR_SC);

        self.reward_distributor().set(new_reward_distributor);

        for money_market in self.whitelisted_markets().iter() {
            self.add_reward_recipient(new_reward_distributor, &money_market);
        }

        self.new_reward_distributor_event(&old_reward_distributor, new_reward_distributor);
    }

    /// Sets the pause guardian of the protocol.
    ///
    /// # Arguments:
    ///
    /// - `new_pause_guardian` - The address of the new pause guardian.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the admin.
    ///
    #[endpoint(setPauseGuardian)]
    fn set_pause_guardian(&self, new_pause_guardian: &ManagedAddress) {
        self.require_admin();

        let old_pause_guardian = self.get_pause_guardian();
        self.require_new_address(&old_pause_guardian, new_pause_guardian);

        self.pause_guardian().set(new_pause_guardian);
        self.new_pause_guardian_event(&old_pause_guardian, &Some(new_pause_guardian.clone()));
    }

    /// Removes the pause guardian of the protocol, leaving the admin as the only one able to pause.
    ///
    #[endpoint(clearPauseGuardian)]
    fn clear_pause_guardian(&self) {
        self.require_admin();

        let old_pause_guardian = self.get_pause_guardian();
        require!(old_pause_guardian.is_some(), ERROR_PAUSE_GUARDIAN_NOT_SET);

        self.pause_guardian().clear();
        self.new_pause_guardian_event(&old_pause_guardian, &None);
    }

    fn try_set_close_factor(&self) {
        if self.close_factor().is_empty() {
            self.set_close_factor_internal(&BigUint::from(DEFAULT_CLOSE_FACTOR));
        }
    }

    fn try_set_liquidation_incentive(&self) {
        if self.liquidation_incentive().is_empty() {
            self.set_liquidation_incentive_internal(&BigUint::from(DEFAULT_LIQUIDATION_INCENTIVE));
        }
    }

    fn set_close_factor_internal(&self, new_close_factor: &BigUint) {
        let min_close_factor = BigUint::from(MIN_CLOSE_FACTOR);
        let max_close_factor = BigUint::from(MAX_CLOSE_FACTOR);
        require!(new_close_factor >= &min_close_factor && new_close_factor <= &max_close_factor, ERROR_INVALID_CLOSE_FACTOR);

        let old_close_factor = self.close_factor().replace(new_close_factor);
        self.new_close_factor_event(&old_close_factor, new_close_factor);
    }

    fn set_liquidation_incentive_internal(&self, new_liquidation_incentive: &BigUint) {
        let min_liquidation_incentive = BigUint::from(MIN_LIQUIDATION_INCENTIVE);
        let max_liquidation_incentive = BigUint::from(MAX_LIQUIDATION_INCENTIVE);
        require!(new_liquidation_incentive >= &min_liquidation_incentive && new_liquidation_incentive <= &max_liquidation_incentive, ERROR_INVALID_LIQUIDATION_INCENTIVE);

        let old_liquidation_incentive = self.liquidation_incentive().replace(new_liquidation_incentive);
        self.new_liquidation_incentive_event(&old_liquidation_incentive, new_liquidation_incentive);
    }

    fn require_valid_collateral_factor(&self, collateral_factor: &BigUint) {
        require!(collateral_factor <= &BigUint::from(MAX_COLLATERAL_FACTOR), ERROR_INVALID_COLLATERAL_FACTOR);
    }

    fn require_valid_borrow_factor(&self, borrow_factor: &BigUint) {
        require!(borrow_factor > &BigUint::zero() && borrow_factor <= &BigUint::from(MAX_BORROW_FACTOR), ERROR_INVALID_BORROW_FACTOR);
    }

    fn require_new_address(&self, old_address: &Option<ManagedAddress>, new_address: &ManagedAddress) {
        require!(!new_address.is_zero(), ERROR_INVALID_ADDRESS);
        if let Some(old_address) = old_address {
            require!(old_address != new_address, ERROR_SAME_ADDRESS);
        }
    }
}
