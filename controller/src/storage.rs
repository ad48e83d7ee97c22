multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[type_abi]
#[derive(TopEncode, TopDecode, PartialEq, Clone, Copy, Debug)]
pub enum Status {
    Active,
    Paused,
}

/// The risk configuration of a money market, as exposed to money markets and integrators.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, PartialEq, Clone, Debug)]
pub struct MarketRiskConfig<M: ManagedTypeApi> {
    pub is_listed: bool,
    pub collateral_factor: BigUint<M>,
    pub borrow_factor: BigUint<M>,
    pub supply_cap: Option<BigUint<M>>,
    pub borrow_cap: Option<BigUint<M>>,
    pub distribution_factor: BigUint<M>,
    pub mint_paused: bool,
    pub redeem_paused: bool,
    pub borrow_paused: bool,
}

#[multiversx_sc::module]
pub trait StorageModule {
    /// Stores the pause guardian address.
    #[view(getPauseGuardian)]
    #[storage_mapper("pause_guardian")]
    fn pause_guardian(&self) -> SingleValueMapper<ManagedAddress>;

    /// Stores the price oracle address.
    #[view(getPriceOracle)]
    #[storage_mapper("price_oracle")]
    fn price_oracle(&self) -> SingleValueMapper<ManagedAddress>;

    /// Stores the reward distributor address.
    #[view(getRewardDistributor)]
    #[storage_mapper("reward_distributor")]
    fn reward_distributor(&self) -> SingleValueMapper<ManagedAddress>;

    /// Stores the whitelisted (listed) money markets.
    #[view(getWhitelistedMarkets)]
    #[storage_mapper("whitelisted_markets")]
    fn whitelisted_markets(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Stores the underlying identifier of each money market.
    #[view(getUnderlyingId)]
    #[storage_mapper("underlying_id")]
    fn underlying_id(&self, money_market: &ManagedAddress) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// Stores the money markets an account has entered, i.e. the markets used as collateral.
    #[view(getAccountCollaterals)]
    #[storage_mapper("account_collaterals")]
    fn account_collaterals(&self, account: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;

    /// Stores the money markets in which an account has an outstanding borrow.
    #[view(getAccountBorrows)]
    #[storage_mapper("account_borrows")]
    fn account_borrows(&self, account: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;

    /// Stores the collateral factor of each money market.
    #[view(getCollateralFactor)]
    #[storage_mapper("collateral_factor")]
    fn collateral_factor(&self, money_market: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Stores the borrow factor of each money market.
    #[view(getBorrowFactor)]
    #[storage_mapper("borrow_factor")]
    fn borrow_factor(&self, money_market: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Stores the legacy distribution factor of each money market.
    #[storage_mapper("distribution_factor")]
    fn distribution_factor(&self, money_market: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Stores the maximum amount of underlying that can be supplied to a money market, if any.
    #[storage_mapper("supply_cap")]
    fn supply_cap(&self, money_market: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Stores the maximum amount of underlying that can be borrowed from a money market, if any.
    #[storage_mapper("borrow_cap")]
    fn borrow_cap(&self, money_market: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Stores the maximum share of a borrow that can be repaid in a single liquidation.
    #[view(getCloseFactor)]
    #[storage_mapper("close_factor")]
    fn close_factor(&self) -> SingleValueMapper<BigUint>;

    /// Stores the liquidation incentive.
    #[view(getLiquidationIncentive)]
    #[storage_mapper("liquidation_incentive")]
    fn liquidation_incentive(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("mint_status")]
    fn mint_status(&self, money_market: &ManagedAddress) -> SingleValueMapper<Status>;

    #[storage_mapper("redeem_status")]
    fn redeem_status(&self, money_market: &ManagedAddress) -> SingleValueMapper<Status>;

    #[storage_mapper("borrow_status")]
    fn borrow_status(&self, money_market: &ManagedAddress) -> SingleValueMapper<Status>;

    #[storage_mapper("transfer_status")]
    fn transfer_status(&self) -> SingleValueMapper<Status>;

    #[storage_mapper("seize_status")]
    fn seize_status(&self) -> SingleValueMapper<Status>;
}
