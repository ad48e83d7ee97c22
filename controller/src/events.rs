multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventModule {
    /// Event emitted when a money market is supported.
    #[event("support_money_market_event")]
    fn support_money_market_event(&self, #[indexed] money_market: &ManagedAddress, #[indexed] underlying_id: &EgldOrEsdtTokenIdentifier);

    /// Event emitted when an account enters a money market.
    #[event("enter_market_event")]
    fn enter_market_event(&self, #[indexed] money_market: &ManagedAddress, #[indexed] account: &ManagedAddress);

    /// Event emitted when an account exits a money market.
    #[event("exit_market_event")]
    fn exit_market_event(&self, #[indexed] money_market: &ManagedAddress, #[indexed] account: &ManagedAddress);

    /// Event emitted when an account takes its first borrow at a money market.
    #[event("borrowed_market_added_event")]
    fn borrowed_market_added_event(&self, #[indexed] money_market: &ManagedAddress, #[indexed] account: &ManagedAddress);

    /// Event emitted when an account fully repays its borrow at a money market.
    #[event("borrowed_market_removed_event")]
    fn borrowed_market_removed_event(&self, #[indexed] money_market: &ManagedAddress, #[indexed] account: &ManagedAddress);

    /// Event emitted when the collateral factor of a money market is modified.
    #[event("new_collateral_factor_event")]
    fn new_collateral_factor_event(&self, #[indexed] money_market: &ManagedAddress, #[indexed] old: &BigUint, #[indexed] new: &BigUint);

    /// Event emitted when the borrow factor of a money market is modified.
    #[event("new_borrow_factor_event")]
    fn new_borrow_factor_event(&self, #[indexed] money_market: &ManagedAddress, #[indexed] old: &BigUint, #[indexed] new: &BigUint);

    /// Event emitted when the supply cap of a money market is modified.
    #[event("new_supply_cap_event")]
    fn new_supply_cap_event(&self, #[indexed] money_market: &ManagedAddress, #[indexed] old: &Option<BigUint>, #[indexed] new: &Option<BigUint>);

    /// Event emitted when the borrow cap of a money market is modified.
    #[event("new_borrow_cap_event")]
    fn new_borrow_cap_event(&self, #[indexed] money_market: &ManagedAddress, #[indexed] old: &Option<BigUint>, #[indexed] new: &Option<BigUint>);

    /// Event emitted when the close factor is modified.
    #[event("new_close_factor_event")]
    fn new_close_factor_event(&self, #[indexed] old: &BigUint, #[indexed] new: &BigUint);

    /// Event emitted when the liquidation incentive is modified.
    #[event("new_liquidation_incentive_event")]
    fn new_liquidation_incentive_event(&self, #[indexed] old: &BigUint, #[indexed] new: &BigUint);

    /// Event emitted when the price oracle is modified.
    #[event("new_price_oracle_event")]
    fn new_price_oracle_event(&self, #[indexed] old: &Option<ManagedAddress>, #[indexed] new: &ManagedAddress);

    /// Event emitted when the reward distributor is modified.
    #[event("new_reward_distributor_event")]
    fn new_reward_distributor_event(&self, #[indexed] old: &Option<ManagedAddress>, #[indexed] new: &ManagedAddress);

    /// Event emitted when the pause guardian is modified.
    #[event("new_pause_guardian_event")]
    fn new_pause_guardian_event(&self, #[indexed] old: &Option<ManagedAddress>, #[indexed] new: &Option<ManagedAddress>);

    /// Event emitted when the minting status of a money market is modified.
    #[event("mint_paused_event")]
    fn mint_paused_event(&self, #[indexed] money_market: &ManagedAddress, #[indexed] paused: bool);

    /// Event emitted when the redeeming status of a money market is modified.
    #[event("redeem_paused_event")]
    fn redeem_paused_event(&self, #[indexed] money_market: &ManagedAddress, #[indexed] paused: bool);

    /// Event emitted when the borrowing status of a money market is modified.
    #[event("borrow_paused_event")]
    fn borrow_paused_event(&self, #[indexed] money_market: &ManagedAddress, #[indexed] paused: bool);

    /// Event emitted when the transfer status is modified.
    #[event("transfer_paused_event")]
    fn transfer_paused_event(&self, #[indexed] paused: bool);

    /// Event emitted when the seizing status is modified.
    #[event("seize_paused_event")]
    fn seize_paused_event(&self, #[indexed] paused: bool);
}
