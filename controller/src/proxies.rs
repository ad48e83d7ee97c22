multiversx_sc::imports!();

use super::{constants::*, errors::*, storage};

use price_oracle::{common::ProxyTrait as _, prices::ProxyTrait as _};
use reward_distributor::{distribution::ProxyTrait as _, governance::ProxyTrait as _};

#[multiversx_sc::module]
pub trait ProxyModule: storage::StorageModule {
    // Money Market calls

    fn is_money_market(&self, sc_address: &ManagedAddress) -> bool {
        self.get_money_market_proxy(sc_address).is_money_market().execute_on_dest_context()
    }

    fn get_money_market_underlying_id(&self, sc_address: &ManagedAddress) -> EgldOrEsdtTokenIdentifier {
        self.get_money_market_proxy(sc_address).get_underlying_id().execute_on_dest_context()
    }

    fn get_money_market_controller(&self, sc_address: &ManagedAddress) -> ManagedAddress {
        self.get_money_market_proxy(sc_address).get_controller().execute_on_dest_context()
    }

    fn get_total_supply(&self, sc_address: &ManagedAddress) -> BigUint {
        self.get_money_market_proxy(sc_address).get_total_supply().execute_on_dest_context()
    }

    fn get_total_borrows(&self, sc_address: &ManagedAddress) -> BigUint {
        self.get_money_market_proxy(sc_address).get_total_borrows().execute_on_dest_context()
    }

    fn get_stored_exchange_rate(&self, sc_address: &ManagedAddress) -> BigUint {
        self.get_money_market_proxy(sc_address).get_stored_exchange_rate().execute_on_dest_context()
    }

    fn get_account_tokens(&self, sc_address: &ManagedAddress, account: &ManagedAddress) -> BigUint {
        self.get_money_market_proxy(sc_address).get_account_tokens(account).execute_on_dest_context()
    }

    fn get_stored_account_borrow_amount(&self, sc_address: &ManagedAddress, account: &ManagedAddress) -> BigUint {
        self.get_money_market_proxy(sc_address).get_account_borrow_amount(account).execute_on_dest_context()
    }

    /// Accrues interest at the money market and returns the account tokens, borrow amount and exchange rate.
    fn get_current_account_snapshot(&self, sc_address: &ManagedAddress, account: &ManagedAddress) -> (BigUint, BigUint, BigUint) {
        self.get_money_market_proxy(sc_address).get_current_account_snapshot(account).execute_on_dest_context::<MultiValue3<BigUint, BigUint, BigUint>>().into_tuple()
    }

    // Oracle calls

    fn is_price_oracle(&self, sc_address: &ManagedAddress) -> bool {
        self.price_oracle_proxy(sc_address.clone()).is_price_oracle().execute_on_dest_context()
    }

    fn get_price_oracle(&self) -> Option<ManagedAddress> {
        if self.price_oracle().is_empty() {
            None
        } else {
            let address = self.price_oracle().get();
            Some(address)
        }
    }

    /// Returns the underlying price of a money market in wad. Fails if the price is unavailable or invalid.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The money market address.
    ///
    fn get_underlying_price(&self, money_market: &ManagedAddress) -> BigUint {
        let underlying_id = self.underlying_id(money_market).get();
        let mut proxy = self.get_price_oracle_proxy();
        let (price, valid) = proxy.get_underlying_price_and_status(&underlying_id).execute_on_dest_context::<MultiValue2<BigUint, bool>>().into_tuple();
        require!(valid && price > BigUint::zero(), ERROR_INVALID_PRICE);
        price
    }

    // Reward Distributor calls

    fn is_reward_distributor(&self, sc_address: &ManagedAddress) -> bool {
        self.reward_distributor_proxy(sc_address.clone()).is_reward_distributor().execute_on_dest_context()
    }

    fn get_reward_distributor(&self) -> Option<ManagedAddress> {
        if self.reward_distributor().is_empty() {
            None
        } else {
            let address = self.reward_distributor().get();
            Some(address)
        }
    }

    fn add_reward_recipient(&self, reward_distributor: &ManagedAddress, money_market: &ManagedAddress) {
        self.reward_distributor_proxy(reward_distributor.clone()).add_recipient(money_market.clone(), BigUint::from(DISTRIBUTION_FACTOR)).execute_on_dest_context::<()>()
    }

    /// Checkpoints the distribution state of a money market side and distributes the rewards of the given accounts,
    /// using their balances prior to the operation being authorized. Does nothing if there is no reward distributor.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The money market address.
    /// - `accounts` - The accounts whose rewards must be distributed.
    /// - `is_borrow` - Whether to update the borrow side or the supply side.
    ///
    fn update_rewards(&self, money_market: &ManagedAddress, accounts: &[&ManagedAddress], is_borrow: bool) {
        let reward_distributor = match self.get_reward_distributor() {
            None => return,
            Some(address) => address,
        };

        self.reward_distributor_proxy(reward_distributor.clone()).update_distribution_state(money_market.clone(), is_borrow).execute_on_dest_context::<()>();

        for account in accounts {
            let account = (*account).clone();
            self.reward_distributor_proxy(reward_distributor.clone()).update_reward(money_market.clone(), account, is_borrow).execute_on_dest_context::<()>();
        }
    }

    // Proxies

    #[proxy]
    fn money_market_proxy(&self, sc_address: ManagedAddress) -> money_market_mod::ProxyTo<Self::Api>;

    fn get_money_market_proxy(&self, sc_address: &ManagedAddress) -> money_market_mod::ProxyTo<Self::Api> {
        self.money_market_proxy(sc_address.clone())
    }

    #[proxy]
    fn price_oracle_proxy(&self, sc_address: ManagedAddress) -> price_oracle::ProxyTo<Self::Api>;

    fn get_price_oracle_proxy(&self) -> price_oracle::ProxyTo<Self::Api> {
        let oracle_address = self.get_price_oracle();
        match oracle_address {
            None => sc_panic!(ERROR_ORACLE_NOT_SET),
            Some(address) => self.price_oracle_proxy(address),
        }
    }

    #[proxy]
    fn reward_distributor_proxy(&self, sc_address: ManagedAddress) -> reward_distributor::ProxyTo<Self::Api>;
}

// Can't simply import, we would have a circular dependency.
mod money_market_mod {
    multiversx_sc::imports!();

    #[multiversx_sc::proxy]
    pub trait MoneyMarket {
        #[view(isMoneyMarket)]
        fn is_money_market(&self) -> bool;

        #[view(getUnderlyingId)]
        fn get_underlying_id(&self) -> EgldOrEsdtTokenIdentifier;

        #[view(getController)]
        fn get_controller(&self) -> ManagedAddress;

        #[view(getTotalSupply)]
        fn get_total_supply(&self) -> BigUint;

        #[view(getTotalBorrows)]
        fn get_total_borrows(&self) -> BigUint;

        #[view(getStoredExchangeRate)]
        fn get_stored_exchange_rate(&self) -> BigUint;

        #[view(getAccountTokens)]
        fn get_account_tokens(&self, account: &ManagedAddress) -> BigUint;

        #[view(getAccountBorrowAmount)]
        fn get_account_borrow_amount(&self, account: &ManagedAddress) -> BigUint;

        #[endpoint(getCurrentAccountSnapshot)]
        fn get_current_account_snapshot(&self, account: &ManagedAddress) -> MultiValue3<BigUint, BigUint, BigUint>;
    }
}
