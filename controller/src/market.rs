multiversx_sc::imports!();

use super::{errors::*, events, proxies, risk_profile, shared, storage};

#[multiversx_sc::module]
pub trait MarketModule: admin::AdminModule + events::EventModule + proxies::ProxyModule + risk_profile::RiskProfileModule + shared::SharedModule + storage::StorageModule {
    /// Enters one or many markets, i.e. the caller's tokens at those markets start backing its borrows.
    ///
    /// # Arguments:
    ///
    /// - `money_markets` - The addresses of the money markets to enter.
    ///
    /// # Notes:
    ///
    /// - Returns one boolean per market, false only for non listed markets.
    /// - Entering an already entered market is a no-op.
    ///
    #[endpoint(enterMarkets)]
    fn enter_markets(&self, money_markets: MultiValueEncoded<ManagedAddress>) -> MultiValueEncoded<bool> {
        let account = self.blockchain().get_caller();
        let mut results = MultiValueEncoded::new();
        for money_market in money_markets {
            results.push(self.enter_market_internal(&money_market, &account));
        }
        results
    }

    /// Exits one or many markets, i.e. the caller's tokens at those markets stop backing its borrows.
    ///
    /// # Arguments:
    ///
    /// - `money_markets` - The addresses of the money markets to exit.
    ///
    /// # Notes:
    ///
    /// - Returns one boolean per market, false only for non listed markets.
    /// - Exiting a market that has not been entered is a no-op.
    /// - Fails if exiting would leave the account with a shortfall.
    ///
    #[endpoint(exitMarkets)]
    fn exit_markets(&self, money_markets: MultiValueEncoded<ManagedAddress>) -> MultiValueEncoded<bool> {
        let account = self.blockchain().get_caller();
        let mut results = MultiValueEncoded::new();
        for money_market in money_markets {
            results.push(self.exit_market_internal(&money_market, &account));
        }
        results
    }

    fn enter_market_internal(&self, money_market: &ManagedAddress, account: &ManagedAddress) -> bool {
        if !self.is_whitelisted_money_market(money_market) {
            return false;
        }

        if self.account_collaterals(account).insert(money_market.clone()) {
            self.enter_market_event(money_market, account);
        }

        true
    }

    fn exit_market_internal(&self, money_market: &ManagedAddress, account: &ManagedAddress) -> bool {
        if !self.is_whitelisted_money_market(money_market) {
            return false;
        }

        if !self.has_entered_market(account, money_market) {
            return true;
        }

        // exiting is equivalent to redeeming the whole balance
        let tokens = self.get_account_tokens(money_market, account);
        let risk_profile = self.simulate_risk_profile(account, money_market, &tokens, &BigUint::zero());
        require!(!risk_profile.has_shortfall(), ERROR_HAS_SHORTFALL);

        self.account_collaterals(account).swap_remove(money_market);
        self.exit_market_event(money_market, account);

        true
    }
}
