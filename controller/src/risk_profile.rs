multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use super::{constants::*, events, proxies, shared, storage};

#[type_abi]
#[derive(TopEncode, TopDecode, PartialEq, Clone, Debug)]
pub enum RiskProfile<M: ManagedTypeApi> {
    Solvent(BigUint<M>),
    Shortfall(BigUint<M>),
}

#[type_abi]
#[derive(TopEncode, TopDecode, PartialEq, Clone, Copy, Debug)]
pub enum Liquidation {
    Allowed,
    NotAllowed,
    AllowedButTooMuch,
}

impl<M: ManagedTypeApi> RiskProfile<M> {
    pub fn has_shortfall(&self) -> bool {
        matches!(*self, RiskProfile::Shortfall(_))
    }

    pub fn surplus(&self) -> BigUint<M> {
        match self {
            RiskProfile::Solvent(surplus) => surplus.clone(),
            RiskProfile::Shortfall(_) => BigUint::zero(),
        }
    }

    pub fn shortfall(&self) -> BigUint<M> {
        match self {
            RiskProfile::Solvent(_) => BigUint::zero(),
            RiskProfile::Shortfall(shortfall) => shortfall.clone(),
        }
    }

    /// Given an account with an outstanding borrow, checks if it is possible to liquidate its position by a repayment
    /// amount, considering the allowed close factor
    pub fn can_be_liquidated(&self, repay_amount: &BigUint<M>, borrow_amount: &BigUint<M>, close_factor: &BigUint<M>) -> Liquidation {
        match *self {
            RiskProfile::Solvent(_) => Liquidation::NotAllowed,
            RiskProfile::Shortfall(_) => {
                let wad = BigUint::from(WAD);
                let max_close_amount = close_factor * borrow_amount / wad;
                if repay_amount > &max_close_amount {
                    return Liquidation::AllowedButTooMuch;
                }
                Liquidation::Allowed
            },
        }
    }
}

#[multiversx_sc::module]
pub trait RiskProfileModule: admin::AdminModule + events::EventModule + proxies::ProxyModule + shared::SharedModule + storage::StorageModule {
    /// Computes the current equity of an account, as a `(surplus, shortfall)` pair where at most one side is non-zero.
    /// Both values are expressed in the oracle numeraire in wad.
    ///
    /// # Arguments:
    ///
    /// - `account` - The account we wish to analyze.
    ///
    #[endpoint(calcAccountEquity)]
    fn calc_account_equity(&self, account: &ManagedAddress) -> MultiValue2<BigUint, BigUint> {
        let risk_profile = self.simulate_risk_profile(account, &ManagedAddress::zero(), &BigUint::zero(), &BigUint::zero());
        (risk_profile.surplus(), risk_profile.shortfall()).into()
    }

    /// Checks whether an account has a shortfall, i.e. whether it can be liquidated.
    ///
    /// # Arguments:
    ///
    /// - `account` - The account we wish to analyze.
    ///
    #[endpoint(hasShortfall)]
    fn has_shortfall(&self, account: &ManagedAddress) -> bool {
        self.simulate_risk_profile(account, &ManagedAddress::zero(), &BigUint::zero(), &BigUint::zero()).has_shortfall()
    }

    /// Performs a risk profile simulation for a given account, considering its current positions and simulating either
    /// redeeming or borrowing (or both) at a given money market.
    ///
    /// Collateral only counts for entered markets, weighted by their collateral factor. Debt counts for every market
    /// in which the account has borrowed, inflated by the inverse of the borrow factor. Every market involved is accrued
    /// first, so that balances are current.
    ///
    /// # Arguments:
    ///
    /// - `account` - The account we wish to analyze.
    /// - `this_money_market` - The money market address used for the borrow or redeem simulation (or both).
    /// - `redeem_tokens` - The amount of tokens to be redeemed for underlying at `this_money_market`.
    /// - `borrow_amount` - The amount of underlying to be borrowed at `this_money_market`.
    ///
    fn simulate_risk_profile(&self, account: &ManagedAddress, this_money_market: &ManagedAddress, redeem_tokens: &BigUint, borrow_amount: &BigUint) -> RiskProfile<Self::Api> {
        let collaterals_mapper = self.account_collaterals(account);
        let borrows_mapper = self.account_borrows(account);

        // union of entered and borrowed markets, each market once
        let mut markets: ManagedVec<ManagedAddress> = collaterals_mapper.iter().collect();
        for money_market in borrows_mapper.iter() {
            if !collaterals_mapper.contains(&money_market) {
                markets.push(money_market);
            }
        }

        // for exponential math
        let wad = BigUint::from(WAD);

        // represent the total debt and collateral expressed in the oracle numeraire in wad
        let mut total_debt = BigUint::zero();
        let mut total_collateral = BigUint::zero();

        for money_market in markets.iter() {
            let (tokens, borrowed, fx) = self.get_current_account_snapshot(&money_market, account);
            let underlying_price = self.get_underlying_price(&money_market);
            let is_this_market = *money_market == *this_money_market;

            if collaterals_mapper.contains(&money_market) {
                let collateral_factor = self.collateral_factor(&money_market).get();
                let token_price = &fx * &underlying_price / &wad;
                let token_price_eff = &collateral_factor * &token_price / &wad;

                total_collateral += &token_price_eff * &tokens / &wad;

                // redeem effect: adding to the debt is equivalent to removing collateral
                if is_this_market {
                    total_debt += &token_price_eff * redeem_tokens / &wad;
                }
            }

            if borrows_mapper.contains(&money_market) {
                let borrow_factor = self.borrow_factor(&money_market).get();

                let borrow_value = &underlying_price * &borrowed / &wad;
                total_debt += borrow_value * &wad / &borrow_factor;

                // borrow effect
                if is_this_market {
                    let borrow_effect = &underlying_price * borrow_amount / &wad;
                    total_debt += borrow_effect * &wad / &borrow_factor;
                }
            }
        }

        if total_collateral >= total_debt {
            let surplus = total_collateral - total_debt;
            RiskProfile::Solvent(surplus)
        } else {
            let shortfall = total_debt - total_collateral;
            RiskProfile::Shortfall(shortfall)
        }
    }
}
