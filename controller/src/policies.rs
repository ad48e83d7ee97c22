multiversx_sc::imports!();

use super::{constants::*, errors::*, events, proxies, risk_profile, shared, storage};

use crate::{risk_profile::Liquidation, storage::Status};

#[multiversx_sc::module]
pub trait PolicyModule: admin::AdminModule + events::EventModule + proxies::ProxyModule + risk_profile::RiskProfileModule + shared::SharedModule + storage::StorageModule {
    /// Checks whether minting is allowed at a specified money market and distributes supply rewards to the minter.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The address of the money market smart contract.
    /// - `minter` - The account that intends to mint.
    /// - `amount` - The amount of underlying being supplied.
    ///
    /// # Notes:
    ///
    /// - Fails with panic and a clear error message.
    /// - The supply cap is inclusive.
    ///
    #[endpoint(beforeMint)]
    fn before_mint(&self, money_market: &ManagedAddress, minter: &ManagedAddress, amount: &BigUint) {
        self.require_whitelisted_money_market(money_market);
        require!(self.mint_status(money_market).get() == Status::Active, ERROR_MINT_PAUSED);

        // check if the supply cap (if any) has been reached
        if let Some(cap) = self.get_supply_cap(money_market) {
            let wad = BigUint::from(WAD);
            let total_supply = self.get_total_supply(money_market);
            let fx = self.get_stored_exchange_rate(money_market);
            let total_underlying = total_supply * fx / wad;
            require!(total_underlying + amount <= cap, ERROR_SUPPLY_CAP_REACHED);
        }

        self.update_rewards(money_market, &[minter], false);
    }

    /// Checks whether an account (redeemer) should be allowed to redeem a given amount of tokens from a given market
    /// and distributes supply rewards to the redeemer.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The address of the money market smart contract.
    /// - `redeemer` - The account that intends to redeem the tokens.
    /// - `tokens` - The amount of tokens to redeem.
    ///
    /// # Notes:
    ///
    /// - Tokens in a market that has not been entered never back any borrow, so they can always be redeemed.
    ///
    #[endpoint(beforeRedeem)]
    fn before_redeem(&self, money_market: &ManagedAddress, redeemer: &ManagedAddress, tokens: &BigUint) {
        self.require_whitelisted_money_market(money_market);
        require!(self.redeem_status(money_market).get() == Status::Active, ERROR_REDEEM_PAUSED);

        self.require_no_shortfall_after_redeem(money_market, redeemer, tokens);

        self.update_rewards(money_market, &[redeemer], false);
    }

    /// Checks whether an account (borrower) should be allowed to take a borrow of a given amount on a given money market
    /// and distributes borrow rewards to the borrower.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The address of the money market smart contract.
    /// - `borrower` - The account that intends to take a borrow.
    /// - `amount` - The amount of underlying to borrow.
    ///
    /// # Notes:
    ///
    /// - Can only be called by the money market itself, since the borrower joins the market borrowers set.
    /// - A simulation of the resulting risk profile is performed.
    ///
    #[endpoint(beforeBorrow)]
    fn before_borrow(&self, money_market: &ManagedAddress, borrower: &ManagedAddress, amount: &BigUint) {
        self.require_money_market_caller(money_market);
        self.require_whitelisted_money_market(money_market);
        require!(self.borrow_status(money_market).get() == Status::Active, ERROR_BORROW_PAUSED);

        self.add_borrowed_market(money_market, borrower);

        // fails on an invalid price
        self.get_underlying_price(money_market);

        // check if the borrow cap (if any) has been reached
        if let Some(cap) = self.get_borrow_cap(money_market) {
            let total_borrows = self.get_total_borrows(money_market);
            require!(total_borrows + amount <= cap, ERROR_BORROW_CAP_REACHED);
        }

        let risk_profile = self.simulate_risk_profile(borrower, money_market, &BigUint::zero(), amount);
        require!(!risk_profile.has_shortfall(), ERROR_ACCOUNT_HAS_SHORTFALL);

        self.update_rewards(money_market, &[borrower], true);
    }

    /// Checks whether a repayment is allowed and distributes borrow rewards to the borrower.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The address of the money market smart contract.
    /// - `payer` - The account that pays the borrow.
    /// - `borrower` - The account whose borrow is being repaid.
    /// - `amount` - The amount of underlying being repaid.
    ///
    #[endpoint(beforeRepayBorrow)]
    fn before_repay_borrow(&self, money_market: &ManagedAddress, _payer: &ManagedAddress, borrower: &ManagedAddress, _amount: &BigUint) {
        self.require_whitelisted_money_market(money_market);
        self.update_rewards(money_market, &[borrower], true);
    }

    /// Checks whether a liquidation should be allowed.
    ///
    /// # Arguments:
    ///
    /// - `borrow_market` - The money market where the borrower has borrowed.
    /// - `collateral_market` - The money market where the borrower has collateral to be seized.
    /// - `liquidator` - The account repaying the borrow.
    /// - `borrower` - The account in shortfall.
    /// - `repay_amount` - The amount of underlying being repaid.
    ///
    /// # Notes:
    ///
    /// - The borrower must be in shortfall and the repayment cannot exceed the close factor share of the borrow.
    ///
    #[endpoint(beforeLiquidateBorrow)]
    fn before_liquidate_borrow(&self, borrow_market: &ManagedAddress, collateral_market: &ManagedAddress, _liquidator: &ManagedAddress, borrower: &ManagedAddress, repay_amount: &BigUint) {
        self.require_whitelisted_money_market(borrow_market);
        self.require_whitelisted_money_market(collateral_market);

        let risk_profile = self.simulate_risk_profile(borrower, &ManagedAddress::zero(), &BigUint::zero(), &BigUint::zero());
        let borrow_amount = self.get_stored_account_borrow_amount(borrow_market, borrower);
        let close_factor = self.close_factor().get();

        match risk_profile.can_be_liquidated(repay_amount, &borrow_amount, &close_factor) {
            Liquidation::NotAllowed => sc_panic!(ERROR_ACCOUNT_HAS_NO_SHORTFALL),
            Liquidation::AllowedButTooMuch => sc_panic!(ERROR_REPAY_EXCEEDS_MAX_REPAY_ALLOWED),
            Liquidation::Allowed => {},
        }
    }

    /// Checks whether seizing tokens should be allowed and distributes supply rewards to both the borrower and the
    /// liquidator at the collateral market.
    ///
    /// # Arguments:
    ///
    /// - `collateral_market` - The money market whose tokens are seized.
    /// - `borrow_market` - The money market where the borrow is being repaid.
    /// - `liquidator` - The account receiving the seized tokens.
    /// - `borrower` - The account whose tokens are seized.
    /// - `tokens` - The amount of tokens to seize.
    ///
    #[endpoint(beforeSeize)]
    fn before_seize(&self, collateral_market: &ManagedAddress, borrow_market: &ManagedAddress, liquidator: &ManagedAddress, borrower: &ManagedAddress, _tokens: &BigUint) {
        require!(self.seize_status().get() == Status::Active, ERROR_SEIZE_PAUSED);
        self.require_whitelisted_money_market(collateral_market);
        self.require_whitelisted_money_market(borrow_market);

        let sc_address = self.blockchain().get_sc_address();
        require!(self.get_money_market_controller(collateral_market) == sc_address, ERROR_CONTROLLER_MISMATCH);
        require!(self.get_money_market_controller(borrow_market) == sc_address, ERROR_CONTROLLER_MISMATCH);

        self.update_rewards(collateral_market, &[borrower, liquidator], false);
    }

    /// Checks whether a token transfer should be allowed and distributes supply rewards to both parties.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The address of the money market smart contract.
    /// - `from` - The sender.
    /// - `to` - The receiver.
    /// - `tokens` - The amount of tokens being transferred.
    ///
    #[endpoint(beforeTransfer)]
    fn before_transfer(&self, money_market: &ManagedAddress, from: &ManagedAddress, to: &ManagedAddress, tokens: &BigUint) {
        require!(self.transfer_status().get() == Status::Active, ERROR_TRANSFER_PAUSED);
        self.require_whitelisted_money_market(money_market);

        // transferring out is redeeming from the sender perspective
        self.require_no_shortfall_after_redeem(money_market, from, tokens);

        self.update_rewards(money_market, &[from, to], false);
    }

    /// Checks whether a flash loan should be allowed.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The address of the money market smart contract.
    /// - `receiver` - The flash loan receiver.
    /// - `amount` - The amount of underlying being lent.
    ///
    #[endpoint(beforeFlashloan)]
    fn before_flashloan(&self, money_market: &ManagedAddress, _receiver: &ManagedAddress, _amount: &BigUint) {
        self.require_whitelisted_money_market(money_market);
        require!(self.borrow_status(money_market).get() == Status::Active, ERROR_BORROW_PAUSED);
    }

    #[endpoint(afterMint)]
    fn after_mint(&self, money_market: &ManagedAddress, _minter: &ManagedAddress, _amount: &BigUint, _tokens: &BigUint) {
        self.require_whitelisted_money_market(money_market);
    }

    #[endpoint(afterRedeem)]
    fn after_redeem(&self, money_market: &ManagedAddress, _redeemer: &ManagedAddress, _amount: &BigUint, _tokens: &BigUint) {
        self.require_whitelisted_money_market(money_market);
    }

    #[endpoint(afterBorrow)]
    fn after_borrow(&self, money_market: &ManagedAddress, _borrower: &ManagedAddress, _amount: &BigUint) {
        self.require_whitelisted_money_market(money_market);
    }

    /// Removes the money market from the borrower's borrowed markets once the borrow has been fully repaid.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The address of the money market smart contract.
    /// - `payer` - The account that paid the borrow.
    /// - `borrower` - The account whose borrow has been repaid.
    /// - `amount` - The amount of underlying repaid.
    ///
    #[endpoint(afterRepayBorrow)]
    fn after_repay_borrow(&self, money_market: &ManagedAddress, _payer: &ManagedAddress, borrower: &ManagedAddress, _amount: &BigUint) {
        self.require_money_market_caller(money_market);
        self.require_whitelisted_money_market(money_market);

        let borrow_amount = self.get_stored_account_borrow_amount(money_market, borrower);
        if borrow_amount == BigUint::zero() {
            self.remove_borrowed_market(money_market, borrower);
        }
    }

    #[endpoint(afterLiquidateBorrow)]
    fn after_liquidate_borrow(&self, borrow_market: &ManagedAddress, _collateral_market: &ManagedAddress, _liquidator: &ManagedAddress, _borrower: &ManagedAddress, _repay_amount: &BigUint, _seize_tokens: &BigUint) {
        self.require_whitelisted_money_market(borrow_market);
    }

    #[endpoint(afterSeize)]
    fn after_seize(&self, collateral_market: &ManagedAddress, _borrow_market: &ManagedAddress, _liquidator: &ManagedAddress, _borrower: &ManagedAddress, _tokens: &BigUint) {
        self.require_whitelisted_money_market(collateral_market);
    }

    #[endpoint(afterTransfer)]
    fn after_transfer(&self, money_market: &ManagedAddress, _from: &ManagedAddress, _to: &ManagedAddress, _tokens: &BigUint) {
        self.require_whitelisted_money_market(money_market);
    }

    #[endpoint(afterFlashloan)]
    fn after_flashloan(&self, money_market: &ManagedAddress, _receiver: &ManagedAddress, _amount: &BigUint, _fee: &BigUint) {
        self.require_whitelisted_money_market(money_market);
    }

    /// Calculates the amount of collateral tokens to be seized for a given repayment, including the liquidation incentive.
    ///
    /// # Arguments:
    ///
    /// - `borrow_market` - The money market where the borrow is being repaid.
    /// - `collateral_market` - The money market whose tokens are seized.
    /// - `repay_amount` - The amount of underlying being repaid.
    ///
    /// # Notes:
    ///
    /// - Fails if any of both prices is unavailable or invalid.
    ///
    #[view(liquidateCalculateSeizeTokens)]
    fn liquidate_calculate_seize_tokens(&self, borrow_market: &ManagedAddress, collateral_market: &ManagedAddress, repay_amount: &BigUint) -> BigUint {
        let price_borrowed = self.get_underlying_price(borrow_market);
        let price_collateral = self.get_underlying_price(collateral_market);
        let fx = self.get_stored_exchange_rate(collateral_market);
        let liquidation_incentive = self.liquidation_incentive().get();

        // repay * price_borrowed * incentive / (fx * price_collateral), where incentive and fx are in wad
        let numerator = price_borrowed * &liquidation_incentive;
        let denominator = price_collateral * &fx;
        require!(denominator > BigUint::zero(), ERROR_INVALID_EXCHANGE_RATE);

        repay_amount * &numerator / &denominator
    }

    fn require_no_shortfall_after_redeem(&self, money_market: &ManagedAddress, account: &ManagedAddress, tokens: &BigUint) {
        if !self.has_entered_market(account, money_market) {
            return;
        }

        let risk_profile = self.simulate_risk_profile(account, money_market, tokens, &BigUint::zero());
        require!(!risk_profile.has_shortfall(), ERROR_ACCOUNT_HAS_SHORTFALL);
    }
}
