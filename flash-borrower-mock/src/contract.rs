#![no_std]

multiversx_sc::imports!();

/// Flash Borrower Mock
///
/// A flash loan receiver used in tests. Each endpoint sends back a different amount to the calling money market.
///
#[multiversx_sc::contract]
pub trait FlashBorrowerMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    /// Funds the mock so that it can pay flash loan fees.
    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self) {}

    /// Pays back the loan plus the given fee. The mock must hold enough underlying to cover the fee.
    #[payable("*")]
    #[endpoint(flash)]
    fn flash(&self, fee: BigUint) {
        let mut payment = self.call_value().egld_or_single_esdt();
        let caller = self.blockchain().get_caller();

        payment.amount += fee;

        self.tx().to(&caller).payment(payment).transfer();
    }

    /// Pays back the loan minus the given shortfall.
    #[payable("*")]
    #[endpoint(flashRepaySome)]
    fn flash_repay_some(&self, shortfall: BigUint) {
        let mut payment = self.call_value().egld_or_single_esdt();
        let caller = self.blockchain().get_caller();

        payment.amount -= shortfall;

        self.tx().to(&caller).payment(payment).transfer();
    }

    // keeps everything
    #[payable("*")]
    #[endpoint(flashNoRepay)]
    fn flash_no_repay(&self) {}

    /// Records the lending market exchange rate and the equity of an account as seen while holding the loan, then pays
    /// back the loan plus the given fee.
    #[payable("*")]
    #[endpoint(flashObserve)]
    fn flash_observe(&self, fee: BigUint, controller: ManagedAddress, account: ManagedAddress) {
        let mut payment = self.call_value().egld_or_single_esdt();
        let caller = self.blockchain().get_caller();

        let exchange_rate: BigUint = self.money_market_proxy(caller.clone()).get_stored_exchange_rate().execute_on_dest_context();
        let (surplus, shortfall) = self.controller_proxy(controller).calc_account_equity(&account).execute_on_dest_context::<MultiValue2<BigUint, BigUint>>().into_tuple();

        self.observed_exchange_rate().set(&exchange_rate);
        self.observed_surplus().set(&surplus);
        self.observed_shortfall().set(&shortfall);

        payment.amount += fee;

        self.tx().to(&caller).payment(payment).transfer();
    }

    #[view(getObservedExchangeRate)]
    #[storage_mapper("observed_exchange_rate")]
    fn observed_exchange_rate(&self) -> SingleValueMapper<BigUint>;

    #[view(getObservedSurplus)]
    #[storage_mapper("observed_surplus")]
    fn observed_surplus(&self) -> SingleValueMapper<BigUint>;

    #[view(getObservedShortfall)]
    #[storage_mapper("observed_shortfall")]
    fn observed_shortfall(&self) -> SingleValueMapper<BigUint>;

    #[proxy]
    fn money_market_proxy(&self, sc_address: ManagedAddress) -> money_market_mod::ProxyTo<Self::Api>;

    #[proxy]
    fn controller_proxy(&self, sc_address: ManagedAddress) -> controller_mod::ProxyTo<Self::Api>;
}

mod money_market_mod {
    multiversx_sc::imports!();

    #[multiversx_sc::proxy]
    pub trait MoneyMarket {
        #[view(getStoredExchangeRate)]
        fn get_stored_exchange_rate(&self) -> BigUint;
    }
}

mod controller_mod {
    multiversx_sc::imports!();

    #[multiversx_sc::proxy]
    pub trait Controller {
        #[endpoint(calcAccountEquity)]
        fn calc_account_equity(&self, account: &ManagedAddress) -> MultiValue2<BigUint, BigUint>;
    }
}
