multiversx_sc::imports!();

use super::{events, proxies, shared, storage};

use crate::storage::Status;

#[multiversx_sc::module]
pub trait GuardianModule: admin::AdminModule + events::EventModule + proxies::ProxyModule + shared::SharedModule + storage::StorageModule {
    /// Changes the minting status for a specific money market.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The address of the money market smart contract.
    /// - `pause` - A boolean that indicates whether minting must be or not paused.
    ///
    /// # Notes:
    ///
    /// - Can be paused by the admin or the pause guardian, but only unpaused by the admin.
    ///
    #[endpoint(pauseMint)]
    fn pause_mint(&self, money_market: &ManagedAddress, pause: bool) {
        self.require_pause_permission(pause);
        self.require_whitelisted_money_market(money_market);
        self.pause_mint_internal(money_market, pause);
    }

    /// Changes the redeeming status for a specific money market.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The address of the money market smart contract.
    /// - `pause` - A boolean that indicates whether redeeming must be or not paused.
    ///
    /// # Notes:
    ///
    /// - Can be paused by the admin or the pause guardian, but only unpaused by the admin.
    ///
    #[endpoint(pauseRedeem)]
    fn pause_redeem(&self, money_market: &ManagedAddress, pause: bool) {
        self.require_pause_permission(pause);
        self.require_whitelisted_money_market(money_market);
        self.pause_redeem_internal(money_market, pause);
    }

    /// Changes the borrowing status for a specific money market. Flash loans follow the borrowing status.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The address of the money market smart contract.
    /// - `pause` - A boolean that indicates whether borrowing must be or not paused.
    ///
    /// # Notes:
    ///
    /// - Can be paused by the admin or the pause guardian, but only unpaused by the admin.
    ///
    #[endpoint(pauseBorrow)]
    fn pause_borrow(&self, money_market: &ManagedAddress, pause: bool) {
        self.require_pause_permission(pause);
        self.require_whitelisted_money_market(money_market);
        self.pause_borrow_internal(money_market, pause);
    }

    /// Changes the minting, redeeming and borrowing status of a specific money market at once.
    ///
    /// # Arguments:
    ///
    /// - `money_market` - The address of the money market smart contract.
    /// - `pause` - A boolean that indicates whether the market must be or not paused.
    ///
    #[endpoint(pauseMarket)]
    fn pause_market(&self, money_market: &ManagedAddress, pause: bool) {
        self.require_pause_permission(pause);
        self.require_whitelisted_money_market(money_market);
        self.pause_market_internal(money_market, pause);
    }

    /// Changes the transfer status for all money markets.
    ///
    /// # Arguments:
    ///
    /// - `pause` - A boolean that indicates whether transfers must be or not paused.
    ///
    #[endpoint(pauseTransfer)]
    fn pause_transfer(&self, pause: bool) {
        self.require_pause_permission(pause);
        self.pause_transfer_internal(pause);
    }

    /// Changes the seizing status (required for liquidations) for all money markets.
    ///
    /// # Arguments:
    ///
    /// - `pause` - A boolean that indicates whether seizing must be or not paused.
    ///
    #[endpoint(pauseSeize)]
    fn pause_seize(&self, pause: bool) {
        self.require_pause_permission(pause);
        self.pause_seize_internal(pause);
    }

    /// Changes the status of every listed money market, transfers and seizing at once.
    ///
    /// # Arguments:
    ///
    /// - `pause` - A boolean that indicates whether the protocol must be or not paused.
    ///
    #[endpoint(pauseProtocol)]
    fn pause_protocol(&self, pause: bool) {
        self.require_pause_permission(pause);

        for money_market in self.whitelisted_markets().iter() {
            self.pause_market_internal(&money_market, pause);
        }

        self.pause_transfer_internal(pause);
        self.pause_seize_internal(pause);
    }

    fn pause_market_internal(&self, money_market: &ManagedAddress, pause: bool) {
        self.pause_mint_internal(money_market, pause);
        self.pause_redeem_internal(money_market, pause);
        self.pause_borrow_internal(money_market, pause);
    }

    fn pause_mint_internal(&self, money_market: &ManagedAddress, pause: bool) {
        self.mint_status(money_market).set(to_status(pause));
        self.mint_paused_event(money_market, pause);
    }

    fn pause_redeem_internal(&self, money_market: &ManagedAddress, pause: bool) {
        self.redeem_status(money_market).set(to_status(pause));
        self.redeem_paused_event(money_market, pause);
    }

    fn pause_borrow_internal(&self, money_market: &ManagedAddress, pause: bool) {
        self.borrow_status(money_market).set(to_status(pause));
        self.borrow_paused_event(money_market, pause);
    }

    fn pause_transfer_internal(&self, pause: bool) {
        self.transfer_status().set(to_status(pause));
        self.transfer_paused_event(pause);
    }

    fn pause_seize_internal(&self, pause: bool) {
        self.seize_status().set(to_status(pause));
        self.seize_paused_event(pause);
    }
}

fn to_status(pause: bool) -> Status {
    if pause {
        Status::Paused
    } else {
        Status::Active
    }
}
