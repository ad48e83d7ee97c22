pub const ERROR_ONLY_ADMIN: &str = "only admin can perform this action";
pub const ERROR_ONLY_ADMIN_OR_GUARDIAN: &str = "only admin or pause guardian can perform this action";
pub const ERROR_ONLY_MONEY_MARKET_CALLER: &str = "only the money market itself can perform this action";
pub const ERROR_INVALID_MONEY_MARKET_SC: &str = "invalid money market smart contract";
pub const ERROR_INVALID_PRICE_ORACLE_SC: &str = "invalid price oracle smart contract";
pub const ERROR_INVALID_REWARD_DISTRIBUTOR_SC: &str = "invalid reward distributor smart contract";
pub const ERROR_MARKET_ALREADY_LISTED: &str = "money market already listed";
pub const ERROR_MARKET_NOT_LISTED: &str = "money market not listed";
pub const ERROR_INVALID_COLLATERAL_FACTOR: &str = "invalid collateral factor";
pub const ERROR_INVALID_BORROW_FACTOR: &str = "invalid borrow factor";
pub const ERROR_INVALID_CLOSE_FACTOR: &str = "invalid close factor";
pub const ERROR_INVALID_LIQUIDATION_INCENTIVE: &str = "invalid liquidation incentive";
pub const ERROR_INVALID_ADDRESS: &str = "invalid address";
pub const ERROR_SAME_ADDRESS: &str = "address already set";
pub const ERROR_PAUSE_GUARDIAN_NOT_SET: &str = "pause guardian has not been set";
pub const ERROR_ORACLE_NOT_SET: &str = "price oracle has not been set";
pub const ERROR_INVALID_PRICE: &str = "price is unavailable or invalid";
pub const ERROR_INVALID_EXCHANGE_RATE: &str = "invalid exchange rate";
pub const ERROR_MINT_PAUSED: &str = "mint is paused";
pub const ERROR_REDEEM_PAUSED: &str = "redeem is paused";
pub const ERROR_BORROW_PAUSED: &str = "borrow is paused";
pub const ERROR_TRANSFER_PAUSED: &str = "transfer is paused";
pub const ERROR_SEIZE_PAUSED: &str = "seize is paused";
pub const ERROR_SUPPLY_CAP_REACHED: &str = "supply capacity reached";
pub const ERROR_BORROW_CAP_REACHED: &str = "borrow capacity reached";
pub const ERROR_ACCOUNT_HAS_SHORTFALL: &str = "account has shortfall";
pub const ERROR_HAS_SHORTFALL: &str = "exiting the market would leave the account with shortfall";
pub const ERROR_ACCOUNT_HAS_NO_SHORTFALL: &str = "account has no shortfall";
pub const ERROR_REPAY_EXCEEDS_MAX_REPAY_ALLOWED: &str = "repay amount exceeds max repay allowed";
pub const ERROR_CONTROLLER_MISMATCH: &str = "money markets do not share the same controller";
