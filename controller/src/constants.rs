/// The WAD unit
pub const WAD: u64 = 1_000_000_000_000_000_000;

/// The maximum collateral factor allowed (100%)
pub const MAX_COLLATERAL_FACTOR: u64 = WAD;

/// The maximum borrow factor allowed (100%)
pub const MAX_BORROW_FACTOR: u64 = WAD;

/// The minimum close factor allowed (5%)
pub const MIN_CLOSE_FACTOR: u64 = 50_000_000_000_000_000;

/// The maximum close factor allowed (90%)
pub const MAX_CLOSE_FACTOR: u64 = 900_000_000_000_000_000;

/// The default close factor (50%)
pub const DEFAULT_CLOSE_FACTOR: u64 = 500_000_000_000_000_000;

/// The minimum liquidation incentive allowed (100%)
pub const MIN_LIQUIDATION_INCENTIVE: u64 = WAD;

/// The maximum liquidation incentive allowed (150%)
pub const MAX_LIQUIDATION_INCENTIVE: u64 = 1_500_000_000_000_000_000;

/// The default liquidation incentive (110%)
pub const DEFAULT_LIQUIDATION_INCENTIVE: u64 = 1_100_000_000_000_000_000;

/// The legacy distribution factor assigned to every market
pub const DISTRIBUTION_FACTOR: u64 = WAD;
