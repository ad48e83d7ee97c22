pub const ERROR_INVALID_OPTIMAL_UTILIZATION: &str = "optimal utilization should be greater than zero and less than one";
pub const ERROR_INVALID_LAST_SLOPE: &str = "last slope must be greater than zero";
pub const ERROR_LAST_SLOPE_LOWER_THAN_FIRST: &str = "last slope must be greater or equal than first slope";
pub const ERROR_MAX_BORROW_RATE_TOO_LOW: &str = "max borrow rate too low";
pub const ERROR_INVALID_RESERVE_RATIO: &str = "reserve ratio cannot exceed one";
