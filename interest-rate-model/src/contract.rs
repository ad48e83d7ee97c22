#![no_std]

multiversx_sc::imports!();

pub mod errors;

use errors::*;

pub const WAD: u64 = 1_000_000_000_000_000_000;

/// Six seconds per block
pub const BLOCKS_PER_YEAR: u64 = 5_256_000;

// Jump Rate Model
//
// borrow_rate(u) ^
//                │
//          r_max +──────────────────────────+ . . . . . . . . .
//                │                         .
//                │                        .
//   m1 + m2 + r0 +──────────────────────+
//                │                     .│
//                │                   .  │
//                │                 .    │
//        m1 + r0 +───────────────+      │
//                │            .  │      │
//                │         .     │      │
//             r0 _.              │      │
//                │               │      │
//               0└───────────────+──────+─────────────────────>
//                0               uo     1                      u
//
// where u = borrows / (cash + borrows - reserves)
//

#[multiversx_sc::contract]
pub trait InterestRateModel {
    /// Initializes the Interest Rate Model smart contract with the given parameters.
    ///
    /// The parameters describe the piecewise linear function that determines the borrow rate. Rates are provided in a
    /// yearly basis and are translated to a per block basis using `WAD` and `BLOCKS_PER_YEAR`.
    ///
    /// # Arguments:
    ///
    /// - `base_rate_y` - The base borrow rate per year.
    /// - `first_slope_y` - The borrow rate increase per year between zero and optimal utilization.
    /// - `last_slope_y` - The borrow rate increase per year between optimal and full utilization.
    /// - `optimal_utilization` - The optimal utilization, in wad.
    /// - `max_borrow_rate_y` - The maximum borrow rate per year.
    ///
    #[init]
    fn init(&self, base_rate_y: BigUint, first_slope_y: BigUint, last_slope_y: BigUint, optimal_utilization: BigUint, max_borrow_rate_y: BigUint) {
        let wad = BigUint::from(WAD);
        let bpy = BigUint::from(BLOCKS_PER_YEAR);

        require!(optimal_utilization > BigUint::zero() && optimal_utilization < wad, ERROR_INVALID_OPTIMAL_UTILIZATION);

        let r0 = base_rate_y / &bpy;
        let m1 = first_slope_y * &wad / &bpy / &optimal_utilization;
        let m2 = last_slope_y * &wad / &bpy / (&wad - &optimal_utilization);
        require!(m2 > BigUint::zero(), ERROR_INVALID_LAST_SLOPE);
        require!(m2 >= m1, ERROR_LAST_SLOPE_LOWER_THAN_FIRST);

        // the max borrow rate must be reachable, i.e. higher than the rate at full utilization
        let r_max = max_borrow_rate_y / &bpy;
        let r1 = &m1 * &optimal_utilization / &wad + &r0;
        let r = r1 + &m2 * &(&wad - &optimal_utilization) / &wad;
        require!(r_max > r0 && r_max >= r, ERROR_MAX_BORROW_RATE_TOO_LOW);

        self.base_rate().set_if_empty(&r0);
        self.first_slope().set_if_empty(&m1);
        self.last_slope().set_if_empty(&m2);
        self.optimal_utilization().set_if_empty(&optimal_utilization);
        self.max_borrow_rate().set_if_empty(&r_max);

        self.set_interest_rate_params_event(&r0, &m1, &m2, &optimal_utilization, &r_max);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Returns true to indicate that this contract is an interest rate model.
    #[view(isInterestRateModel)]
    fn is_interest_rate_model(&self) -> bool {
        true
    }

    /// Returns the amount of underlying that belongs to suppliers, i.e. `cash + borrows - reserves`. Saturates at zero.
    ///
    /// # Arguments:
    ///
    /// - `cash` - The market cash.
    /// - `borrows` - The market total borrows.
    /// - `reserves` - The market total reserves.
    ///
    fn get_liquidity(&self, cash: &BigUint, borrows: &BigUint, reserves: &BigUint) -> BigUint {
        let gross = cash + borrows;
        if *reserves >= gross {
            return BigUint::zero();
        }
        gross - reserves
    }

    /// Returns the utilization rate, calculated as borrows divided by liquidity. If borrows are zero, returns zero. If
    /// liquidity is zero, returns the utilization rate that yields the maximum borrow rate.
    ///
    /// # Arguments:
    ///
    /// - `cash` - The market cash.
    /// - `borrows` - The market total borrows.
    /// - `reserves` - The market total reserves.
    ///
    #[view(getUtilization)]
    fn get_utilization(&self, cash: &BigUint, borrows: &BigUint, reserves: &BigUint) -> BigUint {
        let zero = BigUint::zero();
        if *borrows == zero {
            return zero;
        }

        let wad = BigUint::from(WAD);
        let liquidity = self.get_liquidity(cash, borrows, reserves);

        // sum `+ 2` to take into consideration the truncation error yielded by the previous two divisions
        if liquidity == zero {
            let r0 = self.base_rate().get();
            let m1 = self.first_slope().get();
            let m2 = self.last_slope().get();
            let uo = self.optimal_utilization().get();
            let r_max = self.max_borrow_rate().get();
            return (&m2 - &m1) * uo / &m2 + (r_max - r0) * wad / &m2 + 2u64;
        }

        borrows * &wad / &liquidity
    }

    /// Returns the current model parameters used to calculate the borrow rate, as a tuple of:
    ///
    /// - Base rate (r0)
    /// - First slope (m1)
    /// - Last slope (m2)
    /// - Optimal utilization (uo)
    /// - Maximum borrow rate (r_max)
    ///
    #[view(getModelParameters)]
    fn get_model_parameters(&self) -> (BigUint, BigUint, BigUint, BigUint, BigUint) {
        let r0 = self.base_rate().get();
        let m1 = self.first_slope().get();
        let m2 = self.last_slope().get();
        let uo = self.optimal_utilization().get();
        let r_max = self.max_borrow_rate().get();
        (r0, m1, m2, uo, r_max)
    }

    /// Computes the borrow rate per block for the given market state.
    ///
    /// # Arguments:
    ///
    /// - `cash` - The market cash.
    /// - `borrows` - The market total borrows.
    /// - `reserves` - The market total reserves.
    ///
    #[view(getBorrowRate)]
    fn get_borrow_rate(&self, cash: &BigUint, borrows: &BigUint, reserves: &BigUint) -> BigUint {
        let r0 = self.base_rate().get();

        if *borrows == BigUint::zero() {
            return r0;
        }

        let r_max = self.max_borrow_rate().get();
        let liquidity = self.get_liquidity(cash, borrows, reserves);

        // utilization is infinity
        if liquidity == BigUint::zero() {
            self.reached_max_borrow_rate_event(borrows, &liquidity);
            return r_max;
        }

        let wad = BigUint::from(WAD);
        let u = self.get_utilization(cash, borrows, reserves);
        let m1 = self.first_slope().get();
        let uo = self.optimal_utilization().get();

        if u <= uo {
            return m1 * u / &wad + r0;
        }

        let m2 = self.last_slope().get();
        let r1 = m1 * &uo / &wad + r0;
        let r = r1 + m2 * (u - uo) / &wad;

        if r >= r_max {
            self.reached_max_borrow_rate_event(borrows, &liquidity);
            return r_max;
        }

        r
    }

    /// Computes the supply rate per block for the given market state and reserve ratio.
    ///
    /// # Arguments:
    ///
    /// - `cash` - The market cash.
    /// - `borrows` - The market total borrows.
    /// - `reserves` - The market total reserves.
    /// - `reserve_ratio` - The share of interest kept by the protocol, in wad.
    ///
    #[view(getSupplyRate)]
    fn get_supply_rate(&self, cash: &BigUint, borrows: &BigUint, reserves: &BigUint, reserve_ratio: &BigUint) -> BigUint {
        let borrow_rate = self.get_borrow_rate(cash, borrows, reserves);
        self.get_supply_rate_internal(cash, borrows, reserves, &borrow_rate, reserve_ratio)
    }

    fn get_supply_rate_internal(&self, cash: &BigUint, borrows: &BigUint, reserves: &BigUint, borrow_rate: &BigUint, reserve_ratio: &BigUint) -> BigUint {
        let wad = BigUint::from(WAD);
        require!(*reserve_ratio <= wad, ERROR_INVALID_RESERVE_RATIO);
        let utilization = self.get_utilization(cash, borrows, reserves);
        utilization * borrow_rate / &wad * (&wad - reserve_ratio) / &wad
    }

    /// Computes both the borrow rate and the supply rate per block for the given market state and reserve ratio.
    ///
    #[view(getRates)]
    fn get_rates(&self, cash: &BigUint, borrows: &BigUint, reserves: &BigUint, reserve_ratio: &BigUint) -> (BigUint, BigUint) {
        let borrow_rate = self.get_borrow_rate(cash, borrows, reserves);
        let supply_rate = self.get_supply_rate_internal(cash, borrows, reserves, &borrow_rate, reserve_ratio);
        (borrow_rate, supply_rate)
    }

    /// Stores the base rate per block.
    #[view(getBaseRate)]
    #[storage_mapper("base_rate")]
    fn base_rate(&self) -> SingleValueMapper<BigUint>;

    /// Stores the slope of the borrow rate up to the optimal utilization point.
    #[view(getFirstSlope)]
    #[storage_mapper("first_slope")]
    fn first_slope(&self) -> SingleValueMapper<BigUint>;

    /// Stores the slope of the borrow rate after the optimal utilization point.
    #[view(getLastSlope)]
    #[storage_mapper("last_slope")]
    fn last_slope(&self) -> SingleValueMapper<BigUint>;

    #[view(getOptimalUtilization)]
    #[storage_mapper("optimal_utilization")]
    fn optimal_utilization(&self) -> SingleValueMapper<BigUint>;

    /// Stores the maximum borrow rate per block.
    #[view(getMaxBorrowRate)]
    #[storage_mapper("max_borrow_rate")]
    fn max_borrow_rate(&self) -> SingleValueMapper<BigUint>;

    /// Emitted when the model parameters are set.
    #[event("set_interest_rate_params_event")]
    fn set_interest_rate_params_event(&self, #[indexed] base_rate: &BigUint, #[indexed] first_slope: &BigUint, #[indexed] last_slope: &BigUint, #[indexed] optimal_utilization: &BigUint, #[indexed] max_borrow_rate: &BigUint);

    /// Emitted when the liquidity is zero or when utilization is high enough to cap the borrow rate.
    #[event("reached_max_borrow_rate_event")]
    fn reached_max_borrow_rate_event(&self, #[indexed] borrows: &BigUint, #[indexed] liquidity: &BigUint);
}
