use soroban_sdk::{contracttype, Env, String};

use crate::error::ContractError;
use crate::orders::Order;
use crate::utils;

/// Custody stages of an order, in chain order. An order never moves
/// backwards and never skips a stage.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Stage {
    Ordered = 0,
    RawMaterialsSupplied = 1,
    Manufactured = 2,
    Distributed = 3,
    Retailed = 4,
    Sold = 5,
}

pub const STAGE_COUNT: u32 = 6;

impl Stage {
    /// Position in the chain, also the slot in an order's timestamp vector.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Consumer-facing label for tracking displays.
    pub fn label(self, env: &Env) -> String {
        match self {
            Stage::Ordered => String::from_str(env, "Medicine Ordered"),
            Stage::RawMaterialsSupplied => String::from_str(env, "Raw Material Supplied"),
            Stage::Manufactured => String::from_str(env, "Manufacturing Process"),
            Stage::Distributed => String::from_str(env, "In Distribution"),
            Stage::Retailed => String::from_str(env, "At Retail Store"),
            Stage::Sold => String::from_str(env, "Medicine Sold"),
        }
    }
}

/// Derive the current stage from the order record. The stage is never
/// stored: it is a projection of which participants are assigned and
/// whether the supply fan-in has completed.
pub fn current(order: &Order) -> Stage {
    if utils::is_assigned(order.customer_id) {
        return Stage::Sold;
    }
    if utils::is_assigned(order.retailer_id) {
        return Stage::Retailed;
    }
    if utils::is_assigned(order.distributor_id) {
        return Stage::Distributed;
    }
    if utils::is_assigned(order.manufacturer_id) {
        return Stage::Manufactured;
    }
    if utils::all_supplied(&order.supplies) {
        return Stage::RawMaterialsSupplied;
    }
    Stage::Ordered
}

/// Gate a custody action on the exact stage it advances from.
pub fn ensure(order: &Order, expected: Stage) -> Result<(), ContractError> {
    if current(order) == expected {
        Ok(())
    } else {
        Err(ContractError::InvalidStage)
    }
}
