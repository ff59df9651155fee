use soroban_sdk::Map;

use crate::orders::MaterialSupply;

/// Participant id slots in an order use 0 as the unassigned sentinel;
/// registry ids start at 1.
pub fn is_assigned(id: u32) -> bool {
    id != 0
}

/// True once every required material of the order has been supplied.
pub fn all_supplied(supplies: &Map<u32, MaterialSupply>) -> bool {
    supplies.iter().all(|(_, supply)| supply.supplied)
}
