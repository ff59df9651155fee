#![no_std]

mod error;
mod events;
mod storage;
mod roles;
mod catalog;
mod orders;
mod stages;
mod utils;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use catalog::*;
pub use error::*;
pub use events::*;
pub use orders::*;
pub use roles::*;
pub use stages::*;
pub use storage::Counters;

#[contract]
pub struct MedicineSupplyChain;

#[contractimpl]
impl MedicineSupplyChain {
    /// Initialize the contract with its owner
    pub fn initialize(env: Env, owner: Address) -> Result<(), ContractError> {
        owner.require_auth();
        roles::initialize(&env, &owner)
    }

    /// Grant an account regulator rights (owner only)
    pub fn add_regulator(env: Env, caller: Address, account: Address) -> Result<(), ContractError> {
        caller.require_auth();
        roles::add_regulator(&env, &caller, &account)
    }

    /// Register a participant under a role (owner or regulator only)
    pub fn register(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
        name: String,
        contact: String,
        verified: Option<bool>,
    ) -> Result<u32, ContractError> {
        caller.require_auth();
        roles::register(&env, &caller, role, account, name, contact, verified)
    }

    /// Update a participant's verified flag (owner or regulator only)
    pub fn set_verified(
        env: Env,
        caller: Address,
        role: Role,
        id: u32,
        verified: bool,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        roles::set_verified(&env, &caller, role, id, verified)
    }

    /// Get a registered participant by role and id
    pub fn get_participant(env: Env, role: Role, id: u32) -> Result<Participant, ContractError> {
        roles::get_participant(&env, role, id)
    }

    /// Resolve the role an account holds, if any
    pub fn role_of(env: Env, account: Address) -> Option<AccountRole> {
        roles::role_of(&env, &account)
    }

    /// Check a participant's verified flag
    pub fn is_verified(env: Env, role: Role, id: u32) -> Result<bool, ContractError> {
        roles::is_verified(&env, role, id)
    }

    /// Get the contract owner
    pub fn owner(env: Env) -> Result<Address, ContractError> {
        roles::owner(&env)
    }

    /// Check whether an account is a regulator
    pub fn is_regulator(env: Env, account: Address) -> bool {
        storage::is_regulator(&env, &account)
    }

    /// Add a raw material to the catalog
    pub fn add_raw_material(
        env: Env,
        caller: Address,
        name: String,
        is_precursor: bool,
    ) -> Result<u32, ContractError> {
        caller.require_auth();
        catalog::add_raw_material(&env, &caller, name, is_precursor)
    }

    /// Add a medicine and its required raw materials to the catalog
    pub fn add_medicine(
        env: Env,
        caller: Address,
        name: String,
        description: String,
        required_materials: Vec<u32>,
        is_precursor: bool,
    ) -> Result<u32, ContractError> {
        caller.require_auth();
        catalog::add_medicine(&env, &caller, name, description, required_materials, is_precursor)
    }

    /// Get a raw material by id
    pub fn get_raw_material(env: Env, id: u32) -> Result<RawMaterial, ContractError> {
        catalog::get_raw_material(&env, id)
    }

    /// Get a medicine by id
    pub fn get_medicine(env: Env, id: u32) -> Result<Medicine, ContractError> {
        catalog::get_medicine(&env, id)
    }

    /// Get the raw material ids a medicine requires
    pub fn get_required_raw_materials(env: Env, medicine_id: u32) -> Result<Vec<u32>, ContractError> {
        catalog::get_required_raw_materials(&env, medicine_id)
    }

    /// Place an order for a medicine
    pub fn add_order(env: Env, caller: Address, medicine_id: u32) -> Result<u32, ContractError> {
        caller.require_auth();
        orders::add_order(&env, &caller, medicine_id)
    }

    /// Supply one required raw material to an order (registered supplier only)
    pub fn supply_raw_materials(
        env: Env,
        supplier: Address,
        order_id: u32,
        material_id: u32,
    ) -> Result<(), ContractError> {
        supplier.require_auth();
        orders::supply_raw_materials(&env, &supplier, order_id, material_id)
    }

    /// Take a fully supplied order into manufacturing (registered manufacturer only)
    pub fn manufacture(env: Env, manufacturer: Address, order_id: u32) -> Result<(), ContractError> {
        manufacturer.require_auth();
        orders::manufacture(&env, &manufacturer, order_id)
    }

    /// Move a manufactured order into distribution (registered distributor only)
    pub fn distribute(env: Env, distributor: Address, order_id: u32) -> Result<(), ContractError> {
        distributor.require_auth();
        orders::distribute(&env, &distributor, order_id)
    }

    /// Place a distributed order at a retail store (registered retailer only)
    pub fn retail(env: Env, retailer: Address, order_id: u32) -> Result<(), ContractError> {
        retailer.require_auth();
        orders::retail(&env, &retailer, order_id)
    }

    /// Sell a retailed order to a registered customer (assigned retailer only)
    pub fn sell(
        env: Env,
        retailer: Address,
        order_id: u32,
        customer_id: u32,
    ) -> Result<(), ContractError> {
        retailer.require_auth();
        orders::sell(&env, &retailer, order_id, customer_id)
    }

    /// Get an order record
    pub fn get_order(env: Env, order_id: u32) -> Result<Order, ContractError> {
        orders::get_order(&env, order_id)
    }

    /// Get an order's current custody stage
    pub fn current_stage(env: Env, order_id: u32) -> Result<Stage, ContractError> {
        orders::current_stage(&env, order_id)
    }

    /// Get an order's current stage as a tracking display label
    pub fn stage_label(env: Env, order_id: u32) -> Result<String, ContractError> {
        orders::stage_label(&env, order_id)
    }

    /// Get an order's per-stage timestamps (0 where the stage is unreached)
    pub fn stage_timestamps(env: Env, order_id: u32) -> Result<Vec<u64>, ContractError> {
        orders::stage_timestamps(&env, order_id)
    }

    /// Get the supplier id that filled a material slot, if it was supplied
    pub fn supplied_by(
        env: Env,
        order_id: u32,
        material_id: u32,
    ) -> Result<Option<u32>, ContractError> {
        orders::supplied_by(&env, order_id, material_id)
    }

    /// Check whether a required material has been supplied to an order
    pub fn is_supplied(env: Env, order_id: u32, material_id: u32) -> Result<bool, ContractError> {
        orders::is_supplied(&env, order_id, material_id)
    }

    /// Get the supplier ids recorded on an order so far
    pub fn order_suppliers(env: Env, order_id: u32) -> Result<Vec<u32>, ContractError> {
        orders::order_suppliers(&env, order_id)
    }

    /// Get the sizes of every registry, catalog, and order collection
    pub fn counters(env: Env) -> Counters {
        storage::counters(&env)
    }
}
