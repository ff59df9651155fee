use soroban_sdk::{contracttype, Address, Env, Map, String, Vec};

use crate::error::ContractError;
use crate::events;
use crate::roles::{self, Role};
use crate::stages::{self, Stage, STAGE_COUNT};
use crate::storage;
use crate::utils;

/// Supply slot for one required raw material of an order. `supplier_id`
/// stays 0 until the slot is filled; a filled slot is write-once.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MaterialSupply {
    pub supplied: bool,
    pub supplier_id: u32,
}

/// One custody record. Participant id fields use 0 as the unassigned
/// sentinel. `timestamps` holds one instant per stage, indexed by
/// `Stage::index`, 0 where the stage is unreached. The current stage is
/// derived by `stages::current`, never stored.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Order {
    pub order_id: u32,
    pub medicine_id: u32,
    pub manufacturer_id: u32,
    pub distributor_id: u32,
    pub retailer_id: u32,
    pub customer_id: u32,
    pub supplies: Map<u32, MaterialSupply>,
    pub timestamps: Vec<u64>,
}

fn load_order(env: &Env, order_id: u32) -> Result<Order, ContractError> {
    storage::get_order(env, order_id).ok_or(ContractError::NotFound)
}

pub fn add_order(env: &Env, caller: &Address, medicine_id: u32) -> Result<u32, ContractError> {
    roles::ensure_initialized(env)?;
    let medicine = storage::get_medicine(env, medicine_id).ok_or(ContractError::NotFound)?;

    let order_id = storage::next_order_id(env);
    let timestamp = env.ledger().timestamp();

    let mut supplies = Map::new(env);
    for material_id in medicine.required_materials.iter() {
        supplies.set(
            material_id,
            MaterialSupply {
                supplied: false,
                supplier_id: 0,
            },
        );
    }

    let mut timestamps = Vec::from_array(env, [0u64; STAGE_COUNT as usize]);
    timestamps.set(Stage::Ordered.index(), timestamp);

    let order = Order {
        order_id,
        medicine_id,
        manufacturer_id: 0,
        distributor_id: 0,
        retailer_id: 0,
        customer_id: 0,
        supplies,
        timestamps,
    };
    storage::set_order(env, &order);

    events::emit_order_placed(env, order_id, medicine_id, caller.clone(), timestamp);
    Ok(order_id)
}

pub fn supply_raw_materials(
    env: &Env,
    supplier: &Address,
    order_id: u32,
    material_id: u32,
) -> Result<(), ContractError> {
    let mut order = load_order(env, order_id)?;
    let supplier_id = roles::require_role(env, supplier, Role::RawMaterialSupplier)?;
    stages::ensure(&order, Stage::Ordered)?;

    let slot = order
        .supplies
        .get(material_id)
        .ok_or(ContractError::InvalidMaterial)?;
    if slot.supplied {
        return Err(ContractError::AlreadySupplied);
    }

    order.supplies.set(
        material_id,
        MaterialSupply {
            supplied: true,
            supplier_id,
        },
    );

    let timestamp = env.ledger().timestamp();
    let complete = utils::all_supplied(&order.supplies);
    if complete {
        order.timestamps.set(Stage::RawMaterialsSupplied.index(), timestamp);
    }
    storage::set_order(env, &order);

    events::emit_material_supplied(env, order_id, material_id, supplier_id, complete, timestamp);
    Ok(())
}

pub fn manufacture(env: &Env, manufacturer: &Address, order_id: u32) -> Result<(), ContractError> {
    let mut order = load_order(env, order_id)?;
    let manufacturer_id = roles::require_role(env, manufacturer, Role::Manufacturer)?;
    stages::ensure(&order, Stage::RawMaterialsSupplied)?;

    let timestamp = env.ledger().timestamp();
    order.manufacturer_id = manufacturer_id;
    order.timestamps.set(Stage::Manufactured.index(), timestamp);
    storage::set_order(env, &order);

    events::emit_order_manufactured(env, order_id, manufacturer_id, timestamp);
    Ok(())
}

pub fn distribute(env: &Env, distributor: &Address, order_id: u32) -> Result<(), ContractError> {
    let mut order = load_order(env, order_id)?;
    let distributor_id = roles::require_role(env, distributor, Role::Distributor)?;
    stages::ensure(&order, Stage::Manufactured)?;

    let timestamp = env.ledger().timestamp();
    order.distributor_id = distributor_id;
    order.timestamps.set(Stage::Distributed.index(), timestamp);
    storage::set_order(env, &order);

    events::emit_order_distributed(env, order_id, distributor_id, timestamp);
    Ok(())
}

pub fn retail(env: &Env, retailer: &Address, order_id: u32) -> Result<(), ContractError> {
    let mut order = load_order(env, order_id)?;
    let retailer_id = roles::require_role(env, retailer, Role::Retailer)?;
    stages::ensure(&order, Stage::Distributed)?;

    let timestamp = env.ledger().timestamp();
    order.retailer_id = retailer_id;
    order.timestamps.set(Stage::Retailed.index(), timestamp);
    storage::set_order(env, &order);

    events::emit_order_retailed(env, order_id, retailer_id, timestamp);
    Ok(())
}

pub fn sell(
    env: &Env,
    retailer: &Address,
    order_id: u32,
    customer_id: u32,
) -> Result<(), ContractError> {
    let mut order = load_order(env, order_id)?;
    let retailer_id = roles::require_role(env, retailer, Role::Retailer)?;
    stages::ensure(&order, Stage::Retailed)?;

    // Only the retailer holding the order may hand it over.
    if retailer_id != order.retailer_id {
        return Err(ContractError::AccessDenied);
    }
    if storage::get_participant(env, Role::Customer, customer_id).is_none() {
        return Err(ContractError::NotFound);
    }

    let timestamp = env.ledger().timestamp();
    order.customer_id = customer_id;
    order.timestamps.set(Stage::Sold.index(), timestamp);
    storage::set_order(env, &order);

    events::emit_order_sold(env, order_id, retailer_id, customer_id, timestamp);
    Ok(())
}

// Queries

pub fn get_order(env: &Env, order_id: u32) -> Result<Order, ContractError> {
    load_order(env, order_id)
}

pub fn current_stage(env: &Env, order_id: u32) -> Result<Stage, ContractError> {
    let order = load_order(env, order_id)?;
    Ok(stages::current(&order))
}

pub fn stage_label(env: &Env, order_id: u32) -> Result<String, ContractError> {
    let stage = current_stage(env, order_id)?;
    Ok(stage.label(env))
}

pub fn stage_timestamps(env: &Env, order_id: u32) -> Result<Vec<u64>, ContractError> {
    let order = load_order(env, order_id)?;
    Ok(order.timestamps)
}

pub fn supplied_by(env: &Env, order_id: u32, material_id: u32) -> Result<Option<u32>, ContractError> {
    let order = load_order(env, order_id)?;
    let slot = order
        .supplies
        .get(material_id)
        .ok_or(ContractError::InvalidMaterial)?;
    if slot.supplied {
        Ok(Some(slot.supplier_id))
    } else {
        Ok(None)
    }
}

pub fn is_supplied(env: &Env, order_id: u32, material_id: u32) -> Result<bool, ContractError> {
    supplied_by(env, order_id, material_id).map(|supplier| supplier.is_some())
}

/// Supplier ids of the materials supplied so far, in material-id order.
pub fn order_suppliers(env: &Env, order_id: u32) -> Result<Vec<u32>, ContractError> {
    let order = load_order(env, order_id)?;
    let mut suppliers = Vec::new(env);
    for (_, slot) in order.supplies.iter() {
        if slot.supplied {
            suppliers.push_back(slot.supplier_id);
        }
    }
    Ok(suppliers)
}
