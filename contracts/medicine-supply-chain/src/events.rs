use soroban_sdk::{contracttype, Address, Env, String, Vec};

use crate::roles::Role;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipantRegisteredEvent {
    pub role: Role,
    pub id: u32,
    pub account: Address,
    pub verified: bool,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegulatorAddedEvent {
    pub account: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerificationUpdatedEvent {
    pub role: Role,
    pub id: u32,
    pub verified: bool,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawMaterialAddedEvent {
    pub id: u32,
    pub name: String,
    pub is_precursor: bool,
    pub added_by: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicineAddedEvent {
    pub id: u32,
    pub name: String,
    pub required_materials: Vec<u32>,
    pub is_precursor: bool,
    pub added_by: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderPlacedEvent {
    pub order_id: u32,
    pub medicine_id: u32,
    pub placed_by: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MaterialSuppliedEvent {
    pub order_id: u32,
    pub material_id: u32,
    pub supplier_id: u32,
    pub complete: bool,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderManufacturedEvent {
    pub order_id: u32,
    pub manufacturer_id: u32,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderDistributedEvent {
    pub order_id: u32,
    pub distributor_id: u32,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderRetailedEvent {
    pub order_id: u32,
    pub retailer_id: u32,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderSoldEvent {
    pub order_id: u32,
    pub retailer_id: u32,
    pub customer_id: u32,
    pub timestamp: u64,
}

pub fn emit_participant_registered(
    env: &Env,
    role: Role,
    id: u32,
    account: Address,
    verified: bool,
    timestamp: u64,
) {
    let event = ParticipantRegisteredEvent {
        role,
        id,
        account,
        verified,
        timestamp,
    };
    env.events().publish(("participant_registered",), event);
}

pub fn emit_regulator_added(env: &Env, account: Address, timestamp: u64) {
    let event = RegulatorAddedEvent { account, timestamp };
    env.events().publish(("regulator_added",), event);
}

pub fn emit_verification_updated(env: &Env, role: Role, id: u32, verified: bool, timestamp: u64) {
    let event = VerificationUpdatedEvent {
        role,
        id,
        verified,
        timestamp,
    };
    env.events().publish(("verification_updated",), event);
}

pub fn emit_raw_material_added(env: &Env, id: u32, name: String, is_precursor: bool, added_by: Address) {
    let event = RawMaterialAddedEvent {
        id,
        name,
        is_precursor,
        added_by,
    };
    env.events().publish(("raw_material_added",), event);
}

pub fn emit_medicine_added(
    env: &Env,
    id: u32,
    name: String,
    required_materials: Vec<u32>,
    is_precursor: bool,
    added_by: Address,
) {
    let event = MedicineAddedEvent {
        id,
        name,
        required_materials,
        is_precursor,
        added_by,
    };
    env.events().publish(("medicine_added",), event);
}

pub fn emit_order_placed(env: &Env, order_id: u32, medicine_id: u32, placed_by: Address, timestamp: u64) {
    let event = OrderPlacedEvent {
        order_id,
        medicine_id,
        placed_by,
        timestamp,
    };
    env.events().publish(("order_placed",), event);
}

pub fn emit_material_supplied(
    env: &Env,
    order_id: u32,
    material_id: u32,
    supplier_id: u32,
    complete: bool,
    timestamp: u64,
) {
    let event = MaterialSuppliedEvent {
        order_id,
        material_id,
        supplier_id,
        complete,
        timestamp,
    };
    env.events().publish(("material_supplied",), event);
}

pub fn emit_order_manufactured(env: &Env, order_id: u32, manufacturer_id: u32, timestamp: u64) {
    let event = OrderManufacturedEvent {
        order_id,
        manufacturer_id,
        timestamp,
    };
    env.events().publish(("order_manufactured",), event);
}

pub fn emit_order_distributed(env: &Env, order_id: u32, distributor_id: u32, timestamp: u64) {
    let event = OrderDistributedEvent {
        order_id,
        distributor_id,
        timestamp,
    };
    env.events().publish(("order_distributed",), event);
}

pub fn emit_order_retailed(env: &Env, order_id: u32, retailer_id: u32, timestamp: u64) {
    let event = OrderRetailedEvent {
        order_id,
        retailer_id,
        timestamp,
    };
    env.events().publish(("order_retailed",), event);
}

pub fn emit_order_sold(env: &Env, order_id: u32, retailer_id: u32, customer_id: u32, timestamp: u64) {
    let event = OrderSoldEvent {
        order_id,
        retailer_id,
        customer_id,
        timestamp,
    };
    env.events().publish(("order_sold",), event);
}
