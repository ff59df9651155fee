use soroban_sdk::{contracttype, Address, Env};

use crate::catalog::{Medicine, RawMaterial};
use crate::orders::Order;
use crate::roles::{Participant, Role};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    Regulator(Address),
    ParticipantCount(Role),
    Participant(Role, u32),      // (role, id)
    AccountId(Role, Address),    // reverse index: account -> id within a role
    RawMaterialCount,
    RawMaterial(u32),
    MedicineCount,
    Medicine(u32),
    OrderCount,
    Order(u32),
}

/// Collection sizes. Ids are dense and 1-based, so each count is also the
/// last id handed out.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Counters {
    pub raw_material_suppliers: u32,
    pub manufacturers: u32,
    pub distributors: u32,
    pub retailers: u32,
    pub customers: u32,
    pub raw_materials: u32,
    pub medicines: u32,
    pub orders: u32,
}

// Owner and regulators

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn is_regulator(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Regulator(account.clone()))
        .unwrap_or(false)
}

pub fn set_regulator(env: &Env, account: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Regulator(account.clone()), &true);
}

// Counter generation functions

pub fn participant_count(env: &Env, role: Role) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ParticipantCount(role))
        .unwrap_or(0u32)
}

pub fn next_participant_id(env: &Env, role: Role) -> u32 {
    let next = participant_count(env, role) + 1;
    env.storage()
        .instance()
        .set(&DataKey::ParticipantCount(role), &next);
    next
}

pub fn raw_material_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::RawMaterialCount)
        .unwrap_or(0u32)
}

pub fn next_raw_material_id(env: &Env) -> u32 {
    let next = raw_material_count(env) + 1;
    env.storage().instance().set(&DataKey::RawMaterialCount, &next);
    next
}

pub fn medicine_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::MedicineCount)
        .unwrap_or(0u32)
}

pub fn next_medicine_id(env: &Env) -> u32 {
    let next = medicine_count(env) + 1;
    env.storage().instance().set(&DataKey::MedicineCount, &next);
    next
}

pub fn order_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::OrderCount)
        .unwrap_or(0u32)
}

pub fn next_order_id(env: &Env) -> u32 {
    let next = order_count(env) + 1;
    env.storage().instance().set(&DataKey::OrderCount, &next);
    next
}

// Participant storage functions

pub fn get_participant(env: &Env, role: Role, id: u32) -> Option<Participant> {
    env.storage().persistent().get(&DataKey::Participant(role, id))
}

pub fn set_participant(env: &Env, role: Role, participant: &Participant) {
    let key = DataKey::Participant(role, participant.id);
    env.storage().persistent().set(&key, participant);
}

pub fn account_id(env: &Env, role: Role, account: &Address) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::AccountId(role, account.clone()))
}

pub fn set_account_id(env: &Env, role: Role, account: &Address, id: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::AccountId(role, account.clone()), &id);
}

// Catalog storage functions

pub fn get_raw_material(env: &Env, id: u32) -> Option<RawMaterial> {
    env.storage().persistent().get(&DataKey::RawMaterial(id))
}

pub fn set_raw_material(env: &Env, material: &RawMaterial) {
    env.storage()
        .persistent()
        .set(&DataKey::RawMaterial(material.id), material);
}

pub fn get_medicine(env: &Env, id: u32) -> Option<Medicine> {
    env.storage().persistent().get(&DataKey::Medicine(id))
}

pub fn set_medicine(env: &Env, medicine: &Medicine) {
    env.storage()
        .persistent()
        .set(&DataKey::Medicine(medicine.id), medicine);
}

// Order storage functions

pub fn get_order(env: &Env, order_id: u32) -> Option<Order> {
    env.storage().persistent().get(&DataKey::Order(order_id))
}

pub fn set_order(env: &Env, order: &Order) {
    env.storage()
        .persistent()
        .set(&DataKey::Order(order.order_id), order);
}

pub fn counters(env: &Env) -> Counters {
    Counters {
        raw_material_suppliers: participant_count(env, Role::RawMaterialSupplier),
        manufacturers: participant_count(env, Role::Manufacturer),
        distributors: participant_count(env, Role::Distributor),
        retailers: participant_count(env, Role::Retailer),
        customers: participant_count(env, Role::Customer),
        raw_materials: raw_material_count(env),
        medicines: medicine_count(env),
        orders: order_count(env),
    }
}
