use soroban_sdk::{contracttype, Address, Env, String, Vec};

use crate::error::ContractError;
use crate::events;
use crate::roles;
use crate::storage;

/// A catalog raw material. Immutable once created.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawMaterial {
    pub id: u32,
    pub name: String,
    pub is_precursor: bool,
}

/// A catalog medicine with its bill of required raw materials. Immutable
/// once created. `is_precursor` is declared by the caller, not derived
/// from the required materials.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Medicine {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub required_materials: Vec<u32>,
    pub is_precursor: bool,
}

pub fn add_raw_material(
    env: &Env,
    caller: &Address,
    name: String,
    is_precursor: bool,
) -> Result<u32, ContractError> {
    roles::ensure_initialized(env)?;

    let id = storage::next_raw_material_id(env);
    let material = RawMaterial {
        id,
        name: name.clone(),
        is_precursor,
    };
    storage::set_raw_material(env, &material);

    events::emit_raw_material_added(env, id, name, is_precursor, caller.clone());
    Ok(id)
}

pub fn add_medicine(
    env: &Env,
    caller: &Address,
    name: String,
    description: String,
    required_materials: Vec<u32>,
    is_precursor: bool,
) -> Result<u32, ContractError> {
    roles::ensure_initialized(env)?;

    if required_materials.is_empty() {
        return Err(ContractError::ValidationError);
    }
    let known = storage::raw_material_count(env);
    for material_id in required_materials.iter() {
        if material_id == 0 || material_id > known {
            return Err(ContractError::ValidationError);
        }
    }

    let id = storage::next_medicine_id(env);
    let medicine = Medicine {
        id,
        name: name.clone(),
        description,
        required_materials: required_materials.clone(),
        is_precursor,
    };
    storage::set_medicine(env, &medicine);

    events::emit_medicine_added(env, id, name, required_materials, is_precursor, caller.clone());
    Ok(id)
}

pub fn get_raw_material(env: &Env, id: u32) -> Result<RawMaterial, ContractError> {
    storage::get_raw_material(env, id).ok_or(ContractError::NotFound)
}

pub fn get_medicine(env: &Env, id: u32) -> Result<Medicine, ContractError> {
    storage::get_medicine(env, id).ok_or(ContractError::NotFound)
}

pub fn get_required_raw_materials(env: &Env, medicine_id: u32) -> Result<Vec<u32>, ContractError> {
    get_medicine(env, medicine_id).map(|m| m.required_materials)
}
