use soroban_sdk::{contracttype, Address, Env, String};

use crate::error::ContractError;
use crate::events;
use crate::storage;

/// The five registered participant collections. Owner and regulators sit
/// outside these: they administer the registry but hold no id in it.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Role {
    RawMaterialSupplier,
    Manufacturer,
    Distributor,
    Retailer,
    Customer,
}

/// Resolved identity of an account, covering administrators as well as
/// registered participants.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AccountRole {
    Owner,
    Regulator,
    RawMaterialSupplier,
    Manufacturer,
    Distributor,
    Retailer,
    Customer,
}

/// A registry entry. `contact` holds the business location for supply-side
/// roles and the email address for customers. `verified` is informational:
/// no operation gates on it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Participant {
    pub id: u32,
    pub account: Address,
    pub name: String,
    pub contact: String,
    pub verified: bool,
}

pub fn initialize(env: &Env, owner: &Address) -> Result<(), ContractError> {
    if storage::has_owner(env) {
        return Err(ContractError::AlreadyInitialized);
    }
    storage::set_owner(env, owner);
    Ok(())
}

pub fn owner(env: &Env) -> Result<Address, ContractError> {
    storage::get_owner(env).ok_or(ContractError::NotInitialized)
}

pub fn ensure_initialized(env: &Env) -> Result<(), ContractError> {
    owner(env).map(|_| ())
}

/// Registry administration is open to the Owner and to regulators.
pub fn ensure_owner_or_regulator(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let owner = owner(env)?;
    if *caller == owner || storage::is_regulator(env, caller) {
        Ok(())
    } else {
        Err(ContractError::AccessDenied)
    }
}

pub fn add_regulator(env: &Env, caller: &Address, account: &Address) -> Result<(), ContractError> {
    let owner = owner(env)?;
    if *caller != owner {
        return Err(ContractError::AccessDenied);
    }
    if storage::is_regulator(env, account) {
        return Err(ContractError::DuplicateIdentity);
    }
    storage::set_regulator(env, account);
    events::emit_regulator_added(env, account.clone(), env.ledger().timestamp());
    Ok(())
}

pub fn register(
    env: &Env,
    caller: &Address,
    role: Role,
    account: Address,
    name: String,
    contact: String,
    verified: Option<bool>,
) -> Result<u32, ContractError> {
    ensure_owner_or_regulator(env, caller)?;

    // One id per account within a collection; the same account may hold
    // ids in other collections.
    if storage::account_id(env, role, &account).is_some() {
        return Err(ContractError::DuplicateIdentity);
    }

    let id = storage::next_participant_id(env, role);
    let verified = verified.unwrap_or(false);
    let participant = Participant {
        id,
        account: account.clone(),
        name,
        contact,
        verified,
    };
    storage::set_participant(env, role, &participant);
    storage::set_account_id(env, role, &account, id);

    events::emit_participant_registered(env, role, id, account, verified, env.ledger().timestamp());
    Ok(id)
}

pub fn set_verified(
    env: &Env,
    caller: &Address,
    role: Role,
    id: u32,
    verified: bool,
) -> Result<(), ContractError> {
    ensure_owner_or_regulator(env, caller)?;

    let mut participant = storage::get_participant(env, role, id).ok_or(ContractError::NotFound)?;
    participant.verified = verified;
    storage::set_participant(env, role, &participant);

    events::emit_verification_updated(env, role, id, verified, env.ledger().timestamp());
    Ok(())
}

pub fn get_participant(env: &Env, role: Role, id: u32) -> Result<Participant, ContractError> {
    storage::get_participant(env, role, id).ok_or(ContractError::NotFound)
}

pub fn is_verified(env: &Env, role: Role, id: u32) -> Result<bool, ContractError> {
    get_participant(env, role, id).map(|p| p.verified)
}

/// Resolve who an account is. Owner wins over Regulator, which wins over
/// registry entries; registry collections are checked in chain order.
pub fn role_of(env: &Env, account: &Address) -> Option<AccountRole> {
    if let Some(owner) = storage::get_owner(env) {
        if owner == *account {
            return Some(AccountRole::Owner);
        }
    }
    if storage::is_regulator(env, account) {
        return Some(AccountRole::Regulator);
    }
    if storage::account_id(env, Role::RawMaterialSupplier, account).is_some() {
        return Some(AccountRole::RawMaterialSupplier);
    }
    if storage::account_id(env, Role::Manufacturer, account).is_some() {
        return Some(AccountRole::Manufacturer);
    }
    if storage::account_id(env, Role::Distributor, account).is_some() {
        return Some(AccountRole::Distributor);
    }
    if storage::account_id(env, Role::Retailer, account).is_some() {
        return Some(AccountRole::Retailer);
    }
    if storage::account_id(env, Role::Customer, account).is_some() {
        return Some(AccountRole::Customer);
    }
    None
}

/// Resolve the caller's id within `role`, rejecting accounts that hold no
/// entry there. Custody actions use this as their authorization gate.
pub fn require_role(env: &Env, account: &Address, role: Role) -> Result<u32, ContractError> {
    storage::account_id(env, role, account).ok_or(ContractError::AccessDenied)
}
