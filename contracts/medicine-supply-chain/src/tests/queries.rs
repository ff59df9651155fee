#![cfg(test)]

use soroban_sdk::{testutils::{Address as _, Ledger}, vec, Address, Env, String};

use super::utils::*;
use crate::{ContractError, Counters};

#[test]
fn test_counters_start_at_zero() {
    let (_env, client, _owner) = setup();
    assert_eq!(
        client.counters(),
        Counters {
            raw_material_suppliers: 0,
            manufacturers: 0,
            distributors: 0,
            retailers: 0,
            customers: 0,
            raw_materials: 0,
            medicines: 0,
            orders: 0,
        }
    );
}

#[test]
fn test_counters_track_every_collection() {
    let (_env, client, _f) = fixture();
    assert_eq!(
        client.counters(),
        Counters {
            raw_material_suppliers: 2,
            manufacturers: 1,
            distributors: 1,
            retailers: 2,
            customers: 1,
            raw_materials: 2,
            medicines: 1,
            orders: 1,
        }
    );
}

#[test]
fn test_stage_label_walk() {
    let (env, client, f) = fixture();

    assert_eq!(
        client.stage_label(&f.order_id),
        String::from_str(&env, "Medicine Ordered")
    );

    supply_all(&client, &f);
    assert_eq!(
        client.stage_label(&f.order_id),
        String::from_str(&env, "Raw Material Supplied")
    );

    client.manufacture(&f.manufacturer, &f.order_id);
    assert_eq!(
        client.stage_label(&f.order_id),
        String::from_str(&env, "Manufacturing Process")
    );

    client.distribute(&f.distributor, &f.order_id);
    assert_eq!(
        client.stage_label(&f.order_id),
        String::from_str(&env, "In Distribution")
    );

    client.retail(&f.retailer, &f.order_id);
    assert_eq!(
        client.stage_label(&f.order_id),
        String::from_str(&env, "At Retail Store")
    );

    client.sell(&f.retailer, &f.order_id, &f.customer_id);
    assert_eq!(
        client.stage_label(&f.order_id),
        String::from_str(&env, "Medicine Sold")
    );
}

#[test]
fn test_stage_timestamps_monotone() {
    let (env, client, f) = fixture();

    env.ledger().set_timestamp(BASE_TIMESTAMP + 100);
    supply_all(&client, &f);
    env.ledger().set_timestamp(BASE_TIMESTAMP + 250);
    client.manufacture(&f.manufacturer, &f.order_id);
    env.ledger().set_timestamp(BASE_TIMESTAMP + 250);
    client.distribute(&f.distributor, &f.order_id);
    env.ledger().set_timestamp(BASE_TIMESTAMP + 900);
    client.retail(&f.retailer, &f.order_id);
    env.ledger().set_timestamp(BASE_TIMESTAMP + 901);
    client.sell(&f.retailer, &f.order_id, &f.customer_id);

    let timestamps = client.stage_timestamps(&f.order_id);
    assert_eq!(timestamps.len(), 6);
    for i in 1..timestamps.len() {
        assert!(timestamps.get(i - 1).unwrap() <= timestamps.get(i).unwrap());
    }
}

#[test]
fn test_supplied_by_states() {
    let (env, client, f) = fixture();

    assert!(!client.is_supplied(&f.order_id, &f.material_1));
    assert_eq!(client.supplied_by(&f.order_id, &f.material_1), None);

    client.supply_raw_materials(&f.supplier, &f.order_id, &f.material_1);
    assert!(client.is_supplied(&f.order_id, &f.material_1));
    assert_eq!(client.supplied_by(&f.order_id, &f.material_1), Some(f.supplier_id));

    // Asking about a material the medicine does not require is a caller bug.
    let extra = client.add_raw_material(&f.owner, &String::from_str(&env, "Talc"), &false);
    let result = client.try_supplied_by(&f.order_id, &extra);
    assert_eq!(result, Err(Ok(ContractError::InvalidMaterial)));
    let result = client.try_is_supplied(&f.order_id, &extra);
    assert_eq!(result, Err(Ok(ContractError::InvalidMaterial)));
}

#[test]
fn test_order_suppliers_in_material_order() {
    let (env, client, f) = fixture();

    assert_eq!(client.order_suppliers(&f.order_id), vec![&env]);

    // Supplied out of order; the listing follows material ids.
    client.supply_raw_materials(&f.second_supplier, &f.order_id, &f.material_2);
    client.supply_raw_materials(&f.supplier, &f.order_id, &f.material_1);

    assert_eq!(
        client.order_suppliers(&f.order_id),
        vec![&env, f.supplier_id, f.second_supplier_id]
    );
}

#[test]
fn test_get_order_unknown_fails() {
    let (_env, client, _owner) = setup();

    assert_eq!(client.try_get_order(&9), Err(Ok(ContractError::NotFound)));
    assert_eq!(client.try_current_stage(&9), Err(Ok(ContractError::NotFound)));
    assert_eq!(client.try_stage_label(&9), Err(Ok(ContractError::NotFound)));
    assert_eq!(client.try_stage_timestamps(&9), Err(Ok(ContractError::NotFound)));
    assert_eq!(client.try_order_suppliers(&9), Err(Ok(ContractError::NotFound)));
}

#[test]
fn test_owner_queries_before_initialize() {
    let env = Env::default();
    env.mock_all_auths();
    let client = create_contract(&env);
    let anyone = Address::generate(&env);

    assert_eq!(client.try_owner(), Err(Ok(ContractError::NotInitialized)));
    assert_eq!(client.role_of(&anyone), None);
    assert!(!client.is_regulator(&anyone));
}
