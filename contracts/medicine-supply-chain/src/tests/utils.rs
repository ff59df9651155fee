use soroban_sdk::{
    testutils::{Address as _, Ledger},
    vec, Address, Env, String,
};

use crate::roles::Role;
use crate::{MedicineSupplyChain, MedicineSupplyChainClient};

pub const BASE_TIMESTAMP: u64 = 1_700_000_000;

/// Register the contract without initializing it.
pub fn create_contract(env: &Env) -> MedicineSupplyChainClient {
    MedicineSupplyChainClient::new(env, &env.register(MedicineSupplyChain, ()))
}

/// Env with mocked auth, a nonzero ledger time, and an initialized contract.
pub fn setup() -> (Env, MedicineSupplyChainClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(BASE_TIMESTAMP);
    let contract_id = env.register(MedicineSupplyChain, ());
    let client = MedicineSupplyChainClient::new(&env, &contract_id);
    let owner = Address::generate(&env);
    client.initialize(&owner);
    (env, client, owner)
}

/// Register a participant and hand back its account and id.
pub fn register_role(
    env: &Env,
    client: &MedicineSupplyChainClient,
    caller: &Address,
    role: Role,
    name: &str,
    contact: &str,
) -> (Address, u32) {
    let account = Address::generate(env);
    let id = client.register(
        caller,
        &role,
        &account,
        &String::from_str(env, name),
        &String::from_str(env, contact),
        &None,
    );
    (account, id)
}

/// A fully populated chain: one participant per role (plus a second
/// supplier and retailer for contention tests), a two-material medicine,
/// and one open order for it.
pub struct Fixture {
    pub owner: Address,
    pub supplier: Address,
    pub supplier_id: u32,
    pub second_supplier: Address,
    pub second_supplier_id: u32,
    pub manufacturer: Address,
    pub manufacturer_id: u32,
    pub distributor: Address,
    pub distributor_id: u32,
    pub retailer: Address,
    pub retailer_id: u32,
    pub second_retailer: Address,
    pub second_retailer_id: u32,
    pub customer: Address,
    pub customer_id: u32,
    pub material_1: u32,
    pub material_2: u32,
    pub medicine_id: u32,
    pub order_id: u32,
}

pub fn fixture() -> (Env, MedicineSupplyChainClient<'static>, Fixture) {
    let (env, client, owner) = setup();

    let (supplier, supplier_id) = register_role(
        &env,
        &client,
        &owner,
        Role::RawMaterialSupplier,
        "Apex Chemicals",
        "Pune",
    );
    let (second_supplier, second_supplier_id) = register_role(
        &env,
        &client,
        &owner,
        Role::RawMaterialSupplier,
        "Borchem Labs",
        "Goa",
    );
    let (manufacturer, manufacturer_id) = register_role(
        &env,
        &client,
        &owner,
        Role::Manufacturer,
        "Cantor Pharma",
        "Mumbai",
    );
    let (distributor, distributor_id) = register_role(
        &env,
        &client,
        &owner,
        Role::Distributor,
        "Deccan Logistics",
        "Nagpur",
    );
    let (retailer, retailer_id) = register_role(
        &env,
        &client,
        &owner,
        Role::Retailer,
        "Evercare Pharmacy",
        "Delhi",
    );
    let (second_retailer, second_retailer_id) = register_role(
        &env,
        &client,
        &owner,
        Role::Retailer,
        "Family Chemists",
        "Jaipur",
    );
    let (customer, customer_id) = register_role(
        &env,
        &client,
        &owner,
        Role::Customer,
        "Asha Rao",
        "asha@example.com",
    );

    let material_1 = client.add_raw_material(&owner, &String::from_str(&env, "Paracetamol API"), &false);
    let material_2 = client.add_raw_material(&owner, &String::from_str(&env, "Starch Binder"), &false);
    let medicine_id = client.add_medicine(
        &owner,
        &String::from_str(&env, "Paracetamol 500mg"),
        &String::from_str(&env, "Analgesic tablet"),
        &vec![&env, material_1, material_2],
        &false,
    );
    let order_id = client.add_order(&customer, &medicine_id);

    let f = Fixture {
        owner,
        supplier,
        supplier_id,
        second_supplier,
        second_supplier_id,
        manufacturer,
        manufacturer_id,
        distributor,
        distributor_id,
        retailer,
        retailer_id,
        second_retailer,
        second_retailer_id,
        customer,
        customer_id,
        material_1,
        material_2,
        medicine_id,
        order_id,
    };
    (env, client, f)
}

/// Fill both material slots of the fixture order.
pub fn supply_all(client: &MedicineSupplyChainClient, f: &Fixture) {
    client.supply_raw_materials(&f.supplier, &f.order_id, &f.material_1);
    client.supply_raw_materials(&f.second_supplier, &f.order_id, &f.material_2);
}

/// Walk the fixture order up to the retail stage.
pub fn advance_to_retailed(client: &MedicineSupplyChainClient, f: &Fixture) {
    supply_all(client, f);
    client.manufacture(&f.manufacturer, &f.order_id);
    client.distribute(&f.distributor, &f.order_id);
    client.retail(&f.retailer, &f.order_id);
}
