use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization errors
    AccessDenied = 3,

    // Lookup errors
    NotFound = 4,

    // Registry errors
    ValidationError = 5,
    DuplicateIdentity = 6,

    // Custody errors
    InvalidStage = 7,
    AlreadySupplied = 8,
    InvalidMaterial = 9,
}
