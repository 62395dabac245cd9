use soroban_sdk::{contracttype, log, Env, Symbol};

/// Error categories for classifying contract failures.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Malformed keys, amounts, text or gateway calls
    Validation = 1,
    /// Caller is not allowed to perform the operation
    Authorization = 2,
    /// Referenced record does not exist
    NotFound = 3,
    /// Ledger state prevents the operation (duplicates, funds)
    StateConflict = 4,
}

/// Error severity levels.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    Low = 1,
    Medium = 2,
    High = 3,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidKey = 4,
    InvalidAmount = 5,
    InvalidInput = 6,
    RecordNotFound = 7,
    DuplicateRecord = 8,
    PatientNotFound = 9,
    HospitalNotFound = 10,
    InsufficientFunds = 11,
    BalanceOverflow = 12,
    UnknownFunction = 13,
    IncorrectArgumentCount = 14,
}

impl ContractError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::InvalidKey
            | ContractError::InvalidAmount
            | ContractError::InvalidInput
            | ContractError::UnknownFunction
            | ContractError::IncorrectArgumentCount => ErrorCategory::Validation,
            ContractError::NotInitialized | ContractError::Unauthorized => {
                ErrorCategory::Authorization
            }
            ContractError::RecordNotFound
            | ContractError::PatientNotFound
            | ContractError::HospitalNotFound => ErrorCategory::NotFound,
            ContractError::AlreadyInitialized
            | ContractError::DuplicateRecord
            | ContractError::InsufficientFunds
            | ContractError::BalanceOverflow => ErrorCategory::StateConflict,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContractError::InvalidKey
            | ContractError::InvalidAmount
            | ContractError::InvalidInput
            | ContractError::UnknownFunction
            | ContractError::IncorrectArgumentCount
            | ContractError::RecordNotFound
            | ContractError::PatientNotFound
            | ContractError::HospitalNotFound
            | ContractError::DuplicateRecord => ErrorSeverity::Low,
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::Unauthorized
            | ContractError::InsufficientFunds => ErrorSeverity::Medium,
            ContractError::BalanceOverflow => ErrorSeverity::High,
        }
    }

    /// Human-readable description of the error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract is already initialized",
            ContractError::Unauthorized => "Caller is not authorized for this operation",
            ContractError::InvalidKey => "Key must be a type prefix followed by three digits",
            ContractError::InvalidAmount => "Amount is malformed or negative",
            ContractError::InvalidInput => "Invalid input parameters provided",
            ContractError::RecordNotFound => "No record stored under this key",
            ContractError::DuplicateRecord => "A record with this key already exists",
            ContractError::PatientNotFound => "Patient not found on the ledger",
            ContractError::HospitalNotFound => "Hospital not found on the ledger",
            ContractError::InsufficientFunds => "Insufficient funds in patient account",
            ContractError::BalanceOverflow => "Balance update overflows",
            ContractError::UnknownFunction => "Invalid smart contract function name",
            ContractError::IncorrectArgumentCount => "Incorrect number of arguments",
        }
    }
}

/// Writes a failed operation to the diagnostic log and hands the error back.
///
/// A failed invocation rolls back storage and events, so the diagnostic log
/// is the only trace that survives it.
pub fn log_failure(env: &Env, operation: Symbol, error: ContractError) -> ContractError {
    log!(
        env,
        "operation {} failed: error {} category {}",
        operation,
        error as u32,
        error.category() as u32
    );
    error
}
