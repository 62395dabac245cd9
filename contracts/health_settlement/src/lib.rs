#![no_std]

pub mod dispatch;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod registry;
pub mod seed;
pub mod settlement;
pub mod types;
pub mod validation;


use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol, Vec};

pub use errors::{ContractError, ErrorCategory, ErrorSeverity};
pub use types::{
    Doctor, Hospital, InvokeResponse, LedgerEntry, LedgerRecord, Patient, RecordKind, Report,
};

/// Storage keys
const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");

/// TTL constants for instance storage (in ledgers)
const TTL_THRESHOLD: u32 = 17_280; // ~1 day
const TTL_EXTEND_TO: u32 = 518_400; // ~30 days

pub(crate) fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let admin: Address = env
        .storage()
        .instance()
        .get(&ADMIN)
        .ok_or(ContractError::NotInitialized)?;
    caller.require_auth();
    if *caller != admin {
        return Err(ContractError::Unauthorized);
    }
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
    Ok(())
}

fn kind_records<T>(
    env: &Env,
    kind: RecordKind,
    pick: impl Fn(LedgerRecord) -> Option<T>,
) -> Vec<T>
where
    T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>
        + soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let mut out = Vec::new(env);
    for entry in ledger::state_by_kind(env, kind).iter() {
        if let Some(record) = pick(entry.record) {
            out.push_back(record);
        }
    }
    out
}

#[contract]
pub struct HealthSettlementContract;

#[contractimpl]
impl HealthSettlementContract {
    // ── Lifecycle ───────────────────────────────────────────────────────────

    /// Initialize the contract with an administrator. Writes no records.
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(errors::log_failure(
                &env,
                symbol_short!("INIT"),
                ContractError::AlreadyInitialized,
            ));
        }

        admin.require_auth();

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);
        env.storage()
            .instance()
            .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);

        events::publish_initialized(&env, admin);

        Ok(())
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    /// Write the demo fixture of hospitals, doctors, patients and reports.
    pub fn init_ledger(env: Env, caller: Address) -> Result<(), ContractError> {
        let result = require_admin(&env, &caller).and_then(|_| seed::init_ledger(&env));
        let written = result.map_err(|e| errors::log_failure(&env, symbol_short!("SEED"), e))?;
        events::publish_ledger_seeded(&env, written);
        Ok(())
    }

    // ── Registry ────────────────────────────────────────────────────────────

    pub fn create_hospital(
        env: Env,
        caller: Address,
        hospital_id: String,
        name: String,
        country: String,
        balance: i128,
    ) -> Result<Hospital, ContractError> {
        require_admin(&env, &caller)
            .and_then(|_| registry::create_hospital(&env, hospital_id, name, country, balance))
            .map_err(|e| errors::log_failure(&env, symbol_short!("CRT_HOSP"), e))
    }

    pub fn create_doctor(
        env: Env,
        caller: Address,
        doctor_id: String,
        name: String,
        hospital_id: String,
        balance: i128,
    ) -> Result<Doctor, ContractError> {
        require_admin(&env, &caller)
            .and_then(|_| registry::create_doctor(&env, doctor_id, name, hospital_id, balance))
            .map_err(|e| errors::log_failure(&env, symbol_short!("CRT_DOC"), e))
    }

    pub fn create_patient(
        env: Env,
        caller: Address,
        patient_id: String,
        name: String,
        report_id: String,
        hospital_id: String,
        balance: i128,
    ) -> Result<Patient, ContractError> {
        require_admin(&env, &caller)
            .and_then(|_| {
                registry::create_patient(&env, patient_id, name, report_id, hospital_id, balance)
            })
            .map_err(|e| errors::log_failure(&env, symbol_short!("CRT_PAT"), e))
    }

    // ── Settlement ──────────────────────────────────────────────────────────

    /// Create a report and move its fee from the patient to the hospital.
    /// Fails with `InsufficientFunds`, leaving balances unchanged, when the
    /// patient cannot cover the fee.
    pub fn create_report(
        env: Env,
        caller: Address,
        report_id: String,
        patient_id: String,
        hospital_id: String,
        fee: i128,
    ) -> Result<Report, ContractError> {
        require_admin(&env, &caller)
            .and_then(|_| settlement::create_report(&env, report_id, patient_id, hospital_id, fee))
            .map_err(|e| errors::log_failure(&env, symbol_short!("CRT_RPT"), e))
    }

    /// Point a patient at a different hospital.
    pub fn transfer_patient(
        env: Env,
        caller: Address,
        patient_id: String,
        hospital_id: String,
    ) -> Result<Patient, ContractError> {
        require_admin(&env, &caller)
            .and_then(|_| settlement::transfer_patient(&env, patient_id, hospital_id))
            .map_err(|e| errors::log_failure(&env, symbol_short!("XFER_PAT"), e))
    }

    // ── Queries ─────────────────────────────────────────────────────────────

    /// Get a single hospital, doctor, patient or report by key.
    pub fn query(env: Env, key: String) -> Result<LedgerRecord, ContractError> {
        ledger::get_state(&env, &key).ok_or(ContractError::RecordNotFound)
    }

    /// Every record on the ledger in ascending key order.
    pub fn query_all(env: Env) -> Vec<LedgerEntry> {
        let open = String::from_str(&env, "");
        ledger::state_by_range(&env, &open, &open)
    }

    /// Records with `start <= key < end`; an empty bound is open.
    pub fn query_range(env: Env, start: String, end: String) -> Vec<LedgerEntry> {
        ledger::state_by_range(&env, &start, &end)
    }

    pub fn query_all_hospitals(env: Env) -> Vec<Hospital> {
        kind_records(&env, RecordKind::Hospital, |record| match record {
            LedgerRecord::Hospital(h) => Some(h),
            _ => None,
        })
    }

    pub fn query_all_doctors(env: Env) -> Vec<Doctor> {
        kind_records(&env, RecordKind::Doctor, |record| match record {
            LedgerRecord::Doctor(d) => Some(d),
            _ => None,
        })
    }

    pub fn query_all_patients(env: Env) -> Vec<Patient> {
        kind_records(&env, RecordKind::Patient, |record| match record {
            LedgerRecord::Patient(p) => Some(p),
            _ => None,
        })
    }

    pub fn query_all_reports(env: Env) -> Vec<Report> {
        kind_records(&env, RecordKind::Report, |record| match record {
            LedgerRecord::Report(r) => Some(r),
            _ => None,
        })
    }

    // ── Gateway ─────────────────────────────────────────────────────────────

    /// Call any operation by name with positional string arguments, e.g.
    /// `createHospital ["H004", "HOSPITAL_4", "INDIA", "1000000.0"]`.
    pub fn invoke(
        env: Env,
        caller: Address,
        function: Symbol,
        args: Vec<String>,
    ) -> Result<InvokeResponse, ContractError> {
        dispatch::resolve(&env, &function)
            .and_then(|f| dispatch::invoke(&env, &caller, f, &args))
            .map_err(|e| errors::log_failure(&env, function, e))
    }
}
