//! String-argument gateway: routes a function name plus positional text
//! arguments to the same handlers the typed entry points use.

use crate::events;
use crate::ledger;
use crate::registry;
use crate::seed;
use crate::settlement;
use crate::types::{InvokeResponse, LedgerRecord, RecordKind};
use crate::validation::{parse_amount, require_arity};
use crate::{require_admin, ContractError};
use soroban_sdk::{Address, Env, String, Symbol, Vec};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Function {
    InitLedger,
    QueryAll,
    Query,
    CreateHospital,
    CreateDoctor,
    CreatePatient,
    CreateReport,
    QueryAllHospitals,
    QueryAllDoctors,
    QueryAllPatients,
    QueryAllReports,
    TransferPatient,
}

const FUNCTIONS: [(&str, Function); 12] = [
    ("initLedger", Function::InitLedger),
    ("queryAll", Function::QueryAll),
    ("query", Function::Query),
    ("createHospital", Function::CreateHospital),
    ("createDoctor", Function::CreateDoctor),
    ("createPatient", Function::CreatePatient),
    ("createReport", Function::CreateReport),
    ("queryAllHospitals", Function::QueryAllHospitals),
    ("queryAllDoctors", Function::QueryAllDoctors),
    ("queryAllPatients", Function::QueryAllPatients),
    ("queryAllReports", Function::QueryAllReports),
    ("transferPatient", Function::TransferPatient),
];

pub fn resolve(env: &Env, function: &Symbol) -> Result<Function, ContractError> {
    FUNCTIONS
        .iter()
        .find(|(name, _)| Symbol::new(env, name) == *function)
        .map(|(_, f)| *f)
        .ok_or(ContractError::UnknownFunction)
}

impl Function {
    /// Whether the function writes to the ledger and needs the admin.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Function::InitLedger
                | Function::CreateHospital
                | Function::CreateDoctor
                | Function::CreatePatient
                | Function::CreateReport
                | Function::TransferPatient
        )
    }
}

// Callers check arity first, so every index below is in bounds.
fn arg(args: &Vec<String>, i: u32) -> Result<String, ContractError> {
    args.get(i).ok_or(ContractError::IncorrectArgumentCount)
}

pub fn invoke(
    env: &Env,
    caller: &Address,
    function: Function,
    args: &Vec<String>,
) -> Result<InvokeResponse, ContractError> {
    if function.is_mutating() {
        require_admin(env, caller)?;
    }

    match function {
        Function::InitLedger => {
            let written = seed::init_ledger(env)?;
            events::publish_ledger_seeded(env, written);
            Ok(InvokeResponse::Empty)
        }
        Function::QueryAll => {
            require_arity(args, 1)?;
            let open = String::from_str(env, "");
            Ok(InvokeResponse::Entries(ledger::state_by_range(
                env, &open, &open,
            )))
        }
        Function::Query => {
            require_arity(args, 1)?;
            ledger::get_state(env, &arg(args, 0)?)
                .map(InvokeResponse::Record)
                .ok_or(ContractError::RecordNotFound)
        }
        Function::CreateHospital => {
            require_arity(args, 4)?;
            let hospital = registry::create_hospital(
                env,
                arg(args, 0)?,
                arg(args, 1)?,
                arg(args, 2)?,
                parse_amount(&arg(args, 3)?)?,
            )?;
            Ok(InvokeResponse::Record(LedgerRecord::Hospital(hospital)))
        }
        Function::CreateDoctor => {
            require_arity(args, 4)?;
            let doctor = registry::create_doctor(
                env,
                arg(args, 0)?,
                arg(args, 1)?,
                arg(args, 2)?,
                parse_amount(&arg(args, 3)?)?,
            )?;
            Ok(InvokeResponse::Record(LedgerRecord::Doctor(doctor)))
        }
        Function::CreatePatient => {
            require_arity(args, 5)?;
            let patient = registry::create_patient(
                env,
                arg(args, 0)?,
                arg(args, 1)?,
                arg(args, 2)?,
                arg(args, 3)?,
                parse_amount(&arg(args, 4)?)?,
            )?;
            Ok(InvokeResponse::Record(LedgerRecord::Patient(patient)))
        }
        Function::CreateReport => {
            require_arity(args, 4)?;
            let report = settlement::create_report(
                env,
                arg(args, 0)?,
                arg(args, 1)?,
                arg(args, 2)?,
                parse_amount(&arg(args, 3)?)?,
            )?;
            Ok(InvokeResponse::Record(LedgerRecord::Report(report)))
        }
        Function::QueryAllHospitals => Ok(entries(env, RecordKind::Hospital)),
        Function::QueryAllDoctors => Ok(entries(env, RecordKind::Doctor)),
        Function::QueryAllPatients => Ok(entries(env, RecordKind::Patient)),
        Function::QueryAllReports => Ok(entries(env, RecordKind::Report)),
        Function::TransferPatient => {
            require_arity(args, 2)?;
            let patient = settlement::transfer_patient(env, arg(args, 0)?, arg(args, 1)?)?;
            Ok(InvokeResponse::Record(LedgerRecord::Patient(patient)))
        }
    }
}

fn entries(env: &Env, kind: RecordKind) -> InvokeResponse {
    InvokeResponse::Entries(ledger::state_by_kind(env, kind))
}
