use crate::events;
use crate::ledger;
use crate::registry::write_if_absent;
use crate::types::{Hospital, LedgerRecord, Patient, RecordKind, Report};
use crate::validation::require_key;
use crate::validation::validate_amount;
use crate::ContractError;
use soroban_sdk::{Env, String};

pub fn load_patient(env: &Env, patient_id: &String) -> Result<Patient, ContractError> {
    match ledger::get_state(env, patient_id) {
        Some(LedgerRecord::Patient(patient)) => Ok(patient),
        _ => Err(ContractError::PatientNotFound),
    }
}

pub fn load_hospital(env: &Env, hospital_id: &String) -> Result<Hospital, ContractError> {
    match ledger::get_state(env, hospital_id) {
        Some(LedgerRecord::Hospital(hospital)) => Ok(hospital),
        _ => Err(ContractError::HospitalNotFound),
    }
}

pub fn validate_report(report: &Report) -> Result<(), ContractError> {
    require_key(&report.report_id, RecordKind::Report)?;
    require_key(&report.patient_id, RecordKind::Patient)?;
    require_key(&report.hospital_id, RecordKind::Hospital)?;
    validate_amount(report.fee)
}

/// Records a report and settles its fee from the patient to the hospital.
///
/// Every check runs before the first write: a rejected report leaves the
/// ledger untouched.
pub fn create_report(
    env: &Env,
    report_id: String,
    patient_id: String,
    hospital_id: String,
    fee: i128,
) -> Result<Report, ContractError> {
    let report = Report {
        report_id,
        patient_id,
        hospital_id,
        fee,
    };
    validate_report(&report)?;

    if ledger::has_state(env, &report.report_id) {
        return Err(ContractError::DuplicateRecord);
    }

    let mut patient = load_patient(env, &report.patient_id)?;
    let mut hospital = load_hospital(env, &report.hospital_id)?;

    if patient.balance < fee {
        return Err(ContractError::InsufficientFunds);
    }
    let hospital_balance = hospital
        .balance
        .checked_add(fee)
        .ok_or(ContractError::BalanceOverflow)?;

    patient.balance -= fee;
    hospital.balance = hospital_balance;

    write_if_absent(env, &LedgerRecord::Report(report.clone()))?;
    ledger::put_state(env, &LedgerRecord::Patient(patient.clone()));
    ledger::put_state(env, &LedgerRecord::Hospital(hospital.clone()));

    events::publish_report_created(
        env,
        report.report_id.clone(),
        report.patient_id.clone(),
        report.hospital_id.clone(),
        fee,
    );
    events::publish_fee_paid(
        env,
        report.report_id.clone(),
        patient.patient_id,
        hospital.hospital_id,
        fee,
        patient.balance,
        hospital.balance,
    );

    Ok(report)
}

/// Moves a patient to another hospital. Balances are not touched.
pub fn transfer_patient(
    env: &Env,
    patient_id: String,
    hospital_id: String,
) -> Result<Patient, ContractError> {
    require_key(&patient_id, RecordKind::Patient)?;
    require_key(&hospital_id, RecordKind::Hospital)?;

    let mut patient = load_patient(env, &patient_id)?;
    let from_hospital = patient.hospital_id.clone();
    patient.hospital_id = hospital_id.clone();
    ledger::put_state(env, &LedgerRecord::Patient(patient.clone()));

    events::publish_patient_transferred(env, patient_id, from_hospital, hospital_id);
    Ok(patient)
}
