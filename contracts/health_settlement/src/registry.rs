use crate::events;
use crate::ledger;
use crate::types::{Doctor, Hospital, LedgerRecord, Patient, RecordKind};
use crate::validation::{require_key, validate_amount, validate_text};
use crate::ContractError;
use soroban_sdk::{Env, String};

/// Stores `record` unless its key is already taken.
pub fn write_if_absent(env: &Env, record: &LedgerRecord) -> Result<(), ContractError> {
    if ledger::has_state(env, &record.key()) {
        return Err(ContractError::DuplicateRecord);
    }
    ledger::put_state(env, record);
    Ok(())
}

pub fn validate_hospital(hospital: &Hospital) -> Result<(), ContractError> {
    require_key(&hospital.hospital_id, RecordKind::Hospital)?;
    validate_text(&hospital.name)?;
    validate_text(&hospital.country)?;
    validate_amount(hospital.balance)
}

pub fn validate_doctor(doctor: &Doctor) -> Result<(), ContractError> {
    require_key(&doctor.doctor_id, RecordKind::Doctor)?;
    validate_text(&doctor.name)?;
    require_key(&doctor.hospital_id, RecordKind::Hospital)?;
    validate_amount(doctor.balance)
}

pub fn validate_patient(patient: &Patient) -> Result<(), ContractError> {
    require_key(&patient.patient_id, RecordKind::Patient)?;
    validate_text(&patient.name)?;
    require_key(&patient.report_id, RecordKind::Report)?;
    require_key(&patient.hospital_id, RecordKind::Hospital)?;
    validate_amount(patient.balance)
}

pub fn create_hospital(
    env: &Env,
    hospital_id: String,
    name: String,
    country: String,
    balance: i128,
) -> Result<Hospital, ContractError> {
    let hospital = Hospital {
        hospital_id,
        name,
        country,
        balance,
    };
    validate_hospital(&hospital)?;
    write_if_absent(env, &LedgerRecord::Hospital(hospital.clone()))?;

    events::publish_hospital_created(
        env,
        hospital.hospital_id.clone(),
        hospital.country.clone(),
        hospital.balance,
    );
    Ok(hospital)
}

pub fn create_doctor(
    env: &Env,
    doctor_id: String,
    name: String,
    hospital_id: String,
    balance: i128,
) -> Result<Doctor, ContractError> {
    let doctor = Doctor {
        doctor_id,
        name,
        hospital_id,
        balance,
    };
    validate_doctor(&doctor)?;
    write_if_absent(env, &LedgerRecord::Doctor(doctor.clone()))?;

    events::publish_doctor_created(env, doctor.doctor_id.clone(), doctor.hospital_id.clone());
    Ok(doctor)
}

pub fn create_patient(
    env: &Env,
    patient_id: String,
    name: String,
    report_id: String,
    hospital_id: String,
    balance: i128,
) -> Result<Patient, ContractError> {
    let patient = Patient {
        patient_id,
        name,
        report_id,
        hospital_id,
        balance,
    };
    validate_patient(&patient)?;
    write_if_absent(env, &LedgerRecord::Patient(patient.clone()))?;

    events::publish_patient_created(
        env,
        patient.patient_id.clone(),
        patient.hospital_id.clone(),
        patient.balance,
    );
    Ok(patient)
}
