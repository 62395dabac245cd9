#![allow(deprecated)]

use soroban_sdk::{symbol_short, Address, Env, String};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

/// Fired when the demo fixture has been written.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerSeededEvent {
    pub records: u32,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HospitalCreatedEvent {
    pub hospital_id: String,
    pub country: String,
    pub balance: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoctorCreatedEvent {
    pub doctor_id: String,
    pub hospital_id: String,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientCreatedEvent {
    pub patient_id: String,
    pub hospital_id: String,
    pub balance: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportCreatedEvent {
    pub report_id: String,
    pub patient_id: String,
    pub hospital_id: String,
    pub fee: i128,
    pub timestamp: u64,
}

/// Fired when a report fee moves from a patient to a hospital.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeePaidEvent {
    pub report_id: String,
    pub patient_id: String,
    pub hospital_id: String,
    pub fee: i128,
    pub patient_balance: i128,
    pub hospital_balance: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientTransferredEvent {
    pub patient_id: String,
    pub from_hospital: String,
    pub to_hospital: String,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, admin: Address) {
    let data = InitializedEvent {
        admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((symbol_short!("INIT"),), data);
}

pub fn publish_ledger_seeded(env: &Env, records: u32) {
    let data = LedgerSeededEvent {
        records,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((symbol_short!("SEEDED"),), data);
}

pub fn publish_hospital_created(env: &Env, hospital_id: String, country: String, balance: i128) {
    let topics = (symbol_short!("HOSP_NEW"), hospital_id.clone());
    let data = HospitalCreatedEvent {
        hospital_id,
        country,
        balance,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_doctor_created(env: &Env, doctor_id: String, hospital_id: String) {
    let topics = (symbol_short!("DOC_NEW"), doctor_id.clone());
    let data = DoctorCreatedEvent {
        doctor_id,
        hospital_id,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_patient_created(env: &Env, patient_id: String, hospital_id: String, balance: i128) {
    let topics = (symbol_short!("PAT_NEW"), patient_id.clone());
    let data = PatientCreatedEvent {
        patient_id,
        hospital_id,
        balance,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_report_created(
    env: &Env,
    report_id: String,
    patient_id: String,
    hospital_id: String,
    fee: i128,
) {
    let topics = (
        symbol_short!("RPT_NEW"),
        patient_id.clone(),
        hospital_id.clone(),
    );
    let data = ReportCreatedEvent {
        report_id,
        patient_id,
        hospital_id,
        fee,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes the settlement leg of a report: the fee and both resulting balances.
pub fn publish_fee_paid(
    env: &Env,
    report_id: String,
    patient_id: String,
    hospital_id: String,
    fee: i128,
    patient_balance: i128,
    hospital_balance: i128,
) {
    let topics = (symbol_short!("FEE_PAID"), report_id.clone());
    let data = FeePaidEvent {
        report_id,
        patient_id,
        hospital_id,
        fee,
        patient_balance,
        hospital_balance,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_patient_transferred(
    env: &Env,
    patient_id: String,
    from_hospital: String,
    to_hospital: String,
) {
    let topics = (symbol_short!("PAT_XFER"), patient_id.clone());
    let data = PatientTransferredEvent {
        patient_id,
        from_hospital,
        to_hospital,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
