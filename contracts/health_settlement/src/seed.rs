//! Demo fixture: three hospitals in India with two doctors, two patients
//! and two reports each.

use crate::registry::{validate_doctor, validate_hospital, validate_patient, write_if_absent};
use crate::settlement::validate_report;
use crate::types::{Doctor, Hospital, LedgerRecord, Patient, Report};
use crate::ContractError;
use soroban_sdk::{Env, String};

const HOSPITAL_BALANCE: i128 = 100_000_000; // 1,000,000.00
const DOCTOR_BALANCE: i128 = 10_000_000; // 100,000.00
const PATIENT_BALANCE: i128 = 1_000_000; // 10,000.00

const HOSPITALS: [(&str, &str, &str); 3] = [
    ("H001", "HOSPITAL_1", "INDIA"),
    ("H002", "HOSPITAL_2", "INDIA"),
    ("H003", "HOSPITAL_3", "INDIA"),
];

// (doctor_id, name, hospital_id)
const DOCTORS: [(&str, &str, &str); 6] = [
    ("D001", "DOCTOR_1", "H001"),
    ("D002", "DOCTOR_2", "H001"),
    ("D003", "DOCTOR_3", "H002"),
    ("D004", "DOCTOR_4", "H002"),
    ("D005", "DOCTOR_5", "H003"),
    ("D006", "DOCTOR_6", "H003"),
];

// (patient_id, name, report_id, hospital_id)
const PATIENTS: [(&str, &str, &str, &str); 6] = [
    ("P001", "PATIENT_1", "R001", "H001"),
    ("P002", "PATIENT_2", "R002", "H001"),
    ("P003", "PATIENT_3", "R003", "H002"),
    ("P004", "PATIENT_4", "R004", "H002"),
    ("P005", "PATIENT_5", "R005", "H003"),
    ("P006", "PATIENT_6", "R006", "H003"),
];

// (report_id, patient_id, hospital_id, fee in minor units)
const REPORTS: [(&str, &str, &str, i128); 6] = [
    ("R001", "P001", "H001", 100_000),
    ("R002", "P002", "H001", 50_000),
    ("R003", "P003", "H002", 80_000),
    ("R004", "P004", "H002", 100_000),
    ("R005", "P005", "H003", 60_000),
    ("R006", "P006", "H003", 100_000),
];

/// Writes the fixture and returns the number of records written.
///
/// Reports are stored as-is; seeding does not move any funds.
pub fn init_ledger(env: &Env) -> Result<u32, ContractError> {
    let s = |v: &str| String::from_str(env, v);
    let mut written = 0u32;

    for (id, name, country) in HOSPITALS {
        let hospital = Hospital {
            hospital_id: s(id),
            name: s(name),
            country: s(country),
            balance: HOSPITAL_BALANCE,
        };
        validate_hospital(&hospital)?;
        write_if_absent(env, &LedgerRecord::Hospital(hospital))?;
        written += 1;
    }

    for (id, name, hospital_id) in DOCTORS {
        let doctor = Doctor {
            doctor_id: s(id),
            name: s(name),
            hospital_id: s(hospital_id),
            balance: DOCTOR_BALANCE,
        };
        validate_doctor(&doctor)?;
        write_if_absent(env, &LedgerRecord::Doctor(doctor))?;
        written += 1;
    }

    for (id, name, report_id, hospital_id) in PATIENTS {
        let patient = Patient {
            patient_id: s(id),
            name: s(name),
            report_id: s(report_id),
            hospital_id: s(hospital_id),
            balance: PATIENT_BALANCE,
        };
        validate_patient(&patient)?;
        write_if_absent(env, &LedgerRecord::Patient(patient))?;
        written += 1;
    }

    for (id, patient_id, hospital_id, fee) in REPORTS {
        let report = Report {
            report_id: s(id),
            patient_id: s(patient_id),
            hospital_id: s(hospital_id),
            fee,
        };
        validate_report(&report)?;
        write_if_absent(env, &LedgerRecord::Report(report))?;
        written += 1;
    }

    Ok(written)
}
