use soroban_sdk::{contracttype, String, Vec};

/// Record kinds stored on the ledger, one per key prefix.
///
/// Variant order follows the lexicographic order of the prefixes
/// (`D` < `H` < `P` < `R`), which is the order range scans walk them in.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecordKind {
    Doctor,
    Hospital,
    Patient,
    Report,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Doctor,
        RecordKind::Hospital,
        RecordKind::Patient,
        RecordKind::Report,
    ];

    /// Key prefix byte for this kind.
    pub fn prefix(&self) -> u8 {
        match self {
            RecordKind::Doctor => b'D',
            RecordKind::Hospital => b'H',
            RecordKind::Patient => b'P',
            RecordKind::Report => b'R',
        }
    }

    pub fn from_prefix(prefix: u8) -> Option<RecordKind> {
        match prefix {
            b'D' => Some(RecordKind::Doctor),
            b'H' => Some(RecordKind::Hospital),
            b'P' => Some(RecordKind::Patient),
            b'R' => Some(RecordKind::Report),
            _ => None,
        }
    }
}

/// A hospital account. Receives report fees.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Hospital {
    pub hospital_id: String,
    pub name: String,
    pub country: String,
    pub balance: i128,
}

/// A doctor attached to an owning hospital.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Doctor {
    pub doctor_id: String,
    pub name: String,
    pub hospital_id: String,
    pub balance: i128,
}

/// A patient with their current report and current hospital.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Patient {
    pub patient_id: String,
    pub name: String,
    pub report_id: String,
    pub hospital_id: String,
    pub balance: i128,
}

/// A medical report. Creating one settles `fee` from patient to hospital.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    pub report_id: String,
    pub patient_id: String,
    pub hospital_id: String,
    pub fee: i128,
}

/// Value stored under a ledger key.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LedgerRecord {
    Hospital(Hospital),
    Doctor(Doctor),
    Patient(Patient),
    Report(Report),
}

impl LedgerRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            LedgerRecord::Hospital(_) => RecordKind::Hospital,
            LedgerRecord::Doctor(_) => RecordKind::Doctor,
            LedgerRecord::Patient(_) => RecordKind::Patient,
            LedgerRecord::Report(_) => RecordKind::Report,
        }
    }

    /// The id the record is stored under.
    pub fn key(&self) -> String {
        match self {
            LedgerRecord::Hospital(h) => h.hospital_id.clone(),
            LedgerRecord::Doctor(d) => d.doctor_id.clone(),
            LedgerRecord::Patient(p) => p.patient_id.clone(),
            LedgerRecord::Report(r) => r.report_id.clone(),
        }
    }
}

/// One row of a range scan: the key and the record stored under it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerEntry {
    pub key: String,
    pub record: LedgerRecord,
}

/// Result of a call through the string-argument gateway.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InvokeResponse {
    Empty,
    Record(LedgerRecord),
    Entries(Vec<LedgerEntry>),
}
