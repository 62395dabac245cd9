//! Random operation sequences against a shadow model of the balances.
//!
//! Invariants:
//! - Ledger balances always match the model after every operation.
//! - Total money across patients and hospitals never changes.
//! - A patient's balance never goes negative.

use health_settlement::{
    ContractError, HealthSettlementContract, HealthSettlementContractClient, LedgerRecord,
};
use proptest::prelude::*;
use proptest_derive::Arbitrary;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

const HOSPITALS: [&str; 3] = ["H001", "H002", "H003"];
const PATIENTS: [&str; 3] = ["P001", "P002", "P003"];
const START_BALANCE: i128 = 10_000;

#[derive(Arbitrary, Clone, Debug)]
enum Op {
    Report {
        #[proptest(strategy = "0usize..3")]
        patient: usize,
        #[proptest(strategy = "0usize..3")]
        hospital: usize,
        #[proptest(strategy = "0i128..6_000")]
        fee: i128,
    },
    Transfer {
        #[proptest(strategy = "0usize..3")]
        patient: usize,
        #[proptest(strategy = "0usize..3")]
        hospital: usize,
    },
}

struct Model {
    patients: [i128; 3],
    hospitals: [i128; 3],
    patient_hospital: [usize; 3],
}

fn setup() -> (Env, HealthSettlementContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(HealthSettlementContract, ());
    let client = HealthSettlementContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    let s = |v: &str| String::from_str(&env, v);
    for (i, id) in HOSPITALS.into_iter().enumerate() {
        client.create_hospital(&admin, &s(id), &s("HOSPITAL"), &s("INDIA"), &0);
        client.create_patient(
            &admin,
            &s(PATIENTS[i]),
            &s("PATIENT"),
            &s("R001"),
            &s(id),
            &START_BALANCE,
        );
    }

    (env, client, admin)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_operations_match_model(ops in proptest::collection::vec(any::<Op>(), 1..20)) {
        let (env, client, admin) = setup();
        let s = |v: &str| String::from_str(&env, v);
        let mut model = Model {
            patients: [START_BALANCE; 3],
            hospitals: [0; 3],
            patient_hospital: [0, 1, 2],
        };
        let mut next_report = 1u32;

        for op in ops {
            match op {
                Op::Report { patient, hospital, fee } => {
                    let report_id = format!("R{:03}", next_report + 100);
                    let result = client.try_create_report(
                        &admin,
                        &s(&report_id),
                        &s(PATIENTS[patient]),
                        &s(HOSPITALS[hospital]),
                        &fee,
                    );
                    if model.patients[patient] >= fee {
                        prop_assert!(result.is_ok());
                        model.patients[patient] -= fee;
                        model.hospitals[hospital] += fee;
                        next_report += 1;
                    } else {
                        prop_assert_eq!(result, Err(Ok(ContractError::InsufficientFunds)));
                    }
                }
                Op::Transfer { patient, hospital } => {
                    let moved = client.transfer_patient(
                        &admin,
                        &s(PATIENTS[patient]),
                        &s(HOSPITALS[hospital]),
                    );
                    prop_assert_eq!(moved.hospital_id, s(HOSPITALS[hospital]));
                    model.patient_hospital[patient] = hospital;
                }
            }

            for (i, id) in PATIENTS.into_iter().enumerate() {
                match client.query(&s(id)) {
                    LedgerRecord::Patient(p) => {
                        prop_assert!(p.balance >= 0);
                        prop_assert_eq!(p.balance, model.patients[i]);
                        prop_assert_eq!(p.hospital_id, s(HOSPITALS[model.patient_hospital[i]]));
                    }
                    other => prop_assert!(false, "unexpected record {:?}", other),
                }
            }
            let mut hospital_total = 0i128;
            for hospital in client.query_all_hospitals().iter() {
                hospital_total += hospital.balance;
            }
            let patient_total: i128 = model.patients.iter().sum();
            prop_assert_eq!(hospital_total + patient_total, START_BALANCE * 3);
        }
    }
}
