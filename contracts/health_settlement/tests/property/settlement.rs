//! Properties of report settlement.
//!
//! - A successful report moves exactly `fee` from patient to hospital, so the
//!   sum of the two balances is conserved.
//! - A fee above the patient's balance is always rejected and changes nothing.

use health_settlement::{
    ContractError, HealthSettlementContract, HealthSettlementContractClient, LedgerRecord,
};
use proptest::prelude::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

fn setup_pair(
    patient_balance: i128,
    hospital_balance: i128,
) -> (Env, HealthSettlementContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(HealthSettlementContract, ());
    let client = HealthSettlementContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    let s = |v: &str| String::from_str(&env, v);
    client.create_hospital(&admin, &s("H001"), &s("HOSPITAL_1"), &s("INDIA"), &hospital_balance);
    client.create_patient(
        &admin,
        &s("P001"),
        &s("PATIENT_1"),
        &s("R001"),
        &s("H001"),
        &patient_balance,
    );

    (env, client, admin)
}

fn balances(env: &Env, client: &HealthSettlementContractClient) -> (i128, i128) {
    let patient = match client.query(&String::from_str(env, "P001")) {
        LedgerRecord::Patient(p) => p.balance,
        other => panic!("unexpected record {other:?}"),
    };
    let hospital = match client.query(&String::from_str(env, "H001")) {
        LedgerRecord::Hospital(h) => h.balance,
        other => panic!("unexpected record {other:?}"),
    };
    (patient, hospital)
}

proptest! {
    #[test]
    fn prop_settlement_conserves_total(
        patient_balance in 0i128..1_000_000_000i128,
        hospital_balance in 0i128..1_000_000_000i128,
        fee_ratio in 0u32..=100u32,
    ) {
        let (env, client, admin) = setup_pair(patient_balance, hospital_balance);
        let fee = patient_balance * i128::from(fee_ratio) / 100;

        client.create_report(
            &admin,
            &String::from_str(&env, "R001"),
            &String::from_str(&env, "P001"),
            &String::from_str(&env, "H001"),
            &fee,
        );

        let (patient_after, hospital_after) = balances(&env, &client);
        prop_assert_eq!(patient_after, patient_balance - fee);
        prop_assert_eq!(hospital_after, hospital_balance + fee);
        prop_assert_eq!(patient_after + hospital_after, patient_balance + hospital_balance);
    }

    #[test]
    fn prop_fee_above_balance_rejected(
        patient_balance in 0i128..1_000_000_000i128,
        excess in 1i128..1_000_000i128,
    ) {
        let (env, client, admin) = setup_pair(patient_balance, 0);

        let result = client.try_create_report(
            &admin,
            &String::from_str(&env, "R001"),
            &String::from_str(&env, "P001"),
            &String::from_str(&env, "H001"),
            &(patient_balance + excess),
        );

        prop_assert_eq!(result, Err(Ok(ContractError::InsufficientFunds)));
        prop_assert_eq!(balances(&env, &client), (patient_balance, 0));
        prop_assert_eq!(client.query_all_reports().len(), 0);
    }
}
