#![no_main]

use arbitrary::Arbitrary;
use health_settlement::{
    HealthSettlementContract, HealthSettlementContractClient, LedgerRecord,
};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{testutils::Address as _, Address, Env, String, Symbol, Vec};

const FUNCTIONS: [&str; 13] = [
    "initLedger",
    "queryAll",
    "query",
    "createHospital",
    "createDoctor",
    "createPatient",
    "createReport",
    "queryAllHospitals",
    "queryAllDoctors",
    "queryAllPatients",
    "queryAllReports",
    "transferPatient",
    "unknownCall",
];

#[derive(Arbitrary, Debug)]
pub struct FuzzCall {
    function: u8,
    args: std::vec::Vec<std::string::String>,
    as_admin: bool,
}

fuzz_target!(|calls: std::vec::Vec<FuzzCall>| {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(HealthSettlementContract, ());
    let client = HealthSettlementContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let stranger = Address::generate(&env);
    client.initialize(&admin);
    let _ = client.try_init_ledger(&admin);

    for call in calls.into_iter().take(32) {
        let name = FUNCTIONS[call.function as usize % FUNCTIONS.len()];
        let mut args = Vec::new(&env);
        for arg in call.args.iter().take(6) {
            let arg: std::string::String = arg.chars().take(48).collect();
            args.push_back(String::from_str(&env, &arg));
        }
        let caller = if call.as_admin { &admin } else { &stranger };

        let _ = client.try_invoke(caller, &Symbol::new(&env, name), &args);

        // Balances must never go negative whatever the call sequence.
        for patient in client.query_all_patients().iter() {
            assert!(patient.balance >= 0);
        }
        for entry in client.query_all().iter() {
            assert_eq!(entry.key, entry.record.key());
            if let LedgerRecord::Hospital(h) = entry.record {
                assert!(h.balance >= 0);
            }
        }
    }
});
