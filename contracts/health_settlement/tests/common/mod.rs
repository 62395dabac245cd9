#![allow(dead_code)]

use health_settlement::{
    HealthSettlementContract, HealthSettlementContractClient, Hospital, LedgerRecord, Patient,
};
use soroban_sdk::{testutils::Address as _, Address, Env, String, Symbol, Vec};

pub struct TestContext {
    pub env: Env,
    pub client: HealthSettlementContractClient<'static>,
    pub admin: Address,
}

/// Creates a mocked Soroban environment, deploys the contract, and initializes admin.
pub fn setup_test_env() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(HealthSettlementContract, ());
    let client = HealthSettlementContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    TestContext { env, client, admin }
}

/// Same as [`setup_test_env`] with the demo fixture already written.
pub fn setup_seeded_env() -> TestContext {
    let ctx = setup_test_env();
    ctx.client.init_ledger(&ctx.admin);
    ctx
}

pub fn s(ctx: &TestContext, v: &str) -> String {
    String::from_str(&ctx.env, v)
}

pub fn args(ctx: &TestContext, values: &[&str]) -> Vec<String> {
    let mut out = Vec::new(&ctx.env);
    for v in values {
        out.push_back(String::from_str(&ctx.env, v));
    }
    out
}

pub fn function(ctx: &TestContext, name: &str) -> Symbol {
    Symbol::new(&ctx.env, name)
}

pub fn patient(ctx: &TestContext, id: &str) -> Patient {
    match ctx.client.query(&s(ctx, id)) {
        LedgerRecord::Patient(p) => p,
        other => panic!("{id} is not a patient: {other:?}"),
    }
}

pub fn hospital(ctx: &TestContext, id: &str) -> Hospital {
    match ctx.client.query(&s(ctx, id)) {
        LedgerRecord::Hospital(h) => h,
        other => panic!("{id} is not a hospital: {other:?}"),
    }
}

/// Creates an empty hospital and a patient registered there with `balance`.
pub fn create_pair(ctx: &TestContext, hospital_id: &str, patient_id: &str, balance: i128) {
    ctx.client.create_hospital(
        &ctx.admin,
        &s(ctx, hospital_id),
        &s(ctx, "TEST_HOSPITAL"),
        &s(ctx, "NEPAL"),
        &0,
    );
    ctx.client.create_patient(
        &ctx.admin,
        &s(ctx, patient_id),
        &s(ctx, "TEST_PATIENT"),
        &s(ctx, "R001"),
        &s(ctx, hospital_id),
        &balance,
    );
}
