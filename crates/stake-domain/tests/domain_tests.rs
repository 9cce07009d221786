use serde_json::json;
use stake_domain::{Address, ChainEnvironment, ChainError, ContractCall, FeeEstimate, StakingConfig, TokenAmount,
                   TxHash};

const TOKEN: &str = "0x00000000000000000000000000000000000000aa";
const STAKING: &str = "0x00000000000000000000000000000000000000bb";

#[test]
fn address_roundtrip_and_prefix_optional() {
    let a = Address::from_hex(TOKEN).expect("valid address");
    let b = Address::from_hex(TOKEN.trim_start_matches("0x")).expect("valid without prefix");
    assert_eq!(a, b);
    assert_eq!(a.to_string(), TOKEN);
}

#[test]
fn address_rejects_bad_length_and_content() {
    assert!(matches!(Address::from_hex("0x1234"), Err(ChainError::InvalidAddress(_))));
    assert!(matches!(Address::from_hex("0xzz000000000000000000000000000000000000aa"),
                     Err(ChainError::InvalidAddress(_))));
}

#[test]
fn tx_hash_roundtrip() {
    let h = TxHash::from_bytes([7u8; 32]);
    let parsed = TxHash::from_hex(&h.to_string()).expect("roundtrip");
    assert_eq!(h, parsed);
}

#[test]
fn token_amount_checked_arithmetic() {
    let max = TokenAmount(u128::MAX);
    assert_eq!(max.checked_add(TokenAmount(1)), None);
    assert_eq!(TokenAmount(2).checked_mul(3), Some(TokenAmount(6)));
    assert!(TokenAmount::ZERO.is_zero());
}

#[test]
fn fee_estimate_total_saturates() {
    let fee = FeeEstimate { gas: 21_000, gas_price: 5 };
    assert_eq!(fee.total(), 105_000);
    let huge = FeeEstimate { gas: u64::MAX, gas_price: u128::MAX };
    assert_eq!(huge.total(), u128::MAX);
}

#[test]
fn staking_config_from_hex() {
    let cfg = StakingConfig::from_hex(ChainEnvironment::Testnet, TOKEN, STAKING).expect("config");
    assert_eq!(cfg.token_contract.to_string(), TOKEN);
    assert_eq!(cfg.staking_contract.to_string(), STAKING);
}

#[test]
fn contract_call_serializes_args_as_given() {
    let call = ContractCall::new(Address::from_hex(STAKING).unwrap(), "registerNode", vec![json!("node-key"), json!(100)]);
    let v = serde_json::to_value(&call).expect("serialize");
    assert_eq!(v["function"], "registerNode");
    assert_eq!(v["args"][1], 100);
}
