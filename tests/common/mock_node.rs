//! Stateless JSON-RPC node on httpmock. Every read returns the same figures
//! and every transaction is mined in block 16 under one hash.

use super::{block_json, receipt_json, DEPLOYER, POOL};
use aave_borrow::contracts::{
    AggregatorV3Interface, ILendingPool, ILendingPoolAddressesProvider, IWeth, IERC20,
};
use alloy::primitives::{b256, hex, utils::parse_ether, B256, U256};
use alloy::sol_types::SolCall;
use httpmock::prelude::*;
use serde_json::{json, Value};

pub const TX_HASH: B256 = b256!("5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060");
pub const MINED_IN: u64 = 16;

/// Selectors of every transaction a full run sends.
pub const WRITES: [[u8; 4]; 5] = [
    IWeth::depositCall::SELECTOR,
    IERC20::approveCall::SELECTOR,
    ILendingPool::depositCall::SELECTOR,
    ILendingPool::borrowCall::SELECTOR,
    ILendingPool::repayCall::SELECTOR,
];

pub fn words(values: &[U256]) -> String {
    let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_be_bytes::<32>()).collect();
    format!("0x{}", hex::encode(bytes))
}

pub fn result(value: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": 0, "result": value })
}

fn mock_method(server: &MockServer, method: &str, value: Value) {
    let needle = format!("\"method\":\"{}\"", method);
    server.mock(|when, then| {
        when.method(POST).body_contains(&needle);
        then.status(200).json_body(result(value));
    });
}

fn mock_read(server: &MockServer, selector: [u8; 4], output: String) {
    server.mock(|when, then| {
        when.method(POST)
            .body_contains("\"method\":\"eth_call\"")
            .body_contains(hex::encode(selector));
        then.status(200).json_body(result(json!(output)));
    });
}

/// Serve a node that answers a whole run. `reverting` writes fail with a
/// JSON-RPC error; `receipt_ok` sets the status of every mined receipt.
pub fn mock_node(server: &MockServer, reverting: &[[u8; 4]], receipt_ok: bool) {
    mock_method(server, "eth_accounts", json!([DEPLOYER]));
    mock_method(server, "eth_chainId", json!("0x1"));
    mock_method(server, "eth_blockNumber", json!(format!("0x{:x}", MINED_IN)));
    mock_method(server, "eth_getBlockByNumber", block_json(MINED_IN, &[TX_HASH]));
    mock_method(
        server,
        "eth_getTransactionReceipt",
        receipt_json(TX_HASH, MINED_IN, DEPLOYER, POOL, receipt_ok),
    );

    for selector in WRITES {
        let selector_hex = hex::encode(selector);
        let body = if reverting.contains(&selector) {
            json!({
                "jsonrpc": "2.0",
                "id": 0,
                "error": { "code": -32603, "message": "execution reverted" }
            })
        } else {
            result(json!(TX_HASH))
        };
        server.mock(|when, then| {
            when.method(POST)
                .body_contains("\"method\":\"eth_sendTransaction\"")
                .body_contains(&selector_hex);
            then.status(200).json_body(body);
        });
    }

    let collateral = parse_ether("0.02").unwrap();
    let price = U256::from(500_000_000_000_000u64);
    mock_read(server, IERC20::balanceOfCall::SELECTOR, words(&[collateral]));
    mock_read(
        server,
        ILendingPoolAddressesProvider::getLendingPoolCall::SELECTOR,
        words(&[U256::from_be_slice(POOL.as_slice())]),
    );
    mock_read(
        server,
        ILendingPool::getUserAccountDataCall::SELECTOR,
        words(&[
            collateral,
            U256::ZERO,
            parse_ether("0.016").unwrap(),
            U256::from(8_250),
            U256::from(8_000),
            U256::MAX,
        ]),
    );
    mock_read(
        server,
        AggregatorV3Interface::latestRoundDataCall::SELECTOR,
        words(&[
            U256::from(42),
            price,
            U256::from(1_700_000_000u64),
            U256::from(1_700_000_000u64),
            U256::from(42),
        ]),
    );
}
