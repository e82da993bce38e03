use hashchain::{Block, IntegrityError, Ledger};
use serde_json::json;

fn build_sample_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.append(Block::standalone(
        1,
        "2024-05-01T10:15:00Z".to_string(),
        json!({ "account": "alice", "amount": 25, "action": "buy" }),
    ));
    ledger.append(Block::standalone(
        2,
        "2024-05-02T11:30:00Z".to_string(),
        json!({ "account": "bob", "amount": 10, "action": "buy" }),
    ));
    ledger.append(Block::standalone(
        3,
        "2024-05-03T09:45:00Z".to_string(),
        json!({ "account": "carol", "amount": 20, "action": "sell" }),
    ));
    ledger.append(Block::standalone(
        4,
        "2024-05-04T16:05:00Z".to_string(),
        json!({ "account": "dave", "amount": 4, "action": "buy" }),
    ));
    ledger
}

#[test]
fn rewriting_one_payload_invalidates_the_whole_chain() {
    let mut ledger = build_sample_ledger();
    assert_eq!(ledger.chain.len(), 5);
    assert!(ledger.is_chain_valid());

    // Payload edit only; the stored hash stays as sealed at append time.
    ledger.chain[1].data = json!({ "account": "alice", "amount": 100, "action": "buy" });

    assert!(!ledger.is_chain_valid());
    assert_eq!(
        ledger.verify(),
        Err(IntegrityError::HashMismatch { position: 1 })
    );
}

#[test]
fn an_untouched_chain_keeps_validating() {
    let ledger = build_sample_ledger();
    for _ in 0..3 {
        assert!(ledger.is_chain_valid());
    }
}

#[test]
fn blocks_travel_independently_of_the_ledger() {
    let ledger = build_sample_ledger();

    // Linkage is by hash value, so a block serialized on its own still
    // carries everything needed to re-derive its digest.
    let wire = serde_json::to_string(&ledger.chain[2]).unwrap();
    let revived: Block = serde_json::from_str(&wire).unwrap();

    assert_eq!(revived, ledger.chain[2]);
    assert_eq!(revived.calculate_hash(), ledger.chain[2].hash);
}
