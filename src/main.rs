use hashchain::{Block, Ledger};
use serde_json::json;

fn main() {
    env_logger::init();

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

    println!("{}", ledger);
    println!("Chain valid? {}", ledger.is_chain_valid());

    // Rewrite a stored payload behind the ledger's back; the stale digest
    // gives the edit away on the next verification walk.
    ledger.chain[1].data = json!({ "account": "alice", "amount": 100, "action": "buy" });

    println!("Chain valid? {}", ledger.is_chain_valid());
    if let Err(violation) = ledger.verify() {
        println!("Violation: {}", violation);
    }
}
