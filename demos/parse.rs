use xid::{Xid, XidError};

fn main() {
    let inputs = ["9m4e2mr0ui3e8a215n4g", "invalid", "9M4E2MR0UI3E8A215N4G"];

    for input in inputs {
        match input.parse::<Xid>() {
            Ok(id) => println!(
                "{input}: time={} machine={:02x?} pid={:#06x} counter={}",
                id.time(),
                id.machine(),
                id.pid(),
                id.counter()
            ),
            Err(XidError::InvalidId(reason)) => println!("{input}: invalid ({reason})"),
            Err(e) => println!("{input}: {e}"),
        }
    }

    // Raw bytes round trip
    let id = xid::new();
    let raw = id.to_bytes();
    let back = xid::from_bytes(&raw).unwrap();
    assert_eq!(id, back);
    println!("\n{id} <-> {raw:02x?}");

    match xid::from_bytes(&raw[..5]) {
        Ok(_) => unreachable!(),
        Err(e) => println!("5 bytes: {e}"),
    }
}
