use xid::Xid;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Generate some IDs from the process-wide generator
    let id1 = xid::new();
    let id2 = xid::new();
    let id3 = Xid::new();

    println!("Generated IDs (sortable as bytes and as text):");
    print_id(id1);
    print_id(id2);
    print_id(id3);

    // Or extract components individually
    println!("\nComponents of ID2 (extracted individually):");
    println!("  Time: {} s since epoch", id2.time());
    println!("  Machine: {:02x?}", id2.machine());
    println!("  Pid: {}", id2.pid());
    println!("  Counter: {}", id2.counter());
}

fn print_id(id: Xid) {
    let (time, machine, pid, counter) = id.decompose();
    println!(
        "  ID: {id}, Time: {time}, Human date: {}, Machine: {machine:02x?}, Pid: {pid}, Counter: {counter}",
        id.timestamp()
    );
}
