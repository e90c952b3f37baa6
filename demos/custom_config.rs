use std::sync::Arc;
use std::thread;

use xid::{Generator, GeneratorConfig};

fn main() {
    // Pin the machine id and pid, e.g. for a container whose host name is not stable
    let config = GeneratorConfig::builder()
        .machine_id([0x01, 0x02, 0x03])
        .process_id(4242)
        .counter_seed(0)
        .expect("seed fits in 24 bits")
        .build();

    let generator = Arc::new(Generator::with_config(config));

    println!("Generator configuration:");
    println!("  Machine id: {:02x?}", generator.machine_id());
    println!("  Process id: {}", generator.process_id());
    println!("  Counter seed: {}", generator.config().counter_seed());

    // One generator shared across threads
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let generator = Arc::clone(&generator);
            thread::spawn(move || {
                let id = generator.generate();
                println!("  worker {worker}: {id} (counter {})", id.counter());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
