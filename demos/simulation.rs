//! scripted walkthrough of the ring simulation:
//! - 10_000 pseudo random requests land on a 100_000 slot ring
//! - servers join one by one, then one leaves again
//! - after every change we print how many requests each server owns
//!   and the resulting load factor
//!
//! the request stream comes from a seeded rng, so every run prints
//! identical numbers

extern crate hashring_simulator;

use hashring_simulator::Ring;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() {
    let mut ring = Ring::new(100_000);

    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..10_000 {
        ring.add_request(&random_request(&mut rng));
    }

    println!("we have only 1 server right now");
    join(&mut ring, "eu-central");
    print_load(&ring);

    println!("================================================");
    println!("we have 2 servers now");
    join(&mut ring, "us-east");
    print_load(&ring);

    println!("================================================");
    println!("we have 3 servers now");
    join(&mut ring, "ap-south");
    print_load(&ring);

    println!("================================================");
    println!("we have 2 servers now");
    ring.remove_server("eu-central");
    print_load(&ring);
}

fn join(ring: &mut Ring, server: &str) {
    if let Err(err) = ring.add_server(server) {
        eprintln!("could not join {server}: {err}");
    }
}

/// generate a request key like "req_mtogiqrc" from the shared rng
fn random_request(rng: &mut StdRng) -> String {
    let suffix: String = (0..8).map(|_| rng.random_range('a'..='z')).collect();

    format!("req_{suffix}")
}

fn print_load(ring: &Ring) {
    let load = ring.get_load();

    // sort for a stable print order, HashMap iteration would shuffle it
    let mut servers: Vec<_> = load.iter().collect();
    servers.sort();

    for (server, requests) in servers {
        println!("{server} owns {requests} requests");
    }

    println!("load factor: {:.3}", ring.load_factor());
}
