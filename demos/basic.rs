//! basic example to showcase the main functions of Ring

extern crate hashring_simulator;

use hashring_simulator::Ring;

fn main() {
    let mut ring = Ring::new(10_000);

    for x in 0..1_000 {
        ring.add_request(&format!("req_{x}"));
    }

    ring.add_server("alpha").expect("ring has free slots");
    ring.add_server("beta").expect("ring has free slots");

    // return the total number of requests each server owns
    println!("load per server: {:?}", ring.get_load());

    // ratio of the most loaded server to the average
    println!("load factor: {:.3}", ring.load_factor());

    // a leaving server hands its arcs to the remaining members
    ring.remove_server("alpha");
    println!("after alpha left: {:?}", ring.get_load());
}
