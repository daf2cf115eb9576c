//! A simple de-duplication example.
//!
//! In this example, there are several threads:
//! -   Each Producer thread generates a stream of user IDs, with plenty of repeats, and records each in a shared
//!     `HashSet`.
//! -   Once all Producers are done, the main thread reports the distinct IDs seen.
//!
//! The `HashSet` has no internal synchronization, hence it is wrapped in a `Mutex`.
//!
//! Run with `RUST_LOG=debug` to see the set growing.

extern crate chained;
extern crate crossbeam_utils;
extern crate env_logger;

use std::sync::Mutex;

use chained::hashset::HashSet;

const NUMBER_PRODUCERS: usize = 4;
const NUMBER_MESSAGES_PER_PRODUCER: usize = 1_000;
const NUMBER_USERS: usize = 250;

fn main() {
    env_logger::init();

    let seen: Mutex<HashSet<String>> = Mutex::new(HashSet::new());

    crossbeam_utils::thread::scope(|scope| {
        for producer in 0..NUMBER_PRODUCERS {
            let seen = &seen;

            scope.spawn(move |_| {
                let mut fresh = 0;

                for message in 0..NUMBER_MESSAGES_PER_PRODUCER {
                    //  "Randomly" pick a user.
                    let user = (producer * 7 + message * 13) % NUMBER_USERS;
                    let user = format!("user-{}", user);

                    if seen.lock().unwrap().insert(user) {
                        fresh += 1;
                    }
                }

                println!("Producer {} - {} fresh users", producer, fresh);
            });
        }
    })
    .unwrap();

    let seen = seen.into_inner().unwrap();

    println!(
        "Main - {} distinct users, over {} buckets (load factor {:.2})",
        seen.len(),
        seen.capacity(),
        seen.load_factor()
    );

    assert_eq!(NUMBER_USERS, seen.len());

    let mut users: Vec<_> = seen.into_iter().collect();
    users.sort();

    println!("Main - first users: {:?}", &users[..5]);
}
