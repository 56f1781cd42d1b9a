//! Weighted dispatch across a pool of backends.
//!
//! Four worker threads share one scheduler and pull backends from it. Each
//! backend ends up with exactly its share of requests, and the printed prefix
//! shows the smooth interleaving.

use std::sync::atomic::{AtomicUsize, Ordering};

use junban::{Weighted, Wrr};

#[derive(Debug)]
struct Backend {
    name: &'static str,
    share: i64,
    served: AtomicUsize,
}

impl Weighted for Backend {
    fn weight(&self) -> i64 {
        self.share
    }
}

fn backend(name: &'static str, share: i64) -> Backend {
    Backend {
        name,
        share,
        served: AtomicUsize::new(0),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pool = Wrr::from_vec(vec![
        backend("primary", 50),
        backend("secondary", 30),
        backend("canary", 20),
    ])?;

    println!(
        "cycle length {} (weights reduced by {})",
        pool.cycle_len(),
        pool.compiled().gcd()
    );
    let prefix: Vec<&str> = pool.cycle().iter().map(|&i| pool.slots()[i as usize].name).collect();
    println!("one cycle: {}", prefix.join(" "));

    let workers = 4;
    let requests_per_worker = 2_500;
    std::thread::scope(|s| {
        for _ in 0..workers {
            s.spawn(|| {
                for _ in 0..requests_per_worker {
                    pool.next().served.fetch_add(1, Ordering::Relaxed);
                }
            });
        }
    });

    let total = workers * requests_per_worker;
    println!();
    println!("{total} requests:");
    for b in pool.slots() {
        let served = b.served.load(Ordering::Relaxed);
        println!(
            "  {:10} weight {:3}  served {:5} ({:.1}%)",
            b.name,
            b.share,
            served,
            100.0 * served as f64 / total as f64
        );
    }

    Ok(())
}
