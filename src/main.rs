use lrucache::db::LruCache;
use lrucache::error::DatabaseError;
use std::process;
use tracing::{error, info, Level};

const DEFAULT_CAPACITY: usize = 2;

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let capacity = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(capacity) => capacity,
            Err(e) => {
                error!("invalid capacity {:?}: {}", arg, e);
                process::exit(2);
            }
        },
        None => DEFAULT_CAPACITY,
    };

    if let Err(e) = run(capacity) {
        error!("{}", e);
        process::exit(1);
    }
}

/// run replays the classic get/put sequence and prints what each get returns.
fn run(capacity: usize) -> Result<(), DatabaseError> {
    let mut cache = LruCache::new(capacity)?;
    info!(?cache, "cache ready");

    cache.put(1, 1);
    cache.put(2, 2);
    print_get(&mut cache, 1);
    cache.put(3, 3);
    print_get(&mut cache, 2);
    cache.put(4, 4);
    print_get(&mut cache, 1);
    print_get(&mut cache, 3);
    print_get(&mut cache, 4);

    let mut cache = LruCache::new(capacity)?;
    cache.put(2, 1);
    cache.put(2, 2);
    print_get(&mut cache, 2);
    Ok(())
}

fn print_get(cache: &mut LruCache<i64, i64>, key: i64) {
    match cache.get(&key) {
        Some(value) => println!("get({}) = {}", key, value),
        None => println!("get({}) = not found", key),
    }
}
