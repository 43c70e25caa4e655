use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use rand::Rng;

// Millisecond timestamps alone collide when ids are minted in a tight loop;
// the counter keeps ids distinct within the same tick.
static SEQ: AtomicU64 = AtomicU64::new(0);

fn next_seq() -> u64 {
    SEQ.fetch_add(1, Ordering::Relaxed)
}

/// Session-scoped id for a new week, e.g. `week-1714410000123-7`.
pub fn week_id() -> String {
    format!("week-{}-{}", Utc::now().timestamp_millis(), next_seq())
}

/// Session-scoped id for a new topic, e.g. `topic-1714410000123-8`.
pub fn topic_id() -> String {
    format!("topic-{}-{}", Utc::now().timestamp_millis(), next_seq())
}

/// Memorable class join code in the form `xxx-NNNN`: three lowercase letters,
/// a dash, four digits.
pub fn memorable_id() -> String {
    let mut rng = rand::thread_rng();
    let alpha: String = (0..3).map(|_| rng.gen_range(b'a'..=b'z') as char).collect();
    let numeric = rng.gen_range(1000..10000);
    format!("{}-{}", alpha, numeric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn week_ids_are_unique_in_a_tight_loop() {
        let ids: HashSet<String> = (0..1000).map(|_| week_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn memorable_id_shape() {
        for _ in 0..100 {
            let id = memorable_id();
            let (alpha, numeric) = id.split_once('-').expect("dash separator");
            assert_eq!(alpha.len(), 3);
            assert!(alpha.chars().all(|c| c.is_ascii_lowercase()));
            assert_eq!(numeric.len(), 4);
            assert!(numeric.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
