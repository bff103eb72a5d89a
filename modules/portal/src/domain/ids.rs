use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Numeric floor shared by every generator in the process, so tokens from
/// different collections created in the same millisecond never collide.
static LAST: AtomicI64 = AtomicI64::new(0);

/// Monotonic timestamp-based token generator.
///
/// Tokens look like `n1700000000000`: a single-char collection prefix and
/// the creation time in milliseconds. Two calls inside one millisecond
/// still produce strictly increasing tokens.
#[derive(Debug)]
pub struct IdGenerator {
    prefix: char,
}

impl IdGenerator {
    pub fn new(prefix: char) -> Self {
        Self { prefix }
    }

    pub fn next(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let mut prev = LAST.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(prev + 1);
            match LAST.compare_exchange_weak(prev, candidate, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return format!("{}{}", self.prefix, candidate),
                Err(actual) => prev = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_carry_the_prefix() {
        let ids = IdGenerator::new('n');
        assert!(ids.next().starts_with('n'));
    }

    #[test]
    fn generators_never_collide_across_collections() {
        let news = IdGenerator::new('n');
        let market = IdGenerator::new('m');
        let a: i64 = news.next()[1..].parse().expect("numeric token body");
        let b: i64 = market.next()[1..].parse().expect("numeric token body");
        assert_ne!(a, b);
    }

    #[test]
    fn tokens_are_strictly_increasing() {
        let ids = IdGenerator::new('m');
        let mut previous = 0i64;
        for _ in 0..1000 {
            let token = ids.next();
            let value: i64 = token[1..].parse().expect("numeric token body");
            assert!(value > previous, "token {token} did not increase");
            previous = value;
        }
    }
}
