//! Random sort workloads and their timings.

use std::fmt;
use std::time::{Duration, Instant};

use fracsort::{Rational, insertion_sort, insertion_sort_rationals};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::DemoConfig;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generator for the three list kinds, owning its own seeded RNG.
pub struct Workload {
    rng: StdRng,
}

impl Workload {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Integers in `0..100`.
    pub fn ints(&mut self, len: usize) -> Vec<i64> {
        (0..len).map(|_| self.rng.gen_range(0..100)).collect()
    }

    /// ASCII letter strings of length `string_len`.
    pub fn strings(&mut self, len: usize, string_len: usize) -> Vec<String> {
        (0..len)
            .map(|_| {
                (0..string_len)
                    .map(|_| LETTERS[self.rng.gen_range(0..LETTERS.len())] as char)
                    .collect()
            })
            .collect()
    }

    /// Rationals with numerator in `0..50` and denominator in `1..50`.
    pub fn rationals(&mut self, len: usize) -> Vec<Rational> {
        (0..len)
            .map(|_| {
                let num = self.rng.gen_range(0..50);
                let denom = self.rng.gen_range(1..50);
                Rational::new_unchecked(num, denom)
            })
            .collect()
    }
}

/// How long one sort took.
#[derive(Debug, Clone)]
pub struct Timing {
    pub label: &'static str,
    pub len: usize,
    pub elapsed: Duration,
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Sorting for the list of {} {} took {} microseconds to execute!",
            self.len,
            self.label,
            self.elapsed.as_micros()
        )
    }
}

/// Run `sort` over `items` once and measure it.
pub fn time_sort<T, F>(label: &'static str, items: &[T], sort: F) -> Timing
where
    F: FnOnce(&[T]) -> Vec<T>,
{
    let start = Instant::now();
    let sorted = sort(items);
    let elapsed = start.elapsed();

    tracing::debug!(label, len = sorted.len(), ?elapsed, "sorted");

    Timing {
        label,
        len: items.len(),
        elapsed,
    }
}

/// Generate and time the integer, string and rational workloads.
pub fn run_all(config: &DemoConfig) -> Vec<Timing> {
    let seed = config.seed_or_clock();
    tracing::debug!(seed, size = config.size, "generating workloads");

    let mut workload = Workload::new(seed);

    let ints = workload.ints(config.size);
    let strings = workload.strings(config.size, config.string_len);
    let rationals = workload.rationals(config.size);

    vec![
        time_sort("integers", &ints, insertion_sort),
        time_sort("strings", &strings, insertion_sort),
        time_sort("rational numbers", &rationals, insertion_sort_rationals),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_workload() {
        let mut a = Workload::new(42);
        let mut b = Workload::new(42);

        assert_eq!(a.ints(20), b.ints(20));
        assert_eq!(a.strings(5, 8), b.strings(5, 8));

        let ra: Vec<_> = a.rationals(10).iter().map(Rational::split).collect();
        let rb: Vec<_> = b.rationals(10).iter().map(Rational::split).collect();
        assert_eq!(ra, rb);
    }

    #[test]
    fn test_generated_ranges() {
        let mut workload = Workload::new(7);

        assert!(workload.ints(200).iter().all(|n| (0..100).contains(n)));

        let strings = workload.strings(50, 10);
        assert!(strings.iter().all(|s| s.len() == 10));
        assert!(strings.iter().all(|s| s.bytes().all(|b| b.is_ascii_alphabetic())));

        for r in workload.rationals(200) {
            assert!((0..50).contains(&r.numerator()));
            assert!((1..50).contains(&r.denominator()));
        }
    }

    #[test]
    fn test_run_all_reports_each_workload() {
        let config = DemoConfig {
            size: 25,
            seed: Some(1),
            ..DemoConfig::default()
        };
        let timings = run_all(&config);

        let labels: Vec<_> = timings.iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["integers", "strings", "rational numbers"]);
        assert!(timings.iter().all(|t| t.len == 25));
    }

    #[test]
    fn test_timing_display() {
        let timing = Timing {
            label: "integers",
            len: 3,
            elapsed: Duration::from_micros(12),
        };
        assert_eq!(
            timing.to_string(),
            "Sorting for the list of 3 integers took 12 microseconds to execute!"
        );
    }
}
