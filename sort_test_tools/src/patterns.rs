//! Seeded input generators for the sort tests and the benchmarks.
//!
//! Every generator draws from one seed per process, printed by the tests, so a failing input can
//! be rebuilt with `OVERRIDE_SEED=<seed>`. Generators fall in two groups: the comparison sort
//! inputs span all of `i32`, the counting sort inputs only produce valid keys, which means values
//! in `0..range` or, for the shape generators, in `0..len`.

use std::env;
use std::sync::Mutex;

use rand::distributions::{Distribution, Standard, Uniform};
use rand::prelude::*;

use zipf::ZipfDistribution;

// --- Comparison sort inputs ---

/// Uniformly random over all of `i32`, negative values included.
pub fn random(len: usize) -> Vec<i32> {
    sample_vec(len, Standard)
}

/// `random` with its first `sorted_percent` percent already ascending.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[..sorted_len.min(len)].sort_unstable();

    v
}

/// Random runs of `len / saw_count` elements, each run either ascending or descending.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut v = random(len);
    let run_len = (len / saw_count.max(1)).max(1);
    let run_ascends = random_uniform((len / run_len) + 1, 0..=1);

    for (run, ascends) in v.chunks_mut(run_len).zip(run_ascends) {
        if ascends == 1 {
            run.sort();
        } else {
            run.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    v
}

/// Ascending first half followed by a descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);
    let (rising, falling) = v.split_at_mut(len / 2);

    rising.sort();
    falling.sort_by_key(|&e| std::cmp::Reverse(e));

    v
}

// --- Counting sort inputs ---
//
// These are just as useful for the comparison sorts, the bounded tests use nothing else.

/// Uniformly random in `range`, e.g. `0..=1` for binary data.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    sample_vec(len, range.into())
}

/// Uniformly random keys for a counting sort over `0..range`. Empty for a zero range, which
/// accepts no key at all.
pub fn random_bounded(len: usize, range: usize) -> Vec<i32> {
    if range == 0 {
        return Vec::new();
    }

    // Keys past i32::MAX can't be produced anyway.
    let upper = i32::try_from(range).unwrap_or(i32::MAX);
    random_uniform(len, 0..upper)
}

/// Zipf distributed values in `1..=len`, a few keys dominate and most appear rarely. A counting
/// sort over them needs a range of at least `len + 1`.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let dist = ZipfDistribution::new(len, exponent).unwrap();

    sample_vec(len, dist).into_iter().map(|x: usize| x as i32).collect()
}

/// Every value the same small key.
pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

/// `0..len`, the worst case of a first element pivot.
pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

/// `0..len` reversed, also a worst case of a first element pivot.
pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

// --- Seeding ---

/// Draw a fresh seed for every generator call instead of one per process.
///
/// Benchmarks should call this, otherwise each iteration sorts the very same values.
pub fn use_random_seed_each_time() {
    if current_seed().mode == SeedMode::Override {
        panic!("Using use_random_seed_each_time conflicts with the external seed override.");
    }

    *SEED.lock().unwrap() = Some(Seed {
        mode: SeedMode::EachCall,
        value: 0,
    });
}

/// The seed the next generator call uses.
pub fn random_init_seed() -> u64 {
    current_seed().value
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum SeedMode {
    EachCall,
    PerProcess,
    Override,
}

#[derive(Copy, Clone)]
struct Seed {
    mode: SeedMode,
    value: u64,
}

static SEED: Mutex<Option<Seed>> = Mutex::new(None);

fn current_seed() -> Seed {
    let seed = *SEED.lock().unwrap().get_or_insert_with(|| {
        match env::var("OVERRIDE_SEED") {
            Ok(value) => Seed {
                mode: SeedMode::Override,
                value: value.parse().expect("OVERRIDE_SEED must be a u64"),
            },
            Err(_) => Seed {
                mode: SeedMode::PerProcess,
                value: thread_rng().gen(),
            },
        }
    });

    match seed.mode {
        SeedMode::EachCall => Seed {
            mode: SeedMode::EachCall,
            value: thread_rng().gen(),
        },
        _ => seed,
    }
}

fn sample_vec<T, D: Distribution<T>>(len: usize, dist: D) -> Vec<T> {
    let rng = StdRng::seed_from_u64(random_init_seed());

    rng.sample_iter(dist).take(len).collect()
}
