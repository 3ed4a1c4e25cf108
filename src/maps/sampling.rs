use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};

/// Uniformly picks `count` places without replacement.
///
/// Sets that already fit are returned untouched, in their original order.
pub fn sample<T, R>(items: Vec<T>, count: usize, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    if items.len() <= count {
        return items;
    }
    let total = items.len();
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    index::sample(rng, total, count)
        .into_iter()
        .filter_map(|i| slots[i].take())
        .collect()
}

/// Shared random source used by the search pipeline.
#[derive(Clone)]
pub struct PlaceSampler {
    rng: Arc<Mutex<StdRng>>,
}

impl PlaceSampler {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn sample<T>(&self, items: Vec<T>, count: usize) -> Vec<T> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        sample(items, count, &mut *rng)
    }
}
