use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use super::errors::SelectionError;

/// Picks `nb` names uniformly at random from `pool`.
///
/// Without repetition the names are distinct and `nb` may not exceed the pool
/// size. With repetition, a request larger than the pool yields `nb / len`
/// full copies of the pool plus a sample of `nb % len` more names, so the
/// result always holds exactly `nb` names. Output order is random.
pub fn random_selection<S, R>(
    pool: &[S],
    nb: usize,
    allow_repetition: bool,
    rng: &mut R,
) -> Result<Vec<String>, SelectionError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        return Err(SelectionError::EmptyPool);
    }
    if nb == 0 {
        return Err(SelectionError::InvalidCount);
    }

    if nb <= pool.len() {
        let mut selection = sample(pool, nb, rng);
        selection.shuffle(rng);
        return Ok(selection);
    }

    if !allow_repetition {
        return Err(SelectionError::NotEnoughDishes {
            requested: nb,
            available: pool.len(),
        });
    }

    let mut selection = Vec::new();
    for _ in 0..nb / pool.len() {
        selection.extend(pool.iter().map(|name| name.as_ref().to_string()));
    }
    selection.extend(sample(pool, nb % pool.len(), rng));
    selection.shuffle(rng);
    Ok(selection)
}

fn sample<S, R>(pool: &[S], amount: usize, rng: &mut R) -> Vec<String>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    pool.choose_multiple(rng, amount)
        .map(|name| name.as_ref().to_string())
        .collect()
}
