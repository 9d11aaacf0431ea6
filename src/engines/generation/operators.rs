use crate::engines::generation::chromosome::Chromosome;
use crate::types::Move;
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate random chromosome
pub fn random_chromosome<R: Rng>(length: usize, rng: &mut R) -> Chromosome {
    (0..length).map(|_| Move::random(rng)).collect()
}

/// Truncation selection: keep the better half, best first.
///
/// The sort is stable, so equal scores keep their population order.
pub fn truncation_selection(mut scored: Vec<(Chromosome, i64)>) -> Vec<(Chromosome, i64)> {
    let keep = scored.len() / 2;
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(keep);
    scored
}

/// Two distinct parents, drawn uniformly without replacement
pub fn sample_parents<'a, R: Rng>(
    survivors: &'a [Chromosome],
    rng: &mut R,
) -> (&'a Chromosome, &'a Chromosome) {
    let picks: Vec<&Chromosome> = survivors.choose_multiple(rng, 2).collect();
    (picks[0], picks[1])
}

/// Single-point crossover: swap tails at a point in `1..=len-2`.
///
/// Parents shorter than 3 genes, or of different lengths, have no valid cut
/// point and come back unchanged.
pub fn crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let len = parent1.len();
    if len < 3 || len != parent2.len() {
        return (parent1.clone(), parent2.clone());
    }

    let point = rng.gen_range(1..=len - 2);

    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();

    child1[point..].copy_from_slice(&parent2[point..]);
    child2[point..].copy_from_slice(&parent1[point..]);

    (child1, child2)
}

/// Point mutation: with probability `mutation_rate`, replace one random gene
pub fn mutate<R: Rng>(chromosome: &mut Chromosome, mutation_rate: f64, rng: &mut R) {
    if chromosome.is_empty() {
        return;
    }
    if rng.gen::<f64>() < mutation_rate {
        let idx = rng.gen_range(0..chromosome.len());
        chromosome[idx] = Move::random(rng);
    }
}
