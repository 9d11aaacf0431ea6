/// Chromosome representation for the path search
///
/// A chromosome is a fixed-length sequence of moves. The fitness evaluator
/// replays the moves in order from the start cell, skipping any that would
/// leave the grid or walk into a tiger.
///
/// # Why a flat move list?
///
/// - **Crossover**: swapping tails is plain slice copying
/// - **Mutation**: replacing one move is a single assignment
/// - **No invalid states**: every sequence replays to some path
///
/// The length equals `max_steps` for the whole run; operators never grow or
/// shrink a chromosome.
///
/// # Example
///
/// ```
/// use sheepgen::types::Move;
/// let chromosome = vec![Move::Right, Move::Right, Move::Down, Move::Down];
/// assert_eq!(chromosome.len(), 4);
/// ```
pub type Chromosome = Vec<crate::types::Move>;

/// Renders a move list the way reports show it
pub fn format_moves(moves: &[crate::types::Move]) -> String {
    moves
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" → ")
}
