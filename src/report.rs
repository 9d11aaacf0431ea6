use crate::engines::generation::format_moves;
use crate::engines::SearchOutcome;
use crate::error::Result;
use std::fmt::Write;

/// Plain-text report: annotated grid, then the path and its statistics
pub fn render_text(outcome: &SearchOutcome) -> String {
    let trace = &outcome.trace;
    let width = trace
        .grid
        .iter()
        .flatten()
        .map(|c| c.symbol().chars().count())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for row in &trace.grid {
        let line = row
            .iter()
            .map(|c| format!("{:<width$}", c.symbol(), width = width))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out.push('\n');

    let path = if trace.moves.is_empty() {
        "(no moves)".to_string()
    } else {
        format_moves(&trace.moves)
    };
    let _ = writeln!(out, "Best path:    {}", path);
    let _ = writeln!(out, "Score:        {}", outcome.best_score);
    let _ = writeln!(out, "Coins:        {}", trace.coins);
    let _ = writeln!(out, "Steps:        {}", trace.steps);
    let _ = writeln!(out, "Reached home: {}", if trace.reached_home { "yes" } else { "no" });
    out
}

pub fn render_json(outcome: &SearchOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::trace::PathTracer;
    use crate::grid::GridParser;
    use crate::types::Move;

    fn outcome() -> SearchOutcome {
        let grid = GridParser::lenient().parse("S C C H").unwrap();
        let chromosome = vec![Move::Right, Move::Right, Move::Right, Move::Up, Move::Up];
        SearchOutcome {
            best_score: 220,
            trace: PathTracer::trace(&grid, &chromosome, 5),
            best_chromosome: chromosome,
            best_generation: 0,
        }
    }

    #[test]
    fn test_text_report() {
        let text = render_text(&outcome());
        assert!(text.starts_with("S  ** ** H\n"));
        assert!(text.contains("Best path:    right → right → right"));
        assert!(text.contains("Score:        220"));
        assert!(text.contains("Reached home: yes"));
    }

    #[test]
    fn test_json_report() {
        let json = render_json(&outcome()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["best_score"], 220);
        assert_eq!(value["trace"]["coins"], 2);
        assert_eq!(value["trace"]["moves"][0], "right");
    }
}
