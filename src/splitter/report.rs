//! Console report printed by a verbose [`Splitter`](crate::Splitter).
use colored::Colorize;

use crate::constants::{
    PRINT_WIDTH_NAME,
    PRINT_WIDTH_VALUE,
    PRINT_PRECISION,
};
use crate::sample::Dataset;
use super::criterion::Criterion;
use super::record::{Candidate, DecisionRecord};


const NAME: usize = PRINT_WIDTH_NAME;
const VALUE: usize = PRINT_WIDTH_VALUE;
const PREC: usize = PRINT_PRECISION;


#[inline(always)]
fn print_header(criterion: Criterion) {
    println!("{} {}", "CRITERION".bold().red(), criterion);
    println!(
        "    {:>NAME$}\t{:>VALUE$}\t{:>VALUE$}\t{:>VALUE$}\t{:>VALUE$}",
        "FEATURE".bold().red(),
        "KIND".bold().blue(),
        "INFO.".bold().green(),
        "KEY".bold().yellow(),
        "PIVOT".bold().cyan(),
    );
}


/// Prints the score of every candidate of a node.
pub(crate) fn print_candidates(
    dataset: &Dataset,
    criterion: Criterion,
    scored: &[(usize, Candidate)],
)
{
    print_header(criterion);
    for (feature, candidate) in scored {
        let name = dataset.feature(*feature)
            .map(|f| f.name())
            .unwrap_or("?");
        let kind = format!("{:?}", candidate.kind());
        let key = criterion.key(candidate)
            .map(|key| format!("{key:.PREC$}"))
            .unwrap_or_else(|| "-".to_string());
        let pivot = candidate.pivot()
            .map(|pivot| format!("{pivot}"))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "    {:>NAME$}\t{:>VALUE$}\t{:>VALUE$.PREC$}\t{:>VALUE$}\t{:>VALUE$}",
            name,
            kind,
            candidate.information(),
            key,
            pivot,
        );
    }
}


/// Prints the decision of a node.
pub(crate) fn print_decision(decision: &DecisionRecord) {
    let status = if decision.is_degenerate() {
        "DEGENERATE".bold().yellow()
    } else {
        "CHOSEN".bold().green()
    };
    println!("{status} {decision}\n");
}
