//! # embedjudge-core
//!
//! Deterministic verifier for embeddings of bounded-degree graphs into a 3-D
//! integer lattice.
//!
//! A contestant places every vertex on the `z = 0` plane and draws every edge
//! as an axis-aligned polyline. The embedding is accepted only if no two
//! drawn objects share a lattice cell.
//!
//! ## Pipeline
//!
//! 1. **Graph**: load and check the problem input (faults are the judge's)
//! 2. **Placement**: read vertex points and claim their cells
//! 3. **Paths**: walk each polyline and claim every cell it passes through
//! 4. **Recount**: cross-check the grid against the polyline lengths
//! 5. **Trailing output**: anything left over is a rejection
//!
//! ## Example
//!
//! ```rust
//! use embedjudge_core::{validate, Verdict};
//!
//! let input = "2 1\n1 2\n";
//! let output = "0 0\n0 3\n4\n0 0 0\n0 1 0\n0 2 0\n0 3 0\n";
//!
//! let verdict = validate(input, output);
//! assert_eq!(verdict.token(), Some("AC"));
//! assert!(matches!(verdict, Verdict::Accepted(_)));
//! ```

pub mod consistency;
pub mod error;
pub mod graph;
pub mod grid;
pub mod limits;
pub mod path;
pub mod placement;
pub mod tokens;
pub mod types;
pub mod verdict;

// Re-export main types at crate root
pub use consistency::{ConsistencyChecker, Recount};
pub use error::{ErrorKind, JudgeFault, Rejection, ValidationError};
pub use graph::{Edge, Graph};
pub use grid::OccupancyGrid;
pub use limits::{Limits, LimitsError};
pub use path::{PathWalker, Polyline};
pub use placement::Placement;
pub use tokens::TokenStream;
pub use types::{Axis, Cell};
pub use verdict::{Report, Summary, Verdict, ACCEPT_TOKEN, REJECT_TOKEN};

use tracing::{debug, error};

/// Validate a contestant output against the official problem limits.
pub fn validate(judge_input: &str, contestant_output: &str) -> Verdict {
    validate_with_limits(judge_input, contestant_output, &Limits::default())
}

/// Validate a contestant output.
///
/// # Arguments
///
/// * `judge_input` - Full text of the problem input (trusted)
/// * `contestant_output` - Full text of the contestant's output
/// * `limits` - Problem constants
///
/// # Returns
///
/// The first violation found, or `Accepted` with the run's counts.
pub fn validate_with_limits(
    judge_input: &str,
    contestant_output: &str,
    limits: &Limits,
) -> Verdict {
    let verdict = Verdict::from(run(judge_input, contestant_output, limits));
    match &verdict {
        Verdict::Accepted(summary) => debug!(?summary, "Embedding accepted"),
        Verdict::Rejected(rejection) => debug!(reason = %rejection, "Embedding rejected"),
        Verdict::Fatal(fault) => error!(reason = %fault, "Judge error"),
    }
    verdict
}

fn run(
    judge_input: &str,
    contestant_output: &str,
    limits: &Limits,
) -> Result<Summary, ValidationError> {
    let graph = Graph::from_input(judge_input, limits)?;
    debug!(n = graph.n(), m = graph.m(), "Graph loaded");

    let mut grid = OccupancyGrid::new(limits.grid_extent())?;
    let mut tokens = TokenStream::new(contestant_output);

    let placement = Placement::read(&mut tokens, graph.n(), &mut grid, limits)?;
    debug!(vertices = placement.len(), "Placement claimed");

    let walker = PathWalker::new(limits);
    let polylines = graph
        .edges()
        .iter()
        .enumerate()
        .map(|(j, &edge)| walker.walk(&mut tokens, j, edge, &placement, &mut grid))
        .collect::<Result<Vec<_>, _>>()?;

    let recount = ConsistencyChecker::recheck(graph.n(), &polylines, &grid)?;
    debug!(cells = recount.actual, "Recount matched");

    if let Some(token) = tokens.next_token() {
        return Err(Rejection::TrailingOutput {
            token: token.to_string(),
        }
        .into());
    }

    Ok(Summary {
        vertices: graph.n(),
        edges: graph.m(),
        claimed_cells: recount.actual,
    })
}
