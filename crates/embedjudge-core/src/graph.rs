//! Graph loading from the problem input.
//!
//! The problem input is trusted test data. Anything wrong with it is a
//! [`JudgeFault`], never a rejection of the contestant.

use std::collections::HashSet;

use crate::error::JudgeFault;
use crate::limits::Limits;
use crate::tokens::TokenStream;

/// An edge with 0-indexed endpoints, `lower < higher`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub lower: usize,
    pub higher: usize,
}

/// The graph to be embedded. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Graph {
    n: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Parse `n m` followed by `m` pairs `u w` (1-indexed, `u < w`).
    pub fn parse(tokens: &mut TokenStream<'_>, limits: &Limits) -> Result<Self, JudgeFault> {
        let (n, m) = match (tokens.next_int(), tokens.next_int()) {
            (Some(n), Some(m)) => (n, m),
            _ => {
                return Err(JudgeFault::InputExhausted {
                    what: "n and m".to_string(),
                })
            }
        };

        let n = Self::bounded(n, limits.min_vertices, limits.max_vertices).ok_or(
            JudgeFault::VertexCountOutOfRange {
                n,
                min: limits.min_vertices,
                max: limits.max_vertices,
            },
        )?;
        let m = Self::bounded(m, limits.min_edges, limits.max_edges).ok_or(
            JudgeFault::EdgeCountOutOfRange {
                m,
                min: limits.min_edges,
                max: limits.max_edges,
            },
        )?;

        let mut degrees = vec![0usize; n];
        let mut seen = HashSet::with_capacity(m);
        let mut edges = Vec::with_capacity(m);

        for j in 0..m {
            let (u, w) = match (tokens.next_int(), tokens.next_int()) {
                (Some(u), Some(w)) => (u, w),
                _ => {
                    return Err(JudgeFault::InputExhausted {
                        what: format!("edge {}", j + 1),
                    })
                }
            };
            if !(1 <= u && u < w && w <= n as i64) {
                return Err(JudgeFault::EdgeOutOfRange { edge: j + 1, u, w });
            }

            let edge = Edge {
                lower: u as usize - 1,
                higher: w as usize - 1,
            };
            if !seen.insert(edge) {
                return Err(JudgeFault::DuplicateEdge {
                    edge: j + 1,
                    u: edge.lower + 1,
                    w: edge.higher + 1,
                });
            }

            degrees[edge.lower] += 1;
            degrees[edge.higher] += 1;
            edges.push(edge);
        }

        if let Some((v, &degree)) = degrees
            .iter()
            .enumerate()
            .find(|&(_, &d)| d > limits.max_degree)
        {
            return Err(JudgeFault::DegreeExceeded {
                vertex: v + 1,
                degree,
                max: limits.max_degree,
            });
        }

        Ok(Self { n, edges })
    }

    /// Parse a graph from the full text of a problem input.
    pub fn from_input(input: &str, limits: &Limits) -> Result<Self, JudgeFault> {
        Self::parse(&mut TokenStream::new(input), limits)
    }

    fn bounded(value: i64, min: usize, max: usize) -> Option<usize> {
        usize::try_from(value)
            .ok()
            .filter(|v| (min..=max).contains(v))
    }

    /// Number of vertices.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of edges.
    pub fn m(&self) -> usize {
        self.edges.len()
    }

    /// Edges in input order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
