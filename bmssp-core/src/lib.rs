//! Bounded multi-source shortest-path (BMSSP) solver library.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod bmssp;
mod builder;
mod distances;
mod error;
mod graph;
mod params;
mod solver;
#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    bmssp::Bmssp,
    builder::BmsspBuilder,
    distances::{DistanceMap, UNREACHABLE},
    error::{BmsspError, BmsspErrorCode, GraphError, GraphErrorCode, Result},
    graph::{Edge, Graph},
};
