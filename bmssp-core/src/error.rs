//! Error types for the BMSSP core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while constructing a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// An edge carried a negative weight.
    #[error("edge ({tail}, {target}) has negative weight {weight}")]
    NegativeWeight {
        /// Tail vertex of the offending edge.
        tail: usize,
        /// Head vertex of the offending edge.
        target: usize,
        /// The rejected weight value.
        weight: f64,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge ({tail}, {target}) has non-finite weight")]
    NonFiniteWeight {
        /// Tail vertex of the offending edge.
        tail: usize,
        /// Head vertex of the offending edge.
        target: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge carried a negative weight.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
    }
}

/// Error type produced when constructing or running [`crate::Bmssp`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum BmsspError {
    /// The base-case expansion capacity must be greater than zero.
    #[error("base capacity must be at least 1 (got {got})")]
    InvalidBaseCapacity {
        /// The invalid capacity supplied by the caller.
        got: usize,
    },
    /// The supplied graph contained no vertices.
    #[error("graph contains no vertices")]
    EmptyGraph,
    /// The requested source vertex is outside the graph's vertex range.
    #[error("source vertex {vertex} is outside the graph (vertex count {vertex_count})")]
    UnknownSource {
        /// The requested source vertex.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`BmsspError`] variants.
    enum BmsspErrorCode for BmsspError {
        /// The base-case expansion capacity must be greater than zero.
        InvalidBaseCapacity => InvalidBaseCapacity { .. } => "BMSSP_INVALID_BASE_CAPACITY",
        /// The supplied graph contained no vertices.
        EmptyGraph => EmptyGraph => "BMSSP_EMPTY_GRAPH",
        /// The requested source vertex is outside the graph's vertex range.
        UnknownSource => UnknownSource { .. } => "BMSSP_UNKNOWN_SOURCE",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, BmsspError>;
