use thiserror::Error;

/// Errors from building or querying a [`BagGraph`](super::BagGraph)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A rule line does not follow `<bag> bags contain <list>.`
    #[error("line {line}: {reason}: {text:?}")]
    Parse {
        /// 1-based line number in the rule text
        line: usize,
        reason: &'static str,
        text: String,
    },
    /// The queried bag appears nowhere in the rules
    #[error("unknown bag {0:?}")]
    UnknownNode(String),
    /// A bag (transitively) contains itself
    #[error("containment cycle through {0:?}")]
    CycleDetected(String),
    /// The bag total does not fit in 64 bits
    #[error("bag count inside {0:?} overflows")]
    Overflow(String),
}
