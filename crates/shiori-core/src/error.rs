use thiserror::Error;

/// Errors raised by the mapping core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown {category} value: {value}")]
    UnknownSymbol {
        category: &'static str,
        value: String,
    },

    #[error("malformed {context} payload: expected {expected}, found {found}")]
    Shape {
        context: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("route {uri} has {placeholders} placeholder(s) but {supplied} argument(s) were supplied")]
    RouteArity {
        uri: &'static str,
        placeholders: usize,
        supplied: usize,
    },
}
