/// Store errors: bootstrap failures are fatal, upsert failures are rejected
/// at the call boundary with no partial effect.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("duplicate term id in bootstrap input: {term}")]
    DuplicateTerm { term: String },

    #[error("duplicate relation key in bootstrap input: {key}")]
    DuplicateRelation { key: String },

    #[error("dangling term reference: {term} (edge {subject} -> {object})")]
    DanglingReference {
        term: String,
        subject: String,
        object: String,
    },

    #[error("domain confidence out of range for {key}: {value}")]
    ConfidenceOutOfRange { key: String, value: f64 },

    #[error("unknown term reference: {term}")]
    UnknownTerm { term: String },

    #[error("malformed edge key: {reason}")]
    MalformedKey { reason: String },
}
