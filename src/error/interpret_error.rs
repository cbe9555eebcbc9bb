use crate::error::RuntimeError;

#[derive(Debug)]
/// Represents a failure of a whole interpreter run.
///
/// Hosts that hand a source string to [`crate::interpret`] receive either
/// the collected parser diagnostics or the runtime error that stopped
/// evaluation.
pub enum InterpretError {
    /// The parser reported diagnostics; evaluation never started.
    Parse(Vec<String>),
    /// Evaluation stopped on a runtime error.
    Runtime(RuntimeError),
}

impl std::fmt::Display for InterpretError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(diagnostics) => {
                for (index, diagnostic) in diagnostics.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{diagnostic}")?;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for InterpretError {}

impl From<RuntimeError> for InterpretError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
