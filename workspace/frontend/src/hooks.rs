use std::cell::Cell;

/// State of a background load driven by `use_reloadable`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState<T> {
    #[default]
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Numbers successive loads so only the most recent one may publish.
#[derive(Debug, Default)]
pub struct LoadGeneration(Cell<u64>);

impl LoadGeneration {
    /// Start a new load and return its ticket. Older tickets go stale.
    pub fn begin(&self) -> u64 {
        let ticket = self.0.get() + 1;
        self.0.set(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}
