use thiserror::Error;

/// Caller mistakes when driving page behaviours.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("No tab panel with id 'tab-{0}'")]
    UnknownTab(String),

    #[error("No tab button activates tab '{0}'")]
    MissingTabButton(String),
}
