use std::fmt;

/// The ways one listing walk can go wrong. All of them abort the walk and
/// end up as a single "Access Error!" notification in the room.
#[derive(Debug)]
pub enum Error {
    /// The page request did not complete.
    Transport(reqwest::Error),
    /// The page request completed with a non-200 status.
    BadStatus(reqwest::StatusCode),
    /// The page body could not be interpreted as a listing.
    Parse,
    /// Too few candidates were collected to draw one.
    NoCandidates,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(err) => write!(f, "listing page request failed: {}", err),
            Error::BadStatus(status) => {
                write!(f, "listing page answered with status {}", status)
            }
            Error::Parse => write!(f, "unable to parse listing page"),
            Error::NoCandidates => write!(f, "not enough candidates to pick from"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err)
    }
}
