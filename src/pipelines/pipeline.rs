//! Pipeline trait.
use crate::error::Error;

/// A complete run, from sources to output.
///
/// Generic over what the run reports back once done (see [super::Summary] for [super::Harvest]).
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
