/*! Word records and their CSV output.

- [WordRecord] is the `(with tashkeel, without tashkeel, source)` triple,
- [WordSet] deduplicates and orders records, and writes them once the run is over.
!*/
mod record;
mod wordset;

pub use record::WordRecord;
pub use wordset::{WordSet, HEADER};
