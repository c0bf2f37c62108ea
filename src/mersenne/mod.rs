pub mod mt19937;

#[derive(Debug, PartialEq)]
pub enum Error {
    EmptyKey,
}
