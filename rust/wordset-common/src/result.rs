pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[cold]
pub fn out_of_range<T>(value: impl ToString) -> Result<T> {
    Err(crate::error::Error::out_of_range(value))
}

#[cold]
pub fn empty_collection<T>(operation: &str) -> Result<T> {
    Err(crate::error::Error::empty_collection(operation))
}

#[cold]
pub fn key_not_found<T>(key: i64) -> Result<T> {
    Err(crate::error::Error::key_not_found(key))
}
