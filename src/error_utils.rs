use std::io::{Error, ErrorKind};

pub fn error(msg: String) -> std::io::Error {
    return Error::new(ErrorKind::Other, msg);
}

// Flattens any displayable error into an io::Error, for seams that only deal in io::Error
pub fn wrap_error<E: std::fmt::Display>(context: &str, e: E) -> std::io::Error {
    error(format!("{}: {}", context, e))
}
