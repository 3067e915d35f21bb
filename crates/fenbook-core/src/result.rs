use crate::error::FenbookError;

pub type FenbookResult<T> = Result<T, FenbookError>;
