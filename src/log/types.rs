//! Log Row Representation

use serde::Serialize;

/// One row of the submission log, as returned by `GET /values/all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct LoggedValue {
    pub number: i32,
}
