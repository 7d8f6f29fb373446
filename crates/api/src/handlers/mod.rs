//! API handlers module

pub mod articles;
pub mod companies;
pub mod health;

use serde::Serialize;

/// Envelope for single-object and list responses: `{"data": ...}`
#[derive(Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}
