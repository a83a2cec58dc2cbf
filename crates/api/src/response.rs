//! Success response envelope.

use serde::Serialize;

/// Wraps handler payloads as `{ "data": ... }`.
///
/// Devlog and contact endpoints use this envelope; the verbatim
/// portfolio documents and the health probe are served bare.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
