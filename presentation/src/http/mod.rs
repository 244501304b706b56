//! HTTP surface
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | `POST` | `/api/quiz` | 200, array of 10 questions | 400 `{error}`, 500 `{error, detail?}` |
//! | `GET` | `/health` | 200 `{"status":"ok"}` | - |

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
