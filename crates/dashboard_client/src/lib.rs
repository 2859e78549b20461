//! Dashboard client: backend HTTP contract and background request engine.
mod backend;
mod engine;
mod types;

pub use backend::{Backend, BackendSettings, ReqwestBackend};
pub use engine::EngineHandle;
pub use types::{
    Action, ApiError, ClientEvent, Command, CommandReply, Favorite, FailureKind, StatusSnapshot,
};
