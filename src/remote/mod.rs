pub mod source;

pub use source::{HttpRemoteSource, RemoteSource, StaticRemoteSource};
