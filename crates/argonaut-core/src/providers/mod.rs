pub mod argo;

pub use argo::{ArgoBackend, ARGO_API_ENDPOINT};
