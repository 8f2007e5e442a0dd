pub mod middlewares;
pub mod router;

pub use router::router;
