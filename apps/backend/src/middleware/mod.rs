pub mod jwt_gate;
pub mod structured_logger;

pub use jwt_gate::JwtGate;
pub use structured_logger::StructuredLogger;
