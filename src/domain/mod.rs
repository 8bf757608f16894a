// Domain layer: request/result models and ports (interfaces). No transport or HTTP client code here.

pub mod model;
pub mod ports;
