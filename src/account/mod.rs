pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod usecase;
