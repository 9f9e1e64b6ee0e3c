pub mod inout;
pub mod profile;
pub mod session;
