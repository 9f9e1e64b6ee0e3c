pub mod authn;
pub mod profile;
