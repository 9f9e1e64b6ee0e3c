pub mod inbound;
pub mod link;
pub mod slug;
pub mod tools;
pub mod usecase;
pub mod whatsapp;
