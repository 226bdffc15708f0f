pub mod hasher;

pub use hasher::Argon2HasherRepository;
