pub mod team;

pub use team::TeamRepository;
