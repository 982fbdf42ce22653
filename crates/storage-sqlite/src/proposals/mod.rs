pub mod model;
pub mod repository;

pub use model::ProposalDB;
pub use repository::ProposalRepository;
