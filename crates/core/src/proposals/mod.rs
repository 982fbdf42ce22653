//! Proposals module - the ledger of bids and offers against order baselines.

mod proposals_errors;
mod proposals_model;
mod proposals_service;
mod proposals_traits;


pub use proposals_errors::ProposalError;
pub use proposals_model::{NewProposal, Proposal, ProposalStatus, ProposalUpdate};
pub use proposals_service::ProposalService;
pub use proposals_traits::{ProposalRepositoryTrait, ProposalServiceTrait};
