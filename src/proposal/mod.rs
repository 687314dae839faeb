//! Turning an input document into a computed proposal.
//!
//! Fees are resolved, line items generated, numbered and converted, totals
//! aggregated, breakdown tables paginated and explanations collected. Nothing
//! here renders; the result is plain data for a renderer.

mod builder;
mod generator;

pub use builder::{Proposal, ProposalBuilder};
pub use generator::{format_proposal_number, generate_proposal, preview_proposal, ProposalFile};
