pub mod config;
pub mod costs;
pub mod error;
pub mod fees;
pub mod layout;
pub mod model;
pub mod proposal;
pub mod services;

pub use config::{Company, Config, HistoryEntry, LayoutSettings, State};
pub use costs::{CostItem, CostTable, Currency, ExchangeRate, Money, Totals};
pub use error::{ProposalError, Result};
pub use fees::{AuthorityConfig, AuthorityId, FeeTables};
pub use layout::{Explanation, ExplanationPlacement, PageGroup, PageLayout, Section};
pub use model::{Document, DocumentBody, DocumentKind, DocumentRequest};
pub use proposal::{generate_proposal, preview_proposal, Proposal, ProposalBuilder};
pub use services::{ServiceContext, ServiceItem, ServiceKey, ServiceTable};
