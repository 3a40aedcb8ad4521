//! AutoSupport Console
//!
//! Typed client and page view-models for the AutoSupport ticketing API.
//!
//! # Layout
//!
//! - [`api`]: one service per resource family (tickets, agents, analytics, ml)
//! - [`views`]: per-page controllers holding [`views::Loadable`] state
//! - [`render`]: terminal rendering of page state
//! - [`config`]: base URL resolution and the on-disk config file

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod render;
pub mod route;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;

pub use api::Client;
pub use config::{ClientConfig, FileConfig};
pub use error::{Error, Result};
pub use models::{
    Agent, AgentStats, DashboardAnalytics, MessageCreate, SuggestedResponse, Ticket, TicketCategory,
    TicketCreate, TicketMessage, TicketPriority, TicketQuery, TicketStatus, TicketUpdate,
};
pub use route::Route;
