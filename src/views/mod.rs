//! Page view-models
//!
//! One controller per screen. Each fetches on mount (or on parameter
//! change), replaces its state wholesale, and exposes a [`Loadable`]
//! snapshot for rendering. Failures are logged and kept as
//! [`Loadable::Failed`]; nothing is retried.

pub mod agents;
pub mod create_ticket;
pub mod dashboard;
pub mod state;
pub mod ticket_detail;
pub mod ticket_list;

pub use agents::AgentRosterPage;
pub use create_ticket::{CreateTicketPage, Prediction, SubmitOutcome, TicketDraft};
pub use dashboard::{DashboardCharts, DashboardPage};
pub use state::{Loadable, ViewCell};
pub use ticket_detail::{TicketDetail, TicketDetailPage};
pub use ticket_list::{StatusFilter, TicketListPage};
