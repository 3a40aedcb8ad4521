//! Data shapes exchanged with the support API

pub mod agent;
pub mod analytics;
pub mod ml;
pub mod ticket;

pub use agent::{Agent, AgentCreate, AgentQuery, AgentStats, AgentUpdate, Capacity, Performance, Workload};
pub use analytics::{
    AgentStatsSummary, DashboardAnalytics, IssueCount, PerformanceMetrics, TicketStats, TopIssues,
    TopPerformer, TrendReport, Trends,
};
pub use ml::{Classification, ModelStatus, ReloadOutcome, SentimentAnalysis, SuggestedResponse, TextInput};
pub use ticket::{
    MessageCreate, Ticket, TicketAssign, TicketCategory, TicketCreate, TicketMessage, TicketPriority,
    TicketQuery, TicketStatus, TicketUpdate,
};
