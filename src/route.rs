//! Page routes and the identifiers they carry

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    TicketList,
    /// `/tickets/{id}`; the id is passed to every detail-page call
    TicketDetail(u64),
    CreateTicket,
    Agents,
}

impl Route {
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();
        match segments.as_slice() {
            [] => Some(Route::Dashboard),
            ["tickets"] => Some(Route::TicketList),
            ["tickets", id] => id.parse().ok().map(Route::TicketDetail),
            ["create-ticket"] => Some(Route::CreateTicket),
            ["agents"] => Some(Route::Agents),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::TicketList => "/tickets".to_string(),
            Route::TicketDetail(id) => format!("/tickets/{}", id),
            Route::CreateTicket => "/create-ticket".to_string(),
            Route::Agents => "/agents".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s).ok_or_else(|| format!("unknown route: {}", s))
    }
}
