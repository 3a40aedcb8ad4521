//! Terminal rendering of page state

use colored::{ColoredString, Colorize};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::ml::percent;
use crate::models::{
    Agent, AgentStats, Classification, ModelStatus, PerformanceMetrics, SentimentAnalysis, SuggestedResponse,
    Ticket, TicketMessage, TicketPriority, TicketStatus, TopIssues, TrendReport,
};
use crate::views::dashboard::{ChartPoint, DashboardCharts, StatCard, TrendPoint};
use crate::views::{Loadable, Prediction, StatusFilter, TicketDetail};

pub fn priority_badge(priority: TicketPriority) -> ColoredString {
    let label = priority.to_string();
    match priority {
        TicketPriority::Urgent => label.red().bold(),
        TicketPriority::High => label.yellow(),
        TicketPriority::Medium => label.blue(),
        TicketPriority::Low => label.dimmed(),
    }
}

pub fn status_badge(status: TicketStatus) -> ColoredString {
    let label = status.to_string();
    match status {
        TicketStatus::Open => label.blue(),
        TicketStatus::InProgress => label.yellow(),
        TicketStatus::Resolved => label.green(),
        TicketStatus::Closed => label.dimmed(),
    }
}

fn category_label(ticket: &Ticket) -> String {
    ticket.category.map(|c| c.to_string()).unwrap_or_else(|| "N/A".into())
}

#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "Ticket #")]
    number: String,
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&Ticket> for TicketRow {
    fn from(t: &Ticket) -> Self {
        Self {
            number: t.ticket_number.clone(),
            subject: t.subject.clone(),
            customer: format!("{}\n{}", t.customer_name, t.customer_email),
            category: category_label(t),
            priority: priority_badge(t.priority).to_string(),
            status: status_badge(t.status).to_string(),
            created: t.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

pub fn tickets_table(tickets: &[Ticket]) -> String {
    if tickets.is_empty() {
        return "No tickets".to_string();
    }
    Table::new(tickets.iter().map(TicketRow::from)).with(Style::rounded()).to_string()
}

fn filter_bar(active: StatusFilter) -> String {
    StatusFilter::ALL
        .iter()
        .map(|f| {
            if *f == active {
                format!("[{}]", f).bold().to_string()
            } else {
                format!(" {} ", f).dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn ticket_list(state: &Loadable<Vec<Ticket>>, filter: StatusFilter) -> String {
    let body = match state {
        Loadable::Pending => return "Loading tickets...".to_string(),
        Loadable::Failed(err) => format!("Could not load tickets: {}", err).red().to_string(),
        Loadable::Ready(tickets) => tickets_table(tickets),
    };
    format!("{}\n\n{}\n\n{}", "Support Tickets".bold(), filter_bar(filter), body)
}

fn response_line(r: &TicketMessage) -> String {
    format!(
        "  {} ({})\n  {}",
        r.author().bold(),
        r.created_at.format("%Y-%m-%d %H:%M"),
        r.message
    )
}

pub fn ticket_detail(state: &Loadable<TicketDetail>) -> String {
    let detail = match state {
        Loadable::Pending => return "Loading...".to_string(),
        Loadable::Failed(_) => return "Ticket not found".to_string(),
        Loadable::Ready(detail) => detail,
    };
    let t = &detail.ticket;

    let mut out = vec![
        format!("{}  {}", t.subject.bold(), status_badge(t.status)),
        format!("Ticket #{}", t.ticket_number),
        String::new(),
        format!("Customer:  {} <{}>", t.customer_name, t.customer_email),
        format!("Category:  {}", category_label(t)),
        format!("Priority:  {}", priority_badge(t.priority)),
        format!("Sentiment: {}", t.sentiment.as_deref().unwrap_or("N/A")),
        String::new(),
        "Description".bold().to_string(),
        t.description.clone(),
    ];

    if let Some(s) = &detail.suggestion {
        out.push(String::new());
        out.push(suggestion(s));
    }

    out.push(String::new());
    out.push("Responses".bold().to_string());
    out.push(responses(&detail.responses));

    out.join("\n")
}

pub fn responses(responses: &[TicketMessage]) -> String {
    if responses.is_empty() {
        return "No responses yet".dimmed().to_string();
    }
    responses.iter().map(response_line).collect::<Vec<_>>().join("\n\n")
}

pub fn suggestion(s: &SuggestedResponse) -> String {
    let mut out = format!(
        "{}\n{}\nConfidence: {}",
        "AI Suggested Response".cyan().bold(),
        s.suggested_text,
        percent(s.confidence)
    );
    if !s.reasoning.is_empty() {
        out.push_str(&format!("\n{}", s.reasoning.dimmed()));
    }
    out
}

pub fn prediction(p: &Prediction) -> String {
    format!(
        "{}\nCategory:  {} ({})\nSentiment: {}\nUrgency:   {}",
        "AI Predictions".cyan().bold(),
        p.category,
        percent(p.confidence),
        p.sentiment,
        percent(p.urgency)
    )
}

#[derive(Tabled)]
struct AgentRow {
    #[tabled(rename = "")]
    avatar: char,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Expertise")]
    expertise: String,
    #[tabled(rename = "Tickets Handled")]
    handled: u64,
    #[tabled(rename = "Satisfaction")]
    satisfaction: String,
    #[tabled(rename = "Avg Resolution Time")]
    resolution: String,
}

impl From<&Agent> for AgentRow {
    fn from(a: &Agent) -> Self {
        let status = if a.is_available {
            a.availability_label().green()
        } else {
            a.availability_label().dimmed()
        };
        Self {
            avatar: a.initial(),
            name: a.name.clone(),
            email: a.email.clone(),
            status: status.to_string(),
            expertise: a.expertise.clone(),
            handled: a.total_tickets_handled,
            satisfaction: format!("{:.1}", a.customer_satisfaction_score),
            resolution: format!("{:.1}h", a.average_resolution_time),
        }
    }
}

pub fn agents_table(agents: &[Agent]) -> String {
    if agents.is_empty() {
        return "No agents".to_string();
    }
    Table::new(agents.iter().map(AgentRow::from)).with(Style::rounded()).to_string()
}

pub fn agent_roster(state: &Loadable<Vec<Agent>>) -> String {
    match state {
        Loadable::Pending => "Loading agents...".to_string(),
        Loadable::Failed(err) => format!("Could not load agents: {}", err).red().to_string(),
        Loadable::Ready(agents) => format!("{}\n\n{}", "Support Agents".bold(), agents_table(agents)),
    }
}

pub fn agent_stats(stats: &AgentStats) -> String {
    format!(
        "{} (#{})\nWorkload:    {} open, {} in progress, {} active\nPerformance: {} handled, {} resolved, {:.1}h avg, {:.1} satisfaction\nCapacity:    {}/{} tickets, {} slots free",
        stats.name.bold(),
        stats.agent_id,
        stats.current_workload.open,
        stats.current_workload.in_progress,
        stats.current_workload.total_active,
        stats.performance.total_handled,
        stats.performance.resolved,
        stats.performance.avg_resolution_time,
        stats.performance.satisfaction_score,
        stats.capacity.current_tickets,
        stats.capacity.max_tickets,
        stats.capacity.available_slots,
    )
}

pub fn classification(c: &Classification) -> String {
    let mut out = format!("Category: {} ({})", c.category, percent(c.confidence));
    for (category, score) in &c.all_predictions {
        out.push_str(&format!("\n  {:<16} {}", category, percent(*score)));
    }
    out
}

pub fn sentiment(s: &SentimentAnalysis) -> String {
    format!(
        "Sentiment: {} ({:.2})\nUrgency:   {}",
        s.sentiment,
        s.score,
        percent(s.urgency_score)
    )
}

pub fn model_status(status: &ModelStatus) -> String {
    let flag = |loaded: bool| if loaded { "loaded".green() } else { "not loaded".red() };
    let mut out = format!(
        "Classification: {}\nSentiment:      {}\nEmbeddings:     {}\nRAG:            {}",
        flag(status.classification_model),
        flag(status.sentiment_model),
        flag(status.embedding_model),
        flag(status.rag_system),
    );
    if let Some(note) = &status.note {
        out.push_str(&format!("\n{}", note.dimmed()));
    }
    out
}

pub fn trend_report(report: &TrendReport) -> String {
    let mut builder = tabled::builder::Builder::default();
    builder.push_record(["Date", "Tickets"]);
    for (date, count) in &report.daily_breakdown {
        builder.push_record([date.clone(), count.to_string()]);
    }
    format!(
        "{} tickets in the last {} days\n{}",
        report.total_tickets,
        report.period_days,
        builder.build().with(Style::rounded())
    )
}

pub fn top_issues(issues: &TopIssues) -> String {
    let points: Vec<ChartPoint> = issues
        .top_categories
        .iter()
        .map(|i| ChartPoint { name: crate::models::ticket::display_label(&i.category), value: i.count })
        .collect();
    points_table("Top Issues", &points)
}

pub fn performance(m: &PerformanceMetrics) -> String {
    format!(
        "Resolution rate:   {:.1}% ({}/{})\nAgent utilization: {:.1}% ({}/{})",
        m.resolution_rate,
        m.resolved_tickets,
        m.total_tickets,
        m.agent_utilization,
        m.current_load,
        m.total_capacity
    )
}

fn points_table(title: &str, points: &[ChartPoint]) -> String {
    if points.is_empty() {
        return format!("{}\n(no data)", title.bold());
    }
    let rows: Vec<[String; 2]> = points.iter().map(|p| [p.name.clone(), p.value.to_string()]).collect();
    let mut builder = tabled::builder::Builder::default();
    for row in rows {
        builder.push_record(row);
    }
    format!("{}\n{}", title.bold(), builder.build().with(Style::rounded()))
}

fn trend_table(points: &[TrendPoint]) -> String {
    let title = "Ticket Trends (Last 7 Days)";
    if points.is_empty() {
        return format!("{}\n(no data)", title.bold());
    }
    let mut builder = tabled::builder::Builder::default();
    builder.push_record(points.iter().map(|p| p.date.clone()));
    builder.push_record(points.iter().map(|p| p.tickets.to_string()));
    format!("{}\n{}", title.bold(), builder.build().with(Style::rounded()))
}

fn cards_line(cards: &[StatCard]) -> String {
    cards
        .iter()
        .map(|c| format!("{}: {}", c.title, c.value.bold()))
        .collect::<Vec<_>>()
        .join("   ")
}

pub fn dashboard(state: &Loadable<impl Sized>, charts: Option<&DashboardCharts>) -> String {
    if state.is_pending() {
        return "Loading dashboard...".to_string();
    }
    let Some(charts) = charts else {
        return "No data available".to_string();
    };

    let performers = charts
        .top_performers
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "{}. {} - {} tickets, {:.1}h avg, {:.1} satisfaction",
                i + 1,
                p.name,
                p.tickets_handled,
                p.avg_resolution_time,
                p.satisfaction_score
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    [
        "Dashboard".bold().to_string(),
        cards_line(&charts.cards),
        trend_table(&charts.trend),
        points_table("Tickets by Category", &charts.by_category),
        points_table("Tickets by Priority", &charts.by_priority),
        points_table("Sentiment Analysis", &charts.by_sentiment),
        format!("{}\n{}", "Top Performing Agents".bold(), performers),
    ]
    .join("\n\n")
}
