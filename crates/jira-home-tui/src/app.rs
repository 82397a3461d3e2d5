//! Application state management

use jira_home_client::{CredentialProvider, ProxyClient};
use jira_home_core::models::{Issue, ProjectOverview};
use jira_home_core::DashboardViews;
use ratatui::widgets::TableState;
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio_util::sync::CancellationToken;

pub type FetchResult = Result<ProjectOverview, String>;

/// Where the dashboard is in its single fetch
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Loading,
    Error(String),
    Ready(Box<Dashboard>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub project: ProjectOverview,
    pub views: DashboardViews,
}

impl Dashboard {
    pub fn new(project: ProjectOverview) -> Self {
        let views = DashboardViews::from_overview(&project);
        Self { project, views }
    }

    pub fn issues(&self, pane: IssuePane) -> &[Issue] {
        match pane {
            IssuePane::Open => &self.views.open_issues,
            IssuePane::Incoming => &self.views.incoming_issues,
            IssuePane::AssignedToMe => &self.views.assigned_to_me,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssuePane {
    Open,
    Incoming,
    AssignedToMe,
}

impl IssuePane {
    pub fn title(self) -> &'static str {
        match self {
            Self::Open => "Open Issues",
            Self::Incoming => "Incoming Issues",
            Self::AssignedToMe => "Assigned to Me",
        }
    }

    /// Whether the table body is rendered. Incoming rows stay hidden until
    /// "incoming" has its own definition.
    pub fn shows_rows(self) -> bool {
        !matches!(self, Self::Incoming)
    }

    pub fn next(self) -> Self {
        match self {
            Self::Open => Self::Incoming,
            Self::Incoming => Self::AssignedToMe,
            Self::AssignedToMe => Self::Open,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Open => 0,
            Self::Incoming => 1,
            Self::AssignedToMe => 2,
        }
    }
}

pub struct App {
    pub state: DashboardState,
    pub focused_pane: IssuePane,
    pub table_states: [TableState; 3],
    pub status_message: String,
    pub should_quit: bool,

    cancel: CancellationToken,
    fetch_rx: Option<oneshot::Receiver<FetchResult>>,
    fetch_started: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            state: DashboardState::Loading,
            focused_pane: IssuePane::Open,
            table_states: Default::default(),
            status_message: String::new(),
            should_quit: false,
            cancel: CancellationToken::new(),
            fetch_rx: None,
            fetch_started: false,
        }
    }

    /// Spawn the one and only project fetch. Later calls are ignored.
    pub fn start_fetch(
        &mut self,
        client: Arc<ProxyClient>,
        credentials: Arc<dyn CredentialProvider>,
    ) {
        if self.fetch_started {
            tracing::warn!("Project fetch already started");
            return;
        }
        self.fetch_started = true;

        let (tx, rx) = oneshot::channel();
        self.fetch_rx = Some(rx);

        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("Project fetch cancelled");
                }
                result = load_project(client, credentials) => {
                    let _ = tx.send(result);
                }
            }
        });
    }

    /// Pick up the fetch result if it has arrived
    pub fn poll_fetch(&mut self) {
        let Some(rx) = self.fetch_rx.as_mut() else {
            return;
        };

        match rx.try_recv() {
            Ok(result) => {
                self.fetch_rx = None;
                self.apply_fetch_result(result);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => {
                self.fetch_rx = None;
                if !self.cancel.is_cancelled() {
                    self.apply_fetch_result(Err("Project fetch ended unexpectedly".to_string()));
                }
            }
        }
    }

    pub fn apply_fetch_result(&mut self, result: FetchResult) {
        if self.cancel.is_cancelled() {
            return;
        }

        if !matches!(self.state, DashboardState::Loading) {
            tracing::warn!("Ignoring fetch result, dashboard already settled");
            return;
        }

        self.state = match result {
            Ok(project) => {
                tracing::info!(
                    issues = project.issues.len(),
                    assigned = project.assigned_to_me.len(),
                    "Project data loaded"
                );
                DashboardState::Ready(Box::new(Dashboard::new(project)))
            }
            Err(message) => {
                tracing::error!("Failed to load project data: {}", message);
                DashboardState::Error(message)
            }
        };
    }

    pub fn is_fetch_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match &self.state {
            DashboardState::Ready(dashboard) => Some(dashboard.as_ref()),
            _ => None,
        }
    }

    pub fn table_state_mut(&mut self, pane: IssuePane) -> &mut TableState {
        &mut self.table_states[pane.index()]
    }

    pub fn focus_next(&mut self) {
        self.focused_pane = self.focused_pane.next();
    }

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_previous(&mut self) {
        self.move_selection(-1);
    }

    fn move_selection(&mut self, delta: isize) {
        let pane = self.focused_pane;
        if !pane.shows_rows() {
            return;
        }

        let len = self.dashboard().map(|d| d.issues(pane).len()).unwrap_or(0);
        if len == 0 {
            return;
        }

        let state = self.table_state_mut(pane);
        let current = state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        state.select(Some(next));
    }

    /// URL behind the "Go to Project" link
    pub fn project_link(&self) -> Option<&str> {
        self.dashboard().map(|d| d.project.self_url.as_str())
    }

    pub fn quit(&mut self) {
        self.cancel.cancel();
        self.should_quit = true;
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn load_project(
    client: Arc<ProxyClient>,
    credentials: Arc<dyn CredentialProvider>,
) -> FetchResult {
    let creds = tokio::task::spawn_blocking(move || credentials.get_credentials())
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| e.to_string())?;

    client.fetch_project(&creds).await.map_err(|e| e.to_string())
}
