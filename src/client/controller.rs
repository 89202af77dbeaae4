use std::time::Duration;

use chrono::Utc;

use super::api::{RegistrationForm, ScrimApi};
use super::directory::DirectoryFilter;
use super::error::ClientError;
use super::links::ContactLinks;
use super::persistence::SessionPersistence;
use super::scrims::ScrimSubmission;
use super::state::{ClientState, Tab};
use super::storage::KeyValueStore;
use super::view::{View, render};
use crate::database::models::{TeamInfo, TeamStatus, UpdateStatusInput};

pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_secs(2);

struct Credentials {
    email: String,
    password: String,
}

/// Drives the client: applies user actions, persists and re-renders after each one.
pub struct ScrimClient<A: ScrimApi, S: KeyValueStore> {
    api: A,
    persistence: SessionPersistence<S>,
    state: ClientState,
    view: View,
    // kept in memory for status write-back, never persisted
    credentials: Option<Credentials>,
    search_delay: Duration,
}

impl<A: ScrimApi, S: KeyValueStore> ScrimClient<A, S> {
    /// Restores whatever the store holds and renders it.
    pub fn start(api: A, store: S) -> Self {
        let persistence = SessionPersistence::new(store);
        let state = ClientState::restored(persistence.restore());
        let view = render(&state);

        if let Some(team) = state.current_team() {
            log::info!("Restored session for team {}", team.id);
        }

        Self {
            api,
            persistence,
            state,
            view,
            credentials: None,
            search_delay: DEFAULT_SEARCH_DELAY,
        }
    }

    pub fn with_search_delay(mut self, delay: Duration) -> Self {
        self.search_delay = delay;
        self
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        self.persistence.store()
    }

    fn commit(&mut self, next: ClientState, persist: bool) {
        self.state = next;
        if persist {
            let session = self.state.directory.to_session(Utc::now());
            self.persistence.save(
                session.as_ref(),
                &self.state.notifications,
                &self.state.scrim_results,
            );
        }
        self.view = render(&self.state);
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<&View, ClientError> {
        let directory = self.state.directory.login(&self.api, email, password).await?;

        if let Some(team) = directory.current() {
            log::info!("Team {} logged in, {} teams listed", team.id, directory.teams().len());
        }

        self.credentials = Some(Credentials {
            email: email.trim().to_string(),
            password: password.to_string(),
        });
        let next = self.state.logged_in(directory);
        self.commit(next, true);

        Ok(&self.view)
    }

    /// Registers a team. The caller logs in afterwards.
    pub async fn register(&mut self, form: &RegistrationForm) -> Result<TeamInfo, ClientError> {
        let input = form.validate()?;
        let team = self.api.register(input).await?;

        log::info!("Registered team {} ({})", team.team_name, team.id);
        Ok(team)
    }

    pub async fn refresh_directory(&mut self) -> Result<&View, ClientError> {
        if !self.state.is_authenticated() {
            return Ok(&self.view);
        }

        let teams = self.api.fetch_teams().await?;
        let next = self.state.with_directory_teams(teams);
        self.commit(next, true);

        Ok(&self.view)
    }

    pub fn logout(&mut self) -> &View {
        self.persistence.clear();
        self.credentials = None;

        let next = self.state.logged_out();
        self.commit(next, false);

        &self.view
    }

    pub async fn set_status(&mut self, status: TeamStatus) -> &View {
        let next = self.state.with_status(status);
        self.commit(next, true);
        self.push_status().await;

        &self.view
    }

    /// Flips between searching and available. Returns whether the team is now searching.
    pub async fn toggle_search(&mut self) -> bool {
        if !self.state.is_authenticated() {
            return false;
        }

        let next = self.state.toggled_search();
        self.commit(next, true);
        self.push_status().await;

        self.state.is_searching()
    }

    /// Waits out the search delay, then appends a match-interest notification
    /// unless the search was cancelled in the meantime.
    pub async fn wait_for_match_interest(&mut self) -> &View {
        if self.state.is_searching() {
            tokio::time::sleep(self.search_delay).await;

            let next = self.state.with_match_interest(Utc::now());
            if next != self.state {
                self.commit(next, true);
            }
        }

        &self.view
    }

    pub fn send_offer(&mut self, team_id: i64) -> Result<ContactLinks, ClientError> {
        let (next, links) = self.state.with_offer_sent(team_id, Utc::now())?;
        log::debug!("Offer sent to team {}", team_id);
        self.commit(next, true);

        Ok(links)
    }

    pub fn upload_result(&mut self, submission: ScrimSubmission) -> Result<&View, ClientError> {
        let next = self.state.with_scrim_result(submission, Utc::now())?;
        self.commit(next, true);

        Ok(&self.view)
    }

    pub fn mark_notification_read(&mut self, id: i64) -> &View {
        let next = self.state.with_notification_read(id);
        self.commit(next, true);
        &self.view
    }

    pub fn mark_all_notifications_read(&mut self) -> &View {
        let next = self.state.with_all_notifications_read();
        self.commit(next, true);
        &self.view
    }

    pub fn switch_tab(&mut self, tab: Tab) -> &View {
        let next = self.state.with_tab(tab);
        self.commit(next, false);
        &self.view
    }

    pub fn toggle_team_details(&mut self, team_id: i64) -> &View {
        let next = self.state.toggled_expanded(team_id);
        self.commit(next, false);
        &self.view
    }

    pub fn set_filter(&mut self, filter: DirectoryFilter) -> &View {
        let next = self.state.with_filter(filter);
        self.commit(next, false);
        &self.view
    }

    pub fn toggle_language(&mut self) -> &View {
        let next = self.state.toggled_lang();
        self.commit(next, false);
        &self.view
    }

    async fn push_status(&self) {
        let (Some(credentials), Some(team)) = (&self.credentials, self.state.current_team())
        else {
            return;
        };

        let input = UpdateStatusInput {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
            status: team.status,
        };

        if let Err(e) = self.api.update_status(team.id, input).await {
            log::warn!("Failed to push status for team {}: {}", team.id, e);
        }
    }
}
