//! Pure view models derived from [`ClientState`]. Rendering never mutates state.

use super::i18n::Lang;
use super::links::{ContactLinks, offer_links};
use super::notifications::Notification;
use super::scrims::{Outcome, ScrimResult};
use super::state::{ClientState, Tab};
use crate::database::models::{TeamInfo, TeamStatus};
use crate::regions::Country;

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Landing(LandingView),
    Shell(ShellView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LandingView {
    pub title: String,
    pub tagline: String,
    pub login_label: String,
    pub register_label: String,
    pub forgot_password_label: String,
    /// Shown when the forgot-password link is followed; there is no self-service reset.
    pub password_reset_help: String,
    pub lang_toggle: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShellView {
    pub header: HeaderView,
    pub tabs: Vec<TabView>,
    pub body: TabBody,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub title: String,
    pub team_name: String,
    pub logo: Option<String>,
    /// Unread count, absent when nothing is unread.
    pub badge: Option<usize>,
    pub lang_toggle: String,
    pub logout_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabView {
    pub tab: Tab,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TabBody {
    FindMatch(FindMatchView),
    MyTeam(MyTeamView),
    Notifications(NotificationsView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FindMatchView {
    pub country_options: Vec<SelectOption>,
    /// Empty until a country is picked.
    pub province_options: Vec<SelectOption>,
    pub search_button: String,
    pub searching_indicator: Option<String>,
    pub groups: Vec<GroupView>,
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupView {
    pub heading: String,
    pub teams: Vec<TeamCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamCard {
    pub id: i64,
    pub team_name: String,
    pub logo: Option<String>,
    pub province: String,
    pub status: StatusBadge,
    pub expanded: Option<TeamDetails>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamDetails {
    pub captain_name: String,
    pub country: String,
    pub whatsapp: String,
    pub email: String,
    pub links: ContactLinks,
    pub offer_label: String,
    pub offer_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusBadge {
    pub label: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfoRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MyTeamView {
    pub heading: String,
    pub logo: Option<String>,
    pub rows: Vec<InfoRow>,
    pub status: StatusBadge,
    pub search_button: String,
    pub upload_label: String,
    pub stats: StatsView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCount {
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsView {
    pub heading: String,
    pub total: StatCount,
    pub wins: StatCount,
    pub losses: StatCount,
    pub draws: StatCount,
    pub results: Vec<ResultRow>,
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub opponent_name: String,
    pub score: String,
    pub outcome: String,
    pub tone: Tone,
    pub screenshot: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationsView {
    pub mark_all_label: Option<String>,
    pub items: Vec<NotificationItem>,
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationItem {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub timestamp: String,
    pub read: bool,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
}

pub fn render(state: &ClientState) -> View {
    let lang = state.lang;
    let labels = lang.labels();

    let Some(me) = state.current_team() else {
        return View::Landing(LandingView {
            title: labels.title.to_string(),
            tagline: labels.tagline.to_string(),
            login_label: labels.login.to_string(),
            register_label: labels.register.to_string(),
            forgot_password_label: labels.forgot_password.to_string(),
            password_reset_help: labels.password_reset_help.to_string(),
            lang_toggle: lang.toggle_label().to_string(),
        });
    };

    let unread = state.notifications.unread_count();
    let header = HeaderView {
        title: labels.title.to_string(),
        team_name: me.team_name.clone(),
        logo: me.logo.clone(),
        badge: (unread > 0).then_some(unread),
        lang_toggle: lang.toggle_label().to_string(),
        logout_label: labels.logout.to_string(),
    };

    let tabs = [
        (Tab::FindMatch, labels.find_match),
        (Tab::MyTeam, labels.my_team),
        (Tab::Notifications, labels.notifications),
    ]
    .into_iter()
    .map(|(tab, label)| TabView {
        tab,
        label: label.to_string(),
        active: tab == state.tab,
    })
    .collect();

    let body = match state.tab {
        Tab::FindMatch => TabBody::FindMatch(find_match(state, me)),
        Tab::MyTeam => TabBody::MyTeam(my_team(state, me)),
        Tab::Notifications => TabBody::Notifications(notifications(state)),
    };

    View::Shell(ShellView { header, tabs, body })
}

fn status_badge(lang: Lang, status: TeamStatus) -> StatusBadge {
    let tone = match status {
        TeamStatus::Available => Tone::Success,
        TeamStatus::Searching => Tone::Warning,
        TeamStatus::InMatch => Tone::Danger,
    };

    StatusBadge {
        label: lang.status_label(status).to_string(),
        tone,
    }
}

fn search_button(lang: Lang, me: &TeamInfo) -> String {
    let labels = lang.labels();
    if me.status == TeamStatus::Searching {
        labels.cancel_search.to_string()
    } else {
        labels.searching_match.to_string()
    }
}

fn find_match(state: &ClientState, me: &TeamInfo) -> FindMatchView {
    let lang = state.lang;
    let labels = lang.labels();

    let mut country_options = vec![SelectOption {
        value: String::new(),
        label: labels.select_country.to_string(),
        selected: state.filter.country.is_none(),
    }];
    country_options.extend(Country::ALL.iter().map(|country| SelectOption {
        value: country.as_str().to_string(),
        label: lang.country_label(*country).to_string(),
        selected: state.filter.country == Some(*country),
    }));

    let province_options = match state.filter.country {
        Some(country) => {
            let mut options = vec![SelectOption {
                value: String::new(),
                label: labels.select_province.to_string(),
                selected: state.filter.province.is_none(),
            }];
            options.extend(country.provinces().iter().map(|province| SelectOption {
                value: province.to_string(),
                label: province.to_string(),
                selected: state.filter.province.as_deref() == Some(*province),
            }));
            options
        }
        None => Vec::new(),
    };

    let groups: Vec<GroupView> = state
        .directory
        .grouped(&state.filter)
        .into_iter()
        .map(|group| GroupView {
            heading: format!("{} {}", labels.teams_from, lang.country_label(group.country)),
            teams: group
                .teams
                .iter()
                .map(|team| team_card(state, me, team))
                .collect(),
        })
        .collect();

    FindMatchView {
        country_options,
        province_options,
        search_button: search_button(lang, me),
        searching_indicator: (me.status == TeamStatus::Searching)
            .then(|| labels.searching_indicator.to_string()),
        empty_message: groups.is_empty().then(|| labels.no_teams.to_string()),
        groups,
    }
}

fn team_card(state: &ClientState, me: &TeamInfo, team: &TeamInfo) -> TeamCard {
    let lang = state.lang;

    let expanded = (state.expanded_team == Some(team.id)).then(|| TeamDetails {
        captain_name: team.captain_name.clone(),
        country: lang.country_label(team.country).to_string(),
        whatsapp: team.whatsapp.clone(),
        email: team.email.clone(),
        links: offer_links(me, team, lang),
        offer_label: lang.labels().send_offer.to_string(),
        offer_enabled: team.status != TeamStatus::InMatch,
    });

    TeamCard {
        id: team.id,
        team_name: team.team_name.clone(),
        logo: team.logo.clone(),
        province: team.province.clone(),
        status: status_badge(lang, team.status),
        expanded,
    }
}

fn my_team(state: &ClientState, me: &TeamInfo) -> MyTeamView {
    let lang = state.lang;
    let labels = lang.labels();

    let rows = [
        (labels.team_name, me.team_name.clone()),
        (labels.captain_name, me.captain_name.clone()),
        (labels.country, lang.country_label(me.country).to_string()),
        (labels.province, me.province.clone()),
        (labels.whatsapp, me.whatsapp.clone()),
        (labels.email, me.email.clone()),
    ]
    .into_iter()
    .map(|(label, value)| InfoRow {
        label: label.to_string(),
        value,
    })
    .collect();

    let stats = state.scrim_results.stats_for(me.id);
    let results: Vec<ResultRow> = stats
        .results
        .iter()
        .map(|result| result_row(lang, result))
        .collect();

    MyTeamView {
        heading: labels.team_info.to_string(),
        logo: me.logo.clone(),
        rows,
        status: status_badge(lang, me.status),
        search_button: search_button(lang, me),
        upload_label: labels.upload_results.to_string(),
        stats: StatsView {
            heading: labels.match_history.to_string(),
            total: stat_count(labels.total, stats.total),
            wins: stat_count(labels.wins, stats.wins),
            losses: stat_count(labels.losses, stats.losses),
            draws: stat_count(labels.draws, stats.draws),
            empty_message: results.is_empty().then(|| labels.no_results.to_string()),
            results,
        },
    }
}

fn stat_count(label: &str, value: usize) -> StatCount {
    StatCount {
        label: label.to_string(),
        value,
    }
}

fn result_row(lang: Lang, result: &ScrimResult) -> ResultRow {
    let labels = lang.labels();
    let (outcome, tone) = match result.outcome() {
        Outcome::Win => (labels.win, Tone::Success),
        Outcome::Loss => (labels.loss, Tone::Danger),
        Outcome::Draw => (labels.draw, Tone::Warning),
    };

    ResultRow {
        opponent_name: result.opponent_name.clone(),
        score: format!("{} - {}", result.your_score, result.opponent_score),
        outcome: outcome.to_string(),
        tone,
        screenshot: result.screenshot.clone(),
    }
}

fn notifications(state: &ClientState) -> NotificationsView {
    let labels = state.lang.labels();
    let entries = state.notifications.entries();

    let items: Vec<NotificationItem> = entries.iter().map(notification_item).collect();

    NotificationsView {
        mark_all_label: (state.notifications.unread_count() > 0)
            .then(|| labels.mark_all_read.to_string()),
        empty_message: items.is_empty().then(|| labels.no_notifications.to_string()),
        items,
    }
}

fn notification_item(notification: &Notification) -> NotificationItem {
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());

    NotificationItem {
        id: notification.id,
        title: notification.title.clone(),
        message: notification.message.clone(),
        timestamp: notification.timestamp.clone(),
        read: notification.read,
        whatsapp: non_empty(&notification.whatsapp),
        email: non_empty(&notification.email),
    }
}
