//! Interface strings for the two supported languages.

use serde::{Deserialize, Serialize};

use crate::database::models::TeamStatus;
use crate::regions::Country;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Id,
    En,
}

#[derive(Debug)]
pub struct Labels {
    pub title: &'static str,
    pub tagline: &'static str,
    pub login: &'static str,
    pub register: &'static str,
    pub logout: &'static str,
    pub forgot_password: &'static str,
    pub password_reset_help: &'static str,
    pub find_match: &'static str,
    pub my_team: &'static str,
    pub notifications: &'static str,
    pub upload_results: &'static str,
    pub team_info: &'static str,
    pub team_name: &'static str,
    pub captain_name: &'static str,
    pub whatsapp: &'static str,
    pub email: &'static str,
    pub country: &'static str,
    pub province: &'static str,
    pub status: &'static str,
    pub select_country: &'static str,
    pub select_province: &'static str,
    pub searching_match: &'static str,
    pub cancel_search: &'static str,
    pub searching_indicator: &'static str,
    pub available: &'static str,
    pub searching: &'static str,
    pub in_match: &'static str,
    pub send_offer: &'static str,
    pub no_teams: &'static str,
    pub no_notifications: &'static str,
    pub teams_from: &'static str,
    pub mark_all_read: &'static str,
    pub match_history: &'static str,
    pub total: &'static str,
    pub wins: &'static str,
    pub losses: &'static str,
    pub draws: &'static str,
    pub win: &'static str,
    pub loss: &'static str,
    pub draw: &'static str,
    pub no_results: &'static str,
    pub offer_title: &'static str,
    pub match_interest_title: &'static str,
    pub match_interest_message: &'static str,
    pub offer_subject: &'static str,
}

static ID: Labels = Labels {
    title: "Honor of Kings Scrim Finder",
    tagline: "Temukan Lawan Scrim Terbaik",
    login: "Masuk",
    register: "Daftar Tim",
    logout: "Keluar",
    forgot_password: "Lupa Kata Sandi?",
    password_reset_help: "Fitur reset kata sandi otomatis tidak tersedia. \
        Silakan hubungi admin kami melalui email: support@hokscrim.com",
    find_match: "Cari Lawan",
    my_team: "Tim Saya",
    notifications: "Notifikasi",
    upload_results: "Upload Hasil",
    team_info: "Informasi Tim",
    team_name: "Nama Tim",
    captain_name: "Nama Kapten/Manager",
    whatsapp: "Nomor WhatsApp",
    email: "Email",
    country: "Negara",
    province: "Provinsi",
    status: "Status",
    select_country: "Pilih Negara",
    select_province: "Pilih Provinsi",
    searching_match: "Mencari Lawan",
    cancel_search: "Batal Mencari",
    searching_indicator: "Sedang Mencari...",
    available: "Tersedia",
    searching: "Sedang Mencari",
    in_match: "Dalam Pertandingan",
    send_offer: "Kirim Tawaran",
    no_teams: "Tidak ada tim tersedia",
    no_notifications: "Tidak ada notifikasi",
    teams_from: "Tim dari",
    mark_all_read: "Tandai semua dibaca",
    match_history: "Riwayat Pertandingan",
    total: "Total",
    wins: "Menang",
    losses: "Kalah",
    draws: "Seri",
    win: "Menang",
    loss: "Kalah",
    draw: "Seri",
    no_results: "Belum ada hasil pertandingan",
    offer_title: "Tawaran Scrim",
    match_interest_title: "Lawan Ditemukan",
    match_interest_message: "Ada tim yang tertarik untuk scrim dengan Anda!",
    offer_subject: "Tawaran Scrim Honor of Kings",
};

static EN: Labels = Labels {
    title: "Honor of Kings Scrim Finder",
    tagline: "Find the Best Scrim Opponents",
    login: "Login",
    register: "Register Team",
    logout: "Logout",
    forgot_password: "Forgot Password?",
    password_reset_help: "Automatic password reset is unavailable. \
        Please contact our admin via email: support@hokscrim.com",
    find_match: "Find Match",
    my_team: "My Team",
    notifications: "Notifications",
    upload_results: "Upload Results",
    team_info: "Team Information",
    team_name: "Team Name",
    captain_name: "Captain/Manager Name",
    whatsapp: "WhatsApp Number",
    email: "Email",
    country: "Country",
    province: "Province",
    status: "Status",
    select_country: "Select Country",
    select_province: "Select Province",
    searching_match: "Searching for Match",
    cancel_search: "Cancel Search",
    searching_indicator: "Searching...",
    available: "Available",
    searching: "Searching",
    in_match: "In Match",
    send_offer: "Send Offer",
    no_teams: "No teams available",
    no_notifications: "No notifications",
    teams_from: "Teams from",
    mark_all_read: "Mark all as read",
    match_history: "Match History",
    total: "Total",
    wins: "Wins",
    losses: "Losses",
    draws: "Draws",
    win: "Win",
    loss: "Loss",
    draw: "Draw",
    no_results: "No match results yet",
    offer_title: "Scrim Offer",
    match_interest_title: "Match Found",
    match_interest_message: "A team is interested in scrimming with you!",
    offer_subject: "Honor of Kings Scrim Offer",
};

impl Lang {
    pub fn labels(&self) -> &'static Labels {
        match self {
            Lang::Id => &ID,
            Lang::En => &EN,
        }
    }

    pub fn toggled(&self) -> Lang {
        match self {
            Lang::Id => Lang::En,
            Lang::En => Lang::Id,
        }
    }

    /// Label of the button that switches to the other language.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Lang::Id => "EN",
            Lang::En => "ID",
        }
    }

    pub fn status_label(&self, status: TeamStatus) -> &'static str {
        let labels = self.labels();
        match status {
            TeamStatus::Available => labels.available,
            TeamStatus::Searching => labels.searching,
            TeamStatus::InMatch => labels.in_match,
        }
    }

    pub fn country_label(&self, country: Country) -> &'static str {
        match (self, country) {
            (Lang::Id, Country::Philippines) => "Filipina",
            (_, country) => country.as_str(),
        }
    }

    pub fn offer_message(&self, sender: &str) -> String {
        match self {
            Lang::Id => format!("{} mengirim tawaran scrim!", sender),
            Lang::En => format!("{} sent you a scrim offer!", sender),
        }
    }

    pub fn offer_body(&self, sender: &str, receiver: &str) -> String {
        match self {
            Lang::Id => format!(
                "Halo {}, tim {} ingin mengajak scrim. Kapan kalian siap?",
                receiver, sender
            ),
            Lang::En => format!(
                "Hi {}, team {} would like to scrim with you. When are you ready?",
                receiver, sender
            ),
        }
    }
}
