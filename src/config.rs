use serde::{Deserialize, Serialize};

/// A published winner shown in the results section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub team: String,
    pub prize: Option<String>,
}

impl ResultEntry {
    /// List-item text, `"{team} — {prize}"` with an empty prize slot
    /// when none was awarded.
    pub fn line(&self) -> String {
        format!("{} — {}", self.team, self.prize.as_deref().unwrap_or(""))
    }
}

/// Everything the organizers edit between events, constructed once in
/// `run_app` and passed down through props.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Registration deadline, ISO 8601 with offset (Asia/Kolkata for the
    /// shipped default). `None` leaves the countdown unconfigured.
    pub deadline_iso: Option<String>,
    /// Registration form link. The QR asset should point at the same URL.
    pub registration_url: String,
    /// Winners to publish. Empty keeps the results section hidden.
    pub results: Vec<ResultEntry>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            deadline_iso: Some("2025-12-04T23:59:00+05:30".to_string()),
            registration_url: "https://forms.gle/dJbyP8mcZ4eHjiiX9".to_string(),
            results: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_a_deadline_and_a_link() {
        let config = SiteConfig::default();
        assert!(config.deadline_iso.is_some());
        assert!(config.registration_url.contains("http"));
        assert!(config.results.is_empty());
    }

    #[test]
    fn result_line_formats_team_and_prize() {
        let entry = ResultEntry {
            team: "X".to_string(),
            prize: Some("1st".to_string()),
        };
        assert_eq!(entry.line(), "X — 1st");
    }

    #[test]
    fn result_line_with_no_prize_keeps_the_dash() {
        let entry = ResultEntry {
            team: "Team Gamma".to_string(),
            prize: None,
        };
        assert_eq!(entry.line(), "Team Gamma — ");
    }

    #[test]
    fn result_entry_round_trips_through_json() {
        let entry = ResultEntry {
            team: "Team Alpha".to_string(),
            prize: Some("1st Prize".to_string()),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("Team Alpha"));
        let back: ResultEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
