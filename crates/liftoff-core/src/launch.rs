//! Launch domain types
//!
//! [`LaunchRecord`] mirrors the JSON shape served by the SpaceX v3 launches
//! endpoint. The upstream data is not fully regular -- `launch_year` arrives
//! as a JSON string, `launch_success` is absent for upcoming flights, and
//! whole sub-objects like `links` can be missing -- so every optional field
//! deserializes defensively instead of failing the page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Optional media and article links attached to a launch.
///
/// Defaulted when the upstream record carries no `links` object at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LaunchLinks {
    pub article_link: Option<String>,
    pub video_link: Option<String>,
    pub mission_patch_small: Option<String>,
}

impl LaunchLinks {
    /// True when no link of any kind is present.
    pub fn is_empty(&self) -> bool {
        self.article_link.is_none() && self.video_link.is_none() && self.mission_patch_small.is_none()
    }
}

/// A single launch as served by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LaunchRecord {
    /// Unique within the dataset; the stable list key and details-panel id.
    pub flight_number: u32,

    pub mission_name: String,

    /// `None` for flights that have not happened yet.
    #[serde(default)]
    pub launch_success: Option<bool>,

    #[serde(default)]
    pub upcoming: bool,

    /// Served as a JSON string by the v3 API; accepts a number too.
    #[serde(default, deserialize_with = "year_lenient")]
    pub launch_year: Option<i32>,

    #[serde(default)]
    pub launch_date_utc: Option<DateTime<Utc>>,

    #[serde(default)]
    pub details: Option<String>,

    #[serde(default)]
    pub links: LaunchLinks,
}

/// Derived launch outcome, following the upstream rendering rule:
/// a successful flight wins, otherwise an upcoming one, otherwise failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStatus {
    Success,
    Upcoming,
    Failed,
}

impl LaunchStatus {
    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            LaunchStatus::Success => "Success",
            LaunchStatus::Upcoming => "Upcoming",
            LaunchStatus::Failed => "Failed",
        }
    }
}

impl LaunchRecord {
    /// Derive the launch outcome.
    pub fn status(&self) -> LaunchStatus {
        if self.launch_success == Some(true) {
            LaunchStatus::Success
        } else if self.upcoming {
            LaunchStatus::Upcoming
        } else {
            LaunchStatus::Failed
        }
    }

    /// Whole years between `now_year` and the launch year, if known.
    pub fn years_ago(&self, now_year: i32) -> Option<i32> {
        self.launch_year.map(|year| now_year - year)
    }

    /// Case-insensitive substring match of the mission name.
    ///
    /// An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.mission_name
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

/// Accept `"2008"` or `2008`; anything unparseable becomes `None`.
fn year_lenient<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearRepr {
        Num(i32),
        Text(String),
    }

    Ok(match Option::<YearRepr>::deserialize(deserializer)? {
        None => None,
        Some(YearRepr::Num(n)) => Some(n),
        Some(YearRepr::Text(s)) => s.parse().ok(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"[
        {
            "flight_number": 1,
            "mission_name": "FalconSat",
            "launch_year": "2006",
            "launch_date_utc": "2006-03-24T22:30:00.000Z",
            "launch_success": false,
            "upcoming": false,
            "details": "Engine failure at 33 seconds and loss of vehicle",
            "links": {
                "mission_patch_small": "https://images2.imgbox.com/3c/0e/T8iJcSN3_o.png",
                "article_link": "https://www.space.com/2196-spacex-inaugural-falcon-1-rocket-lost-launch.html",
                "video_link": "https://www.youtube.com/watch?v=0a_00nJ_Y88"
            }
        },
        {
            "flight_number": 110,
            "mission_name": "Starlink-15 (v1.0)",
            "launch_year": "2020",
            "launch_success": true,
            "upcoming": false,
            "details": null
        }
    ]"#;

    #[test]
    fn test_parse_launch_page() {
        let launches: Vec<LaunchRecord> = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(launches.len(), 2);

        let first = &launches[0];
        assert_eq!(first.flight_number, 1);
        assert_eq!(first.mission_name, "FalconSat");
        assert_eq!(first.launch_year, Some(2006));
        assert_eq!(first.launch_success, Some(false));
        assert!(first.links.article_link.is_some());
        assert!(first.launch_date_utc.is_some());
    }

    #[test]
    fn test_missing_links_and_details_tolerated() {
        let launches: Vec<LaunchRecord> = serde_json::from_str(FIXTURE).unwrap();
        let second = &launches[1];
        assert!(second.details.is_none());
        assert!(second.links.is_empty());
        assert!(second.launch_date_utc.is_none());
    }

    #[test]
    fn test_launch_year_as_number() {
        let json = r#"{"flight_number": 5, "mission_name": "RatSat", "launch_year": 2008}"#;
        let launch: LaunchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(launch.launch_year, Some(2008));
    }

    #[test]
    fn test_launch_year_unparseable_becomes_none() {
        let json = r#"{"flight_number": 5, "mission_name": "RatSat", "launch_year": "unknown"}"#;
        let launch: LaunchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(launch.launch_year, None);
        assert_eq!(launch.years_ago(2026), None);
    }

    #[test]
    fn test_status_success_wins() {
        let launches: Vec<LaunchRecord> = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(launches[0].status(), LaunchStatus::Failed);
        assert_eq!(launches[1].status(), LaunchStatus::Success);
    }

    #[test]
    fn test_status_upcoming_when_no_success_flag() {
        let json = r#"{"flight_number": 999, "mission_name": "Future", "upcoming": true}"#;
        let launch: LaunchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(launch.launch_success, None);
        assert_eq!(launch.status(), LaunchStatus::Upcoming);
        assert_eq!(launch.status().label(), "Upcoming");
    }

    #[test]
    fn test_years_ago() {
        let launches: Vec<LaunchRecord> = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(launches[0].years_ago(2026), Some(20));
    }

    #[test]
    fn test_matches_query_case_insensitive() {
        let launches: Vec<LaunchRecord> = serde_json::from_str(FIXTURE).unwrap();
        assert!(launches[1].matches_query("star"));
        assert!(launches[1].matches_query("STARLINK"));
        assert!(!launches[0].matches_query("star"));
    }

    #[test]
    fn test_matches_query_empty_matches_all() {
        let launches: Vec<LaunchRecord> = serde_json::from_str(FIXTURE).unwrap();
        assert!(launches.iter().all(|l| l.matches_query("")));
    }
}
