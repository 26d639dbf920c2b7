use crate::calendar::{self, WINDOW_DAYS};
use crate::errors::UpstreamError;
use crate::models::{CalendarVariables, Contribution, GraphqlRequest, GraphqlResponse};
use async_trait::async_trait;
use tracing::debug;

const CONTRIBUTIONS_QUERY: &str = r#"
query($userName: String!) {
  user(login: $userName) {
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            contributionCount
            date
          }
        }
      }
    }
  }
}
"#;

const USER_AGENT: &str = "portfolio-stats-proxy";

/// Upstream producer of the normalized dataset. A trait seam so handlers and
/// the scheduled refresh can run against a fake in tests.
#[async_trait]
pub trait ContributionSource: Send + Sync {
    async fn fetch_recent(&self) -> Result<Vec<Contribution>, UpstreamError>;
}

/// Queries the GitHub GraphQL contribution calendar for one account and
/// flattens the nested weeks into a date-ordered list, clipped to the
/// trailing window.
pub struct GithubSource {
    http: reqwest::Client,
    api_url: String,
    token: String,
    username: String,
}

impl GithubSource {
    pub fn new(http: reqwest::Client, api_url: String, token: String, username: String) -> Self {
        Self {
            http,
            api_url,
            token,
            username,
        }
    }
}

#[async_trait]
impl ContributionSource for GithubSource {
    async fn fetch_recent(&self) -> Result<Vec<Contribution>, UpstreamError> {
        let request = GraphqlRequest {
            query: CONTRIBUTIONS_QUERY,
            variables: CalendarVariables {
                user_name: &self.username,
            },
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.token)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let body: GraphqlResponse = response.json().await?;
        if !body.errors.is_empty() {
            let detail = body
                .errors
                .iter()
                .map(|err| err.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(UpstreamError::Api(detail));
        }

        let calendar = body
            .data
            .and_then(|data| data.user)
            .map(|user| user.contributions_collection.contribution_calendar)
            .ok_or_else(|| UpstreamError::Api("response carried no user data".to_string()))?;

        debug!(
            total = calendar.total_contributions,
            weeks = calendar.weeks.len(),
            "fetched contribution calendar"
        );

        let history = calendar
            .weeks
            .into_iter()
            .flat_map(|week| week.contribution_days)
            .map(|day| Contribution {
                date: day.date,
                count: day.contribution_count,
            })
            .collect();

        Ok(calendar::tail_slice(history, WINDOW_DAYS))
    }
}

#[cfg(test)]
mod tests {
    use crate::models::GraphqlResponse;

    #[test]
    fn wire_shape_flattens_as_expected() {
        let raw = r#"{
            "data": {
                "user": {
                    "contributionsCollection": {
                        "contributionCalendar": {
                            "totalContributions": 4,
                            "weeks": [
                                {"contributionDays": [
                                    {"date": "2024-01-01", "contributionCount": 3},
                                    {"date": "2024-01-02", "contributionCount": 1}
                                ]},
                                {"contributionDays": [
                                    {"date": "2024-01-08", "contributionCount": 0}
                                ]}
                            ]
                        }
                    }
                }
            }
        }"#;

        let parsed: GraphqlResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.errors.is_empty());
        let calendar = parsed
            .data
            .unwrap()
            .user
            .unwrap()
            .contributions_collection
            .contribution_calendar;
        assert_eq!(calendar.total_contributions, 4);
        let days: Vec<_> = calendar
            .weeks
            .into_iter()
            .flat_map(|week| week.contribution_days)
            .collect();
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].contribution_count, 3);
    }

    #[test]
    fn graphql_error_list_is_parsed() {
        let raw = r#"{"data": null, "errors": [{"message": "bad credentials"}]}"#;
        let parsed: GraphqlResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.errors[0].message, "bad credentials");
    }
}
