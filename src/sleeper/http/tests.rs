//! Unit tests for the Sleeper HTTP client

use super::*;
use crate::{PlayerId, RosterId, Season, UserId};
use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

#[cfg(test)]
mod http_tests {
    use super::*;

    async fn client_for(server: &MockServer) -> SleeperClient {
        SleeperClient::with_base_url(server.uri()).unwrap()
    }

    #[test]
    fn test_sleeper_base_url_constant() {
        assert_eq!(SLEEPER_BASE_URL, "https://api.sleeper.app/v1");
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let client = SleeperClient::with_base_url("http://localhost:9999/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999");
    }

    #[tokio::test]
    async fn test_get_users_sends_json_accept_header() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/league/L1/users"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"user_id": "u1", "display_name": "alpha"},
                {"user_id": "u2", "display_name": "bravo"}
            ])))
            .mount(&mock_server)
            .await;

        let users = client_for(&mock_server)
            .await
            .get_users(&LeagueId::new("L1"))
            .await
            .unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[1].user_id, UserId::new("u2"));
        assert_eq!(users[1].display_name.as_deref(), Some("bravo"));
    }

    #[tokio::test]
    async fn test_null_list_body_is_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/league/L1/traded_picks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
            .mount(&mock_server)
            .await;

        let picks = client_for(&mock_server)
            .await
            .get_traded_picks(&LeagueId::new("L1"))
            .await
            .unwrap();

        assert!(picks.is_empty());
    }

    #[tokio::test]
    async fn test_http_error_status_is_propagated() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/league/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server)
            .await
            .get_league(&LeagueId::new("missing"))
            .await;

        match result {
            Err(crate::SleeperError::Http(e)) => {
                assert_eq!(e.status().map(|s| s.as_u16()), Some(404));
            }
            other => panic!("Expected Http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_league_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/league/L1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"league_id": "L1", "name": "Bench Mob", "season": "2026"})),
            )
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/league/L1/users"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"user_id": "u1", "display_name": "alpha"}])),
            )
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/league/L1/rosters"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"roster_id": 1, "owner_id": "u1", "players": ["100"]}
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/league/L1/traded_picks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"season": "2027", "round": 1, "roster_id": 1, "owner_id": 1, "previous_owner_id": 1}
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/players/nfl"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "100": {"first_name": "Test", "last_name": "Player", "position": "WR", "age": 22}
            })))
            .mount(&mock_server)
            .await;

        let data = client_for(&mock_server)
            .await
            .fetch_league_data(&LeagueId::new("L1"))
            .await
            .unwrap();

        assert_eq!(data.league.name, "Bench Mob");
        assert_eq!(data.users.len(), 1);
        assert_eq!(data.rosters[0].roster_id, RosterId::new(1));
        assert_eq!(data.traded_picks[0].season, Season::new(2027));
        assert_eq!(
            data.players[&PlayerId::new("100")].full_name(),
            "Test Player"
        );
    }
}
