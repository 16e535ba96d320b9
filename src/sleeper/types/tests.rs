//! Unit tests for Sleeper API payload types

use super::*;
use serde_json::json;

#[cfg(test)]
mod types_tests {
    use super::*;

    #[test]
    fn test_roster_deserialization() {
        let json = json!({
            "roster_id": 4,
            "owner_id": "7301",
            "league_id": "999",
            "starters": ["4046"],
            "players": ["4046", "6794"],
            "settings": {"wins": 3}
        });

        let roster: Roster = serde_json::from_value(json).unwrap();
        assert_eq!(roster.roster_id, RosterId::new(4));
        assert_eq!(roster.owner_id, Some(UserId::new("7301")));
        assert_eq!(
            roster.players,
            vec![PlayerId::new("4046"), PlayerId::new("6794")]
        );
    }

    #[test]
    fn test_roster_null_players_and_owner() {
        let json = json!({
            "roster_id": 9,
            "owner_id": null,
            "players": null
        });

        let roster: Roster = serde_json::from_value(json).unwrap();
        assert!(roster.owner_id.is_none());
        assert!(roster.players.is_empty());
    }

    #[test]
    fn test_roster_missing_players_field() {
        let roster: Roster = serde_json::from_value(json!({"roster_id": 2})).unwrap();
        assert!(roster.players.is_empty());
    }

    #[test]
    fn test_traded_pick_with_string_season() {
        let json = json!({
            "season": "2027",
            "round": 2,
            "roster_id": 1,
            "previous_owner_id": 1,
            "owner_id": 5
        });

        let pick: TradedPick = serde_json::from_value(json).unwrap();
        assert_eq!(pick.season, Season::new(2027));
        assert_eq!(pick.round, 2);
        assert_eq!(pick.roster_id, RosterId::new(1));
        assert_eq!(pick.owner_id, RosterId::new(5));
        assert_eq!(pick.previous_owner_id, Some(RosterId::new(1)));
    }

    #[test]
    fn test_player_deserialization_full() {
        let json = json!({
            "first_name": "Bijan",
            "last_name": "Robinson",
            "team": "ATL",
            "position": "RB",
            "age": 24,
            "status": "Active",
            "fantasy_positions": ["RB"],
            "injury_status": null
        });

        let player: Player = serde_json::from_value(json).unwrap();
        assert_eq!(player.full_name(), "Bijan Robinson");
        assert_eq!(player.team.as_deref(), Some("ATL"));
        assert_eq!(player.position.as_deref(), Some("RB"));
        assert_eq!(player.age, Some(24));
        assert_eq!(player.status.as_deref(), Some("Active"));
    }

    #[test]
    fn test_player_lenient_age() {
        let from_str: Player = serde_json::from_value(json!({"age": "27"})).unwrap();
        let from_float: Player = serde_json::from_value(json!({"age": 31.0})).unwrap();
        let from_null: Player = serde_json::from_value(json!({"age": null})).unwrap();
        let from_junk: Player = serde_json::from_value(json!({"age": "rookie"})).unwrap();
        let negative: Player = serde_json::from_value(json!({"age": -1})).unwrap();

        assert_eq!(from_str.age, Some(27));
        assert_eq!(from_float.age, Some(31));
        assert_eq!(from_null.age, None);
        assert_eq!(from_junk.age, None);
        assert_eq!(negative.age, None);
    }

    #[test]
    fn test_fractional_age_is_unknown() {
        let fractional: Player = serde_json::from_value(json!({"age": 28.5})).unwrap();
        let fractional_str: Player = serde_json::from_value(json!({"age": "28.5"})).unwrap();

        assert_eq!(fractional.age, None);
        assert_eq!(fractional_str.age, None);
    }

    #[test]
    fn test_full_name_trims_missing_parts() {
        let defense = Player {
            first_name: None,
            last_name: Some("Chiefs".to_string()),
            ..Player::default()
        };
        assert_eq!(defense.full_name(), "Chiefs");
        assert_eq!(Player::default().full_name(), "");
    }

    #[test]
    fn test_player_directory_iterates_in_id_order() {
        let json = json!({
            "6794": {"first_name": "Justin", "last_name": "Jefferson"},
            "4046": {"first_name": "Patrick", "last_name": "Mahomes"},
            "KC": {"first_name": "Kansas City", "last_name": "Chiefs", "position": "DEF"}
        });

        let directory: PlayerDirectory = serde_json::from_value(json).unwrap();
        let ids: Vec<&str> = directory.keys().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["4046", "6794", "KC"]);
    }

    #[test]
    fn test_user_without_display_name() {
        let user: User = serde_json::from_value(json!({"user_id": "1"})).unwrap();
        assert_eq!(user.user_id, UserId::new("1"));
        assert!(user.display_name.is_none());
    }

    #[test]
    fn test_league_deserialization() {
        let json = json!({
            "league_id": "1048290537318342656",
            "name": "Dynasty Degenerates",
            "season": "2026",
            "total_rosters": 12
        });

        let league: League = serde_json::from_value(json).unwrap();
        assert_eq!(league.name, "Dynasty Degenerates");
        assert_eq!(league.season, Some(Season::new(2026)));
    }
}
