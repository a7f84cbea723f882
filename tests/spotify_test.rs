//! HTTP-level tests for the reqwest Spotify client

use serde_json::json;
use songlist::errors::Error;
use songlist::spotify::{SpotifyApi, SpotifyClient};
use wiremock::matchers::{
    basic_auth, bearer_token, body_json, body_string_contains, method, path, query_param,
    query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client pointed at the mock server, API under `/v1`, token under `/api/token`
fn client_for(server: &MockServer) -> SpotifyClient {
    SpotifyClient::new(
        format!("{}/v1", server.uri()),
        format!("{}/api/token", server.uri()),
    )
}

fn playlist_json(id: &str, name: &str, owner: &str) -> serde_json::Value {
    json!({ "id": id, "name": name, "owner": { "id": owner } })
}

#[tokio::test]
async fn test_authenticate_sends_client_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(basic_auth("client", "secret"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "app-token",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = client_for(&server)
        .authenticate("client", "secret")
        .await
        .unwrap();

    assert_eq!(token.access_token, "app-token");
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 3600);
    assert!(token.obtained_at > 0);
}

#[tokio::test]
async fn test_authenticate_rejected_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "invalid_client" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .authenticate("client", "wrong")
        .await
        .unwrap_err();

    match err {
        Error::Authentication(reason) => assert!(reason.contains("400")),
        other => panic!("expected Authentication, got {:?}", other),
    }
}

#[tokio::test]
async fn test_authenticate_without_access_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token_type": "Bearer" })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .authenticate("client", "secret")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Authentication(_)));
}

#[tokio::test]
async fn test_search_track_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(bearer_token("tok"))
        .and(query_param("q", "Hey Jude The Beatles"))
        .and(query_param("type", "track"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": { "items": [ { "uri": "spotify:track:jude" } ] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = client_for(&server)
        .search_track("Hey Jude", "The Beatles", "tok")
        .await
        .unwrap();

    assert_eq!(uri.as_deref(), Some("spotify:track:jude"));
}

#[tokio::test]
async fn test_search_track_no_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": { "items": [] }
        })))
        .mount(&server)
        .await;

    let uri = client_for(&server)
        .search_track("Nothing", "Nobody", "tok")
        .await
        .unwrap();

    assert!(uri.is_none());
}

#[tokio::test]
async fn test_search_track_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search_track("Hey Jude", "The Beatles", "tok")
        .await
        .unwrap_err();

    match err {
        Error::Search { query, .. } => assert_eq!(query, "Hey Jude The Beatles"),
        other => panic!("expected Search, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_playlist_private_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/users/user-1/playlists"))
        .and(bearer_token("tok"))
        .and(body_json(json!({
            "name": "Road Trip",
            "description": "Imported from songs.txt on 2026-10-19",
            "public": false,
            "collaborative": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "abc" })))
        .expect(1)
        .mount(&server)
        .await;

    let id = client_for(&server)
        .create_playlist(
            "user-1",
            "Road Trip",
            "Imported from songs.txt on 2026-10-19",
            "tok",
        )
        .await
        .unwrap();

    assert_eq!(id, "abc");
}

#[tokio::test]
async fn test_create_playlist_forbidden() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/users/user-1/playlists"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_playlist("user-1", "Road Trip", "desc", "tok")
        .await
        .unwrap_err();

    match err {
        Error::PlaylistCreation { name, .. } => assert_eq!(name, "Road Trip"),
        other => panic!("expected PlaylistCreation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_add_track_empty_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/playlists/pl-1/tracks"))
        .and(bearer_token("tok"))
        .and(body_json(json!({ "uris": ["spotify:track:jude"] })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .add_track_to_playlist("pl-1", "spotify:track:jude", "tok")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_add_track_forbidden() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/playlists/pl-1/tracks"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .add_track_to_playlist("pl-1", "spotify:track:jude", "tok")
        .await
        .unwrap_err();

    match err {
        Error::AddTrack { uri, .. } => assert_eq!(uri, "spotify:track:jude"),
        other => panic!("expected AddTrack, got {:?}", other),
    }
}

#[tokio::test]
async fn test_find_playlist_follows_next_page() {
    let server = MockServer::start().await;
    let second_page = format!("{}/v1/me/playlists?offset=50&limit=50", server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/me/playlists"))
        .and(query_param_is_missing("offset"))
        .and(bearer_token("tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [ playlist_json("other", "Road Trip", "someone-else") ],
            "next": second_page
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/me/playlists"))
        .and(query_param("offset", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [ playlist_json("mine", "Road Trip", "user-1") ],
            "next": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let found = client_for(&server)
        .find_playlist("user-1", "Road Trip", "tok")
        .await
        .unwrap();

    assert_eq!(found.as_deref(), Some("mine"));
}

#[tokio::test]
async fn test_find_playlist_ignores_other_owners() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/me/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [ playlist_json("followed", "Road Trip", "someone-else") ],
            "next": null
        })))
        .mount(&server)
        .await;

    let found = client_for(&server)
        .find_playlist("user-1", "Road Trip", "tok")
        .await
        .unwrap();

    assert!(found.is_none());
}
