use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::time::Duration;

use super::build_fallback_games;
use crate::core::interfaces::adapters::GameSearchProvider;
use crate::core::models::{GameRecord, ResultSet, SearchQuery};

const JSON_MEDIA_TYPE: &str = "application/json";

pub struct S16GameSearchProvider {
    client: reqwest::Client,
    api_base_url: String,
}

impl S16GameSearchProvider {
    pub fn new(api_base_url: String, request_timeout: Option<Duration>) -> Result<Self> {
        let mut client_builder = reqwest::Client::builder();
        if let Some(timeout) = request_timeout {
            client_builder = client_builder.timeout(timeout);
        }

        Ok(Self {
            client: client_builder.build()?,
            api_base_url,
        })
    }

    fn construct_search_url(&self, query: &SearchQuery) -> String {
        let encoded_query = urlencoding::encode(query.as_str());
        format!("{}?q={}", self.api_base_url, encoded_query)
    }

    async fn fetch_games(&self, query: &SearchQuery) -> Result<ResultSet> {
        let search_url = self.construct_search_url(query);
        log::debug!("[S16_API] GET {}", search_url);

        let response = self
            .client
            .get(&search_url)
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .header(CONTENT_TYPE, JSON_MEDIA_TYPE)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP error! status: {}", status);
        }

        let payload: serde_json::Value = response.json().await?;
        let entries = payload
            .as_array()
            .ok_or_else(|| anyhow::anyhow!("Expected a JSON array of games"))?;

        Ok(entries.iter().map(GameRecord::from_loose_entry).collect())
    }
}

#[async_trait]
impl GameSearchProvider for S16GameSearchProvider {
    async fn lookup(&self, query: &SearchQuery) -> ResultSet {
        match self.fetch_games(query).await {
            Ok(games) => {
                log::info!("[S16_API] Received {} games for '{}'", games.len(), query);
                games
            }
            Err(error) => {
                log::error!("[S16_API] API Error: {:#}", error);
                log::info!("[S16_API] Using placeholder games for '{}'", query);
                build_fallback_games(query)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    struct CannedServer {
        base_url: String,
        request: JoinHandle<String>,
    }

    async fn serve_once(status_line: &'static str, body: &'static str) -> CannedServer {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        let request = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut chunk = [0u8; 1024];
            while !received.windows(4).any(|window| window == b"\r\n\r\n") {
                let read = stream.read(&mut chunk).await.unwrap();
                if read == 0 {
                    break;
                }
                received.extend_from_slice(&chunk[..read]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.ok();

            String::from_utf8_lossy(&received).to_string()
        });

        CannedServer {
            base_url: format!("http://{}/v0/api/games", address),
            request,
        }
    }

    fn query(text: &str) -> SearchQuery {
        SearchQuery::from_input(text).unwrap()
    }

    fn fallback_titles(text: &str) -> Vec<String> {
        build_fallback_games(&query(text))
            .into_iter()
            .map(|game| game.title)
            .collect()
    }

    fn titles(games: &ResultSet) -> Vec<String> {
        games.iter().map(|game| game.title.clone()).collect()
    }

    #[test]
    fn test_construct_search_url_encodes_query() {
        let provider =
            S16GameSearchProvider::new("https://api.s16.lol/v0/api/games".to_string(), None)
                .unwrap();

        let url = provider.construct_search_url(&query("Mario & Luigi?"));

        assert_eq!(
            url,
            "https://api.s16.lol/v0/api/games?q=Mario%20%26%20Luigi%3F"
        );
    }

    #[tokio::test]
    async fn test_lookup_sends_json_get_and_normalizes_results() {
        let server = serve_once(
            "200 OK",
            r#"[{"title":"Super Mario Odyssey","genre":"Platformer","rating":4.9,"url":"https://nintendo.com/odyssey"},{"name":"Mario Kart 8"}]"#,
        )
        .await;
        let provider = S16GameSearchProvider::new(server.base_url.clone(), None).unwrap();

        let games = provider.lookup(&query("Super Mario")).await;
        let request = server.request.await.unwrap().to_lowercase();

        assert!(request.starts_with("get /v0/api/games?q=super%20mario http/1.1"));
        assert!(request.contains("accept: application/json"));
        assert!(request.contains("content-type: application/json"));
        assert_eq!(titles(&games), vec!["Super Mario Odyssey", "Mario Kart 8"]);
        assert_eq!(games[0].category, "Platformer");
        assert_eq!(games[0].rating.as_deref(), Some("4.9"));
        assert_eq!(games[1].description, "No description available");
    }

    #[tokio::test]
    async fn test_lookup_returns_empty_result_set_for_empty_array() {
        let server = serve_once("200 OK", "[]").await;
        let provider = S16GameSearchProvider::new(server.base_url.clone(), None).unwrap();

        let games = provider.lookup(&query("Nothing")).await;

        assert!(games.is_empty());
    }

    #[tokio::test]
    async fn test_lookup_falls_back_on_server_error() {
        let server = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;
        let provider = S16GameSearchProvider::new(server.base_url.clone(), None).unwrap();

        let games = provider.lookup(&query("Mario")).await;

        assert_eq!(titles(&games), fallback_titles("Mario"));
    }

    #[tokio::test]
    async fn test_lookup_falls_back_on_malformed_body() {
        let server = serve_once("200 OK", "not json at all").await;
        let provider = S16GameSearchProvider::new(server.base_url.clone(), None).unwrap();

        let games = provider.lookup(&query("Mario")).await;

        assert_eq!(titles(&games), fallback_titles("Mario"));
    }

    #[tokio::test]
    async fn test_lookup_falls_back_when_body_is_not_an_array() {
        let server = serve_once("200 OK", r#"{"games":[]}"#).await;
        let provider = S16GameSearchProvider::new(server.base_url.clone(), None).unwrap();

        let games = provider.lookup(&query("Zelda")).await;

        assert_eq!(titles(&games), fallback_titles("Zelda"));
    }

    #[tokio::test]
    async fn test_lookup_falls_back_when_api_is_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        let provider =
            S16GameSearchProvider::new(format!("http://{}/v0/api/games", address), None).unwrap();

        let games = provider.lookup(&query("Mario")).await;

        assert_eq!(
            titles(&games),
            vec![
                "Mario - Adventure Game",
                "Mario - Strategy Edition",
                "Mario - Multiplayer",
                "Mario - Classic",
            ]
        );
    }
}
