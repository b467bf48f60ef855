// src/core/net.rs
// Blocking HTTP GET against the registrar. One attempt per call: no retry, no cache.
// The client is injected so callers (and tests) pick timeouts and the host.

use std::time::Instant;

use reqwest::{Url, blocking::Client};

use crate::config::consts::SCHEDULE_PATH;
use crate::config::options::{NetOptions, ScheduleQuery};
use crate::error::FetchError;

#[derive(Clone, Debug)]
pub struct Fetcher {
    client: Client,
    base: Url,
}

impl Fetcher {
    /// Client configured from `opts` (timeout, user agent, base URL).
    pub fn new(opts: &NetOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.as_str())
            .build()
            .map_err(|source| FetchError::Transport { url: opts.base_url.clone(), source })?;
        Self::with_client(client, &opts.base_url)
    }

    /// Use an existing client (shared pool, custom TLS, fixture server...).
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, FetchError> {
        let mut base = Url::parse(base_url).map_err(|_| FetchError::Url(s!(base_url)))?;
        // join() drops the last segment unless the path ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn schedule_url(&self, query: &ScheduleQuery) -> Result<Url, FetchError> {
        let mut url = self.resolve(SCHEDULE_PATH)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            for (key, value) in query.query_pairs() {
                pairs.append_pair(key, &value);
            }
        }
        Ok(url)
    }

    /// Raw results page for `query`.
    pub fn fetch_schedule(&self, query: &ScheduleQuery) -> Result<String, FetchError> {
        let url = self.schedule_url(query)?;
        self.get(url)
    }

    /// Section detail page; `info_url` is the link found in the CRN cell.
    pub fn fetch_info(&self, info_url: &str) -> Result<String, FetchError> {
        let url = self.resolve(info_url)?;
        self.get(url)
    }

    fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        self.base.join(path).map_err(|_| FetchError::Url(s!(path)))
    }

    fn get(&self, url: Url) -> Result<String, FetchError> {
        let shown = url.to_string();
        let t = Instant::now();

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Transport { url: shown.clone(), source })?;

        let status = resp.status();
        if !status.is_success() {
            logw!("GET {} -> {}", shown, status);
            return Err(FetchError::Status { status: status.as_u16(), url: shown });
        }

        let body = resp
            .text()
            .map_err(|source| FetchError::Transport { url: shown.clone(), source })?;
        logd!("GET {} -> {} bytes in {:?}", shown, body.len(), t.elapsed());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher(base: &str) -> Fetcher {
        Fetcher::with_client(Client::new(), base).unwrap()
    }

    #[test]
    fn schedule_url_carries_query() {
        let f = fetcher("https://registrar.example.edu/pls/PROD/");
        let q = ScheduleQuery::new(2021, "spring", "cse", true).unwrap();
        let url = f.schedule_url(&q).unwrap();
        assert_eq!(url.path(), "/pls/PROD/xhwschedule.P_ViewSchedule");
        assert_eq!(url.query(), Some("validterm=202110&openclasses=Y&subjcode=CSE"));
    }

    #[test]
    fn base_without_trailing_slash_keeps_last_segment() {
        let f = fetcher("https://registrar.example.edu/pls/PROD");
        assert_eq!(f.base_url().path(), "/pls/PROD/");
        let q = ScheduleQuery::new(2020, "fall", "", false).unwrap();
        let url = f.schedule_url(&q).unwrap();
        assert_eq!(url.path(), "/pls/PROD/xhwschedule.P_ViewSchedule");
        assert!(url.query().unwrap().ends_with("subjcode=ALL"));
    }

    #[test]
    fn bad_base_url_is_an_error() {
        assert!(matches!(
            Fetcher::with_client(Client::new(), "not a url"),
            Err(FetchError::Url(_))
        ));
    }
}
