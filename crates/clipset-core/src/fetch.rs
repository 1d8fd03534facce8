use std::path::Path;

use reqwest::StatusCode;
use tempfile::TempPath;
use tokio::{fs, io::AsyncWriteExt, process::Command};
use tracing::debug;

use crate::error::{ClipsetError, Result};

/// Source acquisition backend.
pub trait Fetch {
    /// Stream `url` into a fresh temporary file that is removed on drop.
    async fn fetch_url(&self, url: &str) -> Result<TempPath>;

    /// Download a YouTube video to `dest`.
    async fn fetch_youtube(&self, video_id: &str, dest: &Path) -> Result<()>;
}

/// Real backend: reqwest for static URLs, yt-dlp for YouTube ids.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    async fn fetch_url(&self, url: &str) -> Result<TempPath> {
        let mut response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClipsetError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let (file, path) = tempfile::Builder::new()
            .prefix("clipset-")
            .suffix(".mp4")
            .tempfile()?
            .into_parts();
        let mut file = fs::File::from_std(file);

        let mut written = 0usize;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
            written += chunk.len();
        }
        file.flush().await?;

        debug!(url, bytes = written, path = %path.display(), "downloaded source");
        Ok(path)
    }

    async fn fetch_youtube(&self, video_id: &str, dest: &Path) -> Result<()> {
        let url = format!("https://www.youtube.com/watch?v={}", video_id);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).await?;
        }

        debug!(%url, dest = %dest.display(), "running yt-dlp");
        let output = Command::new("yt-dlp")
            .arg("-f")
            .arg("best[ext=mp4]")
            .arg("-o")
            .arg(dest)
            .arg(&url)
            .output()
            .await?;

        if !output.status.success() {
            return Err(ClipsetError::DownloadFailed {
                url,
                reason: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        if !dest.exists() {
            return Err(ClipsetError::DownloadFailed {
                url,
                reason: format!("yt-dlp did not produce {}", dest.display()),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{Read, Write},
        net::TcpListener,
        thread,
    };

    use super::*;

    /// Serve a single canned HTTP response on localhost.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}/video.mp4", addr)
    }

    fn fetcher() -> HttpFetcher {
        HttpFetcher::with_client(reqwest::Client::builder().no_proxy().build().unwrap())
    }

    #[tokio::test]
    async fn non_200_status_is_an_error() {
        let url = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );

        let err = fetcher().fetch_url(&url).await.unwrap_err();
        match err {
            ClipsetError::HttpStatus { status, .. } => assert_eq!(status, 404),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn body_lands_in_temp_file_removed_on_drop() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello",
        );

        let path = fetcher().fetch_url(&url).await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");

        let owned = path.to_path_buf();
        drop(path);
        assert!(!owned.exists());
    }
}
