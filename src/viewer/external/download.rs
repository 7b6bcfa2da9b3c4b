use std::path::PathBuf;

use futures::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::error::{LibraryError, Result};

use super::BrowserPresenter;

impl BrowserPresenter {
    /// Save the PDF at `url` as `<download_dir>/<title>.pdf`.
    pub async fn download(&self, url: &str, title: &str) -> Result<PathBuf> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(LibraryError::ResourceUnreachable {
                url: url.to_string(),
                status: Some(response.status().as_u16()),
            });
        }

        tokio::fs::create_dir_all(&self.download_dir).await?;
        let target = self.download_dir.join(format!("{}.pdf", sanitize_file_name(title)));
        let mut file = tokio::fs::File::create(&target).await?;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            file.write_all(&chunk?).await?;
        }
        file.flush().await?;

        Ok(target)
    }
}

fn sanitize_file_name(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();
    let trimmed = cleaned.trim().trim_matches('.');
    if trimmed.is_empty() {
        "document".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;
    use std::time::{Duration, Instant};

    fn spawn_one_shot_http(status_line: &'static str, payload: Vec<u8>) -> (String, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request_buf = [0u8; 1024];
            let _ = stream.read(&mut request_buf);
            let headers = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status_line,
                payload.len()
            );
            stream.write_all(headers.as_bytes()).unwrap();
            stream.write_all(&payload).unwrap();
            let _ = stream.flush();
        });
        (format!("http://{addr}"), handle)
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("PA42- 01- CCCT - Arrêté"), "PA42- 01- CCCT - Arrêté");
        assert_eq!(sanitize_file_name("a/b:c"), "a-b-c");
        assert_eq!(sanitize_file_name(" .. "), "document");
    }

    #[tokio::test]
    async fn test_download_writes_titled_file() {
        let payload = b"%PDF-1.4 test".to_vec();
        let (host, handle) = spawn_one_shot_http("200 OK", payload.clone());
        let dir = tempfile::tempdir().unwrap();
        let presenter =
            BrowserPresenter::new(dir.path().join("viewer"), dir.path().join("downloads"), Duration::from_secs(5)).unwrap();

        let path = presenter
            .download(&format!("{host}/PPVE/ENEDIS.pdf"), "ENEDIS")
            .await
            .unwrap();

        assert_eq!(path, dir.path().join("downloads").join("ENEDIS.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), payload);
        handle.join().unwrap();
    }

    #[tokio::test]
    async fn test_download_of_missing_file_is_unreachable() {
        let (host, handle) = spawn_one_shot_http("404 Not Found", Vec::new());
        let dir = tempfile::tempdir().unwrap();
        let presenter =
            BrowserPresenter::new(dir.path().join("viewer"), dir.path().join("downloads"), Duration::from_secs(5)).unwrap();

        let result = presenter.download(&format!("{host}/PDF/missing.pdf"), "missing").await;

        assert!(matches!(
            result,
            Err(LibraryError::ResourceUnreachable { status: Some(404), .. })
        ));
        handle.join().unwrap();
    }

    #[tokio::test]
    async fn test_download_from_silent_host_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        // accept, then never answer
        thread::spawn(move || {
            let (_stream, _) = listener.accept().unwrap();
            thread::sleep(Duration::from_secs(5));
        });

        let dir = tempfile::tempdir().unwrap();
        let presenter = BrowserPresenter::new(
            dir.path().join("viewer"),
            dir.path().join("downloads"),
            Duration::from_millis(300),
        )
        .unwrap();

        let start = Instant::now();
        let result = presenter.download(&format!("http://{addr}/PDF/slow.pdf"), "slow").await;

        assert!(matches!(result, Err(LibraryError::Http(_))));
        assert!(start.elapsed() < Duration::from_secs(3));
    }
}
