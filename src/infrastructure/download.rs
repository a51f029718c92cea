// SPDX-License-Identifier: MPL-2.0
//! Photo downloads.
//!
//! The watermarked resource is streamed to disk byte for byte; the client
//! never re-encodes or otherwise transforms it.

use super::http::ApiClient;
use crate::domain::Photo;
use crate::error::{Error, Result};
use futures_util::{Stream, StreamExt};
use std::path::Path;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;

/// Fallback extension when the URL carries none.
const DEFAULT_EXTENSION: &str = "jpg";

/// Streams `url` into `destination`. Returns the number of bytes written.
///
/// Bytes land in a temporary file next to `destination`, which replaces it
/// only once the transfer completed. A file already at `destination` is left
/// untouched when the transfer fails.
pub async fn download_to(api: &ApiClient, url: &str, destination: &Path) -> Result<u64> {
    let resolved = api.resolve(url)?;
    let response = api.send(resolved).await?;
    let written = write_stream(response.bytes_stream(), destination).await?;

    tracing::info!(path = %destination.display(), bytes = written, "photo downloaded");
    Ok(written)
}

async fn write_stream<S, B, E>(mut stream: S, destination: &Path) -> Result<u64>
where
    S: Stream<Item = std::result::Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
    E: Into<Error>,
{
    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    tokio::fs::create_dir_all(parent).await?;

    let temp = NamedTempFile::new_in(parent)?;
    let mut file = tokio::fs::File::from_std(temp.reopen()?);

    let mut written: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(Into::<Error>::into)?;
        let bytes = chunk.as_ref();
        file.write_all(bytes).await?;
        written += bytes.len() as u64;
    }
    file.flush().await?;
    file.sync_all().await?;
    drop(file);

    temp.persist(destination).map_err(|e| Error::from(e.error))?;
    Ok(written)
}

/// Suggested file name for the save dialog.
///
/// Uses the last path segment of the photo URL when it looks like a file
/// name, otherwise `photo-{id}.jpg`.
#[must_use]
pub fn suggested_file_name(photo: &Photo) -> String {
    let from_url = photo
        .watermarked_url
        .split(['?', '#'])
        .next()
        .and_then(|path| path.rsplit('/').next())
        .filter(|name| !name.is_empty() && name.contains('.'))
        .map(sanitize);

    from_url.unwrap_or_else(|| format!("photo-{}.{DEFAULT_EXTENSION}", sanitize(photo.id.as_str())))
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::photo;

    #[test]
    fn file_name_comes_from_url() {
        let p = photo("p1", "https://cdn.example.com/wm/summer-001.jpg?sig=abc");
        assert_eq!(suggested_file_name(&p), "summer-001.jpg");
    }

    #[test]
    fn file_name_falls_back_to_photo_id() {
        let p = photo("p1", "https://cdn.example.com/wm/");
        assert_eq!(suggested_file_name(&p), "photo-p1.jpg");

        let p = photo("a:b", "u1");
        assert_eq!(suggested_file_name(&p), "photo-a_b.jpg");
    }

    fn chunks(
        parts: Vec<std::result::Result<&'static [u8], Error>>,
    ) -> impl Stream<Item = std::result::Result<&'static [u8], Error>> + Unpin {
        futures_util::stream::iter(parts)
    }

    fn leftover_entries(dir: &Path) -> usize {
        std::fs::read_dir(dir).unwrap().count()
    }

    #[tokio::test]
    async fn completed_stream_replaces_destination() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("photo.jpg");
        std::fs::write(&destination, b"old contents").unwrap();

        let written = write_stream(chunks(vec![Ok(&b"new "[..]), Ok(&b"bytes"[..])]), &destination)
            .await
            .unwrap();

        assert_eq!(written, 9);
        assert_eq!(std::fs::read(&destination).unwrap(), b"new bytes");
        assert_eq!(leftover_entries(dir.path()), 1);
    }

    #[tokio::test]
    async fn interrupted_stream_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("photo.jpg");
        std::fs::write(&destination, b"user's existing photo").unwrap();

        let result = write_stream(
            chunks(vec![Ok(&b"partial"[..]), Err(Error::Network("connection reset".into()))]),
            &destination,
        )
        .await;

        assert!(matches!(result, Err(Error::Network(_))));
        assert_eq!(std::fs::read(&destination).unwrap(), b"user's existing photo");
        assert_eq!(leftover_entries(dir.path()), 1);
    }

    #[tokio::test]
    async fn unreachable_backend_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("photo.jpg");
        let api = ApiClient::new("http://127.0.0.1:9", None).unwrap();

        let result = download_to(&api, "/wm/1.jpg", &destination).await;
        assert!(result.is_err());
        assert!(!destination.exists());
    }
}
