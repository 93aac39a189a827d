//! Attachment operations, including file upload and download.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::{Body, Method};
use tokio_util::io::ReaderStream;
use tracing::{debug, instrument};

use crate::trello::client::{Query, TrelloClient, endpoint};
use crate::trello::error::{TrelloError, TrelloResult};
use crate::trello::models::{Attachment, DownloadedAttachment};

impl TrelloClient {
    pub async fn get_card_attachments(&self, card_id: &str) -> TrelloResult<Vec<Attachment>> {
        self.get(&["cards", card_id, "attachments"]).await
    }

    pub async fn get_attachment(
        &self,
        card_id: &str,
        attachment_id: &str,
    ) -> TrelloResult<Attachment> {
        self.get(&["cards", card_id, "attachments", attachment_id])
            .await
    }

    /// Attach an external URL to a card.
    pub async fn add_attachment_url(
        &self,
        card_id: &str,
        url: &str,
        name: Option<&str>,
    ) -> TrelloResult<Attachment> {
        let query = Query::new().set("url", url).opt("name", name);
        self.post(&["cards", card_id, "attachments"], query)
            .await
    }

    /// Upload a local file as a multipart `file` field.
    ///
    /// The file must exist before anything is sent. The attachment is named
    /// `name` when given, otherwise after the file's base name.
    #[instrument(skip(self, file_path), fields(file_path = %file_path.as_ref().display()))]
    pub async fn add_attachment_file(
        &self,
        card_id: &str,
        file_path: impl AsRef<Path>,
        name: Option<&str>,
    ) -> TrelloResult<Attachment> {
        let path = file_path.as_ref();
        let metadata = match tokio::fs::metadata(path).await {
            Ok(metadata) if metadata.is_file() => metadata,
            _ => {
                return Err(TrelloError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
        };

        let attachment_name = name
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .or_else(|| {
                path.file_name()
                    .map(|base| base.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| "upload".to_string());

        let file = tokio::fs::File::open(path)
            .await
            .map_err(|source| TrelloError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let part = Part::stream_with_length(Body::wrap_stream(ReaderStream::new(file)), metadata.len())
            .file_name(attachment_name.clone());
        let form = Form::new().part("file", part);

        debug!(card_id, attachment_name, size = metadata.len(), "Uploading attachment");

        let segments = ["cards", card_id, "attachments"];
        let endpoint = endpoint(&segments);
        let request = self
            .builder(Method::POST, &segments, &Query::new())?
            .multipart(form);
        let response = self.send(request, &endpoint).await?;
        Self::decode(response, &endpoint).await
    }

    /// Download an attachment to `output_path`, overwriting it.
    ///
    /// Two round trips: metadata first, to resolve the filename the download
    /// route expects, then the body itself.
    #[instrument(skip(self, output_path), fields(output_path = %output_path.as_ref().display()))]
    pub async fn download_attachment(
        &self,
        card_id: &str,
        attachment_id: &str,
        output_path: impl AsRef<Path>,
    ) -> TrelloResult<DownloadedAttachment> {
        let output_path = output_path.as_ref();
        let attachment = self.get_attachment(card_id, attachment_id).await?;
        let filename = attachment.download_name().to_string();

        let segments = [
            "cards",
            card_id,
            "attachments",
            attachment_id,
            "download",
            filename.as_str(),
        ];
        let endpoint = endpoint(&segments);
        let request = self.builder(Method::GET, &segments, &Query::new())?;
        let response = self.send(request, &endpoint).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| TrelloError::from_transport(e, &endpoint))?;

        tokio::fs::write(output_path, &body)
            .await
            .map_err(|source| TrelloError::Io {
                path: output_path.to_path_buf(),
                source,
            })?;

        Ok(DownloadedAttachment {
            success: true,
            path: output_path.display().to_string(),
            size: body.len() as u64,
            name: filename,
            attachment_id: attachment_id.to_string(),
        })
    }

    pub async fn delete_attachment(
        &self,
        card_id: &str,
        attachment_id: &str,
    ) -> TrelloResult<serde_json::Value> {
        self.delete(&["cards", card_id, "attachments", attachment_id])
            .await
    }
}
