//! HTTP client for the external rasterization service.
//!
//! The service exposes two endpoints: `POST /rasterize` takes the styled
//! element sequence as JSON and returns a PNG body with the pixel dimensions
//! in `x-image-width` / `x-image-height` headers; `POST /assemble` takes the
//! PNG body plus page geometry and placements in the query string and returns
//! the final document bytes. One attempt per call — failures propagate to the
//! caller unmodified.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::debug;

use crate::render::{PageMetrics, PagePlacement, RasterImage, Rasterizer, RenderError};

const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Clone)]
pub struct HttpRasterizer {
    client: Client,
    base_url: String,
}

impl HttpRasterizer {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }
}

#[async_trait]
impl Rasterizer for HttpRasterizer {
    async fn rasterize(
        &self,
        elements: &[crate::render::StyledElement],
    ) -> Result<RasterImage, RenderError> {
        let response = self
            .client
            .post(format!("{}/rasterize", self.base_url))
            .json(&elements)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RenderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let width_px = dimension(response.headers(), "x-image-width")?;
        let height_px = dimension(response.headers(), "x-image-height")?;
        let data = response.bytes().await?;

        debug!("Rasterized {width_px}x{height_px} image ({} bytes)", data.len());

        Ok(RasterImage {
            width_px,
            height_px,
            data,
        })
    }

    async fn assemble_pages(
        &self,
        image: &RasterImage,
        placements: &[PagePlacement],
        page: &PageMetrics,
    ) -> Result<Bytes, RenderError> {
        let offsets = placements
            .iter()
            .map(|p| p.offset_y.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let response = self
            .client
            .post(format!("{}/assemble", self.base_url))
            .query(&[
                ("page_width", page.width_px.to_string()),
                ("page_height", page.height_px.to_string()),
                ("image_width", image.width_px.to_string()),
                ("image_height", image.height_px.to_string()),
                ("offsets", offsets),
            ])
            .header("content-type", "image/png")
            .body(image.data.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RenderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes().await?)
    }
}

/// Reads one pixel-dimension header. A missing or unparseable header is a
/// malformed collaborator response, not a zero-sized image.
fn dimension(headers: &reqwest::header::HeaderMap, name: &str) -> Result<u32, RenderError> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| {
            RenderError::MalformedResponse(format!("missing or invalid '{name}' header"))
        })
}
