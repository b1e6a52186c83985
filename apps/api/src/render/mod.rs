//! Paginated visual rendering path.
//!
//! The core walks the shared line classifier to turn resume text into a
//! sequence of styled block elements, hands the sequence to the external
//! rasterizer collaborator (one tall raster image), plans page placements
//! with the greedy fixed-height loop in [`paginate`], and asks the
//! collaborator to assemble the placed pages into final document bytes.
//! Each call owns its work buffers — concurrent renders need no coordination.

pub mod paginate;
pub mod raster_client;

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parser::line::{classify, Line};
use crate::templates::{StyleProfile, TemplateId};

/// Height of a blank-line spacer, px.
const SPACER_HEIGHT_PX: f32 = 8.0;
/// Bottom margin under a list item, px.
const LIST_ITEM_MARGIN_PX: f32 = 8.0;
/// Bottom margin under a body paragraph, px.
const PARAGRAPH_MARGIN_PX: f32 = 10.0;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("rasterizer request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rasterizer returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("rasterizer response malformed: {0}")]
    MalformedResponse(String),

    #[error("rasterizer produced an empty image")]
    EmptyImage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Header,
    SectionTitle,
    ListItem,
    Paragraph,
    Spacer,
}

/// One styled block element, ready for rasterization. Casing is already
/// applied to `text`; `underline` is left to the rasterizer to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledElement {
    pub kind: ElementKind,
    pub text: String,
    pub font_family: String,
    pub font_size: f32,
    pub color: String,
    pub bold: bool,
    pub underline: bool,
    pub centered: bool,
    /// Estimated rendered height, px, at the 800px content width.
    pub height_px: f32,
}

/// Fixed page geometry for the assembled document (A4 portrait, px at 72dpi).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMetrics {
    pub width_px: f32,
    pub height_px: f32,
}

impl PageMetrics {
    pub fn a4() -> PageMetrics {
        PageMetrics {
            width_px: 595.0,
            height_px: 842.0,
        }
    }
}

/// The single tall raster image produced from the full element sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pub width_px: u32,
    pub height_px: u32,
    /// PNG-encoded pixels.
    pub data: Bytes,
}

/// One output page: the source image drawn at this vertical offset (0 for the
/// first page, negative for every following page).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PagePlacement {
    pub offset_y: f32,
}

/// The external rasterization collaborator. The core owns what to draw and
/// where pages break; the collaborator owns pixels and document encoding.
#[async_trait]
pub trait Rasterizer: Send + Sync {
    async fn rasterize(&self, elements: &[StyledElement]) -> Result<RasterImage, RenderError>;

    async fn assemble_pages(
        &self,
        image: &RasterImage,
        placements: &[PagePlacement],
        page: &PageMetrics,
    ) -> Result<Bytes, RenderError>;
}

/// Builds the styled element sequence for one template profile. Input line
/// order is preserved.
pub fn build_elements(content: &str, profile: &StyleProfile) -> Vec<StyledElement> {
    content
        .lines()
        .map(|raw| match classify(raw) {
            Line::Title(text) => StyledElement {
                kind: ElementKind::Header,
                text: text.to_string(),
                font_family: profile.font_family.to_string(),
                font_size: profile.header_size,
                color: profile.primary_color.to_string(),
                bold: true,
                underline: false,
                centered: true,
                height_px: profile.header_size * profile.line_height
                    + profile.section_spacing * 2.0,
            },
            Line::Heading(text) => {
                let text = if profile.uppercase_sections {
                    text.to_uppercase()
                } else {
                    text.to_string()
                };
                StyledElement {
                    kind: ElementKind::SectionTitle,
                    text,
                    font_family: profile.font_family.to_string(),
                    font_size: profile.section_size,
                    color: profile.primary_color.to_string(),
                    bold: true,
                    underline: profile.underline_sections,
                    centered: false,
                    height_px: profile.section_size * profile.line_height
                        + profile.section_spacing,
                }
            }
            Line::Bullet(text) => StyledElement {
                kind: ElementKind::ListItem,
                text: text.to_string(),
                font_family: profile.font_family.to_string(),
                font_size: profile.body_size,
                color: profile.secondary_color.to_string(),
                bold: false,
                underline: false,
                centered: false,
                height_px: profile.body_size * profile.line_height + LIST_ITEM_MARGIN_PX,
            },
            Line::Text(text) => StyledElement {
                kind: ElementKind::Paragraph,
                text: text.to_string(),
                font_family: profile.font_family.to_string(),
                font_size: profile.body_size,
                color: profile.secondary_color.to_string(),
                bold: false,
                underline: false,
                centered: false,
                height_px: profile.body_size * profile.line_height + PARAGRAPH_MARGIN_PX,
            },
            Line::Blank => StyledElement {
                kind: ElementKind::Spacer,
                text: String::new(),
                font_family: profile.font_family.to_string(),
                font_size: 0.0,
                color: profile.primary_color.to_string(),
                bold: false,
                underline: false,
                centered: false,
                height_px: SPACER_HEIGHT_PX,
            },
        })
        .collect()
}

/// Image height after scaling the raster to the page width.
fn scaled_image_height(image: &RasterImage, page: &PageMetrics) -> f32 {
    if image.width_px == 0 {
        return 0.0;
    }
    image.height_px as f32 * page.width_px / image.width_px as f32
}

/// Full render: elements → raster image → greedy page placements → assembled
/// document bytes. No caching, no retries; a failed step fails the call.
pub async fn render_document(
    content: &str,
    template_id: TemplateId,
    rasterizer: &dyn Rasterizer,
) -> Result<Bytes, RenderError> {
    let profile = StyleProfile::for_template(template_id);
    let elements = build_elements(content, &profile);

    let image = rasterizer.rasterize(&elements).await?;
    if image.width_px == 0 || image.height_px == 0 {
        return Err(RenderError::EmptyImage);
    }

    let page = PageMetrics::a4();
    let image_height = scaled_image_height(&image, &page);
    let placements = paginate::plan_pages(image_height, page.height_px);

    rasterizer.assemble_pages(&image, &placements, &page).await
}
