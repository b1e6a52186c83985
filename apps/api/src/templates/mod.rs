//! The fixed template catalog — three visual templates, each backed by one
//! pre-authored DOCX asset for the merge path and one style profile for the
//! paginated rendering path. This is configuration, not user data: the set is
//! closed and every lookup is an exhaustive match.

use serde::{Deserialize, Serialize};

/// The closed set of visual template identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Modern,
    Classic,
    Executive,
}

impl TemplateId {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Executive => "executive",
        }
    }

    /// Parses the stored wire value. Unknown values are a caller error.
    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value {
            "modern" => Some(TemplateId::Modern),
            "classic" => Some(TemplateId::Classic),
            "executive" => Some(TemplateId::Executive),
            _ => None,
        }
    }
}

/// One catalog entry: identity plus the object-storage key of the DOCX asset
/// merged on the document path.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    pub asset_key: &'static str,
}

/// The full fixed catalog, in display order.
pub const RESUME_TEMPLATES: [TemplateInfo; 3] = [
    TemplateInfo {
        id: TemplateId::Modern,
        name: "Modern",
        description: "Clean, minimalist design with bold headings and accent colors. \
                      Perfect for tech and creative roles.",
        asset_key: "templates/modern.docx",
    },
    TemplateInfo {
        id: TemplateId::Classic,
        name: "Classic",
        description: "Traditional, professional layout with serif fonts. \
                      Ideal for corporate and formal positions.",
        asset_key: "templates/classic.docx",
    },
    TemplateInfo {
        id: TemplateId::Executive,
        name: "Executive",
        description: "Sophisticated design with subtle shading and prominent achievements. \
                      Best for senior-level roles.",
        asset_key: "templates/executive.docx",
    },
];

/// Looks up a catalog entry by id.
pub fn template_info(id: TemplateId) -> &'static TemplateInfo {
    match id {
        TemplateId::Modern => &RESUME_TEMPLATES[0],
        TemplateId::Classic => &RESUME_TEMPLATES[1],
        TemplateId::Executive => &RESUME_TEMPLATES[2],
    }
}

/// Per-template styling constants for the paginated visual rendering path.
/// Sizes are px at the renderer's 800px content width; colors are hex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleProfile {
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub font_family: &'static str,
    pub header_size: f32,
    pub section_size: f32,
    pub body_size: f32,
    pub line_height: f32,
    pub section_spacing: f32,
    pub accent_width: f32,
    /// Executive upper-cases section titles.
    pub uppercase_sections: bool,
    /// Classic underlines section titles.
    pub underline_sections: bool,
}

impl StyleProfile {
    pub fn for_template(id: TemplateId) -> StyleProfile {
        match id {
            TemplateId::Modern => StyleProfile {
                primary_color: "#2563eb",
                secondary_color: "#60a5fa",
                font_family: "Helvetica",
                header_size: 24.0,
                section_size: 16.0,
                body_size: 11.0,
                line_height: 1.6,
                section_spacing: 20.0,
                accent_width: 3.0,
                uppercase_sections: false,
                underline_sections: false,
            },
            TemplateId::Classic => StyleProfile {
                primary_color: "#1f2937",
                secondary_color: "#4b5563",
                font_family: "Times",
                header_size: 22.0,
                section_size: 14.0,
                body_size: 11.0,
                line_height: 1.5,
                section_spacing: 18.0,
                accent_width: 1.0,
                uppercase_sections: false,
                underline_sections: true,
            },
            TemplateId::Executive => StyleProfile {
                primary_color: "#0f172a",
                secondary_color: "#334155",
                font_family: "Helvetica",
                header_size: 26.0,
                section_size: 15.0,
                body_size: 11.0,
                line_height: 1.7,
                section_spacing: 22.0,
                accent_width: 2.0,
                uppercase_sections: true,
                underline_sections: false,
            },
        }
    }
}

/// Template-specific formatting instructions appended to the rewrite prompt.
pub fn template_prompt_instructions(id: TemplateId) -> &'static str {
    match id {
        TemplateId::Modern => {
            "MODERN TEMPLATE FORMATTING:\n\
             - Use large, bold headings with clear hierarchy (# for name, ## for sections, ### for subsections)\n\
             - Separate sections with visual breaks\n\
             - Highlight key achievements in callout/quote blocks\n\
             - Use bullet points extensively for readability\n\
             - Keep design minimalistic and clean\n\
             - Use one accent color for emphasis (blue recommended)"
        }
        TemplateId::Classic => {
            "CLASSIC TEMPLATE FORMATTING:\n\
             - Use traditional section headers with underlines\n\
             - Maintain formal, professional tone throughout\n\
             - Use serif-style formatting cues\n\
             - Keep layout conservative and structured\n\
             - Emphasize experience chronologically\n\
             - Use subtle formatting, avoid excessive styling"
        }
        TemplateId::Executive => {
            "EXECUTIVE TEMPLATE FORMATTING:\n\
             - Use ALL CAPS for job titles and section headers\n\
             - Highlight key metrics and achievements prominently\n\
             - Include executive summary at the top\n\
             - Use subtle shading for section separation\n\
             - Emphasize leadership and strategic impact\n\
             - Keep contact info prominent and professional"
        }
    }
}
