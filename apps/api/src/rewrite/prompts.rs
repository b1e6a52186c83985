#![allow(dead_code)]

// Prompt assembly for the text-rewriting service. The profile and rule text
// are product copy — edit with the product team, not ad hoc.

use crate::models::resume::OptimizationMode;
use crate::templates::{template_prompt_instructions, TemplateId};

/// Role/audience/style framing prepended to every rewrite request.
pub const RESUME_CONTEXT_PROFILE: &str = r#"{
  "identity": {
    "role": "You are a world-class Career Advisor and Resume Writer with 15+ years of experience in HR and talent acquisition.",
    "persona": "The Strategic Optimizer",
    "credentials": "Certified Professional Resume Writer (CPRW), expert in ATS optimization."
  },
  "audience": {
    "profile": "A job seeker who needs a polished, professional resume.",
    "expectations": "Clean, error-free, compelling resume that passes ATS."
  },
  "response_style": {
    "tone": "Professional and Confident",
    "format": "Markdown with clear headers (###).",
    "rules": ["Use power words", "Quantify achievements", "No filler words"]
  }
}"#;

const STRICT_RULES: &str = "\
STRICT MODE RULES (No Hallucinations):\n\
- Transform generic statements into high-impact professional phrases using ONLY the provided information.\n\
- Quantify results whenever the information allows.\n\
- Use powerful action verbs and eliminate passive voice entirely.\n\
- Remove all filler words, repetition, and CV clichés.\n\
- Ensure every bullet point is concise, direct, and optimized for ATS algorithms.\n\
- Maintain US English spelling and grammar consistency.\n\
- Do NOT add new skills, tools, or achievements not explicitly mentioned.\n\
- Do NOT invent facts, dates, or accomplishments.";

const OUTPUT_FORMAT: &str = "\
Output Format:\n\
Return ONLY the resume content in clean Markdown format (# for the name, ### for \
section headers, - for list items). Do not include conversational filler before or after.";

/// Assembles the system prompt: context profile, mode rules, optional
/// tailoring block, template formatting instructions, output contract.
pub fn build_system_prompt(
    mode: OptimizationMode,
    template_id: TemplateId,
    job_description: Option<&str>,
    job_title: Option<&str>,
) -> String {
    let mut prompt = format!(
        "{RESUME_CONTEXT_PROFILE}\n\n\
         Your task is to analyze the user's input and generate a 10/10 resume.\n\n\
         CURRENT MODE: {}\n\n",
        match mode {
            OptimizationMode::Strict => "STRICT FACTUAL (No Hallucinations)",
            OptimizationMode::Boosted => "AI POWER BOOST (Creative Enhancement)",
        }
    );

    match mode {
        OptimizationMode::Strict => prompt.push_str(STRICT_RULES),
        OptimizationMode::Boosted => {
            let title = job_title.unwrap_or("Unknown");
            prompt.push_str(&format!(
                "POWER BOOST MODE RULES (AI Enhancement):\n\
                 - Infer industry-standard skills, tools, and achievements for the \"{title}\" role.\n\
                 - Add ONLY credible, interview-defensible enhancements that align with the user's background.\n\
                 - Never contradict provided information.\n\
                 - Use advanced professional phrasing, active voice, and industry-accepted buzzwords.\n\
                 - Quantify achievements with realistic, plausible metrics.\n\
                 - Fill gaps with high-probability skills that match the job title and industry trends.\n\
                 - Make it sound impressive and senior-level while maintaining credibility.\n\
                 - All additions must be easily justifiable in an interview setting."
            ));
        }
    }

    if let Some(jd) = job_description {
        prompt.push_str(&format!(
            "\n\nTAILOR the resume specifically to this Job Description: \"{jd}\".\n\
             Highlight matching skills and keywords from the description."
        ));
    }

    prompt.push_str("\n\n");
    prompt.push_str(template_prompt_instructions(template_id));
    prompt.push_str("\n\n");
    prompt.push_str(OUTPUT_FORMAT);
    prompt
}

/// User-turn content for the rewrite request.
pub fn build_user_content(raw_content: &str, job_title: Option<&str>) -> String {
    format!(
        "User Job Title: {}\n\nUser Raw Content:\n{}",
        job_title.unwrap_or(""),
        raw_content
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_prompt_forbids_new_facts() {
        let prompt = build_system_prompt(OptimizationMode::Strict, TemplateId::Modern, None, None);
        assert!(prompt.contains("STRICT FACTUAL"));
        assert!(prompt.contains("Do NOT add new skills"));
        assert!(!prompt.contains("POWER BOOST MODE RULES"));
    }

    #[test]
    fn test_boosted_prompt_carries_job_title() {
        let prompt = build_system_prompt(
            OptimizationMode::Boosted,
            TemplateId::Modern,
            None,
            Some("Staff Engineer"),
        );
        assert!(prompt.contains("\"Staff Engineer\" role"));
        assert!(prompt.contains("POWER BOOST MODE RULES"));
    }

    #[test]
    fn test_job_description_adds_tailoring_block() {
        let prompt = build_system_prompt(
            OptimizationMode::Strict,
            TemplateId::Classic,
            Some("Own the billing platform"),
            None,
        );
        assert!(prompt.contains("TAILOR the resume"));
        assert!(prompt.contains("Own the billing platform"));
    }

    #[test]
    fn test_template_instructions_are_appended() {
        let prompt =
            build_system_prompt(OptimizationMode::Strict, TemplateId::Executive, None, None);
        assert!(prompt.contains("EXECUTIVE TEMPLATE FORMATTING"));
    }

    #[test]
    fn test_user_content_shape() {
        let content = build_user_content("raw text", Some("SRE"));
        assert!(content.starts_with("User Job Title: SRE"));
        assert!(content.ends_with("raw text"));
    }
}
