//! Prompt rendering and narrative section parsing.
//!
//! The prompt asks the oracle for three headed sections. [`parse_sections`]
//! splits the reply back along those headings.

use std::fmt::Write as _;

use jafr_config::OracleConfig;
use jafr_core::AnalysisRequest;
use jafr_core::abjad::LetterValue;
use jafr_core::responses::{AiAnalysis, FieldResult, TraditionalResults};
use jafr_oracle::NarrativeRequest;

pub const INTERPRETATION_HEADING: &str = "التفسير";
pub const GUIDANCE_HEADING: &str = "الإرشاد الروحي";
pub const RECOMMENDATIONS_HEADING: &str = "التوصيات";

const SYSTEM_PROMPT: &str = "أنت خبير في علم الحروف وحساب الجُمّل (الأبجد الكبير) وعلم الجفر. \
قدّم قراءة روحية متزنة وإيجابية باللغة العربية الفصحى، مبنية على الأرقام المعطاة فقط. \
لا تقدّم تنبؤات قطعية ولا نصائح طبية أو مالية أو قانونية.";

/// Render the oracle prompt for one request and its computed numbers.
#[must_use]
pub fn render(
    request: &AnalysisRequest,
    results: &TraditionalResults,
    config: &OracleConfig,
) -> NarrativeRequest {
    let options = request.options;
    let mut user = String::new();

    let _ = writeln!(user, "الاسم: {}", request.name);
    let _ = writeln!(user, "اسم الأم: {}", request.mother_name);
    let _ = writeln!(user, "السؤال: {}", request.question);
    if let Some(date) = &request.birth_date {
        let _ = writeln!(user, "تاريخ الميلاد: {date}");
    }

    user.push_str("\nالنتائج بحساب الجُمّل:\n");
    push_field(&mut user, "قيمة الاسم", &results.name, options.numerology_details);
    push_field(&mut user, "قيمة اسم الأم", &results.mother, options.numerology_details);
    push_field(&mut user, "قيمة السؤال", &results.question, options.numerology_details);
    if let Some(birth) = &results.birth {
        push_field(&mut user, "قيمة تاريخ الميلاد", birth, false);
    }
    let _ = writeln!(
        user,
        "- المجموع الكلي (الاسم + الأم): {} ويختزل إلى {}",
        results.combined_total, results.reduced_value
    );
    let _ = writeln!(
        user,
        "- رتبة الوفق المناسب: {0}×{0}",
        results.magic_square_size
    );
    if let Some(element) = results.dominant_element {
        let _ = writeln!(user, "- الطبع الغالب على الحروف: {}", element.arabic_name());
    }

    user.push_str("\nالمطلوب:\n");
    if options.deep_analysis {
        user.push_str(
            "- قدّم تحليلاً معمقاً متعدد المستويات يربط بين دلالة كل رقم والطبع الغالب ورتبة الوفق.\n",
        );
    } else {
        user.push_str("- قدّم تحليلاً موجزاً وواضحاً.\n");
    }
    if options.contextual_interpretation {
        user.push_str("- اربط القراءة بألفاظ السؤال ومقصده مباشرة.\n");
    }
    let _ = writeln!(
        user,
        "- اكتب الإجابة في ثلاثة أقسام بالعناوين التالية حرفياً:\n\
         ### {INTERPRETATION_HEADING}\n### {GUIDANCE_HEADING}\n### {RECOMMENDATIONS_HEADING}"
    );

    NarrativeRequest {
        system: SYSTEM_PROMPT.to_string(),
        user,
        max_tokens: if options.deep_analysis {
            config.deep_max_tokens
        } else {
            config.max_tokens
        },
    }
}

fn push_field(out: &mut String, label: &str, field: &FieldResult, details: bool) {
    let _ = writeln!(
        out,
        "- {label}: {} (يختزل إلى {}) - {}",
        field.total, field.reduced, field.meaning
    );
    if details && !field.letters.is_empty() {
        let _ = writeln!(out, "  تفصيل الحروف: {}", breakdown(&field.letters));
    }
}

fn breakdown(letters: &[LetterValue]) -> String {
    letters
        .iter()
        .filter(|l| l.value > 0)
        .map(|l| format!("{}={}", l.character, l.value))
        .collect::<Vec<_>>()
        .join("، ")
}

#[derive(Clone, Copy)]
enum Section {
    Interpretation,
    Guidance,
    Recommendations,
}

/// Split an oracle reply into its three sections.
///
/// Heading lines may carry markdown decoration (`#`, `*`) and a trailing
/// colon. Text before the first heading belongs to the interpretation. A
/// reply with no recognised headings becomes the interpretation as a whole.
#[must_use]
pub fn parse_sections(text: &str) -> AiAnalysis {
    let mut sections = [String::new(), String::new(), String::new()];
    let mut current = Section::Interpretation;

    for line in text.lines() {
        if let Some(section) = heading(line) {
            current = section;
            continue;
        }
        let buf = &mut sections[current as usize];
        buf.push_str(line);
        buf.push('\n');
    }

    let [interpretation, guidance, recommendations] = sections.map(|s| s.trim().to_string());
    AiAnalysis {
        interpretation,
        spiritual_guidance: guidance,
        recommendations,
    }
}

fn heading(line: &str) -> Option<Section> {
    let bare = line
        .trim()
        .trim_start_matches(['#', '*', ' '])
        .trim_end_matches(['*', ':', ' ']);
    match bare {
        INTERPRETATION_HEADING => Some(Section::Interpretation),
        GUIDANCE_HEADING => Some(Section::Guidance),
        RECOMMENDATIONS_HEADING => Some(Section::Recommendations),
        _ => None,
    }
}
