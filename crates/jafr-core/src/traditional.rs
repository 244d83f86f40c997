//! Assembles [`TraditionalResults`] from a request.

use crate::abjad::{NumerologyResult, text_value, text_value_detailed};
use crate::element::dominant_element;
use crate::meaning::{Category, classify_meaning};
use crate::reduce::{birth_date_value, magic_square_size, reduce_to_single_digit};
use crate::request::AnalysisRequest;
use crate::responses::{FieldResult, TraditionalResults};

/// Run the numerology engine over every field of `request`.
///
/// Infallible: callers validate the request first, but an unvalidated one
/// still produces zeros and default labels rather than an error.
#[must_use]
pub fn compute_traditional(request: &AnalysisRequest) -> TraditionalResults {
    let details = request.options.numerology_details;
    let evaluate = |text: &str| {
        if details {
            text_value_detailed(text)
        } else {
            text_value(text)
        }
    };

    let name = field(evaluate(&request.name), Category::Name);
    let mother = field(evaluate(&request.mother_name), Category::Mother);
    let question = field(evaluate(&request.question), Category::Question);
    let birth = request.birth_date.as_deref().map(|date| {
        field(
            NumerologyResult {
                total: birth_date_value(date),
                letters: Vec::new(),
            },
            Category::Birth,
        )
    });

    let combined_total = name.total + mother.total;
    let reduced_value = reduce_to_single_digit(combined_total);
    let combined_text = format!("{}{}", request.name, request.mother_name);

    TraditionalResults {
        name,
        mother,
        question,
        birth,
        combined_total,
        reduced_value,
        magic_square_size: magic_square_size(reduced_value),
        dominant_element: dominant_element(&combined_text),
    }
}

fn field(result: NumerologyResult, category: Category) -> FieldResult {
    FieldResult {
        total: result.total,
        reduced: reduce_to_single_digit(result.total),
        meaning: classify_meaning(result.total, category).to_string(),
        letters: result.letters,
    }
}
