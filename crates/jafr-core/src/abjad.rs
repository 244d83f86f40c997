//! The abjad kabir letter table and text summation.
//!
//! Weights follow the classical eastern (mashriqi) ordering:
//!
//! ```text
//! ا1  ب2  ج3  د4  ه5  و6  ز7  ح8  ط9
//! ي10 ك20 ل30 م40 ن50 س60 ع70 ف80 ص90
//! ق100 ر200 ش300 ت400 ث500 خ600 ذ700 ض800 ظ900
//! غ1000
//! ```
//!
//! Variant glyphs carry the weight of their base letter. Anything else,
//! including spaces, Latin letters, digits, punctuation, and diacritics,
//! weighs zero.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::element::{Element, element_of};

/// Abjad weight of a single character, or 0 if it is not an Arabic letter.
#[must_use]
pub const fn char_value(c: char) -> u32 {
    match c {
        // Alef and its hamza/madda/wasla forms, plus the lone hamza.
        'ا' | 'أ' | 'إ' | 'آ' | 'ٱ' | 'ء' => 1,
        'ب' => 2,
        'ج' => 3,
        'د' => 4,
        // Teh marbuta counts as heh.
        'ه' | 'ة' => 5,
        'و' | 'ؤ' => 6,
        'ز' => 7,
        'ح' => 8,
        'ط' => 9,
        // Alef maksura and yeh with hamza count as yeh; Farsi yeh too.
        'ي' | 'ى' | 'ئ' | 'ی' => 10,
        'ك' | 'ک' => 20,
        'ل' => 30,
        'م' => 40,
        'ن' => 50,
        'س' => 60,
        'ع' => 70,
        'ف' => 80,
        'ص' => 90,
        'ق' => 100,
        'ر' => 200,
        'ش' => 300,
        'ت' => 400,
        'ث' => 500,
        'خ' => 600,
        'ذ' => 700,
        'ض' => 800,
        'ظ' => 900,
        'غ' => 1000,
        _ => 0,
    }
}

/// One character of a breakdown, in original string order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LetterValue {
    pub character: char,
    pub value: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<Element>,
}

/// Abjad total of a piece of text, with an optional per-character breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyResult {
    pub total: u64,
    /// Empty unless the breakdown was requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub letters: Vec<LetterValue>,
}

/// Sum the abjad weights of every character in `text`.
///
/// Iterates by `char`, so each multi-byte Arabic letter is one unit.
#[must_use]
pub fn text_value(text: &str) -> NumerologyResult {
    NumerologyResult {
        total: text.chars().map(|c| u64::from(char_value(c))).sum(),
        letters: Vec::new(),
    }
}

/// Like [`text_value`], but also records every character with its weight.
///
/// Zero-weight characters stay in the breakdown so it lines up with the input.
#[must_use]
pub fn text_value_detailed(text: &str) -> NumerologyResult {
    let letters: Vec<LetterValue> = text
        .chars()
        .map(|character| LetterValue {
            character,
            value: char_value(character),
            element: element_of(character),
        })
        .collect();

    NumerologyResult {
        total: letters.iter().map(|l| u64::from(l.value)).sum(),
        letters,
    }
}
