//! Elemental nature of the Arabic letters.
//!
//! The 28 letters, taken in abjad order, cycle through fire, air, water, and
//! earth. Variant glyphs share the element of their base letter.
//!
//! ```text
//! fire   ا ه ط م ف ش ذ
//! air    ب و ي ن ص ت ض
//! water  ج ز ك س ق ث ظ
//! earth  د ح ل ع ر خ غ
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Air,
    Water,
    Earth,
}

impl Element {
    /// Tie-break order for [`dominant_element`].
    pub const ALL: [Self; 4] = [Self::Fire, Self::Air, Self::Water, Self::Earth];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Air => "air",
            Self::Water => "water",
            Self::Earth => "earth",
        }
    }

    /// Arabic name, used in prompts and the combined interpretation.
    #[must_use]
    pub const fn arabic_name(self) -> &'static str {
        match self {
            Self::Fire => "ناري",
            Self::Air => "هوائي",
            Self::Water => "مائي",
            Self::Earth => "ترابي",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Element of an Arabic letter, or `None` for anything else.
#[must_use]
pub const fn element_of(c: char) -> Option<Element> {
    match c {
        'ا' | 'أ' | 'إ' | 'آ' | 'ٱ' | 'ء' | 'ه' | 'ة' | 'ط' | 'م' | 'ف' | 'ش' | 'ذ' => {
            Some(Element::Fire)
        }
        'ب' | 'و' | 'ؤ' | 'ي' | 'ى' | 'ئ' | 'ی' | 'ن' | 'ص' | 'ت' | 'ض' => Some(Element::Air),
        'ج' | 'ز' | 'ك' | 'ک' | 'س' | 'ق' | 'ث' | 'ظ' => Some(Element::Water),
        'د' | 'ح' | 'ل' | 'ع' | 'ر' | 'خ' | 'غ' => Some(Element::Earth),
        _ => None,
    }
}

/// The element with the most letters in `text`.
///
/// Ties go to the earlier element in [`Element::ALL`]. Returns `None` when the
/// text holds no Arabic letters.
#[must_use]
pub fn dominant_element(text: &str) -> Option<Element> {
    let mut counts = [0usize; 4];
    for element in text.chars().filter_map(element_of) {
        counts[element as usize] += 1;
    }

    let mut best: Option<(Element, usize)> = None;
    for element in Element::ALL {
        let count = counts[element as usize];
        if count > 0 && best.is_none_or(|(_, n)| count > n) {
            best = Some((element, count));
        }
    }
    best.map(|(element, _)| element)
}
