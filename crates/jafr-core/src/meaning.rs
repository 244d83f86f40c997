//! Per-category meaning tables.
//!
//! Each category has nine short phrases, one per reduced digit 1 through 9.
//! A value reducing to 0 has no entry and gets [`DEFAULT_MEANING`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::reduce::reduce_to_single_digit;

/// Label for a digit outside the 1–9 table domain.
pub const DEFAULT_MEANING: &str = "لا يوجد وصف متاح";

/// Which input a numeric value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Name,
    Mother,
    Birth,
    Question,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Mother => "mother",
            Self::Birth => "birth",
            Self::Question => "question",
        }
    }

    const fn table(self) -> &'static [&'static str; 9] {
        match self {
            Self::Name => &NAME_MEANINGS,
            Self::Mother => &MOTHER_MEANINGS,
            Self::Birth => &BIRTH_MEANINGS,
            Self::Question => &QUESTION_MEANINGS,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const NAME_MEANINGS: [&str; 9] = [
    "القيادة والاستقلال وروح المبادرة",
    "التعاون والحساسية والميل إلى السلام",
    "الإبداع والتعبير والبهجة",
    "الثبات والنظام والعمل الدؤوب",
    "الحرية وحب التغيير والمغامرة",
    "المسؤولية والرعاية وحب الأسرة",
    "الحكمة والتأمل والبحث عن الحقيقة",
    "القوة والطموح والنجاح المادي",
    "العطاء والإنسانية والكمال الروحي",
];

const MOTHER_MEANINGS: [&str; 9] = [
    "أصل قوي يمنح الثقة بالنفس",
    "حنان يورث الرقة وحسن المعاشرة",
    "بيئة مشجعة على التعبير والإبداع",
    "جذور راسخة تمنح الاستقرار",
    "نشأة منفتحة تدفع إلى الاستكشاف",
    "رعاية عميقة تغرس الإحساس بالواجب",
    "ميراث روحي يدعو إلى التأمل",
    "سند متين يعين على مواجهة الصعاب",
    "بركة ودعاء يحيطان بصاحب الاسم",
];

const BIRTH_MEANINGS: [&str; 9] = [
    "ولادة تحت طالع البدايات الجديدة",
    "ولادة تحت طالع الشراكة والتوازن",
    "ولادة تحت طالع التواصل والفرح",
    "ولادة تحت طالع البناء والصبر",
    "ولادة تحت طالع الحركة والأسفار",
    "ولادة تحت طالع المحبة والانسجام",
    "ولادة تحت طالع الأسرار والمعرفة",
    "ولادة تحت طالع السلطة والإنجاز",
    "ولادة تحت طالع الختام والتجدد",
];

const QUESTION_MEANINGS: [&str; 9] = [
    "بداية أمر جديد يحتاج إلى الجرأة",
    "أمر يتوقف على التفاهم مع الآخرين",
    "فرج قريب يأتي عبر الكلمة الطيبة",
    "أمر يحتاج إلى صبر وتخطيط",
    "تغيير قادم يحمل فرصة",
    "شأن عائلي أو عاطفي يطلب الحكمة",
    "أمر خفي يتضح بالتأمل والدعاء",
    "مسألة مادية تنفرج بالاجتهاد",
    "نهاية مرحلة وبداية أخرى أفضل",
];

/// Short descriptive phrase for `value` within `category`.
///
/// The value is reduced with [`reduce_to_single_digit`] first. A reduced
/// digit of 0 has no entry and yields [`DEFAULT_MEANING`].
#[must_use]
pub fn classify_meaning(value: u64, category: Category) -> &'static str {
    let digit = reduce_to_single_digit(value);
    match digit {
        1..=9 => category.table()[usize::from(digit - 1)],
        _ => DEFAULT_MEANING,
    }
}
