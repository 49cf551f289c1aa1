// src/letters/variant.rs

use rand::Rng;
use serde::Serialize;

/// Stylistic flavour of a letter. Independent of the financial category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    V1,
    V2,
    V3,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::V1, Variant::V2, Variant::V3];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::V1 => "v1",
            Variant::V2 => "v2",
            Variant::V3 => "v3",
        }
    }

    /// Accepts `v2`, `V2`, `2`, or a full template tag such as `standard:v2`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let tail = raw.rsplit(':').next().unwrap_or(raw).trim();
        let digits = tail
            .strip_prefix('v')
            .or_else(|| tail.strip_prefix('V'))
            .unwrap_or(tail);

        match digits {
            "1" => Some(Variant::V1),
            "2" => Some(Variant::V2),
            "3" => Some(Variant::V3),
            _ => None,
        }
    }
}

/// Source of variants for rows that do not name one.
///
/// Blanket-implemented for every `rand::Rng`, so production code passes
/// `thread_rng()` and tests pass a seeded `StdRng` or a fixed picker.
pub trait VariantSource {
    fn pick(&mut self) -> Variant;
}

impl<R: Rng + ?Sized> VariantSource for R {
    fn pick(&mut self) -> Variant {
        Variant::ALL[self.gen_range(0..Variant::ALL.len())]
    }
}
