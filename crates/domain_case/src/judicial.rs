//! The Algerian judicial hierarchy
//!
//! Four tiers hear cases: the tribunal (first instance), the court of
//! appeal, the supreme court, and the council of state. Each tier has its
//! own fixed set of sections or chambers; a case's section must belong to
//! the list of its level.
//!
//! The two top tiers sit only in Algiers: whatever the caller supplies,
//! their cases carry the wilaya `الجزائر` and the tier's own name as the
//! court.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wilaya of the fixed seat shared by the supreme court and the council
/// of state.
pub const FIXED_SEAT_WILAYA: &str = "الجزائر";

/// A tier of the judicial hierarchy.
///
/// Serialized as the full bilingual label used throughout the persisted
/// documents and the entry forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JudicialLevel {
    /// First-instance tribunal
    #[serde(rename = "المحكمة (Tribunal)")]
    Tribunal,
    /// Court of appeal
    #[serde(rename = "مجلس القضاء (Cour d’appel)")]
    CourtOfAppeal,
    /// Supreme court (sits in Algiers)
    #[serde(rename = "المحكمة العليا (Cour Suprême)")]
    SupremeCourt,
    /// Council of state (sits in Algiers)
    #[serde(rename = "مجلس الدولة (Conseil d’État)")]
    CouncilOfState,
}

impl JudicialLevel {
    /// Returns the bilingual display label, identical to the wire form.
    pub fn label(&self) -> &'static str {
        match self {
            JudicialLevel::Tribunal => "المحكمة (Tribunal)",
            JudicialLevel::CourtOfAppeal => "مجلس القضاء (Cour d’appel)",
            JudicialLevel::SupremeCourt => "المحكمة العليا (Cour Suprême)",
            JudicialLevel::CouncilOfState => "مجلس الدولة (Conseil d’État)",
        }
    }

    /// Returns the sections (tribunal) or chambers (higher tiers) this
    /// level hears.
    pub fn sections(&self) -> &'static [&'static str] {
        match self {
            JudicialLevel::Tribunal => &[
                "القسم المدني",
                "القسم العقاري",
                "القسم التجاري",
                "القسم الاجتماعي",
                "القسم الاستعجالي",
                "قسم شؤون الأسرة",
                "القسم الجزائي (الجنح)",
                "قسم الأحداث",
            ],
            JudicialLevel::CourtOfAppeal => &[
                "الغرفة المدنية",
                "الغرفة العقارية",
                "الغرفة التجارية",
                "الغرفة الاجتماعية",
                "الغرفة الاستعجالية",
                "غرفة شؤون الأسرة",
                "الغرفة الجزائية",
                "غرفة الأحداث",
            ],
            JudicialLevel::SupremeCourt => &[
                "الغرفة المدنية",
                "الغرفة العقارية",
                "الغرفة التجارية والبحرية",
                "الغرفة الاجتماعية",
                "الغرفة الجنائية",
                "غرفة الجنح والمخالفات",
                "غرفة الأحداث",
                "غرفة شؤون الأسرة",
            ],
            JudicialLevel::CouncilOfState => &[
                "الغرفة الأولى",
                "الغرفة الثانية",
                "الغرفة الثالثة",
                "الغرفة الرابعة",
                "الغرفة الخامسة",
                "الغرفة السادسة",
            ],
        }
    }

    /// Returns whether `section` belongs to this level's list.
    pub fn has_section(&self, section: &str) -> bool {
        self.sections().contains(&section)
    }

    /// Returns the forced `(wilaya, court)` pair for levels with a fixed
    /// seat, or `None` for levels where the caller picks the court.
    pub fn fixed_seat(&self) -> Option<(&'static str, &'static str)> {
        match self {
            JudicialLevel::SupremeCourt | JudicialLevel::CouncilOfState => {
                Some((FIXED_SEAT_WILAYA, self.label()))
            }
            JudicialLevel::Tribunal | JudicialLevel::CourtOfAppeal => None,
        }
    }
}

impl fmt::Display for JudicialLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [JudicialLevel; 4] = [
        JudicialLevel::Tribunal,
        JudicialLevel::CourtOfAppeal,
        JudicialLevel::SupremeCourt,
        JudicialLevel::CouncilOfState,
    ];

    #[test]
    fn test_serde_round_trips_through_label() {
        for level in ALL {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.label()));
            let back: JudicialLevel = serde_json::from_str(&json).unwrap();
            assert_eq!(level, back);
        }
    }

    #[test]
    fn test_every_listed_section_is_accepted() {
        for level in ALL {
            for section in level.sections() {
                assert!(level.has_section(section));
            }
        }
    }

    #[test]
    fn test_tribunal_sections_do_not_leak_into_council() {
        assert!(JudicialLevel::Tribunal.has_section("القسم المدني"));
        assert!(!JudicialLevel::CouncilOfState.has_section("القسم المدني"));
    }

    #[test]
    fn test_fixed_seat_only_for_top_tiers() {
        assert!(JudicialLevel::Tribunal.fixed_seat().is_none());
        assert!(JudicialLevel::CourtOfAppeal.fixed_seat().is_none());

        let (wilaya, court) = JudicialLevel::SupremeCourt.fixed_seat().unwrap();
        assert_eq!(wilaya, FIXED_SEAT_WILAYA);
        assert_eq!(court, "المحكمة العليا (Cour Suprême)");

        let (wilaya, court) = JudicialLevel::CouncilOfState.fixed_seat().unwrap();
        assert_eq!(wilaya, "الجزائر");
        assert_eq!(court, "مجلس الدولة (Conseil d’État)");
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let result: Result<JudicialLevel, _> = serde_json::from_str("\"المحكمة الإدارية\"");
        assert!(result.is_err());
    }
}
