// Data carried between the LinkedIn optimizer steps
use crate::types::{ExperienceEntry, LinkedInProfile, Priority, ProfileAnalysis, ProfileSuggestion};
use serde::{Deserialize, Serialize};

/// Profile data imported from LinkedIn or typed in by hand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub headline: String,
    pub about: String,
    pub experience: String,
    pub skills: Vec<String>,
}

impl ProfileSnapshot {
    pub fn is_empty(&self) -> bool {
        self.headline.is_empty()
            && self.about.is_empty()
            && self.experience.is_empty()
            && self.skills.is_empty()
    }

    /// Store record for the signed-in user's imported profile.
    pub fn to_profile(&self, id: &str, name: &str) -> LinkedInProfile {
        let experience = if self.experience.is_empty() {
            Vec::new()
        } else {
            vec![ExperienceEntry {
                title: self.experience.clone(),
                company: String::new(),
                duration: String::new(),
            }]
        };
        LinkedInProfile {
            id: id.to_string(),
            name: name.to_string(),
            headline: self.headline.clone(),
            summary: self.about.clone(),
            experience,
            skills: self.skills.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Executive,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Entry,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Executive,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Executive => "executive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry Level (0-2 years)",
            ExperienceLevel::Mid => "Mid Level (3-5 years)",
            ExperienceLevel::Senior => "Senior Level (6-10 years)",
            ExperienceLevel::Executive => "Executive Level (10+ years)",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.value() == value)
    }
}

/// Step 2 input as the user types it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetInfoDraft {
    pub target_role: String,
    pub location: String,
    pub industry: String,
    pub experience_level: Option<ExperienceLevel>,
    pub target_skills: String,
    // Only shown for manual entry
    pub current_headline: String,
    pub current_about: String,
    pub current_skills: String,
}

impl TargetInfoDraft {
    /// Whether "Start Analysis" may be pressed.
    pub fn is_complete(&self) -> bool {
        !self.target_role.is_empty()
            && !self.location.is_empty()
            && !self.industry.is_empty()
            && self.experience_level.is_some()
    }

    pub fn to_target(&self) -> Option<TargetInfo> {
        if !self.is_complete() {
            return None;
        }
        Some(TargetInfo {
            target_role: self.target_role.trim().to_string(),
            location: self.location.trim().to_string(),
            industry: self.industry.trim().to_string(),
            experience_level: self.experience_level?,
            target_skills: split_list(&self.target_skills),
        })
    }

    pub fn manual_snapshot(&self) -> Option<ProfileSnapshot> {
        let snapshot = ProfileSnapshot {
            headline: self.current_headline.trim().to_string(),
            about: self.current_about.trim().to_string(),
            experience: String::new(),
            skills: split_list(&self.current_skills),
        };
        (!snapshot.is_empty()).then_some(snapshot)
    }

    /// Re-fills the form when the user steps back from a later step.
    pub fn from_target(target: &TargetInfo, manual: Option<&ProfileSnapshot>) -> Self {
        let mut draft = Self {
            target_role: target.target_role.clone(),
            location: target.location.clone(),
            industry: target.industry.clone(),
            experience_level: Some(target.experience_level),
            target_skills: target.target_skills.join(", "),
            ..Self::default()
        };
        if let Some(snapshot) = manual {
            draft.current_headline = snapshot.headline.clone();
            draft.current_about = snapshot.about.clone();
            draft.current_skills = snapshot.skills.join(", ");
        }
        draft
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetInfo {
    pub target_role: String,
    pub location: String,
    pub industry: String,
    pub experience_level: ExperienceLevel,
    pub target_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub current_profile: Option<ProfileSnapshot>,
    pub target: TargetInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorProfiles {
    pub count: u32,
    pub top_headlines: Vec<String>,
    pub top_skills: Vec<String>,
    pub common_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMap {
    pub industry_keywords: Vec<String>,
    pub role_keywords: Vec<String>,
    pub location_keywords: Vec<String>,
    pub skill_keywords: Vec<String>,
}

impl KeywordMap {
    /// Count shown in the progress card. Location keywords are not included.
    pub fn headline_count(&self) -> usize {
        self.industry_keywords.len() + self.role_keywords.len() + self.skill_keywords.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub missing_keywords: Vec<String>,
    pub keyword_usage_comparison: String,
    pub profile_completeness: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedContent {
    pub headline: String,
    pub about: String,
    pub experience_bullets: Vec<String>,
    pub suggested_skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub keywords: u8,
    pub structure: u8,
    pub completeness: u8,
    pub gaps: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoScore {
    pub total: u8,
    pub breakdown: ScoreBreakdown,
}

impl SeoScore {
    pub fn verdict(&self) -> &'static str {
        match self.total {
            80.. => "Excellent! Your profile is highly optimized",
            60..=79 => "Good! Room for improvement",
            _ => "Needs work - Follow our recommendations",
        }
    }
}

/// Everything the analysis produces. It arrives as one unit, so the
/// results step never sees a partially filled report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub competitor_profiles: CompetitorProfiles,
    pub keyword_map: KeywordMap,
    pub gap_analysis: GapAnalysis,
    pub optimized_content: OptimizedContent,
    pub seo_score: SeoScore,
}

impl AnalysisReport {
    /// Condensed form kept in the linkedin store.
    pub fn summary(&self) -> ProfileAnalysis {
        let breakdown = self.seo_score.breakdown;
        let categories = [
            ("Keywords", breakdown.keywords),
            ("Structure", breakdown.structure),
            ("Completeness", breakdown.completeness),
            ("Gaps", breakdown.gaps),
        ];

        ProfileAnalysis {
            score: u32::from(self.seo_score.total),
            suggestions: self
                .gap_analysis
                .missing_keywords
                .iter()
                .map(|keyword| ProfileSuggestion {
                    category: "Keywords".to_string(),
                    suggestion: format!("Add \"{}\" to your headline or about section", keyword),
                    priority: Priority::High,
                })
                .collect(),
            strengths: categories
                .iter()
                .filter(|(_, score)| *score >= 80)
                .map(|(name, _)| name.to_string())
                .collect(),
            weaknesses: categories
                .iter()
                .filter(|(_, score)| *score < 75)
                .map(|(name, _)| name.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_to_profile() {
        let snapshot = ProfileSnapshot {
            headline: "Engineer".to_string(),
            about: "Builds things".to_string(),
            experience: String::new(),
            skills: vec!["Rust".to_string()],
        };

        let profile = snapshot.to_profile("u-1", "Jane Doe");
        assert_eq!(profile.summary, "Builds things");
        assert!(profile.experience.is_empty());
        assert_eq!(profile.skills, vec!["Rust".to_string()]);
    }

    fn score(total: u8) -> SeoScore {
        SeoScore {
            total,
            breakdown: ScoreBreakdown {
                keywords: 72,
                structure: 85,
                completeness: 80,
                gaps: 75,
            },
        }
    }

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(score(80).verdict(), "Excellent! Your profile is highly optimized");
        assert_eq!(score(79).verdict(), "Good! Room for improvement");
        assert_eq!(score(60).verdict(), "Good! Room for improvement");
        assert_eq!(score(59).verdict(), "Needs work - Follow our recommendations");
    }

    #[test]
    fn test_draft_completeness() {
        let mut draft = TargetInfoDraft {
            target_role: "Senior Engineer".to_string(),
            location: "Remote".to_string(),
            industry: "Technology".to_string(),
            ..TargetInfoDraft::default()
        };
        assert!(!draft.is_complete());

        draft.experience_level = Some(ExperienceLevel::Senior);
        assert!(draft.is_complete());

        draft.location = String::new();
        assert!(!draft.is_complete());
        assert_eq!(draft.to_target(), None);
    }

    #[test]
    fn test_whitespace_fields_count_as_filled() {
        let draft = TargetInfoDraft {
            target_role: " ".to_string(),
            location: "Remote".to_string(),
            industry: "Technology".to_string(),
            experience_level: Some(ExperienceLevel::Mid),
            ..TargetInfoDraft::default()
        };
        assert!(draft.is_complete());
        assert_eq!(draft.to_target().map(|t| t.target_role), Some(String::new()));
    }

    #[test]
    fn test_target_skills_are_split() {
        let draft = TargetInfoDraft {
            target_role: "Data Scientist".to_string(),
            location: "Berlin".to_string(),
            industry: "Finance".to_string(),
            experience_level: Some(ExperienceLevel::Mid),
            target_skills: "Python, , Machine Learning ,SQL".to_string(),
            ..TargetInfoDraft::default()
        };

        let target = draft.to_target().unwrap();
        assert_eq!(target.target_skills, vec!["Python", "Machine Learning", "SQL"]);
        assert_eq!(draft.manual_snapshot(), None);
    }

    #[test]
    fn test_experience_level_values() {
        for level in ExperienceLevel::ALL {
            assert_eq!(ExperienceLevel::from_value(level.value()), Some(level));
        }
        assert_eq!(ExperienceLevel::from_value(""), None);
    }
}
