//! Mock content served by the in-memory provider.

use mastery_core::model::{
    AboutContent, Achievement, ActivityEntry, AppPreferences, Difficulty, Feature, FeatureIcon,
    NotificationPrefs, Percent, PhilosophyPoint, PracticeCategory, PracticeSessionTemplate,
    ProblemItem, ProblemOption, ProfileFields, ProgressPoint, ProgressReport, ProgressStats,
    SessionLength, SettingsSnapshot, SkillLevel, SkillMastery, TeamMember, TeamRole,
};
use serde::{Deserialize, Serialize};

/// Everything the views can ask the provider for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockContent {
    pub problem: ProblemItem,
    pub categories: Vec<PracticeCategory>,
    pub session_progress: Percent,
    pub progress: ProgressReport,
    pub features: Vec<Feature>,
    pub about: AboutContent,
    pub settings: SettingsSnapshot,
}

/// Builds the demo data set.
///
/// # Errors
///
/// Returns `mastery_core::Error` if a fixture violates a domain rule.
pub fn mock_content() -> Result<MockContent, mastery_core::Error> {
    Ok(MockContent {
        problem: problem()?,
        categories: categories(),
        session_progress: Percent::new(30)?,
        progress: progress_report()?,
        features: features(),
        about: about(),
        settings: settings(),
    })
}

fn problem() -> Result<ProblemItem, mastery_core::Error> {
    let options = [('A', "36"), ('B', "40"), ('C', "42"), ('D', "44")]
        .into_iter()
        .map(|(id, text)| ProblemOption::new(id, text))
        .collect::<Result<Vec<_>, _>>()?;

    let solution = "\
The gaps between terms grow by two each step:

| step | gap |
|------|-----|
| 2 → 6 | 4 |
| 6 → 12 | 6 |
| 12 → 20 | 8 |
| 20 → 30 | 10 |

The next gap is **12**, so the answer is `30 + 12 = 42` (option **C**).

Each term is also `n × (n + 1)`, which gives `6 × 7 = 42` directly.";

    let quotes = vec![
        "We are what we repeatedly do. Excellence, then, is not an act, but a habit. (Will Durant)"
            .to_string(),
        "The expert in anything was once a beginner. (Helen Hayes)".to_string(),
        "Practice does not make perfect. Only perfect practice makes perfect. (Vince Lombardi)"
            .to_string(),
    ];

    ProblemItem::new(
        "What is the next number in the sequence 2, 6, 12, 20, 30, ...?",
        options,
        solution,
        quotes,
    )
    .map_err(Into::into)
}

fn session(id: &str, name: &str, difficulty: &str, duration: &str) -> PracticeSessionTemplate {
    PracticeSessionTemplate {
        id: id.to_string(),
        name: name.to_string(),
        difficulty: difficulty.to_string(),
        duration: duration.to_string(),
    }
}

fn categories() -> Vec<PracticeCategory> {
    vec![
        PracticeCategory {
            id: "adaptive".to_string(),
            name: "Adaptive Practice".to_string(),
            description: "Automatically adjusts to your skill level".to_string(),
            sessions: vec![
                session("beginner", "Beginner", "Easy", "15 min"),
                session("intermediate", "Intermediate", "Medium", "20 min"),
                session("advanced", "Advanced", "Hard", "30 min"),
            ],
        },
        PracticeCategory {
            id: "timed".to_string(),
            name: "Timed Sessions".to_string(),
            description: "Practice with time constraints".to_string(),
            sessions: vec![
                session("quick", "Quick Session", "Various", "5 min"),
                session("standard", "Standard Session", "Various", "15 min"),
                session("extended", "Extended Session", "Various", "30 min"),
            ],
        },
        PracticeCategory {
            id: "focused".to_string(),
            name: "Focused Practice".to_string(),
            description: "Target specific areas for improvement".to_string(),
            sessions: vec![
                session("weak-areas", "Weak Areas", "Custom", "20 min"),
                session("spaced-repetition", "Spaced Repetition", "Custom", "25 min"),
                session("challenge", "Challenge Mode", "Hard", "15 min"),
            ],
        },
    ]
}

fn progress_report() -> Result<ProgressReport, mastery_core::Error> {
    let series = [
        ("Mon", 65, 25),
        ("Tue", 59, 20),
        ("Wed", 80, 40),
        ("Thu", 81, 30),
        ("Fri", 56, 15),
        ("Sat", 85, 45),
        ("Sun", 90, 60),
    ]
    .into_iter()
    .map(|(day, score, minutes)| ProgressPoint {
        day: day.to_string(),
        score,
        minutes,
    })
    .collect();

    let skills = [
        ("Problem Solving", 75),
        ("Critical Thinking", 65),
        ("Pattern Recognition", 80),
        ("Speed", 60),
        ("Accuracy", 85),
    ]
    .into_iter()
    .map(|(name, mastery)| SkillMastery::new(name, mastery))
    .collect::<Result<Vec<_>, _>>()?;

    let whens = ["Today", "Yesterday", "3 days ago"];
    let difficulties = [Difficulty::Hard, Difficulty::Medium, Difficulty::Easy];
    let mut activity = Vec::with_capacity(whens.len());
    for (ordinal, (when, difficulty)) in (1_u32..).zip(whens.into_iter().zip(difficulties)) {
        activity.push(ActivityEntry {
            ordinal,
            when: when.to_string(),
            problems: 30 - ordinal * 5,
            minutes: 20 + ordinal * 5,
            score: Percent::new(85 - ordinal * 5)?,
            difficulty,
        });
    }

    let achievements = vec![
        achievement(1, "First Session", "Complete your first practice session", true),
        achievement(2, "Quick Learner", "Complete 5 consecutive daily sessions", true),
        achievement(3, "Persistence", "Practice for 10 days total", false),
        achievement(4, "Perfectionist", "Score 100% in any session", false),
    ];

    Ok(ProgressReport {
        stats: ProgressStats {
            total_practice_minutes: 24 * 60 + 35,
            practice_change_pct: 12,
            streak_days: 7,
            streak_gain_days: 3,
            achievements_completed: 2,
            achievements_total: 10,
        },
        series,
        skills,
        activity,
        achievements,
    })
}

fn achievement(id: u32, name: &str, description: &str, completed: bool) -> Achievement {
    Achievement {
        id,
        name: name.to_string(),
        description: description.to_string(),
        completed,
    }
}

fn features() -> Vec<Feature> {
    let feature = |title: &str, body: &str, icon| Feature {
        title: title.to_string(),
        body: body.to_string(),
        icon,
    };
    vec![
        feature(
            "Deliberate Practice",
            "Structured exercises designed to target specific skills and push your boundaries.",
            FeatureIcon::Zap,
        ),
        feature(
            "Adaptive Learning",
            "Our system adjusts to your skill level, ensuring optimal challenge for faster growth.",
            FeatureIcon::Brain,
        ),
        feature(
            "Progress Tracking",
            "Visualize your improvement over time with detailed analytics and insights.",
            FeatureIcon::LineChart,
        ),
        feature(
            "Performance Analysis",
            "Identify strengths and weaknesses to optimize your practice sessions.",
            FeatureIcon::BarChart,
        ),
    ]
}

fn about() -> AboutContent {
    let point = |title: &str, body: &str| PhilosophyPoint {
        title: title.to_string(),
        body: body.to_string(),
    };
    AboutContent {
        mission: "We're dedicated to transforming how people learn through deliberate practice \
                  and scientifically proven methods that lead to mastery in any field."
            .to_string(),
        story: vec![
            "Mastery was born from a simple observation: traditional learning approaches often \
             fail to produce true expertise. We saw that deliberate, focused practice was the key \
             element missing from most educational platforms."
                .to_string(),
            "Founded in 2023 by a team of learning scientists, educators, and software engineers, \
             we set out to build a platform that applies the principles of deliberate practice to \
             help anyone achieve mastery in their chosen field."
                .to_string(),
            "Our approach is based on decades of research into how experts develop their skills, \
             combining the science of learning with intuitive design to create an experience that \
             naturally guides you toward improvement."
                .to_string(),
        ],
        philosophy: vec![
            point(
                "Deliberate Practice",
                "We believe that true mastery comes from focused, intentional practice that \
                 targets specific skills with immediate feedback and continuous adaptation.",
            ),
            point(
                "Scientifically Proven",
                "Every feature of our platform is based on research in cognitive science, \
                 learning theory, and expertise development to ensure efficient skill acquisition.",
            ),
            point(
                "Human-Centered Design",
                "We create intuitive, beautiful interfaces that remove friction from the learning \
                 process, allowing you to focus entirely on developing your skills.",
            ),
        ],
        team: (1..=6)
            .map(|slot| TeamMember {
                name: format!("Team Member {slot}"),
                role: TeamRole::for_slot(slot),
            })
            .collect(),
    }
}

fn settings() -> SettingsSnapshot {
    SettingsSnapshot {
        profile: ProfileFields {
            full_name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            bio: "I'm passionate about learning and self-improvement.".to_string(),
        },
        notifications: NotificationPrefs {
            email: true,
            practice_reminders: true,
            progress_updates: true,
            new_features: false,
            marketing: false,
        },
        preferences: AppPreferences {
            dark_mode: false,
            session_length: SessionLength::Minutes15,
            default_difficulty: SkillLevel::Beginner,
            sound_effects: true,
            animations: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_content_builds() {
        let content = mock_content().unwrap();
        assert_eq!(content.problem.options().len(), 4);
        assert_eq!(content.categories.len(), 3);
        assert_eq!(content.session_progress.value(), 30);
        assert_eq!(content.features.len(), 4);
        assert_eq!(content.about.team.len(), 6);
    }

    #[test]
    fn activity_rows_follow_ordinal_formula() {
        let report = progress_report().unwrap();
        let rows: Vec<(u32, u32, u8)> = report
            .activity
            .iter()
            .map(|row| (row.problems, row.minutes, row.score.value()))
            .collect();
        assert_eq!(rows, vec![(25, 25, 80), (20, 30, 75), (15, 35, 70)]);
        assert_eq!(report.activity[0].difficulty, Difficulty::Hard);
        assert_eq!(report.activity[2].when, "3 days ago");
    }
}
