use serde::{Deserialize, Serialize};

/// Icon shown next to a feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureIcon {
    Zap,
    Brain,
    LineChart,
    BarChart,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub body: String,
    pub icon: FeatureIcon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhilosophyPoint {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamRole {
    LearningScientist,
    SoftwareEngineer,
    ProductDesigner,
}

impl TeamRole {
    /// Role assignment for the 1-based member slot on the about page.
    #[must_use]
    pub fn for_slot(slot: u32) -> Self {
        if slot % 2 == 0 {
            TeamRole::LearningScientist
        } else if slot % 3 == 0 {
            TeamRole::SoftwareEngineer
        } else {
            TeamRole::ProductDesigner
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TeamRole::LearningScientist => "Learning Scientist",
            TeamRole::SoftwareEngineer => "Software Engineer",
            TeamRole::ProductDesigner => "Product Designer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: TeamRole,
}

/// Copy for the about page, served by the content provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub mission: String,
    pub story: Vec<String>,
    pub philosophy: Vec<PhilosophyPoint>,
    pub team: Vec<TeamMember>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_follow_slot_rule() {
        let roles: Vec<TeamRole> = (1..=6).map(TeamRole::for_slot).collect();
        assert_eq!(
            roles,
            vec![
                TeamRole::ProductDesigner,
                TeamRole::LearningScientist,
                TeamRole::SoftwareEngineer,
                TeamRole::LearningScientist,
                TeamRole::ProductDesigner,
                TeamRole::LearningScientist,
            ]
        );
    }
}
